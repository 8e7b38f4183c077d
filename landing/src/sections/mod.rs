// Hero section building blocks
// Developed with 🌿 by The MakhanaCo Team (c)2025

mod background;
mod brand;
mod bowl;
mod bulk_order;
mod content;
mod hero;
mod kernels;

pub use background::AliveBackground;
pub use brand::BrandNav;
pub use bowl::Bowl;
pub use bulk_order::BulkOrderCard;
pub use content::{CenterContent, fade_in_up_style};
pub use hero::HeroSection;
pub use kernels::{KernelField, kernel_class, kernel_style};
