//! # kernel-scatter
//!
//! Procedural placement for the decorative makhana kernels floating around
//! the MakhanaCo hero section.
//!
//! Kernels are scattered across the left and right halves of a normalized
//! percentage plane (`x`, `y` in `0..=100`, origin top-left) and kept out of
//! a reserved [`SafeZone`] that holds the headline and the bowl.
//!
//! ## Quick Start
//!
//! ```rust
//! use kernel_scatter::{Scatter, ScatterConfig, SafeZone, seeded};
//!
//! let scatter = Scatter::new(ScatterConfig::default()).unwrap();
//! let kernels = scatter.generate(&mut seeded(42));
//!
//! assert_eq!(kernels.len(), 24);
//! assert!(kernels.iter().all(|k| !SafeZone::HERO.contains(k.x, k.y)));
//! ```
//!
//! ## Modules
//!
//! - [`scatter`] - the generator, its config and the repulsion rule
//! - [`zone`] - the safe zone and plane constants
//! - [`kernel`] - kernel records and depth layers
//! - [`random`] - injected random sources
//! - [`memo`] - compute-once layout holder for a hero instance
//!
//! ---
//!
//! Developed with 🌿 by The MakhanaCo Team (c)2025

pub mod error;
pub mod kernel;
pub mod memo;
pub mod random;
pub mod scatter;
pub mod zone;

pub use error::ScatterError;
pub use kernel::{Half, Kernel, Layer};
pub use memo::MemoLayout;
pub use random::{FixedSequence, RandomSource, seeded, seeded_or_entropy};
pub use scatter::{LayoutStats, Scatter, ScatterConfig, Span, generate, repel};
pub use zone::SafeZone;
