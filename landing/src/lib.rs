//! # makhana-landing
//!
//! Static Leptos renderer for the MakhanaCo landing hero: animated
//! background, floating makhana kernels placed by [`kernel_scatter`], the
//! headline block with its call to action, the bowl and the bulk-order card.
//!
//! ## Quick Start
//!
//! ```rust
//! use makhana_landing::{LandingConfig, render_page};
//!
//! let html = render_page(&LandingConfig::default(), Some(42)).unwrap();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! Rendering is pure SSR through Leptos 0.8's `RenderHtml`; animation is
//! plain CSS, so the output needs no JavaScript.
//!
//! ---
//!
//! Developed with 🌿 by The MakhanaCo Team (c)2025

pub mod config;
pub mod document;
pub mod sections;
pub mod styles;
pub mod types;

use document::HeroDocument;
use kernel_scatter::{Scatter, ScatterError};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use sections::HeroSection;
use tracing::debug;

pub use types::{HeroAssets, HeroCopy, LandingConfig};

/// Render the hero `<section>` on its own, for embedding in an existing page.
///
/// Placement settings are validated first; an invalid safe zone or range
/// is returned as an error instead of producing a broken layout. Without a
/// `seed` every call gets a fresh layout.
pub fn render_hero(config: &LandingConfig, seed: Option<u64>) -> Result<String, ScatterError> {
    let scatter = Scatter::new(config.scatter.clone())?;
    debug!(?seed, kernels = config.scatter.total(), "rendering hero section");

    let view = view! { <HeroSection config=config.clone() scatter=scatter seed=seed /> };
    Ok(view.to_html())
}

/// Render a complete HTML page containing the hero and its stylesheet.
///
/// # Example
///
/// ```rust
/// use makhana_landing::{LandingConfig, render_page};
///
/// let html = render_page(&LandingConfig::default(), Some(7)).unwrap();
/// assert!(html.contains("MakhanaCo"));
/// ```
pub fn render_page(config: &LandingConfig, seed: Option<u64>) -> Result<String, ScatterError> {
    let scatter = Scatter::new(config.scatter.clone())?;
    debug!(?seed, kernels = config.scatter.total(), "rendering hero page");

    let doc = view! { <HeroDocument config=config.clone() scatter=scatter seed=seed /> };

    // Leptos doesn't include DOCTYPE, so we add it
    Ok(format!("<!DOCTYPE html>\n{}", doc.to_html()))
}
