//! Content and asset data for the hero.
//!
//! Everything the hero prints or links to is data, so a different product
//! can reuse the layout through `.makhana/hero.toml`. Defaults reproduce the
//! MakhanaCo page.

use kernel_scatter::ScatterConfig;
use serde::{Deserialize, Serialize};

/// Root configuration for a rendered hero.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub scatter: ScatterConfig,
    pub copy: HeroCopy,
    pub assets: HeroAssets,
}

/// Text shown in the hero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroCopy {
    pub brand: String,
    pub tagline: String,
    /// Headline is `lead` + accented word + `tail`.
    pub headline_lead: String,
    pub headline_accent: String,
    pub headline_tail: String,
    pub description: String,
    pub cta_label: String,
    pub cta_href: String,
    pub bulk_title: String,
    pub bulk_subtitle: String,
}

impl Default for HeroCopy {
    fn default() -> Self {
        Self {
            brand: "MakhanaCo".into(),
            tagline: "🌿 Wholesome • Crunchy • Guilt-Free".into(),
            headline_lead: "Pure ".into(),
            headline_accent: "Makhana".into(),
            headline_tail: " from Nature's Heart".into(),
            description: "Hand-picked makhana, slow-roasted with love. \
                          Elevate your snacking with nature's crunch."
                .into(),
            cta_label: "Shop Now ⇀".into(),
            cta_href: "/products".into(),
            bulk_title: "Order Bulk".into(),
            bulk_subtitle: "Premium supply for businesses".into(),
        }
    }
}

/// Image paths used by the hero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroAssets {
    pub kernel_src: String,
    pub kernel_alt: String,
    pub bowl_src: String,
    pub bowl_alt: String,
}

impl Default for HeroAssets {
    fn default() -> Self {
        Self {
            kernel_src: "/makhana.png".into(),
            kernel_alt: "Makhana kernel".into(),
            bowl_src: "/makhana-bowl-top.png".into(),
            bowl_alt: "Bowl of Makhana".into(),
        }
    }
}
