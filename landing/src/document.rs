//! Root document component - a standalone page around the hero.

use kernel_scatter::Scatter;
use leptos::prelude::*;

use crate::sections::HeroSection;
use crate::styles::HERO_CSS;
use crate::types::LandingConfig;

#[component]
pub fn HeroDocument(config: LandingConfig, scatter: Scatter, seed: Option<u64>) -> impl IntoView {
    let title = format!("{} | {}", config.copy.brand, config.copy.headline_accent);
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style>{HERO_CSS}</style>
            </head>
            <body>
                <HeroSection config=config scatter=scatter seed=seed />
            </body>
        </html>
    }
}
