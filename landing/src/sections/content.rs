//! Headline block in the middle of the hero.

use leptos::prelude::*;

use crate::styles::LOAD_DELAY_SECS;
use crate::types::HeroCopy;

/// Inline style for a staggered entrance.
///
/// `delay` is relative to page load; the load delay is added on top.
pub fn fade_in_up_style(delay: f64) -> String {
    format!("animation-delay:{:.2}s", LOAD_DELAY_SECS + delay)
}

#[component]
pub fn CenterContent(copy: HeroCopy) -> impl IntoView {
    view! {
        <div class="hero-content">
            <p class="hero-tagline fade-in-up" style=fade_in_up_style(0.0)>
                {copy.tagline}
            </p>
            <h1 class="hero-title fade-in-up" style=fade_in_up_style(0.15)>
                {copy.headline_lead}
                <span class="hero-title-accent">{copy.headline_accent}</span>
                {copy.headline_tail}
            </h1>
            <p class="hero-description fade-in-up" style=fade_in_up_style(0.3)>
                {copy.description}
            </p>
            <div class="hero-actions fade-in-up" style=fade_in_up_style(0.45)>
                <a href=copy.cta_href class="btn-primary">
                    {copy.cta_label}
                </a>
            </div>
        </div>
    }
}
