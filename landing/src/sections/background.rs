use leptos::prelude::*;

/// Slowly breathing colour blobs behind everything else.
#[component]
pub fn AliveBackground() -> impl IntoView {
    view! {
        <div class="hero-bg grain" aria-hidden="true">
            <div class="hero-blob hero-blob-rose"></div>
            <div class="hero-blob hero-blob-orange"></div>
            <div class="hero-blob hero-blob-blend"></div>
            <div class="hero-dots"></div>
        </div>
    }
}
