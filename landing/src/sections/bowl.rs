use leptos::prelude::*;

use crate::types::HeroAssets;

/// Foreground bowl rising in from below the fold.
#[component]
pub fn Bowl(assets: HeroAssets) -> impl IntoView {
    view! {
        <div class="hero-bowl">
            <img src=assets.bowl_src alt=assets.bowl_alt />
        </div>
    }
}
