use kernel_scatter::{MemoLayout, Scatter};
use leptos::prelude::*;

use super::{AliveBackground, Bowl, BrandNav, BulkOrderCard, CenterContent, KernelField};
use crate::types::LandingConfig;

/// The full hero section.
///
/// Kernels are placed once, when the component is built. Re-rendering the
/// returned view reuses them; a new `HeroSection` gets a new layout unless
/// `seed` pins it.
#[component]
pub fn HeroSection(config: LandingConfig, scatter: Scatter, seed: Option<u64>) -> impl IntoView {
    let layout = MemoLayout::with_seed(scatter, seed);
    let kernels = layout.kernels().to_vec();
    let LandingConfig { copy, assets, .. } = config;
    let brand = copy.brand.clone();
    let bulk_title = copy.bulk_title.clone();
    let bulk_subtitle = copy.bulk_subtitle.clone();
    let kernel_src = assets.kernel_src.clone();
    let kernel_alt = assets.kernel_alt.clone();

    view! {
        <section class="hero">
            <AliveBackground />
            <KernelField kernels=kernels src=kernel_src alt=kernel_alt />
            <CenterContent copy=copy />
            <Bowl assets=assets />
            <BulkOrderCard title=bulk_title subtitle=bulk_subtitle />
            <BrandNav brand=brand />
        </section>
    }
}
