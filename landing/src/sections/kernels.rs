//! Floating kernel images.

use kernel_scatter::Kernel;
use leptos::prelude::*;

use crate::styles::KERNEL_STAGGER_SECS;

/// Inline style placing the `index`-th kernel.
///
/// Position is in percent of the hero, size in pixels. Rotation and timing
/// go through custom properties consumed by the `.kernel` keyframes.
pub fn kernel_style(kernel: &Kernel, index: usize) -> String {
    format!(
        "left:{:.2}%;top:{:.2}%;width:{:.2}px;z-index:{};--rot:{:.2}deg;--period:{}s;--delay:{:.2}s",
        kernel.x,
        kernel.y,
        kernel.size,
        kernel.layer.z_index(),
        kernel.rot,
        kernel.layer.period_secs(),
        index as f64 * KERNEL_STAGGER_SECS,
    )
}

pub fn kernel_class(kernel: &Kernel) -> String {
    format!("kernel kernel-{}", kernel.layer.as_label())
}

#[component]
pub fn KernelField(kernels: Vec<Kernel>, src: String, alt: String) -> impl IntoView {
    view! {
        <div class="kernel-field">
            {kernels
                .iter()
                .enumerate()
                .map(|(i, k)| {
                    view! {
                        <img
                            class=kernel_class(k)
                            src=src.clone()
                            alt=alt.clone()
                            data-layer=k.layer.as_label()
                            style=kernel_style(k, i)
                        />
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
