use leptos::prelude::*;

#[component]
pub fn BrandNav(brand: String) -> impl IntoView {
    view! {
        <nav class="brand-nav">
            <div class="brand-name">{brand}</div>
        </nav>
    }
}
