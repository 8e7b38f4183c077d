use leptos::prelude::*;

/// Floating glass card pointing businesses at bulk orders.
#[component]
pub fn BulkOrderCard(title: String, subtitle: String) -> impl IntoView {
    view! {
        <div class="bulk-card">
            <div class="bulk-card-row">
                <span class="bulk-card-icon">"📦"</span>
                <div>
                    <p class="bulk-card-title">{title}</p>
                    <p class="bulk-card-subtitle">{subtitle}</p>
                </div>
            </div>
        </div>
    }
}
