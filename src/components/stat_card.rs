//! Stat Card Component
//!
//! Summary tiles on the dashboard page.

use leptos::*;

/// Single dashboard stat tile
#[component]
pub fn StatCard(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    icon: String,
    #[prop(into)]
    footnote: String,
    /// Dark highlighted variant used for the lead revenue tile
    #[prop(default = false)]
    highlighted: bool,
) -> impl IntoView {
    let container_class = if highlighted {
        "bg-primary-900 border-primary-700"
    } else {
        "bg-gray-800 border-gray-700"
    };

    view! {
        <div class=format!(
            "rounded-xl p-4 border hover:border-gray-600 transition-colors {}",
            container_class
        )>
            <div class="flex items-start justify-between mb-2">
                <div>
                    <p class="text-gray-400 text-sm font-medium">{label}</p>
                    <h3 class="text-2xl font-bold mt-1">{move || value.get()}</h3>
                </div>
                <div class="bg-gray-700/50 p-2 rounded-xl text-2xl">{icon}</div>
            </div>
            <p class="text-xs text-gray-400">{footnote}</p>
        </div>
    }
}
