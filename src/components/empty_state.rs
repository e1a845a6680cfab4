//! Empty State Component
//!
//! Placeholder shown when a list or board has nothing to display yet.

use leptos::*;

/// Centered empty-state block with an optional action slot
#[component]
pub fn EmptyState(
    #[prop(into)]
    icon: String,
    #[prop(into)]
    title: String,
    #[prop(into)]
    description: String,
    /// Action slot, typically a create button
    children: Children,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-16 text-center">
            <div class="text-5xl mb-4">{icon}</div>
            <h2 class="text-xl font-semibold mb-2">{title}</h2>
            <p class="text-gray-400 mb-6 max-w-md">{description}</p>
            {children()}
        </div>
    }
}
