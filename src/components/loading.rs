//! Loading Component
//!
//! Skeleton placeholders shown while page data is in flight.

use leptos::*;

/// Skeleton loader for list rows (customer table)
#[component]
pub fn ListSkeleton(
    #[prop(default = 5)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="flex items-center space-x-4">
                    <div class="w-10 h-10 bg-gray-700 rounded-full" />
                    <div class="flex-1 space-y-2">
                        <div class="h-4 bg-gray-700 rounded w-1/3" />
                        <div class="h-3 bg-gray-700 rounded w-1/5" />
                    </div>
                    <div class="w-24 h-6 bg-gray-700 rounded" />
                </div>
            }).collect_view()}
        </div>
    }
}

/// Skeleton loader for the four-column kanban board
#[component]
pub fn BoardSkeleton() -> impl IntoView {
    view! {
        <div class="flex gap-6 overflow-x-auto animate-pulse">
            {(0..4).map(|_| view! {
                <div class="flex-none w-80 bg-gray-800 rounded-lg p-4">
                    <div class="h-6 bg-gray-700 rounded w-1/2 mb-4" />
                    <div class="space-y-3">
                        <div class="h-24 bg-gray-700 rounded" />
                        <div class="h-24 bg-gray-700 rounded" />
                        <div class="h-24 bg-gray-700 rounded" />
                    </div>
                </div>
            }).collect_view()}
        </div>
    }
}
