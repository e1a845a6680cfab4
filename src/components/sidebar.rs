//! Sidebar Component
//!
//! Collapsible navigation rail with logo, page links and a decorative
//! log-out entry.

use leptos::*;
use leptos_router::*;

use crate::state::global::GlobalState;

/// Sidebar navigation component
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let collapsed = state.sidebar_collapsed;

    view! {
        <aside class=move || {
            let width = if collapsed.get() { "w-20" } else { "w-64" };
            format!("{} flex-none bg-gray-800 border-r border-gray-700 flex flex-col min-h-screen transition-all", width)
        }>
            // Logo and brand
            <div class="h-16 flex items-center px-6 border-b border-gray-700">
                <span class="text-2xl">"⚡"</span>
                {move || (!collapsed.get()).then(|| view! {
                    <span class="ml-2 text-xl font-bold text-white">"ServiceDash"</span>
                })}
            </div>

            // Navigation links
            <nav class="flex-1 px-2 py-4 space-y-1">
                <SidebarLink href="/" icon="▦" label="Dashboard" collapsed=collapsed />
                <SidebarLink href="/customers" icon="👥" label="Customers" collapsed=collapsed />
                <SidebarLink href="/operations" icon="📋" label="Orders / Requests" collapsed=collapsed />
                <SidebarLink href="/chat" icon="💬" label="Messages" collapsed=collapsed />
                <SidebarLink href="/settings" icon="⚙" label="Settings" collapsed=collapsed />
            </nav>

            // Decorative log-out entry
            <div class="px-2 py-6 border-t border-gray-700">
                <span class="flex items-center px-4 py-2 rounded-lg text-red-400 cursor-pointer hover:bg-gray-700">
                    <span class="text-lg">"⏻"</span>
                    {move || (!collapsed.get()).then(|| view! {
                        <span class="ml-3">"Log Out"</span>
                    })}
                </span>
            </div>
        </aside>
    }
}

/// Individual sidebar link
#[component]
fn SidebarLink(
    href: &'static str,
    icon: &'static str,
    label: &'static str,
    collapsed: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="flex items-center px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white border-l-4 border-green-500"
        >
            <span class="text-lg">{icon}</span>
            {move || (!collapsed.get()).then(|| view! {
                <span class="ml-3">{label}</span>
            })}
        </A>
    }
}
