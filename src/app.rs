//! App Root Component
//!
//! Main application component with routing, layout chrome and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Sidebar, Toast};
use crate::pages::{Chat, Customers, Dashboard, Operations, Settings};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex">
                // Navigation sidebar
                <Sidebar />

                <div class="flex-1 flex flex-col min-w-0">
                    // Top chrome
                    <Topbar />

                    // Main content area
                    <main class="flex-1 container mx-auto px-4 py-8">
                        <Routes>
                            <Route path="/" view=Dashboard />
                            <Route path="/customers" view=Customers />
                            <Route path="/operations" view=Operations />
                            <Route path="/chat" view=Chat />
                            <Route path="/settings" view=Settings />
                            <Route path="/*any" view=NotFound />
                        </Routes>
                    </main>
                </div>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Top bar with sidebar toggle, decorative search and account chip
#[component]
fn Topbar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let collapsed = state.sidebar_collapsed;

    view! {
        <header class="h-16 bg-gray-800 border-b border-gray-700 flex items-center justify-between px-4">
            <div class="flex items-center space-x-4">
                // Sidebar collapse toggle
                <button
                    on:click=move |_| collapsed.update(|c| *c = !*c)
                    class="px-2 py-1 bg-gray-700 hover:bg-gray-600 rounded-lg transition-colors"
                >
                    {move || if collapsed.get() { "☰" } else { "‹" }}
                </button>

                // Search (decorative)
                <div class="flex items-center bg-gray-700 rounded-lg px-3 py-2">
                    <span class="text-gray-400 mr-2">"🔍"</span>
                    <input
                        type="text"
                        placeholder="Search..."
                        class="bg-transparent focus:outline-none text-sm w-48"
                    />
                </div>
            </div>

            <div class="flex items-center space-x-4">
                <span class="text-xl text-gray-400 cursor-pointer">"🔔"</span>
                <div class="flex items-center space-x-2">
                    <div class="w-8 h-8 bg-gray-600 rounded-full flex items-center justify-center text-sm font-semibold">
                        "AU"
                    </div>
                    <span class="text-sm font-medium">"Admin User"</span>
                </div>
            </div>
        </header>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-green-600 hover:bg-green-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
