//! Settings Page
//!
//! Account placeholders plus the API connection configuration. Only the API
//! URL save is wired; profile and notification controls are decorative.

use leptos::*;

use crate::api;
use crate::state::global::GlobalState;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="max-w-2xl mx-auto space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Configure your ServiceDash workspace"</p>
            </div>

            <ProfileSettings />
            <NotificationSettings />
            <ApiSettings />
            <AboutSection />
        </div>
    }
}

/// Profile placeholders, save not wired
#[component]
fn ProfileSettings() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-1">"Profile"</h2>
            <p class="text-sm text-gray-400 mb-4">"Update your personal information."</p>

            <div class="flex space-x-3">
                <input
                    type="text"
                    placeholder="Full Name"
                    value="Admin User"
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-green-500 focus:outline-none"
                />
                <input
                    type="email"
                    placeholder="Email"
                    value="admin@example.com"
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-green-500 focus:outline-none"
                />
            </div>

            <button class="mt-4 px-4 py-2 bg-gray-700 rounded-lg font-medium text-gray-400 cursor-default">
                "Save Changes"
            </button>
        </section>
    }
}

/// Notification checkboxes, save not wired
#[component]
fn NotificationSettings() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-1">"Notifications"</h2>
            <p class="text-sm text-gray-400 mb-4">"Manage your email alerts."</p>

            <div class="space-y-2">
                <label class="flex items-center space-x-2 text-sm">
                    <input type="checkbox" checked=true />
                    <span>"New Order Alerts"</span>
                </label>
                <label class="flex items-center space-x-2 text-sm">
                    <input type="checkbox" />
                    <span>"Marketing Emails"</span>
                </label>
            </div>
        </section>
    }
}

/// API connection settings, persisted to local storage
#[component]
fn ApiSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());

    let save_url = move |_| {
        let url = api_url.get();
        api::set_api_base(&url);
        state.show_success("API URL saved");
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-1">"API Connection"</h2>
            <p class="text-sm text-gray-400 mb-4">"Where this dashboard fetches its data from."</p>

            <div class="flex space-x-2">
                <input
                    type="text"
                    prop:value=move || api_url.get()
                    on:input=move |ev| set_api_url.set(event_target_value(&ev))
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-green-500 focus:outline-none"
                />
                <button
                    on:click=save_url
                    class="px-4 py-3 bg-green-600 hover:bg-green-700 rounded-lg font-medium transition-colors"
                >
                    "Save"
                </button>
            </div>
        </section>
    }
}

/// About section
#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"About"</h2>
            <div class="text-sm text-gray-400 space-y-1">
                <p>"ServiceDash Admin v"{env!("CARGO_PKG_VERSION")}</p>
                <p>"Built with Leptos and WebAssembly"</p>
            </div>
        </section>
    }
}
