//! Customers Page
//!
//! Fetch-on-mount customer table with a quick-create modal. Action buttons
//! (view/edit/archive) are visual only; there is no edit or delete wiring.

use leptos::*;

use crate::api;
use crate::components::{EmptyState, ListSkeleton};
use crate::state::global::{Customer, GlobalState};

/// Customers page component
#[component]
pub fn Customers() -> impl IntoView {
    let (customers, set_customers) = create_signal(Vec::<Customer>::new());
    let (loading, set_loading) = create_signal(true);
    let (show_create, set_show_create) = create_signal(false);

    let load_customers = move || {
        spawn_local(async move {
            match api::fetch_customers().await {
                Ok(data) => set_customers.set(data),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch customers: {}", e).into());
                }
            }
            set_loading.set(false);
        });
    };

    // Fetch on mount
    create_effect(move |_| {
        load_customers();
    });

    view! {
        <div class="space-y-6">
            // Header
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Customers"</h1>
                <button
                    on:click=move |_| set_show_create.set(true)
                    class="px-4 py-2 bg-green-600 hover:bg-green-700 rounded-lg font-medium transition-colors"
                >
                    "+ New Customer"
                </button>
            </div>

            // Filter bar (decorative)
            <div class="bg-gray-800 rounded-xl p-4 flex items-center space-x-4">
                <div class="flex-1 flex items-center bg-gray-700 rounded-lg px-3 py-2">
                    <span class="text-gray-400 mr-2">"🔍"</span>
                    <input
                        type="text"
                        placeholder="Search customers by name, email, or phone..."
                        class="flex-1 bg-transparent focus:outline-none text-sm"
                    />
                </div>
                <select class="bg-gray-700 rounded-lg px-3 py-2 text-sm border border-gray-600 focus:outline-none">
                    <option>"Status: All"</option>
                    <option>"Active"</option>
                    <option>"Inactive"</option>
                </select>
            </div>

            // Create customer modal
            {move || {
                show_create.get().then(|| view! {
                    <CreateCustomerModal
                        on_close=move || set_show_create.set(false)
                        on_created=load_customers
                    />
                })
            }}

            // Table / empty / loading states
            {move || {
                if loading.get() {
                    view! {
                        <div class="bg-gray-800 rounded-xl p-6">
                            <ListSkeleton count=5 />
                        </div>
                    }.into_view()
                } else if customers.get().is_empty() {
                    view! {
                        <EmptyState
                            icon="👥"
                            title="No Customers Found"
                            description="You haven't added any customers yet. Add your first customer to get started."
                        >
                            <button
                                on:click=move |_| set_show_create.set(true)
                                class="px-4 py-2 bg-green-600 hover:bg-green-700 rounded-lg font-medium transition-colors"
                            >
                                "+ Add First Customer"
                            </button>
                        </EmptyState>
                    }.into_view()
                } else {
                    view! { <CustomerTable customers=customers /> }.into_view()
                }
            }}
        </div>
    }
}

/// Customer table with pagination footer
#[component]
fn CustomerTable(customers: ReadSignal<Vec<Customer>>) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl overflow-hidden">
            <table class="w-full text-left">
                <thead class="bg-gray-750 border-b border-gray-700">
                    <tr class="text-sm text-gray-400">
                        <th class="px-6 py-3 font-semibold">"Customer"</th>
                        <th class="px-3 py-3 font-semibold">"Email"</th>
                        <th class="px-3 py-3 font-semibold">"Phone"</th>
                        <th class="px-3 py-3 font-semibold">"Status"</th>
                        <th class="px-6 py-3 font-semibold text-right">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        customers.get().into_iter().map(|customer| {
                            view! { <CustomerRow customer=customer /> }
                        }).collect_view()
                    }}
                </tbody>
            </table>

            // Pagination footer (single page for now)
            <div class="px-6 py-4 flex items-center justify-between border-t border-gray-700">
                <span class="text-sm text-gray-400">
                    {move || format!("Showing {} customers", customers.get().len())}
                </span>
                <div class="space-x-2">
                    <button class="px-3 py-1 bg-gray-700 rounded-lg text-sm text-gray-500" disabled>
                        "Previous"
                    </button>
                    <button class="px-3 py-1 bg-gray-700 rounded-lg text-sm text-gray-500" disabled>
                        "Next"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Single customer table row
#[component]
fn CustomerRow(customer: Customer) -> impl IntoView {
    let initials: String = customer.name.chars().take(2).collect::<String>().to_uppercase();
    let badge_class = if customer.status == "active" {
        "bg-green-900 text-green-300"
    } else {
        "bg-yellow-900 text-yellow-300"
    };

    view! {
        <tr class="border-b border-gray-700 last:border-0 hover:bg-gray-750 transition-colors">
            <td class="px-6 py-3">
                <div class="flex items-center space-x-3">
                    <div class="w-9 h-9 bg-gray-600 rounded-full flex items-center justify-center text-sm font-semibold">
                        {initials}
                    </div>
                    <span class="font-medium">{customer.name.clone()}</span>
                </div>
            </td>
            <td class="px-3 py-3 text-gray-400">
                {customer.email.clone().unwrap_or_else(|| "-".to_string())}
            </td>
            <td class="px-3 py-3 text-gray-400">
                {customer.phone.clone().unwrap_or_else(|| "-".to_string())}
            </td>
            <td class="px-3 py-3">
                <span class=format!("{} px-2 py-0.5 rounded-full text-xs font-semibold capitalize", badge_class)>
                    {customer.status.clone()}
                </span>
            </td>
            <td class="px-6 py-3 text-right space-x-2">
                // Visual only, not wired
                <button class="px-2 py-1 bg-gray-700 hover:bg-gray-600 rounded text-sm" title="View Profile">
                    "👤"
                </button>
                <button class="px-2 py-1 bg-gray-700 hover:bg-gray-600 rounded text-sm" title="Edit">
                    "✏️"
                </button>
                <button class="px-2 py-1 bg-gray-700 hover:bg-gray-600 rounded text-sm text-red-400" title="Archive">
                    "🗑"
                </button>
            </td>
        </tr>
    }
}

/// Create customer modal: collects a name, derives a placeholder e-mail
#[component]
fn CreateCustomerModal(
    on_close: impl Fn() + 'static + Clone,
    on_created: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let on_close_for_x = on_close.clone();
    let on_close_for_cancel = on_close;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let n = name.get().trim().to_string();
        if n.is_empty() {
            state.show_error("Customer name is required");
            return;
        }

        set_submitting.set(true);

        let state_clone = state.clone();
        let on_close_inner = on_close_for_submit.clone();
        let on_created_inner = on_created.clone();
        spawn_local(async move {
            let email = api::placeholder_email(&n);
            match api::create_customer(&n, &email).await {
                Ok(_) => {
                    state_clone.show_success("Customer created");
                    on_close_inner();
                    on_created_inner();
                }
                Err(e) => {
                    state_clone.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-semibold">"New Customer"</h2>
                    <button
                        on:click=move |_| on_close_for_x()
                        class="text-gray-400 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Name"</label>
                        <input
                            type="text"
                            placeholder="e.g., Jane Doe"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-green-500 focus:outline-none"
                        />
                        <p class="text-xs text-gray-500 mt-2">
                            {move || {
                                let n = name.get();
                                if n.trim().is_empty() {
                                    "A placeholder e-mail will be derived from the name".to_string()
                                } else {
                                    format!("E-mail: {}", api::placeholder_email(&n))
                                }
                            }}
                        </p>
                    </div>

                    <div class="flex space-x-3 pt-4">
                        <button
                            type="button"
                            on:click=move |_| on_close_for_cancel()
                            class="flex-1 px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            disabled=move || submitting.get()
                            class="flex-1 px-4 py-3 bg-green-600 hover:bg-green-700 disabled:bg-gray-600
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if submitting.get() { "Creating..." } else { "Create" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
