//! Dashboard Page
//!
//! Overview with aggregate stat tiles, the revenue chart and a static
//! recent-orders list.

use leptos::*;
use leptos_router::A;

use crate::api;
use crate::components::{RevenueChart, StatCard};
use crate::state::global::DashboardStats;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let (stats, set_stats) = create_signal(DashboardStats::default());
    let (loading, set_loading) = create_signal(true);

    // Fetch stats on mount; on failure keep the zeroed fallback shape
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_dashboard_stats().await {
                Ok(data) => set_stats.set(data),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load dashboard stats: {}", e).into(),
                    );
                }
            }
            set_loading.set(false);
        });
    });

    let revenue = Signal::derive(move || stats.get().revenue);

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard Overview"</h1>
                    <p class="text-gray-400 mt-1">"Your business at a glance"</p>
                </div>

                <A
                    href="/operations"
                    class="px-4 py-2 bg-green-600 hover:bg-green-700 rounded-lg font-medium transition-colors"
                >
                    "+ New Order"
                </A>
            </div>

            // Stats grid
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <StatCard
                    label="Total Revenue"
                    value=Signal::derive(move || stats.get().total_revenue_amount)
                    icon="💰"
                    footnote="+12.5% from last month"
                    highlighted=true
                />
                <StatCard
                    label="Active Orders Today"
                    value=Signal::derive(move || stats.get().active_orders.to_string())
                    icon="🛒"
                    footnote="+5 new today"
                />
                <StatCard
                    label="Total Customers"
                    value=Signal::derive(move || stats.get().new_customers.to_string())
                    icon="👥"
                    footnote="+2.4% from last month"
                />
                <StatCard
                    label="Attention Required"
                    value=Signal::derive(move || stats.get().pending_reviews.to_string())
                    icon="⚠️"
                    footnote="Pending reviews/issues"
                />
            </div>

            // Two column layout: chart and recent orders
            <div class="grid lg:grid-cols-3 gap-8">
                <section class="lg:col-span-2 bg-gray-800 rounded-xl p-6">
                    <div class="flex items-center justify-between mb-4">
                        <h2 class="text-xl font-semibold">"Revenue Analytics"</h2>
                        <select class="bg-gray-700 rounded-lg px-2 py-1 text-sm border border-gray-600 focus:outline-none">
                            <option>"This Year"</option>
                            <option>"Last Year"</option>
                        </select>
                    </div>

                    {move || {
                        if loading.get() {
                            view! {
                                <div class="h-64 flex items-center justify-center">
                                    <div class="loading-spinner w-8 h-8" />
                                </div>
                            }.into_view()
                        } else {
                            view! { <RevenueChart revenue=revenue /> }.into_view()
                        }
                    }}
                </section>

                <RecentOrders />
            </div>
        </div>
    }
}

/// Static example list, not data-driven
#[component]
fn RecentOrders() -> impl IntoView {
    let entries = [
        ("🎨", "Website Redesign", "TechCorp Inc.", "In Progress", "bg-blue-900 text-blue-300"),
        ("🔍", "SEO Audit", "GrowthMarketing", "Pending", "bg-yellow-900 text-yellow-300"),
        ("💻", "Server Migration", "RetailGiant", "Done", "bg-green-900 text-green-300"),
    ];

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">"Recent Orders"</h2>
                <A href="/operations" class="text-sm text-green-400 hover:underline">
                    "View All"
                </A>
            </div>

            <div class="space-y-4">
                {entries.into_iter().map(|(icon, title, client, badge, badge_class)| view! {
                    <div class="flex items-center space-x-3 pb-3 border-b border-gray-700 last:border-0">
                        <div class="w-10 h-10 bg-gray-700 rounded-lg flex items-center justify-center text-xl">
                            {icon}
                        </div>
                        <div class="flex-1 min-w-0">
                            <div class="font-medium text-sm truncate">{title}</div>
                            <div class="text-xs text-gray-400">{client}</div>
                        </div>
                        <span class=format!("{} px-2 py-0.5 rounded-full text-xs", badge_class)>
                            {badge}
                        </span>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}
