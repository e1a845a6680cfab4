//! Operations Board Page
//!
//! Kanban view over orders. Dragging a card between columns commits the move
//! locally first, then persists the status change; a failed save surfaces a
//! toast and reloads the whole board from the server.

use std::future::Future;

use leptos::*;

use crate::api;
use crate::components::{BoardSkeleton, EmptyState};
use crate::state::board::{Board, ColumnKey};
use crate::state::global::{Customer, GlobalState, Order};

/// Transient drag gesture: the card being dragged and where it came from.
/// `None` while idle; the browser allows a single active drag at a time.
#[derive(Clone)]
struct DragState {
    task: Order,
    source: ColumnKey,
}

/// Operations board page component
#[component]
pub fn Operations() -> impl IntoView {
    let (board, set_board) = create_signal(Board::default());
    let (loading, set_loading) = create_signal(true);
    let (dragged, set_dragged) = create_signal(None::<DragState>);
    let (drag_over, set_drag_over) = create_signal(None::<ColumnKey>);
    let (show_create, set_show_create) = create_signal(false);

    let load_board = move || {
        spawn_local(async move {
            match api::fetch_orders().await {
                Ok(orders) => set_board.set(Board::from_orders(orders)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to load orders: {}", e).into());
                }
            }
            set_loading.set(false);
        });
    };

    // Fetch on mount
    create_effect(move |_| {
        load_board();
    });

    view! {
        <div class="space-y-6">
            // Header
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Operations Board"</h1>
                <div class="flex items-center space-x-2">
                    <button
                        on:click=move |_| set_show_create.set(true)
                        class="px-4 py-2 bg-green-600 hover:bg-green-700 rounded-lg font-medium transition-colors"
                    >
                        "+ New Request"
                    </button>
                    // View switch (decorative, board only)
                    <button class="px-3 py-2 bg-gray-700 rounded-lg text-sm">"Board"</button>
                    <button class="px-3 py-2 bg-gray-800 rounded-lg text-sm text-gray-500">"List"</button>
                </div>
            </div>

            // Create order modal
            {move || {
                show_create.get().then(|| view! {
                    <CreateOrderModal
                        on_close=move || set_show_create.set(false)
                        on_created=load_board
                    />
                })
            }}

            {move || {
                if loading.get() {
                    view! { <BoardSkeleton /> }.into_view()
                } else if board.get().is_empty() {
                    view! {
                        <EmptyState
                            icon="📋"
                            title="No Active Orders"
                            description="You don't have any orders yet. Create a new request to get started."
                        >
                            <button
                                on:click=move |_| set_show_create.set(true)
                                class="px-4 py-2 bg-green-600 hover:bg-green-700 rounded-lg font-medium transition-colors"
                            >
                                "+ Create Request"
                            </button>
                        </EmptyState>
                    }.into_view()
                } else {
                    view! {
                        <div class="flex gap-6 overflow-x-auto pb-6">
                            {ColumnKey::ALL.into_iter().map(|column| view! {
                                <KanbanColumn
                                    column=column
                                    board=board
                                    set_board=set_board
                                    dragged=dragged
                                    set_dragged=set_dragged
                                    drag_over=drag_over
                                    set_drag_over=set_drag_over
                                />
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}

/// Single board column: drop target with header count and card stack
#[component]
fn KanbanColumn(
    column: ColumnKey,
    board: ReadSignal<Board>,
    set_board: WriteSignal<Board>,
    dragged: ReadSignal<Option<DragState>>,
    set_dragged: WriteSignal<Option<DragState>>,
    drag_over: ReadSignal<Option<ColumnKey>>,
    set_drag_over: WriteSignal<Option<ColumnKey>>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Highlight only; preventDefault is what permits the drop
    let on_drag_over = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_drag_over.set(Some(column));
    };

    let on_drag_leave = move |_ev: web_sys::DragEvent| {
        if drag_over.get_untracked() == Some(column) {
            set_drag_over.set(None);
        }
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_drag_over.set(None);

        let Some(drag) = dragged.get_untracked() else {
            return;
        };
        set_dragged.set(None);

        // Dropping a card back onto its own column changes nothing and
        // issues no backend call
        if drag.source == column {
            return;
        }

        // Optimistic commit, then persist. A stale gesture (the board was
        // reloaded mid-drag and the card is no longer in its source column)
        // moves nothing and must not reach the server.
        let mut moved = false;
        set_board.update(|b| {
            moved = b.move_task(&drag.task.id, drag.source, column);
        });
        if !moved {
            return;
        }

        let task_id = drag.task.id.clone();
        let state = state.clone();
        spawn_local(async move {
            if let Err(e) = api::update_order_status(&task_id, column).await {
                web_sys::console::error_1(&format!("Failed to update status: {}", e).into());
                state.show_error("Failed to save move. Reloading board...");

                // Discard the optimistic placement; the server wins
                match api::fetch_orders().await {
                    Ok(orders) => set_board.set(Board::from_orders(orders)),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to reload orders: {}", e).into(),
                        );
                    }
                }
            }
        });
    };

    view! {
        <div
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
            class=move || {
                let base = "flex-none w-80 bg-gray-800 rounded-lg flex flex-col max-h-full \
                            border transition-colors";
                if drag_over.get() == Some(column) {
                    format!("{} border-green-500", base)
                } else {
                    format!("{} border-gray-700", base)
                }
            }
        >
            // Column header with live count
            <div class="px-4 py-3 flex items-center justify-between border-b border-gray-700">
                <span class="font-semibold text-gray-200">{column.title()}</span>
                <span class="bg-gray-700 px-2 py-0.5 rounded-full text-xs text-gray-400">
                    {move || board.get().count(column)}
                </span>
            </div>

            // Card stack
            <div class="p-3 space-y-3 overflow-y-auto flex-1">
                {move || {
                    board.get().tasks(column).to_vec().into_iter().map(|task| view! {
                        <KanbanCard
                            task=task
                            column=column
                            set_dragged=set_dragged
                            set_drag_over=set_drag_over
                        />
                    }).collect_view()
                }}
            </div>
        </div>
    }
}

/// Draggable order card
#[component]
fn KanbanCard(
    task: Order,
    column: ColumnKey,
    set_dragged: WriteSignal<Option<DragState>>,
    set_drag_over: WriteSignal<Option<ColumnKey>>,
) -> impl IntoView {
    let accent = status_accent(&task.status);
    let (badge_bg, badge_fg) = status_badge_classes(&task.status);
    let status_label = task.status.replace('_', " ");
    let urgent = task.priority == "urgent";
    let due_label = task.due_date.clone().unwrap_or_else(|| "Today".to_string());

    let task_for_drag = task.clone();
    let on_drag_start = move |ev: web_sys::DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            dt.set_effect_allowed("move");
        }
        set_dragged.set(Some(DragState {
            task: task_for_drag.clone(),
            source: column,
        }));
    };

    // Fires on cancelled drags and drops outside any column: back to idle,
    // no status change
    let on_drag_end = move |_ev: web_sys::DragEvent| {
        set_dragged.set(None);
        set_drag_over.set(None);
    };

    view! {
        <div
            draggable="true"
            on:dragstart=on_drag_start
            on:dragend=on_drag_end
            class="bg-gray-700 rounded-lg p-4 shadow-sm cursor-move hover:bg-gray-650 transition-colors"
            style=format!("border-left: 4px solid {}", accent)
        >
            <div class="flex items-center justify-between mb-2">
                <span class=format!(
                    "{} {} px-2 py-0.5 rounded-full text-xs font-semibold capitalize",
                    badge_bg, badge_fg
                )>
                    {status_label}
                </span>
                <span class="text-gray-500 cursor-pointer">"⋯"</span>
            </div>

            <h4 class="font-bold mb-2">{task.title.clone()}</h4>

            <div class="flex items-center justify-between pt-3 border-t border-gray-600 text-xs">
                <span class=if urgent { "text-red-400 font-medium" } else { "text-gray-400" }>
                    {if urgent { "⚠ " } else { "📅 " }}
                    {due_label}
                </span>
                <div class="w-6 h-6 rounded-full bg-gray-600 flex items-center justify-center text-xs font-semibold text-gray-300">
                    "JD"
                </div>
            </div>
        </div>
    }
}

/// Left-border accent color per workflow stage
fn status_accent(status: &str) -> &'static str {
    match ColumnKey::parse(status) {
        Some(ColumnKey::NewRequests) => "#F59E0B",
        Some(ColumnKey::InProgress) => "#3B82F6",
        Some(ColumnKey::Completed) => "#10B981",
        _ => "#CBD5E1",
    }
}

/// Badge background/foreground classes per workflow stage
fn status_badge_classes(status: &str) -> (&'static str, &'static str) {
    match ColumnKey::parse(status) {
        Some(ColumnKey::NewRequests) => ("bg-yellow-900", "text-yellow-300"),
        Some(ColumnKey::InProgress) => ("bg-blue-900", "text-blue-300"),
        Some(ColumnKey::Completed) => ("bg-green-900", "text-green-300"),
        _ => ("bg-gray-600", "text-gray-300"),
    }
}

/// First existing customer wins; `None` means a placeholder must be created
fn existing_client_id(customers: &[Customer]) -> Option<String> {
    customers.first().map(|c| c.id.clone())
}

/// Resolve the client and create the order against it: the first existing
/// customer wins; when none exist yet a placeholder customer is created
/// first and the new order attaches to its id.
///
/// Generic over the three API calls so the sequencing stays unit-testable.
async fn submit_new_order<LFut, CFut, OFut>(
    list_customers: impl FnOnce() -> LFut,
    create_customer: impl FnOnce(String, String) -> CFut,
    create_order: impl FnOnce(String, String) -> OFut,
    title: &str,
    client_name: &str,
) -> Result<Order, String>
where
    LFut: Future<Output = Result<Vec<Customer>, String>>,
    CFut: Future<Output = Result<Customer, String>>,
    OFut: Future<Output = Result<Order, String>>,
{
    let customers = list_customers().await?;
    let client_id = match existing_client_id(&customers) {
        Some(id) => id,
        None => {
            create_customer(client_name.to_string(), api::placeholder_email(client_name))
                .await?
                .id
        }
    };
    create_order(title.to_string(), client_id).await
}

/// Create order modal: title plus an optional client label
#[component]
fn CreateOrderModal(
    on_close: impl Fn() + 'static + Clone,
    on_created: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (title, set_title) = create_signal(String::new());
    let (client, set_client) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let on_close_for_x = on_close.clone();
    let on_close_for_cancel = on_close;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let t = title.get().trim().to_string();
        if t.is_empty() {
            state.show_error("Order title is required");
            return;
        }

        let client_name = {
            let c = client.get().trim().to_string();
            if c.is_empty() { "New Client".to_string() } else { c }
        };

        set_submitting.set(true);

        let state_clone = state.clone();
        let on_close_inner = on_close_for_submit.clone();
        let on_created_inner = on_created.clone();
        spawn_local(async move {
            let result = submit_new_order(
                api::fetch_customers,
                |name: String, email: String| async move {
                    api::create_customer(&name, &email).await
                },
                |title: String, client_id: String| async move {
                    api::create_order(&title, &client_id).await
                },
                &t,
                &client_name,
            )
            .await;

            match result {
                Ok(_) => {
                    state_clone.show_success("Request created");
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
                    <h2 class="text-xl font-semibold">"New Request"</h2>
                    <button
                        on:click=move |_| on_close_for_x()
                        class="text-gray-400 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Title"</label>
                        <input
                            type="text"
                            placeholder="e.g., Website Redesign"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-green-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Client (optional)"</label>
                        <input
                            type="text"
                            placeholder="New Client"
                            prop:value=move || client.get()
                            on:input=move |ev| set_client.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-green-500 focus:outline-none"
                        />
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

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn customer(id: &str, name: &str) -> Customer {
        Customer {
            id: id.to_string(),
            name: name.to_string(),
            email: None,
            phone: None,
            status: "active".to_string(),
            created_at: None,
        }
    }

    #[test]
    fn test_first_existing_customer_becomes_client() {
        let customers = vec![customer("c-1", "TechCorp"), customer("c-2", "RetailGiant")];
        assert_eq!(existing_client_id(&customers), Some("c-1".to_string()));
    }

    #[test]
    fn test_empty_customer_list_forces_placeholder_creation() {
        assert_eq!(existing_client_id(&[]), None);
    }

    fn fake_order(title: &str, client_id: &str) -> Order {
        Order {
            id: "o-1".to_string(),
            title: title.to_string(),
            status: "new_requests".to_string(),
            priority: "normal".to_string(),
            client_id: Some(client_id.to_string()),
            due_date: None,
            tags: vec!["New".to_string()],
            created_at: None,
        }
    }

    #[test]
    fn test_order_creation_reuses_first_existing_customer() {
        let calls = Rc::new(RefCell::new(Vec::new()));

        let order = futures::executor::block_on(submit_new_order(
            {
                let calls = calls.clone();
                move || {
                    calls.borrow_mut().push("list_customers");
                    async { Ok(vec![customer("c-1", "TechCorp")]) }
                }
            },
            {
                let calls = calls.clone();
                move |name: String, _email: String| {
                    calls.borrow_mut().push("create_customer");
                    async move { Ok(customer("c-new", &name)) }
                }
            },
            {
                let calls = calls.clone();
                move |title: String, client_id: String| {
                    calls.borrow_mut().push("create_order");
                    async move { Ok(fake_order(&title, &client_id)) }
                }
            },
            "Website Redesign",
            "TechCorp",
        ))
        .unwrap();

        assert_eq!(*calls.borrow(), vec!["list_customers", "create_order"]);
        assert_eq!(order.client_id.as_deref(), Some("c-1"));
    }

    #[test]
    fn test_order_creation_with_no_customers_creates_placeholder_first() {
        let calls = Rc::new(RefCell::new(Vec::new()));

        let order = futures::executor::block_on(submit_new_order(
            {
                let calls = calls.clone();
                move || {
                    calls.borrow_mut().push("list_customers");
                    async { Ok(Vec::new()) }
                }
            },
            {
                let calls = calls.clone();
                move |name: String, email: String| {
                    calls.borrow_mut().push("create_customer");
                    assert_eq!(email, "new.client@example.com");
                    async move { Ok(customer("c-77", &name)) }
                }
            },
            {
                let calls = calls.clone();
                move |title: String, client_id: String| {
                    calls.borrow_mut().push("create_order");
                    async move { Ok(fake_order(&title, &client_id)) }
                }
            },
            "SEO Audit",
            "New Client",
        ))
        .unwrap();

        // The placeholder customer exists before the order is created, and
        // the order points at its id.
        assert_eq!(
            *calls.borrow(),
            vec!["list_customers", "create_customer", "create_order"]
        );
        assert_eq!(order.client_id.as_deref(), Some("c-77"));
    }

    #[test]
    fn test_status_accents_cover_all_columns() {
        assert_eq!(status_accent("new_requests"), "#F59E0B");
        assert_eq!(status_accent("in_progress"), "#3B82F6");
        assert_eq!(status_accent("completed"), "#10B981");
        // Review and anything unknown share the neutral accent
        assert_eq!(status_accent("review"), "#CBD5E1");
        assert_eq!(status_accent("whatever"), "#CBD5E1");
    }
}
