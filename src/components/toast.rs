//! Toast Notifications
//!
//! Bottom-right stack fed by the success and error slots in `GlobalState`.
//! Messages clear themselves on a timer there; this component only renders
//! whatever is currently set.

use leptos::*;

use crate::state::global::GlobalState;

#[derive(Clone, Copy)]
enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
        }
    }

    fn accent(self) -> &'static str {
        match self {
            ToastKind::Success => "bg-green-600",
            ToastKind::Error => "bg-red-600",
        }
    }
}

/// Toast stack wired to the global success and error slots
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2">
            {move || state.success.get().map(|msg| toast_item(ToastKind::Success, msg))}
            {move || state.error.get().map(|msg| toast_item(ToastKind::Error, msg))}
        </div>
    }
}

fn toast_item(kind: ToastKind, message: String) -> impl IntoView {
    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             animate-slide-in",
            kind.accent()
        )>
            <span class="text-lg font-bold">{kind.icon()}</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}
