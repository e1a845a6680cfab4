//! Chat Page
//!
//! Local-only team notes. Messages live in view state, seeded with two fixed
//! entries, and are lost on reload; the backend is never involved.

use leptos::*;

/// A single chat entry. `initial` and `color` drive the avatar chip.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: u32,
    pub author: String,
    pub text: String,
    pub time: String,
    pub initial: String,
    pub color: &'static str,
}

/// Fixed seed entries shown on every fresh mount
fn seed_messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            id: 1,
            author: "Sarah Chen".to_string(),
            text: "Morning! The TechCorp redesign moved to review, can someone take a look today?".to_string(),
            time: "09:12".to_string(),
            initial: "S".to_string(),
            color: "bg-purple-600",
        },
        ChatMessage {
            id: 2,
            author: "Marcus Webb".to_string(),
            text: "On it. Also heads up: two new requests came in overnight.".to_string(),
            time: "09:15".to_string(),
            initial: "M".to_string(),
            color: "bg-blue-600",
        },
    ]
}

/// Build a message from raw input. Returns `None` for empty or
/// whitespace-only text so submission stays a no-op.
fn compose_message(id: u32, author: &str, text: &str, time: String) -> Option<ChatMessage> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    Some(ChatMessage {
        id,
        author: author.to_string(),
        text: text.to_string(),
        time,
        initial: author.chars().next().map(|c| c.to_string()).unwrap_or_default(),
        color: "bg-green-600",
    })
}

/// Chat page component
#[component]
pub fn Chat() -> impl IntoView {
    let (messages, set_messages) = create_signal(seed_messages());
    let (draft, set_draft) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let next_id = messages.get_untracked().last().map(|m| m.id + 1).unwrap_or(1);
        let time = chrono::Local::now().format("%H:%M").to_string();

        if let Some(message) = compose_message(next_id, "Admin User", &draft.get_untracked(), time) {
            set_messages.update(|m| m.push(message));
            set_draft.set(String::new());
        }
    };

    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Team Notes"</h1>
                <p class="text-gray-400 mt-1">"Local scratchpad - messages are not saved"</p>
            </div>

            <div class="bg-gray-800 rounded-xl flex flex-col h-[60vh]">
                // Message list
                <div class="flex-1 overflow-y-auto p-6 space-y-4">
                    {move || {
                        messages.get().into_iter().map(|message| view! {
                            <MessageBubble message=message />
                        }).collect_view()
                    }}
                </div>

                // Composer
                <form on:submit=on_submit class="p-4 border-t border-gray-700 flex items-center space-x-3">
                    <input
                        type="text"
                        placeholder="Write a note to the team..."
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                        class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-green-500 focus:outline-none"
                    />
                    <button
                        type="submit"
                        class="px-4 py-3 bg-green-600 hover:bg-green-700 rounded-lg font-medium transition-colors"
                    >
                        "Send"
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Single chat entry with avatar chip
#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    view! {
        <div class="flex items-start space-x-3">
            <div class=format!(
                "w-9 h-9 {} rounded-full flex items-center justify-center font-semibold flex-none",
                message.color
            )>
                {message.initial.clone()}
            </div>
            <div class="min-w-0">
                <div class="flex items-baseline space-x-2">
                    <span class="font-semibold text-sm">{message.author.clone()}</span>
                    <span class="text-xs text-gray-500">{message.time.clone()}</span>
                </div>
                <p class="text-gray-300 text-sm mt-1 break-words">{message.text.clone()}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_only_submission_is_a_noop() {
        assert!(compose_message(3, "Admin User", "", "10:00".to_string()).is_none());
        assert!(compose_message(3, "Admin User", "   \t ", "10:00".to_string()).is_none());
    }

    #[test]
    fn test_composed_message_is_trimmed_and_stamped() {
        let message = compose_message(3, "Admin User", "  ship it  ", "10:05".to_string())
            .expect("non-empty text should compose");
        assert_eq!(message.text, "ship it");
        assert_eq!(message.time, "10:05");
        assert_eq!(message.initial, "A");
    }

    #[test]
    fn test_seed_has_two_fixed_entries() {
        let seed = seed_messages();
        assert_eq!(seed.len(), 2);
        assert_eq!(seed[0].id, 1);
        assert_eq!(seed[1].id, 2);
    }
}
