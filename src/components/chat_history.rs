//! Scrollable list of conversation bubbles.

#[cfg(test)]
#[path = "chat_history_test.rs"]
mod chat_history_test;

use leptos::prelude::*;

use crate::components::chat_message::ChatMessage;
use crate::state::conversation::{ConversationState, Message};

#[component]
pub fn ChatHistory() -> impl IntoView {
    let conversation = expect_context::<RwSignal<ConversationState>>();
    let history_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = conversation.with(|c| (c.len(), c.loading()));

        #[cfg(feature = "csr")]
        {
            if let Some(el) = history_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div class="chat-history" node_ref=history_ref>
            <For
                each=move || conversation.with(indexed_messages)
                key=|(index, _)| *index
                children=|(_, message)| view! { <ChatMessage message=message/> }
            />
        </div>
    }
}

/// Messages paired with their position. History is append-only, so the
/// index is a stable key.
pub(crate) fn indexed_messages(state: &ConversationState) -> Vec<(usize, Message)> {
    state.messages().iter().cloned().enumerate().collect()
}
