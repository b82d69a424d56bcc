//! Chat page: greeting, history and the question input.

use leptos::prelude::*;

use crate::actions::chat::submit_question;
use crate::components::chat_history::ChatHistory;
use crate::components::chat_input::ChatInput;
use crate::net::api::HttpChatApi;
use crate::state::conversation::ConversationState;
use crate::util::session::SessionContext;

#[component]
pub fn ChatPage() -> impl IntoView {
    let conversation = expect_context::<RwSignal<ConversationState>>();
    let api = StoredValue::new(expect_context::<HttpChatApi>());
    let session = StoredValue::new(expect_context::<SessionContext>());

    // Navigating back to the page keeps the existing history.
    #[cfg(feature = "csr")]
    {
        if conversation.with_untracked(ConversationState::is_empty) {
            let api = api.get_value();
            leptos::task::spawn_local(async move {
                crate::actions::chat::load_greeting(&api, &conversation).await;
            });
        }
    }

    let on_send = Callback::new(move |input: String| {
        let api = api.get_value();
        let session = session.get_value();
        leptos::task::spawn_local(async move {
            let _ = submit_question(&api, &session, &conversation, &input).await;
        });
    });

    let loading = Signal::derive(move || conversation.with(ConversationState::loading));

    view! {
        <main class="chat-page">
            <ChatHistory/>
            <ChatInput on_send=on_send loading=loading/>
        </main>
    }
}
