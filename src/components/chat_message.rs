//! A single chat bubble, with thumbs up/down on bot answers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Feedback state is local to the bubble. A click updates it synchronously,
//! posts the event in the background, and schedules the hide check; the
//! network result never touches the bubble.

#[cfg(test)]
#[path = "chat_message_test.rs"]
mod chat_message_test;

use leptos::prelude::*;

use crate::actions::feedback::apply_choice;
use crate::net::api::HttpChatApi;
use crate::state::conversation::{Message, Sender};
use crate::state::feedback::{FeedbackState, Sentiment};
use crate::util::clock::now_ms;
use crate::util::markdown::render_markdown_html;
use crate::util::session::SessionContext;

#[component]
pub fn ChatMessage(message: Message) -> impl IntoView {
    let api = StoredValue::new(expect_context::<HttpChatApi>());
    let session = StoredValue::new(expect_context::<SessionContext>());
    let feedback = RwSignal::new(FeedbackState::default());

    let rateable = message.accepts_feedback();
    let sender = message.sender;
    let body = if message.is_bot() {
        let rendered = render_markdown_html(&message.text);
        view! { <div class="chat-message__text chat-message__markdown" inner_html=rendered></div> }.into_any()
    } else {
        let text = message.text.clone();
        view! { <div class="chat-message__text">{text}</div> }.into_any()
    };
    let message = StoredValue::new(message);

    let rate = move |sentiment: Sentiment| {
        let event = message.with_value(|m| {
            session.with_value(|s| apply_choice(&feedback, s, m, sentiment, now_ms()))
        });
        let Some(event) = event else {
            return;
        };

        let api = api.get_value();
        leptos::task::spawn_local(async move {
            let _ = crate::actions::feedback::send_feedback(&api, &event).await;
        });

        #[cfg(feature = "csr")]
        {
            let armed = feedback.with_untracked(|f| f.generation);
            leptos::task::spawn_local(async move {
                use crate::util::shared::SharedState;

                let delay = std::time::Duration::from_secs_f64(crate::state::feedback::FEEDBACK_HIDE_DELAY_MS / 1000.0);
                gloo_timers::future::sleep(delay).await;
                feedback.modify(|f| f.expire_armed(armed));
            });
        }
    };

    let show_feedback = move || rateable && feedback.with(|f| f.is_visible(now_ms()));

    view! {
        <div class=message_class(sender)>
            <div class="chat-message__box">
                <div class="chat-message__title">{sender.as_str()}</div>
                {body}
            </div>
            <Show when=show_feedback>
                <div class="chat-message__feedback">
                    <button
                        class=move || feedback.with(|f| thumb_class(f, Sentiment::Liked))
                        aria-label="Thumbs up"
                        on:click=move |_| rate(Sentiment::Liked)
                    >
                        "👍"
                    </button>
                    <button
                        class=move || feedback.with(|f| thumb_class(f, Sentiment::Disliked))
                        aria-label="Thumbs down"
                        on:click=move |_| rate(Sentiment::Disliked)
                    >
                        "👎"
                    </button>
                </div>
            </Show>
        </div>
    }
}

/// Bot bubbles sit left, human bubbles right.
pub(crate) fn message_class(sender: Sender) -> &'static str {
    match sender {
        Sender::Human => "chat-message chat-message--right",
        Sender::Bot => "chat-message chat-message--left",
    }
}

pub(crate) fn thumb_class(state: &FeedbackState, thumb: Sentiment) -> String {
    let active = state.sentiment == thumb;
    let color = match (active, thumb) {
        (true, Sentiment::Liked) => "text-green-500",
        (true, Sentiment::Disliked) => "text-red-500",
        _ => "text-gray-500",
    };
    let mut class = format!("chat-message__thumb {color}");
    if active && state.animating {
        class.push_str(" animate-ping");
    }
    class
}
