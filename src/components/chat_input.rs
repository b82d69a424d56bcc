//! Question textarea with a send button.
//!
//! Enter submits, Shift+Enter inserts a newline. While a request is in
//! flight the send button is replaced by a spinner and submits are dropped.

#[cfg(test)]
#[path = "chat_input_test.rs"]
mod chat_input_test;

use leptos::prelude::*;

pub const INPUT_PLACEHOLDER: &str = "Ask me something...";

#[component]
pub fn ChatInput(on_send: Callback<String>, #[prop(into)] loading: Signal<bool>) -> impl IntoView {
    let question = RwSignal::new(String::new());

    let do_send = move || {
        if loading.get_untracked() {
            return;
        }
        on_send.run(question.get_untracked());
        question.set(String::new());
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if submits_on_key(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="chat-input">
            <div class="chat-input__box">
                <textarea
                    class="chat-input__textarea"
                    placeholder=INPUT_PLACEHOLDER
                    prop:value=move || question.get()
                    on:input=move |ev| question.set(event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <div class="chat-input__action">
                    <Show
                        when=move || loading.get()
                        fallback=move || {
                            view! {
                                <button
                                    class="chat-input__send"
                                    aria-label="Ask question button"
                                    on:click=move |_| do_send()
                                >
                                    "➤"
                                </button>
                            }
                        }
                    >
                        <div class="spinner" role="status" aria-label="Waiting for answer"></div>
                    </Show>
                </div>
            </div>
        </div>
    }
}

pub(crate) fn submits_on_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}
