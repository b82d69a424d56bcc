use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::actions::chat::submit_question;
use crate::actions::fake_api::FakeApi;
use crate::state::conversation::ConversationState;

fn session() -> SessionContext {
    SessionContext::new("test-session-id")
}

fn feedback_store() -> Rc<RefCell<FeedbackState>> {
    Rc::new(RefCell::new(FeedbackState::default()))
}

/// Conversation `[greeting, question, answer]` built through the send pipeline.
fn answered_conversation(question: &str, answer: &str) -> ConversationState {
    let api = FakeApi::answering([Ok(answer.to_owned())]);
    let store = Rc::new(RefCell::new(ConversationState::default()));
    store.borrow_mut().seed_greeting(Ok("Hi".to_owned()));
    block_on(submit_question(&api, &session(), &store, question));
    store.borrow().clone()
}

#[test]
fn thumbs_up_sends_previous_question_and_like_true() {
    let conversation = answered_conversation("What is your name?", "Hello, bot here!");
    let api = FakeApi::default();
    let feedback = feedback_store();
    let index = 2;

    let event = apply_choice(&feedback, &session(), &conversation.messages()[index], Sentiment::Liked, 0.0).unwrap();
    block_on(send_feedback(&api, &event)).unwrap();

    assert_eq!(
        *api.feedback_sent.borrow(),
        vec![FeedbackEvent {
            question: conversation.messages()[index - 1].text.clone(),
            answer: "Hello, bot here!".to_owned(),
            like: true,
            session_id: "test-session-id".to_owned(),
        }]
    );
    assert_eq!(feedback.borrow().sentiment, Sentiment::Liked);
}

#[test]
fn thumbs_down_sends_like_false() {
    let conversation = answered_conversation("Who are you?", "I am a bot.");
    let feedback = feedback_store();

    let event = apply_choice(&feedback, &session(), &conversation.messages()[2], Sentiment::Disliked, 0.0).unwrap();

    assert_eq!(event.question, "Who are you?");
    assert_eq!(event.answer, "I am a bot.");
    assert!(!event.like);
}

#[test]
fn repeated_click_produces_no_second_event() {
    let conversation = answered_conversation("q", "a");
    let feedback = feedback_store();
    let message = &conversation.messages()[2];

    assert!(apply_choice(&feedback, &session(), message, Sentiment::Liked, 0.0).is_some());
    assert!(apply_choice(&feedback, &session(), message, Sentiment::Liked, 10.0).is_none());
    assert!(apply_choice(&feedback, &session(), message, Sentiment::Disliked, 20.0).is_some());
}

#[test]
fn greeting_and_human_messages_are_not_rateable() {
    let conversation = answered_conversation("q", "a");
    let feedback = feedback_store();

    assert!(apply_choice(&feedback, &session(), &conversation.messages()[0], Sentiment::Liked, 0.0).is_none());
    assert!(apply_choice(&feedback, &session(), &conversation.messages()[1], Sentiment::Liked, 0.0).is_none());
    assert_eq!(*feedback.borrow(), FeedbackState::default());
}

#[test]
fn delivery_failure_is_returned_and_local_state_kept() {
    let conversation = answered_conversation("q", "a");
    let api = FakeApi::default();
    *api.feedback_result.borrow_mut() = Some(ApiError::Status(503));
    let feedback = feedback_store();

    let event = apply_choice(&feedback, &session(), &conversation.messages()[2], Sentiment::Liked, 0.0).unwrap();
    let result = block_on(send_feedback(&api, &event));

    assert_eq!(result, Err(ApiError::Status(503)));
    assert_eq!(feedback.borrow().sentiment, Sentiment::Liked);
    assert!(feedback.borrow().animating);
}

#[test]
fn affordance_hides_when_armed_timer_fires() {
    let conversation = answered_conversation("q", "a");
    let feedback = feedback_store();
    apply_choice(&feedback, &session(), &conversation.messages()[2], Sentiment::Liked, 5_000.0).unwrap();
    assert!(feedback.borrow().is_visible(5_500.0));

    let armed = feedback.borrow().generation;
    assert!(feedback.borrow_mut().expire_armed(armed));
    assert!(!feedback.borrow().is_visible(5_900.0));
}
