//! Like/dislike clicks and their best-effort backend notification.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use crate::net::api::{ApiError, ChatApi};
use crate::net::types::FeedbackEvent;
use crate::state::conversation::Message;
use crate::state::feedback::{FeedbackState, Sentiment};
use crate::util::session::SessionContext;
use crate::util::shared::SharedState;

/// Build the event for rating `message`, if it is a rateable answer.
pub fn feedback_event(session: &SessionContext, message: &Message, sentiment: Sentiment) -> Option<FeedbackEvent> {
    if !message.accepts_feedback() {
        return None;
    }
    Some(FeedbackEvent {
        question: message.question.clone()?,
        answer: message.text.clone(),
        like: sentiment.like()?,
        session_id: session.id.clone(),
    })
}

/// Apply a click to the local feedback state.
///
/// Returns the event to dispatch when the click changed the sentiment.
pub fn apply_choice<S>(
    feedback: &S,
    session: &SessionContext,
    message: &Message,
    sentiment: Sentiment,
    now_ms: f64,
) -> Option<FeedbackEvent>
where
    S: SharedState<FeedbackState>,
{
    let event = feedback_event(session, message, sentiment)?;
    let changed = feedback.modify(|f| f.choose(sentiment, now_ms))?;
    changed.then_some(event)
}

/// Post a feedback event. Local UI state never depends on the outcome.
///
/// # Errors
///
/// Returns the API error after logging it, so callers can decide whether to
/// surface it.
pub async fn send_feedback<A: ChatApi>(api: &A, event: &FeedbackEvent) -> Result<(), ApiError> {
    let result = api.feedback(event).await;
    if let Err(e) = &result {
        leptos::logging::warn!("feedback delivery failed: {e}");
    }
    result
}
