//! Per-message like/dislike state.
//!
//! A click applies the sentiment locally at once and arms the hide timer.
//! Each arming gets a new generation; when the timer for the current
//! generation fires the affordance disappears for good. Repeating the current
//! sentiment is a no-op. Switching sentiment is a fresh event and re-arms.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

/// Delay between a feedback click and the affordance disappearing.
pub const FEEDBACK_HIDE_DELAY_MS: f64 = 900.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Sentiment {
    #[default]
    Neutral,
    Liked,
    Disliked,
}

impl Sentiment {
    /// Wire value of `like`; `None` while neutral.
    pub fn like(self) -> Option<bool> {
        match self {
            Self::Neutral => None,
            Self::Liked => Some(true),
            Self::Disliked => Some(false),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedbackState {
    pub sentiment: Sentiment,
    pub animating: bool,
    pub hide_at_ms: Option<f64>,
    /// Bumped by every accepted click; identifies the live hide timer.
    pub generation: u32,
    pub hidden: bool,
}

impl FeedbackState {
    /// Apply a click. Returns `true` if a feedback event should be sent.
    pub fn choose(&mut self, sentiment: Sentiment, now_ms: f64) -> bool {
        if self.hidden || sentiment == Sentiment::Neutral || sentiment == self.sentiment {
            return false;
        }
        self.sentiment = sentiment;
        self.animating = true;
        self.hide_at_ms = Some(now_ms + FEEDBACK_HIDE_DELAY_MS);
        self.generation = self.generation.wrapping_add(1);
        true
    }

    /// Hide the affordance permanently when the timer armed for `generation`
    /// fires. Timers from superseded clicks are ignored.
    ///
    /// Returns `true` if this call hid the affordance.
    pub fn expire_armed(&mut self, generation: u32) -> bool {
        if self.hidden || self.hide_at_ms.is_none() || generation != self.generation {
            return false;
        }
        self.hidden = true;
        self.animating = false;
        true
    }

    pub fn is_visible(&self, now_ms: f64) -> bool {
        !self.hidden && self.hide_at_ms.is_none_or(|deadline| now_ms < deadline)
    }
}
