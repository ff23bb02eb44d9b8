//! Short messages shown above the current question.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::session::SessionState;

const ENCOURAGEMENT: [&str; 5] = [
    "You can do it! Focus on the question.",
    "Use what you know and trust your skills.",
    "Every question is a chance to learn something.",
    "You are doing great! Keep it up!",
    "Read the question carefully and take your time.",
];

const PRAISE: [&str; 5] = [
    "Outstanding! That is the right answer!",
    "Fantastic! You got it right!",
    "Bravo! Your knowledge pays off!",
    "Perfect! Keep up this performance!",
    "Excellent! You know this topic!",
];

const CONSOLATION: [&str; 5] = [
    "No worries, mistakes are the best teachers!",
    "You will get it next time!",
    "Now you know the right answer!",
    "Every mistake is a chance to grow!",
    "Think about why the highlighted answer is right.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Encouragement,
    Praise,
    Consolation,
}

impl MessageKind {
    /// Which pool applies, given the session state and whether the current
    /// answer (if any) was correct.
    pub fn for_state(state: SessionState, answered_correctly: Option<bool>) -> Self {
        match (state, answered_correctly) {
            (SessionState::Answered, Some(true)) => MessageKind::Praise,
            (SessionState::Answered, Some(false)) | (SessionState::TimedOut, _) => {
                MessageKind::Consolation
            }
            _ => MessageKind::Encouragement,
        }
    }

    fn pool(self) -> &'static [&'static str] {
        match self {
            MessageKind::Encouragement => &ENCOURAGEMENT,
            MessageKind::Praise => &PRAISE,
            MessageKind::Consolation => &CONSOLATION,
        }
    }
}

pub fn pick_message<R: Rng + ?Sized>(kind: MessageKind, rng: &mut R) -> &'static str {
    kind.pool().choose(rng).copied().unwrap_or_default()
}
