//! Quiz session engine.
//!
//! A [`Session`] walks one attempt through a snapshot of the catalog. It owns
//! no timer: the caller invokes [`Session::tick`] once per second, which keeps
//! every transition synchronous and deterministic.
//!
//! ```text
//! AwaitingAnswer --select_option--> Answered
//! AwaitingAnswer --tick to zero---> TimedOut
//! Answered | TimedOut --advance---> AwaitingAnswer (next question)
//! Answered | TimedOut --advance---> Terminal (after the last question)
//! ```

use thiserror::Error;

use crate::models::{Answer, Question};

/// Seconds allowed per question.
pub const QUESTION_TIME_SECONDS: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("cannot start a quiz without questions")]
    EmptyCatalog,
    #[error("option {index} does not exist, the question has {len} options")]
    InvalidOptionIndex { index: usize, len: usize },
    #[error("the current question has not been answered yet")]
    NotYetAnswered,
    #[error("the quiz is already finished")]
    SessionFinished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingAnswer,
    Answered,
    /// The countdown hit zero before an option was selected. Counts as
    /// answered for advancing, but records no [`Answer`].
    TimedOut,
    Terminal,
}

/// Outcome of [`Session::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the next question.
    Next,
    /// The last question was passed; carries the final answer list.
    Finished(Vec<Answer>),
}

#[derive(Debug, Clone)]
pub struct Session {
    questions: Vec<Question>,
    current_index: usize,
    remaining_seconds: u32,
    answers: Vec<Answer>,
    current_answered: bool,
    finished: bool,
}

impl Session {
    /// Starts a session over `questions`, in order.
    pub fn start(questions: Vec<Question>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::EmptyCatalog);
        }

        Ok(Self {
            answers: Vec::with_capacity(questions.len()),
            questions,
            current_index: 0,
            remaining_seconds: QUESTION_TIME_SECONDS,
            current_answered: false,
            finished: false,
        })
    }

    pub fn state(&self) -> SessionState {
        if self.finished {
            SessionState::Terminal
        } else if self.current_answered {
            SessionState::Answered
        } else if self.remaining_seconds == 0 {
            SessionState::TimedOut
        } else {
            SessionState::AwaitingAnswer
        }
    }

    /// Records `option` for the current question.
    ///
    /// Only the first selection per question counts: once the question is
    /// answered or timed out, further calls return `Ok(())` and change nothing.
    pub fn select_option(&mut self, option: usize) -> Result<(), SessionError> {
        if self.state() != SessionState::AwaitingAnswer {
            return Ok(());
        }

        let question = &self.questions[self.current_index];
        let len = question.options.len();
        if option >= len {
            return Err(SessionError::InvalidOptionIndex { index: option, len });
        }

        self.answers.push(Answer::for_question(question, option));
        self.current_answered = true;
        Ok(())
    }

    /// One second of countdown. Ignored once answered or at zero.
    pub fn tick(&mut self) {
        if self.state() == SessionState::AwaitingAnswer {
            self.remaining_seconds -= 1;
        }
    }

    /// Moves past the current question.
    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        match self.state() {
            SessionState::Terminal => return Err(SessionError::SessionFinished),
            SessionState::AwaitingAnswer => return Err(SessionError::NotYetAnswered),
            SessionState::Answered | SessionState::TimedOut => {}
        }

        if self.current_index + 1 >= self.questions.len() {
            self.finished = true;
            return Ok(Advance::Finished(self.answers.clone()));
        }

        self.current_index += 1;
        self.remaining_seconds = QUESTION_TIME_SECONDS;
        self.current_answered = false;
        Ok(Advance::Next)
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    /// The answer recorded for the current question, if any.
    pub fn current_answer(&self) -> Option<&Answer> {
        if !self.current_answered {
            return None;
        }
        self.answers.last()
    }

    /// 1-based position of the current question.
    pub fn current_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn is_last_question(&self) -> bool {
        self.current_number() == self.questions.len()
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Share of questions already passed, 0-100.
    pub fn progress_percent(&self) -> u16 {
        let passed = if self.finished {
            self.questions.len()
        } else {
            self.current_index
        };
        (passed * 100 / self.questions.len()) as u16
    }
}
