mod answer;
mod question;

pub use answer::Answer;
pub use question::{
    DEFAULT_CATEGORY, NUM_OPTIONS, NewQuestion, Question, ValidationError, normalize_category,
    option_label,
};

/// Screen the application is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    /// The catalog was empty when a quiz was requested.
    NoQuestions,
    Quiz,
    Results,
    AdminLogin,
    AdminList,
    AdminEditor,
}
