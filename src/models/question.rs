use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of answer options the admin editor offers per question.
pub const NUM_OPTIONS: usize = 4;

/// Category assigned when a question is saved without one.
pub const DEFAULT_CATEGORY: &str = "General";

/// A stored quiz question.
///
/// The on-disk field names (`question`, `correctOption`) are kept compatible
/// with existing question files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<String>,
    pub correct_option: usize,
    pub category: String,
}

/// A question that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuestion {
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<String>,
    pub correct_option: usize,
    pub category: String,
}

/// Reasons a question is rejected before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("question text must not be empty")]
    EmptyText,
    #[error("a question needs at least one option")]
    NoOptions,
    #[error("option {} must not be empty", label_of(.0))]
    EmptyOption(usize),
    #[error("correct option {index} is out of range for {len} options")]
    CorrectOptionOutOfRange { index: usize, len: usize },
}

impl Question {
    pub fn is_correct(&self, option: usize) -> bool {
        self.correct_option == option
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.text, &self.options, self.correct_option)
    }

    /// Editable copy of this question without its id.
    pub fn to_draft(&self) -> NewQuestion {
        NewQuestion {
            text: self.text.clone(),
            options: self.options.clone(),
            correct_option: self.correct_option,
            category: self.category.clone(),
        }
    }
}

impl NewQuestion {
    /// Empty draft with [`NUM_OPTIONS`] blank options.
    pub fn blank() -> Self {
        Self {
            text: String::new(),
            options: vec![String::new(); NUM_OPTIONS],
            correct_option: 0,
            category: DEFAULT_CATEGORY.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.text, &self.options, self.correct_option)
    }

    pub fn with_id(self, id: u32) -> Question {
        Question {
            id,
            text: self.text,
            options: self.options,
            correct_option: self.correct_option,
            category: normalize_category(&self.category),
        }
    }
}

impl Default for NewQuestion {
    fn default() -> Self {
        Self::blank()
    }
}

/// Trims the category and falls back to [`DEFAULT_CATEGORY`] when blank.
pub fn normalize_category(category: &str) -> String {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Letter shown next to an option: 0 -> 'A', 1 -> 'B', ...
pub fn option_label(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map_or('?', |i| char::from(b'A' + i))
}

fn label_of(index: &usize) -> char {
    option_label(*index)
}

fn validate_fields(
    text: &str,
    options: &[String],
    correct_option: usize,
) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyText);
    }

    if options.is_empty() {
        return Err(ValidationError::NoOptions);
    }

    if let Some(index) = options.iter().position(|o| o.trim().is_empty()) {
        return Err(ValidationError::EmptyOption(index));
    }

    if correct_option >= options.len() {
        return Err(ValidationError::CorrectOptionOutOfRange {
            index: correct_option,
            len: options.len(),
        });
    }

    Ok(())
}
