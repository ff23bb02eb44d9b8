use serde::{Deserialize, Serialize};

use super::Question;

/// One recorded answer. Serialized as `questionId`, `selectedOption`,
/// `isCorrect`, which is also the export wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: u32,
    pub selected_option: usize,
    pub is_correct: bool,
}

impl Answer {
    /// Records `selected_option` against `question`, deriving correctness.
    pub fn for_question(question: &Question, selected_option: usize) -> Self {
        Self {
            question_id: question.id,
            selected_option,
            is_correct: question.is_correct(selected_option),
        }
    }
}
