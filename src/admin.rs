//! State of the admin screens: login form, question list and editor.

use crate::auth::AdminAuth;
use crate::data::{QuestionStore, StoreError};
use crate::models::{DEFAULT_CATEGORY, NewQuestion, Question};

const MAX_PASSWORD_LENGTH: usize = 64;

/// Masked password prompt.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    input: String,
    error: Option<String>,
}

impl LoginForm {
    pub fn push(&mut self, c: char) {
        self.error = None;
        if self.input.chars().count() < MAX_PASSWORD_LENGTH {
            self.input.push(c);
        }
    }

    pub fn pop(&mut self) {
        self.error = None;
        self.input.pop();
    }

    /// Checks the typed password; clears the input either way.
    pub fn submit(&mut self, auth: &AdminAuth) -> bool {
        let candidate = std::mem::take(&mut self.input);
        if auth.verify(&candidate) {
            self.error = None;
            true
        } else {
            self.error = Some("Wrong password. Please try again.".to_string());
            false
        }
    }

    pub fn masked(&self) -> String {
        "*".repeat(self.input.chars().count())
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Cursor over the catalog plus an optional pending delete.
#[derive(Debug, Clone, Default)]
pub struct QuestionList {
    questions: Vec<Question>,
    cursor: usize,
    pending_delete: Option<u32>,
}

impl QuestionList {
    pub fn reload(&mut self, store: &QuestionStore) {
        self.questions = store.list();
        self.cursor = self.cursor.min(self.questions.len().saturating_sub(1));
        self.pending_delete = None;
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> Option<&Question> {
        self.questions.get(self.cursor)
    }

    pub fn next(&mut self) {
        if self.cursor + 1 < self.questions.len() {
            self.cursor += 1;
        }
    }

    pub fn previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Marks the selected question for deletion, pending confirmation.
    pub fn request_delete(&mut self) {
        self.pending_delete = self.selected().map(|q| q.id);
    }

    pub fn pending_delete(&self) -> Option<u32> {
        self.pending_delete
    }

    pub fn take_pending_delete(&mut self) -> Option<u32> {
        self.pending_delete.take()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Text,
    Option(usize),
    Correct,
    Category,
}

/// What [`Editor::save`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Added(u32),
    Updated(u32),
}

/// Form for a new question or an edit of an existing one.
#[derive(Debug, Clone)]
pub struct Editor {
    editing_id: Option<u32>,
    draft: NewQuestion,
    field: EditorField,
    categories: Vec<String>,
}

impl Editor {
    pub fn create(categories: Vec<String>) -> Self {
        Self {
            editing_id: None,
            draft: NewQuestion::blank(),
            field: EditorField::Text,
            categories: with_default_category(categories),
        }
    }

    pub fn edit(question: &Question, categories: Vec<String>) -> Self {
        Self {
            editing_id: Some(question.id),
            draft: question.to_draft(),
            field: EditorField::Text,
            categories: with_default_category(categories),
        }
    }

    pub fn title(&self) -> &'static str {
        if self.editing_id.is_some() {
            "Edit question"
        } else {
            "New question"
        }
    }

    pub fn draft(&self) -> &NewQuestion {
        &self.draft
    }

    pub fn field(&self) -> EditorField {
        self.field
    }

    pub fn fields(&self) -> Vec<EditorField> {
        let mut fields = Vec::with_capacity(self.draft.options.len() + 3);
        fields.push(EditorField::Text);
        fields.extend((0..self.draft.options.len()).map(EditorField::Option));
        fields.push(EditorField::Correct);
        fields.push(EditorField::Category);
        fields
    }

    pub fn next_field(&mut self) {
        self.step_field(1);
    }

    pub fn previous_field(&mut self) {
        let len = self.fields().len();
        self.step_field(len - 1);
    }

    fn step_field(&mut self, step: usize) {
        let fields = self.fields();
        let position = fields.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = fields[(position + step) % fields.len()];
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(text) = self.focused_text_mut() {
            text.push(c);
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(text) = self.focused_text_mut() {
            text.pop();
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.field {
            EditorField::Text => Some(&mut self.draft.text),
            EditorField::Option(i) => self.draft.options.get_mut(i),
            EditorField::Category => Some(&mut self.draft.category),
            EditorField::Correct => None,
        }
    }

    /// Left/Right on a choice field: cycles the correct option or the known
    /// categories.
    pub fn cycle(&mut self, forward: bool) {
        match self.field {
            EditorField::Correct => {
                let len = self.draft.options.len().max(1);
                let step = if forward { 1 } else { len - 1 };
                self.draft.correct_option = (self.draft.correct_option + step) % len;
            }
            EditorField::Category => {
                let len = self.categories.len();
                if len == 0 {
                    return;
                }
                let next = match self.categories.iter().position(|c| *c == self.draft.category) {
                    Some(i) if forward => (i + 1) % len,
                    Some(i) => (i + len - 1) % len,
                    None => 0,
                };
                self.draft.category = self.categories[next].clone();
            }
            EditorField::Text | EditorField::Option(_) => {}
        }
    }

    pub fn save(&self, store: &QuestionStore) -> Result<SaveOutcome, StoreError> {
        match self.editing_id {
            Some(id) => {
                store.update(self.draft.clone().with_id(id))?;
                Ok(SaveOutcome::Updated(id))
            }
            None => store
                .add(self.draft.clone())
                .map(|question| SaveOutcome::Added(question.id)),
        }
    }
}

fn with_default_category(mut categories: Vec<String>) -> Vec<String> {
    if !categories.iter().any(|c| c == DEFAULT_CATEGORY) {
        categories.push(DEFAULT_CATEGORY.to_string());
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_support::{TempStore, question};
    use crate::models::NUM_OPTIONS;

    fn type_str(editor: &mut Editor, text: &str) {
        for c in text.chars() {
            editor.insert_char(c);
        }
    }

    #[test]
    fn test_login_form() {
        let auth = AdminAuth::new(Some("pw".to_string()));
        let mut form = LoginForm::default();

        form.push('p');
        form.push('x');
        assert_eq!(form.masked(), "**");
        assert!(!form.submit(&auth));
        assert!(form.error().is_some());
        assert_eq!(form.masked(), "");

        form.push('p');
        assert!(form.error().is_none());
        form.push('w');
        assert!(form.submit(&auth));
    }

    #[test]
    fn test_field_cycle_wraps() {
        let mut editor = Editor::create(Vec::new());
        assert_eq!(editor.fields().len(), NUM_OPTIONS + 3);

        editor.previous_field();
        assert_eq!(editor.field(), EditorField::Category);
        editor.next_field();
        assert_eq!(editor.field(), EditorField::Text);
        editor.next_field();
        assert_eq!(editor.field(), EditorField::Option(0));
    }

    #[test]
    fn test_cycle_correct_option_and_category() {
        let mut editor = Editor::create(vec!["Rust".to_string()]);
        while editor.field() != EditorField::Correct {
            editor.next_field();
        }
        editor.cycle(false);
        assert_eq!(editor.draft().correct_option, NUM_OPTIONS - 1);
        editor.cycle(true);
        assert_eq!(editor.draft().correct_option, 0);

        editor.next_field();
        assert_eq!(editor.draft().category, DEFAULT_CATEGORY);
        editor.cycle(true);
        assert_eq!(editor.draft().category, "Rust");
        editor.cycle(true);
        assert_eq!(editor.draft().category, DEFAULT_CATEGORY);
    }

    #[test]
    fn test_create_and_save() {
        let temp = TempStore::new();
        let mut editor = Editor::create(temp.store.categories());

        type_str(&mut editor, "Capital of France?");
        for answer in ["Paris", "Lyon", "Nice", "Lille"] {
            editor.next_field();
            type_str(&mut editor, answer);
        }

        assert_eq!(editor.save(&temp.store).unwrap(), SaveOutcome::Added(1));
        let stored = temp.store.list();
        assert_eq!(stored[0].text, "Capital of France?");
        assert_eq!(stored[0].options[3], "Lille");
        assert_eq!(stored[0].category, DEFAULT_CATEGORY);
    }

    #[test]
    fn test_save_incomplete_draft_fails() {
        let temp = TempStore::new();
        let mut editor = Editor::create(Vec::new());
        type_str(&mut editor, "Only a question");
        assert!(matches!(
            editor.save(&temp.store),
            Err(StoreError::Invalid(_))
        ));
    }

    #[test]
    fn test_edit_existing() {
        let temp = TempStore::new();
        let original = temp.store.add(question("Old", "Rust", 0)).unwrap();

        let mut editor = Editor::edit(&original, temp.store.categories());
        assert_eq!(editor.title(), "Edit question");
        editor.delete_char();
        editor.delete_char();
        editor.delete_char();
        type_str(&mut editor, "New");

        assert_eq!(
            editor.save(&temp.store).unwrap(),
            SaveOutcome::Updated(original.id)
        );
        assert_eq!(temp.store.list()[0].text, "New");
    }

    #[test]
    fn test_question_list_delete_flow() {
        let temp = TempStore::new();
        temp.store.add(question("one", "A", 0)).unwrap();
        temp.store.add(question("two", "A", 0)).unwrap();

        let mut list = QuestionList::default();
        list.reload(&temp.store);
        list.next();
        list.next();
        assert_eq!(list.cursor(), 1);

        list.request_delete();
        assert_eq!(list.pending_delete(), Some(2));
        let id = list.take_pending_delete().unwrap();
        temp.store.delete(id).unwrap();

        list.reload(&temp.store);
        assert_eq!(list.cursor(), 0);
        assert_eq!(list.questions().len(), 1);
    }
}
