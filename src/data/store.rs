//! JSON file backed question catalog.
//!
//! Every write rewrites the whole document. There is no locking: two
//! concurrent writers race and the last one wins.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{error, info, warn};
use thiserror::Error;

use crate::models::{NewQuestion, Question, ValidationError, normalize_category};

pub const DEFAULT_QUESTIONS_PATH: &str = "questions.json";

/// Failures reported by write operations. Reads never fail, see
/// [`QuestionStore::list`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("question {0} not found")]
    NotFound(u32),
    #[error("no question ids left after {}", u32::MAX)]
    IdsExhausted,
    #[error("invalid question: {0}")]
    Invalid(#[from] ValidationError),
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize questions: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct QuestionStore {
    path: PathBuf,
}

impl QuestionStore {
    pub fn open<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All questions in file order.
    ///
    /// A missing, unreadable or malformed file yields an empty catalog.
    pub fn list(&self) -> Vec<Question> {
        let path = self.path.as_path();

        if !path.exists() {
            warn!("{} does not exist, using an empty catalog", path.display());
            return Vec::new();
        }

        let json_content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                error!("Failed to read {}: {}", path.display(), err);
                return Vec::new();
            }
        };

        match serde_json::from_str(&json_content) {
            Ok(questions) => questions,
            Err(err) => {
                error!("Failed to parse {}: {}", path.display(), err);
                Vec::new()
            }
        }
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for question in self.list() {
            if !categories.contains(&question.category) {
                categories.push(question.category);
            }
        }
        categories
    }

    /// Appends `question` under id `max(existing) + 1`. Ids are never reused
    /// while a higher id remains in the catalog.
    pub fn add(&self, question: NewQuestion) -> Result<Question, StoreError> {
        question.validate()?;

        let mut questions = self.list();
        let id = next_id(&questions).ok_or(StoreError::IdsExhausted)?;
        let question = question.with_id(id);
        questions.push(question.clone());
        self.save(&questions)?;

        info!("Added question {} ({})", question.id, question.category);
        Ok(question)
    }

    /// Replaces the stored question carrying the same id.
    pub fn update(&self, mut question: Question) -> Result<(), StoreError> {
        question.validate()?;
        question.category = normalize_category(&question.category);

        let mut questions = self.list();
        let id = question.id;
        let slot = questions
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or(StoreError::NotFound(id))?;
        *slot = question;
        self.save(&questions)?;

        info!("Updated question {}", id);
        Ok(())
    }

    pub fn delete(&self, id: u32) -> Result<(), StoreError> {
        let mut questions = self.list();
        let before = questions.len();
        questions.retain(|q| q.id != id);

        if questions.len() == before {
            return Err(StoreError::NotFound(id));
        }

        self.save(&questions)?;

        info!("Deleted question {}", id);
        Ok(())
    }

    fn save(&self, questions: &[Question]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(questions)?;
        fs::write(&self.path, json).map_err(|source| {
            error!("Failed to write {}: {}", self.path.display(), source);
            StoreError::Io {
                path: self.path.clone(),
                source,
            }
        })
    }
}

fn next_id(questions: &[Question]) -> Option<u32> {
    questions.iter().map(|q| q.id).max().unwrap_or(0).checked_add(1)
}
