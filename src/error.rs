use std::io;

use thiserror::Error;

use crate::data::StoreError;
use crate::export::ExportError;
use crate::scoring::ScoringError;
use crate::session::SessionError;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("question store: {0}")]
    Store(#[from] StoreError),
    #[error("quiz session: {0}")]
    Session(#[from] SessionError),
    #[error("scoring: {0}")]
    Scoring(#[from] ScoringError),
    #[error("exported answers: {0}")]
    Export(#[from] ExportError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
