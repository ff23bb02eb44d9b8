//! Hand-off of a finished answer list to the results view.
//!
//! The answers travel as percent-encoded JSON in an `answers` query
//! parameter: `answers=%5B%7B%22questionId%22%3A1%2C...%7D%5D`.

use std::string::FromUtf8Error;

use thiserror::Error;

use crate::models::Answer;

pub const ANSWERS_PARAM: &str = "answers";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("answers are not valid percent-encoded UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),
    #[error("answers are not a valid answer list: {0}")]
    Json(#[from] serde_json::Error),
    #[error("query has no `answers` parameter")]
    MissingParameter,
}

/// Percent-encoded JSON for `answers`.
pub fn encode_answers(answers: &[Answer]) -> Result<String, ExportError> {
    let json = serde_json::to_string(answers)?;
    Ok(urlencoding::encode(&json).into_owned())
}

pub fn decode_answers(encoded: &str) -> Result<Vec<Answer>, ExportError> {
    let json = urlencoding::decode(encoded)?;
    Ok(serde_json::from_str(&json)?)
}

/// `answers=<encoded>`, ready to append to a URL after `?`.
pub fn to_query(answers: &[Answer]) -> Result<String, ExportError> {
    Ok(format!("{}={}", ANSWERS_PARAM, encode_answers(answers)?))
}

/// Finds the `answers` parameter in `query` and decodes it. A leading `?` is
/// accepted, other parameters are ignored.
pub fn from_query(query: &str) -> Result<Vec<Answer>, ExportError> {
    let query = query.strip_prefix('?').unwrap_or(query);

    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == ANSWERS_PARAM)
        .ok_or(ExportError::MissingParameter)
        .and_then(|(_, value)| decode_answers(value))
}
