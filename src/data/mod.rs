mod store;

pub use store::{DEFAULT_QUESTIONS_PATH, QuestionStore, StoreError};

#[cfg(test)]
pub(crate) use store::test_support;
