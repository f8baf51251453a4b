//! Error types for storage access and the recommendation pipeline.

use thiserror::Error;

/// Failures reported by a `CareerStore` implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
  #[error("store unavailable: {0}")]
  Unavailable(String),

  #[error("corrupt record: {0}")]
  Corrupt(String),
}

/// Errors that abort a recommendation. No partial result is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
  /// The user has no quiz history to score against.
  #[error("no quiz data: take some quizzes first")]
  NoQuizData,

  /// The interest questionnaire has not been submitted.
  #[error("assessment incomplete: the interest questionnaire has not been submitted")]
  AssessmentIncomplete,

  #[error("storage error: {0}")]
  Storage(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, RecommendError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn store_errors_convert_into_storage_variant() {
    let e: RecommendError = StoreError::Unavailable("timeout".into()).into();
    assert_eq!(e, RecommendError::Storage(StoreError::Unavailable("timeout".into())));
    assert_eq!(e.to_string(), "storage error: store unavailable: timeout");
  }
}
