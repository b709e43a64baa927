use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("insufficient content extracted from article ({length} characters)")]
    InsufficientContent { length: usize },
}
