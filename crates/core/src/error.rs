use std::path::PathBuf;

use crate::validation::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum SubjectError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("subject directory does not exist: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("subject directory failed validation: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("failed to read subjects directory: {0}")]
    Io(#[from] std::io::Error),
}

impl From<neurorm_types::IdError> for SubjectError {
    fn from(e: neurorm_types::IdError) -> Self {
        SubjectError::InvalidInput(e.to_string())
    }
}

impl SubjectError {
    /// Returns the validation report, if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            SubjectError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

pub type SubjectResult<T> = std::result::Result<T, SubjectError>;
