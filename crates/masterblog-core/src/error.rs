//! Domain-level error types.

use thiserror::Error;

/// A single rejected form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required")]
    MissingTitle,

    #[error("Content is required")]
    MissingContent,

    #[error("A post with this title already exists")]
    DuplicateTitle,
}

impl ValidationError {
    /// Name of the form field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingTitle | ValidationError::DuplicateTitle => "title",
            ValidationError::MissingContent => "content",
        }
    }
}

/// Store errors - the request was rejected and nothing was written.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),

    #[error("Post not found: {id}")]
    NotFound { id: u64 },

    #[error("No post id left to allocate")]
    IdsExhausted,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl StoreError {
    /// True when every validation error is a duplicate title, i.e. the input
    /// itself was well formed but conflicts with stored data.
    pub fn is_conflict(&self) -> bool {
        match self {
            StoreError::Validation(errors) => {
                !errors.is_empty()
                    && errors.iter().all(|e| *e == ValidationError::DuplicateTitle)
            }
            _ => false,
        }
    }
}

impl From<Vec<ValidationError>> for StoreError {
    fn from(errors: Vec<ValidationError>) -> Self {
        StoreError::Validation(errors)
    }
}

/// Storage adapter errors. `Unreadable` means the data is there but not a
/// post collection; `Io` means it could not be reached at all.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Stored data is unreadable: {0}")]
    Unreadable(String),

    #[error("Storage I/O failed: {0}")]
    Io(String),
}

/// Non-fatal storage conditions reported alongside a successful result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StorageWarning {
    #[error("Stored posts could not be read; starting from an empty list.")]
    Unreadable,

    #[error("Changes could not be saved to storage.")]
    WriteFailed,
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
