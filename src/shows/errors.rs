//! Show validation errors

use thiserror::Error;

/// Result type for show validation
pub type ShowResult<T> = Result<T, ShowError>;

/// Reasons a request body is not a valid show
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShowError {
    #[error("Request body must be a JSON object")]
    NotAnObject,

    #[error("No name provided in shows POST request")]
    MissingName,

    #[error("No number of episodes seen provided in shows POST request")]
    MissingEpisodes,

    #[error("Field '{field}' must be {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}
