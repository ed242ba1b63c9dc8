/// Error types for the trade journal
///
/// `ValidationError` covers rejected input; `JournalError` is the single
/// error kind enumeration surfaced by the service layer. The webserver maps
/// each kind to a status code through `JournalError::status_code`.
use thiserror::Error;

// =============================================================================
// VALIDATION ERRORS
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field absent (or empty, for strings)
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Numeric field absent or not strictly positive
    #[error("{0} must be greater than zero")]
    InvalidValue(&'static str),

    /// One or more request constraint violations, reported together
    #[error("{}", .0.join(", "))]
    Constraints(Vec<String>),
}

// =============================================================================
// SERVICE ERRORS
// =============================================================================

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Trade not found: {id}")]
    NotFound { id: String },

    #[error("Store error: {0}")]
    Store(String),
}

impl JournalError {
    /// HTTP status code for this error kind
    pub fn status_code(&self) -> u16 {
        match self {
            JournalError::Validation(_) | JournalError::MalformedRequest(_) => 400,
            JournalError::NotFound { .. } => 404,
            JournalError::Store(_) => 500,
        }
    }

    /// Stable machine-readable code for API clients
    pub fn code(&self) -> &'static str {
        match self {
            JournalError::Validation(_) => "validation_failed",
            JournalError::MalformedRequest(_) => "malformed_request",
            JournalError::NotFound { .. } => "trade_not_found",
            JournalError::Store(_) => "store_failure",
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}
