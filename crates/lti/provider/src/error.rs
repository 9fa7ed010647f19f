//! Error types for the launch pipeline

use thiserror::Error;

/// Errors reported by persistence collaborators
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    /// Item not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid data
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Connection error
    #[error("Connection error: {0}")]
    Connection(String),
}

/// Failure to build an instance's public URL
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UrlError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBase { url: String, reason: String },

    #[error("Widget start URL unavailable for instance {0}")]
    MissingStartUrl(String),
}

/// Launch rejected by the verification step
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerificationError {
    #[error("Launch verification failed: {0}")]
    Rejected(String),
}

/// Terminal launch failures
///
/// Every variant ends the launch; nothing is retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LaunchError {
    /// user id, derived session key or widget id absent
    #[error("Missing required parameter: {0}")]
    MissingRequiredParameter(&'static str),

    /// Widget unknown, or no instance could be found or created
    #[error("Widget or instance not found: {0}")]
    WidgetOrInstanceNotFound(String),

    /// Building the success URL failed
    #[error("Redirect construction failed: {0}")]
    RedirectConstructionFailure(#[from] UrlError),

    /// The verification step rejected the launch
    #[error("Verification failed: {0}")]
    VerificationFailed(#[from] VerificationError),

    /// A persistence collaborator failed
    #[error("Collaborator failure: {0}")]
    CollaboratorFailure(#[from] StorageError),

    /// The launch body was too large or could not be read
    #[error("Launch body rejected: {0}")]
    BodyRejected(String),
}

impl LaunchError {
    /// HTTP status reported when no fallback URL is available
    pub fn status_code(&self) -> u16 {
        match self {
            LaunchError::MissingRequiredParameter(_) => 500,
            LaunchError::WidgetOrInstanceNotFound(_) => 404,
            LaunchError::RedirectConstructionFailure(_) => 500,
            LaunchError::VerificationFailed(_) => 401,
            LaunchError::CollaboratorFailure(_) => 500,
            LaunchError::BodyRejected(_) => 413,
        }
    }

    /// Short machine-readable code for logs
    pub fn code(&self) -> &'static str {
        match self {
            LaunchError::MissingRequiredParameter(_) => "MISSING_PARAMETER",
            LaunchError::WidgetOrInstanceNotFound(_) => "NOT_FOUND",
            LaunchError::RedirectConstructionFailure(_) => "REDIRECT_FAILED",
            LaunchError::VerificationFailed(_) => "VERIFICATION_FAILED",
            LaunchError::CollaboratorFailure(_) => "COLLABORATOR_FAILURE",
            LaunchError::BodyRejected(_) => "BODY_REJECTED",
        }
    }
}

/// Result type alias for launch operations
pub type LaunchResult<T> = Result<T, LaunchError>;
