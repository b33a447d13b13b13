use thiserror::Error;

/// Errors surfaced by the core query and controller layers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Malformed query parameters or generator input. The UI layer always
    /// supplies valid values, so this is defensive only.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The fetch operation itself rejected. Carries the user-facing message.
    #[error("{0}")]
    FetchFailed(String),
}
