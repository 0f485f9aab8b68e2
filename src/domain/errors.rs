use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    /// One message for every credential failure: unknown email, wrong
    /// password, and missing/invalid/expired tokens are indistinguishable
    /// to the caller.
    #[error("Invalid credentials")]
    Authentication,

    #[error("{0} not found")]
    NotFound(&'static str),

    /// A deployment invariant is broken (e.g. the default role was never
    /// seeded). Surfaces as a server error, never as user feedback.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
