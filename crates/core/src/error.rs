//! Domain error taxonomy.
//!
//! Every failure a service operation can surface to a client maps onto one
//! of these variants. The HTTP layer owns the status-code mapping; the
//! messages here are the human-readable `detail` strings clients see.

/// A domain-level error produced by service operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The input was structurally valid JSON but violates a domain rule.
    #[error("{0}")]
    Validation(String),

    /// A uniqueness rule would be violated.
    #[error("{0}")]
    Conflict(String),

    /// Missing, invalid, or expired credentials.
    #[error("{0}")]
    Unauthorized(String),

    /// Authenticated, but not allowed to touch the target entity.
    #[error("{0}")]
    Forbidden(String),

    /// An unexpected failure the client cannot act on.
    #[error("{0}")]
    Internal(String),
}
