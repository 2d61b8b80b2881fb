use thiserror::Error;

/// Reasons a participant payload is rejected.
///
/// The display strings are returned verbatim in `{"error": ...}` response
/// bodies, so they are part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingFields,
    #[error("Invalid email format.")]
    InvalidEmail,
    #[error("Date of birth must be in YYYY-MM-DD format.")]
    InvalidDob,
}
