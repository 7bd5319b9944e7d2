//! Error types for staff domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing staff domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StaffDomainError {
    /// The full name is empty after trimming.
    #[error("full name must not be empty")]
    EmptyFullName,

    /// The full name exceeds the 200-character storage limit.
    #[error("full name exceeds 200 character limit: {0}")]
    FullNameTooLong(String),

    /// The email address is not of the form `local@domain`.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),
}

/// Error returned while parsing access levels from persistence or input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown access level: {0}")]
pub struct ParseAccessLevelError(pub String);

/// Error returned while parsing staff status from persistence or input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown staff status: {0}")]
pub struct ParseStaffStatusError(pub String);
