//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Gender name outside FEMALE / MALE / NEUTRAL
    #[error("Invalid voice gender: {0}")]
    InvalidGender(String),
}
