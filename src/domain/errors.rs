// src/domain/errors.rs
use std::fmt;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("post with title `{0}` already exists")]
    DuplicateTitle(String),
    /// Connection or transaction failure reported by the store.
    #[error("persistence error: {0}")]
    Persistence(String),
}

/// The rule a value object rejected its input for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    Required,
    TooShort { min: usize },
    TooLong { max: usize },
    Positive,
    OutOfRange { min: i64, max: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {rule}")]
pub struct ValidationError {
    pub field: &'static str,
    pub rule: ValidationRule,
}

impl ValidationError {
    pub fn new(field: &'static str, rule: ValidationRule) -> Self {
        Self { field, rule }
    }
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("is required"),
            Self::TooShort { min } => write!(f, "is too short (minimum {min} characters)"),
            Self::TooLong { max } => write!(f, "is too long (maximum {max} characters)"),
            Self::Positive => f.write_str("must be positive"),
            Self::OutOfRange { min, max } => write!(f, "must be between {min} and {max}"),
        }
    }
}

/// Checks the character length of `value` against `[min, max]`.
///
/// Empty input is always reported as [`ValidationRule::Required`], even when
/// `min` is zero.
pub(crate) fn check_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len == 0 {
        return Err(ValidationError::new(field, ValidationRule::Required));
    }
    if len < min {
        return Err(ValidationError::new(field, ValidationRule::TooShort { min }));
    }
    if len > max {
        return Err(ValidationError::new(field, ValidationRule::TooLong { max }));
    }
    Ok(())
}
