//! # Error Types
//!
//! Domain-specific error types for barista-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  barista-core errors (this file)                                        │
//! │  ├── CoreError        - Composition failures                            │
//! │  └── ValidationError  - Data-defined item/addition rejected             │
//! │                                                                         │
//! │  counter app errors (separate crate)                                    │
//! │  └── CounterError     - Config, rendering, and wrapped CoreError        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CounterError → exit status         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors surface at construction time, never at query time
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core composition errors.
///
/// Every variant is raised while *building* a chain. Once a chain exists,
/// `description()` and `cost()` cannot fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// An addition was asked to wrap nothing.
    ///
    /// ## When This Occurs
    /// - `AdditionWrapper::try_new(None, ..)`
    /// - `Addition::try_wrap(None)`
    #[error("Invalid composition: {addition} has no inner item to wrap")]
    MissingInner { addition: String },

    /// An arena node id does not refer to a committed node.
    ///
    /// ## When This Occurs
    /// - Wrapping an id issued by a different arena
    /// - Wrapping an id that has not been committed yet
    #[error("Invalid composition: node {id} is not committed (arena holds {len} nodes)")]
    UnknownNode { id: usize, len: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// True for the variants that mean "the inner reference is absent".
    pub fn is_invalid_composition(&self) -> bool {
        matches!(
            self,
            CoreError::MissingInner { .. } | CoreError::UnknownNode { .. }
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Validation errors for data-defined menu entries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Name does not match any menu entry.
    #[error("unknown {kind} '{value}'")]
    UnknownName { kind: &'static str, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::MissingInner {
            addition: "Milk".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid composition: Milk has no inner item to wrap"
        );

        let err = CoreError::UnknownNode { id: 7, len: 2 };
        assert_eq!(
            err.to_string(),
            "Invalid composition: node 7 is not committed (arena holds 2 nodes)"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "label".to_string(),
        };
        assert_eq!(err.to_string(), "label is required");

        let err = ValidationError::UnknownName {
            kind: "addition",
            value: "ketchup".to_string(),
        };
        assert_eq!(err.to_string(), "unknown addition 'ketchup'");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert!(!core_err.is_invalid_composition());
    }

    #[test]
    fn test_invalid_composition_classification() {
        assert!(CoreError::UnknownNode { id: 0, len: 0 }.is_invalid_composition());
        assert!(CoreError::MissingInner {
            addition: "Sugar".to_string()
        }
        .is_invalid_composition());
    }
}
