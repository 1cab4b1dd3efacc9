//! # Validation Module
//!
//! Checks for data-defined menu entries.
//!
//! The built-in base items and additions are correct by construction. Entries
//! built at runtime (`CustomItem`, `Increment::custom`) go through these
//! validators first, so the `Priceable` guarantees (non-empty description,
//! non-negative cost) hold for every item in a chain.
//!
//! ## Usage
//! ```rust
//! use barista_core::validation::{validate_label, validate_price};
//! use barista_core::Money;
//!
//! assert!(validate_label("Oat Milk").is_ok());
//! assert!(validate_price(Money::from_cents(60)).is_ok());
//! assert!(validate_price(Money::zero()).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_LABEL_LEN, MAX_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a menu label.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most `MAX_LABEL_LEN` characters
/// - Must not contain the chain separator `,`
///
/// ## Returns
/// The trimmed label.
pub fn validate_label(label: &str) -> ValidationResult<String> {
    let label = label.trim();

    if label.is_empty() {
        return Err(ValidationError::Required {
            field: "label".to_string(),
        });
    }

    if label.chars().count() > MAX_LABEL_LEN {
        return Err(ValidationError::TooLong {
            field: "label".to_string(),
            max: MAX_LABEL_LEN,
        });
    }

    // A comma would make one layer read as two in the description
    if label.contains(',') {
        return Err(ValidationError::InvalidFormat {
            field: "label".to_string(),
            reason: "must not contain ','".to_string(),
        });
    }

    Ok(label.to_string())
}

/// Validates a price or increment.
///
/// ## Rules
/// - Must be positive (> 0); every menu entry costs something
/// - Must not exceed `MAX_PRICE_CENTS`
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    if price.cents() > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 1,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Normalizes a menu name for lookup: lowercase, with `-`, `_` and
/// whitespace runs folded to a single space.
pub(crate) fn normalize_name(name: &str) -> String {
    name.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_label() {
        assert_eq!(validate_label("  Oat Milk ").unwrap(), "Oat Milk");
        assert!(validate_label("").is_err());
        assert!(validate_label("   ").is_err());
        assert!(validate_label(&"A".repeat(MAX_LABEL_LEN + 1)).is_err());
        assert!(validate_label("Milk, Sugar").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_cents(1)).is_ok());
        assert!(validate_price(Money::from_cents(MAX_PRICE_CENTS)).is_ok());
        assert_eq!(
            validate_price(Money::from_cents(MAX_PRICE_CENTS + 1)),
            Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 1,
                max: MAX_PRICE_CENTS,
            })
        );
        assert!(validate_price(Money::from_cents(i64::MAX)).is_err());
        assert_eq!(
            validate_price(Money::from_cents(-50)),
            Err(ValidationError::MustBePositive {
                field: "price".to_string()
            })
        );
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Whipped_Cream"), "whipped cream");
        assert_eq!(normalize_name("whipped-cream"), "whipped cream");
        assert_eq!(normalize_name("  WHIPPED   cream "), "whipped cream");
    }
}
