//! # Base Items
//!
//! Terminal, non-composed products: the innermost node of every chain.
//!
//! ## Menu
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Base Item      Label        Price      │
//! │  ─────────────  ───────────  ─────────  │
//! │  Espresso       "Espresso"   $3.00      │
//! │  Tea            "Tea"        $2.00      │
//! │  Latte          "Latte"      $3.50      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! New products do not need a new variant: [`CustomItem`] or any other
//! [`Priceable`] implementor can sit at the bottom of a chain.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::priceable::Priceable;
use crate::validation::{normalize_name, validate_label, validate_price};

// =============================================================================
// Base Item
// =============================================================================

/// A built-in base product with a fixed label and price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BaseItem {
    Espresso,
    Tea,
    Latte,
}

impl BaseItem {
    /// Every base item, in menu order.
    pub const ALL: [BaseItem; 3] = [BaseItem::Espresso, BaseItem::Tea, BaseItem::Latte];

    /// The fixed label shown in descriptions.
    pub const fn label(&self) -> &'static str {
        match self {
            BaseItem::Espresso => "Espresso",
            BaseItem::Tea => "Tea",
            BaseItem::Latte => "Latte",
        }
    }

    /// The fixed price.
    pub const fn price(&self) -> Money {
        match self {
            BaseItem::Espresso => Money::from_cents(300),
            BaseItem::Tea => Money::from_cents(200),
            BaseItem::Latte => Money::from_cents(350),
        }
    }
}

impl Priceable for BaseItem {
    fn description(&self) -> String {
        self.label().to_string()
    }

    fn cost(&self) -> Money {
        self.price()
    }
}

impl fmt::Display for BaseItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses a menu name, case-insensitively.
///
/// ## Example
/// ```rust
/// use barista_core::BaseItem;
///
/// assert_eq!("LATTE".parse::<BaseItem>().unwrap(), BaseItem::Latte);
/// assert!("mocha".parse::<BaseItem>().is_err());
/// ```
impl FromStr for BaseItem {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        BaseItem::ALL
            .into_iter()
            .find(|item| normalize_name(item.label()) == wanted)
            .ok_or_else(|| ValidationError::UnknownName {
                kind: "base item",
                value: s.trim().to_string(),
            })
    }
}

// =============================================================================
// Custom Item
// =============================================================================

/// A base product defined at runtime, e.g. a seasonal special.
///
/// ## Example
/// ```rust
/// use barista_core::{CustomItem, Money, Priceable};
///
/// let cocoa = CustomItem::new("Hot Cocoa", Money::from_cents(275)).unwrap();
/// assert_eq!(cocoa.description(), "Hot Cocoa");
/// assert_eq!(cocoa.cost().cents(), 275);
/// ```
///
/// Deserialization goes through [`CustomItem::new`], so stored items are
/// validated the same way as ones built in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct CustomItem {
    label: String,
    price: Money,
}

impl CustomItem {
    /// Creates a custom item after validating its label and price.
    pub fn new(label: &str, price: Money) -> CoreResult<Self> {
        let label = validate_label(label)?;
        validate_price(price)?;
        Ok(CustomItem { label, price })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn price(&self) -> Money {
        self.price
    }
}

impl<'de> Deserialize<'de> for CustomItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            label: String,
            price: Money,
        }

        let raw = Raw::deserialize(deserializer)?;
        CustomItem::new(&raw.label, raw.price).map_err(serde::de::Error::custom)
    }
}

impl Priceable for CustomItem {
    fn description(&self) -> String {
        self.label.clone()
    }

    fn cost(&self) -> Money {
        self.price
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_unwrapped_items_report_fixed_values() {
        let expected = [("Espresso", 300), ("Tea", 200), ("Latte", 350)];
        for (item, (label, cents)) in BaseItem::ALL.into_iter().zip(expected) {
            assert_eq!(item.description(), label);
            assert_eq!(item.cost(), Money::from_cents(cents));
        }
    }

    #[test]
    fn test_all_prices_positive() {
        assert!(BaseItem::ALL.iter().all(|item| item.price().is_positive()));
    }

    #[test]
    fn test_queries_are_idempotent() {
        let latte = BaseItem::Latte;
        assert_eq!(latte.description(), latte.description());
        assert_eq!(latte.cost(), latte.cost());
    }

    #[test]
    fn test_parse_base_item() {
        assert_eq!("espresso".parse::<BaseItem>(), Ok(BaseItem::Espresso));
        assert_eq!(" Tea ".parse::<BaseItem>(), Ok(BaseItem::Tea));
        assert_eq!(
            "mocha".parse::<BaseItem>(),
            Err(ValidationError::UnknownName {
                kind: "base item",
                value: "mocha".to_string()
            })
        );
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&BaseItem::Espresso).unwrap();
        assert_eq!(json, "\"espresso\"");
    }

    #[test]
    fn test_custom_item_deserialize_validates() {
        let err = serde_json::from_str::<CustomItem>(r#"{"label":"","price":-500}"#).unwrap_err();
        assert!(err.to_string().contains("label is required"));

        let err =
            serde_json::from_str::<CustomItem>(r#"{"label":"Water","price":-500}"#).unwrap_err();
        assert!(err.to_string().contains("price must be positive"));

        let cocoa: CustomItem =
            serde_json::from_str(r#"{"label":" Hot Cocoa ","price":275}"#).unwrap();
        assert_eq!(cocoa, CustomItem::new("Hot Cocoa", Money::from_cents(275)).unwrap());
    }

    #[test]
    fn test_custom_item_price_ceiling() {
        assert!(matches!(
            CustomItem::new("Gold", Money::from_cents(i64::MAX)),
            Err(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));
        assert!(CustomItem::new("Gold", Money::from_cents(crate::MAX_PRICE_CENTS)).is_ok());
    }

    #[test]
    fn test_custom_item_validation() {
        let cocoa = CustomItem::new("  Hot Cocoa ", Money::from_cents(275)).unwrap();
        assert_eq!(cocoa.label(), "Hot Cocoa");
        assert_eq!(cocoa.price(), Money::from_cents(275));

        assert!(matches!(
            CustomItem::new("", Money::from_cents(100)),
            Err(CoreError::Validation(ValidationError::Required { .. }))
        ));
        assert!(matches!(
            CustomItem::new("Water", Money::zero()),
            Err(CoreError::Validation(ValidationError::MustBePositive { .. }))
        ));
    }
}
