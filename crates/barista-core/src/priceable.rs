//! # Priceable
//!
//! The one contract every menu item honors, wrapped or not.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Caller ──► description() / cost()                                      │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │   AdditionWrapper(WhippedCream)   ", Whipped Cream"   +$0.70            │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │   AdditionWrapper(Milk)           ", Milk"            +$0.50            │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │   BaseItem::Espresso              "Espresso"           $3.00            │
//! │                                                                         │
//! │  The caller cannot tell how deep the chain is, and never needs to.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::money::Money;

/// Anything that can report a description and a cost.
///
/// ## Contract
/// - `description()` is never empty
/// - `cost()` is never negative
/// - Both are pure: repeated calls on the same value return the same result
pub trait Priceable {
    /// Human-readable description, e.g. `"Espresso, Milk"`.
    fn description(&self) -> String;

    /// Total cost of this item including every layer it wraps.
    fn cost(&self) -> Money;
}

impl<P: Priceable + ?Sized> Priceable for &P {
    fn description(&self) -> String {
        (**self).description()
    }

    fn cost(&self) -> Money {
        (**self).cost()
    }
}

impl<P: Priceable + ?Sized> Priceable for Box<P> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn cost(&self) -> Money {
        (**self).cost()
    }
}
