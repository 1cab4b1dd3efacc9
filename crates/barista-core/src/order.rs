//! # Orders
//!
//! The composition root: start from one base item, rebind to a new wrapper
//! for every addition, then read the result once.
//!
//! ## Order Flow
//! ```text
//! Order::new(Espresso)          "Espresso"                          $3.00
//!      │ .add(Milk)
//!      ▼
//! Milk(Espresso)                "Espresso, Milk"                    $3.50
//!      │ .add(Sugar)
//!      ▼
//! Sugar(Milk(Espresso))         "Espresso, Milk, Sugar"             $3.70
//!      │ .add(WhippedCream)
//!      ▼
//! WhippedCream(Sugar(...))      "Espresso, Milk, Sugar, Whipped Cream"  $4.40
//!      │ .summary()
//!      ▼
//! OrderSummary { description, total, layers: 3 }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use ts_rs::TS;

use crate::addition::{AdditionWrapper, Increment};
use crate::items::BaseItem;
use crate::money::Money;
use crate::priceable::Priceable;

/// A drink being assembled.
///
/// Holds the outermost node of its chain. Each [`Order::add`] replaces it
/// with a wrapper around the previous value, so the chain only grows.
pub struct Order {
    item: Box<dyn Priceable>,
    layers: usize,
}

impl Order {
    /// Starts an order from a built-in base item.
    pub fn new(base: BaseItem) -> Self {
        Order::from_item(base)
    }

    /// Starts an order from any priceable item, e.g. a `CustomItem`.
    pub fn from_item(item: impl Priceable + 'static) -> Self {
        Order {
            item: Box::new(item),
            layers: 0,
        }
    }

    /// Wraps the current drink in one more addition.
    ///
    /// ## Example
    /// ```rust
    /// use barista_core::{Addition, BaseItem, Order, Priceable};
    ///
    /// let order = Order::new(BaseItem::Tea)
    ///     .add(Addition::Milk)
    ///     .add(Addition::Milk);
    ///
    /// assert_eq!(order.description(), "Tea, Milk, Milk");
    /// assert_eq!(order.cost().to_string(), "$3.00");
    /// ```
    pub fn add(self, increment: impl Into<Increment>) -> Self {
        let increment = increment.into();
        debug!(
            addition = increment.label().unwrap_or("identity"),
            delta = %increment.cost(),
            depth = self.layers + 1,
            "wrapping order"
        );
        Order {
            item: Box::new(AdditionWrapper::new(self.item, increment)),
            layers: self.layers + 1,
        }
    }

    /// Applies every addition in sequence.
    pub fn add_all<I>(self, additions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Increment>,
    {
        additions
            .into_iter()
            .fold(self, |order, addition| order.add(addition))
    }

    /// Number of additions applied so far.
    pub fn layers(&self) -> usize {
        self.layers
    }

    /// Reads description and cost once from the outermost node.
    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            description: self.item.description(),
            total: self.item.cost(),
            layers: self.layers,
        }
    }
}

impl Priceable for Order {
    fn description(&self) -> String {
        self.item.description()
    }

    fn cost(&self) -> Money {
        self.item.cost()
    }
}

impl fmt::Debug for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Order")
            .field("description", &self.item.description())
            .field("cost", &self.item.cost())
            .field("layers", &self.layers)
            .finish()
    }
}

/// The finished order as handed to a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub description: String,
    pub total: Money,
    pub layers: usize,
}

// =============================================================================
// Unit Tests
// =============================================================================
