//! # Additions
//!
//! Layers that wrap exactly one [`Priceable`] and extend it by a fixed
//! [`Increment`].
//!
//! ## Composition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Construction (inside → out)          Query (outside → in → out)        │
//! │                                                                         │
//! │  let d = BaseItem::Espresso;          cost(WhippedCream)                │
//! │  let d = Addition::Milk.wrap(d);        = cost(Sugar) + 0.70            │
//! │  let d = Addition::Sugar.wrap(d);       = cost(Milk) + 0.20 + 0.70      │
//! │  let d = Addition::WhippedCream         = 3.00 + 0.50 + 0.20 + 0.70     │
//! │              .wrap(d);                  = $4.40                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! One generic wrapper covers every addition: the kind only contributes data
//! (label and cost), never behavior.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::priceable::Priceable;
use crate::validation::{normalize_name, validate_label, validate_price};
use crate::SEPARATOR;

// =============================================================================
// Increment
// =============================================================================

/// The (label, cost) pair one layer contributes.
///
/// The identity increment has no label and zero cost: a wrapper carrying it
/// delegates both queries to its inner item unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Increment {
    label: Option<Cow<'static, str>>,
    cost: Money,
}

impl Increment {
    /// The pass-through increment.
    pub const fn identity() -> Self {
        Increment {
            label: None,
            cost: Money::zero(),
        }
    }

    const fn fixed(label: &'static str, cost: Money) -> Self {
        Increment {
            label: Some(Cow::Borrowed(label)),
            cost,
        }
    }

    /// An increment defined at runtime, e.g. a seasonal syrup flavor.
    ///
    /// ## Example
    /// ```rust
    /// use barista_core::{AdditionWrapper, BaseItem, Increment, Money, Priceable};
    ///
    /// let oat = Increment::custom("Oat Milk", Money::from_cents(65)).unwrap();
    /// let drink = AdditionWrapper::new(BaseItem::Latte, oat);
    /// assert_eq!(drink.description(), "Latte, Oat Milk");
    /// assert_eq!(drink.cost().cents(), 415);
    /// ```
    pub fn custom(label: &str, cost: Money) -> CoreResult<Self> {
        let label = validate_label(label)?;
        validate_price(cost)?;
        Ok(Increment {
            label: Some(Cow::Owned(label)),
            cost,
        })
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn cost(&self) -> Money {
        self.cost
    }

    pub fn is_identity(&self) -> bool {
        self.label.is_none() && self.cost.is_zero()
    }

    /// Appends this increment's label to an inner description.
    fn extend(&self, mut description: String) -> String {
        if let Some(label) = &self.label {
            description.push_str(SEPARATOR);
            description.push_str(label);
        }
        description
    }

    /// Display name for errors and logs.
    fn name(&self) -> &str {
        self.label().unwrap_or("identity addition")
    }
}

impl Default for Increment {
    fn default() -> Self {
        Increment::identity()
    }
}

// =============================================================================
// Addition Kinds
// =============================================================================

/// A built-in addition.
///
/// | Addition      | Label           | Increment |
/// |---------------|-----------------|-----------|
/// | Milk          | "Milk"          | +$0.50    |
/// | Sugar         | "Sugar"         | +$0.20    |
/// | WhippedCream  | "Whipped Cream" | +$0.70    |
/// | Syrup         | "Syrup"         | +$0.60    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Addition {
    Milk,
    Sugar,
    WhippedCream,
    Syrup,
}

impl Addition {
    /// Every addition, in menu order.
    pub const ALL: [Addition; 4] = [
        Addition::Milk,
        Addition::Sugar,
        Addition::WhippedCream,
        Addition::Syrup,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            Addition::Milk => "Milk",
            Addition::Sugar => "Sugar",
            Addition::WhippedCream => "Whipped Cream",
            Addition::Syrup => "Syrup",
        }
    }

    pub const fn price(&self) -> Money {
        match self {
            Addition::Milk => Money::from_cents(50),
            Addition::Sugar => Money::from_cents(20),
            Addition::WhippedCream => Money::from_cents(70),
            Addition::Syrup => Money::from_cents(60),
        }
    }

    pub const fn increment(&self) -> Increment {
        Increment::fixed(self.label(), self.price())
    }

    /// Wraps `inner` in this addition.
    pub fn wrap<P: Priceable>(self, inner: P) -> AdditionWrapper<P> {
        AdditionWrapper::new(inner, self)
    }

    /// Wraps `inner` if present; fails with an invalid-composition error
    /// otherwise.
    pub fn try_wrap<P: Priceable>(self, inner: Option<P>) -> CoreResult<AdditionWrapper<P>> {
        AdditionWrapper::try_new(inner, self)
    }
}

impl From<Addition> for Increment {
    fn from(addition: Addition) -> Self {
        addition.increment()
    }
}

impl fmt::Display for Addition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts `whipped_cream`, `whipped-cream` and `Whipped Cream` alike.
impl FromStr for Addition {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        Addition::ALL
            .into_iter()
            .find(|addition| normalize_name(addition.label()) == wanted)
            .ok_or_else(|| ValidationError::UnknownName {
                kind: "addition",
                value: s.trim().to_string(),
            })
    }
}

// =============================================================================
// Addition Wrapper
// =============================================================================

/// A [`Priceable`] that owns exactly one inner item and extends it.
///
/// ## Invariants
/// - `inner` is always present: there is no way to build a wrapper without it
/// - Immutable: no re-pointing, no removal of layers
/// - Not `Clone`: each chain has a single owner
///
/// The default type parameter lets chains of mixed depth share one type:
/// `AdditionWrapper<Box<dyn Priceable>>`.
#[derive(Debug)]
pub struct AdditionWrapper<P = Box<dyn Priceable>> {
    inner: P,
    increment: Increment,
}

impl<P: Priceable> AdditionWrapper<P> {
    pub fn new(inner: P, increment: impl Into<Increment>) -> Self {
        AdditionWrapper {
            inner,
            increment: increment.into(),
        }
    }

    /// Builds a wrapper from an optional inner item.
    ///
    /// ## Errors
    /// `CoreError::MissingInner` when `inner` is `None`. Nothing is
    /// constructed in that case.
    ///
    /// ## Example
    /// ```rust
    /// use barista_core::{Addition, AdditionWrapper, BaseItem};
    ///
    /// let err = AdditionWrapper::<BaseItem>::try_new(None, Addition::Milk).unwrap_err();
    /// assert!(err.is_invalid_composition());
    /// ```
    pub fn try_new(inner: Option<P>, increment: impl Into<Increment>) -> CoreResult<Self> {
        let increment = increment.into();
        match inner {
            Some(inner) => Ok(AdditionWrapper { inner, increment }),
            None => Err(CoreError::MissingInner {
                addition: increment.name().to_string(),
            }),
        }
    }

    /// A wrapper that delegates everything to `inner`.
    pub fn passthrough(inner: P) -> Self {
        AdditionWrapper::new(inner, Increment::identity())
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn increment(&self) -> &Increment {
        &self.increment
    }
}

impl<P: Priceable> Priceable for AdditionWrapper<P> {
    fn description(&self) -> String {
        self.increment.extend(self.inner.description())
    }

    fn cost(&self) -> Money {
        self.inner.cost() + self.increment.cost
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
