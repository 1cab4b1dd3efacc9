//! # barista-core: Pure Composition Logic for Barista
//!
//! This crate models composable priced items: a base drink wrapped by any
//! number of additions, each layer extending both the description and the
//! cost. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Barista Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/counter (presentation)                     │   │
//! │  │    config ──► build order ──► render text / JSON ticket         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ barista-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ priceable │  │   items   │  │ addition  │  │   order   │  │   │
//! │  │   │  (trait)  │  │ BaseItem  │  │ Wrapper   │  │  (root)   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   arena   │  │   money   │  │ validation│                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CONSOLE • NO CLOCK • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`priceable`] - The `Priceable` contract (description + cost)
//! - [`items`] - Base items (Espresso, Tea, Latte) and custom items
//! - [`addition`] - Additions and the generic `AdditionWrapper`
//! - [`arena`] - Append-only, index-addressed chains
//! - [`order`] - The composition root and `OrderSummary`
//! - [`money`] - Integer-cent money
//! - [`error`] - Domain error types
//! - [`validation`] - Checks for runtime-defined items
//!
//! ## Example Usage
//!
//! ```rust
//! use barista_core::{Addition, BaseItem, Priceable};
//!
//! let drink = BaseItem::Espresso;
//! let drink = Addition::Milk.wrap(drink);
//! let drink = Addition::Sugar.wrap(drink);
//! let drink = Addition::WhippedCream.wrap(drink);
//!
//! assert_eq!(drink.description(), "Espresso, Milk, Sugar, Whipped Cream");
//! assert_eq!(drink.cost().to_string(), "$4.40");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod addition;
pub mod arena;
pub mod error;
pub mod items;
pub mod money;
pub mod order;
pub mod priceable;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use addition::{Addition, AdditionWrapper, Increment};
pub use arena::{CompositionArena, Layers, Node, NodeId};
pub use error::{CoreError, CoreResult, ValidationError};
pub use items::{BaseItem, CustomItem};
pub use money::Money;
pub use order::{Order, OrderSummary};
pub use priceable::Priceable;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Joins each layer's label onto the description it wraps.
pub const SEPARATOR: &str = ", ";

/// Maximum length of a runtime-defined label.
pub const MAX_LABEL_LEN: usize = 60;

/// Maximum price of a runtime-defined item or increment ($1,000.00).
///
/// Keeps chain totals far from `i64` overflow at any depth that fits in
/// memory.
pub const MAX_PRICE_CENTS: i64 = 100_000;
