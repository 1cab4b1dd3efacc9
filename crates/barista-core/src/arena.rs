//! # Composition Arena
//!
//! Chains stored as tagged nodes in one append-only `Vec`, addressed by
//! [`NodeId`] instead of nested boxes.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  index   node                                                           │
//! │  ─────   ──────────────────────────────                                 │
//! │    0     Base(Espresso)                                                 │
//! │    1     Addition { Milk,  inner: 0 }                                   │
//! │    2     Addition { Sugar, inner: 1 }                                   │
//! │    3     Base(Tea)                  ◄── a second, independent chain     │
//! │    4     Addition { Milk,  inner: 3 }                                   │
//! │                                                                         │
//! │  Every `inner` points strictly backwards, so no chain can cycle.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Queries walk the chain iteratively, so depth is bounded by memory rather
//! than by the call stack.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::addition::Addition;
use crate::error::{CoreError, CoreResult};
use crate::items::BaseItem;
use crate::money::Money;
use crate::priceable::Priceable;
use crate::SEPARATOR;

/// Index of a committed node.
///
/// Ids are only handed out by [`CompositionArena`], and only for nodes
/// that already exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Base { item: BaseItem },
    Addition { kind: Addition, inner: NodeId },
}

/// A chain resolved from the arena: its base item and its layers, innermost
/// first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layers {
    pub base: BaseItem,
    pub additions: Vec<Addition>,
}

impl Priceable for Layers {
    fn description(&self) -> String {
        let mut description = self.base.label().to_string();
        for addition in &self.additions {
            description.push_str(SEPARATOR);
            description.push_str(addition.label());
        }
        description
    }

    fn cost(&self) -> Money {
        self.base.price() + self.additions.iter().map(Addition::price).sum::<Money>()
    }
}

/// Append-only storage for many chains.
#[derive(Debug, Default, Clone)]
pub struct CompositionArena {
    nodes: Vec<Node>,
}

impl CompositionArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Commits a base item and returns its id.
    pub fn add_base(&mut self, item: BaseItem) -> NodeId {
        self.push(Node::Base { item })
    }

    /// Commits an addition wrapping `inner`.
    ///
    /// ## Errors
    /// `CoreError::UnknownNode` if `inner` is not a committed node of this
    /// arena. The arena is left unchanged.
    pub fn wrap(&mut self, inner: NodeId, kind: Addition) -> CoreResult<NodeId> {
        self.check(inner)?;
        Ok(self.push(Node::Addition { kind, inner }))
    }

    /// Number of additions between `id` and its base item.
    pub fn depth(&self, id: NodeId) -> CoreResult<usize> {
        Ok(self.layers(id)?.additions.len())
    }

    /// Resolves the chain rooted at `id`.
    pub fn layers(&self, id: NodeId) -> CoreResult<Layers> {
        self.check(id)?;

        let mut additions = Vec::new();
        let mut cursor = id;
        let base = loop {
            match self.nodes[cursor.0] {
                Node::Base { item } => break item,
                Node::Addition { kind, inner } => {
                    additions.push(kind);
                    cursor = inner;
                }
            }
        };
        additions.reverse();

        Ok(Layers { base, additions })
    }

    pub fn description(&self, id: NodeId) -> CoreResult<String> {
        Ok(self.layers(id)?.description())
    }

    pub fn cost(&self, id: NodeId) -> CoreResult<Money> {
        Ok(self.layers(id)?.cost())
    }

    fn check(&self, id: NodeId) -> CoreResult<()> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(CoreError::UnknownNode {
                id: id.0,
                len: self.nodes.len(),
            })
        }
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        debug!(%id, ?node, "committing node");
        self.nodes.push(node);
        id
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
