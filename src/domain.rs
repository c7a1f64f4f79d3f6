//! Boundary to the domain query collaborator.
//!
//! The list controller never creates or destroys domain objects. It asks a
//! [`DomainQuery`] for handles matching a [`Query`] and projects each handle
//! into a display record. Queries are assumed synchronous and potentially
//! expensive, so the controller only runs them from its deferred tick step.

use crate::error::Result;
use bitflags::bitflags;
use std::sync::Arc;

bitflags! {
    /// Object categories a query can be restricted to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TypeFlags: u32 {
        /// Clan leaders and noble family members.
        const LORD = 1 << 0;
        /// Wandering companions for hire.
        const WANDERER = 1 << 1;
        /// Settlement notables.
        const NOTABLE = 1 << 2;
        /// Heroes below adult age.
        const CHILD = 1 << 3;
        /// Female heroes.
        const FEMALE = 1 << 4;
        /// Heroes currently held captive.
        const PRISONER = 1 << 5;
    }
}

impl TypeFlags {
    /// Whether an object of kind `self` passes a `filter`.
    ///
    /// An empty filter passes everything. With `match_all` every filter flag
    /// must be present, otherwise one is enough.
    pub fn passes(self, filter: TypeFlags, match_all: bool) -> bool {
        if filter.is_empty() {
            true
        } else if match_all {
            self.contains(filter)
        } else {
            self.intersects(filter)
        }
    }
}

/// Parameters of one domain query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Text the domain matches against object names. Empty matches all.
    pub text: String,
    /// Category restriction; empty means no restriction.
    pub type_flags: TypeFlags,
    /// Require every flag in `type_flags` instead of any.
    pub match_all: bool,
    /// Include inactive objects (dead, disabled, ...).
    pub include_inactive: bool,
}

impl Query {
    /// A query matching every active object.
    pub fn all() -> Self {
        Self::default()
    }

    /// A query on the given name text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Restricts the query to the given categories.
    pub fn with_types(mut self, type_flags: TypeFlags, match_all: bool) -> Self {
        self.type_flags = type_flags;
        self.match_all = match_all;
        self
    }

    /// Includes or excludes inactive objects.
    pub fn with_inactive(mut self, include_inactive: bool) -> Self {
        self.include_inactive = include_inactive;
        self
    }
}

/// The domain query collaborator.
pub trait DomainQuery {
    /// Opaque reference to an externally-owned object.
    type Handle: Clone + PartialEq;

    /// Returns handles of every object matching `query`.
    fn query(&self, query: &Query) -> Result<Vec<Self::Handle>>;
}

impl<Q: DomainQuery + ?Sized> DomainQuery for Arc<Q> {
    type Handle = Q::Handle;

    fn query(&self, query: &Query) -> Result<Vec<Self::Handle>> {
        (**self).query(query)
    }
}
