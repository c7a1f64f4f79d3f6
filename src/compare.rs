//! Comparator table: maps a sort key to a comparison over records.
//!
//! Every comparison is made total by two tie-breaks: the table's default
//! comparator (the name column) and then [`Record::id`]. Sorting twice with
//! the same key and direction therefore never reorders anything, and the
//! descending order is the exact reverse of the ascending one.
//!
//! Keys without an entry fall back to the default key so the list always
//! stays sortable.

use crate::record::{Record, Row};
use std::cmp::Ordering;

/// A pure comparison over two records.
pub type CompareFn<R> = fn(&R, &R) -> Ordering;

/// Sort direction of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Whether this is [`SortDirection::Ascending`].
    pub fn is_ascending(self) -> bool {
        self == Self::Ascending
    }

    /// Arrow shown next to the sorted column header.
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// The comparator resolved for one sort key.
pub struct Comparator<R: Record> {
    key: R::SortKey,
    primary: CompareFn<R>,
    fallback: CompareFn<R>,
}

impl<R: Record> Clone for Comparator<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Record> Copy for Comparator<R> {}

impl<R: Record> Comparator<R> {
    /// The key this comparator actually sorts by. Differs from the requested
    /// key when the table fell back to its default.
    pub fn key(&self) -> R::SortKey {
        self.key
    }

    /// Compares two records in the given direction.
    pub fn compare(&self, a: &R, b: &R, ascending: bool) -> Ordering {
        let ord = (self.primary)(a, b)
            .then_with(|| (self.fallback)(a, b))
            .then_with(|| a.id().cmp(b.id()));
        if ascending {
            ord
        } else {
            ord.reverse()
        }
    }

    /// Compares two rows by their records.
    pub fn compare_rows(&self, a: &Row<R>, b: &Row<R>, direction: SortDirection) -> Ordering {
        self.compare(a.record(), b.record(), direction.is_ascending())
    }

    /// Sorts rows in place. Stable, O(n log n); rows keep their flags.
    pub fn sort(&self, rows: &mut [Row<R>], direction: SortDirection) {
        rows.sort_by(|a, b| self.compare_rows(a, b, direction));
    }
}

/// Sort key → comparator mapping with a designated default key.
///
/// Entries keep their registration order, which is the order the list's
/// "next column" key walks through.
pub struct ComparatorTable<R: Record> {
    entries: Vec<(R::SortKey, CompareFn<R>)>,
    default_key: R::SortKey,
    default_fn: CompareFn<R>,
}

impl<R: Record> ComparatorTable<R> {
    /// Creates a table whose default (and fallback) key is `default_key`.
    pub fn new(default_key: R::SortKey, default_fn: CompareFn<R>) -> Self {
        Self {
            entries: vec![(default_key, default_fn)],
            default_key,
            default_fn,
        }
    }

    /// Registers a comparator for `key`, replacing an earlier one.
    pub fn with(mut self, key: R::SortKey, compare: CompareFn<R>) -> Self {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = compare,
            None => self.entries.push((key, compare)),
        }
        if key == self.default_key {
            self.default_fn = compare;
        }
        self
    }

    /// The default key.
    pub fn default_key(&self) -> R::SortKey {
        self.default_key
    }

    /// Whether `key` has its own entry.
    pub fn contains(&self, key: R::SortKey) -> bool {
        self.entries.iter().any(|(k, _)| *k == key)
    }

    /// Registered keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = R::SortKey> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// The key registered after `key`, wrapping around. Unknown keys yield
    /// the default key.
    pub fn next_key(&self, key: R::SortKey) -> R::SortKey {
        match self.entries.iter().position(|(k, _)| *k == key) {
            Some(i) => self.entries[(i + 1) % self.entries.len()].0,
            None => self.default_key,
        }
    }

    /// Resolves the comparator for `key`, falling back to the default key.
    pub fn get(&self, key: R::SortKey) -> Comparator<R> {
        match self.entries.iter().find(|(k, _)| *k == key) {
            Some(&(key, primary)) => Comparator {
                key,
                primary,
                fallback: self.default_fn,
            },
            None => Comparator {
                key: self.default_key,
                primary: self.default_fn,
                fallback: self.default_fn,
            },
        }
    }
}
