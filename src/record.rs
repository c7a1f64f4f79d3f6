//! Display records: flat snapshots of domain objects, one per list row.
//!
//! A [`Record`] is projected once from a domain handle and never follows the
//! object afterwards; if the object changes, the record stays stale until the
//! list re-projects it. [`Row`] wraps a record with the only two fields the
//! UI mutates: `selected` and `filtered`.
//!
//! # Examples
//!
//! ```
//! use commander_list::compare::ComparatorTable;
//! use commander_list::error::{Error, Result};
//! use commander_list::record::{Record, Row};
//! use std::fmt;
//!
//! #[derive(Clone, PartialEq)]
//! struct Town(&'static str);
//!
//! struct TownRecord {
//!     handle: Town,
//!     name: String,
//! }
//!
//! impl fmt::Display for TownRecord {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str(&self.name)
//!     }
//! }
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum TownSort {
//!     Name,
//! }
//!
//! impl Record for TownRecord {
//!     type Handle = Town;
//!     type SortKey = TownSort;
//!
//!     fn project(handle: &Town) -> Result<Self> {
//!         if handle.0.is_empty() {
//!             return Err(Error::InvalidHandle);
//!         }
//!         Ok(Self { handle: handle.clone(), name: handle.0.to_string() })
//!     }
//!     fn handle(&self) -> &Town { &self.handle }
//!     fn id(&self) -> &str { &self.name }
//!     fn name(&self) -> &str { &self.name }
//!     fn comparators() -> ComparatorTable<Self> {
//!         ComparatorTable::new(TownSort::Name, |a: &Self, b: &Self| a.name.cmp(&b.name))
//!     }
//! }
//!
//! let row = Row::new(TownRecord::project(&Town("Pravend")).unwrap());
//! assert_eq!(row.record().name(), "Pravend");
//! assert!(!row.selected() && !row.filtered());
//! assert!(TownRecord::project(&Town("")).is_err());
//! ```

use crate::compare::ComparatorTable;
use crate::error::Result;
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// A snapshot projection of one domain object.
///
/// `Display` renders the record as a single line; the default row renderer
/// uses it directly.
pub trait Record: Display + Sized {
    /// Opaque reference to the domain object this record was projected from.
    type Handle: Clone + PartialEq;

    /// Column identifiers the list can sort by.
    type SortKey: Copy + Eq + Hash + Debug;

    /// Projects a handle into a record.
    ///
    /// Must fail with [`crate::Error::InvalidHandle`] when the handle no
    /// longer refers to a live object, rather than produce a record with
    /// undefined fields.
    fn project(handle: &Self::Handle) -> Result<Self>;

    /// Whether `handle` still refers to a live object.
    fn is_valid(handle: &Self::Handle) -> bool {
        Self::project(handle).is_ok()
    }

    /// The handle this record was projected from.
    fn handle(&self) -> &Self::Handle;

    /// Stable identity, used as the final sort tie-break.
    fn id(&self) -> &str;

    /// Display name; the default sort key and default filter field.
    fn name(&self) -> &str;

    /// Text the list filter is matched against.
    fn filter_value(&self) -> String {
        self.name().to_string()
    }

    /// Comparators for every sortable column.
    fn comparators() -> ComparatorTable<Self>;
}

/// One list row: a record plus its UI flags.
pub struct Row<R: Record> {
    record: R,
    pub(crate) selected: bool,
    pub(crate) filtered: bool,
}

impl<R: Record> Row<R> {
    /// Wraps a freshly projected record; visible and unselected.
    pub fn new(record: R) -> Self {
        Self {
            record,
            selected: false,
            filtered: false,
        }
    }

    /// The projected record.
    pub fn record(&self) -> &R {
        &self.record
    }

    /// The domain handle behind this row.
    pub fn handle(&self) -> &R::Handle {
        self.record.handle()
    }

    /// Whether this row is the selected one.
    pub fn selected(&self) -> bool {
        self.selected
    }

    /// Whether the active filter hides this row.
    pub fn filtered(&self) -> bool {
        self.filtered
    }

    /// Swaps in a fresh snapshot, keeping both flags.
    pub(crate) fn replace_record(&mut self, record: R) {
        self.record = record;
    }
}

impl<R: Record> Debug for Row<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Row")
            .field("id", &self.record.id())
            .field("selected", &self.selected)
            .field("filtered", &self.filtered)
            .finish()
    }
}
