#![warn(missing_docs)]

//! # commander-list
//!
//! An incremental list-binding controller for terminal UIs built on
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! The crate shows a large collection of externally-owned domain objects in
//! a sortable, filterable list without ever stalling a frame. Domain objects
//! are projected into flat display records; the controller loads them in
//! batches across frames, debounces filter edits, and sorts in place so each
//! row's selection and filter flags survive. A coordinator keeps a detail
//! view on whatever row is selected.
//!
//! ## Components
//!
//! - [`record`]: the [`Record`](record::Record) projection trait and
//!   [`Row`](record::Row)
//! - [`compare`]: per-column comparators with total, deterministic ordering
//! - [`list`]: the [`ListController`](list::ListController) and its bubbletea
//!   integration
//! - [`coordinator`] and [`detail`]: selection forwarding to a detail view
//! - [`hero`]: a bundled hero domain implementing every collaborator
//!
//! ## Frame protocol
//!
//! ```rust
//! use commander_list::prelude::*;
//! use std::time::{Duration, Instant};
//!
//! let roster = Roster::new();
//! for i in 1..=120 {
//!     roster.add(Hero::new(format!("Hero{i:03}")));
//! }
//!
//! let config = Config::default();
//! let mut list: ListController<HeroRecord, Roster> = ListController::new(roster, &config);
//! list.start_load(Query::all());
//!
//! // Each tick moves one batch; the first runs the query as well.
//! let start = Instant::now();
//! list.tick_at(start);
//! assert!(list.is_loading());
//! assert_eq!(list.len(), config.batch_size());
//! while list.is_loading() {
//!     list.tick_at(start);
//! }
//! assert_eq!(list.len(), 120);
//!
//! // Filter edits wait for the debounce interval.
//! list.set_filter_at("Hero01", start);
//! list.tick_at(start);
//! assert_eq!(list.visible_len(), 120);
//! list.tick_at(start + config.debounce() + Duration::from_millis(1));
//! assert_eq!(list.visible_len(), 10);
//! ```
//!
//! ## Logging
//!
//! Every component logs through [`tracing`] under the `commander::*`
//! targets. The crate never installs a subscriber.

pub mod compare;
pub mod config;
pub mod coordinator;
pub mod detail;
pub mod domain;
pub mod error;
pub mod hero;
pub mod key;
pub mod list;
pub mod record;
pub mod status;

pub use error::{Error, Result};

/// Crate version, as built.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything a host needs to wire up a hero list.
pub mod prelude {
    pub use crate::compare::{Comparator, ComparatorTable, SortDirection};
    pub use crate::config::{Config, FilterMode};
    pub use crate::coordinator::Coordinator;
    pub use crate::detail::DetailView;
    pub use crate::domain::{DomainQuery, Query, TypeFlags};
    pub use crate::error::{Error, Result};
    pub use crate::hero::{
        Hero, HeroActions, HeroDetail, HeroRecord, HeroRef, HeroSortKey, PortraitCache,
        PortraitPool, Roster,
    };
    pub use crate::key::{Binding, KeyMap};
    pub use crate::list::{
        DefaultRenderer, FrameMsg, ListController, ListKeyMap, ListStyles, RowRenderer, RowStyles,
        SelectionChanged, SelectionChangedMsg,
    };
    pub use crate::record::{Record, Row};
    pub use crate::status::{StatusKind, StatusMessage};
}
