//! Bundled hero domain.
//!
//! A small, in-process stand-in for the game's hero collection, used by the
//! list controller's tests and by hosts without a domain of their own:
//!
//! - [`Hero`] and its shared handle [`HeroRef`]
//! - [`Roster`], the [`DomainQuery`](crate::domain::DomainQuery) and
//!   [`HeroActions`] implementation
//! - [`HeroRecord`], the list row, sortable by [`HeroSortKey`]
//! - [`HeroDetail`], the detail view, holding one [`Portrait`] at a time
//!
//! ```
//! use commander_list::hero::{Hero, HeroRecord, Roster};
//! use commander_list::domain::{DomainQuery, Query};
//! use commander_list::record::Record;
//!
//! let roster = Roster::new();
//! roster.add(Hero::new("Derthert").with_kingdom("Vlandia"));
//! let found = roster.query(&Query::text("dert")).unwrap();
//! let record = HeroRecord::project(&found[0]).unwrap();
//! assert_eq!(record.kingdom(), "Vlandia");
//! ```

mod detail;
mod model;
mod portrait;
mod record;
mod roster;

pub use detail::{DetailStyles, HeroDetail, HeroFields};
pub use model::{Hero, HeroRef};
pub use portrait::{Portrait, PortraitCache, PortraitPool};
pub use record::{HeroRecord, HeroSortKey, UnknownSortKey};
pub use roster::{HeroActions, Roster};
