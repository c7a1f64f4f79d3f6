//! Selection coordinator: keeps a detail view on the list's selection.
//!
//! The list and the view never see each other. Every entry point that can
//! change the selection goes through the coordinator, which forwards the
//! [`SelectionChanged`] it gets back to the view. A view that fails to show
//! the new selection is cleared and the error becomes a status message on
//! the list.
//!
//! ```
//! use commander_list::config::Config;
//! use commander_list::coordinator::Coordinator;
//! use commander_list::detail::DetailView;
//! use commander_list::domain::Query;
//! use commander_list::hero::{Hero, HeroDetail, HeroRecord, PortraitPool, Roster};
//! use commander_list::list::ListController;
//! use std::sync::Arc;
//!
//! let roster = Arc::new(Roster::new());
//! roster.add(Hero::new("Ira"));
//! let list: ListController<HeroRecord, _> = ListController::new(roster.clone(), &Config::default());
//! let detail = HeroDetail::new(roster.clone(), PortraitPool::new());
//!
//! let mut commander = Coordinator::new(list, detail);
//! commander.start_load(Query::all());
//! commander.tick();
//! commander.select(0);
//! assert_eq!(commander.detail().fields().unwrap().name, "Ira");
//! ```

use crate::detail::DetailView;
use crate::domain::{DomainQuery, Query};
use crate::error::Result;
use crate::list::{ListController, SelectionChanged};
use crate::record::Record;
use crate::status::StatusKind;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use lipgloss_extras::lipgloss;
use std::time::Instant;
use tracing::warn;

/// A list controller and the detail view that follows its selection.
pub struct Coordinator<R, Q, V>
where
    R: Record,
    Q: DomainQuery<Handle = R::Handle>,
    V: DetailView<R::Handle>,
{
    list: ListController<R, Q>,
    detail: V,
}

impl<R, Q, V> Coordinator<R, Q, V>
where
    R: Record,
    Q: DomainQuery<Handle = R::Handle>,
    V: DetailView<R::Handle>,
{
    /// Wires `list` to `detail`.
    pub fn new(list: ListController<R, Q>, detail: V) -> Self {
        Self { list, detail }
    }

    /// The list controller.
    pub fn list(&self) -> &ListController<R, Q> {
        &self.list
    }

    /// Mutable access to the list. Selection changes made through it are not
    /// forwarded to the detail view; use the coordinator's own methods for
    /// those.
    pub fn list_mut(&mut self) -> &mut ListController<R, Q> {
        &mut self.list
    }

    /// The detail view.
    pub fn detail(&self) -> &V {
        &self.detail
    }

    /// Selects `items[index]` and shows it.
    pub fn select(&mut self, index: usize) {
        let change = self.list.select(index);
        self.forward(change);
    }

    /// Moves the list cursor and shows the row it lands on.
    pub fn move_cursor(&mut self, delta: isize) {
        let change = self.list.move_cursor(delta);
        self.forward(change);
    }

    /// Clears the selection and the view.
    pub fn clear_selection(&mut self) {
        let change = self.list.clear_selection();
        self.forward(change);
    }

    /// Starts a load. An accepted load drops the selection, so the view is
    /// cleared too.
    pub fn start_load(&mut self, query: Query) -> bool {
        let accepted = self.list.start_load(query);
        if accepted {
            self.detail.clear();
        }
        accepted
    }

    /// Replaces the collection with a fresh load of `query`.
    pub fn refresh(&mut self, query: Query) -> bool {
        let accepted = self.list.refresh(query);
        if accepted {
            self.detail.clear();
        }
        accepted
    }

    /// Advances the list by one frame.
    pub fn tick(&mut self) {
        self.list.tick();
    }

    /// Advances the list by one frame at `now`.
    pub fn tick_at(&mut self, now: Instant) {
        self.list.tick_at(now);
    }

    /// Runs an edit against the detail view, then re-projects the edited
    /// row so the list shows the new values. Returns whether the edit
    /// succeeded; failures become an error status on the list.
    pub fn edit<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&mut V) -> Result<()>,
    {
        if let Err(err) = f(&mut self.detail) {
            warn!(target: "commander::detail", error = %err, "edit refused");
            self.list.set_status(format!("Edit failed: {err}"), StatusKind::Error);
            return false;
        }
        let Some(handle) = self.detail.current().cloned() else {
            return true;
        };
        match self.list.reproject(&handle) {
            Ok(_) => true,
            Err(err) => {
                warn!(target: "commander::detail", error = %err, "edited row is gone");
                self.list.set_status(format!("Edit failed: {err}"), StatusKind::Error);
                self.detail.clear();
                false
            }
        }
    }

    fn forward(&mut self, change: Option<SelectionChanged<R::Handle>>) {
        let Some(change) = change else {
            return;
        };
        let Some(handle) = change.handle else {
            self.detail.clear();
            return;
        };
        if let Err(err) = self.detail.refresh_for(&handle) {
            warn!(target: "commander::detail", error = %err, "detail refresh failed");
            self.detail.clear();
            self.list
                .set_status(format!("Cannot show selection: {err}"), StatusKind::Error);
        }
    }

    /// The list on the left, the detail view on the right.
    pub fn view(&self) -> String {
        let list = self.list.view();
        let detail = self.detail.view();
        if detail.is_empty() {
            return list;
        }
        lipgloss::join_horizontal(lipgloss::TOP, &[list.as_str(), "  ", detail.as_str()])
    }
}

impl<R, Q, V> Coordinator<R, Q, V>
where
    R: Record,
    R::Handle: Send + 'static,
    Q: DomainQuery<Handle = R::Handle>,
    V: DetailView<R::Handle>,
{
    /// Starts the list's frame loop.
    pub fn init(&mut self) -> Cmd {
        self.list.init()
    }

    /// Key presses are handled here so selection changes reach the view
    /// synchronously; everything else goes to the list.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            let change = self.list.handle_key(key);
            self.forward(change);
            return None;
        }
        self.list.update(msg)
    }
}
