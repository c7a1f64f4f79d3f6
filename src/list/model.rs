//! The `ListController` struct, its construction and read accessors.

use super::keys::ListKeyMap;
use super::renderer::DefaultRenderer;
use super::style::ListStyles;
use super::types::{LoadState, PendingFilter, RowRenderer};
use crate::compare::{ComparatorTable, SortDirection};
use crate::config::Config;
use crate::domain::{DomainQuery, Query};
use crate::record::{Record, Row};
use crate::status::{StatusKind, StatusMessage};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Instant;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Incremental, filterable, sortable list of display records.
///
/// The controller owns the visible rows (`items`), a pre-sorted staging
/// buffer used while a load is transferring, the sort key and direction,
/// and the filter text. All work happens on the caller's thread inside
/// [`tick`](Self::tick), which must be invoked once per frame:
///
/// 1. a requested load runs its domain query and pre-sorts the results;
/// 2. up to `batch_size` rows move from the staging buffer into `items`;
/// 3. a debounced filter change is applied once its quiet interval passed.
///
/// Filtering only flips each row's `filtered` flag and sorting reorders rows
/// in place, so neither disturbs the selection.
///
/// # Examples
///
/// ```
/// use commander_list::config::Config;
/// use commander_list::domain::Query;
/// use commander_list::hero::{Hero, HeroRecord, HeroSortKey, Roster};
/// use commander_list::list::ListController;
/// use commander_list::record::Record;
///
/// let roster = Roster::new();
/// for i in 1..=60 {
///     roster.add(Hero::new(format!("Hero{i:03}")));
/// }
///
/// let mut list: ListController<HeroRecord, Roster> =
///     ListController::new(roster, &Config::default());
/// assert!(list.start_load(Query::all()));
/// while list.is_loading() {
///     list.tick();
/// }
/// assert_eq!(list.len(), 60);
///
/// list.set_sort_key(HeroSortKey::Name);
/// list.set_sort_key(HeroSortKey::Name);
/// assert_eq!(list.items()[0].record().name(), "Hero060");
/// ```
pub struct ListController<R: Record, Q: DomainQuery<Handle = R::Handle>> {
    pub(super) id: i64,
    pub(super) tag: i64,
    pub(super) source: Q,
    pub(super) config: Config,
    pub(super) comparators: ComparatorTable<R>,

    // Rows
    pub(super) items: Vec<Row<R>>,
    pub(super) pending: VecDeque<Row<R>>,
    pub(super) pending_total: usize,
    pub(super) load: LoadState,
    pub(super) last_query: Query,
    /// Bumped by every accepted load and every cancellation. Staged rows
    /// belong to `pending_generation`; they are only transferred while it
    /// matches.
    pub(super) generation: u64,
    pub(super) pending_generation: u64,
    pub(super) progress_text: String,

    // Ordering
    pub(super) sort_key: R::SortKey,
    pub(super) direction: SortDirection,
    /// False until a sort is requested; the initial default order is not a
    /// column choice, so the first request for any key sorts ascending.
    pub(super) sort_chosen: bool,

    // Filter
    pub(super) filter_text: String,
    pub(super) pending_filter: Option<PendingFilter>,
    pub(super) filter_applications: u64,
    pub(super) filter_draft: String,
    pub(super) filter_input_active: bool,

    // Selection and navigation
    pub(super) selected: Option<usize>,
    pub(super) cursor: usize,
    pub(super) viewport_start: usize,

    // Presentation
    pub(super) status: Option<StatusMessage>,
    pub(super) keymap: ListKeyMap,
    pub(super) styles: ListStyles,
    pub(super) renderer: Box<dyn RowRenderer<R> + Send + Sync>,
}

impl<R: Record, Q: DomainQuery<Handle = R::Handle>> ListController<R, Q> {
    /// Creates an empty controller reading from `source`.
    ///
    /// Nothing is loaded until [`start_load`](Self::start_load) is called
    /// and the controller is ticked.
    pub fn new(source: Q, config: &Config) -> Self {
        let comparators = R::comparators();
        let sort_key = comparators.default_key();
        Self {
            id: next_id(),
            tag: 0,
            source,
            config: config.clone(),
            comparators,
            items: Vec::new(),
            pending: VecDeque::new(),
            pending_total: 0,
            load: LoadState::Idle,
            last_query: Query::all(),
            generation: 0,
            pending_generation: 0,
            progress_text: String::new(),
            sort_key,
            direction: SortDirection::Ascending,
            sort_chosen: false,
            filter_text: String::new(),
            pending_filter: None,
            filter_applications: 0,
            filter_draft: String::new(),
            filter_input_active: false,
            selected: None,
            cursor: 0,
            viewport_start: 0,
            status: None,
            keymap: ListKeyMap::default(),
            styles: ListStyles::default(),
            renderer: Box::new(DefaultRenderer::new()),
        }
    }

    /// Replaces the row renderer.
    pub fn with_renderer<D>(mut self, renderer: D) -> Self
    where
        D: RowRenderer<R> + Send + Sync + 'static,
    {
        self.renderer = Box::new(renderer);
        self
    }

    /// Replaces the view styles.
    pub fn with_styles(mut self, styles: ListStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Replaces the key bindings.
    pub fn with_keymap(mut self, keymap: ListKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Unique id, carried by this controller's frame and selection messages.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The configuration the controller was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The domain query collaborator.
    pub fn source(&self) -> &Q {
        &self.source
    }

    /// All visible-order rows, hidden ones included.
    pub fn items(&self) -> &[Row<R>] {
        &self.items
    }

    /// Rows the active filter does not hide, in order.
    pub fn visible(&self) -> impl Iterator<Item = &Row<R>> + '_ {
        self.items.iter().filter(|row| !row.filtered)
    }

    /// Number of rows the filter does not hide.
    pub fn visible_len(&self) -> usize {
        self.visible().count()
    }

    /// Number of rows, hidden ones included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no rows at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True from an accepted [`start_load`](Self::start_load) until the last
    /// staged row has been transferred.
    pub fn is_loading(&self) -> bool {
        self.load != LoadState::Idle
    }

    /// "Loading n/m" while transferring, empty otherwise.
    pub fn progress_text(&self) -> &str {
        &self.progress_text
    }

    /// Current load generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The query of the most recent accepted load.
    pub fn last_query(&self) -> &Query {
        &self.last_query
    }

    /// Current sort key.
    pub fn sort_key(&self) -> R::SortKey {
        self.sort_key
    }

    /// Current sort direction.
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// The applied filter text.
    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    /// Whether a filter change is waiting for its debounce interval.
    pub fn has_pending_filter(&self) -> bool {
        self.pending_filter.is_some()
    }

    /// How many times the filter has been applied to the rows.
    pub fn filter_applications(&self) -> u64 {
        self.filter_applications
    }

    /// Whether keystrokes currently go to the filter input.
    pub fn is_filter_input_active(&self) -> bool {
        self.filter_input_active
    }

    /// Index of the selected row in [`items`](Self::items).
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected row.
    pub fn selected_row(&self) -> Option<&Row<R>> {
        self.selected.and_then(|i| self.items.get(i))
    }

    /// Handle of the selected row.
    pub fn selected_handle(&self) -> Option<&R::Handle> {
        self.selected_row().map(Row::handle)
    }

    /// Position of the keyboard cursor among the visible rows.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The current status message, if one is showing.
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Shows a status message for the configured lifetime.
    pub fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.set_status_at(text, kind, Instant::now());
    }

    /// Shows a status message, starting its lifetime at `now`.
    pub fn set_status_at(&mut self, text: impl Into<String>, kind: StatusKind, now: Instant) {
        self.status = Some(StatusMessage::new(
            text,
            kind,
            now,
            self.config.status_lifetime(),
        ));
    }

    /// Index into `items` of the `n`th visible row.
    pub(super) fn visible_to_item(&self, n: usize) -> Option<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, row)| !row.filtered)
            .nth(n)
            .map(|(i, _)| i)
    }

    /// Visible position of the row at `items[index]`, if it is visible.
    pub(super) fn item_to_visible(&self, index: usize) -> Option<usize> {
        if self.items.get(index)?.filtered {
            return None;
        }
        Some(self.items[..index].iter().filter(|row| !row.filtered).count())
    }
}
