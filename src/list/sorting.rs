//! In-place sorting.

use super::ListController;
use crate::compare::SortDirection;
use crate::domain::DomainQuery;
use crate::record::Record;
use std::str::FromStr;
use tracing::debug;

impl<R: Record, Q: DomainQuery<Handle = R::Handle>> ListController<R, Q> {
    /// Sorts by `key`. Requesting the current key again toggles the
    /// direction; a new key, or the first request after construction, sorts
    /// ascending.
    ///
    /// Keys without a comparator sort by the default key. Rows are reordered
    /// in place and keep their `selected` and `filtered` flags.
    pub fn set_sort_key(&mut self, key: R::SortKey) {
        let resolved = self.comparators.get(key).key();
        if self.sort_chosen && resolved == self.sort_key {
            self.direction = self.direction.toggle();
        } else {
            self.sort_key = resolved;
            self.direction = SortDirection::Ascending;
        }
        self.sort_chosen = true;
        self.resort();
    }

    /// Sorts by a key given by name, e.g. from a column header click.
    /// Names that do not parse select the default key.
    pub fn set_sort_key_named(&mut self, name: &str)
    where
        R::SortKey: FromStr,
    {
        let key = name
            .parse::<R::SortKey>()
            .unwrap_or_else(|_| self.comparators.default_key());
        self.set_sort_key(key);
    }

    /// Sorts by `key` in `direction`.
    pub fn set_sort(&mut self, key: R::SortKey, direction: SortDirection) {
        self.sort_key = self.comparators.get(key).key();
        self.direction = direction;
        self.sort_chosen = true;
        self.resort();
    }

    /// Flips the sort direction of the current key.
    pub fn toggle_sort_direction(&mut self) {
        self.set_sort(self.sort_key, self.direction.toggle());
    }

    /// Sorts by the next registered column, ascending.
    pub fn cycle_sort_key(&mut self) {
        let next = self.comparators.next_key(self.sort_key);
        self.set_sort(next, SortDirection::Ascending);
    }

    fn resort(&mut self) {
        let comparator = self.comparators.get(self.sort_key);
        comparator.sort(&mut self.items, self.direction);
        // Staged rows must keep matching the visible order.
        comparator.sort(self.pending.make_contiguous(), self.direction);

        self.selected = self.items.iter().position(|row| row.selected);
        if let Some(pos) = self.selected.and_then(|i| self.item_to_visible(i)) {
            self.cursor = pos;
        }
        self.clamp_cursor();
        self.sync_viewport_with_cursor();
        debug!(
            target: "commander::list",
            list = self.id,
            key = ?self.sort_key,
            direction = ?self.direction,
            "sorted"
        );
    }
}
