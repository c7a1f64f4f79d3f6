//! Selection, cursor movement and targeted re-projection.

use super::types::SelectionChanged;
use super::ListController;
use crate::domain::DomainQuery;
use crate::error::Result;
use crate::record::Record;
use tracing::{debug, warn};

impl<R: Record, Q: DomainQuery<Handle = R::Handle>> ListController<R, Q> {
    /// Selects the row at `items[index]`.
    ///
    /// Returns the notification to forward to the detail view, or `None` when
    /// nothing changed (the live row was already selected). An index past the
    /// end, or a row whose domain object no longer exists, clears the
    /// selection, even when that row is the selected one.
    pub fn select(&mut self, index: usize) -> Option<SelectionChanged<R::Handle>> {
        let Some(row) = self.items.get(index) else {
            return self.clear_selection();
        };
        if !R::is_valid(row.handle()) {
            warn!(target: "commander::list", list = self.id, index, "selected row is stale");
            return self.clear_selection();
        }
        if row.selected {
            return None;
        }

        if let Some(previous) = self.selected.take() {
            if let Some(prev) = self.items.get_mut(previous) {
                prev.selected = false;
            }
        }
        let row = &mut self.items[index];
        row.selected = true;
        let handle = row.handle().clone();
        self.selected = Some(index);
        if let Some(pos) = self.item_to_visible(index) {
            self.cursor = pos;
            self.sync_viewport_with_cursor();
        }
        debug!(target: "commander::list", list = self.id, index, "selected");
        Some(SelectionChanged {
            handle: Some(handle),
        })
    }

    /// Selects the `n`th visible row.
    pub fn select_visible(&mut self, n: usize) -> Option<SelectionChanged<R::Handle>> {
        match self.visible_to_item(n) {
            Some(index) => self.select(index),
            None => self.clear_selection(),
        }
    }

    /// Clears the selection. Returns a notification only if a row was
    /// selected.
    pub fn clear_selection(&mut self) -> Option<SelectionChanged<R::Handle>> {
        let previous = self.selected.take()?;
        if let Some(row) = self.items.get_mut(previous) {
            row.selected = false;
        }
        Some(SelectionChanged { handle: None })
    }

    /// Moves the cursor by `delta` visible rows and selects the row under it.
    pub fn move_cursor(&mut self, delta: isize) -> Option<SelectionChanged<R::Handle>> {
        let visible = self.visible_len();
        if visible == 0 {
            return None;
        }
        let target = if self.selected_visible_position().is_none() && delta > 0 {
            // Nothing selected yet: the first step down lands on the cursor.
            self.cursor.min(visible - 1)
        } else {
            self.cursor.saturating_add_signed(delta).min(visible - 1)
        };
        self.cursor = target;
        self.sync_viewport_with_cursor();
        self.select_visible(target)
    }

    /// Jumps to the first visible row and selects it.
    pub fn go_to_start(&mut self) -> Option<SelectionChanged<R::Handle>> {
        self.cursor = 0;
        self.sync_viewport_with_cursor();
        self.select_visible(0)
    }

    /// Jumps to the last visible row and selects it.
    pub fn go_to_end(&mut self) -> Option<SelectionChanged<R::Handle>> {
        let last = self.visible_len().saturating_sub(1);
        self.cursor = last;
        self.sync_viewport_with_cursor();
        self.select_visible(last)
    }

    /// Re-projects the row for `handle` after its domain object changed.
    ///
    /// The row keeps its flags; its `filtered` flag is recomputed against the
    /// applied filter and it moves to its place under the current sort, so
    /// later batches still land in order. Returns `Ok(false)` when no row
    /// shows `handle`.
    pub fn reproject(&mut self, handle: &R::Handle) -> Result<bool> {
        let Some(index) = self.items.iter().position(|row| row.handle() == handle) else {
            return Ok(false);
        };
        let record = R::project(handle)?;
        let filter = self.matcher();
        let mut row = self.items.remove(index);
        row.replace_record(record);
        row.filtered = !filter.matches(row.record());

        let comparator = self.comparators.get(self.sort_key);
        let direction = self.direction;
        let at = self
            .items
            .partition_point(|r| comparator.compare_rows(r, &row, direction).is_le());
        self.items.insert(at, row);
        if at != index {
            self.selected = self.items.iter().position(|row| row.selected);
            if let Some(pos) = self.selected_visible_position() {
                self.cursor = pos;
            }
        }
        self.clamp_cursor();
        debug!(target: "commander::list", list = self.id, from = index, to = at, "row re-projected");
        Ok(true)
    }

    fn selected_visible_position(&self) -> Option<usize> {
        self.selected.and_then(|i| self.item_to_visible(i))
    }

    pub(super) fn clamp_cursor(&mut self) {
        let visible = self.visible_len();
        if visible == 0 {
            self.cursor = 0;
        } else if self.cursor >= visible {
            self.cursor = visible - 1;
        }
        self.sync_viewport_with_cursor();
    }

    pub(super) fn rows_per_view(&self) -> usize {
        // Title, progress/filter line, status bar, status message, help.
        let chrome = 5;
        let row_height = self.renderer.height().max(1);
        (self.config.height.saturating_sub(chrome) / row_height).max(1)
    }

    /// Keeps the cursor inside the rendered window.
    pub(super) fn sync_viewport_with_cursor(&mut self) {
        let per_view = self.rows_per_view();
        if self.cursor < self.viewport_start {
            self.viewport_start = self.cursor;
        } else if self.cursor >= self.viewport_start + per_view {
            self.viewport_start = self.cursor + 1 - per_view;
        }
        let max_start = self.visible_len().saturating_sub(per_view);
        self.viewport_start = self.viewport_start.min(max_start);
    }
}
