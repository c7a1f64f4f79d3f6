//! Load lifecycle: deferred query, incremental transfer, cancellation.
//!
//! A load never blocks its caller. [`start_load`](ListController::start_load)
//! only records the request; the domain query runs inside the next
//! [`tick`](ListController::tick), and its results reach the visible list a
//! batch per frame, already in final sort order.

use super::types::LoadState;
use super::ListController;
use crate::domain::{DomainQuery, Query};
use crate::record::{Record, Row};
use crate::status::StatusKind;
use std::collections::VecDeque;
use std::time::Instant;
use tracing::{debug, info, warn};

impl<R: Record, Q: DomainQuery<Handle = R::Handle>> ListController<R, Q> {
    /// Requests a load of every object matching `query`.
    ///
    /// Returns `false`, and changes nothing, while another load is still in
    /// flight. An accepted request clears the current rows and selection;
    /// the query itself runs on the next tick.
    pub fn start_load(&mut self, query: Query) -> bool {
        if self.is_loading() {
            debug!(
                target: "commander::list",
                list = self.id,
                generation = self.generation,
                "load already in flight, request dropped"
            );
            return false;
        }
        self.generation += 1;
        self.reset_rows();
        self.last_query = query.clone();
        self.load = LoadState::Requested(query);
        self.progress_text = "Loading…".to_string();
        debug!(target: "commander::list", list = self.id, generation = self.generation, "load requested");
        true
    }

    /// Cancels an in-flight load. Rows already visible stay; staged rows
    /// are dropped. Returns whether a load was cancelled.
    pub fn cancel_load(&mut self) -> bool {
        if !self.is_loading() {
            return false;
        }
        self.generation += 1;
        self.pending.clear();
        info!(
            target: "commander::list",
            list = self.id,
            visible = self.items.len(),
            "load cancelled"
        );
        self.complete_load();
        true
    }

    /// Replaces the collection with a fresh load of `query`, cancelling any
    /// load in flight.
    pub fn refresh(&mut self, query: Query) -> bool {
        self.cancel_load();
        self.start_load(query)
    }

    /// Reloads with the most recent query.
    pub fn reload(&mut self) -> bool {
        let query = self.last_query.clone();
        self.refresh(query)
    }

    /// Drops every row and any load in flight.
    pub fn clear(&mut self) {
        self.cancel_load();
        self.reset_rows();
    }

    /// Advances the controller by one frame.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Advances the controller by one frame at time `now`.
    ///
    /// Runs, in order: a requested query, one transfer batch, the debounced
    /// filter, and status message expiry.
    pub fn tick_at(&mut self, now: Instant) {
        self.run_requested_query(now);
        self.transfer_batch();
        self.apply_debounced_filter(now);
        if self.status.as_ref().is_some_and(|s| s.expired(now)) {
            self.status = None;
        }
    }

    fn reset_rows(&mut self) {
        self.items.clear();
        self.pending.clear();
        self.pending_total = 0;
        self.selected = None;
        self.cursor = 0;
        self.viewport_start = 0;
    }

    fn run_requested_query(&mut self, now: Instant) {
        let query = match std::mem::replace(&mut self.load, LoadState::Transferring) {
            LoadState::Requested(query) => query,
            other => {
                self.load = other;
                return;
            }
        };

        let rows = match self.source.query(&query) {
            Ok(handles) => self.project_all(handles),
            Err(err) => {
                warn!(target: "commander::list", list = self.id, error = %err, "query failed");
                let text = format!("Could not load {}: {err}", self.config.item_name_plural);
                self.set_status_at(text, StatusKind::Error, now);
                VecDeque::new()
            }
        };

        info!(
            target: "commander::list",
            list = self.id,
            generation = self.generation,
            count = rows.len(),
            "query complete"
        );
        self.pending_total = rows.len();
        self.pending = rows;
        self.pending_generation = self.generation;
    }

    fn project_all(&self, handles: Vec<R::Handle>) -> VecDeque<Row<R>> {
        let mut rows: Vec<Row<R>> = handles
            .iter()
            .filter_map(|handle| match R::project(handle) {
                Ok(record) => Some(Row::new(record)),
                Err(err) => {
                    warn!(target: "commander::list", list = self.id, error = %err, "skipping handle");
                    None
                }
            })
            .collect();
        self.comparators
            .get(self.sort_key)
            .sort(&mut rows, self.direction);
        rows.into()
    }

    fn transfer_batch(&mut self) {
        if self.load != LoadState::Transferring {
            return;
        }
        if self.pending_generation != self.generation {
            debug!(target: "commander::list", list = self.id, "discarding stale staged rows");
            self.pending.clear();
            self.complete_load();
            return;
        }

        let batch = self.config.batch_size().min(self.pending.len());
        let filter = self.matcher();
        let comparator = self.comparators.get(self.sort_key);
        let direction = self.direction;
        let mut reordered = false;
        for mut row in self.pending.drain(..batch) {
            row.filtered = !filter.matches(row.record());
            // Staged rows already follow the visible order, so this is a
            // push unless the sort changed mid-load.
            let at = self
                .items
                .partition_point(|r| comparator.compare_rows(r, &row, direction).is_le());
            if at < self.items.len() {
                reordered = true;
                if let Some(selected) = self.selected.as_mut() {
                    if *selected >= at {
                        *selected += 1;
                    }
                }
            }
            self.items.insert(at, row);
        }
        if reordered {
            if let Some(pos) = self.selected.and_then(|i| self.item_to_visible(i)) {
                self.cursor = pos;
            }
        }

        if self.pending.is_empty() {
            self.complete_load();
        } else {
            self.progress_text = format!("Loading {}/{}", self.items.len(), self.pending_total);
        }
    }

    fn complete_load(&mut self) {
        self.load = LoadState::Idle;
        self.progress_text.clear();
        debug!(target: "commander::list", list = self.id, rows = self.items.len(), "load complete");
        if self.pending_filter.is_some() {
            self.apply_filter_now();
        }
    }
}
