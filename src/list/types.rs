//! Supporting types for the list controller: load state, frame and
//! selection messages, and the row rendering trait.

use crate::domain::Query;
use crate::record::{Record, Row};
use std::time::Instant;

/// Where the controller is in its load cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum LoadState {
    /// No load in flight.
    Idle,
    /// A load was requested; the query runs on the next tick.
    Requested(Query),
    /// Pre-sorted rows are being moved into the visible list.
    Transferring,
}

/// A filter change waiting for the debounce interval to elapse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct PendingFilter {
    pub text: String,
    pub changed_at: Instant,
}

/// Frame tick for one controller.
///
/// Scheduled by [`super::ListController::init`] and rescheduled after every
/// tick. Frames carrying another controller's id, or a tag from an earlier
/// `init`, are ignored so a controller never ticks twice per frame.
#[derive(Debug, Clone)]
pub struct FrameMsg {
    /// Id of the controller this frame belongs to.
    pub id: i64,
    tag: i64,
}

impl FrameMsg {
    pub(super) fn new(id: i64, tag: i64) -> Self {
        Self { id, tag }
    }

    pub(super) fn tag(&self) -> i64 {
        self.tag
    }
}

/// Returned by the controller whenever the selected row changes.
///
/// `handle` is `None` when the selection was cleared, including when a stale
/// row was picked.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionChanged<H> {
    /// The newly selected domain handle.
    pub handle: Option<H>,
}

/// Message form of [`SelectionChanged`], emitted by
/// [`super::ListController::update`] for sibling components.
#[derive(Debug, Clone)]
pub struct SelectionChangedMsg<H> {
    /// Id of the controller whose selection changed.
    pub list_id: i64,
    /// The newly selected domain handle.
    pub handle: Option<H>,
}

/// Renders one row of the list.
pub trait RowRenderer<R: Record> {
    /// Renders `row` into at most `width` columns.
    ///
    /// `is_cursor` marks the keyboard cursor row; `matches` holds the char
    /// indices of the record's `Display` text that matched the applied
    /// filter, for highlighting.
    fn render(&self, row: &Row<R>, is_cursor: bool, matches: &[usize], width: usize) -> String;

    /// Lines each row occupies.
    fn height(&self) -> usize {
        1
    }
}
