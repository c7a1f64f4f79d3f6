//! Incremental list-binding controller.
//!
//! [`ListController<R, Q>`] turns the handles returned by a
//! [`DomainQuery`](crate::domain::DomainQuery) into [`Row`](crate::record::Row)s of
//! display records and keeps them sorted and filtered without ever stalling
//! a frame:
//!
//! - **Deferred query**: `start_load` only records the request; the query
//!   runs inside the next tick.
//! - **Incremental insertion**: results are pre-sorted into a staging buffer
//!   and moved into the visible list `batch_size` rows per tick, so the list
//!   is in final order from the first batch.
//! - **Debounced filtering**: `set_filter` records text and a timestamp; the
//!   tick applies it once the debounce interval passed, flipping each row's
//!   `filtered` flag.
//! - **In-place sorting**: `set_sort_key` reorders rows without recreating
//!   them, so selection and filter state survive.
//!
//! ### Frame loop
//!
//! Under the bubbletea runtime, [`ListController::init`] schedules a
//! [`FrameMsg`] and [`ListController::update`] reschedules it after every
//! tick. Hosts with their own loop call [`ListController::tick`] directly.
//!
//! ### Keys
//!
//! While the filter input is active, characters edit the filter and `enter`
//! applies it immediately; otherwise the [`ListKeyMap`] bindings move the
//! cursor, change the sort and reload.

mod filtering;
pub mod keys;
mod loading;
mod model;
pub mod renderer;
mod rendering;
mod selection;
mod sorting;
pub mod style;
mod types;

#[cfg(test)]
mod tests;

pub use keys::ListKeyMap;
pub use model::ListController;
pub use renderer::DefaultRenderer;
pub use style::{ListStyles, RowStyles};
pub use types::{FrameMsg, RowRenderer, SelectionChanged, SelectionChangedMsg};

use crate::domain::DomainQuery;
use crate::record::Record;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, KeyMsg, Msg, WindowSizeMsg};
use crossterm::event::KeyCode;
use std::time::{Duration, Instant};

impl<R: Record, Q: DomainQuery<Handle = R::Handle>> ListController<R, Q> {
    /// Starts the frame loop. Frames from an earlier `init` are ignored
    /// afterwards.
    pub fn init(&mut self) -> Cmd {
        self.tag += 1;
        self.frame()
    }

    fn frame(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.config.frame_interval(), move |_| {
            Box::new(FrameMsg::new(id, tag)) as Msg
        })
    }

    /// Handles one key press. Returns the selection change it caused, if any.
    pub fn handle_key(&mut self, key: &KeyMsg) -> Option<SelectionChanged<R::Handle>> {
        self.handle_key_at(key, Instant::now())
    }

    /// Handles one key press made at `now`.
    pub fn handle_key_at(
        &mut self,
        key: &KeyMsg,
        now: Instant,
    ) -> Option<SelectionChanged<R::Handle>> {
        if self.filter_input_active {
            if self.keymap.accept_filter.matches(key) {
                self.filter_input_active = false;
                if self.pending_filter.is_some() {
                    self.apply_filter_now();
                }
            } else if self.keymap.cancel_filter.matches(key) {
                self.filter_input_active = false;
                self.clear_filter();
            } else if key.key == KeyCode::Backspace {
                let mut text = self.filter_draft.clone();
                text.pop();
                self.set_filter_at(text, now);
            } else if let KeyCode::Char(c) = key.key {
                let mut text = self.filter_draft.clone();
                text.push(c);
                self.set_filter_at(text, now);
            }
            return None;
        }

        let page = self.rows_per_view() as isize;
        if self.keymap.cursor_up.matches(key) {
            self.move_cursor(-1)
        } else if self.keymap.cursor_down.matches(key) {
            self.move_cursor(1)
        } else if self.keymap.prev_page.matches(key) {
            self.move_cursor(-page)
        } else if self.keymap.next_page.matches(key) {
            self.move_cursor(page)
        } else if self.keymap.go_to_start.matches(key) {
            self.go_to_start()
        } else if self.keymap.go_to_end.matches(key) {
            self.go_to_end()
        } else if self.keymap.next_sort_column.matches(key) {
            self.cycle_sort_key();
            None
        } else if self.keymap.toggle_sort_direction.matches(key) {
            self.toggle_sort_direction();
            None
        } else if self.keymap.filter.matches(key) {
            self.filter_input_active = true;
            self.filter_draft.clone_from(&self.filter_text);
            None
        } else if self.keymap.clear_filter.matches(key) {
            self.clear_filter();
            None
        } else if self.keymap.reload.matches(key) {
            let had_selection = self.selected.is_some();
            self.reload();
            had_selection.then_some(SelectionChanged { handle: None })
        } else {
            None
        }
    }
}

impl<R, Q> ListController<R, Q>
where
    R: Record,
    R::Handle: Send + 'static,
    Q: DomainQuery<Handle = R::Handle>,
{
    /// Handles frames, key presses and window resizes.
    ///
    /// A frame for this controller runs [`tick`](Self::tick) and schedules
    /// the next one. A key press that changes the selection returns a
    /// command delivering a [`SelectionChangedMsg`].
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(frame) = msg.downcast_ref::<FrameMsg>() {
            if frame.id != self.id || frame.tag() != self.tag {
                return None;
            }
            self.tick();
            return Some(self.frame());
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            let change = self.handle_key(key)?;
            let list_id = self.id;
            return Some(bubbletea_tick(Duration::from_nanos(1), move |_| {
                Box::new(SelectionChangedMsg {
                    list_id,
                    handle: change.handle.clone(),
                }) as Msg
            }));
        }

        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.config.width = size.width as usize;
            self.config.height = size.height as usize;
            self.sync_viewport_with_cursor();
        }

        None
    }
}
