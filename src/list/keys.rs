//! Key bindings for the list controller.
//!
//! - **Cursor**: `↑/k`, `↓/j`, `pgup`, `pgdn`, `g/home`, `G/end`; the row under
//!   the cursor becomes the selection
//! - **Sorting**: `s` next column, `o` flip direction
//! - **Filtering**: `/` start typing, `enter` apply now, `esc` clear
//! - **Reload**: `ctrl+r`

use crate::key::{self, Binding};
use crossterm::event::{KeyCode, KeyModifiers};

/// Key bindings for navigation, sorting, filtering and reload.
#[derive(Debug, Clone)]
pub struct ListKeyMap {
    /// Move the cursor up one row.
    pub cursor_up: Binding,
    /// Move the cursor down one row.
    pub cursor_down: Binding,
    /// Move the cursor up one screen.
    pub prev_page: Binding,
    /// Move the cursor down one screen.
    pub next_page: Binding,
    /// Jump to the first row.
    pub go_to_start: Binding,
    /// Jump to the last row.
    pub go_to_end: Binding,
    /// Sort by the next column.
    pub next_sort_column: Binding,
    /// Flip the sort direction.
    pub toggle_sort_direction: Binding,
    /// Start typing a filter.
    pub filter: Binding,
    /// Clear the applied filter.
    pub clear_filter: Binding,
    /// Apply the typed filter without waiting for the debounce.
    pub accept_filter: Binding,
    /// Stop typing and clear the filter.
    pub cancel_filter: Binding,
    /// Reload with the last query.
    pub reload: Binding,
}

impl Default for ListKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]).with_help("↑/k", "up"),
            cursor_down: Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            prev_page: Binding::new(vec![KeyCode::PageUp]).with_help("pgup", "prev page"),
            next_page: Binding::new(vec![KeyCode::PageDown]).with_help("pgdn", "next page"),
            go_to_start: Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "go to start"),
            go_to_end: Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "go to end"),
            next_sort_column: Binding::new(vec![KeyCode::Char('s')]).with_help("s", "sort column"),
            toggle_sort_direction: Binding::new(vec![KeyCode::Char('o')]).with_help("o", "order"),
            filter: Binding::new(vec![KeyCode::Char('/')]).with_help("/", "filter"),
            clear_filter: Binding::new(vec![KeyCode::Esc]).with_help("esc", "clear filter"),
            accept_filter: Binding::new(vec![KeyCode::Enter, KeyCode::Tab])
                .with_help("enter", "apply filter"),
            cancel_filter: Binding::new(vec![KeyCode::Esc]).with_help("esc", "cancel"),
            reload: Binding::with_modifiers(KeyCode::Char('r'), KeyModifiers::CONTROL)
                .with_help("ctrl+r", "reload"),
        }
    }
}

impl key::KeyMap for ListKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.cursor_up,
            &self.cursor_down,
            &self.next_sort_column,
            &self.toggle_sort_direction,
            &self.filter,
            &self.reload,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![
                &self.cursor_up,
                &self.cursor_down,
                &self.prev_page,
                &self.next_page,
                &self.go_to_start,
                &self.go_to_end,
            ],
            vec![&self.next_sort_column, &self.toggle_sort_direction],
            vec![
                &self.filter,
                &self.clear_filter,
                &self.accept_filter,
                &self.cancel_filter,
            ],
            vec![&self.reload],
        ]
    }
}
