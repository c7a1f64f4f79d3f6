//! Styles for the list view and its rows.
//!
//! All colours are adaptive and follow the terminal's light or dark theme.
//!
//! ```rust
//! use commander_list::list::style::{ListStyles, BULLET};
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = ListStyles::default();
//! styles.title = Style::new().bold(true);
//! assert_eq!(BULLET, "•");
//! ```

use lipgloss_extras::prelude::*;

/// Separator between help entries.
pub const BULLET: &str = "•";

/// Marks text cut to fit the available width.
pub const ELLIPSIS: &str = "…";

/// Styles for the parts of the list view surrounding the rows.
#[derive(Debug, Clone)]
pub struct ListStyles {
    /// The list title.
    pub title: Style,
    /// Sort column and direction next to the title.
    pub sort_indicator: Style,
    /// "Loading n/m" progress line.
    pub progress: Style,
    /// "Filter:" prompt while typing.
    pub filter_prompt: Style,
    /// Applied filter summary.
    pub filter_summary: Style,
    /// "n/m heroes" status bar.
    pub status_bar: Style,
    /// Informational status messages.
    pub status_info: Style,
    /// Error status messages.
    pub status_error: Style,
    /// Shown when there is nothing to list.
    pub no_items: Style,
    /// One-line key help.
    pub help: Style,
}

impl Default for ListStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            sort_indicator: Style::new().foreground(subdued.clone()).padding_left(1),
            progress: Style::new().foreground(AdaptiveColor {
                Light: "#8E8E8E",
                Dark: "#747373",
            }),
            filter_prompt: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            filter_summary: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            status_bar: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            status_info: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#04B575",
            }),
            status_error: Style::new().foreground(AdaptiveColor {
                Light: "#E03E3E",
                Dark: "#FF5F5F",
            }),
            no_items: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            help: Style::new().foreground(subdued),
        }
    }
}

/// Styles for individual rows.
#[derive(Debug, Clone)]
pub struct RowStyles {
    /// A row that is neither under the cursor nor selected.
    pub normal: Style,
    /// The row under the keyboard cursor.
    pub cursor: Style,
    /// The selected row.
    pub selected: Style,
    /// Characters matching the applied filter.
    pub filter_match: Style,
}

impl Default for RowStyles {
    fn default() -> Self {
        Self {
            normal: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            cursor: Style::new().foreground(AdaptiveColor {
                Light: "#EE6FF8",
                Dark: "#EE6FF8",
            }),
            selected: Style::new().bold(true).foreground(AdaptiveColor {
                Light: "#AD58B4",
                Dark: "#AD58B4",
            }),
            filter_match: Style::new().underline(true),
        }
    }
}
