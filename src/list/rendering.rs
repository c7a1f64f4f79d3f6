//! View rendering.
//!
//! The view stacks, top to bottom: the title with the sort indicator, one
//! line of load progress or filter state, the rows inside the viewport, the
//! status bar, a transient status message and the short help.

use super::style::BULLET;
use super::ListController;
use crate::domain::DomainQuery;
use crate::key::{self, KeyMap};
use crate::record::Record;
use crate::status::StatusKind;

impl<R: Record, Q: DomainQuery<Handle = R::Handle>> ListController<R, Q> {
    pub(super) fn view_header(&self) -> String {
        let title = self.styles.title.render(&self.config.title);
        let sort = self
            .styles
            .sort_indicator
            .render(&format!("{:?} {}", self.sort_key, self.direction.arrow()));
        format!("{title}{sort}")
    }

    /// Progress while loading, the filter prompt while typing, otherwise a
    /// summary of the applied filter.
    pub(super) fn view_subheader(&self) -> String {
        if self.filter_input_active {
            return format!(
                "{} {}▏",
                self.styles.filter_prompt.render("Filter:"),
                self.filter_draft
            );
        }
        if self.is_loading() {
            return self.styles.progress.render(&self.progress_text);
        }
        if !self.filter_text.is_empty() {
            return self.styles.filter_summary.render(&format!(
                "“{}” {} of {}",
                self.filter_text,
                self.visible_len(),
                self.len()
            ));
        }
        String::new()
    }

    pub(super) fn view_rows(&self) -> String {
        if self.visible_len() == 0 {
            if self.is_loading() {
                return String::new();
            }
            let text = if self.is_empty() {
                format!("No {}.", self.config.item_name_plural)
            } else {
                "No matches.".to_string()
            };
            return self.styles.no_items.render(&text);
        }

        let filter = self.matcher();
        self.visible()
            .enumerate()
            .skip(self.viewport_start)
            .take(self.rows_per_view())
            .map(|(pos, row)| {
                let matches = filter.highlights(row.record());
                self.renderer
                    .render(row, pos == self.cursor, &matches, self.config.width)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(super) fn view_footer(&self) -> String {
        let mut lines = Vec::new();

        let visible = self.visible_len();
        if visible > 0 {
            let noun = if visible == 1 {
                &self.config.item_name_singular
            } else {
                &self.config.item_name_plural
            };
            lines.push(self.styles.status_bar.render(&format!(
                "{}/{} {}",
                self.cursor + 1,
                visible,
                noun
            )));
        }

        if let Some(status) = &self.status {
            let style = match status.kind {
                StatusKind::Info => &self.styles.status_info,
                StatusKind::Error => &self.styles.status_error,
            };
            lines.push(style.render(&status.text));
        }

        let bindings = if self.filter_input_active {
            vec![&self.keymap.accept_filter, &self.keymap.cancel_filter]
        } else {
            self.keymap.short_help()
        };
        let help = key::help_line(&bindings, &format!(" {BULLET} "));
        if !help.is_empty() {
            lines.push(self.styles.help.render(&help));
        }

        lines.join("\n")
    }

    /// Renders the whole list.
    pub fn view(&self) -> String {
        [
            self.view_header(),
            self.view_subheader(),
            self.view_rows(),
            self.view_footer(),
        ]
        .into_iter()
        .filter(|section| !section.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
    }
}
