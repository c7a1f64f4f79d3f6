//! Default row renderer.
//!
//! Renders a row as `"<marker> <record>"`, where the record text comes from
//! its `Display` impl, cut to the available width. Characters matching the
//! applied filter are underlined.

use super::style::{RowStyles, ELLIPSIS};
use super::types::RowRenderer;
use crate::record::{Record, Row};
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthChar;

/// Cuts `text` to `width` display columns, ending with an ellipsis when cut.
pub(crate) fn truncate(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(ELLIPSIS);
    out
}

fn apply_character_highlighting(
    text: &str,
    matches: &[usize],
    highlight_style: &Style,
    normal_style: &Style,
) -> String {
    if matches.is_empty() {
        return normal_style.render(text);
    }

    let chars: Vec<char> = text.chars().collect();
    let mut result = String::new();
    let mut segment = String::new();
    let mut in_match = false;

    for (i, c) in chars.iter().enumerate() {
        let is_match = matches.contains(&i);
        if is_match != in_match && !segment.is_empty() {
            let style = if in_match { highlight_style } else { normal_style };
            result.push_str(&style.render(&segment));
            segment.clear();
        }
        in_match = is_match;
        segment.push(*c);
    }
    if !segment.is_empty() {
        let style = if in_match { highlight_style } else { normal_style };
        result.push_str(&style.render(&segment));
    }

    result
}

/// Renders each row on one line using the record's `Display` output.
#[derive(Debug, Clone, Default)]
pub struct DefaultRenderer {
    /// Row styles.
    pub styles: RowStyles,
}

impl DefaultRenderer {
    /// A renderer with the default styles.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: Record> RowRenderer<R> for DefaultRenderer {
    fn render(&self, row: &Row<R>, is_cursor: bool, matches: &[usize], width: usize) -> String {
        let marker = match (row.selected(), is_cursor) {
            (true, _) => "●",
            (false, true) => ">",
            (false, false) => " ",
        };
        let text = truncate(&row.record().to_string(), width.saturating_sub(2));

        let s = &self.styles;
        let base = if row.selected() {
            &s.selected
        } else if is_cursor {
            &s.cursor
        } else {
            &s.normal
        };
        let highlight = base.clone().inherit(s.filter_match.clone());
        format!(
            "{} {}",
            base.render(marker),
            apply_character_highlighting(&text, matches, &highlight, base)
        )
    }
}
