//! Debounced filtering.
//!
//! Filter changes are recorded with a timestamp and applied by the tick once
//! no further change arrived for the configured debounce interval. Applying
//! a filter is a full scan that flips each row's `filtered` flag; rows are
//! never removed or reordered.

use super::types::PendingFilter;
use super::ListController;
use crate::config::FilterMode;
use crate::domain::DomainQuery;
use crate::record::Record;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::time::Instant;
use tracing::debug;

/// Matches records against one filter text.
pub(super) struct FilterMatcher {
    needle: String,
    mode: FilterMode,
    fuzzy: Option<SkimMatcherV2>,
}

impl FilterMatcher {
    pub(super) fn new(text: &str, mode: FilterMode) -> Self {
        let fuzzy = match mode {
            FilterMode::Fuzzy if !text.is_empty() => Some(SkimMatcherV2::default().ignore_case()),
            _ => None,
        };
        Self {
            needle: text.to_lowercase(),
            mode,
            fuzzy,
        }
    }

    /// Whether `record` stays visible under this filter. An empty filter
    /// keeps everything.
    pub(super) fn matches<R: Record>(&self, record: &R) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        let value = record.filter_value();
        match (self.mode, &self.fuzzy) {
            (FilterMode::Fuzzy, Some(matcher)) => matcher.fuzzy_match(&value, &self.needle).is_some(),
            _ => value.to_lowercase().contains(&self.needle),
        }
    }

    /// Char indices of the record's `Display` text that matched, for
    /// highlighting. The match is taken on `filter_value()` and shifted to
    /// where that value appears in the displayed line; empty when nothing
    /// matched or the value is not shown.
    pub(super) fn highlights<R: Record>(&self, record: &R) -> Vec<usize> {
        if self.needle.is_empty() {
            return Vec::new();
        }
        let value = record.filter_value();
        let indices = match (self.mode, &self.fuzzy) {
            (FilterMode::Fuzzy, Some(matcher)) => matcher
                .fuzzy_indices(&value, &self.needle)
                .map(|(_, indices)| indices)
                .unwrap_or_default(),
            _ => substring_indices(&value, &self.needle),
        };
        if indices.is_empty() {
            return indices;
        }
        let line = record.to_string();
        let Some(byte_offset) = line.find(value.as_str()) else {
            return Vec::new();
        };
        let offset = line[..byte_offset].chars().count();
        indices.into_iter().map(|i| i + offset).collect()
    }
}

/// Char indices of the first case-insensitive occurrence of `needle`.
fn substring_indices(text: &str, needle: &str) -> Vec<usize> {
    let hay: Vec<char> = text.chars().collect();
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() || needle.len() > hay.len() {
        return Vec::new();
    }
    let same = |a: char, b: char| a.to_lowercase().eq(b.to_lowercase());
    (0..=hay.len() - needle.len())
        .find(|&start| needle.iter().enumerate().all(|(i, &n)| same(hay[start + i], n)))
        .map(|start| (start..start + needle.len()).collect())
        .unwrap_or_default()
}

impl<R: Record, Q: DomainQuery<Handle = R::Handle>> ListController<R, Q> {
    /// Requests a filter change. Applied by a later tick once the debounce
    /// interval has passed without another change.
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.set_filter_at(text, Instant::now());
    }

    /// Requests a filter change made at time `now`.
    pub fn set_filter_at(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        self.filter_draft.clone_from(&text);
        self.pending_filter = Some(PendingFilter {
            text,
            changed_at: now,
        });
    }

    /// Applies the pending filter text, if any, immediately.
    ///
    /// Recomputes the `filtered` flag of every row against the newest text.
    pub fn apply_filter_now(&mut self) {
        if let Some(pending) = self.pending_filter.take() {
            self.filter_text = pending.text;
        }
        let filter = self.matcher();
        for row in &mut self.items {
            row.filtered = !filter.matches(row.record());
        }
        self.filter_applications += 1;
        self.clamp_cursor();
        debug!(
            target: "commander::list",
            list = self.id,
            filter = %self.filter_text,
            visible = self.visible_len(),
            "filter applied"
        );
    }

    /// Clears the filter immediately, showing every row again.
    pub fn clear_filter(&mut self) {
        self.pending_filter = None;
        self.filter_text.clear();
        self.filter_draft.clear();
        self.apply_filter_now();
    }

    pub(super) fn apply_debounced_filter(&mut self, now: Instant) {
        // Filters waiting during a transfer are applied when the load completes.
        if self.is_loading() {
            return;
        }
        let due = self
            .pending_filter
            .as_ref()
            .is_some_and(|p| now.saturating_duration_since(p.changed_at) >= self.config.debounce());
        if due {
            self.apply_filter_now();
        }
    }

    pub(super) fn matcher(&self) -> FilterMatcher {
        FilterMatcher::new(&self.filter_text, self.config.filter_mode)
    }
}
