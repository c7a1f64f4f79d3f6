//! Short-lived, user-visible status messages.
//!
//! Collaborator failures are reported to the user through a status message
//! that expires on its own; nothing is raised to the host.

use std::time::{Duration, Instant};

/// Severity of a status message, used to pick its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Informational, e.g. "Renamed hero".
    Info,
    /// A collaborator failed.
    Error,
}

/// A message shown in the status area until it expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Text to show.
    pub text: String,
    /// Severity.
    pub kind: StatusKind,
    expires_at: Instant,
}

impl StatusMessage {
    /// Creates a message visible from `now` for `lifetime`.
    pub fn new(text: impl Into<String>, kind: StatusKind, now: Instant, lifetime: Duration) -> Self {
        Self {
            text: text.into(),
            kind,
            expires_at: now + lifetime,
        }
    }

    /// Whether the message should no longer be shown at `now`.
    pub fn expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
