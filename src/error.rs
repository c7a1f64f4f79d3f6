//! Error type shared by the list controller, the detail view and the
//! bundled hero domain.
//!
//! Errors never escape to the host: controller and detail entry points turn
//! them into a transient status message (see [`crate::status`]) and a log
//! line. The type exists so collaborators have something precise to return.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by domain collaborators and configuration loading.
#[derive(Debug, Error)]
pub enum Error {
    /// The domain query collaborator failed.
    #[error("query failed: {0}")]
    Query(String),

    /// A domain handle refers to an object that no longer exists.
    #[error("domain handle is no longer valid")]
    InvalidHandle,

    /// A domain action (rename, reassign, ...) was refused.
    #[error("action failed: {0}")]
    Action(String),

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
