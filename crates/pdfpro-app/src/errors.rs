//! Application errors
//!
//! Hash normalization never fails, so routing has no "not found" error.
//! What can fail is writing the hash back to the host, parsing a page name
//! strictly, editing the conversion queue, and loading configuration.

use thiserror::Error;

// ============================================================================
// Routing
// ============================================================================

/// Error raised when a strict page-name parse sees something unknown.
///
/// Routing itself never surfaces this: unknown hashes normalize to
/// [`Page::Home`](crate::Page::Home).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown page: {0:?}")]
pub struct UnknownPage(pub String);

/// Failure to read or write the host location.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// The host has no location object (no window, detached document).
    #[error("location unavailable: {0}")]
    Unavailable(String),

    /// The host refused the hash update.
    #[error("failed to update hash to {hash:?}: {reason}")]
    HashUpdate {
        /// Hash value that was being written.
        hash: String,
        /// Host-provided reason.
        reason: String,
    },
}

// ============================================================================
// Conversion queue
// ============================================================================

/// Rejections from the converter page's file queue.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// File type is not in the accepted list.
    #[error("{name} is not a supported image ({mime})")]
    UnsupportedType {
        /// File name as selected by the user.
        name: String,
        /// Reported MIME type, possibly empty.
        mime: String,
    },

    /// The queue already holds the configured maximum.
    #[error("queue is full (max {max} files)")]
    Full {
        /// Configured limit.
        max: usize,
    },

    /// A conversion is running; the queue is frozen until it finishes.
    #[error("a conversion is already in progress")]
    Busy,

    /// Nothing to convert.
    #[error("no files selected")]
    Empty,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field parsed but holds an unusable value.
    #[error("invalid value for {field}: {reason}")]
    Invalid {
        /// Offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}
