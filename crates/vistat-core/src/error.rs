// SPDX-FileCopyrightText: 2026 Vistat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Vistat bot.

use thiserror::Error;

/// The primary error type used across Vistat infrastructure seams.
///
/// This covers errors surfaced during bootstrap and by the adapter crates
/// (configuration, storage, channel, translator). Per-request pipeline
/// failures use the closed [`crate::types::QueryFailure`] taxonomy instead
/// and are never represented as `VistatError`.
#[derive(Debug, Error)]
pub enum VistatError {
    /// Configuration errors (missing required fields, invalid values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (pool construction, query failure).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Channel adapter errors (connection failure, delivery failure).
    #[error("channel error: {message}")]
    Channel {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Generative translator errors (HTTP failure, malformed response).
    #[error("translator error: {message}")]
    Translator {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An external call exceeded its deadline.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
