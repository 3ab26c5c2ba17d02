// SPDX-FileCopyrightText: 2026 Vistat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Vistat video-statistics bot.
//!
//! This crate provides the foundational trait definitions, error types, and
//! domain types shared across the Vistat workspace: the translation and
//! execution seams, the query/result model, and the static schema
//! description consumed by the translators.

pub mod error;
pub mod schema;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::VistatError;
pub use types::{
    QueryFailure, QueryResult, SafetyVerdict, SanitizedQuery, SqlViolation, Translation,
    TranslationSource,
};

pub use traits::{ScalarExecutor, SqlTranslator};
