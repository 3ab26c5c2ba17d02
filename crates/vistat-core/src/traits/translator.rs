// SPDX-FileCopyrightText: 2026 Vistat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Translation seam: natural language to a candidate SQL statement.

use async_trait::async_trait;

use crate::types::{SanitizedQuery, TranslationSource};

/// A strategy that turns a sanitized question into a candidate SQL string.
///
/// `translate` returns `None` for "no result": an off-domain question, an
/// unmatched template, or (for the generative strategy) a timeout or
/// transport failure. Implementations never surface errors to the caller;
/// failure causes are logged inside the adapter. A returned `Some` is
/// guaranteed non-empty; every other shape constraint belongs to the SQL
/// safety gate, not to translators.
#[async_trait]
pub trait SqlTranslator: Send + Sync {
    /// Which strategy this translator implements.
    fn source(&self) -> TranslationSource;

    /// Attempts to produce SQL for the question.
    async fn translate(&self, query: &SanitizedQuery) -> Option<String>;
}
