// SPDX-FileCopyrightText: 2026 Vistat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Input sanitation: length bound, then whitespace normalization.

use vistat_core::types::{QueryFailure, SanitizedQuery};

use crate::lists::MAX_QUERY_LEN;

/// Normalizes a raw question into a [`SanitizedQuery`].
///
/// The length check runs on the RAW text, before normalization or any other
/// stage, so every downstream stage works on bounded input. Normalization
/// collapses whitespace runs to single spaces and trims both ends.
pub fn sanitize(raw: &str) -> Result<SanitizedQuery, QueryFailure> {
    let raw_chars = raw.chars().count();
    if raw_chars > MAX_QUERY_LEN {
        return Err(QueryFailure::TooLong);
    }

    let text = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    Ok(SanitizedQuery::new(raw_chars, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_runs() {
        let q = sanitize("  сколько   всего\t\nвидео  ").unwrap();
        assert_eq!(q.text(), "сколько всего видео");
    }

    #[test]
    fn length_is_measured_on_raw_text() {
        // 501 chars of padding collapses to almost nothing after
        // normalization, but the raw text is over the limit.
        let raw = format!("видео{}", " ".repeat(MAX_QUERY_LEN));
        assert_eq!(sanitize(&raw), Err(QueryFailure::TooLong));
    }

    #[test]
    fn boundary_length_is_accepted() {
        let raw = "я".repeat(MAX_QUERY_LEN);
        let q = sanitize(&raw).unwrap();
        assert_eq!(q.raw_chars(), MAX_QUERY_LEN);
    }

    #[test]
    fn over_limit_cyrillic_counts_chars_not_bytes() {
        // Cyrillic is two bytes per char; the limit is in characters.
        let raw = "ы".repeat(MAX_QUERY_LEN + 1);
        assert_eq!(sanitize(&raw), Err(QueryFailure::TooLong));
    }

    #[test]
    fn empty_input_sanitizes_to_empty() {
        let q = sanitize("   ").unwrap();
        assert_eq!(q.text(), "");
    }
}
