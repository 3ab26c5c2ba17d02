// SPDX-FileCopyrightText: 2026 Vistat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Final SQL safety gate.
//!
//! Applied to every candidate statement regardless of which translator
//! produced it: the single trust boundary before execution. Checks run in
//! a fixed order and short-circuit on the first failure.

use std::sync::LazyLock;

use regex::Regex;
use vistat_core::types::{SafetyVerdict, SqlViolation};

use crate::filter::find_forbidden;

static SELECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*select\b").expect("select regex must compile"));

/// Validates a candidate SQL statement.
///
/// Order of checks:
/// 1. non-empty
/// 2. begins with `SELECT` (case-insensitive, leading whitespace allowed)
/// 3. no deny-listed token as a whole word
/// 4. at most one statement terminator (`;`)
/// 5. no SQL comment markers (`--`, `/*`)
pub fn validate_sql(sql: &str) -> SafetyVerdict {
    let trimmed = sql.trim();
    if trimmed.is_empty() {
        return SafetyVerdict::Rejected(SqlViolation::Empty);
    }

    if !SELECT_RE.is_match(sql) {
        return SafetyVerdict::Rejected(SqlViolation::NotSelect);
    }

    if let Some(word) = find_forbidden(sql) {
        return SafetyVerdict::Rejected(SqlViolation::ForbiddenWord(word));
    }

    if sql.matches(';').count() > 1 {
        return SafetyVerdict::Rejected(SqlViolation::MultipleStatements);
    }

    if sql.contains("--") || sql.contains("/*") {
        return SafetyVerdict::Rejected(SqlViolation::CommentMarker);
    }

    SafetyVerdict::Valid
}
