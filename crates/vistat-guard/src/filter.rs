// SPDX-FileCopyrightText: 2026 Vistat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Whole-word deny-list scan.
//!
//! One compiled regex, applied both to sanitized question text and, by the
//! SQL safety gate, to candidate SQL. Word boundaries are mandatory: a
//! deny-listed token inside a longer unrelated word must not match.

use std::sync::LazyLock;

use regex::Regex;

use crate::lists::FORBIDDEN_WORDS;

static FORBIDDEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = FORBIDDEN_WORDS.join("|");
    Regex::new(&format!(r"(?i)\b({alternation})\b")).expect("deny-list regex must compile")
});

/// Returns the first deny-listed token found as a whole word, lowercased,
/// or `None` when the text is clean. The caller decides the error kind
/// based on which input (question text vs. generated SQL) failed.
pub fn find_forbidden(text: &str) -> Option<String> {
    FORBIDDEN_RE.find(text).map(|m| m.as_str().to_lowercase())
}
