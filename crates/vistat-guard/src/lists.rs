// SPDX-FileCopyrightText: 2026 Vistat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed deny and allow lists.

/// Maximum accepted question length in characters, measured on the raw
/// input before normalization.
pub const MAX_QUERY_LEN: usize = 500;

/// Tokens that must never appear as a whole word in a question or in a
/// candidate SQL statement: SQL mutation verbs plus credential terms.
pub const FORBIDDEN_WORDS: &[&str] = &[
    "drop", "delete", "insert", "update", "truncate", "alter", "create", "grant", "revoke",
    "exec", "password", "token", "secret", "key", "admin",
];

/// Domain keywords. A question is considered on topic when ANY of these
/// appears as a substring of the lowercased text. The list errs toward
/// accepting: its job is to cut false rejections of legitimate questions,
/// while the deny list and the SQL gate carry the safety burden.
pub const ALLOWED_KEYWORDS: &[&str] = &[
    "сколько",
    "видео",
    "просмотров",
    "лайков",
    "комментариев",
    "жалоб",
    "креатора",
    "выросло",
    "выросли",
    "прирост",
    "разных",
    "новых",
    "всего",
    "больше",
    "меньше",
    "системе",
    "времени",
    "включительно",
    "с",
    "по",
    "на",
    "сумме",
];
