// SPDX-FileCopyrightText: 2026 Vistat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Vistat pipeline.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A user question after length check and whitespace normalization.
///
/// Constructed by the input sanitizer; immutable afterwards. `raw_chars`
/// is the character count of the ORIGINAL text, measured before any
/// normalization took place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedQuery {
    raw_chars: usize,
    text: String,
}

impl SanitizedQuery {
    /// Creates a sanitized query. Callers are expected to have normalized
    /// `text` already; this type does not re-normalize.
    pub fn new(raw_chars: usize, text: String) -> Self {
        Self { raw_chars, text }
    }

    /// The normalized question text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Character count of the raw input, before normalization.
    pub fn raw_chars(&self) -> usize {
        self.raw_chars
    }
}

/// Which strategy produced a candidate SQL statement.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TranslationSource {
    Generative,
    RuleBased,
}

/// A candidate SQL statement together with the strategy that produced it.
///
/// The pipeline carries `Option<Translation>`: `None` means "no strategy
/// produced SQL", which is a signal, not an error. Exactly one strategy
/// wins per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub sql: String,
    pub source: TranslationSource,
}

/// A single rule the SQL safety gate can reject on. Closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlViolation {
    /// The candidate statement is empty.
    Empty,
    /// The statement does not begin with SELECT.
    NotSelect,
    /// A deny-listed token appears as a whole word.
    ForbiddenWord(String),
    /// More than one statement terminator.
    MultipleStatements,
    /// A SQL comment marker (`--` or `/*`).
    CommentMarker,
}

impl std::fmt::Display for SqlViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SqlViolation::Empty => write!(f, "empty statement"),
            SqlViolation::NotSelect => write!(f, "statement is not a SELECT"),
            SqlViolation::ForbiddenWord(word) => write!(f, "forbidden word `{word}`"),
            SqlViolation::MultipleStatements => write!(f, "multiple statements"),
            SqlViolation::CommentMarker => write!(f, "comment marker"),
        }
    }
}

/// Verdict of the SQL safety gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SafetyVerdict {
    /// The statement may be executed.
    Valid,
    /// The statement must not be executed.
    Rejected(SqlViolation),
}

/// The closed taxonomy of per-request pipeline failures.
///
/// Every failure is recovered at the orchestrator boundary and mapped to a
/// fixed user-safe message; none of these ever escalates to a process
/// fault or carries backend detail across the system boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryFailure {
    /// Raw input exceeded the length limit.
    TooLong,
    /// A deny-listed word appeared in the question text.
    ForbiddenContent,
    /// No domain keyword matched; the question is off topic.
    UnrecognizedIntent,
    /// Neither translation strategy produced SQL.
    TranslationFailed,
    /// The safety gate rejected the candidate SQL.
    UnsafeSql(SqlViolation),
    /// Execution against the database failed.
    ExecutionError,
}

impl std::fmt::Display for QueryFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryFailure::TooLong => write!(f, "question too long"),
            QueryFailure::ForbiddenContent => write!(f, "forbidden content in question"),
            QueryFailure::UnrecognizedIntent => write!(f, "intent not recognized"),
            QueryFailure::TranslationFailed => write!(f, "translation failed"),
            QueryFailure::UnsafeSql(violation) => write!(f, "unsafe sql: {violation}"),
            QueryFailure::ExecutionError => write!(f, "execution error"),
        }
    }
}

/// The only value returned across the system boundary to the messaging
/// layer: a number, a success flag, and the user-facing reply text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    pub value: i64,
    pub success: bool,
    pub message: String,
}

impl QueryResult {
    /// A successful result; the reply text is the stringified value.
    pub fn success(value: i64) -> Self {
        Self {
            value,
            success: true,
            message: value.to_string(),
        }
    }

    /// A failed result with the given fixed user-facing text.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            value: 0,
            success: false,
            message: message.into(),
        }
    }
}
