// SPDX-FileCopyrightText: 2026 Vistat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic rule-based translation.
//!
//! A fixed set of phrase templates over the lowercased question text, each
//! emitting a byte-exact SQL statement against the video-statistics schema.
//! No network, no state, no latency. This is the fallback strategy when
//! the generative translator is absent or yields nothing.

pub mod dates;
pub mod rules;

pub use rules::RuleTranslator;
