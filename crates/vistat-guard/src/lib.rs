// SPDX-FileCopyrightText: 2026 Vistat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Safety layer of the query pipeline.
//!
//! Four pure checks, applied in a fixed order by the orchestrator:
//! length-bounded whitespace normalization, a whole-word deny-list scan, a
//! permissive domain-keyword gate, and the final translator-agnostic SQL
//! safety gate. The deny and allow lists are compiled-in constants; nothing
//! here is configurable or stateful at runtime.

pub mod filter;
pub mod intent;
pub mod lists;
pub mod sanitize;
pub mod sql;

pub use filter::find_forbidden;
pub use intent::is_on_topic;
pub use sanitize::sanitize;
pub use sql::validate_sql;
