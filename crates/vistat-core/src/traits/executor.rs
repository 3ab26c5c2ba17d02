// SPDX-FileCopyrightText: 2026 Vistat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Execution seam: a vetted SELECT to a single scalar.

use async_trait::async_trait;

use crate::error::VistatError;

/// Executes one read-only statement and returns its single scalar value.
///
/// `Ok(None)` covers both a NULL scalar (e.g. `SUM` over no rows) and a
/// row-less result; the orchestrator maps either to 0. Implementations run
/// the call under an explicit timeout and are single-shot, with no retries.
#[async_trait]
pub trait ScalarExecutor: Send + Sync {
    /// Runs the statement and fetches the scalar.
    async fn fetch_scalar(&self, sql: &str) -> Result<Option<i64>, VistatError>;
}
