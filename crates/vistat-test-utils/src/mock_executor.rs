// SPDX-FileCopyrightText: 2026 Vistat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock scalar executor for deterministic testing.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use vistat_core::{ScalarExecutor, VistatError};

/// What the mock should do on each call.
enum Behavior {
    Scalar(Option<i64>),
    Fail,
}

/// A mock executor that records every statement it is asked to run.
///
/// The recorded SQL lets tests assert both WHAT would have been executed
/// and, for rejected candidates, that execution never happened.
pub struct MockExecutor {
    behavior: Behavior,
    executed: Arc<Mutex<Vec<String>>>,
}

impl MockExecutor {
    /// An executor returning the given scalar for every statement.
    pub fn returning(value: Option<i64>) -> Self {
        Self {
            behavior: Behavior::Scalar(value),
            executed: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// An executor failing every statement with a storage error.
    pub fn failing() -> Self {
        Self {
            behavior: Behavior::Fail,
            executed: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every statement passed to `fetch_scalar`, in order.
    pub async fn executed_sql(&self) -> Vec<String> {
        self.executed.lock().await.clone()
    }
}

#[async_trait]
impl ScalarExecutor for MockExecutor {
    async fn fetch_scalar(&self, sql: &str) -> Result<Option<i64>, VistatError> {
        self.executed.lock().await.push(sql.to_string());
        match &self.behavior {
            Behavior::Scalar(value) => Ok(*value),
            Behavior::Fail => Err(VistatError::Storage {
                source: "mock execution failure".into(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_statements_in_order() {
        let exec = MockExecutor::returning(Some(7));
        assert_eq!(exec.fetch_scalar("SELECT 1").await.unwrap(), Some(7));
        assert_eq!(exec.fetch_scalar("SELECT 2").await.unwrap(), Some(7));
        assert_eq!(exec.executed_sql().await, vec!["SELECT 1", "SELECT 2"]);
    }

    #[tokio::test]
    async fn null_scalar_passes_through() {
        let exec = MockExecutor::returning(None);
        assert_eq!(exec.fetch_scalar("SELECT SUM(x)").await.unwrap(), None);
    }

    #[tokio::test]
    async fn failing_executor_errors() {
        let exec = MockExecutor::failing();
        assert!(exec.fetch_scalar("SELECT 1").await.is_err());
        assert_eq!(exec.executed_sql().await.len(), 1);
    }
}
