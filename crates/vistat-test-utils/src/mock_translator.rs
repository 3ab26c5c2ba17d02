// SPDX-FileCopyrightText: 2026 Vistat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock translation strategy for deterministic testing.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use vistat_core::types::{SanitizedQuery, TranslationSource};
use vistat_core::SqlTranslator;

/// A mock translator with pre-configured outcomes.
///
/// Either a fixed answer repeated forever, or a FIFO queue of outcomes;
/// an exhausted queue yields `None`, which also models a strategy that
/// never produces SQL.
pub struct MockTranslator {
    source: TranslationSource,
    fixed: Option<String>,
    outcomes: Arc<Mutex<VecDeque<Option<String>>>>,
    calls: Arc<AtomicUsize>,
}

impl MockTranslator {
    /// A translator that always yields `None`.
    pub fn never(source: TranslationSource) -> Self {
        Self::with_outcomes(source, vec![])
    }

    /// A translator pre-loaded with a queue of outcomes.
    pub fn with_outcomes(source: TranslationSource, outcomes: Vec<Option<String>>) -> Self {
        Self {
            source,
            fixed: None,
            outcomes: Arc::new(Mutex::new(VecDeque::from(outcomes))),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A translator that yields the same SQL on every call.
    pub fn fixed(source: TranslationSource, sql: impl Into<String>) -> Self {
        let mut t = Self::never(source);
        t.fixed = Some(sql.into());
        t
    }

    /// How many times `translate` has been invoked.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SqlTranslator for MockTranslator {
    fn source(&self) -> TranslationSource {
        self.source
    }

    async fn translate(&self, _query: &SanitizedQuery) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(sql) = &self.fixed {
            return Some(sql.clone());
        }
        self.outcomes.lock().await.pop_front().flatten()
    }
}
