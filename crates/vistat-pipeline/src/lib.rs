// SPDX-FileCopyrightText: 2026 Vistat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query orchestration for the Vistat bot.
//!
//! [`QueryPipeline`] sequences the stages of a request:
//!
//! ```text
//! Received -> Sanitized -> IntentChecked -> Translated -> SafetyChecked
//!          -> Executed -> Done
//! ```
//!
//! with an early exit to a failure outcome from any stage. The pipeline
//! owns no mutable state across requests: translators and the executor are
//! `Arc` handles acquired at startup, so `process` may run concurrently
//! for independent requests without locking. Every failure is recovered
//! here and mapped to a fixed user-safe reply; nothing user-triggered can
//! escalate to a process fault.

pub mod messages;

use std::sync::Arc;

use tracing::{debug, error, info, warn};
use vistat_core::types::{QueryFailure, QueryResult, SafetyVerdict, SanitizedQuery, Translation};
use vistat_core::{ScalarExecutor, SqlTranslator};
use vistat_guard::{find_forbidden, is_on_topic, sanitize, validate_sql};
use vistat_translate::RuleTranslator;

/// Orchestrates one question from raw text to a [`QueryResult`].
pub struct QueryPipeline {
    /// The generative strategy is an explicit optional capability: absence
    /// (no API key configured) is a normal configuration, not an error.
    generative: Option<Arc<dyn SqlTranslator>>,
    rules: RuleTranslator,
    executor: Arc<dyn ScalarExecutor>,
}

impl QueryPipeline {
    /// Creates a pipeline with rule-based translation only.
    pub fn new(executor: Arc<dyn ScalarExecutor>) -> Self {
        Self {
            generative: None,
            rules: RuleTranslator::new(),
            executor,
        }
    }

    /// Adds the generative translation capability.
    pub fn with_generative(mut self, translator: Arc<dyn SqlTranslator>) -> Self {
        self.generative = Some(translator);
        self
    }

    /// Whether generative translation is configured.
    pub fn has_generative(&self) -> bool {
        self.generative.is_some()
    }

    /// Processes one raw question and always returns a reply.
    pub async fn process(&self, raw: &str) -> QueryResult {
        match self.run(raw).await {
            Ok(value) => {
                info!(value, "question answered");
                QueryResult::success(value)
            }
            Err(failure) => {
                warn!(failure = %failure, "question rejected");
                QueryResult::failure(messages::for_failure(&failure))
            }
        }
    }

    async fn run(&self, raw: &str) -> Result<i64, QueryFailure> {
        // 1. Length gate on the raw text, then whitespace normalization.
        let query = sanitize(raw)?;

        // 2. Deny-list scan on the question itself.
        if let Some(word) = find_forbidden(query.text()) {
            warn!(word, "forbidden word in question");
            return Err(QueryFailure::ForbiddenContent);
        }

        // 3. Domain keyword gate.
        if !is_on_topic(query.text()) {
            debug!("no domain keyword matched");
            return Err(QueryFailure::UnrecognizedIntent);
        }

        // 4-6. Translation: generative first, rule-based fallback.
        let translation = self
            .translate(&query)
            .await
            .ok_or(QueryFailure::TranslationFailed)?;

        // 7. The safety gate, regardless of which strategy produced the SQL.
        if let SafetyVerdict::Rejected(violation) = validate_sql(&translation.sql) {
            warn!(source = %translation.source, violation = %violation, "candidate SQL rejected");
            return Err(QueryFailure::UnsafeSql(violation));
        }

        info!(source = %translation.source, sql = translation.sql, "executing vetted SQL");

        // 8. Execution. A NULL or row-less scalar means zero; the cause of
        // a failure is logged for operators and never shown to the user.
        match self.executor.fetch_scalar(&translation.sql).await {
            Ok(value) => Ok(value.unwrap_or(0)),
            Err(e) => {
                error!(error = %e, "query execution failed");
                Err(QueryFailure::ExecutionError)
            }
        }
    }

    async fn translate(&self, query: &SanitizedQuery) -> Option<Translation> {
        if let Some(generative) = &self.generative
            && let Some(sql) = generative.translate(query).await
        {
            return Some(Translation {
                sql,
                source: generative.source(),
            });
        }

        let sql = self.rules.translate(query).await?;
        Some(Translation {
            sql,
            source: self.rules.source(),
        })
    }
}
