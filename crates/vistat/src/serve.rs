// SPDX-FileCopyrightText: 2026 Vistat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `vistat serve` command implementation.
//!
//! Wires the system together: PostgreSQL pool + readiness loop, the
//! optional DeepSeek translator, the query pipeline, and the Telegram
//! channel. All handles are created once here and shared immutably with
//! every request.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use vistat_config::VistatConfig;
use vistat_core::VistatError;
use vistat_deepseek::DeepSeekTranslator;
use vistat_pipeline::QueryPipeline;
use vistat_storage::PgExecutor;
use vistat_telegram::TelegramChannel;

/// Runs the `vistat serve` command.
pub async fn run_serve(config: VistatConfig) -> Result<(), VistatError> {
    init_tracing(&config.agent.log_level);

    info!(name = config.agent.name, "starting vistat serve");

    // Storage: build the pool, then wait for the database (and its data
    // load) to become ready. This is the only retry loop in the system.
    let executor = PgExecutor::connect(&config.database).await?;
    executor
        .wait_until_ready(
            config.database.startup_attempts,
            Duration::from_secs(config.database.startup_retry_secs),
        )
        .await?;

    // Translation: generative capability is optional; without an API key
    // the pipeline serves rule-based translation only.
    let mut pipeline = QueryPipeline::new(Arc::new(executor));
    match DeepSeekTranslator::from_config(&config.deepseek)? {
        Some(translator) => {
            pipeline = pipeline.with_generative(Arc::new(translator));
        }
        None => {
            info!("no DeepSeek API key configured; generative translation disabled");
        }
    }

    // Channel: Telegram long polling until the process stops.
    let channel = TelegramChannel::new(&config.telegram, Arc::new(pipeline))?;
    channel.run().await;

    Ok(())
}

/// Initializes the tracing subscriber from the configured log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
