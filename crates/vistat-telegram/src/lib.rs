// SPDX-FileCopyrightText: 2026 Vistat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Telegram channel adapter for the Vistat bot.
//!
//! Long polling via teloxide. The channel owns command parsing (`/start`)
//! and message delivery; everything else about a question -- gating,
//! translation, vetting, execution -- happens inside the pipeline, which
//! always hands back a ready-to-send reply string. Delivery retries and
//! ordering are Telegram's concern, not ours.

use std::sync::Arc;

use teloxide::prelude::*;
use tracing::{debug, error, info};
use vistat_config::model::TelegramConfig;
use vistat_core::VistatError;
use vistat_pipeline::QueryPipeline;

/// Greeting sent in response to `/start`.
pub const WELCOME: &str = "\
Привет! Я бот для анализа статистики видео.
Примеры вопросов:
• Сколько всего видео есть в системе?
• Сколько видео у креатора с id ... вышло с 1 ноября 2025 по 5 ноября 2025?
• Сколько видео набрало больше 100000 просмотров?
• На сколько просмотров выросли все видео 28 ноября 2025?
• Сколько разных видео получали новые просмотры 27 ноября 2025?";

/// Telegram channel wired to a [`QueryPipeline`].
pub struct TelegramChannel {
    bot: Bot,
    pipeline: Arc<QueryPipeline>,
}

impl TelegramChannel {
    /// Creates the channel. Requires `config.bot_token` to be set.
    pub fn new(config: &TelegramConfig, pipeline: Arc<QueryPipeline>) -> Result<Self, VistatError> {
        let token = config.bot_token.as_deref().ok_or_else(|| {
            VistatError::Config("telegram.bot_token is required to start the channel".into())
        })?;

        if token.is_empty() {
            return Err(VistatError::Config(
                "telegram.bot_token cannot be empty".into(),
            ));
        }

        Ok(Self {
            bot: Bot::new(token),
            pipeline,
        })
    }

    /// Runs long polling until the process is stopped.
    pub async fn run(self) {
        info!("starting Telegram long polling");

        let pipeline = self.pipeline;
        let handler = Update::filter_message().endpoint(move |bot: Bot, msg: Message| {
            let pipeline = pipeline.clone();
            async move {
                let Some(text) = msg.text() else {
                    debug!(msg_id = msg.id.0, "ignoring non-text message");
                    return respond(());
                };

                let reply = response_for(&pipeline, text).await;
                if let Err(e) = bot.send_message(msg.chat.id, reply).await {
                    error!(error = %e, chat_id = msg.chat.id.0, "failed to send reply");
                }

                respond(())
            }
        });

        Dispatcher::builder(self.bot, handler)
            .default_handler(|_| async {}) // Silently ignore non-message updates
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    }
}

/// The reply for one inbound text: the greeting for `/start`, otherwise
/// whatever the pipeline decides.
pub(crate) async fn response_for(pipeline: &QueryPipeline, text: &str) -> String {
    if is_start_command(text) {
        return WELCOME.to_string();
    }
    pipeline.process(text).await.message
}

fn is_start_command(text: &str) -> bool {
    let first = text.split_whitespace().next().unwrap_or("");
    first == "/start" || first.starts_with("/start@")
}

#[cfg(test)]
mod tests {
    use super::*;
    use vistat_test_utils::MockExecutor;

    fn pipeline_returning(value: i64) -> QueryPipeline {
        QueryPipeline::new(Arc::new(MockExecutor::returning(Some(value))))
    }

    #[test]
    fn new_requires_bot_token() {
        let config = TelegramConfig { bot_token: None };
        let pipeline = Arc::new(pipeline_returning(0));
        assert!(TelegramChannel::new(&config, pipeline).is_err());
    }

    #[test]
    fn new_rejects_empty_token() {
        let config = TelegramConfig {
            bot_token: Some(String::new()),
        };
        let pipeline = Arc::new(pipeline_returning(0));
        assert!(TelegramChannel::new(&config, pipeline).is_err());
    }

    #[test]
    fn new_accepts_valid_token() {
        let config = TelegramConfig {
            bot_token: Some("123456:ABC-DEF1234ghIkl-zyx57W2v1u123ew11".into()),
        };
        let pipeline = Arc::new(pipeline_returning(0));
        assert!(TelegramChannel::new(&config, pipeline).is_ok());
    }

    #[test]
    fn start_command_variants() {
        assert!(is_start_command("/start"));
        assert!(is_start_command("/start@vistat_bot"));
        assert!(is_start_command("  /start  "));
        assert!(!is_start_command("/started"));
        assert!(!is_start_command("сколько всего видео"));
    }

    #[tokio::test]
    async fn start_command_gets_the_greeting() {
        let pipeline = pipeline_returning(42);
        let reply = response_for(&pipeline, "/start").await;
        assert_eq!(reply, WELCOME);
    }

    #[tokio::test]
    async fn question_gets_the_pipeline_answer() {
        let pipeline = pipeline_returning(42);
        let reply = response_for(&pipeline, "Сколько всего видео есть в системе?").await;
        assert_eq!(reply, "42");
    }
}
