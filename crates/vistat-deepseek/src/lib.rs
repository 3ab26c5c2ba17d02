// SPDX-FileCopyrightText: 2026 Vistat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! DeepSeek generative translation strategy for Vistat.
//!
//! Implements [`SqlTranslator`] over the DeepSeek chat-completions API. The
//! prompt embeds a fixed system instruction, the static schema descriptor,
//! and the few-shot example block; all three are injected at construction
//! and never change at runtime. Every failure mode -- timeout, transport
//! error, non-2xx status, malformed or non-SELECT output -- is logged here
//! and reported to the orchestrator as "no result", never as an error.

pub mod client;
pub mod types;

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use tracing::{info, warn};
use vistat_config::model::DeepSeekConfig;
use vistat_core::types::{SanitizedQuery, TranslationSource};
use vistat_core::{schema, SqlTranslator, VistatError};

use crate::client::DeepSeekClient;
use crate::types::{ChatMessage, ChatRequest};

/// Fixed system instruction. `{schema}` and `{examples}` are substituted
/// once, at construction.
const SYSTEM_PROMPT: &str = "\
Ты — SQL-генератор для базы PostgreSQL со статистикой видео.
Твоя единственная задача — преобразовывать вопросы на русском языке в SQL-запросы.

ПРАВИЛА:
1. Возвращай ТОЛЬКО чистый SQL-код, без объяснений, без маркеров ```sql
2. Используй только SELECT-запросы
3. Все строковые значения в SQL оборачивай в одинарные кавычки
4. Для дат используй формат 'YYYY-MM-DD' и функцию DATE(column)
5. Если вопрос не о статистике видео — верни пустую строку

Схема БД:
{schema}

Примеры вопросов и ответов:
{examples}";

static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)```sql\n?").expect("fence regex must compile"));

/// The generative translation strategy.
pub struct DeepSeekTranslator {
    client: DeepSeekClient,
    system_prompt: String,
    model: String,
    max_tokens: u32,
    timeout: Duration,
}

impl DeepSeekTranslator {
    /// Builds the translator when an API key is configured.
    ///
    /// Key resolution: `deepseek.api_key` in config, then the
    /// `DEEPSEEK_API_KEY` environment variable. `Ok(None)` means no key is
    /// available -- a normal configuration in which the pipeline runs with
    /// rule-based translation only, not an error.
    pub fn from_config(config: &DeepSeekConfig) -> Result<Option<Self>, VistatError> {
        let Some(api_key) = resolve_api_key(config.api_key.as_deref()) else {
            return Ok(None);
        };

        let timeout = Duration::from_secs(config.timeout_secs);
        let client = DeepSeekClient::new(&api_key, timeout)?;

        info!(model = config.model, "DeepSeek translator initialized");

        Ok(Some(Self {
            client,
            system_prompt: build_system_prompt(schema::DESCRIPTOR, schema::FEW_SHOT),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            timeout,
        }))
    }

    /// Creates a translator with an existing client (for testing).
    #[cfg(test)]
    fn with_client(client: DeepSeekClient, timeout: Duration) -> Self {
        Self {
            client,
            system_prompt: build_system_prompt(schema::DESCRIPTOR, schema::FEW_SHOT),
            model: "deepseek-chat".into(),
            max_tokens: 500,
            timeout,
        }
    }

    fn build_request(&self, question: &str) -> ChatRequest {
        let user_prompt = format!(
            "Вопрос: {question}\n\n\
             Важно:\n\
             - Если вопрос не о статистике видео → верни пустую строку\n\
             - Верни ТОЛЬКО SQL, без лишних символов\n\
             - Только SELECT-запросы"
        );
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(self.system_prompt.clone()),
                ChatMessage::user(user_prompt),
            ],
            temperature: 0.1,
            max_tokens: self.max_tokens,
        }
    }
}

#[async_trait]
impl SqlTranslator for DeepSeekTranslator {
    fn source(&self) -> TranslationSource {
        TranslationSource::Generative
    }

    async fn translate(&self, query: &SanitizedQuery) -> Option<String> {
        let request = self.build_request(query.text());

        let response = match tokio::time::timeout(self.timeout, self.client.complete(&request)).await
        {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                warn!(error = %e, "generative translation failed");
                return None;
            }
            Err(_) => {
                warn!(timeout = ?self.timeout, "generative translation timed out");
                return None;
            }
        };

        let content = response.first_content()?;
        let sql = extract_sql(content);
        if sql.is_none() && !content.trim().is_empty() {
            warn!("generative output was not a SELECT statement");
        }
        sql
    }
}

fn resolve_api_key(configured: Option<&str>) -> Option<String> {
    if let Some(key) = configured
        && !key.is_empty()
    {
        return Some(key.to_string());
    }
    std::env::var("DEEPSEEK_API_KEY").ok().filter(|k| !k.is_empty())
}

fn build_system_prompt(schema_text: &str, examples: &str) -> String {
    SYSTEM_PROMPT
        .replace("{schema}", schema_text)
        .replace("{examples}", examples)
}

/// Strips code-fence markup and accepts only statements that begin with
/// SELECT (case-insensitive). Everything else -- empty output for
/// off-domain questions, explanatory prose, non-SELECT statements -- is
/// "no result".
fn extract_sql(content: &str) -> Option<String> {
    let without_fences = FENCE_RE.replace_all(content, "");
    let sql = without_fences.replace("```", "").trim().to_string();
    if sql.to_uppercase().starts_with("SELECT") {
        Some(sql)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // --- extract_sql ---

    #[test]
    fn extract_plain_select() {
        assert_eq!(
            extract_sql("SELECT COUNT(*) FROM videos").as_deref(),
            Some("SELECT COUNT(*) FROM videos")
        );
    }

    #[test]
    fn extract_strips_code_fences() {
        let fenced = "```sql\nSELECT COUNT(*) FROM videos\n```";
        assert_eq!(extract_sql(fenced).as_deref(), Some("SELECT COUNT(*) FROM videos"));

        let bare_fence = "```\nselect 1\n```";
        assert_eq!(extract_sql(bare_fence).as_deref(), Some("select 1"));
    }

    #[test]
    fn extract_rejects_empty_and_prose() {
        assert_eq!(extract_sql(""), None);
        assert_eq!(extract_sql("   "), None);
        assert_eq!(extract_sql("Этот вопрос не о статистике видео."), None);
    }

    #[test]
    fn extract_rejects_non_select_statements() {
        assert_eq!(extract_sql("DROP TABLE videos"), None);
        assert_eq!(extract_sql("UPDATE videos SET views_count = 0"), None);
    }

    // --- prompt assembly ---

    #[test]
    fn system_prompt_embeds_schema_and_examples() {
        let prompt = build_system_prompt(schema::DESCRIPTOR, schema::FEW_SHOT);
        assert!(prompt.contains("Таблица videos"));
        assert!(prompt.contains("video_snapshots"));
        assert!(prompt.contains("SELECT COUNT(DISTINCT video_id)"));
        assert!(!prompt.contains("{schema}"));
        assert!(!prompt.contains("{examples}"));
    }

    #[test]
    fn api_key_resolution_prefers_config() {
        assert_eq!(
            resolve_api_key(Some("from-config")).as_deref(),
            Some("from-config")
        );
    }

    // --- translate against a mock server ---

    async fn test_translator(server: &MockServer) -> DeepSeekTranslator {
        let client = DeepSeekClient::new("test-key", Duration::from_secs(2))
            .unwrap()
            .with_base_url(server.uri());
        DeepSeekTranslator::with_client(client, Duration::from_secs(2))
    }

    fn chat_body(content: &str) -> serde_json::Value {
        serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": content}}]
        })
    }

    fn question() -> SanitizedQuery {
        SanitizedQuery::new(19, "сколько всего видео".into())
    }

    #[tokio::test]
    async fn translate_returns_fenced_select() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(chat_body("```sql\nSELECT COUNT(*) FROM videos\n```")),
            )
            .mount(&server)
            .await;

        let translator = test_translator(&server).await;
        assert_eq!(
            translator.translate(&question()).await.as_deref(),
            Some("SELECT COUNT(*) FROM videos")
        );
        assert_eq!(translator.source(), TranslationSource::Generative);
    }

    #[tokio::test]
    async fn translate_maps_off_domain_empty_string_to_none() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_body("")))
            .mount(&server)
            .await;

        let translator = test_translator(&server).await;
        assert_eq!(translator.translate(&question()).await, None);
    }

    #[tokio::test]
    async fn translate_maps_http_error_to_none() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let translator = test_translator(&server).await;
        assert_eq!(translator.translate(&question()).await, None);
    }

    #[tokio::test]
    async fn translate_maps_timeout_to_none() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(chat_body("SELECT 1"))
                    .set_delay(Duration::from_secs(10)),
            )
            .mount(&server)
            .await;

        let client = DeepSeekClient::new("test-key", Duration::from_secs(30))
            .unwrap()
            .with_base_url(server.uri());
        let translator = DeepSeekTranslator::with_client(client, Duration::from_millis(100));
        assert_eq!(translator.translate(&question()).await, None);
    }

    #[tokio::test]
    async fn translate_maps_non_select_output_to_none() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(chat_body("DROP TABLE videos")),
            )
            .mount(&server)
            .await;

        let translator = test_translator(&server).await;
        assert_eq!(translator.translate(&question()).await, None);
    }
}
