// SPDX-FileCopyrightText: 2026 Vistat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so unrecognized keys are
//! rejected at startup with an actionable message. The deny/allow word
//! lists and the schema text are compiled-in constants, deliberately NOT
//! configurable here.

use serde::{Deserialize, Serialize};

/// Top-level Vistat configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values; only `telegram.bot_token` is required to actually serve.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VistatConfig {
    /// Process identity and logging.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Telegram bot integration settings.
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// DeepSeek API settings (generative translation).
    #[serde(default)]
    pub deepseek: DeepSeekConfig,

    /// PostgreSQL connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Process identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the bot process.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "vistat".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Telegram bot integration configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TelegramConfig {
    /// Telegram Bot API token. `None` means the channel cannot start.
    #[serde(default)]
    pub bot_token: Option<String>,
}

/// DeepSeek API configuration.
///
/// `api_key = None` (and no `DEEPSEEK_API_KEY` in the environment) disables
/// generative translation entirely; the pipeline then runs rule-based only.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DeepSeekConfig {
    /// DeepSeek API key. Falls back to the `DEEPSEEK_API_KEY` env var.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier for SQL generation.
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum tokens to generate per response.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Deadline for one generation call, in seconds.
    #[serde(default = "default_api_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for DeepSeekConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_api_timeout_secs(),
        }
    }
}

fn default_model() -> String {
    "deepseek-chat".to_string()
}

fn default_max_tokens() -> u32 {
    500
}

fn default_api_timeout_secs() -> u64 {
    30
}

/// PostgreSQL connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Database host.
    #[serde(default = "default_db_host")]
    pub host: String,

    /// Database port.
    #[serde(default = "default_db_port")]
    pub port: u16,

    /// Database user.
    #[serde(default = "default_db_user")]
    pub user: String,

    /// Database password.
    #[serde(default = "default_db_password")]
    pub password: String,

    /// Database name.
    #[serde(default = "default_db_name")]
    pub dbname: String,

    /// Maximum pool size.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Deadline for one scalar query, in seconds.
    #[serde(default = "default_query_timeout_secs")]
    pub query_timeout_secs: u64,

    /// Bootstrap readiness probe attempts.
    #[serde(default = "default_startup_attempts")]
    pub startup_attempts: u32,

    /// Pause between readiness probes, in seconds.
    #[serde(default = "default_startup_retry_secs")]
    pub startup_retry_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_db_host(),
            port: default_db_port(),
            user: default_db_user(),
            password: default_db_password(),
            dbname: default_db_name(),
            max_connections: default_max_connections(),
            query_timeout_secs: default_query_timeout_secs(),
            startup_attempts: default_startup_attempts(),
            startup_retry_secs: default_startup_retry_secs(),
        }
    }
}

fn default_db_host() -> String {
    "db".to_string()
}

fn default_db_port() -> u16 {
    5432
}

fn default_db_user() -> String {
    "postgres".to_string()
}

fn default_db_password() -> String {
    "password".to_string()
}

fn default_db_name() -> String {
    "video_stats".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_query_timeout_secs() -> u64 {
    10
}

fn default_startup_attempts() -> u32 {
    30
}

fn default_startup_retry_secs() -> u64 {
    2
}
