// SPDX-FileCopyrightText: 2026 Vistat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes. All failures are collected; validation does not fail fast.

use crate::diagnostic::ConfigError;
use crate::model::VistatConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
pub fn validate_config(config: &VistatConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.agent.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.log_level must be one of {}, got `{}`",
                LOG_LEVELS.join(", "),
                config.agent.log_level
            ),
        });
    }

    if let Some(token) = &config.telegram.bot_token
        && token.trim().is_empty()
    {
        errors.push(ConfigError::Validation {
            message: "telegram.bot_token must not be empty when set".to_string(),
        });
    }

    if config.database.host.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "database.host must not be empty".to_string(),
        });
    }

    if config.database.dbname.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "database.dbname must not be empty".to_string(),
        });
    }

    if config.database.max_connections == 0 {
        errors.push(ConfigError::Validation {
            message: "database.max_connections must be at least 1".to_string(),
        });
    }

    if config.database.query_timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "database.query_timeout_secs must be at least 1".to_string(),
        });
    }

    if config.deepseek.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "deepseek.timeout_secs must be at least 1".to_string(),
        });
    }

    if config.deepseek.max_tokens == 0 {
        errors.push(ConfigError::Validation {
            message: "deepseek.max_tokens must be at least 1".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
