// SPDX-FileCopyrightText: 2026 Vistat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./vistat.toml` > `~/.config/vistat/vistat.toml`
//! > `/etc/vistat/vistat.toml`, with environment variable overrides via the
//! `VISTAT_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::VistatConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/vistat/vistat.toml` (system-wide)
/// 3. `~/.config/vistat/vistat.toml` (user XDG config)
/// 4. `./vistat.toml` (local directory)
/// 5. `VISTAT_*` environment variables
pub fn load_config() -> Result<VistatConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VistatConfig::default()))
        .merge(Toml::file("/etc/vistat/vistat.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("vistat/vistat.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("vistat.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<VistatConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VistatConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<VistatConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VistatConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so key names that
/// themselves contain underscores stay intact: `VISTAT_TELEGRAM_BOT_TOKEN`
/// must map to `telegram.bot_token`, not `telegram.bot.token`.
fn env_provider() -> Env {
    Env::prefixed("VISTAT_").map(|key| {
        // `key` is the lowercased env var name with the prefix stripped,
        // e.g. VISTAT_DATABASE_MAX_CONNECTIONS -> "database_max_connections".
        let mapped = key
            .as_str()
            .replacen("agent_", "agent.", 1)
            .replacen("telegram_", "telegram.", 1)
            .replacen("deepseek_", "deepseek.", 1)
            .replacen("database_", "database.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_extract_cleanly() {
        let config = load_config_from_str("").expect("empty TOML should use defaults");
        assert_eq!(config.agent.name, "vistat");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.deepseek.timeout_secs, 30);
    }

    #[test]
    fn env_mapping_preserves_underscored_keys() {
        // Verified through the Figment jail so real process env stays clean.
        figment::Jail::expect_with(|jail| {
            jail.set_env("VISTAT_TELEGRAM_BOT_TOKEN", "123:ABC");
            jail.set_env("VISTAT_DATABASE_MAX_CONNECTIONS", "9");

            let config: VistatConfig = Figment::new()
                .merge(Serialized::defaults(VistatConfig::default()))
                .merge(env_provider())
                .extract()?;

            assert_eq!(config.telegram.bot_token.as_deref(), Some("123:ABC"));
            assert_eq!(config.database.max_connections, 9);
            Ok(())
        });
    }
}
