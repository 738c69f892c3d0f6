//! # Settings
//!
//! Layered runtime configuration.
//!
//! Settings are read from `config/default.toml` (optional) and then
//! overridden by environment variables prefixed with `CRAFT_QUOTE`, using
//! `__` as the section separator. Example: `CRAFT_QUOTE__SERVER__PORT=8080`.

use crate::application::engine::EngineConfig;
use serde::Deserialize;
use thiserror::Error;

/// Error loading or deserializing settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Underlying configuration source error.
    #[error("settings error: {0}")]
    Source(#[from] config::ConfigError),
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// SMTP relay settings for the submission gateway.
///
/// When absent, the service falls back to the in-memory gateway.
#[derive(Debug, Clone, Deserialize)]
pub struct SmtpSettings {
    /// Relay hostname.
    pub host: String,
    /// Relay port.
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    /// Relay username.
    pub username: String,
    /// Relay password.
    pub password: String,
    /// Sender address.
    pub sender: String,
    /// Notification recipient address.
    pub recipient: String,
}

fn default_smtp_port() -> u16 {
    587
}

/// Top-level service settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// HTTP server settings.
    pub server: ServerSettings,
    /// SMTP settings; in-memory gateway is used when absent.
    pub smtp: Option<SmtpSettings>,
    /// Quote engine behaviour.
    pub engine: EngineConfig,
    /// Optional path to a catalog file; the built-in catalog is used when
    /// absent.
    pub catalog_path: Option<String>,
}

impl Settings {
    /// Loads settings from `config/default.toml` and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when a source cannot be read or a value
    /// fails to deserialize.
    pub fn load() -> Result<Self, SettingsError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(
                config::Environment::with_prefix("CRAFT_QUOTE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::engine::DetailsGating;
    use crate::domain::value_objects::RoundingMode;

    #[test]
    fn defaults_are_sensible() {
        let settings = Settings::default();
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8080);
        assert!(settings.smtp.is_none());
        assert!(settings.catalog_path.is_none());
        assert_eq!(settings.engine.rounding, RoundingMode::HalfAwayFromZero);
        assert_eq!(settings.engine.details_gating, DetailsGating::Unconditional);
    }

    #[test]
    fn engine_config_deserializes_from_kebab_case() {
        let toml = r#"
            rounding = "half-even"
            details-gating = "at-least-two"
        "#;
        let config: EngineConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.rounding, RoundingMode::HalfEven);
        assert_eq!(config.details_gating, DetailsGating::AtLeastTwo);
    }
}
