//! API configuration

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use core_kernel::CoreError;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// JWT secret for authentication
    pub jwt_secret: String,
    /// JWT expiration in seconds
    pub jwt_expiration_secs: u64,
    /// Directory holding the persisted claim collection
    pub storage_dir: PathBuf,
    /// Simulated decision latency in milliseconds
    pub decision_delay_ms: u64,
    /// Log level
    pub log_level: String,
    /// Display name of the desk agent when the token carries none
    pub agent_name: String,
    /// Role shown on the agent profile
    pub agent_role: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            jwt_secret: "change-me-in-production".to_string(),
            jwt_expiration_secs: 3600,
            storage_dir: PathBuf::from("./data"),
            decision_delay_ms: 2000,
            log_level: "info".to_string(),
            agent_name: "Claims Agent".to_string(),
            agent_role: "Claims Adjuster".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables
    ///
    /// Unset variables keep their default value.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", defaults.port)?
            .set_default("jwt_secret", defaults.jwt_secret)?
            .set_default("jwt_expiration_secs", defaults.jwt_expiration_secs)?
            .set_default("storage_dir", defaults.storage_dir.to_string_lossy().into_owned())?
            .set_default("decision_delay_ms", defaults.decision_delay_ms)?
            .set_default("log_level", defaults.log_level)?
            .set_default("agent_name", defaults.agent_name)?
            .set_default("agent_role", defaults.agent_role)?
            .add_source(config::Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn decision_delay(&self) -> Duration {
        Duration::from_millis(self.decision_delay_ms)
    }

    /// Rejects settings the server cannot run with
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.jwt_secret.is_empty() {
            return Err(CoreError::Configuration("jwt_secret must be set".to_string()));
        }
        if self.jwt_expiration_secs == 0 {
            return Err(CoreError::Configuration(
                "jwt_expiration_secs must be positive".to_string(),
            ));
        }
        if self.agent_name.trim().is_empty() {
            return Err(CoreError::Configuration("agent_name must not be blank".to_string()));
        }
        Ok(())
    }
}
