//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Application Identity ===
    /// Reported application version (APP_VERSION).
    #[serde(default = "default_version")]
    pub app_version: String,

    /// Deployment environment name (ENVIRONMENT). The value `test`
    /// suppresses binding a listening socket so the service can be
    /// exercised in-process.
    #[serde(default = "default_environment")]
    pub environment: String,

    // === Server Configuration ===
    /// HTTP listening port (PORT).
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.app_version.is_empty() {
            return Err("APP_VERSION must not be empty".to_string());
        }

        if self.environment.is_empty() {
            return Err("ENVIRONMENT must not be empty".to_string());
        }

        if self.port == 0 {
            return Err("PORT must be non-zero".to_string());
        }

        Ok(())
    }

    /// Whether the service runs in test mode (no listening socket).
    pub fn is_test(&self) -> bool {
        self.environment == "test"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_version: default_version(),
            environment: default_environment(),
            port: default_port(),
            rust_log: default_log_level(),
            verbose: false,
        }
    }
}
