//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and applies environment
//! variable overrides on top. The file is optional: containers are usually
//! configured through the environment alone, so a missing file means pure
//! defaults with `PORT` and `APP_ENV` still taking effect. Also defines
//! constants for the application identity, cache policy, default paths, and
//! logging. `AppConfig` is the root configuration struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Application Identity
// =============================================================================

/// Display name reported by the API descriptor
pub const APP_NAME: &str = "Gangway Demo App";

/// Crate version, reported by the root and descriptor endpoints
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// One-line description reported by the API descriptor
pub const APP_DESCRIPTION: &str = "A demonstration service for validating container deployments";

/// Welcome line for the root endpoint (compile-time string concatenation)
pub const WELCOME_MESSAGE: &str = formatcp!("Welcome to {}!", APP_NAME);

/// Runtime version string reported by the health endpoint
pub const RUNTIME_VERSION: &str = formatcp!("rust/{}", env!("CARGO_PKG_RUST_VERSION"));

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// Orchestrator probes and deployment smoke tests must observe the live
// process on every request, so nothing this service returns may be cached.

pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Default Paths and Environment Variables
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default bind address (all interfaces, for container networking)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Default environment name when APP_ENV is not set
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Environment variable overriding the listen port
pub const PORT_ENV_VAR: &str = "PORT";

/// Environment variable naming the deployment environment
pub const ENVIRONMENT_ENV_VAR: &str = "APP_ENV";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "gangway=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Log format value selecting structured JSON output
pub const LOG_FORMAT_JSON: &str = "json";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Application settings
    #[serde(default)]
    pub app: AppSettings,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }
}

/// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    /// Deployment environment name reported by the root endpoint
    #[serde(default = "AppSettings::default_environment")]
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            environment: Self::default_environment(),
        }
    }
}

impl AppSettings {
    fn default_environment() -> String {
        DEFAULT_ENVIRONMENT.to_string()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    /// Load configuration from a TOML file, then apply environment overrides.
    ///
    /// A missing file is not an error; defaults apply. `PORT` and `APP_ENV`
    /// override whatever the file (or the defaults) provided.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut config = match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(ConfigError::Io(e)),
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(port) = std::env::var(PORT_ENV_VAR) {
            self.http.port = port.parse().map_err(|_| {
                ConfigError::Validation(format!(
                    "{PORT_ENV_VAR} must be a port number, got '{port}'"
                ))
            })?;
        }
        if let Ok(environment) = std::env::var(ENVIRONMENT_ENV_VAR) {
            self.app.environment = environment;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    // These tests mutate process-wide environment variables; serialize them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        std::env::remove_var(PORT_ENV_VAR);
        std::env::remove_var(ENVIRONMENT_ENV_VAR);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        let config = AppConfig::load("does/not/exist.toml").unwrap();
        assert_eq!(config.http.host, DEFAULT_HOST);
        assert_eq!(config.http.port, DEFAULT_PORT);
        assert_eq!(config.app.environment, DEFAULT_ENVIRONMENT);
        assert_eq!(config.logging.format, DEFAULT_LOG_FORMAT);
    }

    #[test]
    fn test_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[http]\nhost = \"127.0.0.1\"\nport = 8080\n\n[app]\nenvironment = \"staging\""
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.app.environment, "staging");
        // Section absent from the file falls back to its default
        assert_eq!(config.logging.format, DEFAULT_LOG_FORMAT);
    }

    #[test]
    fn test_env_overrides_file_and_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http]\nport = 8080").unwrap();

        std::env::set_var(PORT_ENV_VAR, "9090");
        std::env::set_var(ENVIRONMENT_ENV_VAR, "production");
        let config = AppConfig::load(file.path());
        clear_env();

        let config = config.unwrap();
        assert_eq!(config.http.port, 9090);
        assert_eq!(config.app.environment, "production");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let _guard = ENV_LOCK.lock().unwrap();

        std::env::set_var(PORT_ENV_VAR, "not-a-port");
        let result = AppConfig::load("does/not/exist.toml");
        clear_env();

        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "http = not valid toml").unwrap();

        assert!(matches!(
            AppConfig::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
