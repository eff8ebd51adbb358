// Centralized configuration management for the link guard service
// Load ALL env vars ONCE at startup

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::services::check_url::CheckUrlCacheConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

const DEFAULT_LOG_FILTER: &str = "link_guard_core=debug,tower_http=info";

/// Global application configuration loaded once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    // For tests, load .env file first
    #[cfg(test)]
    dotenv::dotenv().ok();

    AppConfig::from_env().expect("Failed to load configuration")
});

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub cors_allowed_origins: Vec<String>,
    pub max_url_length: usize,

    // Nested configs
    pub server: ServerConfig,
    pub reference_data: ReferenceDataConfig,
    pub check_url: CheckUrlConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    /// Tracing filter directives, `RUST_LOG` syntax
    pub rust_log: String,
}

/// Locations of the trusted/scam domain datasets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceDataConfig {
    pub trusted_domains_path: PathBuf,
    pub scam_domains_path: PathBuf,
}

/// Check-url verdict cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckUrlConfig {
    pub cache_ttl_seconds: u64,
    pub cache_max_entries: usize,
}

impl CheckUrlConfig {
    pub fn cache_config(&self) -> CheckUrlCacheConfig {
        CheckUrlCacheConfig {
            ttl: Duration::from_secs(self.cache_ttl_seconds),
            max_entries: self.cache_max_entries,
        }
    }
}

/// Environment type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl From<String> for Environment {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            cors_allowed_origins: vec!["*".to_string()],
            max_url_length: 2048,
            server: ServerConfig {
                bind_address: "0.0.0.0:8080".to_string(),
                rust_log: DEFAULT_LOG_FILTER.to_string(),
            },
            reference_data: ReferenceDataConfig {
                trusted_domains_path: PathBuf::from("data/trusted-domains.json"),
                scam_domains_path: PathBuf::from("data/scam-domains.json"),
            },
            check_url: CheckUrlConfig {
                cache_ttl_seconds: 3600,
                cache_max_entries: 10_000,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Helper function to get optional env var with default
        let get_or_default = |key: &str, default: &str| -> String {
            env::var(key).unwrap_or_else(|_| default.to_string())
        };

        let parse_u64_or_default = |key: &str, default: &str| -> Result<u64, ConfigError> {
            get_or_default(key, default).parse().map_err(|_| {
                ConfigError::InvalidValue(key.to_string(), "not a valid u64".to_string())
            })
        };

        let parse_usize_or_default = |key: &str, default: &str| -> Result<usize, ConfigError> {
            get_or_default(key, default).parse().map_err(|_| {
                ConfigError::InvalidValue(key.to_string(), "not a valid usize".to_string())
            })
        };

        // Bind address must carry a port
        let bind_address = get_or_default("BIND_ADDRESS", "0.0.0.0:8080");
        let has_port = bind_address
            .rsplit_once(':')
            .map(|(_, port)| port.parse::<u16>().is_ok())
            .unwrap_or(false);
        if !has_port {
            return Err(ConfigError::InvalidValue(
                "BIND_ADDRESS".to_string(),
                format!("missing or invalid port in '{}'", bind_address),
            ));
        }

        let environment = Environment::from(get_or_default("ENVIRONMENT", "development"));
        let rust_log = get_or_default("RUST_LOG", DEFAULT_LOG_FILTER);

        let cors_allowed_origins: Vec<String> = get_or_default("CORS_ALLOWED_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_url_length = parse_usize_or_default("MAX_URL_LENGTH", "2048")?;
        if max_url_length == 0 {
            return Err(ConfigError::InvalidValue(
                "MAX_URL_LENGTH".to_string(),
                "must be greater than zero".to_string(),
            ));
        }

        let trusted_domains_path =
            PathBuf::from(get_or_default("TRUSTED_DOMAINS_PATH", "data/trusted-domains.json"));
        let scam_domains_path =
            PathBuf::from(get_or_default("SCAM_DOMAINS_PATH", "data/scam-domains.json"));

        let cache_ttl_seconds = parse_u64_or_default("CHECK_URL_CACHE_TTL_SECONDS", "3600")?;
        let cache_max_entries = parse_usize_or_default("CHECK_URL_CACHE_MAX_ENTRIES", "10000")?;

        Ok(Self {
            environment,
            cors_allowed_origins,
            max_url_length,
            server: ServerConfig {
                bind_address,
                rust_log,
            },
            reference_data: ReferenceDataConfig {
                trusted_domains_path,
                scam_domains_path,
            },
            check_url: CheckUrlConfig {
                cache_ttl_seconds,
                cache_max_entries,
            },
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

/// Get the global configuration instance
/// This is the primary way to access configuration throughout the app
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "BIND_ADDRESS",
        "RUST_LOG",
        "ENVIRONMENT",
        "MAX_URL_LENGTH",
        "TRUSTED_DOMAINS_PATH",
        "CHECK_URL_CACHE_TTL_SECONDS",
        "CHECK_URL_CACHE_MAX_ENTRIES",
        "CORS_ALLOWED_ORIGINS",
    ];

    fn clear_vars() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from("development".to_string()),
            Environment::Development
        );
        assert_eq!(
            Environment::from("prod".to_string()),
            Environment::Production
        );
        assert_eq!(Environment::from("test".to_string()), Environment::Test);
        assert_eq!(
            Environment::from("staging".to_string()),
            Environment::Staging
        );
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_vars();

        let config = AppConfig::from_env().expect("Failed to load default config");
        assert_eq!(config.server.bind_address, "0.0.0.0:8080");
        assert_eq!(config.server.rust_log, DEFAULT_LOG_FILTER);
        assert_eq!(config.max_url_length, 2048);
        assert_eq!(config.check_url.cache_ttl_seconds, 3600);
        assert_eq!(
            config.reference_data.trusted_domains_path,
            PathBuf::from("data/trusted-domains.json")
        );
        assert_eq!(config.cors_allowed_origins, vec!["*"]);
    }

    #[test]
    #[serial]
    fn test_config_with_env() {
        clear_vars();
        env::set_var("BIND_ADDRESS", "127.0.0.1:9090");
        env::set_var("ENVIRONMENT", "production");
        env::set_var("RUST_LOG", "warn");
        env::set_var("TRUSTED_DOMAINS_PATH", "/etc/link-guard/trusted.json");
        env::set_var("CHECK_URL_CACHE_TTL_SECONDS", "0");
        env::set_var("CORS_ALLOWED_ORIGINS", "https://a.example, https://b.example");

        let config = AppConfig::from_env().expect("Failed to load test config");
        assert_eq!(config.server.bind_address, "127.0.0.1:9090");
        assert_eq!(config.server.rust_log, "warn");
        assert!(config.is_production());
        assert_eq!(
            config.reference_data.trusted_domains_path,
            PathBuf::from("/etc/link-guard/trusted.json")
        );
        assert!(config.check_url.cache_config().ttl.is_zero());
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );

        clear_vars();
    }

    #[test]
    #[serial]
    fn test_invalid_number_is_rejected() {
        clear_vars();
        env::set_var("CHECK_URL_CACHE_MAX_ENTRIES", "lots");

        let err = AppConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(key, _) if key == "CHECK_URL_CACHE_MAX_ENTRIES"));

        clear_vars();
    }

    #[test]
    #[serial]
    fn test_bind_address_without_port_is_rejected() {
        clear_vars();
        env::set_var("BIND_ADDRESS", "0.0.0.0");

        let err = AppConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(key, _) if key == "BIND_ADDRESS"));

        clear_vars();
    }

    #[test]
    #[serial]
    fn test_zero_max_url_length_is_rejected() {
        clear_vars();
        env::set_var("MAX_URL_LENGTH", "0");

        assert!(AppConfig::from_env().is_err());

        clear_vars();
    }
}
