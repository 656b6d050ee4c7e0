use std::env;
use std::time::Duration;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use pipeline::TimeoutTable;
use serde::Deserialize;

use crate::domain::auth::service::DEFAULT_REFRESH_TOKEN_TTL_DAYS;
use crate::inbound::grpc::methods;

/// Shortest accepted HS256 signing secret, in bytes.
pub const MIN_SECRET_LENGTH: usize = 32;
const MAX_ACCESS_TOKEN_TTL_MINUTES: i64 = 24 * 60;
const MAX_REFRESH_TOKEN_TTL_DAYS: i64 = 365;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub timeouts: TimeoutsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
    pub grpc_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_access_token_ttl_minutes")]
    pub access_token_ttl_minutes: i64,
    #[serde(default = "default_refresh_token_ttl_days")]
    pub refresh_token_ttl_days: i64,
}

/// Per-method deadlines. Entries override the built-in table.
#[derive(Debug, Deserialize, Clone)]
pub struct TimeoutsConfig {
    #[serde(default = "default_timeout_ms")]
    pub default_ms: u64,
    #[serde(default)]
    pub methods: Vec<MethodTimeout>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MethodTimeout {
    pub method: String,
    pub timeout_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_max_connections() -> u32 {
    5
}

fn default_access_token_ttl_minutes() -> i64 {
    15
}

fn default_refresh_token_ttl_days() -> i64 {
    DEFAULT_REFRESH_TOKEN_TTL_DAYS
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for TimeoutsConfig {
    fn default() -> Self {
        Self {
            default_ms: default_timeout_ms(),
            methods: Vec::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: default_log_format(),
        }
    }
}

impl TimeoutsConfig {
    /// Built-in per-method deadlines with configured entries layered on top.
    pub fn table(&self) -> TimeoutTable {
        self.methods.iter().fold(
            methods::builtin_timeouts(Duration::from_millis(self.default_ms)),
            |table, entry| {
                table.with_method(entry.method.clone(), Duration::from_millis(entry.timeout_ms))
            },
        )
    }
}

impl JwtConfig {
    /// Reject secrets too short for HS256 and lifetimes outside sane bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.len() < MIN_SECRET_LENGTH {
            return Err(ConfigError::Message(format!(
                "jwt.secret must be at least {} bytes",
                MIN_SECRET_LENGTH
            )));
        }
        if !(1..=MAX_ACCESS_TOKEN_TTL_MINUTES).contains(&self.access_token_ttl_minutes) {
            return Err(ConfigError::Message(format!(
                "jwt.access_token_ttl_minutes must be between 1 and {}",
                MAX_ACCESS_TOKEN_TTL_MINUTES
            )));
        }
        if !(1..=MAX_REFRESH_TOKEN_TTL_DAYS).contains(&self.refresh_token_ttl_days) {
            return Err(ConfigError::Message(format!(
                "jwt.refresh_token_ttl_days must be between 1 and {}",
                MAX_REFRESH_TOKEN_TTL_DAYS
            )));
        }
        Ok(())
    }

    pub fn access_token_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.access_token_ttl_minutes)
    }

    pub fn refresh_token_ttl(&self) -> chrono::Duration {
        chrono::Duration::days(self.refresh_token_ttl_days)
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// # Errors
    /// Returns error if values are missing, malformed or fail validation
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config: Self = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::default().separator("__"))
            .build()?
            .try_deserialize()?;

        config.jwt.validate()?;
        Ok(config)
    }
}
