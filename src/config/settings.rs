//! Application settings and configuration structures.

use chrono::Duration;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Deployment marker that unlocks destructive admin operations.
pub const DEV_PLATFORM: &str = "dev";

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port)
    pub server: ServerSettings,

    /// Database configuration (PostgreSQL)
    pub database: DatabaseSettings,

    /// JWT authentication settings
    pub jwt: JwtSettings,

    /// Polka payment provider settings
    pub polka: PolkaSettings,

    /// Static file server settings
    pub fileserver: FileServerSettings,

    /// CORS configuration
    pub cors: CorsSettings,

    /// Deployment mode marker (`dev` enables the admin reset)
    pub platform: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,
}

/// PostgreSQL database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections to maintain
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout: u64,

    /// Apply embedded migrations at startup
    pub run_migrations: bool,
}

/// JWT authentication configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    /// Secret key for signing tokens
    pub secret: String,

    /// Access token expiry in minutes
    pub access_token_expiry_minutes: i64,

    /// Refresh token expiry in days
    pub refresh_token_expiry_days: i64,
}

/// Polka webhook configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PolkaSettings {
    /// Shared API key Polka sends in `Authorization: ApiKey <key>`
    pub api_key: String,
}

/// Static file server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FileServerSettings {
    /// Directory served under `/app/`
    pub root: String,
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins (comma-separated in `APP__CORS__ALLOWED_ORIGINS`)
    pub allowed_origins: Vec<String>,
}

/// Base configuration file, loaded for every platform
const BASE_CONFIG_FILE: &str = "config/default";

/// Platform overrides file, if one applies
fn profile_file(platform: Option<&str>) -> Option<String> {
    platform
        .map(str::trim)
        .filter(|p| !p.is_empty() && *p != "default")
        .map(|p| format!("config/{}", p))
}

/// `APP__` prefixed environment variables.
///
/// `APP__SERVER__PORT=8080` sets `server.port`; `APP__CORS__ALLOWED_ORIGINS`
/// takes a comma-separated list.
fn env_source() -> Environment {
    Environment::default()
        .prefix("APP")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("cors.allowed_origins")
        .try_parsing(true)
}

/// Minimum required length for JWT secret (256 bits = 32 bytes)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. Built-in defaults
    /// 2. config/default.toml (base configuration)
    /// 3. config/{PLATFORM}.toml (platform-specific overrides)
    /// 4. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required value (database URL, platform,
    /// JWT secret, Polka key) is missing, or if the JWT secret is too short.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let platform = std::env::var("PLATFORM").ok();

        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.acquire_timeout", 30)?
            .set_default("database.run_migrations", true)?
            .set_default("jwt.access_token_expiry_minutes", 60)?
            .set_default("jwt.refresh_token_expiry_days", 60)?
            .set_default("fileserver.root", ".")?
            .set_default("cors.allowed_origins", Vec::<String>::new())?
            .add_source(File::with_name(BASE_CONFIG_FILE).required(false));

        if let Some(profile) = profile_file(platform.as_deref()) {
            builder = builder.add_source(File::with_name(&profile).required(false));
        }

        builder
            .add_source(env_source())
            .set_override_option("platform", platform)?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option(
                "database.url",
                std::env::var("DB_URL")
                    .or_else(|_| std::env::var("DATABASE_URL"))
                    .ok(),
            )?
            .set_override_option("jwt.secret", std::env::var("JWT_SECRET").ok())?
            .set_override_option("polka.api_key", std::env::var("POLKA_KEY").ok())?
            .set_override_option("fileserver.root", std::env::var("FILESERVER_ROOT").ok())?
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| settings.validate().map(|_| settings))
    }

    /// Reject settings that deserialized but are unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::Message(format!(
                "JWT secret must be at least {} characters. Current length: {}",
                MIN_JWT_SECRET_LENGTH,
                self.jwt.secret.len()
            )));
        }
        for (name, value) in [
            ("database.url", &self.database.url),
            ("platform", &self.platform),
            ("polka.api_key", &self.polka.api_key),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Message(format!("{} must be set", name)));
            }
        }
        Ok(())
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Whether the deployment is marked as a development platform.
    pub fn is_dev(&self) -> bool {
        self.platform == DEV_PLATFORM
    }
}

impl JwtSettings {
    /// Lifetime of a signed session token.
    pub fn access_token_ttl(&self) -> Duration {
        Duration::minutes(self.access_token_expiry_minutes)
    }

    /// Lifetime of an opaque refresh token.
    pub fn refresh_token_ttl(&self) -> Duration {
        Duration::days(self.refresh_token_expiry_days)
    }
}
