use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_RUST_LOG: &str = "tedx_site=debug,tower_http=debug";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_API_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_SITE_URL: &str = "https://tedxmaitama.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Source(#[from] config::ConfigError),
    #[error("invalid configuration value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

// Top-level container for every setting
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub api: ApiConfig,
    pub site: SiteConfig,
}

// Server settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Upstream REST API
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_seconds: u64,
}

// Public site settings
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    pub url: String,
}

/// Flat view of the environment, one field per variable.
#[derive(Debug, Deserialize)]
struct EnvSettings {
    host: String,
    port: u16,
    environment: String,
    rust_log: String,
    api_base_url: String,
    api_key: String,
    api_timeout_seconds: u64,
    site_url: String,
}

impl Config {
    /// Reads `HOST`, `PORT`, `ENVIRONMENT`, `RUST_LOG`, `API_BASE_URL`,
    /// `API_KEY`, `API_TIMEOUT_SECONDS` and `SITE_URL`, falling back to the
    /// defaults above.
    pub fn from_env() -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("environment", DEFAULT_ENVIRONMENT)?
            .set_default("rust_log", DEFAULT_RUST_LOG)?
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .set_default("api_key", "")?
            .set_default("api_timeout_seconds", DEFAULT_API_TIMEOUT_SECONDS)?
            .set_default("site_url", DEFAULT_SITE_URL)?
            .add_source(config::Environment::default().try_parsing(true))
            .build()?;

        let env: EnvSettings = settings.try_deserialize()?;
        Self::from_settings(env)
    }

    fn from_settings(env: EnvSettings) -> Result<Self, ConfigError> {
        if env.api_base_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "API_BASE_URL",
                reason: "must not be empty".to_string(),
            });
        }
        if env.api_timeout_seconds == 0 {
            return Err(ConfigError::Invalid {
                key: "API_TIMEOUT_SECONDS",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(Config {
            app: AppConfig {
                host: env.host,
                port: env.port,
                environment: env.environment,
                rust_log: env.rust_log,
            },
            api: ApiConfig {
                base_url: env.api_base_url.trim_end_matches('/').to_string(),
                api_key: env.api_key,
                timeout_seconds: env.api_timeout_seconds,
            },
            site: SiteConfig {
                url: env.site_url.trim_end_matches('/').to_string(),
            },
        })
    }

    /// Default settings pointed at a specific API; used by tests and local tooling.
    pub fn with_api_base_url(base_url: &str) -> Self {
        Config {
            app: AppConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
                environment: DEFAULT_ENVIRONMENT.to_string(),
                rust_log: DEFAULT_RUST_LOG.to_string(),
            },
            api: ApiConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                api_key: String::new(),
                timeout_seconds: DEFAULT_API_TIMEOUT_SECONDS,
            },
            site: SiteConfig {
                url: DEFAULT_SITE_URL.to_string(),
            },
        }
    }
}

impl ApiConfig {
    /// API origin without the `/api` suffix; uploads are served from there.
    pub fn asset_origin(&self) -> &str {
        let base = self.base_url.trim_end_matches('/');
        base.strip_suffix("/api").unwrap_or(base)
    }
}
