use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, ConfigError, Environment, File, FileFormat};
use reqwest::Url;
use serde::Deserialize;

use crate::fetch::DEFAULT_USER_AGENT;
use crate::product::DEFAULT_BASE_PRODUCT_URL;
use crate::update::CheckOptions;

pub const DEFAULT_SETTINGS_FILE: &str = "Settings.toml";
pub const DEFAULT_PRODUCTS_FILE: &str = "products.json";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub site: SiteConfig,
    pub file: FileConfig,
    pub check: CheckConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    pub base_url: String,
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileConfig {
    pub products: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckConfig {
    pub max_concurrency: usize,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    pub request_timeout_secs: Option<u64>,
}

impl AppConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.site.base_url).map_err(|e| {
            ConfigError::Message(format!("site.base_url {:?} is not a URL: {}", self.site.base_url, e))
        })?;
        if self.site.user_agent.trim().is_empty() {
            return Err(ConfigError::Message("site.user_agent must not be empty".to_string()));
        }
        if self.check.max_concurrency == 0 {
            return Err(ConfigError::Message("check.max_concurrency must be at least 1".to_string()));
        }
        if self.check.min_delay_ms > self.check.max_delay_ms {
            return Err(ConfigError::Message(
                "check.min_delay_ms must not exceed check.max_delay_ms".to_string(),
            ));
        }
        if self.check.request_timeout_secs == Some(0) {
            return Err(ConfigError::Message(
                "check.request_timeout_secs must be positive when set".to_string(),
            ));
        }
        Ok(())
    }

    pub fn check_options(&self) -> CheckOptions {
        CheckOptions {
            max_concurrency: self.check.max_concurrency,
            min_delay_ms: self.check.min_delay_ms,
            max_delay_ms: self.check.max_delay_ms,
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.check.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Loads settings from defaults, then the settings file, then `APP_*`
/// environment variables (`APP_CHECK__MAX_CONCURRENCY=2`).
///
/// An explicit `path` must exist; the default `Settings.toml` is optional.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let file = match path {
        Some(path) => File::from(path).format(FileFormat::Toml).required(true),
        None => File::new(DEFAULT_SETTINGS_FILE, FileFormat::Toml).required(false),
    };

    let settings = Config::builder()
        .set_default("site.base_url", DEFAULT_BASE_PRODUCT_URL)?
        .set_default("site.user_agent", DEFAULT_USER_AGENT)?
        .set_default("file.products", DEFAULT_PRODUCTS_FILE)?
        .set_default("check.max_concurrency", 1_i64)?
        .set_default("check.min_delay_ms", 0_i64)?
        .set_default("check.max_delay_ms", 0_i64)?
        .add_source(file)
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;
    config.validate()?;
    Ok(config)
}
