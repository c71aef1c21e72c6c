pub mod config;

pub use self::config::{load_config, AppConfig, DEFAULT_PRODUCTS_FILE, DEFAULT_SETTINGS_FILE};
