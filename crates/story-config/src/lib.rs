mod config;
mod database_config;
mod dataset_config;
mod error;
mod generation_config;
mod log_level;
mod logging_config;
mod viewer_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use dataset_config::DatasetConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use generation_config::GenerationConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use viewer_config::ViewerConfig;

const CONFIG_DIR_ENV: &str = "STORIES_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".stories";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_DATABASE_FILENAME: &str = "stories.db";
const DEFAULT_DATASET_FILENAME: &str = "users.json";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

pub const DEFAULT_MIN_STORIES: u32 = 2;
pub const DEFAULT_MAX_STORIES: u32 = 4;
pub const MAX_STORIES_LIMIT: u32 = 100;
pub const DEFAULT_IMAGE_URL_TEMPLATE: &str = "https://picsum.photos/seed/{seed}/200/300";
pub const IMAGE_URL_SEED_PLACEHOLDER: &str = "{seed}";

pub const DEFAULT_STORY_DURATION_MS: u64 = 5_000;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;
pub const DEFAULT_DRAG_MIN_DISTANCE: f64 = 20.0;
