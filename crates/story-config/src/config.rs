use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, DatasetConfig, GenerationConfig, LoggingConfig, ViewerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub dataset: DatasetConfig,
    pub logging: LoggingConfig,
    pub generation: GenerationConfig,
    pub viewer: ViewerConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for STORIES_CONFIG_DIR env var, else use ./.stories/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply STORIES_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_from(&config_dir)
    }

    /// Same as [`Config::load`] with an explicit config directory.
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.to_path_buf(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: STORIES_CONFIG_DIR env var > ./.stories/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.generation.validate()?;
        self.viewer.validate()?;

        let db_path = Path::new(&self.database.path);
        if self.database.path.is_empty() {
            return Err(ConfigError::database("database.path must not be empty"));
        }
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        if self.dataset.path.is_empty() {
            return Err(ConfigError::dataset("dataset.path must not be empty"));
        }

        Ok(())
    }

    /// Absolute path to the database file.
    pub fn database_path(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(&self.database.path)
    }

    /// Dataset path; relative paths resolve against the config dir.
    pub fn dataset_path(&self, config_dir: &Path) -> PathBuf {
        let path = Path::new(&self.dataset.path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            config_dir.join(path)
        }
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  database: {}", self.database.path);
        info!("  dataset: {}", self.dataset.path);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  generation: {}..={} stories, template={}",
            self.generation.min_stories,
            self.generation.max_stories,
            self.generation.image_url_template
        );
        info!(
            "  viewer: story={}ms, tick={}ms, drag>={}",
            self.viewer.story_duration_ms,
            self.viewer.tick_interval_ms,
            self.viewer.drag_min_distance
        );
    }

    fn apply_env_overrides(&mut self) {
        // Database
        Self::apply_env_string("STORIES_DATABASE_PATH", &mut self.database.path);

        // Dataset
        Self::apply_env_string("STORIES_DATASET_PATH", &mut self.dataset.path);

        // Logging
        Self::apply_env_parse("STORIES_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("STORIES_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("STORIES_LOG_FILE", &mut self.logging.file);

        // Generation
        Self::apply_env_parse("STORIES_MIN_STORIES", &mut self.generation.min_stories);
        Self::apply_env_parse("STORIES_MAX_STORIES", &mut self.generation.max_stories);
        Self::apply_env_string(
            "STORIES_IMAGE_URL_TEMPLATE",
            &mut self.generation.image_url_template,
        );

        // Viewer
        Self::apply_env_parse(
            "STORIES_STORY_DURATION_MS",
            &mut self.viewer.story_duration_ms,
        );
        Self::apply_env_parse("STORIES_TICK_INTERVAL_MS", &mut self.viewer.tick_interval_ms);
        Self::apply_env_parse(
            "STORIES_DRAG_MIN_DISTANCE",
            &mut self.viewer.drag_min_distance,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
