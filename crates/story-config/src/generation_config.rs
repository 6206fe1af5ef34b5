use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_IMAGE_URL_TEMPLATE, DEFAULT_MAX_STORIES,
    DEFAULT_MIN_STORIES, IMAGE_URL_SEED_PLACEHOLDER, MAX_STORIES_LIMIT,
};

use serde::Deserialize;

/// Placeholder story synthesis for users that arrive without stories.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub min_stories: u32,
    pub max_stories: u32,
    /// Must contain `{seed}`.
    pub image_url_template: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            min_stories: DEFAULT_MIN_STORIES,
            max_stories: DEFAULT_MAX_STORIES,
            image_url_template: String::from(DEFAULT_IMAGE_URL_TEMPLATE),
        }
    }
}

impl GenerationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.min_stories == 0 {
            return Err(ConfigError::generation("min_stories must be at least 1"));
        }

        if self.min_stories > self.max_stories {
            return Err(ConfigError::generation(format!(
                "min_stories ({}) must not exceed max_stories ({})",
                self.min_stories, self.max_stories
            )));
        }

        if self.max_stories > MAX_STORIES_LIMIT {
            return Err(ConfigError::generation(format!(
                "max_stories must be at most {}, got {}",
                MAX_STORIES_LIMIT, self.max_stories
            )));
        }

        if !self.image_url_template.contains(IMAGE_URL_SEED_PLACEHOLDER) {
            return Err(ConfigError::generation(format!(
                "image_url_template must contain {}",
                IMAGE_URL_SEED_PLACEHOLDER
            )));
        }

        Ok(())
    }
}
