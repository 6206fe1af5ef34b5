use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DRAG_MIN_DISTANCE, DEFAULT_STORY_DURATION_MS,
    DEFAULT_TICK_INTERVAL_MS,
};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub story_duration_ms: u64,
    pub tick_interval_ms: u64,
    pub drag_min_distance: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            story_duration_ms: DEFAULT_STORY_DURATION_MS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            drag_min_distance: DEFAULT_DRAG_MIN_DISTANCE,
        }
    }
}

impl ViewerConfig {
    pub fn story_duration(&self) -> Duration {
        Duration::from_millis(self.story_duration_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::viewer("tick_interval_ms must be greater than 0"));
        }

        if self.story_duration_ms < self.tick_interval_ms {
            return Err(ConfigError::viewer(format!(
                "story_duration_ms ({}) must be at least tick_interval_ms ({})",
                self.story_duration_ms, self.tick_interval_ms
            )));
        }

        if !self.drag_min_distance.is_finite() || self.drag_min_distance < 0.0 {
            return Err(ConfigError::viewer(
                "drag_min_distance must be a finite, non-negative number",
            ));
        }

        Ok(())
    }
}
