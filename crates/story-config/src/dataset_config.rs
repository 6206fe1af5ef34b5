use crate::DEFAULT_DATASET_FILENAME;

use serde::Deserialize;

/// Location of the bundled paged user list, relative to the config dir
/// unless absolute.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub path: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATASET_FILENAME),
        }
    }
}
