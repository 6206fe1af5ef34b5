use story_core::CoreError;
use story_db::DbError;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Dataset not found: {path} {location}")]
    DatasetNotFound {
        path: PathBuf,
        location: ErrorLocation,
    },

    #[error("Failed to read dataset {path}: {source} {location}")]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Dataset decode failed: {0}")]
    Decode(#[from] CoreError),

    #[error("Persistence error: {0}")]
    Db(#[from] DbError),
}

impl FeedError {
    #[track_caller]
    pub fn dataset_io(path: PathBuf, source: std::io::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::DatasetNotFound { path, location }
        } else {
            Self::DatasetRead {
                path,
                source,
                location,
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;
