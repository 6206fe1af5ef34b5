use crate::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Dataset decode error: {source} {location}")]
    Decode {
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("UUID parse error: {source} {location}")]
    Uuid {
        source: uuid::Error,
        location: ErrorLocation,
    },

    #[error("Invalid timestamp: {value} {location}")]
    InvalidTimestamp { value: i64, location: ErrorLocation },
}

impl From<serde_json::Error> for CoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Decode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<uuid::Error> for CoreError {
    #[track_caller]
    fn from(source: uuid::Error) -> Self {
        Self::Uuid {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
