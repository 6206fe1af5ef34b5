use story_core::{CoreError, UserId};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Story not found: {story_id} {location}")]
    StoryNotFound {
        story_id: Uuid,
        location: ErrorLocation,
    },

    #[error("Stored story for user {user_id} is invalid: {source}")]
    InvalidStory {
        user_id: UserId,
        #[source]
        source: CoreError,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl DbError {
    #[track_caller]
    pub fn story_not_found(story_id: Uuid) -> Self {
        Self::StoryNotFound {
            story_id,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
