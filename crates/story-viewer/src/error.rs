use story_core::UserId;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("User not in feed: {user_id} {location}")]
    UserNotFound {
        user_id: UserId,
        location: ErrorLocation,
    },

    #[error("User {user_id} has no stories {location}")]
    NoStories {
        user_id: UserId,
        location: ErrorLocation,
    },
}

impl ViewerError {
    #[track_caller]
    pub fn user_not_found(user_id: UserId) -> Self {
        Self::UserNotFound {
            user_id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn no_stories(user_id: UserId) -> Self {
        Self::NoStories {
            user_id,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ViewerError>;
