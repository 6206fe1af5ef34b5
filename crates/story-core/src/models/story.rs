use crate::{CoreError, Result as CoreErrorResult, UserId};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single ephemeral story owned by a user.
///
/// `user_id` is a back-reference only; the owning [`crate::User`] holds the
/// ordered story list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: Uuid,
    pub user_id: UserId,

    pub image_url: String,
    pub is_seen: bool,
    pub is_liked: bool,

    pub created_at: DateTime<Utc>,
}

impl Story {
    pub fn new(user_id: UserId, image_url: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            image_url,
            is_seen: false,
            is_liked: false,
            created_at: Utc::now(),
        }
    }

    /// Rebuild a story from its stored column values.
    #[track_caller]
    pub fn from_stored(
        id: &str,
        user_id: UserId,
        image_url: String,
        is_seen: bool,
        is_liked: bool,
        created_at_millis: i64,
    ) -> CoreErrorResult<Self> {
        let id = Uuid::parse_str(id)?;
        let created_at = DateTime::from_timestamp_millis(created_at_millis).ok_or_else(|| {
            CoreError::InvalidTimestamp {
                value: created_at_millis,
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(Self {
            id,
            user_id,
            image_url,
            is_seen,
            is_liked,
            created_at,
        })
    }
}
