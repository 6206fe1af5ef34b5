use crate::Result as DbErrorResult;

use story_core::{User, UserId};

use async_trait::async_trait;
use uuid::Uuid;

/// Durable storage for users and their stories.
///
/// Every method commits at most once; a failed commit leaves the store as it
/// was before the call.
#[async_trait]
pub trait StoryPersistence: Send + Sync {
    /// Insert users that are not stored yet. For users that already exist,
    /// append only the stories whose ids are not stored; existing user and
    /// story fields are left untouched.
    async fn save_users(&self, users: &[User]) -> DbErrorResult<()>;

    /// Every stored user with its stories, users in first-insertion order and
    /// stories in append order.
    async fn fetch_all_users(&self) -> DbErrorResult<Vec<User>>;

    async fn mark_seen(&self, story_id: Uuid) -> DbErrorResult<()>;

    /// Flip the liked flag and return the new value.
    async fn toggle_like(&self, story_id: Uuid) -> DbErrorResult<bool>;

    /// Delete a user together with every story it owns. Returns `false` when
    /// no such user was stored.
    async fn delete_user(&self, user_id: UserId) -> DbErrorResult<bool>;
}
