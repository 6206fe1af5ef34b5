use story_core::UserId;

use uuid::Uuid;

/// State-change notifications published by [`crate::StoryListController`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    UsersChanged { count: usize },
    LoadingChanged(bool),
    HasMoreChanged(bool),
    StoryUpdated {
        user_id: UserId,
        story_id: Uuid,
        is_seen: bool,
        is_liked: bool,
    },
}
