#![allow(dead_code)]

use story_core::{Story, User, UserId};

/// Creates a test User without stories
pub fn create_test_user(id: UserId) -> User {
    User::new(
        id,
        format!("User {}", id),
        format!("https://i.pravatar.cc/300?u={}", id),
    )
}

/// Creates a test User owning `count` unseen stories
pub fn create_test_user_with_stories(id: UserId, count: usize) -> User {
    let mut user = create_test_user(id);
    user.append_stories((0..count).map(|i| create_test_story(id, i)));
    user
}

/// Creates a test Story with sensible defaults
pub fn create_test_story(user_id: UserId, index: usize) -> Story {
    Story::new(
        user_id,
        format!("https://picsum.photos/seed/{}-{}/200/300", user_id, index),
    )
}
