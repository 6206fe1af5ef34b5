use crate::{Story, User};

use proptest::prelude::*;

fn user_with_stories(seen: &[bool]) -> User {
    let mut user = User::new(
        7,
        "Ada".to_string(),
        "https://example.com/ada.png".to_string(),
    );
    user.append_stories(seen.iter().map(|&is_seen| {
        let mut story = Story::new(0, "https://example.com/s.png".to_string());
        story.is_seen = is_seen;
        story
    }));
    user
}

#[test]
fn test_user_equality_is_by_id() {
    let a = User::new(1, "A".to_string(), "https://a".to_string());
    let mut b = User::new(1, "B".to_string(), "https://b".to_string());
    b.append_stories([Story::new(1, "https://s".to_string())]);

    assert_eq!(a, b);
    assert_ne!(a, User::new(2, "A".to_string(), "https://a".to_string()));
}

#[test]
fn test_append_stories_claims_ownership_and_keeps_order() {
    let mut user = User::new(42, "Grace".to_string(), "https://g".to_string());
    let first = Story::new(0, "https://1".to_string());
    let second = Story::new(99, "https://2".to_string());
    let (first_id, second_id) = (first.id, second.id);

    user.append_stories([first, second]);

    assert_eq!(user.stories.len(), 2);
    assert!(user.stories.iter().all(|story| story.user_id == 42));
    assert_eq!(user.story_index(first_id), Some(0));
    assert_eq!(user.story_index(second_id), Some(1));
}

#[test]
fn test_first_unseen_story_skips_seen() {
    let user = user_with_stories(&[true, false, false]);

    let first_unseen = user.first_unseen_story().unwrap();

    assert_eq!(user.story_index(first_unseen.id), Some(1));
}

#[test]
fn test_user_without_stories_has_nothing_unseen() {
    let user = user_with_stories(&[]);

    assert!(!user.has_unseen_stories());
    assert!(user.first_unseen_story().is_none());
}

#[test]
fn test_stories_are_not_serialized() {
    let user = user_with_stories(&[false]);

    let json = serde_json::to_value(&user).unwrap();

    assert_eq!(json["profile_picture_url"], "https://example.com/ada.png");
    assert!(json.get("stories").is_none());
}

proptest! {
    #[test]
    fn given_any_seen_flags_when_checked_then_unseen_matches_any_false(
        seen in proptest::collection::vec(any::<bool>(), 0..12)
    ) {
        let user = user_with_stories(&seen);
        prop_assert_eq!(user.has_unseen_stories(), seen.iter().any(|s| !s));
    }

    #[test]
    fn given_any_stories_when_all_marked_seen_then_nothing_unseen(
        seen in proptest::collection::vec(any::<bool>(), 0..12)
    ) {
        let mut user = user_with_stories(&seen);
        for story in &mut user.stories {
            story.is_seen = true;
        }
        prop_assert!(!user.has_unseen_stories());
    }
}
