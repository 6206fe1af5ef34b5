use crate::{CoreError, Story};

use googletest::prelude::*;

#[test]
fn test_story_new_defaults() {
    let story = Story::new(3, "https://picsum.photos/seed/x/200/300".to_string());

    assert_that!(story.user_id, eq(3));
    assert_that!(story.is_seen, eq(false));
    assert_that!(story.is_liked, eq(false));
}

#[test]
fn given_stored_values_when_rebuilt_then_fields_match() {
    let original = Story::new(5, "https://img".to_string());

    let rebuilt = Story::from_stored(
        &original.id.to_string(),
        5,
        "https://img".to_string(),
        true,
        false,
        original.created_at.timestamp_millis(),
    )
    .unwrap();

    assert_that!(rebuilt.id, eq(original.id));
    assert_that!(rebuilt.is_seen, eq(true));
    assert_that!(
        rebuilt.created_at.timestamp_millis(),
        eq(original.created_at.timestamp_millis())
    );
}

#[test]
fn given_malformed_id_when_rebuilt_then_uuid_error() {
    let result = Story::from_stored("not-a-uuid", 1, String::new(), false, false, 0);

    assert!(matches!(result, Err(CoreError::Uuid { .. })));
}

#[test]
fn given_out_of_range_timestamp_when_rebuilt_then_timestamp_error() {
    let id = uuid::Uuid::new_v4().to_string();

    let result = Story::from_stored(&id, 1, String::new(), false, false, i64::MAX);

    assert!(matches!(
        result,
        Err(CoreError::InvalidTimestamp { value: i64::MAX, .. })
    ));
}
