use crate::{CoreError, PagedUserResponse};

use googletest::prelude::*;

const DATASET: &str = r#"{
    "pages": [
        { "users": [
            { "id": 1, "name": "Neo", "profile_picture_url": "https://i.pravatar.cc/300?u=1" },
            { "id": 2, "name": "Trinity", "profile_picture_url": "https://i.pravatar.cc/300?u=2" }
        ] },
        { "users": [
            { "id": 3, "name": "Morpheus", "profile_picture_url": "https://i.pravatar.cc/300?u=3" }
        ] }
    ]
}"#;

#[test]
fn given_dataset_json_when_decoded_then_pages_preserve_order() {
    let response = PagedUserResponse::from_json(DATASET).unwrap();

    assert_that!(response.page_count(), eq(2));
    assert_that!(response.user_count(), eq(3));
    assert_eq!(response.pages[0].users[1].name, "Trinity");
    assert_that!(response.pages[1].users[0].id, eq(3));
    assert!(response.pages[0].users[0].stories.is_empty());
}

#[test]
fn given_missing_field_when_decoded_then_decode_error() {
    let result = PagedUserResponse::from_json(r#"{"pages":[{"users":[{"id":1}]}]}"#);

    assert!(matches!(result, Err(CoreError::Decode { .. })));
}

#[test]
fn given_empty_pages_when_decoded_then_no_users() {
    let response = PagedUserResponse::from_json(r#"{"pages":[]}"#).unwrap();

    assert_that!(response.page_count(), eq(0));
    assert_that!(response.user_count(), eq(0));
}
