#![allow(dead_code)]

use story_db::{SqliteStoryRepository, connect_in_memory};

/// Creates a repository over a fresh in-memory database with migrations run
pub async fn create_test_repository() -> SqliteStoryRepository {
    let pool = connect_in_memory()
        .await
        .expect("Failed to create test pool");

    SqliteStoryRepository::new(pool)
}

/// Counts stored stories, bypassing the repository
pub async fn count_stories(repo: &SqliteStoryRepository) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM stories")
        .fetch_one(repo.pool())
        .await
        .expect("Failed to count stories")
}
