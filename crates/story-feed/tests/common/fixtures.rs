use story_config::GenerationConfig;
use story_db::{SqliteStoryRepository, StoryPersistence, connect_in_memory};
use story_feed::{StaticDataset, StoryGenerator, StoryListController, UserService};

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Builds a dataset document with one page per inner slice of user ids
pub fn dataset_json(pages: &[&[i64]]) -> String {
    let pages: Vec<String> = pages
        .iter()
        .map(|ids| {
            let users: Vec<String> = ids
                .iter()
                .map(|id| {
                    format!(
                        r#"{{"id":{id},"name":"User {id}","profile_picture_url":"https://i.pravatar.cc/300?u={id}"}}"#
                    )
                })
                .collect();
            format!(r#"{{"users":[{}]}}"#, users.join(","))
        })
        .collect();

    format!(r#"{{"pages":[{}]}}"#, pages.join(","))
}

/// Creates a repository over a fresh in-memory database
pub async fn create_test_repository() -> Arc<SqliteStoryRepository> {
    let pool = connect_in_memory()
        .await
        .expect("Failed to create test pool");
    Arc::new(SqliteStoryRepository::new(pool))
}

/// Generator with a fixed seed so story counts are reproducible
pub fn seeded_generator(
    persistence: Arc<dyn StoryPersistence>,
    config: GenerationConfig,
) -> StoryGenerator {
    StoryGenerator::with_rng(persistence, config, StdRng::seed_from_u64(7))
}

pub fn create_service(json: &str, persistence: Arc<dyn StoryPersistence>) -> UserService {
    let generator = seeded_generator(Arc::clone(&persistence), GenerationConfig::default());
    UserService::new(Arc::new(StaticDataset::new(json)), persistence, generator)
}

pub fn create_controller(
    json: &str,
    persistence: Arc<dyn StoryPersistence>,
) -> StoryListController {
    StoryListController::new(create_service(json, persistence))
}
