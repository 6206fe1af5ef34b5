#![allow(dead_code)]

use story_config::{GenerationConfig, ViewerConfig};
use story_core::{User, UserId};
use story_db::{Result as DbErrorResult, StoryPersistence};
use story_feed::{StaticDataset, StoryGenerator, StoryListController, UserService};

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use uuid::Uuid;

/// Keeps like flags so toggles round-trip; stores nothing else
#[derive(Default)]
pub struct MemoryPersistence {
    liked: Mutex<HashMap<Uuid, bool>>,
    pub seen: Mutex<Vec<Uuid>>,
}

#[async_trait]
impl StoryPersistence for MemoryPersistence {
    async fn save_users(&self, _users: &[User]) -> DbErrorResult<()> {
        Ok(())
    }

    async fn fetch_all_users(&self) -> DbErrorResult<Vec<User>> {
        Ok(Vec::new())
    }

    async fn mark_seen(&self, story_id: Uuid) -> DbErrorResult<()> {
        self.seen.lock().unwrap().push(story_id);
        Ok(())
    }

    async fn toggle_like(&self, story_id: Uuid) -> DbErrorResult<bool> {
        let mut liked = self.liked.lock().unwrap();
        let flag = liked.entry(story_id).or_insert(false);
        *flag = !*flag;
        Ok(*flag)
    }

    async fn delete_user(&self, _user_id: UserId) -> DbErrorResult<bool> {
        Ok(false)
    }
}

/// Loads a feed of one page holding `user_ids`, each with exactly
/// `stories_per_user` unseen stories
pub async fn loaded_feed(user_ids: &[i64], stories_per_user: u32) -> StoryListController {
    let users: Vec<String> = user_ids
        .iter()
        .map(|id| {
            format!(r#"{{"id":{id},"name":"User {id}","profile_picture_url":"https://u/{id}"}}"#)
        })
        .collect();
    let json = format!(r#"{{"pages":[{{"users":[{}]}}]}}"#, users.join(","));

    let persistence: Arc<dyn StoryPersistence> = Arc::new(MemoryPersistence::default());
    let config = GenerationConfig {
        min_stories: stories_per_user,
        max_stories: stories_per_user,
        ..GenerationConfig::default()
    };
    let generator =
        StoryGenerator::with_rng(Arc::clone(&persistence), config, StdRng::seed_from_u64(1));
    let service = UserService::new(Arc::new(StaticDataset::new(json)), persistence, generator);

    let mut controller = StoryListController::new(service);
    controller.load().await;
    controller
}

pub fn viewer_config() -> ViewerConfig {
    ViewerConfig::default()
}

pub fn seen_flags(controller: &StoryListController, user_id: i64) -> Vec<bool> {
    controller
        .user(user_id)
        .map(|user| user.stories.iter().map(|s| s.is_seen).collect())
        .unwrap_or_default()
}
