use story_config::{GenerationConfig, IMAGE_URL_SEED_PLACEHOLDER};
use story_core::{Story, User, UserId};
use story_db::StoryPersistence;

use std::sync::Arc;

use log::{debug, error};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};

/// Synthesizes placeholder stories for users that have none.
///
/// Callers pick which users need stories; the generator appends to whatever
/// it is given.
pub struct StoryGenerator {
    persistence: Arc<dyn StoryPersistence>,
    config: GenerationConfig,
    rng: StdRng,
}

impl StoryGenerator {
    pub fn new(persistence: Arc<dyn StoryPersistence>, config: GenerationConfig) -> Self {
        Self::with_rng(persistence, config, StdRng::from_os_rng())
    }

    pub fn with_rng(
        persistence: Arc<dyn StoryPersistence>,
        config: GenerationConfig,
        rng: StdRng,
    ) -> Self {
        Self {
            persistence,
            config,
            rng,
        }
    }

    /// Hex SHA-256 of `"{user_id}-{index}"`.
    pub fn image_seed(user_id: UserId, index: u32) -> String {
        let digest = Sha256::digest(format!("{}-{}", user_id, index).as_bytes());
        hex::encode(digest)
    }

    pub fn image_url(&self, user_id: UserId, index: u32) -> String {
        self.config
            .image_url_template
            .replace(IMAGE_URL_SEED_PLACEHOLDER, &Self::image_seed(user_id, index))
    }

    /// Append a random number of stories to each user, then upsert them.
    ///
    /// A failed save is logged; the appended stories stay in memory.
    pub async fn generate_for_users<'a, I>(&mut self, users: I)
    where
        I: IntoIterator<Item = &'a mut User>,
    {
        let min = self.config.min_stories;
        let max = self.config.max_stories.max(min);
        let mut touched = Vec::new();

        for user in users {
            let count = self.rng.random_range(min..=max);
            let stories: Vec<Story> = (1..=count)
                .map(|index| Story::new(user.id, self.image_url(user.id, index)))
                .collect();

            debug!("Generated {} stories for user {}", count, user.id);
            user.append_stories(stories);
            touched.push(user.clone());
        }

        if touched.is_empty() {
            return;
        }

        if let Err(e) = self.persistence.save_users(&touched).await {
            error!("Failed to save generated stories: {}", e);
        }
    }
}
