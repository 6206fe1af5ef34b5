use crate::{DatasetSource, Result as FeedErrorResult, StoryGenerator};

use story_core::{Page, User};
use story_db::StoryPersistence;

use std::sync::Arc;

use log::{debug, info};
use uuid::Uuid;

/// Serves the bundled dataset one page at a time and fronts persistence for
/// the feed.
///
/// The dataset is read lazily on the first [`UserService::fetch_next_page`]
/// and kept for the lifetime of the service, including across
/// [`UserService::reset_pagination`].
pub struct UserService {
    dataset: Arc<dyn DatasetSource>,
    persistence: Arc<dyn StoryPersistence>,
    generator: StoryGenerator,

    all_pages: Vec<Page>,
    current_page_index: usize,
    cached_users: Vec<User>,
    has_loaded_data: bool,
}

impl UserService {
    pub fn new(
        dataset: Arc<dyn DatasetSource>,
        persistence: Arc<dyn StoryPersistence>,
        generator: StoryGenerator,
    ) -> Self {
        Self {
            dataset,
            persistence,
            generator,
            all_pages: Vec::new(),
            current_page_index: 0,
            cached_users: Vec::new(),
            has_loaded_data: false,
        }
    }

    /// Users of the next page, or `None` once every page has been served.
    ///
    /// The returned users are upserted before they are handed back. Once
    /// exhausted, every further call returns `None` without moving the cursor.
    pub async fn fetch_next_page(&mut self) -> FeedErrorResult<Option<Vec<User>>> {
        if !self.has_loaded_data {
            self.load_dataset().await?;
        }

        let Some(page) = self.all_pages.get(self.current_page_index) else {
            debug!(
                "Pagination exhausted at page {} of {}",
                self.current_page_index,
                self.all_pages.len()
            );
            return Ok(None);
        };

        let users = page.users.clone();
        self.current_page_index += 1;
        self.cached_users.extend(users.iter().cloned());

        self.persistence.save_users(&users).await?;

        debug!(
            "Served page {} of {} ({} users)",
            self.current_page_index,
            self.all_pages.len(),
            users.len()
        );

        Ok(Some(users))
    }

    /// Rewind to the first page and forget the accumulated users.
    pub fn reset_pagination(&mut self) {
        self.current_page_index = 0;
        self.cached_users.clear();
    }

    /// Every user served since construction or the last reset.
    pub fn cached_users(&self) -> &[User] {
        &self.cached_users
    }

    pub fn current_page_index(&self) -> usize {
        self.current_page_index
    }

    pub async fn load_saved_users(&self) -> FeedErrorResult<Vec<User>> {
        Ok(self.persistence.fetch_all_users().await?)
    }

    pub async fn generate_stories<'a, I>(&mut self, users: I)
    where
        I: IntoIterator<Item = &'a mut User>,
    {
        self.generator.generate_for_users(users).await;
    }

    pub async fn mark_seen(&self, story_id: Uuid) -> FeedErrorResult<()> {
        Ok(self.persistence.mark_seen(story_id).await?)
    }

    pub async fn toggle_like(&self, story_id: Uuid) -> FeedErrorResult<bool> {
        Ok(self.persistence.toggle_like(story_id).await?)
    }

    /// Shared handle for writes that outlive the current call.
    pub fn persistence(&self) -> Arc<dyn StoryPersistence> {
        Arc::clone(&self.persistence)
    }

    async fn load_dataset(&mut self) -> FeedErrorResult<()> {
        let response = self.dataset.load().await?;
        info!(
            "Dataset loaded: {} pages, {} users",
            response.page_count(),
            response.user_count()
        );

        self.all_pages = response.pages;
        self.has_loaded_data = true;

        Ok(())
    }
}
