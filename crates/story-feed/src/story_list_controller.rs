use crate::{FEED_EVENT_CAPACITY, FeedError, FeedEvent, UserService};

use story_core::{Story, User, UserId};

use std::collections::HashSet;

use log::{debug, error, warn};
use tokio::runtime::Handle;
use tokio::sync::broadcast;
use tokio::task::JoinSet;
use uuid::Uuid;

/// Feed state shown by the story list: the visible users plus loading and
/// "has more" flags.
///
/// All mutation goes through `&mut self`, so calls are serialized by the
/// caller. Every change is announced on a broadcast channel.
pub struct StoryListController {
    service: UserService,

    users: Vec<User>,
    is_loading: bool,
    has_more_users: bool,

    events: broadcast::Sender<FeedEvent>,
    pending_writes: JoinSet<()>,
}

impl StoryListController {
    pub fn new(service: UserService) -> Self {
        let (events, _) = broadcast::channel(FEED_EVENT_CAPACITY);

        Self {
            service,
            users: Vec::new(),
            is_loading: false,
            has_more_users: true,
            events,
            pending_writes: JoinSet::new(),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<FeedEvent> {
        self.events.subscribe()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn user(&self, user_id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == user_id)
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn has_more_users(&self) -> bool {
        self.has_more_users
    }

    pub fn users_with_unseen_stories(&self) -> Vec<&User> {
        self.users
            .iter()
            .filter(|user| user.has_unseen_stories())
            .collect()
    }

    pub fn service(&self) -> &UserService {
        &self.service
    }

    /// Adopt persisted users (generating stories for those without any), then
    /// pull one page from the dataset.
    pub async fn load(&mut self) {
        self.set_loading(true);

        match self.service.load_saved_users().await {
            Ok(saved) if !saved.is_empty() => {
                debug!("Adopting {} persisted users", saved.len());
                self.users = saved;
                self.publish(FeedEvent::UsersChanged {
                    count: self.users.len(),
                });
                self.generate_stories_if_needed().await;
            }
            Ok(_) => {}
            Err(e) => error!("Failed to load initial data: {}", e),
        }

        self.load_more_users().await;

        self.set_loading(false);
    }

    /// Pull the next page unless the dataset is exhausted or a load is
    /// already running.
    pub async fn load_more_users_if_needed(&mut self) {
        if !self.has_more_users || self.is_loading {
            return;
        }

        self.set_loading(true);
        self.load_more_users().await;
        self.set_loading(false);
    }

    /// The display surface reports that `user_id` scrolled into view. Reaching
    /// the last user with unseen stories pulls the next page.
    pub async fn on_user_appeared(&mut self, user_id: UserId) {
        let is_last = self
            .users
            .iter()
            .rev()
            .find(|user| user.has_unseen_stories())
            .is_some_and(|user| user.id == user_id);

        if is_last {
            self.load_more_users_if_needed().await;
        }
    }

    /// Mark a story seen in memory and persist it. A failed write is logged;
    /// the in-memory flag stays set.
    pub async fn mark_story_seen(&mut self, story_id: Uuid) {
        if !self.apply_seen(story_id) {
            return;
        }

        if let Err(e) = self.service.mark_seen(story_id).await {
            error!("Failed to mark story as seen: {}", e);
        }
    }

    /// Mark a story seen in memory now and persist it in the background.
    ///
    /// The write is tracked until [`Self::flush_pending_writes`]; dropping the
    /// controller aborts writes still in flight.
    pub fn mark_story_seen_detached(&mut self, story_id: Uuid) {
        if !self.apply_seen(story_id) {
            return;
        }

        let persistence = self.service.persistence();
        match Handle::try_current() {
            Ok(handle) => {
                // Reap finished writes so the set only holds live ones.
                while self.pending_writes.try_join_next().is_some() {}

                self.pending_writes.spawn_on(
                    async move {
                        if let Err(e) = persistence.mark_seen(story_id).await {
                            error!("Failed to mark story as seen: {}", e);
                        }
                    },
                    &handle,
                );
            }
            Err(_) => warn!(
                "No async runtime; story {} marked seen in memory only",
                story_id
            ),
        }
    }

    /// Wait for every background write started by
    /// [`Self::mark_story_seen_detached`].
    pub async fn flush_pending_writes(&mut self) {
        while let Some(result) = self.pending_writes.join_next().await {
            if let Err(e) = result {
                error!("Background story write did not finish: {}", e);
            }
        }
    }

    pub fn pending_writes(&self) -> usize {
        self.pending_writes.len()
    }

    /// Flip a story's liked flag and persist it. Returns the resulting value,
    /// or `None` for an unknown story.
    pub async fn toggle_story_like(&mut self, story_id: Uuid) -> Option<bool> {
        let liked = {
            let story = self.story_mut(story_id)?;
            story.is_liked = !story.is_liked;
            story.is_liked
        };

        let liked = match self.service.toggle_like(story_id).await {
            Ok(stored) => {
                if let Some(story) = self.story_mut(story_id) {
                    story.is_liked = stored;
                }
                stored
            }
            Err(e) => {
                error!("Failed to toggle story like: {}", e);
                liked
            }
        };

        self.publish_story(story_id);
        Some(liked)
    }

    async fn load_more_users(&mut self) {
        match self.service.fetch_next_page().await {
            Ok(Some(new_users)) if !new_users.is_empty() => {
                let mut known: HashSet<UserId> = self.users.iter().map(|user| user.id).collect();
                let fresh: Vec<User> = new_users
                    .into_iter()
                    .filter(|user| known.insert(user.id))
                    .collect();

                debug!("Appending {} new users", fresh.len());
                if !fresh.is_empty() {
                    self.users.extend(fresh);
                    self.publish(FeedEvent::UsersChanged {
                        count: self.users.len(),
                    });
                }

                self.generate_stories_if_needed().await;
            }
            Ok(_) => self.set_has_more(false),
            Err(e @ FeedError::DatasetNotFound { .. }) => {
                error!("Failed to load more users: {}", e);
                self.set_has_more(false);
            }
            Err(e) => error!("Failed to load more users: {}", e),
        }
    }

    async fn generate_stories_if_needed(&mut self) {
        let without_stories = self.users.iter_mut().filter(|user| user.stories.is_empty());
        self.service.generate_stories(without_stories).await;
    }

    /// Returns whether the flag changed.
    fn apply_seen(&mut self, story_id: Uuid) -> bool {
        let Some(story) = self.story_mut(story_id) else {
            warn!("Cannot mark unknown story {} as seen", story_id);
            return false;
        };

        if story.is_seen {
            return false;
        }

        story.is_seen = true;
        self.publish_story(story_id);
        true
    }

    fn story_mut(&mut self, story_id: Uuid) -> Option<&mut Story> {
        self.users
            .iter_mut()
            .find_map(|user| user.story_mut(story_id))
    }

    fn publish_story(&self, story_id: Uuid) {
        let story = self
            .users
            .iter()
            .flat_map(|user| user.stories.iter())
            .find(|story| story.id == story_id);

        if let Some(story) = story {
            self.publish(FeedEvent::StoryUpdated {
                user_id: story.user_id,
                story_id,
                is_seen: story.is_seen,
                is_liked: story.is_liked,
            });
        }
    }

    fn set_loading(&mut self, is_loading: bool) {
        if self.is_loading != is_loading {
            self.is_loading = is_loading;
            self.publish(FeedEvent::LoadingChanged(is_loading));
        }
    }

    fn set_has_more(&mut self, has_more: bool) {
        if self.has_more_users != has_more {
            self.has_more_users = has_more;
            self.publish(FeedEvent::HasMoreChanged(has_more));
        }
    }

    fn publish(&self, event: FeedEvent) {
        // No subscribers is not an error.
        let _ = self.events.send(event);
    }
}
