use crate::{Gesture, Navigation, ProgressTimer, Result as ViewerErrorResult, ViewerError};

use story_config::ViewerConfig;
use story_core::{Story, User, UserId};
use story_feed::StoryListController;

use log::{debug, info};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerStatus {
    Showing,
    Closed,
}

/// Full-screen story viewer state: which user and story is shown, how far
/// the current story has progressed, and whether the viewer is still open.
///
/// The viewer holds ids only; story data is read from the
/// [`StoryListController`] passed to each call. Entering a story marks it
/// seen through the controller without waiting for the write.
pub struct StoryViewer {
    current_user_id: UserId,
    current_story_index: usize,
    timer: ProgressTimer,
    drag_min_distance: f64,
    status: ViewerStatus,
}

impl StoryViewer {
    /// Open on `user_id` at `starting_story`, or at the first story when the
    /// story is not given or not found.
    pub fn open(
        controller: &mut StoryListController,
        config: &ViewerConfig,
        user_id: UserId,
        starting_story: Option<Uuid>,
    ) -> ViewerErrorResult<Self> {
        let user = controller
            .user(user_id)
            .ok_or_else(|| ViewerError::user_not_found(user_id))?;

        if user.stories.is_empty() {
            return Err(ViewerError::no_stories(user_id));
        }

        let index = starting_story
            .and_then(|story_id| user.story_index(story_id))
            .unwrap_or(0);

        let mut viewer = Self {
            current_user_id: user_id,
            current_story_index: index,
            timer: ProgressTimer::new(config.tick_interval(), config.story_duration()),
            drag_min_distance: config.drag_min_distance,
            status: ViewerStatus::Showing,
        };

        info!("Opening viewer on user {} at story {}", user_id, index);
        viewer.enter(controller, user_id, index);

        Ok(viewer)
    }

    /// Open on the user's first unseen story.
    pub fn open_at_first_unseen(
        controller: &mut StoryListController,
        config: &ViewerConfig,
        user_id: UserId,
    ) -> ViewerErrorResult<Self> {
        let starting_story = controller
            .user(user_id)
            .and_then(User::first_unseen_story)
            .map(|story| story.id);

        Self::open(controller, config, user_id, starting_story)
    }

    /// Next story of the current user, else the first story of the next user
    /// with unseen stories, else close.
    pub fn advance(&mut self, controller: &mut StoryListController) {
        if !self.is_showing() {
            return;
        }

        let story_count = controller
            .user(self.current_user_id)
            .map_or(0, |user| user.stories.len());

        if self.current_story_index + 1 < story_count {
            self.enter(controller, self.current_user_id, self.current_story_index + 1);
            return;
        }

        match Self::next_user_with_unseen(controller, self.current_user_id) {
            Some(next_user_id) => self.enter(controller, next_user_id, 0),
            None => self.close(),
        }
    }

    /// Previous story of the current user, else the last story of the
    /// previous user with unseen stories. Does nothing at the very start.
    pub fn retreat(&mut self, controller: &mut StoryListController) {
        if !self.is_showing() {
            return;
        }

        if self.current_story_index > 0 {
            self.enter(controller, self.current_user_id, self.current_story_index - 1);
            return;
        }

        if let Some(previous_user_id) =
            Self::previous_user_with_unseen(controller, self.current_user_id)
        {
            let last_index = controller
                .user(previous_user_id)
                .map_or(0, |user| user.stories.len().saturating_sub(1));
            self.enter(controller, previous_user_id, last_index);
        }
    }

    /// One timer tick; advances when the current story has run its course.
    pub fn tick(&mut self, controller: &mut StoryListController) -> ViewerStatus {
        if self.is_showing() && self.timer.tick() {
            self.advance(controller);
        }

        self.status
    }

    pub fn handle_gesture(&mut self, gesture: Gesture, controller: &mut StoryListController) {
        match gesture.navigation(self.drag_min_distance) {
            Some(Navigation::Advance) => self.advance(controller),
            Some(Navigation::Retreat) => self.retreat(controller),
            None => {}
        }
    }

    /// Suppress progress accumulation; ticks keep arriving.
    pub fn pause(&mut self) {
        self.timer.pause();
    }

    pub fn resume(&mut self) {
        self.timer.resume();
    }

    pub fn close(&mut self) {
        if self.status == ViewerStatus::Closed {
            return;
        }

        info!("Closing viewer on user {}", self.current_user_id);
        self.timer.stop();
        self.status = ViewerStatus::Closed;
    }

    /// Toggle the like flag of the story on screen.
    pub async fn toggle_like_current(&self, controller: &mut StoryListController) -> Option<bool> {
        let story_id = self.current_story(controller)?.id;
        controller.toggle_story_like(story_id).await
    }

    pub fn status(&self) -> ViewerStatus {
        self.status
    }

    pub fn is_showing(&self) -> bool {
        self.status == ViewerStatus::Showing
    }

    pub fn is_paused(&self) -> bool {
        self.timer.is_paused()
    }

    pub fn current_user_id(&self) -> UserId {
        self.current_user_id
    }

    pub fn current_story_index(&self) -> usize {
        self.current_story_index
    }

    pub fn progress(&self) -> f64 {
        self.timer.progress()
    }

    pub fn current_user<'c>(&self, controller: &'c StoryListController) -> Option<&'c User> {
        controller.user(self.current_user_id)
    }

    pub fn current_story<'c>(&self, controller: &'c StoryListController) -> Option<&'c Story> {
        self.current_user(controller)?
            .stories
            .get(self.current_story_index)
    }

    /// Fill level of each of the current user's progress bars.
    pub fn progress_bars(&self, controller: &StoryListController) -> Vec<f64> {
        let count = self
            .current_user(controller)
            .map_or(0, |user| user.stories.len());

        (0..count)
            .map(|index| match index.cmp(&self.current_story_index) {
                std::cmp::Ordering::Less => 1.0,
                std::cmp::Ordering::Equal => self.progress(),
                std::cmp::Ordering::Greater => 0.0,
            })
            .collect()
    }

    fn enter(&mut self, controller: &mut StoryListController, user_id: UserId, index: usize) {
        self.current_user_id = user_id;
        self.current_story_index = index;

        let unseen_story = controller
            .user(user_id)
            .and_then(|user| user.stories.get(index))
            .filter(|story| !story.is_seen)
            .map(|story| story.id);

        if let Some(story_id) = unseen_story {
            controller.mark_story_seen_detached(story_id);
        }

        debug!("Showing user {} story {}", user_id, index);
        self.timer.start();
    }

    fn next_user_with_unseen(controller: &StoryListController, user_id: UserId) -> Option<UserId> {
        let users = controller.users();
        let position = users.iter().position(|user| user.id == user_id)?;

        users[position + 1..]
            .iter()
            .find(|user| user.has_unseen_stories())
            .map(|user| user.id)
    }

    fn previous_user_with_unseen(
        controller: &StoryListController,
        user_id: UserId,
    ) -> Option<UserId> {
        let users = controller.users();
        let position = users.iter().position(|user| user.id == user_id)?;

        users[..position]
            .iter()
            .rev()
            .find(|user| user.has_unseen_stories())
            .map(|user| user.id)
    }
}
