use crate::error::Result as AppErrorResult;

use story_config::{Config, ViewerConfig};
use story_core::{User, UserId};
use story_db::{SqliteStoryRepository, StoryPersistence};
use story_feed::{
    DatasetSource, FeedEvent, FileDataset, StaticDataset, StoryGenerator, StoryListController,
    UserService,
};
use story_viewer::{IntervalTicks, StoryViewer, ViewerCommand, run_with_commands};

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Paged user list shipped inside the binary.
pub const BUNDLED_DATASET: &str = include_str!("../data/users.json");

/// Pick the dataset: bundled, an explicit file, or `dataset.path` from config.
pub fn select_dataset(
    config: &Config,
    config_dir: &Path,
    dataset_override: Option<PathBuf>,
    bundled: bool,
) -> Arc<dyn DatasetSource> {
    if bundled {
        info!("Using bundled dataset");
        return Arc::new(StaticDataset::new(BUNDLED_DATASET));
    }

    let path = dataset_override.unwrap_or_else(|| config.dataset_path(config_dir));
    info!("Using dataset: {}", path.display());
    Arc::new(FileDataset::new(path))
}

/// One headless run of the feed: the controller plus the viewer settings
/// used to play it back.
pub struct Session {
    controller: StoryListController,
    viewer_config: ViewerConfig,
}

impl Session {
    /// Connect the configured SQLite store and wire the feed on top of it.
    pub async fn open(
        config: &Config,
        config_dir: &Path,
        dataset: Arc<dyn DatasetSource>,
    ) -> AppErrorResult<Self> {
        let database_path = config.database_path(config_dir);
        info!("Connecting to database: {}", database_path.display());

        let pool = story_db::connect(&database_path).await?;
        let persistence: Arc<dyn StoryPersistence> = Arc::new(SqliteStoryRepository::new(pool));

        let generator = StoryGenerator::new(Arc::clone(&persistence), config.generation.clone());
        Ok(Self::new(dataset, persistence, generator, config.viewer.clone()))
    }

    pub fn new(
        dataset: Arc<dyn DatasetSource>,
        persistence: Arc<dyn StoryPersistence>,
        generator: StoryGenerator,
        viewer_config: ViewerConfig,
    ) -> Self {
        let service = UserService::new(dataset, persistence, generator);

        Self {
            controller: StoryListController::new(service),
            viewer_config,
        }
    }

    pub fn controller(&self) -> &StoryListController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut StoryListController {
        &mut self.controller
    }

    /// Initial load plus up to `pages - 1` further pages.
    pub async fn load(&mut self, pages: u32) -> FeedSummary {
        self.controller.load().await;

        for _ in 1..pages {
            if !self.controller.has_more_users() {
                break;
            }
            self.controller.load_more_users_if_needed().await;
        }

        self.summary()
    }

    /// Play from the first user with unseen stories until the viewer closes.
    ///
    /// Returns the user playback started on, or `None` when nothing is
    /// unseen. Seen writes started during playback have finished by the
    /// time this returns.
    pub async fn play(
        &mut self,
        commands: &mut mpsc::Receiver<ViewerCommand>,
    ) -> AppErrorResult<Option<UserId>> {
        let Some(user_id) = self
            .controller
            .users_with_unseen_stories()
            .first()
            .map(|user| user.id)
        else {
            info!("Nothing unseen to play");
            return Ok(None);
        };

        let mut viewer =
            StoryViewer::open_at_first_unseen(&mut self.controller, &self.viewer_config, user_id)?;
        let mut ticks = IntervalTicks::new(self.viewer_config.tick_interval());

        run_with_commands(&mut viewer, &mut self.controller, &mut ticks, commands).await;
        self.controller.flush_pending_writes().await;
        info!(
            "Playback finished on user {} story {}",
            viewer.current_user_id(),
            viewer.current_story_index()
        );

        Ok(Some(user_id))
    }

    pub fn summary(&self) -> FeedSummary {
        FeedSummary::new(self.controller.users(), self.controller.has_more_users())
    }
}

/// Log feed events until the controller goes away.
pub fn spawn_event_logger(mut events: broadcast::Receiver<FeedEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => debug!("Feed event: {:?}", event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!("Feed event logger lagged, skipped {} events", skipped)
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLine {
    pub id: UserId,
    pub name: String,
    pub stories: usize,
    pub unseen: usize,
    pub liked: usize,
}

/// Printable snapshot of the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSummary {
    pub users: Vec<UserLine>,
    pub has_more: bool,
}

impl FeedSummary {
    pub fn new(users: &[User], has_more: bool) -> Self {
        let users = users
            .iter()
            .map(|user| UserLine {
                id: user.id,
                name: user.name.clone(),
                stories: user.stories.len(),
                unseen: user.stories.iter().filter(|s| !s.is_seen).count(),
                liked: user.stories.iter().filter(|s| s.is_liked).count(),
            })
            .collect();

        Self { users, has_more }
    }

    pub fn unseen_users(&self) -> usize {
        self.users.iter().filter(|line| line.unseen > 0).count()
    }
}

impl fmt::Display for FeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.users {
            let marker = if line.unseen > 0 { '*' } else { ' ' };
            writeln!(
                f,
                "{marker} {:>4}  {:<16} {} stories, {} unseen, {} liked",
                line.id, line.name, line.stories, line.unseen, line.liked
            )?;
        }

        writeln!(
            f,
            "{} users, {} with unseen stories{}",
            self.users.len(),
            self.unseen_users(),
            if self.has_more { ", more available" } else { "" }
        )
    }
}
