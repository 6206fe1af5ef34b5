pub mod dataset;
pub mod error;
pub mod feed_event;
pub mod story_generator;
pub mod story_list_controller;
pub mod user_service;

pub use dataset::{DatasetSource, FileDataset, StaticDataset};
pub use error::{FeedError, Result};
pub use feed_event::FeedEvent;
pub use story_generator::StoryGenerator;
pub use story_list_controller::StoryListController;
pub use user_service::UserService;

/// Capacity of the controller's change-notification channel.
pub const FEED_EVENT_CAPACITY: usize = 64;
