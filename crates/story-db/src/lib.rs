pub mod connection;
pub mod error;
pub mod persistence;
pub mod repositories;

pub use connection::sqlite::{connect, connect_in_memory};
pub use error::{DbError, Result};
pub use persistence::StoryPersistence;
pub use repositories::story_repository::SqliteStoryRepository;
