pub mod cli;
pub mod error;
pub mod logger;
pub mod session;


pub use cli::Cli;
pub use error::{AppError, Result as AppResult};
pub use session::{
    BUNDLED_DATASET, FeedSummary, Session, UserLine, select_dataset, spawn_event_logger,
};
