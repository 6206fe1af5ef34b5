pub mod driver;
pub mod error;
pub mod gesture;
pub mod progress_timer;
pub mod story_viewer;
pub mod tick_source;

#[cfg(test)]
mod tests;

pub use driver::{ViewerCommand, run, run_with_commands};
pub use error::{Result, ViewerError};
pub use gesture::{Gesture, Navigation};
pub use progress_timer::ProgressTimer;
pub use story_viewer::{StoryViewer, ViewerStatus};
pub use tick_source::{IntervalTicks, TickSource};
