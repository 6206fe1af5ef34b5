use crate::{Gesture, StoryViewer, TickSource};

use story_feed::StoryListController;

use log::debug;
use tokio::sync::mpsc;

/// Input sent by the display surface while the viewer is open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerCommand {
    Gesture(Gesture),
    Pause,
    Resume,
    ToggleLike,
    Close,
}

/// Drive the viewer from `ticks` until it closes.
pub async fn run<T>(viewer: &mut StoryViewer, controller: &mut StoryListController, ticks: &mut T)
where
    T: TickSource + ?Sized,
{
    while viewer.is_showing() {
        ticks.next_tick().await;
        viewer.tick(controller);
    }
}

/// Drive the viewer from `ticks` and surface commands until it closes.
///
/// A closed command channel means the surface went away and closes the
/// viewer.
pub async fn run_with_commands<T>(
    viewer: &mut StoryViewer,
    controller: &mut StoryListController,
    ticks: &mut T,
    commands: &mut mpsc::Receiver<ViewerCommand>,
) where
    T: TickSource + ?Sized,
{
    while viewer.is_showing() {
        tokio::select! {
            _ = ticks.next_tick() => {
                viewer.tick(controller);
            }
            command = commands.recv() => match command {
                Some(command) => apply(viewer, controller, command).await,
                None => {
                    debug!("Viewer command channel closed");
                    viewer.close();
                }
            },
        }
    }
}

async fn apply(
    viewer: &mut StoryViewer,
    controller: &mut StoryListController,
    command: ViewerCommand,
) {
    match command {
        ViewerCommand::Gesture(gesture) => viewer.handle_gesture(gesture, controller),
        ViewerCommand::Pause => viewer.pause(),
        ViewerCommand::Resume => viewer.resume(),
        ViewerCommand::ToggleLike => {
            viewer.toggle_like_current(controller).await;
        }
        ViewerCommand::Close => viewer.close(),
    }
}
