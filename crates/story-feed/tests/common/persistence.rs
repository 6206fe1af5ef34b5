use story_core::{User, UserId};
use story_db::{DbError, Result as DbErrorResult, StoryPersistence};

use std::panic::Location;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use uuid::Uuid;

/// Records every call and stores nothing
#[derive(Default)]
pub struct RecordingPersistence {
    pub saved: Mutex<Vec<Vec<UserId>>>,
    pub seen: Mutex<Vec<Uuid>>,
    failing_writes: AtomicBool,
    write_delay_ms: AtomicU64,
}

impl RecordingPersistence {
    pub fn save_calls(&self) -> usize {
        self.saved.lock().unwrap().len()
    }

    /// Make seen/like writes fail from now on
    pub fn fail_writes(&self) {
        self.failing_writes.store(true, Ordering::SeqCst);
    }

    /// Hold every seen write for `delay` before recording it
    pub fn delay_writes(&self, delay: Duration) {
        self.write_delay_ms.store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    pub fn seen_calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    fn check_writes(&self) -> DbErrorResult<()> {
        if self.failing_writes.load(Ordering::SeqCst) {
            Err(failure())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl StoryPersistence for RecordingPersistence {
    async fn save_users(&self, users: &[User]) -> DbErrorResult<()> {
        self.saved
            .lock()
            .unwrap()
            .push(users.iter().map(|u| u.id).collect());
        Ok(())
    }

    async fn fetch_all_users(&self) -> DbErrorResult<Vec<User>> {
        Ok(Vec::new())
    }

    async fn mark_seen(&self, story_id: Uuid) -> DbErrorResult<()> {
        let delay = self.write_delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        self.check_writes()?;
        self.seen.lock().unwrap().push(story_id);
        Ok(())
    }

    async fn toggle_like(&self, _story_id: Uuid) -> DbErrorResult<bool> {
        self.check_writes()?;
        Ok(true)
    }

    async fn delete_user(&self, _user_id: UserId) -> DbErrorResult<bool> {
        Ok(false)
    }
}

/// Fails every call
pub struct FailingPersistence;

fn failure() -> DbError {
    DbError::Initialization {
        message: "store unavailable".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[async_trait]
impl StoryPersistence for FailingPersistence {
    async fn save_users(&self, _users: &[User]) -> DbErrorResult<()> {
        Err(failure())
    }

    async fn fetch_all_users(&self) -> DbErrorResult<Vec<User>> {
        Err(failure())
    }

    async fn mark_seen(&self, _story_id: Uuid) -> DbErrorResult<()> {
        Err(failure())
    }

    async fn toggle_like(&self, _story_id: Uuid) -> DbErrorResult<bool> {
        Err(failure())
    }

    async fn delete_user(&self, _user_id: UserId) -> DbErrorResult<bool> {
        Err(failure())
    }
}
