use crate::{DbError, Result as DbErrorResult, StoryPersistence};

use story_core::{Story, User, UserId};

use std::collections::HashMap;

use async_trait::async_trait;
use log::{debug, warn};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// SQLite-backed [`StoryPersistence`].
///
/// Stories reference their owner through an explicit `user_id` foreign key;
/// the schema declares no cascade, so [`StoryPersistence::delete_user`]
/// removes the owned stories itself.
pub struct SqliteStoryRepository {
    pool: SqlitePool,
}

impl SqliteStoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn user_exists<'e, E>(executor: E, user_id: UserId) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query("SELECT 1 FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_optional(executor)
            .await?;

        Ok(row.is_some())
    }

    async fn insert_user<'e, E>(executor: E, user: &User) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
              INSERT INTO users (id, seq, name, profile_picture_url)
              VALUES (?, (SELECT COALESCE(MAX(seq), 0) + 1 FROM users), ?, ?)
              "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.profile_picture_url)
        .execute(executor)
        .await?;

        Ok(())
    }

    async fn story_owner<'e, E>(executor: E, story_id: Uuid) -> DbErrorResult<Option<UserId>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query("SELECT user_id FROM stories WHERE id = ?")
            .bind(story_id.to_string())
            .fetch_optional(executor)
            .await?;

        match row {
            Some(r) => Ok(Some(r.try_get("user_id")?)),
            None => Ok(None),
        }
    }

    /// Store `story` after the owner's last stored story.
    async fn append_story<'e, E>(executor: E, owner: UserId, story: &Story) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
              INSERT INTO stories (
                  id, user_id, position, image_url, is_seen, is_liked, created_at
              ) VALUES (
                  ?, ?,
                  (SELECT COALESCE(MAX(position) + 1, 0) FROM stories WHERE user_id = ?),
                  ?, ?, ?, ?
              )
              "#,
        )
        .bind(story.id.to_string())
        .bind(owner)
        .bind(owner)
        .bind(&story.image_url)
        .bind(story.is_seen)
        .bind(story.is_liked)
        .bind(story.created_at.timestamp_millis())
        .execute(executor)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl StoryPersistence for SqliteStoryRepository {
    async fn save_users(&self, users: &[User]) -> DbErrorResult<()> {
        let mut tx = self.pool.begin().await?;
        let mut inserted_users = 0usize;
        let mut inserted_stories = 0usize;

        for user in users {
            if !Self::user_exists(&mut *tx, user.id).await? {
                Self::insert_user(&mut *tx, user).await?;
                inserted_users += 1;
            }

            for story in &user.stories {
                match Self::story_owner(&mut *tx, story.id).await? {
                    None => {
                        Self::append_story(&mut *tx, user.id, story).await?;
                        inserted_stories += 1;
                    }
                    Some(owner) if owner != user.id => {
                        warn!(
                            "Story {} already belongs to user {}, not user {}",
                            story.id, owner, user.id
                        );
                    }
                    Some(_) => {}
                }
            }
        }

        tx.commit().await?;

        debug!(
            "Saved {} users ({} new users, {} new stories)",
            users.len(),
            inserted_users,
            inserted_stories
        );

        Ok(())
    }

    async fn fetch_all_users(&self) -> DbErrorResult<Vec<User>> {
        let user_rows = sqlx::query(
            r#"
              SELECT id, name, profile_picture_url
              FROM users
              ORDER BY seq ASC
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let story_rows = sqlx::query(
            r#"
              SELECT id, user_id, image_url, is_seen, is_liked, created_at
              FROM stories
              ORDER BY user_id ASC, position ASC
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut stories_by_user: HashMap<UserId, Vec<Story>> = HashMap::new();
        for r in story_rows {
            let id: String = r.try_get("id")?;
            let user_id: UserId = r.try_get("user_id")?;
            let story = Story::from_stored(
                &id,
                user_id,
                r.try_get("image_url")?,
                r.try_get("is_seen")?,
                r.try_get("is_liked")?,
                r.try_get("created_at")?,
            )
            .map_err(|source| DbError::InvalidStory { user_id, source })?;

            stories_by_user.entry(user_id).or_default().push(story);
        }

        user_rows
            .into_iter()
            .map(|r| -> DbErrorResult<User> {
                let mut user = User::new(
                    r.try_get("id")?,
                    r.try_get("name")?,
                    r.try_get("profile_picture_url")?,
                );
                user.stories = stories_by_user.remove(&user.id).unwrap_or_default();
                Ok(user)
            })
            .collect()
    }

    async fn mark_seen(&self, story_id: Uuid) -> DbErrorResult<()> {
        let result = sqlx::query("UPDATE stories SET is_seen = 1 WHERE id = ?")
            .bind(story_id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::story_not_found(story_id));
        }

        Ok(())
    }

    async fn toggle_like(&self, story_id: Uuid) -> DbErrorResult<bool> {
        let row = sqlx::query(
            r#"
              UPDATE stories
              SET is_liked = NOT is_liked
              WHERE id = ?
              RETURNING is_liked
              "#,
        )
        .bind(story_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(r) => Ok(r.try_get("is_liked")?),
            None => Err(DbError::story_not_found(story_id)),
        }
    }

    async fn delete_user(&self, user_id: UserId) -> DbErrorResult<bool> {
        let mut tx = self.pool.begin().await?;

        let stories = sqlx::query("DELETE FROM stories WHERE user_id = ?")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        let users = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(
            "Deleted user {} ({} stories)",
            user_id,
            stories.rows_affected()
        );

        Ok(users.rows_affected() > 0)
    }
}
