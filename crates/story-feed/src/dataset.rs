use crate::{FeedError, Result as FeedErrorResult};

use story_core::PagedUserResponse;

use std::path::PathBuf;

use async_trait::async_trait;
use log::debug;

/// Where the paged user list comes from. Read once per [`crate::UserService`].
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn load(&self) -> FeedErrorResult<PagedUserResponse>;
}

/// A JSON dataset document on disk.
pub struct FileDataset {
    path: PathBuf,
}

impl FileDataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileDataset {
    async fn load(&self) -> FeedErrorResult<PagedUserResponse> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| FeedError::dataset_io(self.path.clone(), e))?;

        let response = PagedUserResponse::from_json(&contents)?;
        debug!(
            "Loaded dataset {} ({} pages, {} users)",
            self.path.display(),
            response.page_count(),
            response.user_count()
        );

        Ok(response)
    }
}

/// A JSON dataset document held in memory.
pub struct StaticDataset {
    json: String,
}

impl StaticDataset {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

#[async_trait]
impl DatasetSource for StaticDataset {
    async fn load(&self) -> FeedErrorResult<PagedUserResponse> {
        Ok(PagedUserResponse::from_json(&self.json)?)
    }
}
