use crate::{Result as CoreErrorResult, User};

use serde::{Deserialize, Serialize};

/// One page of the bundled user dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    pub users: Vec<User>,
}

/// The whole bundled dataset: `{"pages": [{"users": [...]}, ...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PagedUserResponse {
    pub pages: Vec<Page>,
}

impl PagedUserResponse {
    #[track_caller]
    pub fn from_json(json: &str) -> CoreErrorResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn user_count(&self) -> usize {
        self.pages.iter().map(|page| page.users.len()).sum()
    }
}
