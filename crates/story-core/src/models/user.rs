use crate::Story;

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type UserId = i64;

/// A feed user and the stories they own, in creation order.
///
/// Identity is the numeric `id`: two values with the same id compare equal
/// regardless of name, picture or stories. Stories are not part of the
/// dataset document and are never serialized with the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub profile_picture_url: String,

    #[serde(skip)]
    pub stories: Vec<Story>,
}

impl User {
    pub fn new(id: UserId, name: String, profile_picture_url: String) -> Self {
        Self {
            id,
            name,
            profile_picture_url,
            stories: Vec::new(),
        }
    }

    pub fn has_unseen_stories(&self) -> bool {
        self.stories.iter().any(|story| !story.is_seen)
    }

    pub fn first_unseen_story(&self) -> Option<&Story> {
        self.stories.iter().find(|story| !story.is_seen)
    }

    pub fn story_index(&self, story_id: Uuid) -> Option<usize> {
        self.stories.iter().position(|story| story.id == story_id)
    }

    pub fn story_mut(&mut self, story_id: Uuid) -> Option<&mut Story> {
        self.stories.iter_mut().find(|story| story.id == story_id)
    }

    /// Append stories after the existing ones, claiming ownership of each.
    pub fn append_stories(&mut self, stories: impl IntoIterator<Item = Story>) {
        let owner = self.id;
        self.stories.extend(stories.into_iter().map(|mut story| {
            story.user_id = owner;
            story
        }));
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
