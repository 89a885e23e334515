use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Record, RecordId};
use crate::error::DomainError;

/// Post entity - represents a blog post or article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: RecordId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create an unsaved post. The store assigns the id and final timestamps.
    pub fn new(title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Record for Post {
    const ENTITY_TYPE: &'static str = "post";

    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn touch(&mut self, now: DateTime<Utc>, inserted: bool) {
        if inserted {
            self.created_at = now;
        }
        self.updated_at = now;
    }
}

/// Full post input, used by create and by full replacement.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

impl NewPost {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.is_empty() {
            return Err(DomainError::required("title"));
        }
        if self.content.is_empty() {
            return Err(DomainError::required("content"));
        }
        Ok(())
    }
}

/// Sparse change-set for a post. `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.as_deref().is_some_and(str::is_empty) {
            return Err(DomainError::empty("title"));
        }
        if self.content.as_deref().is_some_and(str::is_empty) {
            return Err(DomainError::empty("content"));
        }
        Ok(())
    }

    /// Assign the present fields. Call `validate` first.
    pub fn apply_to(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
    }
}
