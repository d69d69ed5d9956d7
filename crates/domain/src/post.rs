//! A post is a titled article.
//!
//! `category`, `topic` and `tags` are free text; `category` is not a
//! reference to [`Category`](crate::category::Category). `upvote` and
//! `user_id` exist in storage but no operation sets them yet.

use crate::error::{QuillError, require};
use crate::id::{PostId, UserId};
use crate::time::Timestamp;

/// A persisted post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    /// Title of the post, unique across all posts.
    pub name: String,
    pub description: String,
    pub category: String,
    pub topic: String,
    pub body: String,
    /// Flat, delimiter-separated tag list.
    pub tags: String,
    pub upvote: Option<i64>,
    pub registered: Timestamp,
    /// Unused placeholder for the authoring user.
    pub user_id: Option<UserId>,
}

/// The six client-editable fields of a post.
///
/// Used both to create a post and to replace every mutable field of an
/// existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub name: String,
    pub description: String,
    pub category: String,
    pub topic: String,
    pub body: String,
    pub tags: String,
}

impl NewPost {
    /// Create a builder for constructing a [`NewPost`].
    #[must_use]
    pub fn builder() -> NewPostBuilder {
        NewPostBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`QuillError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), QuillError> {
        require("name", &self.name)?;
        Ok(())
    }

    /// Build the stored record once the store has assigned an id and a
    /// registration time.
    #[must_use]
    pub fn into_post(self, id: PostId, registered: Timestamp) -> Post {
        Post {
            id,
            name: self.name,
            description: self.description,
            category: self.category,
            topic: self.topic,
            body: self.body,
            tags: self.tags,
            upvote: None,
            registered,
            user_id: None,
        }
    }
}

/// Step-by-step builder for [`NewPost`].
#[derive(Debug, Default)]
pub struct NewPostBuilder {
    name: Option<String>,
    description: Option<String>,
    category: Option<String>,
    topic: Option<String>,
    body: Option<String>,
    tags: Option<String>,
}

impl NewPostBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    /// Consume the builder, validate, and return a [`NewPost`].
    ///
    /// # Errors
    ///
    /// Returns [`QuillError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<NewPost, QuillError> {
        let post = NewPost {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            topic: self.topic.unwrap_or_default(),
            body: self.body.unwrap_or_default(),
            tags: self.tags.unwrap_or_default(),
        };
        post.validate()?;
        Ok(post)
    }
}
