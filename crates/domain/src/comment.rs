//! A comment is a titled remark carrying vote counters.
//!
//! Vote counters are stored exactly as submitted; nothing recomputes them.

use crate::error::{QuillError, require};
use crate::id::{CommentId, PostId, UserId};
use crate::time::Timestamp;

/// A persisted comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub title: String,
    pub body: String,
    pub created: Timestamp,
    /// Unused placeholder for the commenting user.
    pub user_id: Option<UserId>,
    /// Unused placeholder for the commented post.
    pub post_id: Option<PostId>,
    pub upvote: i64,
    pub downvote: i64,
}

/// A comment that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub title: String,
    pub body: String,
    pub upvote: i64,
    pub downvote: i64,
}

impl NewComment {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`QuillError::Validation`] when `title` is empty.
    pub fn validate(&self) -> Result<(), QuillError> {
        require("title", &self.title)?;
        Ok(())
    }

    #[must_use]
    pub fn into_comment(self, id: CommentId, created: Timestamp) -> Comment {
        Comment {
            id,
            title: self.title,
            body: self.body,
            created,
            user_id: None,
            post_id: None,
            upvote: self.upvote,
            downvote: self.downvote,
        }
    }
}
