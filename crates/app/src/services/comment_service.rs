//! Comment service: use-cases for managing comments.

use quill_domain::comment::{Comment, NewComment};
use quill_domain::error::{NotFoundError, QuillError};
use quill_domain::id::CommentId;

use crate::ports::CommentRepository;

/// Application service for comment operations.
pub struct CommentService<R> {
    repo: R,
}

impl<R: CommentRepository> CommentService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new comment. Vote counters are stored as given.
    ///
    /// # Errors
    ///
    /// Returns [`QuillError::Validation`] for an empty title, or a storage
    /// error propagated from the repository.
    #[tracing::instrument(skip(self, comment), fields(comment_title = %comment.title))]
    pub async fn create_comment(&self, comment: NewComment) -> Result<Comment, QuillError> {
        comment.validate()?;
        let created = self.repo.create(comment).await?;
        tracing::info!(id = %created.id, "comment created");
        Ok(created)
    }

    /// Look up a comment by id.
    ///
    /// # Errors
    ///
    /// Returns [`QuillError::NotFound`] when no comment with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_comment(&self, id: CommentId) -> Result<Comment, QuillError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Comment",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all comments.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_comments(&self) -> Result<Vec<Comment>, QuillError> {
        self.repo.get_all().await
    }
}
