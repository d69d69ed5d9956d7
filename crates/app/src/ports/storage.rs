//! Storage port: repository traits for persistence.
//!
//! Every `create` returns the stored record with its generated id and
//! defaulted timestamps. Lookups return `Ok(None)` for a missing id; turning
//! that into an error is the caller's job.

use std::future::Future;

use quill_domain::category::{Category, NewCategory};
use quill_domain::comment::{Comment, NewComment};
use quill_domain::error::QuillError;
use quill_domain::id::{CategoryId, CommentId, PostId, UserId};
use quill_domain::post::{NewPost, Post};
use quill_domain::user::{NewUser, User};

/// Repository for persisting and querying [`User`]s.
pub trait UserRepository {
    /// Insert a new user and return it with its assigned id.
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, QuillError>> + Send;

    /// Get a user by its unique identifier.
    fn get_by_id(&self, id: UserId)
    -> impl Future<Output = Result<Option<User>, QuillError>> + Send;

    /// Get all users.
    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, QuillError>> + Send;
}

/// Repository for persisting and querying [`Post`]s.
pub trait PostRepository {
    /// Insert a new post.
    ///
    /// Fails with [`QuillError::Conflict`] when another post already has the
    /// same name.
    fn create(&self, post: NewPost) -> impl Future<Output = Result<Post, QuillError>> + Send;

    /// Get a post by its unique identifier.
    fn get_by_id(&self, id: PostId)
    -> impl Future<Output = Result<Option<Post>, QuillError>> + Send;

    /// Get all posts in storage order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Post>, QuillError>> + Send;

    /// Overwrite every mutable field of an existing post.
    ///
    /// Returns `Ok(None)` when no post has `id`.
    fn update(
        &self,
        id: PostId,
        changes: NewPost,
    ) -> impl Future<Output = Result<Option<Post>, QuillError>> + Send;
}

/// Repository for persisting and querying [`Category`]s.
pub trait CategoryRepository {
    /// Insert a new category.
    ///
    /// Fails with [`QuillError::Conflict`] when the name is taken.
    fn create(
        &self,
        category: NewCategory,
    ) -> impl Future<Output = Result<Category, QuillError>> + Send;

    /// Get a category by its unique identifier.
    fn get_by_id(
        &self,
        id: CategoryId,
    ) -> impl Future<Output = Result<Option<Category>, QuillError>> + Send;

    /// Get all categories.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Category>, QuillError>> + Send;
}

/// Repository for persisting and querying [`Comment`]s.
pub trait CommentRepository {
    /// Insert a new comment.
    fn create(
        &self,
        comment: NewComment,
    ) -> impl Future<Output = Result<Comment, QuillError>> + Send;

    /// Get a comment by its unique identifier.
    fn get_by_id(
        &self,
        id: CommentId,
    ) -> impl Future<Output = Result<Option<Comment>, QuillError>> + Send;

    /// Get all comments in storage order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Comment>, QuillError>> + Send;
}
