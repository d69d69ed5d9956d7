//! Shared application state for axum handlers.

use std::sync::Arc;

use quill_app::ports::{CategoryRepository, CommentRepository, PostRepository, UserRepository};
use quill_app::services::category_service::CategoryService;
use quill_app::services::comment_service::CommentService;
use quill_app::services::post_service::PostService;
use quill_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the four repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<UR, PR, CR, MR> {
    /// User service.
    pub user_service: Arc<UserService<UR>>,
    /// Post service.
    pub post_service: Arc<PostService<PR>>,
    /// Category service.
    pub category_service: Arc<CategoryService<CR>>,
    /// Comment service.
    pub comment_service: Arc<CommentService<MR>>,
}

impl<UR, PR, CR, MR> Clone for AppState<UR, PR, CR, MR> {
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            post_service: Arc::clone(&self.post_service),
            category_service: Arc::clone(&self.category_service),
            comment_service: Arc::clone(&self.comment_service),
        }
    }
}

impl<UR, PR, CR, MR> AppState<UR, PR, CR, MR>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PostRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
    MR: CommentRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        user_service: UserService<UR>,
        post_service: PostService<PR>,
        category_service: CategoryService<CR>,
        comment_service: CommentService<MR>,
    ) -> Self {
        Self {
            user_service: Arc::new(user_service),
            post_service: Arc::new(post_service),
            category_service: Arc::new(category_service),
            comment_service: Arc::new(comment_service),
        }
    }
}
