//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod categories;
#[allow(clippy::missing_errors_doc)]
pub mod comments;
#[allow(clippy::missing_errors_doc)]
pub mod posts;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use std::str::FromStr;

use axum::Router;
use axum::routing::{get, post};

use quill_app::ports::{CategoryRepository, CommentRepository, PostRepository, UserRepository};
use quill_domain::error::ValidationError;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the API sub-router.
pub fn routes<UR, PR, CR, MR>() -> Router<AppState<UR, PR, CR, MR>>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PostRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
    MR: CommentRepository + Send + Sync + 'static,
{
    Router::new()
        // Users
        .route("/user", post(users::create::<UR, PR, CR, MR>))
        .route("/user/{id}", get(users::get::<UR, PR, CR, MR>))
        // Posts
        .route(
            "/post",
            get(posts::list::<UR, PR, CR, MR>).post(posts::create::<UR, PR, CR, MR>),
        )
        .route(
            "/post/{id}",
            get(posts::get::<UR, PR, CR, MR>).put(posts::update::<UR, PR, CR, MR>),
        )
        // Categories
        .route("/category", post(categories::create::<UR, PR, CR, MR>))
        // Comments
        .route(
            "/comment",
            get(comments::list::<UR, PR, CR, MR>).post(comments::create::<UR, PR, CR, MR>),
        )
}

/// Parse a path segment into a typed id, rejecting anything non-numeric.
fn parse_id<T: FromStr>(entity: &'static str, raw: &str) -> Result<T, ApiError> {
    raw.parse().map_err(|_| {
        ValidationError::InvalidId {
            entity,
            value: raw.to_string(),
        }
        .into()
    })
}
