//! JSON REST handlers for comments.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use quill_app::ports::{CategoryRepository, CommentRepository, PostRepository, UserRepository};
use quill_domain::comment::NewComment;

use crate::error::ApiError;
use crate::state::AppState;
use crate::views::CommentView;

/// Request body for creating a comment.
#[derive(Deserialize)]
pub struct CreateCommentRequest {
    pub title: String,
    pub body: String,
    pub upvote: i64,
    pub downvote: i64,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<CommentView>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<CommentView>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /comment`
pub async fn list<UR, PR, CR, MR>(
    State(state): State<AppState<UR, PR, CR, MR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PostRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
    MR: CommentRepository + Send + Sync + 'static,
{
    let comments = state.comment_service.list_comments().await?;
    Ok(ListResponse::Ok(Json(
        comments.into_iter().map(CommentView::from).collect(),
    )))
}

/// `POST /comment`
pub async fn create<UR, PR, CR, MR>(
    State(state): State<AppState<UR, PR, CR, MR>>,
    payload: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PostRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
    MR: CommentRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let comment = NewComment {
        title: req.title,
        body: req.body,
        upvote: req.upvote,
        downvote: req.downvote,
    };
    let created = state.comment_service.create_comment(comment).await?;
    Ok(CreateResponse::Created(Json(created.into())))
}
