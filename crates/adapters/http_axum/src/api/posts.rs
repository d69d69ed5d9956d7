//! JSON REST handlers for posts.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use quill_app::ports::{CategoryRepository, CommentRepository, PostRepository, UserRepository};
use quill_domain::error::QuillError;
use quill_domain::id::PostId;
use quill_domain::post::NewPost;

use super::parse_id;
use crate::error::ApiError;
use crate::state::AppState;
use crate::views::PostView;

/// Request body for creating a post or replacing all of its fields.
#[derive(Deserialize)]
pub struct PostRequest {
    pub name: String,
    pub description: String,
    pub category: String,
    pub topic: String,
    pub body: String,
    pub tags: String,
}

impl TryFrom<PostRequest> for NewPost {
    type Error = QuillError;

    fn try_from(req: PostRequest) -> Result<Self, Self::Error> {
        NewPost::builder()
            .name(req.name)
            .description(req.description)
            .category(req.category)
            .topic(req.topic)
            .body(req.body)
            .tags(req.tags)
            .build()
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<PostView>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<PostView>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<PostView>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /post`
pub async fn list<UR, PR, CR, MR>(
    State(state): State<AppState<UR, PR, CR, MR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PostRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
    MR: CommentRepository + Send + Sync + 'static,
{
    let posts = state.post_service.list_posts().await?;
    Ok(ListResponse::Ok(Json(
        posts.into_iter().map(PostView::from).collect(),
    )))
}

/// `GET /post/{id}`
pub async fn get<UR, PR, CR, MR>(
    State(state): State<AppState<UR, PR, CR, MR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PostRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
    MR: CommentRepository + Send + Sync + 'static,
{
    let post_id: PostId = parse_id("Post", &id)?;
    let post = state.post_service.get_post(post_id).await?;
    Ok(GetResponse::Ok(Json(post.into())))
}

/// `POST /post`
pub async fn create<UR, PR, CR, MR>(
    State(state): State<AppState<UR, PR, CR, MR>>,
    payload: Result<Json<PostRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PostRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
    MR: CommentRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let post = NewPost::try_from(req)?;
    let created = state.post_service.create_post(post).await?;
    Ok(CreateResponse::Created(Json(created.into())))
}

/// `PUT /post/{id}`
pub async fn update<UR, PR, CR, MR>(
    State(state): State<AppState<UR, PR, CR, MR>>,
    Path(id): Path<String>,
    payload: Result<Json<PostRequest>, JsonRejection>,
) -> Result<GetResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PostRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
    MR: CommentRepository + Send + Sync + 'static,
{
    let post_id: PostId = parse_id("Post", &id)?;
    let Json(req) = payload?;
    let changes = NewPost::try_from(req)?;
    let updated = state.post_service.update_post(post_id, changes).await?;
    Ok(GetResponse::Ok(Json(updated.into())))
}
