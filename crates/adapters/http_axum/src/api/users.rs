//! JSON REST handlers for users.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use quill_app::ports::{CategoryRepository, CommentRepository, PostRepository, UserRepository};
use quill_domain::id::UserId;
use quill_domain::user::NewUser;

use super::parse_id;
use crate::error::ApiError;
use crate::state::AppState;
use crate::views::UserView;

/// Request body for creating a user.
#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub description: String,
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<UserView>),
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
    Created(Json<UserView>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `POST /user`
pub async fn create<UR, PR, CR, MR>(
    State(state): State<AppState<UR, PR, CR, MR>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PostRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
    MR: CommentRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let user = NewUser::new(req.name, req.email, req.description);
    let created = state.user_service.create_user(user).await?;
    Ok(CreateResponse::Created(Json(created.into())))
}

/// `GET /user/{id}`
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
    let user_id: UserId = parse_id("User", &id)?;
    let user = state.user_service.get_user(user_id).await?;
    Ok(GetResponse::Ok(Json(user.into())))
}
