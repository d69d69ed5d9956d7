//! JSON REST handlers for categories.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use quill_app::ports::{CategoryRepository, CommentRepository, PostRepository, UserRepository};
use quill_domain::category::NewCategory;

use crate::error::ApiError;
use crate::state::AppState;
use crate::views::CategoryView;

/// Request body for creating a category.
#[derive(Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<CategoryView>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `POST /category`
pub async fn create<UR, PR, CR, MR>(
    State(state): State<AppState<UR, PR, CR, MR>>,
    payload: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PostRepository + Send + Sync + 'static,
    CR: CategoryRepository + Send + Sync + 'static,
    MR: CommentRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let created = state
        .category_service
        .create_category(NewCategory::new(req.name))
        .await?;
    Ok(CreateResponse::Created(Json(created.into())))
}
