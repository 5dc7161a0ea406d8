//! Image table handlers (`/api/*`).

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use caseforge_core::image::{DeleteFavoriteRequest, DeleteFavoriteResponse, SaveFavoriteRequest};

use crate::{handlers::AppError, state::AppState};

/// List all images, newest first (GET /api/images, GET /api/get-images).
///
/// Repository failures are reported with a fixed message.
pub async fn list_images(State(state): State<AppState>) -> Response {
    match state.image_repo.list_images().await {
        Ok(images) => Json(images).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list images");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "Failed to fetch images" })),
            )
                .into_response()
        }
    }
}

/// Save an image, or refresh the description of an already saved URL
/// (POST /api/save_favorite).
pub async fn save_favorite(
    State(state): State<AppState>,
    payload: Result<Json<SaveFavoriteRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload?;
    request.validate()?;

    let image = state
        .image_repo
        .upsert_image(&request.into_new_image())
        .await?;

    tracing::info!(image_id = image.id, url = %image.url, "Saved favorite");

    Ok((StatusCode::CREATED, Json(image)))
}

/// Delete every image with the given URL (POST /api/delete_favorite).
///
/// Deleting a URL that is not stored succeeds with `deleted: 0`.
pub async fn delete_favorite(
    State(state): State<AppState>,
    payload: Result<Json<DeleteFavoriteRequest>, JsonRejection>,
) -> Result<Json<DeleteFavoriteResponse>, AppError> {
    let Json(request) = payload?;
    request.validate()?;

    let deleted = state
        .image_repo
        .delete_images_by_url(&request.image_url)
        .await?;

    tracing::info!(url = %request.image_url, deleted, "Deleted favorite");

    Ok(Json(DeleteFavoriteResponse {
        status: "success".to_string(),
        deleted,
    }))
}
