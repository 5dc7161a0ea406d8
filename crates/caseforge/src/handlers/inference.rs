//! Inference gateway handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use caseforge_core::inference::{ImageResponse, PromptRequest, RefinedPrompt};

use crate::{handlers::AppError, state::AppState};

/// Refine a design prompt with the text model (POST /refine-prompt).
pub async fn refine_prompt(
    State(state): State<AppState>,
    payload: Result<Json<PromptRequest>, JsonRejection>,
) -> Result<Json<RefinedPrompt>, AppError> {
    let Json(request) = payload?;
    request.validate()?;

    let refined = state.gateway.refine_prompt(&request).await?;

    Ok(Json(refined))
}

/// Generate images and return their public URLs (POST /generate-image).
pub async fn generate_image(
    State(state): State<AppState>,
    payload: Result<Json<PromptRequest>, JsonRejection>,
) -> Result<Json<ImageResponse>, AppError> {
    let Json(request) = payload?;
    request.validate()?;

    let images = state.gateway.generate_images(&request).await?;

    Ok(Json(images))
}
