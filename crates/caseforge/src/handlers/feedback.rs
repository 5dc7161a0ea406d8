//! Feedback handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};

use caseforge_core::feedback::{FeedbackQuery, FeedbackRecord, FeedbackRequest, StatusResponse};

use crate::{handlers::AppError, state::AppState};

/// Store feedback on an image (POST /submit-feedback).
pub async fn submit_feedback(
    State(state): State<AppState>,
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, AppError> {
    let Json(request) = payload?;
    request.validate()?;

    let record = request.into_record();
    state.feedback_repo.put_feedback(&record).await?;

    tracing::info!(
        feedback_id = %record.id,
        image_url = %record.image_url,
        rating = record.rating,
        "Stored feedback"
    );

    Ok(Json(StatusResponse::success("Feedback saved to DynamoDB")))
}

/// List feedback for one image, oldest first (GET /feedback?image_url=...).
pub async fn list_feedback(
    State(state): State<AppState>,
    query: Result<Query<FeedbackQuery>, QueryRejection>,
) -> Result<Json<Vec<FeedbackRecord>>, AppError> {
    let Query(query) = query?;
    query.validate()?;

    let feedback = state.feedback_repo.list_feedback(&query.image_url).await?;
    Ok(Json(feedback))
}
