use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        feedback::{list_feedback, submit_feedback},
        health::{livez, readyz},
        images::{delete_favorite, list_images, save_favorite},
        inference::{generate_image, refine_prompt},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// Model-backed routes answer 408 after `inference_timeout`, every other
/// route after `request_timeout`.
pub fn create_app(
    state: AppState,
    request_timeout: Duration,
    inference_timeout: Duration,
) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    // Image table routes
    let api_routes = Router::new()
        .route("/images", get(list_images))
        .route("/get-images", get(list_images))
        .route("/save_favorite", post(save_favorite))
        .route("/delete_favorite", post(delete_favorite));

    let routes = Router::new()
        .nest("/api", api_routes)
        .route("/submit-feedback", post(submit_feedback))
        .route("/feedback", get(list_feedback))
        // Probes
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .layer(timeout_layer(request_timeout));

    // Inference gateway routes
    let inference_routes = Router::new()
        .route("/refine-prompt", post(refine_prompt))
        .route("/generate-image", post(generate_image))
        .layer(timeout_layer(inference_timeout));

    routes
        .merge(inference_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}
