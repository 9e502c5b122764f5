pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::feedback::handlers as feedback_handlers;
use crate::recommend::handlers as recommend_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Recommendation API
        .route(
            "/api/v1/recommendations",
            post(recommend_handlers::handle_recommendations),
        )
        // Feedback API
        .route(
            "/api/v1/feedback",
            post(feedback_handlers::handle_submit_feedback)
                .get(feedback_handlers::handle_list_feedback),
        )
        .with_state(state)
}
