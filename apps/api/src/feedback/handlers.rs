//! Axum route handlers for the Feedback API.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::feedback::store::{append_feedback, list_feedback};
use crate::models::feedback::FeedbackRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmitFeedbackRequest {
    pub domain: String,
    pub rating: i64,
    pub comment: String,
}

/// Bounds check for the star-scale rating.
pub fn validate_rating(rating: i64) -> Result<(), AppError> {
    if (1..=5).contains(&rating) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "rating must be between 1 and 5, got {rating}"
        )))
    }
}

/// POST /api/v1/feedback
///
/// Appends one feedback record for a recommended domain. The domain is
/// stored as submitted; only the rating is validated.
pub async fn handle_submit_feedback(
    State(state): State<AppState>,
    Json(request): Json<SubmitFeedbackRequest>,
) -> Result<(StatusCode, Json<FeedbackRow>), AppError> {
    validate_rating(request.rating)?;

    let id = append_feedback(&state.db, &request.domain, request.rating, &request.comment).await?;
    info!("Recorded feedback {id} for domain {:?}", request.domain);

    Ok((
        StatusCode::CREATED,
        Json(FeedbackRow {
            id,
            domain: request.domain,
            rating: request.rating,
            comment: request.comment,
        }),
    ))
}

/// GET /api/v1/feedback
///
/// Lists all recorded feedback, newest first.
pub async fn handle_list_feedback(
    State(state): State<AppState>,
) -> Result<Json<Vec<FeedbackRow>>, AppError> {
    let rows = list_feedback(&state.db).await?;
    Ok(Json(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratings_inside_bounds_pass() {
        for rating in 1..=5 {
            assert!(validate_rating(rating).is_ok());
        }
    }

    #[test]
    fn test_ratings_outside_bounds_are_validation_errors() {
        for rating in [0, 6, -1, 100] {
            assert!(matches!(
                validate_rating(rating),
                Err(AppError::Validation(_))
            ));
        }
    }
}
