use axum::{Json, extract::State};

use crate::{
    application::dto::{AverageRatingResponse, ReviewCountResponse, UserReviewCountResponse},
    interface::http::problem::{ApiProblem, ApiResult},
    state::AppState,
};

pub async fn review_counts(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ReviewCountResponse>>> {
    let counts = state
        .stats_service
        .review_counts()
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(counts))
}

pub async fn average_ratings(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<AverageRatingResponse>>> {
    let ratings = state
        .stats_service
        .average_ratings()
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(ratings))
}

pub async fn user_review_counts(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<UserReviewCountResponse>>> {
    let counts = state
        .stats_service
        .user_review_counts()
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(counts))
}
