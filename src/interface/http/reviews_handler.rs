use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{
    application::dto::{ListReviewsQueryRequest, ReviewResponse, UpdateReviewContentRequest},
    interface::http::problem::{ApiProblem, ApiResult},
    state::AppState,
};

pub async fn list_reviews(
    State(state): State<AppState>,
    Query(query): Query<ListReviewsQueryRequest>,
) -> ApiResult<Json<Vec<ReviewResponse>>> {
    let reviews = state
        .review_service
        .list_reviews(query)
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(reviews))
}

pub async fn update_review_content(
    State(state): State<AppState>,
    Path(review_id): Path<i64>,
    Json(request): Json<UpdateReviewContentRequest>,
) -> ApiResult<Json<ReviewResponse>> {
    let updated = state
        .review_service
        .update_content(review_id, request)
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(updated))
}

pub async fn delete_review(
    State(state): State<AppState>,
    Path(review_id): Path<i64>,
) -> ApiResult<Json<ReviewResponse>> {
    let deleted = state
        .review_service
        .delete_review(review_id)
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(deleted))
}
