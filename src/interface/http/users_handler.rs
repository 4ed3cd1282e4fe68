use axum::{
    Json,
    extract::{Path, Query, State},
};
use uuid::Uuid;

use crate::{
    application::dto::{
        ApplyUserCommandRequest, HealthResponse, ListUsersQueryRequest, UserResponse,
    },
    domain::errors::DomainError,
    interface::http::problem::{ApiProblem, ApiResult},
    state::AppState,
};

pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQueryRequest>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state
        .user_service
        .list_users(query)
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(users))
}

pub async fn apply_user_command(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
    Json(request): Json<ApplyUserCommandRequest>,
) -> ApiResult<Json<UserResponse>> {
    let uuid = parse_uuid(&uuid)?;
    let updated = state
        .user_service
        .apply_lifecycle_command(uuid, request)
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(updated))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let uuid = parse_uuid(&uuid)?;
    let removed = state
        .user_service
        .delete_user(uuid)
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(removed))
}

pub(crate) fn parse_uuid(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| {
        ApiProblem::from_domain(DomainError::validation("id must be a valid UUID string"))
    })
}
