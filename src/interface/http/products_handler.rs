use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    application::dto::{AddProductRequest, ProductResponse, UpdateProductRequest},
    interface::http::{
        problem::{ApiProblem, ApiResult},
        users_handler::parse_uuid,
    },
    state::AppState,
};

pub async fn list_products(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ProductResponse>>> {
    let products = state
        .catalog_service
        .list_products()
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(products))
}

pub async fn add_product(
    State(state): State<AppState>,
    Json(request): Json<AddProductRequest>,
) -> ApiResult<(StatusCode, Json<ProductResponse>)> {
    let created = state
        .catalog_service
        .add_product(request)
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateProductRequest>,
) -> ApiResult<Json<ProductResponse>> {
    let id = parse_uuid(&id)?;
    let updated = state
        .catalog_service
        .update_product(id, request)
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(updated))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProductResponse>> {
    let id = parse_uuid(&id)?;
    let removed = state
        .catalog_service
        .delete_product(id)
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(removed))
}
