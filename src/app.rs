use axum::{
    Router,
    http::{HeaderName, Method},
    routing::{delete, get, patch, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    interface::http::{
        products_handler::{add_product, delete_product, list_products, update_product},
        reviews_handler::{delete_review, list_reviews, update_review_content},
        stats_handler::{average_ratings, review_counts, user_review_counts},
        users_handler::{apply_user_command, delete_user, healthcheck, list_users},
    },
    state::AppState,
};

pub fn build_router(state: AppState) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .route("/health", get(healthcheck))
        .route("/api/v1/users", get(list_users))
        .route("/api/v1/users/{uuid}", delete(delete_user))
        .route("/api/v1/users/{uuid}/commands", post(apply_user_command))
        .route("/api/v1/products", get(list_products).post(add_product))
        .route(
            "/api/v1/products/{id}",
            patch(update_product).delete(delete_product),
        )
        .route("/api/v1/reviews", get(list_reviews))
        .route("/api/v1/reviews/{review_id}", delete(delete_review))
        .route(
            "/api/v1/reviews/{review_id}/content",
            patch(update_review_content),
        )
        .route("/api/v1/stats/review-counts", get(review_counts))
        .route("/api/v1/stats/average-ratings", get(average_ratings))
        .route("/api/v1/stats/user-review-counts", get(user_review_counts))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(
            // The dashboard SPA is served from another origin.
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ]),
        )
        .with_state(state)
}
