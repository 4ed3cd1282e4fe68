use std::sync::Arc;

use crate::{
    application::{
        catalog_service::CatalogService, review_service::ReviewService,
        stats_service::StatsService, user_service::UserService,
    },
    infrastructure::memory::MemoryStore,
};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub catalog_service: Arc<CatalogService>,
    pub review_service: Arc<ReviewService>,
    pub stats_service: Arc<StatsService>,
}

impl AppState {
    /// Wires every service to one shared gateway handle.
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self {
            user_service: Arc::new(UserService::new(store.clone())),
            catalog_service: Arc::new(CatalogService::new(store.clone())),
            review_service: Arc::new(ReviewService::new(
                store.clone(),
                store.clone(),
                store.clone(),
            )),
            stats_service: Arc::new(StatsService::new(store.clone(), store.clone(), store)),
        }
    }
}
