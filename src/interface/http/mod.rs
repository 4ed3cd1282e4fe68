pub mod problem;
pub mod products_handler;
pub mod reviews_handler;
pub mod stats_handler;
pub mod users_handler;
