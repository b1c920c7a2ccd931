use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::searcher::Searcher;

pub mod errors;
pub mod handlers;
pub mod models;

pub fn create_router(searcher: Arc<Searcher>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root_handler))
        .route("/search/", post(handlers::search_handler))
        .route("/search", post(handlers::search_handler))
        .with_state(searcher)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
