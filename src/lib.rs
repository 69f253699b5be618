use axum::{middleware, routing::get, Router};

pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod logging;

pub fn build_app() -> Router {
    Router::new()
        .route("/", get(http::handlers::usage))
        .route("/health", get(http::handlers::health))
        .route("/api/v1/calculate", get(http::handlers::calculate))
        .layer(middleware::from_fn(logging::request_logging_middleware))
}
