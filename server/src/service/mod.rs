//! HTTP surface of the plant manager
//!
//! Four routes, each bound to one method (GET routes also answer HEAD).
//! Any other method on a known route answers `405`.
//! - endpoints: request handlers grouped by resource
//! - parsers: path ids and form bodies
//! - error: handler errors and their status mapping

mod endpoints;
mod error;
mod parsers;


use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::persistence::PlantRepository;
use error::ApiError;

/// Build the router over a shared repository.
pub fn router<R: PlantRepository + 'static>(repo: Arc<R>) -> Router {
    Router::new()
        .route(
            "/plants/",
            get(endpoints::list_plants::<R>).fallback(method_not_allowed),
        )
        .route(
            "/plants/new/",
            post(endpoints::create_plant::<R>).fallback(method_not_allowed),
        )
        .route(
            "/plants/{id}/",
            get(endpoints::plant_info::<R>).fallback(method_not_allowed),
        )
        .route(
            "/plants/log/{id}/",
            post(endpoints::add_plant_log::<R>).fallback(method_not_allowed),
        )
        .with_state(repo)
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
