//! HTTP surface: one GET endpoint backed by [`ClassifierService`].

pub mod error;
pub mod handlers;

use crate::core::service::ClassifierService;
use crate::core::FactProvider;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub const CLASSIFY_PATH: &str = "/api/classify-number";

pub fn router<F: FactProvider + 'static>(service: Arc<ClassifierService<F>>) -> Router {
    Router::new()
        .route(CLASSIFY_PATH, get(handlers::classify_number::<F>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(service)
}
