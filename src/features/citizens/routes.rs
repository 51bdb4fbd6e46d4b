use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::citizens::handlers::{self, CitizensState};
use crate::features::citizens::services::CitizensService;
use crate::shared::views::ViewEngine;

/// Create routes for the citizens feature (HTML pages and JSON API)
pub fn routes(service: Arc<dyn CitizensService>, views: Arc<ViewEngine>) -> Router {
    Router::new()
        .route("/citizens", get(handlers::index))
        .route("/citizens/details/{id}", get(handlers::details))
        .route(
            "/citizens/create",
            get(handlers::create).post(handlers::create_post),
        )
        .route(
            "/citizens/edit/{id}",
            get(handlers::edit).post(handlers::edit_post),
        )
        .route(
            "/citizens/delete/{id}",
            get(handlers::delete).post(handlers::delete_confirmed),
        )
        .route(
            "/api/citizens",
            get(handlers::list_citizens).post(handlers::create_citizen),
        )
        .route(
            "/api/citizens/{id}",
            get(handlers::get_citizen)
                .put(handlers::update_citizen)
                .delete(handlers::delete_citizen),
        )
        .with_state(CitizensState::new(service, views))
}
