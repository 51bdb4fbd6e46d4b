use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::citizens::CitizensService;
use crate::features::complaints::handlers::{self, ComplaintsState};
use crate::features::complaints::services::ComplaintsService;
use crate::shared::views::ViewEngine;

/// Create routes for the complaints feature (HTML pages and JSON API)
pub fn routes(
    complaints: Arc<dyn ComplaintsService>,
    citizens: Arc<dyn CitizensService>,
    views: Arc<ViewEngine>,
) -> Router {
    Router::new()
        .route("/complaints", get(handlers::index))
        .route("/complaints/details/{id}", get(handlers::details))
        .route(
            "/complaints/create",
            get(handlers::create).post(handlers::create_post),
        )
        .route(
            "/complaints/edit/{id}",
            get(handlers::edit).post(handlers::edit_post),
        )
        .route(
            "/complaints/delete/{id}",
            get(handlers::delete).post(handlers::delete_confirmed),
        )
        .route(
            "/api/complaints",
            get(handlers::list_complaints).post(handlers::create_complaint),
        )
        .route(
            "/api/complaints/{id}",
            get(handlers::get_complaint)
                .put(handlers::update_complaint)
                .delete(handlers::delete_complaint),
        )
        .with_state(ComplaintsState::new(complaints, citizens, views))
}
