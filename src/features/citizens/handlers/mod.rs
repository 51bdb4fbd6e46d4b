pub mod citizen_api_handler;
pub mod citizen_handler;

use std::sync::Arc;

use crate::features::citizens::controllers::CitizensController;
use crate::features::citizens::services::CitizensService;
use crate::shared::views::ViewEngine;

pub use citizen_api_handler::*;
pub use citizen_handler::*;

/// Shared state for the citizen pages and API
#[derive(Clone)]
pub struct CitizensState {
    pub controller: CitizensController,
    pub service: Arc<dyn CitizensService>,
    pub views: Arc<ViewEngine>,
}

impl CitizensState {
    pub fn new(service: Arc<dyn CitizensService>, views: Arc<ViewEngine>) -> Self {
        Self {
            controller: CitizensController::new(Arc::clone(&service)),
            service,
            views,
        }
    }
}
