pub mod complaint_api_handler;
pub mod complaint_handler;

use std::sync::Arc;

use crate::features::citizens::CitizensService;
use crate::features::complaints::controllers::ComplaintsController;
use crate::features::complaints::services::ComplaintsService;
use crate::shared::views::ViewEngine;

pub use complaint_api_handler::*;
pub use complaint_handler::*;

/// Shared state for the complaint pages and API
#[derive(Clone)]
pub struct ComplaintsState {
    pub controller: ComplaintsController,
    pub service: Arc<dyn ComplaintsService>,
    pub views: Arc<ViewEngine>,
}

impl ComplaintsState {
    pub fn new(
        service: Arc<dyn ComplaintsService>,
        citizens: Arc<dyn CitizensService>,
        views: Arc<ViewEngine>,
    ) -> Self {
        Self {
            controller: ComplaintsController::new(Arc::clone(&service), citizens),
            service,
            views,
        }
    }
}
