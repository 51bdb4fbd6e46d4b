use std::sync::Arc;

use crate::core::error::Result;
use crate::features::citizens::models::Citizen;
use crate::features::citizens::services::CitizensService;
use crate::shared::constants::{INDEX_ACTION, VIEW_DATA_SEARCH};
use crate::shared::views::{apply_update, ActionResult, ModelState, UpdateOutcome, ViewData};

const INDEX_VIEW: &str = "citizens/index";
const DETAILS_VIEW: &str = "citizens/details";
const CREATE_VIEW: &str = "citizens/create";
const EDIT_VIEW: &str = "citizens/edit";
const DELETE_VIEW: &str = "citizens/delete";

/// Request handling for the citizen registry pages
#[derive(Clone)]
pub struct CitizensController {
    service: Arc<dyn CitizensService>,
}

impl CitizensController {
    pub fn new(service: Arc<dyn CitizensService>) -> Self {
        Self { service }
    }

    /// List every citizen, or only those whose name matches `search_name`
    pub async fn index(&self, search_name: Option<&str>) -> Result<ActionResult<Vec<Citizen>>> {
        let term = search_name.map(str::trim).filter(|s| !s.is_empty());
        let citizens = match term {
            Some(name) => self.service.search_by_name(name).await?,
            None => self.service.get_all().await?,
        };

        let mut view_data = ViewData::default();
        if let Some(term) = term {
            view_data.insert(VIEW_DATA_SEARCH, term);
        }

        Ok(ActionResult::view(INDEX_VIEW, citizens).with_view_data(view_data))
    }

    pub async fn details(&self, id: i32) -> Result<ActionResult<Citizen>> {
        Ok(match self.service.get_by_id(id).await? {
            Some(citizen) => ActionResult::view(DETAILS_VIEW, citizen),
            None => ActionResult::NotFound,
        })
    }

    pub fn create(&self) -> ActionResult<Citizen> {
        ActionResult::empty_view(CREATE_VIEW)
    }

    pub async fn create_post(
        &self,
        citizen: Citizen,
        model_state: &ModelState,
    ) -> Result<ActionResult<Citizen>> {
        if !model_state.is_valid() {
            return Ok(ActionResult::view(CREATE_VIEW, citizen)
                .with_view_data(ViewData::default().with_model_state(model_state)));
        }

        self.service.create(&citizen).await?;
        tracing::info!("Citizen created: {}", citizen.full_name);

        Ok(ActionResult::redirect_to_action(INDEX_ACTION))
    }

    pub async fn edit(&self, id: i32) -> Result<ActionResult<Citizen>> {
        Ok(match self.service.get_by_id(id).await? {
            Some(citizen) => ActionResult::view(EDIT_VIEW, citizen),
            None => ActionResult::NotFound,
        })
    }

    pub async fn edit_post(
        &self,
        id: i32,
        citizen: Citizen,
        model_state: &ModelState,
    ) -> Result<ActionResult<Citizen>> {
        let outcome = apply_update(id, citizen.citizen_id, model_state, || {
            self.service.update(&citizen)
        })
        .await?;

        Ok(match outcome {
            UpdateOutcome::IdMismatch | UpdateOutcome::Missing => ActionResult::NotFound,
            UpdateOutcome::Invalid => ActionResult::view(EDIT_VIEW, citizen)
                .with_view_data(ViewData::default().with_model_state(model_state)),
            UpdateOutcome::Updated => {
                tracing::info!("Citizen updated: id={}", id);
                ActionResult::redirect_to_action(INDEX_ACTION)
            }
        })
    }

    pub async fn delete(&self, id: i32) -> Result<ActionResult<Citizen>> {
        Ok(match self.service.get_by_id(id).await? {
            Some(citizen) => ActionResult::view(DELETE_VIEW, citizen),
            None => ActionResult::NotFound,
        })
    }

    /// Delete and return to the list. A delete that affected nothing is only
    /// logged: the citizen is gone either way.
    pub async fn delete_confirmed(&self, id: i32) -> Result<ActionResult<Citizen>> {
        if self.service.delete(id).await? {
            tracing::info!("Citizen deleted: id={}", id);
        } else {
            tracing::warn!("Delete requested for unknown citizen: id={}", id);
        }

        Ok(ActionResult::redirect_to_action(INDEX_ACTION))
    }
}
