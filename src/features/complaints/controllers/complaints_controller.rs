use std::sync::Arc;

use crate::core::error::Result;
use crate::features::citizens::{Citizen, CitizensService};
use crate::features::complaints::models::Complaint;
use crate::features::complaints::services::ComplaintsService;
use crate::shared::constants::{INDEX_ACTION, VIEW_DATA_CITIZEN_ID, VIEW_DATA_SEARCH};
use crate::shared::views::{
    apply_update, ActionResult, ModelState, SelectList, UpdateOutcome, ViewData,
};

const INDEX_VIEW: &str = "complaints/index";
const DETAILS_VIEW: &str = "complaints/details";
const CREATE_VIEW: &str = "complaints/create";
const EDIT_VIEW: &str = "complaints/edit";
const DELETE_VIEW: &str = "complaints/delete";

/// Request handling for the complaint pages.
///
/// Forms need the citizen registry to offer a "filed by" selection, so the
/// controller also holds the citizens service.
#[derive(Clone)]
pub struct ComplaintsController {
    complaints: Arc<dyn ComplaintsService>,
    citizens: Arc<dyn CitizensService>,
}

impl ComplaintsController {
    pub fn new(
        complaints: Arc<dyn ComplaintsService>,
        citizens: Arc<dyn CitizensService>,
    ) -> Self {
        Self {
            complaints,
            citizens,
        }
    }

    /// View data carrying the citizen select list, `selected` pre-chosen
    async fn citizen_options(&self, selected: Option<i32>) -> Result<ViewData> {
        let citizens = self.citizens.get_all().await?;
        let options = SelectList::new(
            citizens,
            |c: &Citizen| c.citizen_id.to_string(),
            |c: &Citizen| c.full_name.clone(),
            selected.map(|id| id.to_string()),
        );

        let mut view_data = ViewData::default();
        view_data.insert(VIEW_DATA_CITIZEN_ID, options);
        Ok(view_data)
    }

    /// Redisplay a rejected form with its data, errors and the select list
    async fn redisplay(
        &self,
        view_name: &'static str,
        complaint: Complaint,
        model_state: &ModelState,
    ) -> Result<ActionResult<Complaint>> {
        let view_data = self
            .citizen_options(Some(complaint.citizen_id))
            .await?
            .with_model_state(model_state);

        Ok(ActionResult::view(view_name, complaint).with_view_data(view_data))
    }

    /// List every complaint, or only those whose title matches `search_title`
    pub async fn index(&self, search_title: Option<&str>) -> Result<ActionResult<Vec<Complaint>>> {
        let term = search_title.map(str::trim).filter(|s| !s.is_empty());
        let complaints = match term {
            Some(title) => self.complaints.search_by_title(title).await?,
            None => self.complaints.get_all().await?,
        };

        let mut view_data = ViewData::default();
        if let Some(term) = term {
            view_data.insert(VIEW_DATA_SEARCH, term);
        }

        Ok(ActionResult::view(INDEX_VIEW, complaints).with_view_data(view_data))
    }

    pub async fn details(&self, id: i32) -> Result<ActionResult<Complaint>> {
        Ok(match self.complaints.get_by_id(id).await? {
            Some(complaint) => ActionResult::view(DETAILS_VIEW, complaint),
            None => ActionResult::NotFound,
        })
    }

    pub async fn create(&self) -> Result<ActionResult<Complaint>> {
        let view_data = self.citizen_options(None).await?;
        Ok(ActionResult::empty_view(CREATE_VIEW).with_view_data(view_data))
    }

    pub async fn create_post(
        &self,
        complaint: Complaint,
        model_state: &ModelState,
    ) -> Result<ActionResult<Complaint>> {
        if !model_state.is_valid() {
            return self.redisplay(CREATE_VIEW, complaint, model_state).await;
        }

        self.complaints.create(&complaint).await?;
        tracing::info!(
            "Complaint created: citizen_id={}, title={}",
            complaint.citizen_id,
            complaint.title
        );

        Ok(ActionResult::redirect_to_action(INDEX_ACTION))
    }

    pub async fn edit(&self, id: i32) -> Result<ActionResult<Complaint>> {
        let Some(complaint) = self.complaints.get_by_id(id).await? else {
            return Ok(ActionResult::NotFound);
        };

        let view_data = self.citizen_options(Some(complaint.citizen_id)).await?;
        Ok(ActionResult::view(EDIT_VIEW, complaint).with_view_data(view_data))
    }

    pub async fn edit_post(
        &self,
        id: i32,
        complaint: Complaint,
        model_state: &ModelState,
    ) -> Result<ActionResult<Complaint>> {
        let outcome = apply_update(id, complaint.complaint_id, model_state, || {
            self.complaints.update(&complaint)
        })
        .await?;

        match outcome {
            UpdateOutcome::IdMismatch | UpdateOutcome::Missing => Ok(ActionResult::NotFound),
            UpdateOutcome::Invalid => self.redisplay(EDIT_VIEW, complaint, model_state).await,
            UpdateOutcome::Updated => {
                tracing::info!("Complaint updated: id={}", id);
                Ok(ActionResult::redirect_to_action(INDEX_ACTION))
            }
        }
    }

    pub async fn delete(&self, id: i32) -> Result<ActionResult<Complaint>> {
        Ok(match self.complaints.get_by_id(id).await? {
            Some(complaint) => ActionResult::view(DELETE_VIEW, complaint),
            None => ActionResult::NotFound,
        })
    }

    pub async fn delete_confirmed(&self, id: i32) -> Result<ActionResult<Complaint>> {
        if !self.complaints.delete(id).await? {
            return Ok(ActionResult::NotFound);
        }

        tracing::info!("Complaint deleted: id={}", id);
        Ok(ActionResult::redirect_to_action(INDEX_ACTION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::VIEW_DATA_ERRORS;
    use crate::shared::test_helpers::{
        sample_citizens, FakeCitizens, FakeComplaints, ServiceCall,
    };
    use crate::shared::views::action::RedirectToAction;
    use serde_json::json;

    struct Fixture {
        complaints: Arc<FakeComplaints>,
        citizens: Arc<FakeCitizens>,
        controller: ComplaintsController,
    }

    fn fixture(complaints: FakeComplaints, citizens: FakeCitizens) -> Fixture {
        let complaints = complaints.into_arc();
        let citizens = citizens.into_arc();
        let controller = ComplaintsController::new(complaints.clone(), citizens.clone());
        Fixture {
            complaints,
            citizens,
            controller,
        }
    }

    fn invalid_state() -> ModelState {
        let mut state = ModelState::default();
        state.add_model_error("title", "Required");
        state
    }

    fn is_redirect_to_index(result: &ActionResult<Complaint>) -> bool {
        result.as_redirect()
            == Some(&RedirectToAction {
                action_name: "Index",
            })
    }

    #[tokio::test]
    async fn test_index_returns_view_with_complaints() {
        let f = fixture(
            FakeComplaints::with_records(vec![Complaint::new(1, 1, "Groapă pe strada Unirii")]),
            FakeCitizens::new(),
        );

        let result = f.controller.index(None).await.unwrap();

        let view = result.as_view().unwrap();
        assert_eq!(view.view_name, "complaints/index");
        assert_eq!(view.model.as_ref().unwrap().len(), 1);
        assert_eq!(f.complaints.calls(), vec![ServiceCall::GetAll]);
    }

    #[tokio::test]
    async fn test_index_searches_by_title() {
        let f = fixture(
            FakeComplaints::with_records(vec![
                Complaint::new(1, 1, "Groapă pe strada Unirii"),
                Complaint::new(2, 2, "Iluminat stradal defect"),
            ]),
            FakeCitizens::new(),
        );

        let result = f.controller.index(Some("iluminat")).await.unwrap();

        let model = result.as_view().unwrap().model.clone().unwrap();
        assert_eq!(model.len(), 1);
        assert_eq!(model[0].complaint_id, 2);
        assert_eq!(
            f.complaints.calls(),
            vec![ServiceCall::Search("iluminat".to_string())]
        );
    }

    #[tokio::test]
    async fn test_details_returns_not_found_when_complaint_is_missing() {
        let f = fixture(FakeComplaints::new(), FakeCitizens::new());

        let result = f.controller.details(1).await.unwrap();

        assert!(result.is_not_found());
    }

    #[tokio::test]
    async fn test_details_returns_view_when_complaint_exists() {
        let complaint = Complaint::new(1, 1, "Gunoi neridicat");
        let f = fixture(
            FakeComplaints::with_records(vec![complaint.clone()]),
            FakeCitizens::new(),
        );

        let result = f.controller.details(1).await.unwrap();

        assert_eq!(result.as_view().unwrap().model, Some(complaint));
    }

    #[tokio::test]
    async fn test_create_get_returns_view_with_citizen_select_list() {
        let f = fixture(
            FakeComplaints::new(),
            FakeCitizens::with_records(vec![Citizen::new(1, "Test")]),
        );

        let result = f.controller.create().await.unwrap();

        let view = result.as_view().unwrap();
        assert_eq!(view.view_name, "complaints/create");
        assert_eq!(
            view.view_data.get(VIEW_DATA_CITIZEN_ID),
            Some(&json!([{ "value": "1", "text": "Test", "selected": false }]))
        );
        assert_eq!(f.citizens.calls(), vec![ServiceCall::GetAll]);
    }

    #[tokio::test]
    async fn test_create_post_invalid_model_returns_view_with_data() {
        let f = fixture(FakeComplaints::new(), FakeCitizens::with_records(sample_citizens()));
        let complaint = Complaint::new(0, 1, "");

        let result = f
            .controller
            .create_post(complaint.clone(), &invalid_state())
            .await
            .unwrap();

        let view = result.as_view().unwrap();
        assert_eq!(view.model, Some(complaint));
        assert!(view.view_data.contains_key(VIEW_DATA_CITIZEN_ID));
        assert!(view.view_data.contains_key(VIEW_DATA_ERRORS));
        let options = view.view_data.get(VIEW_DATA_CITIZEN_ID).unwrap();
        assert_eq!(options[0]["selected"], json!(true));
        assert_eq!(f.complaints.write_calls(), 0);
    }

    #[tokio::test]
    async fn test_create_post_valid_model_redirects_to_index() {
        let f = fixture(FakeComplaints::new(), FakeCitizens::new());
        let complaint = Complaint::new(1, 1, "Zgomot nocturn");

        let result = f
            .controller
            .create_post(complaint.clone(), &ModelState::default())
            .await
            .unwrap();

        assert!(is_redirect_to_index(&result));
        assert_eq!(f.complaints.calls(), vec![ServiceCall::Create(complaint)]);
        assert!(f.citizens.calls().is_empty());
    }

    #[tokio::test]
    async fn test_edit_get_returns_not_found_when_complaint_is_missing() {
        let f = fixture(FakeComplaints::new(), FakeCitizens::new());

        let result = f.controller.edit(1).await.unwrap();

        assert!(result.is_not_found());
        assert!(f.citizens.calls().is_empty());
    }

    #[tokio::test]
    async fn test_edit_get_returns_view_with_citizen_list() {
        let complaint = Complaint::new(1, 2, "Trotuar degradat");
        let f = fixture(
            FakeComplaints::with_records(vec![complaint.clone()]),
            FakeCitizens::with_records(vec![Citizen::new(2, "Test")]),
        );

        let result = f.controller.edit(1).await.unwrap();

        let view = result.as_view().unwrap();
        assert_eq!(view.view_name, "complaints/edit");
        assert_eq!(view.model, Some(complaint));
        assert_eq!(
            view.view_data.get(VIEW_DATA_CITIZEN_ID),
            Some(&json!([{ "value": "2", "text": "Test", "selected": true }]))
        );
    }

    #[tokio::test]
    async fn test_edit_post_id_mismatch_returns_not_found() {
        let f = fixture(FakeComplaints::new(), FakeCitizens::new());

        let result = f
            .controller
            .edit_post(1, Complaint::new(2, 1, "x"), &ModelState::default())
            .await
            .unwrap();

        assert!(result.is_not_found());
        assert!(f.complaints.calls().is_empty());
    }

    #[tokio::test]
    async fn test_edit_post_invalid_model_returns_view() {
        let f = fixture(FakeComplaints::new(), FakeCitizens::new());
        let complaint = Complaint::new(1, 1, "");

        let result = f
            .controller
            .edit_post(1, complaint.clone(), &invalid_state())
            .await
            .unwrap();

        let view = result.as_view().unwrap();
        assert_eq!(view.view_name, "complaints/edit");
        assert_eq!(view.model, Some(complaint));
        assert!(view.view_data.contains_key(VIEW_DATA_CITIZEN_ID));
        assert_eq!(f.complaints.write_calls(), 0);
    }

    #[tokio::test]
    async fn test_edit_post_failed_update_returns_not_found() {
        let f = fixture(
            FakeComplaints::new().with_update_outcome(false),
            FakeCitizens::new(),
        );

        let result = f
            .controller
            .edit_post(1, Complaint::new(1, 1, "x"), &ModelState::default())
            .await
            .unwrap();

        assert!(result.is_not_found());
    }

    #[tokio::test]
    async fn test_edit_post_successful_update_redirects_to_index() {
        let f = fixture(
            FakeComplaints::new().with_update_outcome(true),
            FakeCitizens::new(),
        );

        let result = f
            .controller
            .edit_post(1, Complaint::new(1, 1, "x"), &ModelState::default())
            .await
            .unwrap();

        assert!(is_redirect_to_index(&result));
    }

    #[tokio::test]
    async fn test_delete_get_returns_not_found_when_complaint_is_missing() {
        let f = fixture(FakeComplaints::new(), FakeCitizens::new());

        let result = f.controller.delete(1).await.unwrap();

        assert!(result.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_get_returns_view_when_complaint_exists() {
        let complaint = Complaint::new(1, 1, "x");
        let f = fixture(
            FakeComplaints::with_records(vec![complaint.clone()]),
            FakeCitizens::new(),
        );

        let result = f.controller.delete(1).await.unwrap();

        let view = result.as_view().unwrap();
        assert_eq!(view.view_name, "complaints/delete");
        assert_eq!(view.model, Some(complaint));
    }

    #[tokio::test]
    async fn test_delete_confirmed_failed_deletion_returns_not_found() {
        let f = fixture(
            FakeComplaints::new().with_delete_outcome(false),
            FakeCitizens::new(),
        );

        let result = f.controller.delete_confirmed(1).await.unwrap();

        assert!(result.is_not_found());
        assert_eq!(f.complaints.calls(), vec![ServiceCall::Delete(1)]);
    }

    #[tokio::test]
    async fn test_delete_confirmed_successful_deletion_redirects_to_index() {
        let f = fixture(
            FakeComplaints::new().with_delete_outcome(true),
            FakeCitizens::new(),
        );

        let result = f.controller.delete_confirmed(1).await.unwrap();

        assert!(is_redirect_to_index(&result));
    }
}
