//! HTML pages for complaint management

use axum::{
    extract::{Path, Query, State},
    response::Response,
};
use serde::Deserialize;

use crate::core::error::Result;
use crate::core::extractor::AppForm;
use crate::features::complaints::handlers::ComplaintsState;
use crate::features::complaints::models::Complaint;
use crate::shared::views::ModelState;

/// Route prefix the pages are mounted under
pub const CONTROLLER: &str = "complaints";

#[derive(Debug, Deserialize)]
pub struct ComplaintIndexQuery {
    pub search_title: Option<String>,
}

pub async fn index(
    State(state): State<ComplaintsState>,
    Query(query): Query<ComplaintIndexQuery>,
) -> Result<Response> {
    let result = state.controller.index(query.search_title.as_deref()).await?;
    Ok(state.views.respond(CONTROLLER, result)?)
}

pub async fn details(
    State(state): State<ComplaintsState>,
    Path(id): Path<i32>,
) -> Result<Response> {
    let result = state.controller.details(id).await?;
    Ok(state.views.respond(CONTROLLER, result)?)
}

pub async fn create(State(state): State<ComplaintsState>) -> Result<Response> {
    let result = state.controller.create().await?;
    Ok(state.views.respond(CONTROLLER, result)?)
}

pub async fn create_post(
    State(state): State<ComplaintsState>,
    AppForm(complaint): AppForm<Complaint>,
) -> Result<Response> {
    let model_state = ModelState::validate(&complaint);
    let result = state.controller.create_post(complaint, &model_state).await?;
    Ok(state.views.respond(CONTROLLER, result)?)
}

pub async fn edit(State(state): State<ComplaintsState>, Path(id): Path<i32>) -> Result<Response> {
    let result = state.controller.edit(id).await?;
    Ok(state.views.respond(CONTROLLER, result)?)
}

pub async fn edit_post(
    State(state): State<ComplaintsState>,
    Path(id): Path<i32>,
    AppForm(complaint): AppForm<Complaint>,
) -> Result<Response> {
    let model_state = ModelState::validate(&complaint);
    let result = state.controller.edit_post(id, complaint, &model_state).await?;
    Ok(state.views.respond(CONTROLLER, result)?)
}

pub async fn delete(State(state): State<ComplaintsState>, Path(id): Path<i32>) -> Result<Response> {
    let result = state.controller.delete(id).await?;
    Ok(state.views.respond(CONTROLLER, result)?)
}

pub async fn delete_confirmed(
    State(state): State<ComplaintsState>,
    Path(id): Path<i32>,
) -> Result<Response> {
    let result = state.controller.delete_confirmed(id).await?;
    Ok(state.views.respond(CONTROLLER, result)?)
}
