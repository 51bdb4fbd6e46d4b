//! HTML pages for the citizen registry

use axum::{
    extract::{Path, Query, State},
    response::Response,
};
use serde::Deserialize;

use crate::core::error::Result;
use crate::core::extractor::AppForm;
use crate::features::citizens::handlers::CitizensState;
use crate::features::citizens::models::Citizen;
use crate::shared::views::ModelState;

/// Route prefix the pages are mounted under
pub const CONTROLLER: &str = "citizens";

#[derive(Debug, Deserialize)]
pub struct CitizenIndexQuery {
    pub search_name: Option<String>,
}

pub async fn index(
    State(state): State<CitizensState>,
    Query(query): Query<CitizenIndexQuery>,
) -> Result<Response> {
    let result = state.controller.index(query.search_name.as_deref()).await?;
    Ok(state.views.respond(CONTROLLER, result)?)
}

pub async fn details(State(state): State<CitizensState>, Path(id): Path<i32>) -> Result<Response> {
    let result = state.controller.details(id).await?;
    Ok(state.views.respond(CONTROLLER, result)?)
}

pub async fn create(State(state): State<CitizensState>) -> Result<Response> {
    let result = state.controller.create();
    Ok(state.views.respond(CONTROLLER, result)?)
}

pub async fn create_post(
    State(state): State<CitizensState>,
    AppForm(citizen): AppForm<Citizen>,
) -> Result<Response> {
    let model_state = ModelState::validate(&citizen);
    let result = state.controller.create_post(citizen, &model_state).await?;
    Ok(state.views.respond(CONTROLLER, result)?)
}

pub async fn edit(State(state): State<CitizensState>, Path(id): Path<i32>) -> Result<Response> {
    let result = state.controller.edit(id).await?;
    Ok(state.views.respond(CONTROLLER, result)?)
}

pub async fn edit_post(
    State(state): State<CitizensState>,
    Path(id): Path<i32>,
    AppForm(citizen): AppForm<Citizen>,
) -> Result<Response> {
    let model_state = ModelState::validate(&citizen);
    let result = state.controller.edit_post(id, citizen, &model_state).await?;
    Ok(state.views.respond(CONTROLLER, result)?)
}

pub async fn delete(State(state): State<CitizensState>, Path(id): Path<i32>) -> Result<Response> {
    let result = state.controller.delete(id).await?;
    Ok(state.views.respond(CONTROLLER, result)?)
}

pub async fn delete_confirmed(
    State(state): State<CitizensState>,
    Path(id): Path<i32>,
) -> Result<Response> {
    let result = state.controller.delete_confirmed(id).await?;
    Ok(state.views.respond(CONTROLLER, result)?)
}
