//! JSON API for the citizen registry

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::citizens::handlers::CitizensState;
use crate::features::citizens::models::Citizen;
use crate::shared::types::{ApiResponse, Meta, SearchQuery};
use crate::shared::views::{apply_update, ModelState, UpdateOutcome};

fn citizen_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Citizen with id {} not found", id))
}

fn validate(citizen: &Citizen) -> Result<()> {
    let model_state = ModelState::validate(citizen);
    if model_state.is_valid() {
        Ok(())
    } else {
        Err(AppError::Validation(model_state.messages()))
    }
}

/// List citizens, optionally filtered by name
#[utoipa::path(
    get,
    path = "/api/citizens",
    params(SearchQuery),
    responses(
        (status = 200, description = "List of citizens", body = ApiResponse<Vec<Citizen>>),
    ),
    tag = "citizens"
)]
pub async fn list_citizens(
    State(state): State<CitizensState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<Citizen>>>> {
    let citizens = match query.term() {
        Some(name) => state.service.search_by_name(name).await?,
        None => state.service.get_all().await?,
    };
    let total = citizens.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(citizens),
        None,
        Some(Meta { total }),
    )))
}

/// Get a citizen by ID
#[utoipa::path(
    get,
    path = "/api/citizens/{id}",
    params(
        ("id" = i32, Path, description = "Citizen ID")
    ),
    responses(
        (status = 200, description = "Citizen found", body = ApiResponse<Citizen>),
        (status = 404, description = "Citizen not found")
    ),
    tag = "citizens"
)]
pub async fn get_citizen(
    State(state): State<CitizensState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Citizen>>> {
    let citizen = state
        .service
        .get_by_id(id)
        .await?
        .ok_or_else(|| citizen_not_found(id))?;

    Ok(Json(ApiResponse::success(Some(citizen), None, None)))
}

/// Register a citizen
#[utoipa::path(
    post,
    path = "/api/citizens",
    request_body = Citizen,
    responses(
        (status = 201, description = "Citizen registered"),
        (status = 400, description = "Validation error")
    ),
    tag = "citizens"
)]
pub async fn create_citizen(
    State(state): State<CitizensState>,
    AppJson(citizen): AppJson<Citizen>,
) -> Result<(StatusCode, Json<ApiResponse<()>>)> {
    validate(&citizen)?;

    state.service.create(&citizen).await?;
    tracing::info!("Citizen created via API: {}", citizen.full_name);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            None,
            Some("Citizen registered".to_string()),
            None,
        )),
    ))
}

/// Update a citizen; the body's `citizen_id` must match the path
#[utoipa::path(
    put,
    path = "/api/citizens/{id}",
    params(
        ("id" = i32, Path, description = "Citizen ID")
    ),
    request_body = Citizen,
    responses(
        (status = 200, description = "Citizen updated", body = ApiResponse<Citizen>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Citizen not found")
    ),
    tag = "citizens"
)]
pub async fn update_citizen(
    State(state): State<CitizensState>,
    Path(id): Path<i32>,
    AppJson(citizen): AppJson<Citizen>,
) -> Result<Json<ApiResponse<Citizen>>> {
    let model_state = ModelState::validate(&citizen);
    let outcome = apply_update(id, citizen.citizen_id, &model_state, || {
        state.service.update(&citizen)
    })
    .await?;

    match outcome {
        UpdateOutcome::IdMismatch | UpdateOutcome::Missing => Err(citizen_not_found(id)),
        UpdateOutcome::Invalid => Err(AppError::Validation(model_state.messages())),
        UpdateOutcome::Updated => {
            tracing::info!("Citizen updated via API: id={}", id);
            Ok(Json(ApiResponse::success(Some(citizen), None, None)))
        }
    }
}

/// Delete a citizen and, through the foreign key, their complaints
#[utoipa::path(
    delete,
    path = "/api/citizens/{id}",
    params(
        ("id" = i32, Path, description = "Citizen ID")
    ),
    responses(
        (status = 200, description = "Citizen deleted"),
        (status = 404, description = "Citizen not found")
    ),
    tag = "citizens"
)]
pub async fn delete_citizen(
    State(state): State<CitizensState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>> {
    if !state.service.delete(id).await? {
        return Err(citizen_not_found(id));
    }

    tracing::info!("Citizen deleted via API: id={}", id);
    Ok(Json(ApiResponse::success(None, None, None)))
}
