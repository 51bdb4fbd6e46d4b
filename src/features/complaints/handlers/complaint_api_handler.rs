//! JSON API for complaints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::complaints::handlers::ComplaintsState;
use crate::features::complaints::models::Complaint;
use crate::shared::types::{ApiResponse, Meta, SearchQuery};
use crate::shared::views::{apply_update, ModelState, UpdateOutcome};

fn complaint_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Complaint with id {} not found", id))
}

fn validate(complaint: &Complaint) -> Result<()> {
    let model_state = ModelState::validate(complaint);
    if !model_state.is_valid() {
        return Err(AppError::Validation(model_state.messages()));
    }
    Ok(())
}

/// List complaints, newest first, optionally filtered by title
#[utoipa::path(
    get,
    path = "/api/complaints",
    params(SearchQuery),
    responses(
        (status = 200, description = "List of complaints", body = ApiResponse<Vec<Complaint>>),
    ),
    tag = "complaints"
)]
pub async fn list_complaints(
    State(state): State<ComplaintsState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<Complaint>>>> {
    let complaints = match query.term() {
        Some(title) => state.service.search_by_title(title).await?,
        None => state.service.get_all().await?,
    };
    let total = complaints.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(complaints),
        None,
        Some(Meta { total }),
    )))
}

/// Get a complaint by ID
#[utoipa::path(
    get,
    path = "/api/complaints/{id}",
    params(
        ("id" = i32, Path, description = "Complaint ID")
    ),
    responses(
        (status = 200, description = "Complaint found", body = ApiResponse<Complaint>),
        (status = 404, description = "Complaint not found")
    ),
    tag = "complaints"
)]
pub async fn get_complaint(
    State(state): State<ComplaintsState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Complaint>>> {
    let complaint = state
        .service
        .get_by_id(id)
        .await?
        .ok_or_else(|| complaint_not_found(id))?;

    Ok(Json(ApiResponse::success(Some(complaint), None, None)))
}

/// File a complaint
#[utoipa::path(
    post,
    path = "/api/complaints",
    request_body = Complaint,
    responses(
        (status = 201, description = "Complaint filed"),
        (status = 400, description = "Validation error or unknown citizen")
    ),
    tag = "complaints"
)]
pub async fn create_complaint(
    State(state): State<ComplaintsState>,
    AppJson(complaint): AppJson<Complaint>,
) -> Result<(StatusCode, Json<ApiResponse<()>>)> {
    validate(&complaint)?;

    state.service.create(&complaint).await?;
    tracing::info!(
        "Complaint created via API: citizen_id={}, title={}",
        complaint.citizen_id,
        complaint.title
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            None,
            Some("Complaint filed".to_string()),
            None,
        )),
    ))
}

/// Update a complaint; the body's `complaint_id` must match the path
#[utoipa::path(
    put,
    path = "/api/complaints/{id}",
    params(
        ("id" = i32, Path, description = "Complaint ID")
    ),
    request_body = Complaint,
    responses(
        (status = 200, description = "Complaint updated", body = ApiResponse<Complaint>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Complaint not found")
    ),
    tag = "complaints"
)]
pub async fn update_complaint(
    State(state): State<ComplaintsState>,
    Path(id): Path<i32>,
    AppJson(complaint): AppJson<Complaint>,
) -> Result<Json<ApiResponse<Complaint>>> {
    let model_state = ModelState::validate(&complaint);
    let outcome = apply_update(id, complaint.complaint_id, &model_state, || {
        state.service.update(&complaint)
    })
    .await?;

    match outcome {
        UpdateOutcome::IdMismatch | UpdateOutcome::Missing => Err(complaint_not_found(id)),
        UpdateOutcome::Invalid => Err(AppError::Validation(model_state.messages())),
        UpdateOutcome::Updated => {
            tracing::info!("Complaint updated via API: id={}", id);
            Ok(Json(ApiResponse::success(Some(complaint), None, None)))
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/complaints/{id}",
    params(
        ("id" = i32, Path, description = "Complaint ID")
    ),
    responses(
        (status = 200, description = "Complaint deleted"),
        (status = 404, description = "Complaint not found")
    ),
    tag = "complaints"
)]
pub async fn delete_complaint(
    State(state): State<ComplaintsState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>> {
    if !state.service.delete(id).await? {
        return Err(complaint_not_found(id));
    }

    tracing::info!("Complaint deleted via API: id={}", id);
    Ok(Json(ApiResponse::success(None, None, None)))
}
