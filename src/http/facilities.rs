use crate::http::{ApiError, AppState, AuthUser, Pager};
use crate::models::facility::{Facility, FacilityDraft};
use crate::models::types::FacilityId;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

pub async fn list(
    State(state): State<AppState>,
    Query(pager): Query<Pager>,
) -> Result<Json<Vec<Facility>>, ApiError> {
    let (limit, offset) = pager.slice(state.page_size);
    let facilities = state.facilities.list(limit, offset).await?;
    Ok(Json(facilities))
}

pub async fn create(
    State(state): State<AppState>,
    AuthUser(_acting): AuthUser,
    Json(draft): Json<FacilityDraft>,
) -> Result<Json<Facility>, ApiError> {
    let facility = state.facilities.create(draft).await?;
    Ok(Json(facility))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(facility_id): Path<FacilityId>,
) -> Result<Json<Facility>, ApiError> {
    let facility = state.facilities.get(facility_id).await?;
    Ok(Json(facility))
}

pub async fn update(
    State(state): State<AppState>,
    Path(facility_id): Path<FacilityId>,
    AuthUser(_acting): AuthUser,
    Json(draft): Json<FacilityDraft>,
) -> Result<Json<Facility>, ApiError> {
    let facility = state.facilities.update(facility_id, draft).await?;
    Ok(Json(facility))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(facility_id): Path<FacilityId>,
    AuthUser(_acting): AuthUser,
) -> Result<StatusCode, ApiError> {
    state.facilities.delete(facility_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
