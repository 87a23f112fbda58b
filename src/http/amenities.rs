use crate::http::{ApiError, AppState, AuthUser, Pager};
use crate::models::amenity::{Amenity, AmenityDraft};
use crate::models::types::AmenityId;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

pub async fn list(
    State(state): State<AppState>,
    Query(pager): Query<Pager>,
) -> Result<Json<Vec<Amenity>>, ApiError> {
    let (limit, offset) = pager.slice(state.page_size);
    let amenities = state.amenities.list(limit, offset).await?;
    Ok(Json(amenities))
}

pub async fn create(
    State(state): State<AppState>,
    AuthUser(_acting): AuthUser,
    Json(draft): Json<AmenityDraft>,
) -> Result<Json<Amenity>, ApiError> {
    let amenity = state.amenities.create(draft).await?;
    Ok(Json(amenity))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(amenity_id): Path<AmenityId>,
) -> Result<Json<Amenity>, ApiError> {
    let amenity = state.amenities.get(amenity_id).await?;
    Ok(Json(amenity))
}

pub async fn update(
    State(state): State<AppState>,
    Path(amenity_id): Path<AmenityId>,
    AuthUser(_acting): AuthUser,
    Json(draft): Json<AmenityDraft>,
) -> Result<Json<Amenity>, ApiError> {
    let amenity = state.amenities.update(amenity_id, draft).await?;
    Ok(Json(amenity))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(amenity_id): Path<AmenityId>,
    AuthUser(_acting): AuthUser,
) -> Result<StatusCode, ApiError> {
    state.amenities.delete(amenity_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
