use crate::http::{ApiError, AppState, AuthUser, Pager};
use crate::models::amenity::Amenity;
use crate::models::room::{Room, RoomDetail, RoomDraft, RoomPatch};
use crate::models::types::RoomId;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

pub async fn list(
    State(state): State<AppState>,
    Query(pager): Query<Pager>,
) -> Result<Json<Vec<Room>>, ApiError> {
    let (limit, offset) = pager.slice(state.page_size);
    let rooms = state.rooms.list_rooms(limit, offset).await?;
    Ok(Json(rooms))
}

pub async fn create(
    State(state): State<AppState>,
    AuthUser(acting): AuthUser,
    Json(draft): Json<RoomDraft>,
) -> Result<Json<RoomDetail>, ApiError> {
    let detail = state.rooms.create_room(&acting, draft).await?;
    Ok(Json(detail))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(room_id): Path<RoomId>,
) -> Result<Json<RoomDetail>, ApiError> {
    let detail = state.rooms.get_room(room_id).await?;
    Ok(Json(detail))
}

pub async fn update(
    State(state): State<AppState>,
    Path(room_id): Path<RoomId>,
    AuthUser(acting): AuthUser,
    Json(patch): Json<RoomPatch>,
) -> Result<Json<RoomDetail>, ApiError> {
    let detail = state.rooms.update_room(&acting, room_id, patch).await?;
    Ok(Json(detail))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(room_id): Path<RoomId>,
    AuthUser(acting): AuthUser,
) -> Result<StatusCode, ApiError> {
    state.rooms.delete_room(&acting, room_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn amenities(
    State(state): State<AppState>,
    Path(room_id): Path<RoomId>,
    Query(pager): Query<Pager>,
) -> Result<Json<Vec<Amenity>>, ApiError> {
    let all = state.rooms.room_amenities(room_id).await?;
    let (limit, offset) = pager.slice(state.page_size);
    let page = all
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect();
    Ok(Json(page))
}
