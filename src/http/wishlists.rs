use crate::http::{ApiError, AppState, AuthUser};
use crate::models::types::{RoomId, WishlistId};
use crate::models::wishlist::WishlistDetail;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct WishlistBody {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct ToggleOut {
    /// Whether the room is on the list after the toggle
    pub present: bool,
}

pub async fn list(
    State(state): State<AppState>,
    AuthUser(acting): AuthUser,
) -> Result<Json<Vec<WishlistDetail>>, ApiError> {
    let wishlists = state.wishlists.list_mine(&acting).await?;
    Ok(Json(wishlists))
}

pub async fn create(
    State(state): State<AppState>,
    AuthUser(acting): AuthUser,
    Json(body): Json<WishlistBody>,
) -> Result<Json<WishlistDetail>, ApiError> {
    let wishlist = state.wishlists.create(&acting, &body.name).await?;
    Ok(Json(wishlist))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(wishlist_id): Path<WishlistId>,
    AuthUser(acting): AuthUser,
) -> Result<StatusCode, ApiError> {
    state.wishlists.delete(&acting, wishlist_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn toggle_room(
    State(state): State<AppState>,
    Path((wishlist_id, room_id)): Path<(WishlistId, RoomId)>,
    AuthUser(acting): AuthUser,
) -> Result<Json<ToggleOut>, ApiError> {
    let present = state.wishlists.toggle_room(&acting, wishlist_id, room_id).await?;
    Ok(Json(ToggleOut { present }))
}
