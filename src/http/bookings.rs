use crate::http::{ApiError, AppState, AuthUser, Pager};
use crate::models::booking::{Booking, BookingDraft};
use crate::models::types::RoomId;
use axum::Json;
use axum::extract::{Path, Query, State};

pub async fn list(
    State(state): State<AppState>,
    Path(room_id): Path<RoomId>,
    Query(pager): Query<Pager>,
) -> Result<Json<Vec<Booking>>, ApiError> {
    let (limit, offset) = pager.slice(state.page_size);
    let bookings = state.bookings.list_for_room(room_id, limit, offset).await?;
    Ok(Json(bookings))
}

pub async fn create(
    State(state): State<AppState>,
    Path(room_id): Path<RoomId>,
    AuthUser(acting): AuthUser,
    Json(draft): Json<BookingDraft>,
) -> Result<Json<Booking>, ApiError> {
    let booking = state.bookings.book_room(&acting, room_id, draft).await?;
    Ok(Json(booking))
}
