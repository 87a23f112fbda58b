use crate::http::{ApiError, AppState, AuthUser, Pager};
use crate::models::review::{Review, ReviewDraft};
use crate::models::types::RoomId;
use axum::Json;
use axum::extract::{Path, Query, State};

pub async fn list(
    State(state): State<AppState>,
    Path(room_id): Path<RoomId>,
    Query(pager): Query<Pager>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let (limit, offset) = pager.slice(state.page_size);
    let reviews = state.reviews.list_for_room(room_id, limit, offset).await?;
    Ok(Json(reviews))
}

pub async fn create(
    State(state): State<AppState>,
    Path(room_id): Path<RoomId>,
    AuthUser(acting): AuthUser,
    Json(draft): Json<ReviewDraft>,
) -> Result<Json<Review>, ApiError> {
    let review = state.reviews.add_review(&acting, room_id, draft).await?;
    Ok(Json(review))
}
