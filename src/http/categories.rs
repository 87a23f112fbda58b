use crate::http::{ApiError, AppState};
use crate::models::category::Category;
use axum::Json;
use axum::extract::State;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Category>>, ApiError> {
    let categories = state.categories.list().await.map_err(crate::error::DomainError::from)?;
    Ok(Json(categories))
}
