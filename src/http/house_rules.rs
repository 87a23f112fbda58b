use crate::http::{ApiError, AppState, AuthUser, Pager};
use crate::models::house_rule::{HouseRule, HouseRuleDraft};
use crate::models::types::HouseRuleId;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

pub async fn list(
    State(state): State<AppState>,
    Query(pager): Query<Pager>,
) -> Result<Json<Vec<HouseRule>>, ApiError> {
    let (limit, offset) = pager.slice(state.page_size);
    let house_rules = state.house_rules.list(limit, offset).await?;
    Ok(Json(house_rules))
}

pub async fn create(
    State(state): State<AppState>,
    AuthUser(_acting): AuthUser,
    Json(draft): Json<HouseRuleDraft>,
) -> Result<Json<HouseRule>, ApiError> {
    let house_rule = state.house_rules.create(draft).await?;
    Ok(Json(house_rule))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(house_rule_id): Path<HouseRuleId>,
) -> Result<Json<HouseRule>, ApiError> {
    let house_rule = state.house_rules.get(house_rule_id).await?;
    Ok(Json(house_rule))
}

pub async fn update(
    State(state): State<AppState>,
    Path(house_rule_id): Path<HouseRuleId>,
    AuthUser(_acting): AuthUser,
    Json(draft): Json<HouseRuleDraft>,
) -> Result<Json<HouseRule>, ApiError> {
    let house_rule = state.house_rules.update(house_rule_id, draft).await?;
    Ok(Json(house_rule))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(house_rule_id): Path<HouseRuleId>,
    AuthUser(_acting): AuthUser,
) -> Result<StatusCode, ApiError> {
    state.house_rules.delete(house_rule_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
