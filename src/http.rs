use crate::db::repo::CategoryRepo;
use crate::error::{DomainError, FieldError};
use crate::models::account::Account;
use crate::services::amenity::AmenityService;
use crate::services::auth::AuthService;
use crate::services::booking::BookingService;
use crate::services::facility::FacilityService;
use crate::services::house_rule::HouseRuleService;
use crate::services::review::ReviewService;
use crate::services::room::RoomService;
use crate::services::wishlist::WishlistService;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

mod amenities;
mod auth;
mod bookings;
mod categories;
mod facilities;
mod house_rules;
mod reviews;
mod rooms;
mod wishlists;

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub rooms: Arc<RoomService>,
    pub amenities: Arc<AmenityService>,
    pub facilities: Arc<FacilityService>,
    pub house_rules: Arc<HouseRuleService>,
    pub bookings: Arc<BookingService>,
    pub reviews: Arc<ReviewService>,
    pub wishlists: Arc<WishlistService>,
    pub categories: Arc<dyn CategoryRepo>,
    pub page_size: i64,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/auth/register", axum::routing::post(auth::register))
        .route("/auth/login", axum::routing::post(auth::login))
        .route("/categories", get(categories::list))
        .route("/amenities", get(amenities::list).post(amenities::create))
        .route(
            "/amenities/{id}",
            get(amenities::detail).put(amenities::update).delete(amenities::delete),
        )
        .route("/facilities", get(facilities::list).post(facilities::create))
        .route(
            "/facilities/{id}",
            get(facilities::detail).put(facilities::update).delete(facilities::delete),
        )
        .route("/house_rules", get(house_rules::list).post(house_rules::create))
        .route(
            "/house_rules/{id}",
            get(house_rules::detail)
                .put(house_rules::update)
                .delete(house_rules::delete),
        )
        .route("/rooms", get(rooms::list).post(rooms::create))
        .route("/rooms/{id}", get(rooms::detail).put(rooms::update).delete(rooms::delete))
        .route("/rooms/{id}/amenities", get(rooms::amenities))
        .route("/rooms/{id}/reviews", get(reviews::list).post(reviews::create))
        .route("/rooms/{id}/bookings", get(bookings::list).post(bookings::create))
        .route("/wishlists", get(wishlists::list).post(wishlists::create))
        .route("/wishlists/{id}", axum::routing::delete(wishlists::delete))
        .route("/wishlists/{id}/rooms/{room_id}", put(wishlists::toggle_room))
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
}

pub async fn serve(addr: std::net::SocketAddr, state: AppState) -> anyhow::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn healthz() -> &'static str {
    "ok"
}

/// Wrapper so `DomainError` can flow out of handlers with `?` and still
/// render as a JSON error body with the right status code.
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

#[derive(serde::Serialize)]
struct ErrorBody {
    errors: Vec<FieldError>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, errors) = match self.0 {
            DomainError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                vec![FieldError::new(what, "not found")],
            ),
            DomainError::PermissionDenied => (
                StatusCode::FORBIDDEN,
                vec![FieldError::new("detail", "permission denied")],
            ),
            DomainError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                vec![FieldError::new("detail", "authentication required")],
            ),
            DomainError::Validation { field, message } => {
                (StatusCode::BAD_REQUEST, vec![FieldError { field, message }])
            }
            DomainError::ValidationFailed(errors) => (StatusCode::BAD_REQUEST, errors),
            e => {
                tracing::error!(error = %e, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    vec![FieldError::new("detail", "internal error")],
                )
            }
        };

        (status, Json(ErrorBody { errors })).into_response()
    }
}

/// The acting account, resolved from the `Authorization: Bearer` header.
/// Writes require it; reads stay public.
pub struct AuthUser(pub Account);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or(ApiError(DomainError::Unauthorized))?;

        let account = state.auth.authenticate(token).await?;
        Ok(AuthUser(account))
    }
}

#[derive(Debug, Deserialize)]
pub struct Pager {
    /// 1-based page number; anything unparsable falls back to page 1
    pub page: Option<String>,
}

impl Pager {
    /// (limit, offset) for the requested page.
    pub fn slice(&self, page_size: i64) -> (i64, i64) {
        let page = self
            .page
            .as_deref()
            .and_then(|p| p.parse::<i64>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1);
        (page_size, (page - 1) * page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager(page: Option<&str>) -> Pager {
        Pager {
            page: page.map(|s| s.to_string()),
        }
    }

    #[test]
    fn pager_defaults_to_first_page() {
        assert_eq!(pager(None).slice(10), (10, 0));
        assert_eq!(pager(Some("garbage")).slice(10), (10, 0));
        assert_eq!(pager(Some("0")).slice(10), (10, 0));
        assert_eq!(pager(Some("-3")).slice(10), (10, 0));
    }

    #[test]
    fn pager_offsets_later_pages() {
        assert_eq!(pager(Some("3")).slice(10), (10, 20));
        assert_eq!(pager(Some("2")).slice(25), (25, 25));
    }
}
