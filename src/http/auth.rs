use crate::http::{ApiError, AppState};
use crate::models::account::Account;
use crate::models::types::AccountId;
use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RegisterBody {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub username: String,
    pub password: String,
}

/// Public account view; never exposes the password hash.
#[derive(Debug, Serialize)]
pub struct AccountOut {
    pub id: AccountId,
    pub username: String,
    pub email: String,
}

impl From<Account> for AccountOut {
    fn from(a: Account) -> Self {
        Self {
            id: a.id,
            username: a.username,
            email: a.email,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TokenOut {
    pub token: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterBody>,
) -> Result<Json<AccountOut>, ApiError> {
    let account = state.auth.register(&body.username, &body.email, &body.password).await?;
    Ok(Json(account.into()))
}

pub async fn login(State(state): State<AppState>, Json(body): Json<LoginBody>) -> Result<Json<TokenOut>, ApiError> {
    let token = state.auth.login(&body.username, &body.password).await?;
    Ok(Json(TokenOut { token }))
}
