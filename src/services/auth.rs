use crate::db::error::DbError;
use crate::db::repo::AccountRepo;
use crate::error::{AppResult, DomainError};
use crate::models::account::Account;
use crate::models::types::AccountId;
use argon2::Argon2;
use password_hash::rand_core::OsRng;
use password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use std::sync::Arc;

pub struct AuthService {
    repo: Arc<dyn AccountRepo>,
    argon: Argon2<'static>,
}

impl AuthService {
    pub fn new(repo: Arc<dyn AccountRepo>) -> Self {
        let argon = Argon2::default();
        Self { repo, argon }
    }

    pub async fn register(&self, username: &str, email: &str, password: &str) -> AppResult<Account> {
        Account::validate_username(username)?;
        if password.len() < 8 {
            return Err(DomainError::validation("password", "must be at least 8 characters"));
        }
        if self.repo.get_by_username(username).await?.is_some() {
            return Err(DomainError::validation("username", "already taken"));
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon
            .hash_password(password.as_bytes(), &salt)
            .map_err(DomainError::Password)?
            .to_string();

        let account = Account {
            id: AccountId::new(),
            username: username.trim().to_string(),
            email: email.to_string(),
            password_hash: hash,
            created_at: chrono::Utc::now(),
            last_login: None,
        };

        match self.repo.insert(account).await {
            Ok(created) => Ok(created),
            // Unique index race on username/email
            Err(DbError::UniqueViolation) => Err(DomainError::validation("username", "already taken")),
            Err(e) => Err(e.into()),
        }
    }

    /// Verify credentials and hand out an opaque bearer token.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<String> {
        let Some(account) = self.repo.get_by_username(username).await? else {
            return Err(DomainError::Unauthorized);
        };

        let parsed = PasswordHash::new(&account.password_hash).map_err(DomainError::Password)?;
        if self.argon.verify_password(password.as_bytes(), &parsed).is_err() {
            return Err(DomainError::Unauthorized);
        }

        let token = uuid::Uuid::new_v4().simple().to_string();
        self.repo.insert_session(&token, account.id).await?;
        self.repo.update_last_login(account.id).await?;

        tracing::info!(username = %account.username, "login");
        Ok(token)
    }

    /// Resolve the acting account from a bearer token.
    pub async fn authenticate(&self, token: &str) -> AppResult<Account> {
        match self.repo.account_by_token(token).await? {
            Some(account) => Ok(account),
            None => Err(DomainError::Unauthorized),
        }
    }
}
