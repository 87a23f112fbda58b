use crate::db::DbResult;
use crate::error::{AppResult, DomainError};
use crate::models::types::AccountId;
use tokio_postgres::Row;

#[derive(Debug, Clone)]
pub struct Account {
    /// Unique account ID
    pub id: AccountId,
    /// Username (distinct)
    pub username: String,
    /// Email address registered to the account
    pub email: String,
    /// Hashed password (argon)
    pub password_hash: String,
    /// Account creation timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Last login timestamp
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
}

impl Account {
    pub fn try_from_row(row: &Row) -> DbResult<Self> {
        Ok(Self {
            id: row.try_get::<_, AccountId>("id")?,
            username: row.try_get("username")?,
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
            created_at: row.try_get("created_at")?,
            last_login: row.try_get("last_login")?,
        })
    }

    pub fn validate_username(s: &str) -> AppResult<()> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::Validation {
                field: "username",
                message: "cannot be empty".into(),
            });
        }
        if !s.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_')) {
            return Err(DomainError::Validation {
                field: "username",
                message: "only alphanumeric, hyphen, underscore allowed".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rules() {
        assert!(Account::validate_username("jordan_77").is_ok());
        assert!(Account::validate_username("  ").is_err());
        assert!(Account::validate_username("no spaces").is_err());
        assert!(Account::validate_username("héllo").is_err());
    }
}
