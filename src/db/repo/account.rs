use crate::db::DbResult;
use crate::models::account::Account;
use crate::models::types::AccountId;

#[async_trait::async_trait]
pub trait AccountRepo: Send + Sync {
    async fn get_by_username(&self, username: &str) -> DbResult<Option<Account>>;
    async fn insert(&self, account: Account) -> DbResult<Account>;
    async fn update_last_login(&self, account_id: AccountId) -> DbResult<()>;

    /// Store an opaque bearer token for the account.
    async fn insert_session(&self, token: &str, account_id: AccountId) -> DbResult<()>;
    /// Resolve a bearer token back to its account, if any.
    async fn account_by_token(&self, token: &str) -> DbResult<Option<Account>>;
}
