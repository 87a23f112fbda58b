use crate::db::repo::account::AccountRepo;
use crate::db::{Db, DbResult, map_row_opt};
use crate::models::account::Account;
use crate::models::types::AccountId;
use std::sync::Arc;

pub struct AccountRepository {
    db: Arc<Db>,
}

impl AccountRepository {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl AccountRepo for AccountRepository {
    async fn get_by_username(&self, username: &str) -> DbResult<Option<Account>> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached("SELECT * FROM accounts WHERE username = $1")
            .await?;

        let row_opt = client.query_opt(&stmt, &[&username]).await?;
        map_row_opt(
            row_opt,
            Account::try_from_row,
            &format!("AccountRepo::get_by_username username={}", username),
        )
    }

    async fn insert(&self, account: Account) -> DbResult<Account> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached(
                r#"
            INSERT INTO accounts (id, username, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
            )
            .await?;

        let row = client
            .query_one(
                &stmt,
                &[&account.id, &account.username, &account.email, &account.password_hash],
            )
            .await?;

        Account::try_from_row(&row)
    }

    async fn update_last_login(&self, account_id: AccountId) -> DbResult<()> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached("UPDATE accounts SET last_login = NOW() WHERE id = $1")
            .await?;
        client.execute(&stmt, &[&account_id]).await?;

        Ok(())
    }

    async fn insert_session(&self, token: &str, account_id: AccountId) -> DbResult<()> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached("INSERT INTO sessions (token, account_id) VALUES ($1, $2)")
            .await?;
        client.execute(&stmt, &[&token, &account_id]).await?;

        Ok(())
    }

    async fn account_by_token(&self, token: &str) -> DbResult<Option<Account>> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached(
                r#"
            SELECT a.*
            FROM accounts a
            JOIN sessions s ON s.account_id = a.id
            WHERE s.token = $1
            "#,
            )
            .await?;

        let row_opt = client.query_opt(&stmt, &[&token]).await?;
        map_row_opt(row_opt, Account::try_from_row, "AccountRepo::account_by_token")
    }
}
