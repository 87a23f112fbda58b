use crate::db::repo::house_rule::HouseRuleRepo;
use crate::db::{Db, DbResult, map_row_opt};
use crate::models::house_rule::HouseRule;
use crate::models::types::HouseRuleId;
use std::sync::Arc;

pub struct HouseRuleRepository {
    db: Arc<Db>,
}

impl HouseRuleRepository {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl HouseRuleRepo for HouseRuleRepository {
    async fn get(&self, house_rule_id: HouseRuleId) -> DbResult<Option<HouseRule>> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached("SELECT * FROM house_rules WHERE id = $1")
            .await?;

        let row_opt = client.query_opt(&stmt, &[&house_rule_id]).await?;
        map_row_opt(
            row_opt,
            HouseRule::try_from_row,
            &format!("HouseRuleRepo::get id={}", house_rule_id),
        )
    }

    async fn list(&self, limit: i64, offset: i64) -> DbResult<Vec<HouseRule>> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached("SELECT * FROM house_rules ORDER BY name LIMIT $1 OFFSET $2")
            .await?;

        let rows = client.query(&stmt, &[&limit, &offset]).await?;
        rows.iter().map(HouseRule::try_from_row).collect()
    }

    async fn insert(&self, house_rule: HouseRule) -> DbResult<HouseRule> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached(
                r#"
            INSERT INTO house_rules (id, name, description)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
            )
            .await?;

        let row = client
            .query_one(&stmt, &[&house_rule.id, &house_rule.name, &house_rule.description])
            .await?;

        HouseRule::try_from_row(&row)
    }

    async fn update(&self, house_rule: &HouseRule) -> DbResult<HouseRule> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached(
                r#"
            UPDATE house_rules
            SET name = $2, description = $3
            WHERE id = $1
            RETURNING *
            "#,
            )
            .await?;

        let row_opt = client
            .query_opt(&stmt, &[&house_rule.id, &house_rule.name, &house_rule.description])
            .await?;

        match map_row_opt(row_opt, HouseRule::try_from_row, "HouseRuleRepo::update")? {
            Some(updated) => Ok(updated),
            None => Err(crate::db::error::DbError::NotFound),
        }
    }

    async fn delete(&self, house_rule_id: HouseRuleId) -> DbResult<bool> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached("DELETE FROM house_rules WHERE id = $1")
            .await?;

        let n = client.execute(&stmt, &[&house_rule_id]).await?;
        Ok(n == 1)
    }
}
