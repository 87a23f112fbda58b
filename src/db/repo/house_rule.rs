use crate::db::DbResult;
use crate::models::house_rule::HouseRule;
use crate::models::types::HouseRuleId;

#[async_trait::async_trait]
pub trait HouseRuleRepo: Send + Sync {
    async fn get(&self, house_rule_id: HouseRuleId) -> DbResult<Option<HouseRule>>;
    async fn list(&self, limit: i64, offset: i64) -> DbResult<Vec<HouseRule>>;
    async fn insert(&self, house_rule: HouseRule) -> DbResult<HouseRule>;
    async fn update(&self, house_rule: &HouseRule) -> DbResult<HouseRule>;
    /// Returns false if the house rule did not exist.
    async fn delete(&self, house_rule_id: HouseRuleId) -> DbResult<bool>;
}
