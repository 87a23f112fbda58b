use crate::db::error::DbError;
use crate::db::repo::HouseRuleRepo;
use crate::error::{AppResult, DomainError};
use crate::models::house_rule::{HouseRule, HouseRuleDraft};
use crate::models::types::HouseRuleId;
use std::sync::Arc;

pub struct HouseRuleService {
    repo: Arc<dyn HouseRuleRepo>,
}

impl HouseRuleService {
    pub fn new(repo: Arc<dyn HouseRuleRepo>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, limit: i64, offset: i64) -> AppResult<Vec<HouseRule>> {
        Ok(self.repo.list(limit, offset).await?)
    }

    pub async fn get(&self, house_rule_id: HouseRuleId) -> AppResult<HouseRule> {
        self.repo
            .get(house_rule_id)
            .await?
            .ok_or(DomainError::NotFound("house rule"))
    }

    pub async fn create(&self, draft: HouseRuleDraft) -> AppResult<HouseRule> {
        let errors = draft.validate_new();
        if !errors.is_empty() {
            return Err(DomainError::ValidationFailed(errors));
        }

        let house_rule = HouseRule {
            id: HouseRuleId::new(),
            // validate_new guarantees presence
            name: draft.name.unwrap_or_default().trim().to_string(),
            description: draft.description,
            created_at: chrono::Utc::now(),
        };

        Ok(self.repo.insert(house_rule).await?)
    }

    pub async fn update(&self, house_rule_id: HouseRuleId, draft: HouseRuleDraft) -> AppResult<HouseRule> {
        let mut house_rule = self.get(house_rule_id).await?;

        if let Some(name) = draft.name {
            if name.trim().is_empty() || name.len() > 150 {
                return Err(DomainError::validation("name", "must be 1 to 150 characters"));
            }
            house_rule.name = name.trim().to_string();
        }
        if let Some(description) = draft.description {
            house_rule.description = Some(description);
        }

        match self.repo.update(&house_rule).await {
            Ok(updated) => Ok(updated),
            Err(DbError::NotFound) => Err(DomainError::NotFound("house rule")),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete(&self, house_rule_id: HouseRuleId) -> AppResult<()> {
        if !self.repo.delete(house_rule_id).await? {
            return Err(DomainError::NotFound("house rule"));
        }
        Ok(())
    }
}
