use crate::db::DbResult;
use crate::error::FieldError;
use crate::models::types::HouseRuleId;
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// A host-set rule taggable onto a room (no smoking, quiet hours, ...).
#[derive(Debug, Clone, Serialize)]
pub struct HouseRule {
    pub id: HouseRuleId,
    pub name: String,
    pub description: Option<String>,
    #[serde(skip)]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl HouseRule {
    pub fn try_from_row(row: &Row) -> DbResult<Self> {
        Ok(Self {
            id: row.try_get::<_, HouseRuleId>("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

/// Incoming house-rule payload for create and (partial) update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HouseRuleDraft {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl HouseRuleDraft {
    /// Validation for a create, where `name` is required.
    pub fn validate_new(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        match self.name.as_deref().map(str::trim) {
            None | Some("") => errors.push(FieldError::new("name", "cannot be empty")),
            Some(name) if name.len() > 150 => {
                errors.push(FieldError::new("name", "longer than 150 characters"))
            }
            _ => {}
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_requires_name() {
        let errs = HouseRuleDraft::default().validate_new();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].field, "name");
    }
}
