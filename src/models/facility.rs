use crate::db::DbResult;
use crate::error::FieldError;
use crate::models::types::FacilityId;
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// A physical facility taggable onto a room (parking, elevator, ...).
/// Plain CRUD, many-to-many with rooms.
#[derive(Debug, Clone, Serialize)]
pub struct Facility {
    pub id: FacilityId,
    pub name: String,
    pub description: Option<String>,
    #[serde(skip)]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Facility {
    pub fn try_from_row(row: &Row) -> DbResult<Self> {
        Ok(Self {
            id: row.try_get::<_, FacilityId>("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

/// Incoming facility payload for create and (partial) update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FacilityDraft {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl FacilityDraft {
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
        let errs = FacilityDraft::default().validate_new();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].field, "name");
    }
}
