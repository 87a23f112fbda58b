use crate::db::DbResult;
use crate::error::FieldError;
use crate::models::types::AmenityId;
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// A feature taggable onto a room (wifi, kitchen, ...). Plain CRUD,
/// many-to-many with rooms.
#[derive(Debug, Clone, Serialize)]
pub struct Amenity {
    pub id: AmenityId,
    pub name: String,
    pub description: Option<String>,
    #[serde(skip)]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Amenity {
    pub fn try_from_row(row: &Row) -> DbResult<Self> {
        Ok(Self {
            id: row.try_get::<_, AmenityId>("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

/// Incoming amenity payload for create and (partial) update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AmenityDraft {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl AmenityDraft {
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
        let errs = AmenityDraft::default().validate_new();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].field, "name");
    }

    #[test]
    fn draft_rejects_oversized_name() {
        let draft = AmenityDraft {
            name: Some("x".repeat(151)),
            description: None,
        };
        assert_eq!(draft.validate_new().len(), 1);
    }
}
