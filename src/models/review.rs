use crate::db::DbResult;
use crate::error::FieldError;
use crate::models::types::{AccountId, ReviewId, RoomId};
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub id: ReviewId,
    pub room_id: RoomId,
    pub author_id: AccountId,
    /// 1 to 5 stars
    pub rating: i32,
    pub payload: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Review {
    pub fn try_from_row(row: &Row) -> DbResult<Self> {
        Ok(Self {
            id: row.try_get::<_, ReviewId>("id")?,
            room_id: row.try_get::<_, RoomId>("room_id")?,
            author_id: row.try_get::<_, AccountId>("author_id")?,
            rating: row.try_get("rating")?,
            payload: row.try_get("payload")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewDraft {
    pub rating: i32,
    pub payload: String,
}

impl ReviewDraft {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if !(1..=5).contains(&self.rating) {
            errors.push(FieldError::new("rating", "must be between 1 and 5"));
        }
        if self.payload.trim().is_empty() {
            errors.push(FieldError::new("payload", "cannot be empty"));
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds() {
        for rating in [0, 6] {
            let draft = ReviewDraft {
                rating,
                payload: "fine".into(),
            };
            assert_eq!(draft.validate()[0].field, "rating");
        }
        let ok = ReviewDraft {
            rating: 5,
            payload: "great stay".into(),
        };
        assert!(ok.validate().is_empty());
    }
}
