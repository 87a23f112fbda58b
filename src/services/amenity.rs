use crate::db::error::DbError;
use crate::db::repo::AmenityRepo;
use crate::error::{AppResult, DomainError};
use crate::models::amenity::{Amenity, AmenityDraft};
use crate::models::types::AmenityId;
use std::sync::Arc;

pub struct AmenityService {
    repo: Arc<dyn AmenityRepo>,
}

impl AmenityService {
    pub fn new(repo: Arc<dyn AmenityRepo>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, limit: i64, offset: i64) -> AppResult<Vec<Amenity>> {
        Ok(self.repo.list(limit, offset).await?)
    }

    pub async fn get(&self, amenity_id: AmenityId) -> AppResult<Amenity> {
        self.repo
            .get(amenity_id)
            .await?
            .ok_or(DomainError::NotFound("amenity"))
    }

    pub async fn create(&self, draft: AmenityDraft) -> AppResult<Amenity> {
        let errors = draft.validate_new();
        if !errors.is_empty() {
            return Err(DomainError::ValidationFailed(errors));
        }

        let amenity = Amenity {
            id: AmenityId::new(),
            // validate_new guarantees presence
            name: draft.name.unwrap_or_default().trim().to_string(),
            description: draft.description,
            created_at: chrono::Utc::now(),
        };

        Ok(self.repo.insert(amenity).await?)
    }

    pub async fn update(&self, amenity_id: AmenityId, draft: AmenityDraft) -> AppResult<Amenity> {
        let mut amenity = self.get(amenity_id).await?;

        if let Some(name) = draft.name {
            if name.trim().is_empty() || name.len() > 150 {
                return Err(DomainError::validation("name", "must be 1 to 150 characters"));
            }
            amenity.name = name.trim().to_string();
        }
        if let Some(description) = draft.description {
            amenity.description = Some(description);
        }

        match self.repo.update(&amenity).await {
            Ok(updated) => Ok(updated),
            Err(DbError::NotFound) => Err(DomainError::NotFound("amenity")),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete(&self, amenity_id: AmenityId) -> AppResult<()> {
        if !self.repo.delete(amenity_id).await? {
            return Err(DomainError::NotFound("amenity"));
        }
        Ok(())
    }
}
