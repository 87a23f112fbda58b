use crate::db::error::DbError;
use crate::db::repo::FacilityRepo;
use crate::error::{AppResult, DomainError};
use crate::models::facility::{Facility, FacilityDraft};
use crate::models::types::FacilityId;
use std::sync::Arc;

pub struct FacilityService {
    repo: Arc<dyn FacilityRepo>,
}

impl FacilityService {
    pub fn new(repo: Arc<dyn FacilityRepo>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, limit: i64, offset: i64) -> AppResult<Vec<Facility>> {
        Ok(self.repo.list(limit, offset).await?)
    }

    pub async fn get(&self, facility_id: FacilityId) -> AppResult<Facility> {
        self.repo
            .get(facility_id)
            .await?
            .ok_or(DomainError::NotFound("facility"))
    }

    pub async fn create(&self, draft: FacilityDraft) -> AppResult<Facility> {
        let errors = draft.validate_new();
        if !errors.is_empty() {
            return Err(DomainError::ValidationFailed(errors));
        }

        let facility = Facility {
            id: FacilityId::new(),
            // validate_new guarantees presence
            name: draft.name.unwrap_or_default().trim().to_string(),
            description: draft.description,
            created_at: chrono::Utc::now(),
        };

        Ok(self.repo.insert(facility).await?)
    }

    pub async fn update(&self, facility_id: FacilityId, draft: FacilityDraft) -> AppResult<Facility> {
        let mut facility = self.get(facility_id).await?;

        if let Some(name) = draft.name {
            if name.trim().is_empty() || name.len() > 150 {
                return Err(DomainError::validation("name", "must be 1 to 150 characters"));
            }
            facility.name = name.trim().to_string();
        }
        if let Some(description) = draft.description {
            facility.description = Some(description);
        }

        match self.repo.update(&facility).await {
            Ok(updated) => Ok(updated),
            Err(DbError::NotFound) => Err(DomainError::NotFound("facility")),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete(&self, facility_id: FacilityId) -> AppResult<()> {
        if !self.repo.delete(facility_id).await? {
            return Err(DomainError::NotFound("facility"));
        }
        Ok(())
    }
}
