use crate::db::DbResult;
use crate::models::facility::Facility;
use crate::models::types::FacilityId;

#[async_trait::async_trait]
pub trait FacilityRepo: Send + Sync {
    async fn get(&self, facility_id: FacilityId) -> DbResult<Option<Facility>>;
    async fn list(&self, limit: i64, offset: i64) -> DbResult<Vec<Facility>>;
    async fn insert(&self, facility: Facility) -> DbResult<Facility>;
    async fn update(&self, facility: &Facility) -> DbResult<Facility>;
    /// Returns false if the facility did not exist.
    async fn delete(&self, facility_id: FacilityId) -> DbResult<bool>;
}
