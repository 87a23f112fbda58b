use crate::db::DbResult;
use crate::models::amenity::Amenity;
use crate::models::types::AmenityId;

#[async_trait::async_trait]
pub trait AmenityRepo: Send + Sync {
    async fn get(&self, amenity_id: AmenityId) -> DbResult<Option<Amenity>>;
    async fn list(&self, limit: i64, offset: i64) -> DbResult<Vec<Amenity>>;
    async fn insert(&self, amenity: Amenity) -> DbResult<Amenity>;
    async fn update(&self, amenity: &Amenity) -> DbResult<Amenity>;
    /// Returns false if the amenity did not exist.
    async fn delete(&self, amenity_id: AmenityId) -> DbResult<bool>;
}
