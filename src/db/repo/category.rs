use crate::db::DbResult;
use crate::models::category::Category;
use crate::models::types::CategoryId;

/// Read-only from the room-write core's perspective; categories are
/// seeded through migrations.
#[async_trait::async_trait]
pub trait CategoryRepo: Send + Sync {
    async fn get(&self, category_id: CategoryId) -> DbResult<Option<Category>>;
    async fn list(&self) -> DbResult<Vec<Category>>;
}
