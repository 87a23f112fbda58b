use crate::db::DbResult;
use crate::models::review::Review;
use crate::models::types::RoomId;

#[async_trait::async_trait]
pub trait ReviewRepo: Send + Sync {
    async fn list_for_room(&self, room_id: RoomId, limit: i64, offset: i64) -> DbResult<Vec<Review>>;
    async fn insert(&self, review: Review) -> DbResult<Review>;
}
