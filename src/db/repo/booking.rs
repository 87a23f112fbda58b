use crate::db::DbResult;
use crate::models::booking::Booking;
use crate::models::types::RoomId;

#[async_trait::async_trait]
pub trait BookingRepo: Send + Sync {
    async fn list_for_room(&self, room_id: RoomId, limit: i64, offset: i64) -> DbResult<Vec<Booking>>;
    async fn insert(&self, booking: Booking) -> DbResult<Booking>;
}
