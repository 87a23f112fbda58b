use crate::db::DbResult;
use crate::models::amenity::Amenity;
use crate::models::facility::Facility;
use crate::models::house_rule::HouseRule;
use crate::models::room::{Room, RoomTagSets};
use crate::models::types::RoomId;

/// Storage for rooms and their tag association sets (amenities,
/// facilities, house rules).
///
/// `create` and `update` are atomic: the room write and the association
/// mutations either all land or none do. When an id in any tag list does
/// not resolve, both return `DbError::Validation` naming the offending
/// set and leave storage untouched; for `update` that includes the room's
/// previous tag sets.
#[async_trait::async_trait]
pub trait RoomRepo: Send + Sync {
    async fn get(&self, room_id: RoomId) -> DbResult<Option<Room>>;
    async fn list(&self, limit: i64, offset: i64) -> DbResult<Vec<Room>>;
    /// The room's amenity set, ordered by name.
    async fn amenities_of(&self, room_id: RoomId) -> DbResult<Vec<Amenity>>;
    async fn facilities_of(&self, room_id: RoomId) -> DbResult<Vec<Facility>>;
    async fn house_rules_of(&self, room_id: RoomId) -> DbResult<Vec<HouseRule>>;

    async fn create(&self, room: &Room, tags: &RoomTagSets) -> DbResult<Room>;
    async fn update(&self, room: &Room, tags: &RoomTagSets) -> DbResult<Room>;
    /// Bookings referencing the room keep their record with a nulled room
    /// reference; tag memberships and reviews go with the room.
    async fn delete(&self, room_id: RoomId) -> DbResult<()>;
}
