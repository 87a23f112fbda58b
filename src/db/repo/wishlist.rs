use crate::db::DbResult;
use crate::models::types::{AccountId, RoomId, WishlistId};
use crate::models::wishlist::Wishlist;

#[async_trait::async_trait]
pub trait WishlistRepo: Send + Sync {
    async fn get(&self, wishlist_id: WishlistId) -> DbResult<Option<Wishlist>>;
    async fn list_for_owner(&self, owner_id: AccountId) -> DbResult<Vec<Wishlist>>;
    async fn insert(&self, wishlist: Wishlist) -> DbResult<Wishlist>;
    async fn delete(&self, wishlist_id: WishlistId) -> DbResult<()>;

    async fn rooms_of(&self, wishlist_id: WishlistId) -> DbResult<Vec<RoomId>>;
    /// Add the room if absent, remove it if present. Returns true when the
    /// room ended up in the list.
    async fn toggle_room(&self, wishlist_id: WishlistId, room_id: RoomId) -> DbResult<bool>;
}
