use crate::db::DbResult;
use crate::models::types::{AccountId, RoomId, WishlistId};
use serde::Serialize;
use tokio_postgres::Row;

#[derive(Debug, Clone, Serialize)]
pub struct Wishlist {
    pub id: WishlistId,
    pub owner_id: AccountId,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Wishlist {
    pub fn try_from_row(row: &Row) -> DbResult<Self> {
        Ok(Self {
            id: row.try_get::<_, WishlistId>("id")?,
            owner_id: row.try_get::<_, AccountId>("owner_id")?,
            name: row.try_get("name")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

/// Wishlist with its room membership, as served over HTTP.
#[derive(Debug, Clone, Serialize)]
pub struct WishlistDetail {
    #[serde(flatten)]
    pub wishlist: Wishlist,
    pub rooms: Vec<RoomId>,
}
