use crate::db::error::DbError;
use crate::db::repo::wishlist::WishlistRepo;
use crate::db::{Db, DbResult, map_row_opt};
use crate::models::types::{AccountId, RoomId, WishlistId};
use crate::models::wishlist::Wishlist;
use std::sync::Arc;

pub struct WishlistRepository {
    db: Arc<Db>,
}

impl WishlistRepository {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl WishlistRepo for WishlistRepository {
    async fn get(&self, wishlist_id: WishlistId) -> DbResult<Option<Wishlist>> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached("SELECT * FROM wishlists WHERE id = $1")
            .await?;

        let row_opt = client.query_opt(&stmt, &[&wishlist_id]).await?;
        map_row_opt(
            row_opt,
            Wishlist::try_from_row,
            &format!("WishlistRepo::get id={}", wishlist_id),
        )
    }

    async fn list_for_owner(&self, owner_id: AccountId) -> DbResult<Vec<Wishlist>> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached("SELECT * FROM wishlists WHERE owner_id = $1 ORDER BY created_at")
            .await?;

        let rows = client.query(&stmt, &[&owner_id]).await?;
        rows.iter().map(Wishlist::try_from_row).collect()
    }

    async fn insert(&self, wishlist: Wishlist) -> DbResult<Wishlist> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached(
                r#"
            INSERT INTO wishlists (id, owner_id, name)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
            )
            .await?;

        let row = client
            .query_one(&stmt, &[&wishlist.id, &wishlist.owner_id, &wishlist.name])
            .await?;

        Wishlist::try_from_row(&row)
    }

    async fn delete(&self, wishlist_id: WishlistId) -> DbResult<()> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached("DELETE FROM wishlists WHERE id = $1")
            .await?;

        let n = client.execute(&stmt, &[&wishlist_id]).await?;
        if n == 0 {
            return Err(DbError::NotFound);
        }
        Ok(())
    }

    async fn rooms_of(&self, wishlist_id: WishlistId) -> DbResult<Vec<RoomId>> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached("SELECT room_id FROM wishlist_rooms WHERE wishlist_id = $1")
            .await?;

        let rows = client.query(&stmt, &[&wishlist_id]).await?;
        Ok(rows.iter().map(|row| row.get::<_, RoomId>(0)).collect())
    }

    async fn toggle_room(&self, wishlist_id: WishlistId, room_id: RoomId) -> DbResult<bool> {
        let mut client = self.db.get_client().await?;
        let tx = client.build_transaction().start().await?;

        let removed = tx
            .execute(
                "DELETE FROM wishlist_rooms WHERE wishlist_id = $1 AND room_id = $2",
                &[&wishlist_id, &room_id],
            )
            .await?;

        let present = if removed == 0 {
            tx.execute(
                "INSERT INTO wishlist_rooms (wishlist_id, room_id) VALUES ($1, $2)",
                &[&wishlist_id, &room_id],
            )
            .await?;
            true
        } else {
            false
        };

        tx.commit().await?;
        Ok(present)
    }
}
