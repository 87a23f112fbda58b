use crate::db::repo::{RoomRepo, WishlistRepo};
use crate::error::{AppResult, DomainError};
use crate::models::account::Account;
use crate::models::types::{RoomId, WishlistId};
use crate::models::wishlist::{Wishlist, WishlistDetail};
use std::sync::Arc;

pub struct WishlistService {
    wishlist_repo: Arc<dyn WishlistRepo>,
    room_repo: Arc<dyn RoomRepo>,
}

impl WishlistService {
    pub fn new(wishlist_repo: Arc<dyn WishlistRepo>, room_repo: Arc<dyn RoomRepo>) -> Self {
        Self {
            wishlist_repo,
            room_repo,
        }
    }

    pub async fn list_mine(&self, acting: &Account) -> AppResult<Vec<WishlistDetail>> {
        let wishlists = self.wishlist_repo.list_for_owner(acting.id).await?;

        let mut out = Vec::with_capacity(wishlists.len());
        for wishlist in wishlists {
            let rooms = self.wishlist_repo.rooms_of(wishlist.id).await?;
            out.push(WishlistDetail { wishlist, rooms });
        }
        Ok(out)
    }

    pub async fn create(&self, acting: &Account, name: &str) -> AppResult<WishlistDetail> {
        let name = name.trim();
        if name.is_empty() || name.len() > 150 {
            return Err(DomainError::validation("name", "must be 1 to 150 characters"));
        }

        let wishlist = Wishlist {
            id: WishlistId::new(),
            owner_id: acting.id,
            name: name.to_string(),
            created_at: chrono::Utc::now(),
        };

        let created = self.wishlist_repo.insert(wishlist).await?;
        Ok(WishlistDetail {
            wishlist: created,
            rooms: vec![],
        })
    }

    pub async fn delete(&self, acting: &Account, wishlist_id: WishlistId) -> AppResult<()> {
        self.owned(acting, wishlist_id).await?;
        self.wishlist_repo.delete(wishlist_id).await?;
        Ok(())
    }

    /// Add the room to the wishlist if absent, drop it otherwise. Returns
    /// true when the room is now on the list.
    pub async fn toggle_room(&self, acting: &Account, wishlist_id: WishlistId, room_id: RoomId) -> AppResult<bool> {
        self.owned(acting, wishlist_id).await?;
        if self.room_repo.get(room_id).await?.is_none() {
            return Err(DomainError::NotFound("room"));
        }
        Ok(self.wishlist_repo.toggle_room(wishlist_id, room_id).await?)
    }

    async fn owned(&self, acting: &Account, wishlist_id: WishlistId) -> AppResult<Wishlist> {
        let wishlist = self
            .wishlist_repo
            .get(wishlist_id)
            .await?
            .ok_or(DomainError::NotFound("wishlist"))?;
        if wishlist.owner_id != acting.id {
            return Err(DomainError::PermissionDenied);
        }
        Ok(wishlist)
    }
}
