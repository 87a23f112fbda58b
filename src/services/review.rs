use crate::db::repo::{ReviewRepo, RoomRepo};
use crate::error::{AppResult, DomainError};
use crate::models::account::Account;
use crate::models::review::{Review, ReviewDraft};
use crate::models::types::{ReviewId, RoomId};
use std::sync::Arc;

pub struct ReviewService {
    review_repo: Arc<dyn ReviewRepo>,
    room_repo: Arc<dyn RoomRepo>,
}

impl ReviewService {
    pub fn new(review_repo: Arc<dyn ReviewRepo>, room_repo: Arc<dyn RoomRepo>) -> Self {
        Self {
            review_repo,
            room_repo,
        }
    }

    pub async fn list_for_room(&self, room_id: RoomId, limit: i64, offset: i64) -> AppResult<Vec<Review>> {
        if self.room_repo.get(room_id).await?.is_none() {
            return Err(DomainError::NotFound("room"));
        }
        Ok(self.review_repo.list_for_room(room_id, limit, offset).await?)
    }

    pub async fn add_review(&self, acting: &Account, room_id: RoomId, draft: ReviewDraft) -> AppResult<Review> {
        if self.room_repo.get(room_id).await?.is_none() {
            return Err(DomainError::NotFound("room"));
        }

        let errors = draft.validate();
        if !errors.is_empty() {
            return Err(DomainError::ValidationFailed(errors));
        }

        let review = Review {
            id: ReviewId::new(),
            room_id,
            author_id: acting.id,
            rating: draft.rating,
            payload: draft.payload,
            created_at: chrono::Utc::now(),
        };

        Ok(self.review_repo.insert(review).await?)
    }
}
