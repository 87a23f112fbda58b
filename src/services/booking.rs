use crate::db::repo::{BookingRepo, RoomRepo};
use crate::error::{AppResult, DomainError};
use crate::models::account::Account;
use crate::models::booking::{Booking, BookingDraft};
use crate::models::types::{BookingId, RoomId};
use std::sync::Arc;

pub struct BookingService {
    booking_repo: Arc<dyn BookingRepo>,
    room_repo: Arc<dyn RoomRepo>,
}

impl BookingService {
    pub fn new(booking_repo: Arc<dyn BookingRepo>, room_repo: Arc<dyn RoomRepo>) -> Self {
        Self {
            booking_repo,
            room_repo,
        }
    }

    pub async fn list_for_room(&self, room_id: RoomId, limit: i64, offset: i64) -> AppResult<Vec<Booking>> {
        if self.room_repo.get(room_id).await?.is_none() {
            return Err(DomainError::NotFound("room"));
        }
        Ok(self.booking_repo.list_for_room(room_id, limit, offset).await?)
    }

    pub async fn book_room(&self, acting: &Account, room_id: RoomId, draft: BookingDraft) -> AppResult<Booking> {
        if self.room_repo.get(room_id).await?.is_none() {
            return Err(DomainError::NotFound("room"));
        }

        let errors = draft.validate(chrono::Utc::now().date_naive());
        if !errors.is_empty() {
            return Err(DomainError::ValidationFailed(errors));
        }

        let booking = Booking {
            id: BookingId::new(),
            room_id: Some(room_id),
            guest_id: acting.id,
            check_in: draft.check_in,
            check_out: draft.check_out,
            guests: draft.guests,
            created_at: chrono::Utc::now(),
        };

        Ok(self.booking_repo.insert(booking).await?)
    }
}
