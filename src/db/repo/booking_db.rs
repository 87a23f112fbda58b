use crate::db::repo::booking::BookingRepo;
use crate::db::{Db, DbResult};
use crate::models::booking::Booking;
use crate::models::types::RoomId;
use std::sync::Arc;

pub struct BookingRepository {
    db: Arc<Db>,
}

impl BookingRepository {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl BookingRepo for BookingRepository {
    async fn list_for_room(&self, room_id: RoomId, limit: i64, offset: i64) -> DbResult<Vec<Booking>> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached(
                r#"
            SELECT * FROM bookings
            WHERE room_id = $1
            ORDER BY check_in
            LIMIT $2 OFFSET $3
            "#,
            )
            .await?;

        let rows = client.query(&stmt, &[&room_id, &limit, &offset]).await?;
        rows.iter().map(Booking::try_from_row).collect()
    }

    async fn insert(&self, booking: Booking) -> DbResult<Booking> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached(
                r#"
            INSERT INTO bookings (id, room_id, guest_id, check_in, check_out, guests)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
            )
            .await?;

        let row = client
            .query_one(
                &stmt,
                &[
                    &booking.id,
                    &booking.room_id,
                    &booking.guest_id,
                    &booking.check_in,
                    &booking.check_out,
                    &booking.guests,
                ],
            )
            .await?;

        Booking::try_from_row(&row)
    }
}
