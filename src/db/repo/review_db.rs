use crate::db::repo::review::ReviewRepo;
use crate::db::{Db, DbResult};
use crate::models::review::Review;
use crate::models::types::RoomId;
use std::sync::Arc;

pub struct ReviewRepository {
    db: Arc<Db>,
}

impl ReviewRepository {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl ReviewRepo for ReviewRepository {
    async fn list_for_room(&self, room_id: RoomId, limit: i64, offset: i64) -> DbResult<Vec<Review>> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached(
                r#"
            SELECT * FROM reviews
            WHERE room_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
            )
            .await?;

        let rows = client.query(&stmt, &[&room_id, &limit, &offset]).await?;
        rows.iter().map(Review::try_from_row).collect()
    }

    async fn insert(&self, review: Review) -> DbResult<Review> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached(
                r#"
            INSERT INTO reviews (id, room_id, author_id, rating, payload)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
            )
            .await?;

        let row = client
            .query_one(
                &stmt,
                &[&review.id, &review.room_id, &review.author_id, &review.rating, &review.payload],
            )
            .await?;

        Review::try_from_row(&row)
    }
}
