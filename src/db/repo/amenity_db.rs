use crate::db::repo::amenity::AmenityRepo;
use crate::db::{Db, DbResult, map_row_opt};
use crate::models::amenity::Amenity;
use crate::models::types::AmenityId;
use std::sync::Arc;

pub struct AmenityRepository {
    db: Arc<Db>,
}

impl AmenityRepository {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl AmenityRepo for AmenityRepository {
    async fn get(&self, amenity_id: AmenityId) -> DbResult<Option<Amenity>> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached("SELECT * FROM amenities WHERE id = $1")
            .await?;

        let row_opt = client.query_opt(&stmt, &[&amenity_id]).await?;
        map_row_opt(
            row_opt,
            Amenity::try_from_row,
            &format!("AmenityRepo::get id={}", amenity_id),
        )
    }

    async fn list(&self, limit: i64, offset: i64) -> DbResult<Vec<Amenity>> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached("SELECT * FROM amenities ORDER BY name LIMIT $1 OFFSET $2")
            .await?;

        let rows = client.query(&stmt, &[&limit, &offset]).await?;
        rows.iter().map(Amenity::try_from_row).collect()
    }

    async fn insert(&self, amenity: Amenity) -> DbResult<Amenity> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached(
                r#"
            INSERT INTO amenities (id, name, description)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
            )
            .await?;

        let row = client
            .query_one(&stmt, &[&amenity.id, &amenity.name, &amenity.description])
            .await?;

        Amenity::try_from_row(&row)
    }

    async fn update(&self, amenity: &Amenity) -> DbResult<Amenity> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached(
                r#"
            UPDATE amenities
            SET name = $2, description = $3
            WHERE id = $1
            RETURNING *
            "#,
            )
            .await?;

        let row_opt = client
            .query_opt(&stmt, &[&amenity.id, &amenity.name, &amenity.description])
            .await?;

        match map_row_opt(row_opt, Amenity::try_from_row, "AmenityRepo::update")? {
            Some(updated) => Ok(updated),
            None => Err(crate::db::error::DbError::NotFound),
        }
    }

    async fn delete(&self, amenity_id: AmenityId) -> DbResult<bool> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached("DELETE FROM amenities WHERE id = $1")
            .await?;

        let n = client.execute(&stmt, &[&amenity_id]).await?;
        Ok(n == 1)
    }
}
