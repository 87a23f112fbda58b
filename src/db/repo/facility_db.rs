use crate::db::repo::facility::FacilityRepo;
use crate::db::{Db, DbResult, map_row_opt};
use crate::models::facility::Facility;
use crate::models::types::FacilityId;
use std::sync::Arc;

pub struct FacilityRepository {
    db: Arc<Db>,
}

impl FacilityRepository {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl FacilityRepo for FacilityRepository {
    async fn get(&self, facility_id: FacilityId) -> DbResult<Option<Facility>> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached("SELECT * FROM facilities WHERE id = $1")
            .await?;

        let row_opt = client.query_opt(&stmt, &[&facility_id]).await?;
        map_row_opt(
            row_opt,
            Facility::try_from_row,
            &format!("FacilityRepo::get id={}", facility_id),
        )
    }

    async fn list(&self, limit: i64, offset: i64) -> DbResult<Vec<Facility>> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached("SELECT * FROM facilities ORDER BY name LIMIT $1 OFFSET $2")
            .await?;

        let rows = client.query(&stmt, &[&limit, &offset]).await?;
        rows.iter().map(Facility::try_from_row).collect()
    }

    async fn insert(&self, facility: Facility) -> DbResult<Facility> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached(
                r#"
            INSERT INTO facilities (id, name, description)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
            )
            .await?;

        let row = client
            .query_one(&stmt, &[&facility.id, &facility.name, &facility.description])
            .await?;

        Facility::try_from_row(&row)
    }

    async fn update(&self, facility: &Facility) -> DbResult<Facility> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached(
                r#"
            UPDATE facilities
            SET name = $2, description = $3
            WHERE id = $1
            RETURNING *
            "#,
            )
            .await?;

        let row_opt = client
            .query_opt(&stmt, &[&facility.id, &facility.name, &facility.description])
            .await?;

        match map_row_opt(row_opt, Facility::try_from_row, "FacilityRepo::update")? {
            Some(updated) => Ok(updated),
            None => Err(crate::db::error::DbError::NotFound),
        }
    }

    async fn delete(&self, facility_id: FacilityId) -> DbResult<bool> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached("DELETE FROM facilities WHERE id = $1")
            .await?;

        let n = client.execute(&stmt, &[&facility_id]).await?;
        Ok(n == 1)
    }
}
