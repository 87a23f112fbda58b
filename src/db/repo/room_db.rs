use crate::db::error::DbError;
use crate::db::repo::RoomRepo;
use crate::db::{Db, DbResult, map_row_opt};
use crate::models::amenity::Amenity;
use crate::models::facility::Facility;
use crate::models::house_rule::HouseRule;
use crate::models::room::{Room, RoomTagSets};
use crate::models::types::RoomId;
use deadpool_postgres::Transaction;
use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;
use tokio_postgres::types::{FromSql, ToSql};

pub struct RoomRepository {
    pub db: Arc<Db>,
}

impl RoomRepository {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }
}

/// Check that every id in the list resolves to a row of `table`. Runs
/// inside the caller's transaction so a concurrent tag delete still ends
/// in a rollback, and runs before any association row is touched so a
/// miss never leaves a half-replaced set.
async fn resolve_tag_ids<T>(
    tx: &Transaction<'_>,
    table: &str,
    field: &'static str,
    what: &str,
    ids: &[T],
) -> DbResult<()>
where
    T: ToSql + Sync + Copy + Eq + Hash + for<'a> FromSql<'a>,
{
    if ids.is_empty() {
        return Ok(());
    }

    let sql = format!("SELECT id FROM {table} WHERE id = ANY($1)");
    let rows = tx.query(sql.as_str(), &[&ids]).await?;

    let found: HashSet<T> = rows.iter().map(|row| row.get::<_, T>(0)).collect();
    if ids.iter().any(|id| !found.contains(id)) {
        return Err(DbError::Validation {
            field,
            message: format!("{what} not found"),
        });
    }

    Ok(())
}

async fn attach_tag_ids<T: ToSql + Sync>(
    tx: &Transaction<'_>,
    insert_sql: &str,
    room_id: RoomId,
    ids: &[T],
) -> DbResult<()> {
    let stmt = tx.prepare_cached(insert_sql).await?;
    for id in ids {
        tx.execute(&stmt, &[&room_id, id]).await?;
    }
    Ok(())
}

async fn resolve_tags(tx: &Transaction<'_>, tags: &RoomTagSets) -> DbResult<()> {
    resolve_tag_ids(tx, "amenities", "amenities", "amenity", &tags.amenities).await?;
    resolve_tag_ids(tx, "facilities", "facilities", "facility", &tags.facilities).await?;
    resolve_tag_ids(tx, "house_rules", "house_rules", "house rule", &tags.house_rules).await?;
    Ok(())
}

async fn attach_tags(tx: &Transaction<'_>, room_id: RoomId, tags: &RoomTagSets) -> DbResult<()> {
    attach_tag_ids(
        tx,
        "INSERT INTO room_amenities (room_id, amenity_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        room_id,
        &tags.amenities,
    )
    .await?;
    attach_tag_ids(
        tx,
        "INSERT INTO room_facilities (room_id, facility_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        room_id,
        &tags.facilities,
    )
    .await?;
    attach_tag_ids(
        tx,
        "INSERT INTO room_house_rules (room_id, house_rule_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        room_id,
        &tags.house_rules,
    )
    .await?;
    Ok(())
}

async fn clear_tags(tx: &Transaction<'_>, room_id: RoomId) -> DbResult<()> {
    for table in ["room_amenities", "room_facilities", "room_house_rules"] {
        let sql = format!("DELETE FROM {table} WHERE room_id = $1");
        tx.execute(sql.as_str(), &[&room_id]).await?;
    }
    Ok(())
}

#[async_trait::async_trait]
impl RoomRepo for RoomRepository {
    async fn get(&self, room_id: RoomId) -> DbResult<Option<Room>> {
        let client = self.db.get_client().await?;

        let stmt = client.prepare_cached("SELECT * FROM rooms WHERE id = $1").await?;

        let row_opt = client.query_opt(&stmt, &[&room_id]).await?;
        map_row_opt(row_opt, Room::try_from_row, &format!("RoomRepo::get id={}", room_id))
    }

    async fn list(&self, limit: i64, offset: i64) -> DbResult<Vec<Room>> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached("SELECT * FROM rooms ORDER BY created_at DESC LIMIT $1 OFFSET $2")
            .await?;

        let rows = client.query(&stmt, &[&limit, &offset]).await?;
        rows.iter().map(Room::try_from_row).collect()
    }

    async fn amenities_of(&self, room_id: RoomId) -> DbResult<Vec<Amenity>> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached(
                r#"
            SELECT a.*
            FROM amenities a
            JOIN room_amenities ra ON ra.amenity_id = a.id
            WHERE ra.room_id = $1
            ORDER BY a.name
            "#,
            )
            .await?;

        let rows = client.query(&stmt, &[&room_id]).await?;
        rows.iter().map(Amenity::try_from_row).collect()
    }

    async fn facilities_of(&self, room_id: RoomId) -> DbResult<Vec<Facility>> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached(
                r#"
            SELECT f.*
            FROM facilities f
            JOIN room_facilities rf ON rf.facility_id = f.id
            WHERE rf.room_id = $1
            ORDER BY f.name
            "#,
            )
            .await?;

        let rows = client.query(&stmt, &[&room_id]).await?;
        rows.iter().map(Facility::try_from_row).collect()
    }

    async fn house_rules_of(&self, room_id: RoomId) -> DbResult<Vec<HouseRule>> {
        let client = self.db.get_client().await?;

        let stmt = client
            .prepare_cached(
                r#"
            SELECT h.*
            FROM house_rules h
            JOIN room_house_rules rh ON rh.house_rule_id = h.id
            WHERE rh.room_id = $1
            ORDER BY h.name
            "#,
            )
            .await?;

        let rows = client.query(&stmt, &[&room_id]).await?;
        rows.iter().map(HouseRule::try_from_row).collect()
    }

    async fn create(&self, room: &Room, tags: &RoomTagSets) -> DbResult<Room> {
        let mut client = self.db.get_client().await?;
        let tx = client.build_transaction().start().await?;

        let row = tx
            .query_one(
                r#"
            INSERT INTO rooms (
                id, name, description, country, city, address,
                price, guests, beds, bedrooms, bathrooms, rooms,
                instant_book, pet_friendly, type_of_place, property_type,
                category_id, host_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
            RETURNING *
            "#,
                &[
                    &room.id,
                    &room.name,
                    &room.description,
                    &room.country,
                    &room.city,
                    &room.address,
                    &room.price,
                    &room.guests,
                    &room.beds,
                    &room.bedrooms,
                    &room.bathrooms,
                    &room.rooms,
                    &room.instant_book,
                    &room.pet_friendly,
                    &room.type_of_place,
                    &room.property_type,
                    &room.category_id,
                    &room.host_id,
                ],
            )
            .await?;
        let created = Room::try_from_row(&row)?;

        // A miss here drops the transaction, so the room row above is
        // rolled back with it.
        resolve_tags(&tx, tags).await?;
        attach_tags(&tx, created.id, tags).await?;

        tx.commit().await?;
        Ok(created)
    }

    async fn update(&self, room: &Room, tags: &RoomTagSets) -> DbResult<Room> {
        let mut client = self.db.get_client().await?;
        let tx = client.build_transaction().start().await?;

        let row_opt = tx
            .query_opt(
                r#"
            UPDATE rooms SET
                name = $2, description = $3, country = $4, city = $5, address = $6,
                price = $7, guests = $8, beds = $9, bedrooms = $10, bathrooms = $11, rooms = $12,
                instant_book = $13, pet_friendly = $14, type_of_place = $15, property_type = $16,
                category_id = $17, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
                &[
                    &room.id,
                    &room.name,
                    &room.description,
                    &room.country,
                    &room.city,
                    &room.address,
                    &room.price,
                    &room.guests,
                    &room.beds,
                    &room.bedrooms,
                    &room.bathrooms,
                    &room.rooms,
                    &room.instant_book,
                    &room.pet_friendly,
                    &room.type_of_place,
                    &room.property_type,
                    &room.category_id,
                ],
            )
            .await?;
        let Some(row) = row_opt else {
            return Err(DbError::NotFound);
        };
        let updated = Room::try_from_row(&row)?;

        // Every replacement set must resolve before anything is cleared;
        // a miss midway must leave the previous field values and tag sets
        // unapplied.
        resolve_tags(&tx, tags).await?;

        clear_tags(&tx, updated.id).await?;
        attach_tags(&tx, updated.id, tags).await?;

        tx.commit().await?;
        Ok(updated)
    }

    async fn delete(&self, room_id: RoomId) -> DbResult<()> {
        let client = self.db.get_client().await?;

        // bookings.room_id is ON DELETE SET NULL, review and tag
        // membership rows cascade; see the rooms migration.
        let stmt = client.prepare_cached("DELETE FROM rooms WHERE id = $1").await?;

        let n = client.execute(&stmt, &[&room_id]).await?;
        if n == 0 {
            return Err(DbError::NotFound);
        }
        Ok(())
    }
}
