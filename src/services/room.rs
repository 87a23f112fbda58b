use crate::db::error::DbError;
use crate::db::repo::{CategoryRepo, RoomRepo};
use crate::error::{AppResult, DomainError};
use crate::models::account::Account;
use crate::models::category::{Category, CategoryKind};
use crate::models::room::{Room, RoomDetail, RoomDraft, RoomPatch};
use crate::models::types::RoomId;
use std::sync::Arc;

/// The room write transaction. All room storage mutations go through
/// here: field validation and the category kind check run before the
/// transaction opens, the room write plus the amenity association
/// replacement happen atomically inside it.
pub struct RoomService {
    room_repo: Arc<dyn RoomRepo>,
    category_repo: Arc<dyn CategoryRepo>,
}

impl RoomService {
    pub fn new(room_repo: Arc<dyn RoomRepo>, category_repo: Arc<dyn CategoryRepo>) -> Self {
        Self {
            room_repo,
            category_repo,
        }
    }

    pub async fn get_room(&self, room_id: RoomId) -> AppResult<RoomDetail> {
        let room = self
            .room_repo
            .get(room_id)
            .await?
            .ok_or(DomainError::NotFound("room"))?;
        self.assemble(room).await
    }

    pub async fn list_rooms(&self, limit: i64, offset: i64) -> AppResult<Vec<Room>> {
        Ok(self.room_repo.list(limit, offset).await?)
    }

    pub async fn room_amenities(&self, room_id: RoomId) -> AppResult<Vec<crate::models::amenity::Amenity>> {
        // 404 on unknown room rather than an empty list
        if self.room_repo.get(room_id).await?.is_none() {
            return Err(DomainError::NotFound("room"));
        }
        Ok(self.room_repo.amenities_of(room_id).await?)
    }

    pub async fn create_room(&self, acting: &Account, draft: RoomDraft) -> AppResult<RoomDetail> {
        let tags = draft.tag_sets();
        let room = draft.into_room(RoomId::new(), acting.id);

        let errors = room.validate();
        if !errors.is_empty() {
            return Err(DomainError::ValidationFailed(errors));
        }

        let category = self.resolve_category(&room).await?;

        let created = self
            .room_repo
            .create(&room, &tags)
            .await
            .map_err(map_write_err)?;

        tracing::info!(room_id = %created.id, host = %acting.username, "room created");
        self.assemble_with(created, category).await
    }

    pub async fn update_room(&self, acting: &Account, room_id: RoomId, patch: RoomPatch) -> AppResult<RoomDetail> {
        let existing = self
            .room_repo
            .get(room_id)
            .await?
            .ok_or(DomainError::NotFound("room"))?;

        // Ownership is checked before any other validation.
        if existing.host_id != acting.id {
            return Err(DomainError::PermissionDenied);
        }

        let merged = patch.apply(&existing);
        let errors = merged.validate();
        if !errors.is_empty() {
            return Err(DomainError::ValidationFailed(errors));
        }

        let category = self.resolve_category(&merged).await?;

        let updated = self
            .room_repo
            .update(&merged, &patch.tag_sets())
            .await
            .map_err(map_write_err)?;

        tracing::info!(room_id = %updated.id, host = %acting.username, "room updated");
        self.assemble_with(updated, category).await
    }

    pub async fn delete_room(&self, acting: &Account, room_id: RoomId) -> AppResult<()> {
        let existing = self
            .room_repo
            .get(room_id)
            .await?
            .ok_or(DomainError::NotFound("room"))?;

        if existing.host_id != acting.id {
            return Err(DomainError::PermissionDenied);
        }

        self.room_repo.delete(room_id).await?;
        tracing::info!(room_id = %room_id, host = %acting.username, "room deleted");
        Ok(())
    }

    /// Resolve the room's category and enforce that its kind is `rooms`.
    async fn resolve_category(&self, room: &Room) -> AppResult<Category> {
        let category = self
            .category_repo
            .get(room.category_id)
            .await?
            .ok_or(DomainError::NotFound("category"))?;

        if category.kind == CategoryKind::Experiences {
            return Err(DomainError::validation("category", "category kind mismatch"));
        }

        Ok(category)
    }

    async fn assemble(&self, room: Room) -> AppResult<RoomDetail> {
        let category = self
            .category_repo
            .get(room.category_id)
            .await?
            .ok_or(DomainError::NotFound("category"))?;
        self.assemble_with(room, category).await
    }

    async fn assemble_with(&self, room: Room, category: Category) -> AppResult<RoomDetail> {
        let amenities = self.room_repo.amenities_of(room.id).await?;
        let facilities = self.room_repo.facilities_of(room.id).await?;
        let house_rules = self.room_repo.house_rules_of(room.id).await?;
        Ok(RoomDetail {
            room,
            category,
            amenities,
            facilities,
            house_rules,
        })
    }
}

/// Map storage failures from the transactional room write back onto the
/// domain taxonomy. Each cause keeps its own shape; nothing is collapsed
/// into a catch-all message.
fn map_write_err(e: DbError) -> DomainError {
    match e {
        // Tag resolution failed inside the transaction; the repo names
        // the offending set.
        DbError::Validation { field, message } => DomainError::Validation { field, message },
        // A referenced record was deleted between validation and commit;
        // the constraint failure surfaces as validation, not as a raw
        // storage error.
        DbError::ForeignKey(constraint) => DomainError::Validation {
            field: fk_field(constraint.as_deref()),
            message: "referenced record no longer exists".into(),
        },
        DbError::NotFound => DomainError::NotFound("room"),
        other => DomainError::Db(other),
    }
}

/// Postgres names foreign key constraints after the referencing column,
/// so the violated constraint tells us which request field to blame.
fn fk_field(constraint: Option<&str>) -> &'static str {
    match constraint {
        Some(c) if c.contains("category") => "category",
        Some(c) if c.contains("amenity") => "amenities",
        Some(c) if c.contains("facility") => "facilities",
        Some(c) if c.contains("house_rule") => "house_rules",
        _ => "detail",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fk_violation_blames_the_referencing_field() {
        let err = map_write_err(DbError::ForeignKey(Some(
            "room_amenities_amenity_id_fkey".to_string(),
        )));
        assert!(matches!(err, DomainError::Validation { field: "amenities", .. }));

        let err = map_write_err(DbError::ForeignKey(Some("rooms_category_id_fkey".to_string())));
        assert!(matches!(err, DomainError::Validation { field: "category", .. }));

        let err = map_write_err(DbError::ForeignKey(Some(
            "room_house_rules_house_rule_id_fkey".to_string(),
        )));
        assert!(matches!(err, DomainError::Validation { field: "house_rules", .. }));
    }

    #[test]
    fn fk_violation_without_constraint_stays_neutral() {
        let err = map_write_err(DbError::ForeignKey(None));
        assert!(matches!(err, DomainError::Validation { field: "detail", .. }));
    }
}
