//! Properties of the room write transaction, exercised against in-memory
//! repositories that keep the same all-or-nothing contract as the
//! Postgres implementations.

use async_trait::async_trait;
use hearth::db::DbResult;
use hearth::db::error::DbError;
use hearth::db::repo::{BookingRepo, CategoryRepo, RoomRepo};
use hearth::error::DomainError;
use hearth::models::account::Account;
use hearth::models::amenity::Amenity;
use hearth::models::booking::Booking;
use hearth::models::category::{Category, CategoryKind};
use hearth::models::facility::Facility;
use hearth::models::house_rule::HouseRule;
use hearth::models::room::{PropertyType, Room, RoomDraft, RoomPatch, RoomTagSets, TypeOfPlace};
use hearth::models::types::{AccountId, AmenityId, BookingId, CategoryId, FacilityId, HouseRuleId, RoomId};
use hearth::services::room::RoomService;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct MemStore {
    categories: HashMap<CategoryId, Category>,
    amenities: HashMap<AmenityId, Amenity>,
    facilities: HashMap<FacilityId, Facility>,
    house_rules: HashMap<HouseRuleId, HouseRule>,
    rooms: HashMap<RoomId, Room>,
    room_amenities: HashMap<RoomId, BTreeSet<AmenityId>>,
    room_facilities: HashMap<RoomId, BTreeSet<FacilityId>>,
    room_house_rules: HashMap<RoomId, BTreeSet<HouseRuleId>>,
    bookings: HashMap<BookingId, Booking>,
}

type Shared = Arc<Mutex<MemStore>>;

struct MemRooms(Shared);
struct MemCategories(Shared);
struct MemBookings(Shared);

impl MemStore {
    fn resolve_tags(&self, tags: &RoomTagSets) -> DbResult<()> {
        if tags.amenities.iter().any(|id| !self.amenities.contains_key(id)) {
            return Err(DbError::Validation {
                field: "amenities",
                message: "amenity not found".into(),
            });
        }
        if tags.facilities.iter().any(|id| !self.facilities.contains_key(id)) {
            return Err(DbError::Validation {
                field: "facilities",
                message: "facility not found".into(),
            });
        }
        if tags.house_rules.iter().any(|id| !self.house_rules.contains_key(id)) {
            return Err(DbError::Validation {
                field: "house_rules",
                message: "house rule not found".into(),
            });
        }
        Ok(())
    }

    fn store_tags(&mut self, room_id: RoomId, tags: &RoomTagSets) {
        self.room_amenities.insert(room_id, tags.amenities.iter().copied().collect());
        self.room_facilities.insert(room_id, tags.facilities.iter().copied().collect());
        self.room_house_rules
            .insert(room_id, tags.house_rules.iter().copied().collect());
    }
}

#[async_trait]
impl RoomRepo for MemRooms {
    async fn get(&self, room_id: RoomId) -> DbResult<Option<Room>> {
        Ok(self.0.lock().unwrap().rooms.get(&room_id).cloned())
    }

    async fn list(&self, limit: i64, offset: i64) -> DbResult<Vec<Room>> {
        let store = self.0.lock().unwrap();
        let mut rooms: Vec<_> = store.rooms.values().cloned().collect();
        rooms.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rooms.into_iter().skip(offset as usize).take(limit as usize).collect())
    }

    async fn amenities_of(&self, room_id: RoomId) -> DbResult<Vec<Amenity>> {
        let store = self.0.lock().unwrap();
        let mut amenities: Vec<Amenity> = store
            .room_amenities
            .get(&room_id)
            .map(|set| set.iter().filter_map(|id| store.amenities.get(id)).cloned().collect())
            .unwrap_or_default();
        amenities.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(amenities)
    }

    async fn facilities_of(&self, room_id: RoomId) -> DbResult<Vec<Facility>> {
        let store = self.0.lock().unwrap();
        let mut facilities: Vec<Facility> = store
            .room_facilities
            .get(&room_id)
            .map(|set| set.iter().filter_map(|id| store.facilities.get(id)).cloned().collect())
            .unwrap_or_default();
        facilities.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(facilities)
    }

    async fn house_rules_of(&self, room_id: RoomId) -> DbResult<Vec<HouseRule>> {
        let store = self.0.lock().unwrap();
        let mut house_rules: Vec<HouseRule> = store
            .room_house_rules
            .get(&room_id)
            .map(|set| set.iter().filter_map(|id| store.house_rules.get(id)).cloned().collect())
            .unwrap_or_default();
        house_rules.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(house_rules)
    }

    async fn create(&self, room: &Room, tags: &RoomTagSets) -> DbResult<Room> {
        let mut store = self.0.lock().unwrap();
        // Same contract as the SQL transaction: nothing lands unless
        // every tag list resolves.
        store.resolve_tags(tags)?;
        store.rooms.insert(room.id, room.clone());
        store.store_tags(room.id, tags);
        Ok(room.clone())
    }

    async fn update(&self, room: &Room, tags: &RoomTagSets) -> DbResult<Room> {
        let mut store = self.0.lock().unwrap();
        if !store.rooms.contains_key(&room.id) {
            return Err(DbError::NotFound);
        }
        store.resolve_tags(tags)?;
        store.rooms.insert(room.id, room.clone());
        store.store_tags(room.id, tags);
        Ok(room.clone())
    }

    async fn delete(&self, room_id: RoomId) -> DbResult<()> {
        let mut store = self.0.lock().unwrap();
        if store.rooms.remove(&room_id).is_none() {
            return Err(DbError::NotFound);
        }
        store.room_amenities.remove(&room_id);
        store.room_facilities.remove(&room_id);
        store.room_house_rules.remove(&room_id);
        // bookings.room_id is ON DELETE SET NULL in the schema
        for booking in store.bookings.values_mut() {
            if booking.room_id == Some(room_id) {
                booking.room_id = None;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryRepo for MemCategories {
    async fn get(&self, category_id: CategoryId) -> DbResult<Option<Category>> {
        Ok(self.0.lock().unwrap().categories.get(&category_id).cloned())
    }

    async fn list(&self) -> DbResult<Vec<Category>> {
        Ok(self.0.lock().unwrap().categories.values().cloned().collect())
    }
}

#[async_trait]
impl BookingRepo for MemBookings {
    async fn list_for_room(&self, room_id: RoomId, limit: i64, offset: i64) -> DbResult<Vec<Booking>> {
        let store = self.0.lock().unwrap();
        let mut bookings: Vec<_> = store
            .bookings
            .values()
            .filter(|b| b.room_id == Some(room_id))
            .cloned()
            .collect();
        bookings.sort_by_key(|b| b.check_in);
        Ok(bookings.into_iter().skip(offset as usize).take(limit as usize).collect())
    }

    async fn insert(&self, booking: Booking) -> DbResult<Booking> {
        self.0.lock().unwrap().bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }
}

struct Fixture {
    store: Shared,
    service: RoomService,
    host: Account,
    rooms_category: CategoryId,
    experiences_category: CategoryId,
}

fn account(username: &str) -> Account {
    Account {
        id: AccountId::new(),
        username: username.into(),
        email: format!("{username}@example.com"),
        password_hash: "unused".into(),
        created_at: chrono::Utc::now(),
        last_login: None,
    }
}

fn fixture() -> Fixture {
    let store: Shared = Arc::default();
    let rooms_category = CategoryId::new();
    let experiences_category = CategoryId::new();
    {
        let mut s = store.lock().unwrap();
        s.categories.insert(
            rooms_category,
            Category {
                id: rooms_category,
                name: "Beachfront".into(),
                kind: CategoryKind::Rooms,
                created_at: chrono::Utc::now(),
            },
        );
        s.categories.insert(
            experiences_category,
            Category {
                id: experiences_category,
                name: "City walks".into(),
                kind: CategoryKind::Experiences,
                created_at: chrono::Utc::now(),
            },
        );
    }

    let service = RoomService::new(
        Arc::new(MemRooms(store.clone())),
        Arc::new(MemCategories(store.clone())),
    );

    Fixture {
        store,
        service,
        host: account("marta"),
        rooms_category,
        experiences_category,
    }
}

impl Fixture {
    fn add_amenity(&self, name: &str) -> AmenityId {
        let id = AmenityId::new();
        self.store.lock().unwrap().amenities.insert(
            id,
            Amenity {
                id,
                name: name.into(),
                description: None,
                created_at: chrono::Utc::now(),
            },
        );
        id
    }

    fn add_facility(&self, name: &str) -> FacilityId {
        let id = FacilityId::new();
        self.store.lock().unwrap().facilities.insert(
            id,
            Facility {
                id,
                name: name.into(),
                description: None,
                created_at: chrono::Utc::now(),
            },
        );
        id
    }

    fn add_house_rule(&self, name: &str) -> HouseRuleId {
        let id = HouseRuleId::new();
        self.store.lock().unwrap().house_rules.insert(
            id,
            HouseRule {
                id,
                name: name.into(),
                description: None,
                created_at: chrono::Utc::now(),
            },
        );
        id
    }

    fn draft(&self, amenities: Vec<AmenityId>) -> RoomDraft {
        RoomDraft {
            name: "Canal loft".into(),
            description: "Quiet loft by the water".into(),
            country: "NL".into(),
            city: "Amsterdam".into(),
            address: "Brouwersgracht 1".into(),
            price: 120,
            guests: 2,
            beds: 1,
            bedrooms: 1,
            bathrooms: 1,
            rooms: 2,
            instant_book: false,
            pet_friendly: true,
            type_of_place: TypeOfPlace::EntirePlace,
            property_type: PropertyType::Apartment,
            category: self.rooms_category,
            amenities,
            facilities: vec![],
            house_rules: vec![],
        }
    }

    fn patch(&self, amenities: Vec<AmenityId>) -> RoomPatch {
        RoomPatch {
            name: None,
            description: None,
            country: None,
            city: None,
            address: None,
            price: None,
            guests: None,
            beds: None,
            bedrooms: None,
            bathrooms: None,
            rooms: None,
            instant_book: None,
            pet_friendly: None,
            type_of_place: None,
            property_type: None,
            category: self.rooms_category,
            amenities,
            facilities: vec![],
            house_rules: vec![],
        }
    }

    fn amenity_set(&self, room_id: RoomId) -> BTreeSet<AmenityId> {
        self.store
            .lock()
            .unwrap()
            .room_amenities
            .get(&room_id)
            .cloned()
            .unwrap_or_default()
    }

    fn facility_set(&self, room_id: RoomId) -> BTreeSet<FacilityId> {
        self.store
            .lock()
            .unwrap()
            .room_facilities
            .get(&room_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[tokio::test]
async fn create_rejects_experience_category() {
    let fx = fixture();
    let mut draft = fx.draft(vec![]);
    draft.category = fx.experiences_category;

    let err = fx.service.create_room(&fx.host, draft).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation { field: "category", .. }
    ));
    assert!(fx.store.lock().unwrap().rooms.is_empty());
}

#[tokio::test]
async fn create_rejects_unknown_category() {
    let fx = fixture();
    let mut draft = fx.draft(vec![]);
    draft.category = CategoryId::new();

    let err = fx.service.create_room(&fx.host, draft).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound("category")));
}

#[tokio::test]
async fn create_with_unknown_amenity_persists_nothing() {
    let fx = fixture();
    let wifi = fx.add_amenity("wifi");
    let missing = AmenityId::new();

    let err = fx.service.create_room(&fx.host, fx.draft(vec![wifi, missing])).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation { field: "amenities", .. }
    ));

    let store = fx.store.lock().unwrap();
    assert!(store.rooms.is_empty());
    assert!(store.room_amenities.is_empty());
}

#[tokio::test]
async fn create_reports_each_invalid_field() {
    let fx = fixture();
    let mut draft = fx.draft(vec![]);
    draft.name = "".into();
    draft.price = 0;

    let err = fx.service.create_room(&fx.host, draft).await.unwrap_err();
    let DomainError::ValidationFailed(errors) = err else {
        panic!("expected ValidationFailed, got {err}");
    };
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["name", "price"]);
    assert!(fx.store.lock().unwrap().rooms.is_empty());
}

#[tokio::test]
async fn create_sets_host_and_category() {
    let fx = fixture();
    let wifi = fx.add_amenity("wifi");

    let detail = fx.service.create_room(&fx.host, fx.draft(vec![wifi])).await.unwrap();
    assert_eq!(detail.room.host_id, fx.host.id);
    assert_eq!(detail.category.id, fx.rooms_category);
    assert_eq!(detail.amenities.len(), 1);
    assert_eq!(detail.amenities[0].id, wifi);
}

#[tokio::test]
async fn create_attaches_facilities_and_house_rules() {
    let fx = fixture();
    let parking = fx.add_facility("parking");
    let no_smoking = fx.add_house_rule("no smoking");

    let mut draft = fx.draft(vec![]);
    draft.facilities = vec![parking];
    draft.house_rules = vec![no_smoking];

    let detail = fx.service.create_room(&fx.host, draft).await.unwrap();
    assert_eq!(detail.facilities.len(), 1);
    assert_eq!(detail.facilities[0].id, parking);
    assert_eq!(detail.house_rules.len(), 1);
    assert_eq!(detail.house_rules[0].id, no_smoking);
}

#[tokio::test]
async fn create_with_unknown_facility_persists_nothing() {
    let fx = fixture();
    let wifi = fx.add_amenity("wifi");

    let mut draft = fx.draft(vec![wifi]);
    draft.facilities = vec![FacilityId::new()];

    let err = fx.service.create_room(&fx.host, draft).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation { field: "facilities", .. }
    ));

    let store = fx.store.lock().unwrap();
    assert!(store.rooms.is_empty());
    assert!(store.room_amenities.is_empty());
    assert!(store.room_facilities.is_empty());
}

#[tokio::test]
async fn update_requires_host() {
    let fx = fixture();
    let detail = fx.service.create_room(&fx.host, fx.draft(vec![])).await.unwrap();

    let stranger = account("sam");
    let mut patch = fx.patch(vec![]);
    patch.price = Some(999);

    let err = fx
        .service
        .update_room(&stranger, detail.room.id, patch)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::PermissionDenied));

    let store = fx.store.lock().unwrap();
    assert_eq!(store.rooms[&detail.room.id].price, 120);
}

#[tokio::test]
async fn update_keeps_amenities_when_one_is_unknown() {
    let fx = fixture();
    let a = fx.add_amenity("wifi");
    let b = fx.add_amenity("kitchen");
    let c = fx.add_amenity("parking");
    let detail = fx.service.create_room(&fx.host, fx.draft(vec![a, b])).await.unwrap();

    // {a, b} -> {b, c, missing} must fail and leave {a, b} intact
    let missing = AmenityId::new();
    let err = fx
        .service
        .update_room(&fx.host, detail.room.id, fx.patch(vec![b, c, missing]))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation { field: "amenities", .. }
    ));
    assert_eq!(fx.amenity_set(detail.room.id), BTreeSet::from([a, b]));
}

#[tokio::test]
async fn update_replaces_amenity_set() {
    let fx = fixture();
    let a = fx.add_amenity("wifi");
    let b = fx.add_amenity("kitchen");
    let c = fx.add_amenity("parking");
    let detail = fx.service.create_room(&fx.host, fx.draft(vec![a, b])).await.unwrap();

    let updated = fx
        .service
        .update_room(&fx.host, detail.room.id, fx.patch(vec![c]))
        .await
        .unwrap();
    assert_eq!(fx.amenity_set(detail.room.id), BTreeSet::from([c]));
    assert_eq!(updated.amenities.len(), 1);
    assert_eq!(updated.amenities[0].id, c);
}

#[tokio::test]
async fn update_keeps_every_tag_set_when_a_house_rule_is_unknown() {
    let fx = fixture();
    let wifi = fx.add_amenity("wifi");
    let parking = fx.add_facility("parking");

    let mut draft = fx.draft(vec![wifi]);
    draft.facilities = vec![parking];
    let detail = fx.service.create_room(&fx.host, draft).await.unwrap();

    // An unknown house rule must abort the whole write, amenity and
    // facility sets included.
    let mut patch = fx.patch(vec![]);
    patch.house_rules = vec![HouseRuleId::new()];
    let err = fx
        .service
        .update_room(&fx.host, detail.room.id, patch)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation { field: "house_rules", .. }
    ));

    assert_eq!(fx.amenity_set(detail.room.id), BTreeSet::from([wifi]));
    assert_eq!(fx.facility_set(detail.room.id), BTreeSet::from([parking]));
}

#[tokio::test]
async fn update_replaces_facility_set() {
    let fx = fixture();
    let parking = fx.add_facility("parking");
    let elevator = fx.add_facility("elevator");

    let mut draft = fx.draft(vec![]);
    draft.facilities = vec![parking];
    let detail = fx.service.create_room(&fx.host, draft).await.unwrap();

    let mut patch = fx.patch(vec![]);
    patch.facilities = vec![elevator];
    let updated = fx.service.update_room(&fx.host, detail.room.id, patch).await.unwrap();

    assert_eq!(fx.facility_set(detail.room.id), BTreeSet::from([elevator]));
    assert_eq!(updated.facilities.len(), 1);
    assert_eq!(updated.facilities[0].id, elevator);
}

#[tokio::test]
async fn update_merges_partial_fields() {
    let fx = fixture();
    let detail = fx.service.create_room(&fx.host, fx.draft(vec![])).await.unwrap();

    let mut patch = fx.patch(vec![]);
    patch.price = Some(200);
    let updated = fx.service.update_room(&fx.host, detail.room.id, patch).await.unwrap();

    assert_eq!(updated.room.price, 200);
    assert_eq!(updated.room.name, detail.room.name);
    assert_eq!(updated.room.city, detail.room.city);
}

#[tokio::test]
async fn delete_requires_host_and_nulls_bookings() {
    let fx = fixture();
    let bookings = MemBookings(fx.store.clone());
    let detail = fx.service.create_room(&fx.host, fx.draft(vec![])).await.unwrap();

    let booking = bookings
        .insert(Booking {
            id: BookingId::new(),
            room_id: Some(detail.room.id),
            guest_id: AccountId::new(),
            check_in: "2026-09-10".parse().unwrap(),
            check_out: "2026-09-12".parse().unwrap(),
            guests: 2,
            created_at: chrono::Utc::now(),
        })
        .await
        .unwrap();

    let stranger = account("sam");
    let err = fx.service.delete_room(&stranger, detail.room.id).await.unwrap_err();
    assert!(matches!(err, DomainError::PermissionDenied));

    fx.service.delete_room(&fx.host, detail.room.id).await.unwrap();

    let store = fx.store.lock().unwrap();
    assert!(store.rooms.is_empty());
    // The booking survives with its room reference nulled.
    assert_eq!(store.bookings[&booking.id].room_id, None);
}

#[tokio::test]
async fn update_of_missing_room_is_not_found() {
    let fx = fixture();
    let err = fx
        .service
        .update_room(&fx.host, RoomId::new(), fx.patch(vec![]))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound("room")));
}
