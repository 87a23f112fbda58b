use crate::db::DbResult;
use crate::error::FieldError;
use crate::models::amenity::Amenity;
use crate::models::category::Category;
use crate::models::facility::Facility;
use crate::models::house_rule::HouseRule;
use crate::models::types::{AccountId, AmenityId, CategoryId, FacilityId, HouseRuleId, RoomId};
use postgres_types::private::BytesMut;
use postgres_types::{FromSql, IsNull, ToSql, Type};
use serde::{Deserialize, Serialize};
use std::error::Error;
use tokio_postgres::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeOfPlace {
    EntirePlace,
    PrivateRoom,
    SharedRoom,
    HotelRoom,
}

impl TypeOfPlace {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeOfPlace::EntirePlace => "entire_place",
            TypeOfPlace::PrivateRoom => "private_room",
            TypeOfPlace::SharedRoom => "shared_room",
            TypeOfPlace::HotelRoom => "hotel_room",
        }
    }
}

impl ToSql for TypeOfPlace {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        self.as_str().to_sql(ty, out)
    }

    fn accepts(ty: &Type) -> bool {
        ty == &Type::TEXT
    }

    fn to_sql_checked(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        self.to_sql(ty, out)
    }
}

impl FromSql<'_> for TypeOfPlace {
    fn from_sql(ty: &Type, raw: &[u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
        let s = String::from_sql(ty, raw)?;
        match s.as_str() {
            "entire_place" => Ok(TypeOfPlace::EntirePlace),
            "private_room" => Ok(TypeOfPlace::PrivateRoom),
            "shared_room" => Ok(TypeOfPlace::SharedRoom),
            "hotel_room" => Ok(TypeOfPlace::HotelRoom),
            _ => Err(format!("Unknown type of place: {}", s).into()),
        }
    }

    fn accepts(ty: &Type) -> bool {
        ty == &Type::TEXT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    House,
    Apartment,
    Guesthouse,
    Hotel,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "house",
            PropertyType::Apartment => "apartment",
            PropertyType::Guesthouse => "guesthouse",
            PropertyType::Hotel => "hotel",
        }
    }
}

impl ToSql for PropertyType {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        self.as_str().to_sql(ty, out)
    }

    fn accepts(ty: &Type) -> bool {
        ty == &Type::TEXT
    }

    fn to_sql_checked(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        self.to_sql(ty, out)
    }
}

impl FromSql<'_> for PropertyType {
    fn from_sql(ty: &Type, raw: &[u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
        let s = String::from_sql(ty, raw)?;
        match s.as_str() {
            "house" => Ok(PropertyType::House),
            "apartment" => Ok(PropertyType::Apartment),
            "guesthouse" => Ok(PropertyType::Guesthouse),
            "hotel" => Ok(PropertyType::Hotel),
            _ => Err(format!("Unknown property type: {}", s).into()),
        }
    }

    fn accepts(ty: &Type) -> bool {
        ty == &Type::TEXT
    }
}

/// A bookable listing as stored in the database. Storage is only mutated
/// through `RoomService`; the entity itself is plain data.
#[derive(Debug, Clone, Serialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub description: String,
    pub country: String,
    pub city: String,
    pub address: String,
    /// Price per night
    pub price: i32,
    pub guests: i32,
    pub beds: i32,
    pub bedrooms: i32,
    pub bathrooms: i32,
    /// Number of rooms in the listing
    pub rooms: i32,
    pub instant_book: bool,
    pub pet_friendly: bool,
    pub type_of_place: TypeOfPlace,
    pub property_type: PropertyType,
    pub category_id: CategoryId,
    /// Owning account; only the host may update or delete the room
    pub host_id: AccountId,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Room {
    pub fn try_from_row(row: &Row) -> DbResult<Self> {
        Ok(Self {
            id: row.try_get::<_, RoomId>("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            country: row.try_get("country")?,
            city: row.try_get("city")?,
            address: row.try_get("address")?,
            price: row.try_get("price")?,
            guests: row.try_get("guests")?,
            beds: row.try_get("beds")?,
            bedrooms: row.try_get("bedrooms")?,
            bathrooms: row.try_get("bathrooms")?,
            rooms: row.try_get("rooms")?,
            instant_book: row.try_get("instant_book")?,
            pet_friendly: row.try_get("pet_friendly")?,
            type_of_place: row.try_get("type_of_place")?,
            property_type: row.try_get("property_type")?,
            category_id: row.try_get::<_, CategoryId>("category_id")?,
            host_id: row.try_get::<_, AccountId>("host_id")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    /// Field-level validation, one entry per invalid field. Runs on the
    /// fully assembled record, so partial updates are checked against the
    /// merged result.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("name", &self.name),
            ("description", &self.description),
            ("country", &self.country),
            ("city", &self.city),
            ("address", &self.address),
        ] {
            if value.trim().is_empty() {
                errors.push(FieldError::new(field, "cannot be empty"));
            }
        }
        if self.name.len() > 150 {
            errors.push(FieldError::new("name", "longer than 150 characters"));
        }
        if self.price < 1 {
            errors.push(FieldError::new("price", "must be positive"));
        }
        if self.guests < 1 {
            errors.push(FieldError::new("guests", "must be at least 1"));
        }
        if self.rooms < 1 {
            errors.push(FieldError::new("rooms", "must be at least 1"));
        }
        for (field, value) in [
            ("beds", self.beds),
            ("bedrooms", self.bedrooms),
            ("bathrooms", self.bathrooms),
        ] {
            if value < 0 {
                errors.push(FieldError::new(field, "cannot be negative"));
            }
        }

        errors
    }
}

/// Full field set for a room create. The category and amenity ids are
/// resolved by `RoomService` before anything is persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomDraft {
    pub name: String,
    pub description: String,
    pub country: String,
    pub city: String,
    pub address: String,
    pub price: i32,
    pub guests: i32,
    #[serde(default)]
    pub beds: i32,
    #[serde(default)]
    pub bedrooms: i32,
    #[serde(default)]
    pub bathrooms: i32,
    pub rooms: i32,
    #[serde(default)]
    pub instant_book: bool,
    #[serde(default)]
    pub pet_friendly: bool,
    pub type_of_place: TypeOfPlace,
    pub property_type: PropertyType,
    pub category: CategoryId,
    #[serde(default)]
    pub amenities: Vec<AmenityId>,
    #[serde(default)]
    pub facilities: Vec<FacilityId>,
    #[serde(default)]
    pub house_rules: Vec<HouseRuleId>,
}

impl RoomDraft {
    pub fn tag_sets(&self) -> RoomTagSets {
        RoomTagSets {
            amenities: self.amenities.clone(),
            facilities: self.facilities.clone(),
            house_rules: self.house_rules.clone(),
        }
    }

    pub fn into_room(self, id: RoomId, host_id: AccountId) -> Room {
        let now = chrono::Utc::now();
        Room {
            id,
            name: self.name,
            description: self.description,
            country: self.country,
            city: self.city,
            address: self.address,
            price: self.price,
            guests: self.guests,
            beds: self.beds,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            rooms: self.rooms,
            instant_book: self.instant_book,
            pet_friendly: self.pet_friendly,
            type_of_place: self.type_of_place,
            property_type: self.property_type,
            category_id: self.category,
            host_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial field set for a room update. Unset fields retain their prior
/// values; the category and the three tag id lists are always supplied in
/// full and each tag set is replaced wholesale, never diffed.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub price: Option<i32>,
    pub guests: Option<i32>,
    pub beds: Option<i32>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub rooms: Option<i32>,
    pub instant_book: Option<bool>,
    pub pet_friendly: Option<bool>,
    pub type_of_place: Option<TypeOfPlace>,
    pub property_type: Option<PropertyType>,
    pub category: CategoryId,
    pub amenities: Vec<AmenityId>,
    pub facilities: Vec<FacilityId>,
    pub house_rules: Vec<HouseRuleId>,
}

impl RoomPatch {
    pub fn tag_sets(&self) -> RoomTagSets {
        RoomTagSets {
            amenities: self.amenities.clone(),
            facilities: self.facilities.clone(),
            house_rules: self.house_rules.clone(),
        }
    }

    /// Merge the patch over an existing record. Identity, host and
    /// creation timestamp are never touched.
    pub fn apply(&self, existing: &Room) -> Room {
        let mut room = existing.clone();
        if let Some(v) = &self.name {
            room.name = v.clone();
        }
        if let Some(v) = &self.description {
            room.description = v.clone();
        }
        if let Some(v) = &self.country {
            room.country = v.clone();
        }
        if let Some(v) = &self.city {
            room.city = v.clone();
        }
        if let Some(v) = &self.address {
            room.address = v.clone();
        }
        if let Some(v) = self.price {
            room.price = v;
        }
        if let Some(v) = self.guests {
            room.guests = v;
        }
        if let Some(v) = self.beds {
            room.beds = v;
        }
        if let Some(v) = self.bedrooms {
            room.bedrooms = v;
        }
        if let Some(v) = self.bathrooms {
            room.bathrooms = v;
        }
        if let Some(v) = self.rooms {
            room.rooms = v;
        }
        if let Some(v) = self.instant_book {
            room.instant_book = v;
        }
        if let Some(v) = self.pet_friendly {
            room.pet_friendly = v;
        }
        if let Some(v) = self.type_of_place {
            room.type_of_place = v;
        }
        if let Some(v) = self.property_type {
            room.property_type = v;
        }
        room.category_id = self.category;
        room.updated_at = chrono::Utc::now();
        room
    }
}

/// The room's tag id lists (amenities, facilities, house rules). Each set
/// is written as a whole in the same transaction as the room row.
#[derive(Debug, Clone, Default)]
pub struct RoomTagSets {
    pub amenities: Vec<AmenityId>,
    pub facilities: Vec<FacilityId>,
    pub house_rules: Vec<HouseRuleId>,
}

/// A room assembled with its resolved category and tag sets, as returned
/// by every successful write.
#[derive(Debug, Clone, Serialize)]
pub struct RoomDetail {
    #[serde(flatten)]
    pub room: Room,
    pub category: Category,
    pub amenities: Vec<Amenity>,
    pub facilities: Vec<Facility>,
    pub house_rules: Vec<HouseRule>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Room {
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
            instant_book: true,
            pet_friendly: false,
            type_of_place: TypeOfPlace::EntirePlace,
            property_type: PropertyType::Apartment,
            category: CategoryId::new(),
            amenities: vec![],
            facilities: vec![],
            house_rules: vec![],
        }
        .into_room(RoomId::new(), AccountId::new())
    }

    #[test]
    fn valid_room_passes() {
        assert!(sample().validate().is_empty());
    }

    #[test]
    fn one_error_per_invalid_field() {
        let mut room = sample();
        room.name = "".into();
        room.price = 0;
        room.beds = -1;
        let errors = room.validate();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "price", "beds"]);
    }

    #[test]
    fn patch_keeps_unset_fields() {
        let room = sample();
        let patch = RoomPatch {
            name: None,
            description: None,
            country: None,
            city: None,
            address: None,
            price: Some(95),
            guests: None,
            beds: None,
            bedrooms: None,
            bathrooms: None,
            rooms: None,
            instant_book: None,
            pet_friendly: Some(true),
            type_of_place: None,
            property_type: None,
            category: room.category_id,
            amenities: vec![],
            facilities: vec![],
            house_rules: vec![],
        };
        let merged = patch.apply(&room);
        assert_eq!(merged.price, 95);
        assert!(merged.pet_friendly);
        assert_eq!(merged.name, room.name);
        assert_eq!(merged.host_id, room.host_id);
        assert_eq!(merged.created_at, room.created_at);
    }

    #[test]
    fn enum_json_names() {
        let t: TypeOfPlace = serde_json::from_str("\"shared_room\"").unwrap();
        assert_eq!(t, TypeOfPlace::SharedRoom);
        assert_eq!(serde_json::to_string(&PropertyType::Guesthouse).unwrap(), "\"guesthouse\"");
    }
}
