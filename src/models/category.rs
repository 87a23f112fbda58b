use crate::db::DbResult;
use crate::models::types::CategoryId;
use postgres_types::private::BytesMut;
use postgres_types::{FromSql, IsNull, ToSql, Type};
use serde::{Deserialize, Serialize};
use std::error::Error;
use tokio_postgres::Row;

/// A category classifies a listing as either a bookable room or an
/// experience. Only room-kind categories are valid on rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Rooms,
    Experiences,
}

impl ToSql for CategoryKind {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        let s = match self {
            CategoryKind::Rooms => "rooms",
            CategoryKind::Experiences => "experiences",
        };
        s.to_sql(ty, out)
    }

    fn accepts(ty: &Type) -> bool {
        ty == &Type::TEXT
    }

    fn to_sql_checked(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        self.to_sql(ty, out)
    }
}

impl FromSql<'_> for CategoryKind {
    fn from_sql(ty: &Type, raw: &[u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
        let s = String::from_sql(ty, raw)?;
        match s.as_str() {
            "rooms" => Ok(CategoryKind::Rooms),
            "experiences" => Ok(CategoryKind::Experiences),
            _ => Err(format!("Unknown category kind: {}", s).into()),
        }
    }

    fn accepts(ty: &Type) -> bool {
        ty == &Type::TEXT
    }
}

impl std::fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryKind::Rooms => write!(f, "rooms"),
            CategoryKind::Experiences => write!(f, "experiences"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub kind: CategoryKind,
    #[serde(skip)]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Category {
    pub fn try_from_row(row: &Row) -> DbResult<Self> {
        Ok(Self {
            id: row.try_get::<_, CategoryId>("id")?,
            name: row.try_get("name")?,
            kind: row.try_get("kind")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
