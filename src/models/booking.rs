use crate::db::DbResult;
use crate::error::FieldError;
use crate::models::types::{AccountId, BookingId, RoomId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// A stay booked on a room. The room reference is nullable: deleting a
/// room keeps its bookings around with `room = NULL`.
#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    pub id: BookingId,
    pub room_id: Option<RoomId>,
    pub guest_id: AccountId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Booking {
    pub fn try_from_row(row: &Row) -> DbResult<Self> {
        Ok(Self {
            id: row.try_get::<_, BookingId>("id")?,
            room_id: row.try_get::<_, Option<RoomId>>("room_id")?,
            guest_id: row.try_get::<_, AccountId>("guest_id")?,
            check_in: row.try_get("check_in")?,
            check_out: row.try_get("check_out")?,
            guests: row.try_get("guests")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookingDraft {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
}

impl BookingDraft {
    pub fn validate(&self, today: NaiveDate) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.check_in < today {
            errors.push(FieldError::new("check_in", "cannot be in the past"));
        }
        if self.check_out <= self.check_in {
            errors.push(FieldError::new("check_out", "must be after check_in"));
        }
        if self.guests < 1 {
            errors.push(FieldError::new("guests", "must be at least 1"));
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn rejects_inverted_dates() {
        let draft = BookingDraft {
            check_in: d("2026-09-10"),
            check_out: d("2026-09-10"),
            guests: 2,
        };
        let errors = draft.validate(d("2026-09-01"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "check_out");
    }

    #[test]
    fn rejects_past_check_in() {
        let draft = BookingDraft {
            check_in: d("2026-08-01"),
            check_out: d("2026-08-05"),
            guests: 0,
        };
        let fields: Vec<_> = draft.validate(d("2026-09-01")).iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["check_in", "guests"]);
    }
}
