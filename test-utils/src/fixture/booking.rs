//! Booking fixtures for creating in-memory test data.
//!
//! Useful for unit testing booking selection logic against an explicit reference time
//! without inserting rows.

use chrono::{NaiveDate, NaiveDateTime};
use entity::booking;

/// Default item ID for bookings.
pub const DEFAULT_ITEM_ID: i32 = 1;

/// Default booker ID for bookings.
pub const DEFAULT_BOOKER_ID: i32 = 2;

/// Default booking status.
pub const DEFAULT_STATUS: &str = "WAITING";

/// Fixed reference time used as "now" by fixture-based tests: 2024-06-15T12:00:00.
pub fn reference_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 15)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .unwrap_or_default()
}

/// Creates a booking entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - start_date: one day after `reference_now()`
/// - end_date: two days after `reference_now()`
/// - item_id: `1`
/// - booker_id: `2`
/// - status: `"WAITING"`
pub fn entity() -> booking::Model {
    entity_builder().build()
}

/// Creates a booking entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let now = fixture::booking::reference_now();
/// let past = fixture::booking::entity_builder()
///     .start(now - Duration::days(7))
///     .end(now - Duration::days(5))
///     .status("APPROVED")
///     .build();
/// ```
pub fn entity_builder() -> BookingEntityBuilder {
    BookingEntityBuilder::default()
}

/// Builder for creating customized booking entity models.
pub struct BookingEntityBuilder {
    id: i32,
    start: NaiveDateTime,
    end: NaiveDateTime,
    item_id: i32,
    booker_id: i32,
    status: String,
}

impl Default for BookingEntityBuilder {
    fn default() -> Self {
        let now = reference_now();
        Self {
            id: 1,
            start: now + chrono::Duration::days(1),
            end: now + chrono::Duration::days(2),
            item_id: DEFAULT_ITEM_ID,
            booker_id: DEFAULT_BOOKER_ID,
            status: DEFAULT_STATUS.to_string(),
        }
    }
}

impl BookingEntityBuilder {
    /// Sets the booking ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the start date.
    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = start;
        self
    }

    /// Sets the end date.
    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = end;
        self
    }

    /// Sets the item ID.
    pub fn item_id(mut self, item_id: i32) -> Self {
        self.item_id = item_id;
        self
    }

    /// Sets the booker ID.
    pub fn booker_id(mut self, booker_id: i32) -> Self {
        self.booker_id = booker_id;
        self
    }

    /// Sets the raw status text.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and returns the booking entity model.
    pub fn build(self) -> booking::Model {
        booking::Model {
            id: self.id,
            start_date: self.start,
            end_date: self.end,
            item_id: self.item_id,
            booker_id: self.booker_id,
            status: self.status,
        }
    }
}
