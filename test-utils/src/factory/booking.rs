//! Booking factory for creating test booking entities.

use crate::factory::helpers::now;
use chrono::{Duration, NaiveDateTime};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// Status is written as the raw column text (`"WAITING"`, `"APPROVED"`, `"REJECTED"`).
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    item_id: i32,
    booker_id: i32,
    start: NaiveDateTime,
    end: NaiveDateTime,
    status: String,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - start: 1 day from now
    /// - end: 2 days from now
    /// - status: `"WAITING"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `item_id` - ID of the booked item
    /// - `booker_id` - ID of the user booking the item
    pub fn new(db: &'a DatabaseConnection, item_id: i32, booker_id: i32) -> Self {
        let now = now();
        Self {
            db,
            item_id,
            booker_id,
            start: now + Duration::days(1),
            end: now + Duration::days(2),
            status: "WAITING".to_string(),
        }
    }

    /// Sets the booking start.
    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = start;
        self
    }

    /// Sets the booking end.
    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = end;
        self
    }

    /// Sets the booking status text.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::booking::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            start_date: ActiveValue::Set(self.start),
            end_date: ActiveValue::Set(self.end),
            item_id: ActiveValue::Set(self.item_id),
            booker_id: ActiveValue::Set(self.booker_id),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a future WAITING booking of the item by the booker.
pub async fn create_booking(
    db: &DatabaseConnection,
    item_id: i32,
    booker_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, item_id, booker_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::helpers::create_booking_with_dependencies};

    #[tokio::test]
    async fn creates_waiting_booking_with_dependencies() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_shareit_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (owner, booker, item, booking) = create_booking_with_dependencies(db).await?;

        assert_eq!(item.owner_id, owner.id);
        assert_eq!(booking.item_id, item.id);
        assert_eq!(booking.booker_id, booker.id);
        assert_eq!(booking.status, "WAITING");
        assert!(booking.start_date < booking.end_date);

        Ok(())
    }
}
