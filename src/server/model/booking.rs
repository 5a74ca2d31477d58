//! Booking domain models, parameters and the last/next booking selection.

use chrono::NaiveDateTime;

use crate::{
    model::{
        api::PageRequest,
        booking::{BookingDto, BookingShortDto, BookingState, BookingStatus, CreateBookingDto},
    },
    server::{
        error::internal::InternalError,
        model::{item::Item, user::User},
        util::parse::parse_booking_status,
    },
};

/// Time-boxed reservation of an item by a booker.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub status: BookingStatus,
    pub item_id: i32,
    pub booker_id: i32,
}

impl Booking {
    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Converted booking
    /// - `Err(InternalError::UnknownBookingStatus)` - Stored status text is not recognised
    pub fn from_entity(entity: entity::booking::Model) -> Result<Self, InternalError> {
        let status = parse_booking_status(entity.id, entity.status)?;

        Ok(Self {
            id: entity.id,
            start: entity.start_date,
            end: entity.end_date,
            status,
            item_id: entity.item_id,
            booker_id: entity.booker_id,
        })
    }

    pub fn into_short_dto(self) -> BookingShortDto {
        BookingShortDto {
            id: self.id,
            start: self.start,
            end: self.end,
            status: self.status,
            booker_id: self.booker_id,
        }
    }
}

/// Booking with its booker and item loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDetails {
    pub booking: Booking,
    pub booker: User,
    pub item: Item,
}

impl BookingDetails {
    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.booking.id,
            start: self.booking.start,
            end: self.booking.end,
            status: self.booking.status,
            booker: self.booker.into_dto(),
            item: self.item.into_dto(),
        }
    }
}

/// Parameters for requesting a booking.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub booker_id: i32,
    pub item_id: i32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl CreateBookingParams {
    pub fn from_dto(booker_id: i32, dto: CreateBookingDto) -> Self {
        Self {
            booker_id,
            item_id: dto.item_id,
            start: dto.start,
            end: dto.end,
        }
    }
}

/// Filter and optional page of a booking listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookingQuery {
    pub state: BookingState,
    pub page: Option<PageRequest>,
}

/// Picks the last and next approved bookings of an item relative to `now`.
///
/// Only `APPROVED` bookings are considered. `next` is the booking with the earliest start
/// strictly after `now`. `last` is the booking with the latest end strictly before
/// `next.start`; without a `next` it is the booking with the latest start.
///
/// # Returns
/// - `(last, next)` - Either side may be `None`
pub fn find_last_and_next(
    bookings: &[Booking],
    now: NaiveDateTime,
) -> (Option<Booking>, Option<Booking>) {
    let approved = || {
        bookings
            .iter()
            .filter(|booking| booking.status == BookingStatus::Approved)
    };

    let next = approved()
        .filter(|booking| booking.start > now)
        .min_by_key(|booking| booking.start);

    let last = match next {
        Some(next) => approved()
            .filter(|booking| booking.end < next.start)
            .max_by_key(|booking| booking.end),
        None => approved().max_by_key(|booking| booking.start),
    };

    (last.cloned(), next.cloned())
}
