use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{booking::BookingStatus, datetime, validation::validate_booking_dates},
    server::{
        data::{booking::BookingRepository, item::ItemRepository, user::UserRepository},
        error::{
            access::AccessError, booking::BookingError, internal::InternalError, AppError,
        },
        model::booking::{Booking, BookingDetails, BookingQuery, CreateBookingParams},
    },
};

/// Loads the booker and item of every booking in two queries and pairs them up.
async fn attach_details<C: ConnectionTrait>(
    db: &C,
    bookings: Vec<Booking>,
) -> Result<Vec<BookingDetails>, AppError> {
    let mut booker_ids: Vec<i32> = bookings.iter().map(|booking| booking.booker_id).collect();
    booker_ids.sort_unstable();
    booker_ids.dedup();
    let mut item_ids: Vec<i32> = bookings.iter().map(|booking| booking.item_id).collect();
    item_ids.sort_unstable();
    item_ids.dedup();

    let users: HashMap<i32, _> = UserRepository::new(db)
        .find_by_ids(&booker_ids)
        .await?
        .into_iter()
        .map(|user| (user.id, user))
        .collect();
    let items: HashMap<i32, _> = ItemRepository::new(db)
        .find_by_ids(&item_ids)
        .await?
        .into_iter()
        .map(|item| (item.id, item))
        .collect();

    bookings
        .into_iter()
        .map(|booking| -> Result<BookingDetails, AppError> {
            let booker = users
                .get(&booking.booker_id)
                .cloned()
                .ok_or(InternalError::DanglingReference {
                    entity: "User",
                    id: booking.booker_id,
                })?;
            let item = items
                .get(&booking.item_id)
                .cloned()
                .ok_or(InternalError::DanglingReference {
                    entity: "Item",
                    id: booking.item_id,
                })?;
            Ok(BookingDetails {
                booking,
                booker,
                item,
            })
        })
        .collect()
}

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Requests a booking of an item.
    ///
    /// # Returns
    /// - `Ok(BookingDetails)` - The new `WAITING` booking
    /// - `Err(AppError::ValidationErr)` - `start` is not strictly before `end`
    /// - `Err(AppError::NotFound)` - Booker or item does not exist
    /// - `Err(AppError::AccessErr)` - The booker owns the item
    /// - `Err(AppError::BookingErr(UnavailableItem))` - The item is not available
    pub async fn create(&self, params: CreateBookingParams) -> Result<BookingDetails, AppError> {
        validate_booking_dates(params.start, params.end)?;

        let txn = self.db.begin().await?;

        let booker = UserRepository::new(&txn)
            .find_by_id(params.booker_id)
            .await?
            .ok_or_else(|| AppError::user_not_found(params.booker_id))?;
        let item = ItemRepository::new(&txn)
            .find_by_id(params.item_id)
            .await?
            .ok_or_else(|| AppError::item_not_found(params.item_id))?;

        if item.owner_id == booker.id {
            return Err(AccessError::OwnItem {
                user_id: booker.id,
                item_id: item.id,
            }
            .into());
        }
        if !item.available {
            return Err(BookingError::UnavailableItem(item.id).into());
        }

        let booking = BookingRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        tracing::info!(
            "Created booking {} of item {} by user {}",
            booking.id,
            item.id,
            booker.id
        );

        Ok(BookingDetails {
            booking,
            booker,
            item,
        })
    }

    /// Approves or rejects a waiting booking on behalf of the item owner.
    ///
    /// The status check and the update run in one transaction.
    ///
    /// # Returns
    /// - `Ok(BookingDetails)` - The booking in its new status
    /// - `Err(AppError::NotFound)` - No booking with this ID
    /// - `Err(AppError::AccessErr)` - Caller is not the item owner
    /// - `Err(AppError::BookingErr(AlreadyApproved))` - Booking is no longer `WAITING`
    pub async fn approve(
        &self,
        booking_id: i32,
        owner_id: i32,
        approved: bool,
    ) -> Result<BookingDetails, AppError> {
        let txn = self.db.begin().await?;
        let repo = BookingRepository::new(&txn);

        let booking = repo
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::booking_not_found(booking_id))?;
        let item = ItemRepository::new(&txn)
            .find_by_id(booking.item_id)
            .await?
            .ok_or(InternalError::DanglingReference {
                entity: "Item",
                id: booking.item_id,
            })?;

        if item.owner_id != owner_id {
            return Err(AccessError::Booking {
                user_id: owner_id,
                booking_id,
            }
            .into());
        }
        if booking.status != BookingStatus::Waiting {
            return Err(BookingError::AlreadyApproved.into());
        }

        let status = if approved {
            BookingStatus::Approved
        } else {
            BookingStatus::Rejected
        };
        let booking = repo.set_status(booking_id, status).await?;
        let booker = UserRepository::new(&txn)
            .find_by_id(booking.booker_id)
            .await?
            .ok_or(InternalError::DanglingReference {
                entity: "User",
                id: booking.booker_id,
            })?;

        txn.commit().await?;

        tracing::info!("Booking {} set to {} by owner {}", booking_id, status, owner_id);

        Ok(BookingDetails {
            booking,
            booker,
            item,
        })
    }

    /// Gets a booking visible to its booker or the owner of its item.
    ///
    /// # Returns
    /// - `Ok(BookingDetails)` - The booking
    /// - `Err(AppError::NotFound)` - No booking with this ID
    /// - `Err(AppError::AccessErr)` - Caller is neither booker nor item owner
    pub async fn get_by_id(&self, booking_id: i32, user_id: i32) -> Result<BookingDetails, AppError> {
        let booking = BookingRepository::new(self.db)
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::booking_not_found(booking_id))?;

        let details = attach_details(self.db, vec![booking])
            .await?
            .pop()
            .ok_or_else(|| AppError::booking_not_found(booking_id))?;

        if details.booking.booker_id != user_id && details.item.owner_id != user_id {
            return Err(AccessError::Booking {
                user_id,
                booking_id,
            }
            .into());
        }

        Ok(details)
    }

    /// Gets the bookings made by a user.
    ///
    /// # Returns
    /// - `Ok(Vec<BookingDetails>)` - Matching bookings, latest start first
    /// - `Err(AppError::NotFound)` - No user with this ID
    pub async fn get_for_booker(
        &self,
        user_id: i32,
        query: BookingQuery,
    ) -> Result<Vec<BookingDetails>, AppError> {
        self.require_user(user_id).await?;

        let bookings = BookingRepository::new(self.db)
            .get_by_booker(user_id, query, datetime::now())
            .await?;

        attach_details(self.db, bookings).await
    }

    /// Gets the bookings of every item a user owns.
    ///
    /// # Returns
    /// - `Ok(Vec<BookingDetails>)` - Matching bookings, latest start first
    /// - `Err(AppError::NotFound)` - No user with this ID
    pub async fn get_for_owner(
        &self,
        owner_id: i32,
        query: BookingQuery,
    ) -> Result<Vec<BookingDetails>, AppError> {
        self.require_user(owner_id).await?;

        let bookings = BookingRepository::new(self.db)
            .get_by_item_owner(owner_id, query, datetime::now())
            .await?;

        attach_details(self.db, bookings).await
    }

    async fn require_user(&self, user_id: i32) -> Result<(), AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::user_not_found(user_id))
    }
}
