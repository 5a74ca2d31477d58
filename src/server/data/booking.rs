//! Booking data repository for database operations.
//!
//! Listings by booker and by item owner share one query builder: `with_state` adds the
//! predicate of a `BookingState` to a base query, relative to a single captured "now".

use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
    sea_query::Expr,
};

use crate::{
    model::booking::{BookingState, BookingStatus},
    server::{
        data::fetch_page_or_all,
        error::{booking::BookingError, AppError},
        model::booking::{Booking, BookingQuery, CreateBookingParams},
    },
};

use entity::booking::Column;

/// Adds the predicate of `state` to `select`.
///
/// - `All` - no predicate
/// - `Current` - start <= now and end >= now
/// - `Past` - end < now
/// - `Future` - start > now
/// - `Waiting` / `Rejected` - status equals the state
fn with_state(
    select: Select<entity::booking::Entity>,
    state: BookingState,
    now: NaiveDateTime,
) -> Select<entity::booking::Entity> {
    match state {
        BookingState::All => select,
        BookingState::Current => select
            .filter(Column::StartDate.lte(now))
            .filter(Column::EndDate.gte(now)),
        BookingState::Past => select.filter(Column::EndDate.lt(now)),
        BookingState::Future => select.filter(Column::StartDate.gt(now)),
        BookingState::Waiting => select.filter(Column::Status.eq(BookingStatus::Waiting.as_str())),
        BookingState::Rejected => {
            select.filter(Column::Status.eq(BookingStatus::Rejected.as_str()))
        }
    }
}

fn into_bookings(entities: Vec<entity::booking::Model>) -> Result<Vec<Booking>, AppError> {
    entities
        .into_iter()
        .map(|entity| Booking::from_entity(entity).map_err(AppError::from))
        .collect()
}

/// Repository providing database operations for bookings.
pub struct BookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    /// Creates a new BookingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a booking in the `WAITING` status.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created booking
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateBookingParams) -> Result<Booking, AppError> {
        let entity = entity::booking::ActiveModel {
            start_date: ActiveValue::Set(params.start),
            end_date: ActiveValue::Set(params.end),
            item_id: ActiveValue::Set(params.item_id),
            booker_id: ActiveValue::Set(params.booker_id),
            status: ActiveValue::Set(BookingStatus::Waiting.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(entity)?)
    }

    /// Finds a booking by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, AppError> {
        let entity = entity::prelude::Booking::find_by_id(id).one(self.db).await?;

        entity
            .map(Booking::from_entity)
            .transpose()
            .map_err(Into::into)
    }

    /// Moves a `WAITING` booking to `status`.
    ///
    /// The update only matches rows that are still `WAITING`, so two concurrent decisions
    /// cannot both succeed.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The updated booking
    /// - `Err(AppError::NotFound)` - No booking with this ID
    /// - `Err(AppError::BookingErr(AlreadyApproved))` - The booking is no longer `WAITING`
    pub async fn set_status(&self, id: i32, status: BookingStatus) -> Result<Booking, AppError> {
        let result = entity::prelude::Booking::update_many()
            .col_expr(entity::booking::Column::Status, Expr::value(status.as_str()))
            .filter(entity::booking::Column::Id.eq(id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Waiting.as_str()))
            .exec(self.db)
            .await?;

        let booking = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::booking_not_found(id))?;

        if result.rows_affected == 0 {
            return Err(BookingError::AlreadyApproved.into());
        }

        Ok(booking)
    }

    /// Gets the bookings made by a user matching the query, latest start first.
    pub async fn get_by_booker(
        &self,
        booker_id: i32,
        query: BookingQuery,
        now: NaiveDateTime,
    ) -> Result<Vec<Booking>, AppError> {
        let select = entity::prelude::Booking::find().filter(Column::BookerId.eq(booker_id));
        let select = with_state(select, query.state, now).order_by_desc(Column::StartDate);

        let entities = fetch_page_or_all(self.db, select, query.page).await?;

        into_bookings(entities)
    }

    /// Gets the bookings of all items owned by a user matching the query, latest start first.
    pub async fn get_by_item_owner(
        &self,
        owner_id: i32,
        query: BookingQuery,
        now: NaiveDateTime,
    ) -> Result<Vec<Booking>, AppError> {
        let select = entity::prelude::Booking::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::booking::Relation::Item.def(),
            )
            .filter(entity::item::Column::OwnerId.eq(owner_id));
        let select = with_state(select, query.state, now).order_by_desc(Column::StartDate);

        let entities = fetch_page_or_all(self.db, select, query.page).await?;

        into_bookings(entities)
    }

    /// Gets every `APPROVED` booking of the given items.
    pub async fn get_approved_by_item_ids(&self, item_ids: &[i32]) -> Result<Vec<Booking>, AppError> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Booking::find()
            .filter(Column::ItemId.is_in(item_ids.iter().copied()))
            .filter(Column::Status.eq(BookingStatus::Approved.as_str()))
            .order_by_asc(Column::StartDate)
            .all(self.db)
            .await?;

        into_bookings(entities)
    }

    /// Checks whether a user has an `APPROVED` booking of the item that ended before `now`.
    pub async fn has_finished_approved(
        &self,
        booker_id: i32,
        item_id: i32,
        now: NaiveDateTime,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Booking::find()
            .filter(Column::BookerId.eq(booker_id))
            .filter(Column::ItemId.eq(item_id))
            .filter(Column::Status.eq(BookingStatus::Approved.as_str()))
            .filter(Column::EndDate.lt(now))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
