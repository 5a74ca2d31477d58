use chrono::Duration;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, booking::BookingFactory, helpers::create_booking_with_dependencies},
};

use crate::{
    model::booking::{BookingState, BookingStatus},
    server::{
        data::booking::BookingRepository,
        error::{booking::BookingError, AppError},
        model::booking::{BookingQuery, CreateBookingParams},
    },
};

mod create;
mod get_approved_by_item_ids;
mod get_by_booker;
mod get_by_item_owner;
mod has_finished_approved;
mod set_status;

fn all() -> BookingQuery {
    BookingQuery {
        state: BookingState::All,
        page: None,
    }
}

fn in_state(state: BookingState) -> BookingQuery {
    BookingQuery { state, page: None }
}
