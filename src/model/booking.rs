use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::{
    api::PageParams, item::ItemDto, user::UserDto, validation::ValidationError,
};

/// Lifecycle status of a booking.
///
/// A booking starts `WAITING` and is moved exactly once by the item owner to `APPROVED` or
/// `REJECTED`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Waiting,
    Approved,
    Rejected,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "WAITING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "WAITING" => Some(Self::Waiting),
            "APPROVED" => Some(Self::Approved),
            "REJECTED" => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter applied to booking listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingState {
    #[default]
    All,
    /// start <= now <= end
    Current,
    /// end < now
    Past,
    /// start > now
    Future,
    Waiting,
    Rejected,
}

impl FromStr for BookingState {
    type Err = ValidationError;

    /// Parses a state name case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "ALL" => Ok(Self::All),
            "CURRENT" => Ok(Self::Current),
            "PAST" => Ok(Self::Past),
            "FUTURE" => Ok(Self::Future),
            "WAITING" => Ok(Self::Waiting),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(ValidationError::UnsupportedState(value.to_string())),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    pub item_id: i32,
    #[serde(with = "crate::model::datetime")]
    #[cfg_attr(feature = "server", schema(value_type = String, example = "2025-01-01T10:00:00"))]
    pub start: NaiveDateTime,
    #[serde(with = "crate::model::datetime")]
    #[cfg_attr(feature = "server", schema(value_type = String, example = "2025-01-02T10:00:00"))]
    pub end: NaiveDateTime,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: i32,
    #[serde(with = "crate::model::datetime")]
    #[cfg_attr(feature = "server", schema(value_type = String, example = "2025-01-01T10:00:00"))]
    pub start: NaiveDateTime,
    #[serde(with = "crate::model::datetime")]
    #[cfg_attr(feature = "server", schema(value_type = String, example = "2025-01-02T10:00:00"))]
    pub end: NaiveDateTime,
    pub status: BookingStatus,
    pub booker: UserDto,
    pub item: ItemDto,
}

/// Booking as embedded in an item view.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BookingShortDto {
    pub id: i32,
    #[serde(with = "crate::model::datetime")]
    #[cfg_attr(feature = "server", schema(value_type = String, example = "2025-01-01T10:00:00"))]
    pub start: NaiveDateTime,
    #[serde(with = "crate::model::datetime")]
    #[cfg_attr(feature = "server", schema(value_type = String, example = "2025-01-02T10:00:00"))]
    pub end: NaiveDateTime,
    pub status: BookingStatus,
    pub booker_id: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ApproveQuery {
    pub approved: bool,
}

/// Query of the booking listings: `state` (default `ALL`), `from`, `size`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct BookingListQuery {
    pub state: Option<String>,
    pub from: Option<i64>,
    pub size: Option<i64>,
}

impl BookingListQuery {
    /// Parses `state`, defaulting to `ALL` when it is absent.
    pub fn state(&self) -> Result<BookingState, ValidationError> {
        match &self.state {
            Some(state) => state.parse(),
            None => Ok(BookingState::All),
        }
    }

    pub fn page_params(&self) -> PageParams {
        PageParams::new(self.from, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_state_case_insensitively() {
        assert_eq!("current".parse::<BookingState>().unwrap(), BookingState::Current);
        assert_eq!("Past".parse::<BookingState>().unwrap(), BookingState::Past);
        assert_eq!("WAITING".parse::<BookingState>().unwrap(), BookingState::Waiting);
    }

    #[test]
    fn unknown_state_keeps_original_text() {
        let err = "UNSUPPORTED_STATUS".parse::<BookingState>().unwrap_err();

        assert_eq!(err.to_string(), "Unknown state: UNSUPPORTED_STATUS");
    }

    #[test]
    fn missing_state_means_all() {
        let query = BookingListQuery::default();

        assert_eq!(query.state().unwrap(), BookingState::All);
    }

    #[test]
    fn status_serializes_in_upper_case() {
        let json = serde_json::to_string(&BookingStatus::Approved).unwrap();

        assert_eq!(json, "\"APPROVED\"");
        assert_eq!(BookingStatus::parse("REJECTED"), Some(BookingStatus::Rejected));
        assert_eq!(BookingStatus::parse("approved"), None);
    }
}
