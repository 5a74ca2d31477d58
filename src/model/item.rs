use garde::Validate;
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::{
    booking::BookingShortDto,
    comment::CommentDto,
    validation::{not_blank, not_blank_if_present},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub available: bool,
    #[serde(default)]
    pub request_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateItemDto {
    #[garde(custom(not_blank))]
    pub name: String,
    #[garde(custom(not_blank), length(chars, max = 200))]
    pub description: String,
    #[garde(skip)]
    pub available: bool,
    #[serde(default)]
    #[garde(skip)]
    pub request_id: Option<i32>,
}

/// Partial item update; absent fields stay unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Validate)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemDto {
    #[serde(default)]
    #[garde(custom(not_blank_if_present))]
    pub name: Option<String>,
    #[serde(default)]
    #[garde(custom(not_blank_if_present), length(chars, max = 200))]
    pub description: Option<String>,
    #[serde(default)]
    #[garde(skip)]
    pub available: Option<bool>,
}

/// Item with its comments and, for the owner, the surrounding approved bookings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ItemExtraInfoDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub available: bool,
    #[serde(default)]
    pub request_id: Option<i32>,
    #[serde(default)]
    pub last_booking: Option<BookingShortDto>,
    #[serde(default)]
    pub next_booking: Option<BookingShortDto>,
    pub comments: Vec<CommentDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ItemSearchQuery {
    #[serde(default)]
    pub text: String,
    pub from: Option<i64>,
    pub size: Option<i64>,
}
