use chrono::NaiveDateTime;
use garde::Validate;
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::{item::ItemDto, validation::not_blank};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequestDto {
    #[garde(custom(not_blank))]
    pub description: String,
}

/// An item request together with the items created to fulfil it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ItemRequestDto {
    pub id: i32,
    pub description: String,
    #[serde(with = "crate::model::datetime")]
    #[cfg_attr(feature = "server", schema(value_type = String, example = "2025-01-01T10:00:00"))]
    pub created: NaiveDateTime,
    pub items: Vec<ItemDto>,
}
