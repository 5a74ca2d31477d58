use chrono::NaiveDateTime;
use garde::Validate;
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::validation::not_blank;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentDto {
    #[garde(custom(not_blank))]
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i32,
    pub text: String,
    pub author_name: String,
    #[serde(with = "crate::model::datetime")]
    #[cfg_attr(feature = "server", schema(value_type = String, example = "2025-01-01T10:00:00"))]
    pub created: NaiveDateTime,
}
