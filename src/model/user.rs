use garde::Validate;
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::validation::{not_blank, not_blank_if_present};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    #[garde(custom(not_blank))]
    pub name: String,
    #[garde(email)]
    pub email: String,
}

/// Partial user update; absent fields stay unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Validate)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[serde(default)]
    #[garde(custom(not_blank_if_present))]
    pub name: Option<String>,
    #[serde(default)]
    #[garde(email)]
    pub email: Option<String>,
}
