use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::forms::{empty_string_as_none, number_or_empty};
use crate::shared::validation::{FULL_NAME_REGEX, PHONE_REGEX};

/// A registered citizen.
///
/// Doubles as the form model: the identifier is assigned by the database and
/// defaults to `0` when a submission does not carry one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow, Validate, ToSchema)]
pub struct Citizen {
    #[serde(default, deserialize_with = "number_or_empty")]
    pub citizen_id: i32,

    #[serde(default)]
    #[validate(
        length(min = 1, max = 100, message = "Full name must be 1-100 characters"),
        regex(path = *FULL_NAME_REGEX, message = "Full name may only contain letters, spaces, hyphens, apostrophes and dots")
    )]
    pub full_name: String,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = 200, message = "Address must not exceed 200 characters"))]
    pub address: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(
        length(max = 20, message = "Phone must not exceed 20 characters"),
        regex(path = *PHONE_REGEX, message = "Invalid phone number")
    )]
    pub phone: Option<String>,
}

impl Citizen {
    #[cfg(test)]
    pub fn new(citizen_id: i32, full_name: impl Into<String>) -> Self {
        Self {
            citizen_id,
            full_name: full_name.into(),
            ..Default::default()
        }
    }
}
