use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::forms::{empty_string_as_none, number_or_empty, parse_or_none};

/// Complaint status enum matching database enum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "complaint_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Rejected,
}

impl std::fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplaintStatus::Open => write!(f, "open"),
            ComplaintStatus::InProgress => write!(f, "in_progress"),
            ComplaintStatus::Resolved => write!(f, "resolved"),
            ComplaintStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A complaint filed by a citizen.
///
/// Also the form model; `citizen_name` is read-only and only filled in when
/// the complaint is loaded together with its citizen. An absent `date_filed`
/// means "today" when filing and "unchanged" when editing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow, Validate, ToSchema)]
pub struct Complaint {
    #[serde(default, deserialize_with = "number_or_empty")]
    pub complaint_id: i32,

    #[serde(default, deserialize_with = "number_or_empty")]
    #[validate(range(min = 1, message = "Select the citizen filing the complaint"))]
    pub citizen_id: i32,

    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = 2000, message = "Description must not exceed 2000 characters"))]
    pub description: Option<String>,

    #[serde(default)]
    pub status: ComplaintStatus,

    #[serde(default, deserialize_with = "parse_or_none")]
    pub date_filed: Option<NaiveDate>,

    #[serde(default, skip_deserializing)]
    #[sqlx(default)]
    pub citizen_name: Option<String>,
}

impl Complaint {
    #[cfg(test)]
    pub fn new(complaint_id: i32, citizen_id: i32, title: impl Into<String>) -> Self {
        Self {
            complaint_id,
            citizen_id,
            title: title.into(),
            ..Default::default()
        }
    }
}
