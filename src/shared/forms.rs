//! Serde helpers for binding HTML form posts.
//!
//! URL-encoded forms send every field as text, so an untouched optional input
//! arrives as `""` and an unselected `<select>` as `""` too. These helpers map
//! blanks to "absent" while still accepting the typed JSON representation, so
//! the same model can be bound from either body.

use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// Deserialize an optional string, treating blank input as `None`
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText<T> {
    Number(T),
    Text(String),
}

/// Deserialize a number that may arrive as text; blank text yields the default
pub fn number_or_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr + Default,
    <T as FromStr>::Err: std::fmt::Display,
{
    match NumberOrText::<T>::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) if s.trim().is_empty() => Ok(T::default()),
        NumberOrText::Text(s) => s.trim().parse::<T>().map_err(serde::de::Error::custom),
    }
}

/// Deserialize an optional value from its text form, treating blank input as `None`
pub fn parse_or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !s.trim().is_empty() => s
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
