//! # Domain models for household registration
//!
//! A [`Household`] is the unit submitted to the backend: one head of
//! household plus up to five additional members. Fields are serialized in
//! camelCase to match the backend's JSON contract; optional demographic and
//! contact fields are omitted entirely when unset.

use serde::{Deserialize, Serialize};

/// Hard cap on additional household members beyond the head.
pub const MAX_MEMBERS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    PreferNotToSay,
}

impl Gender {
    /// Parse the value attribute of the gender `<select>`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "prefernottosay" => Some(Self::PreferNotToSay),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Race {
    White,
    Latino,
    Black,
    Asian,
    Other,
}

impl Race {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "white" => Some(Self::White),
            "latino" => Some(Self::Latino),
            "black" => Some(Self::Black),
            "asian" => Some(Self::Asian),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Primary language of the head of household (head only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryLanguage {
    English,
    Spanish,
    Other,
}

impl PrimaryLanguage {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "english" => Some(Self::English),
            "spanish" => Some(Self::Spanish),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// One person in a household.
///
/// `dob` is the composed `YYYY-MM-DD` string built from the form's three
/// date selects. Contact and address fields are only ever populated for the
/// head of household.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race: Option<Race>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<PrimaryLanguage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// The registration unit submitted to `POST /household`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Household {
    pub head: Person,
    pub members: Vec<Person>,
}
