use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{decode, require, ResourceId, Validate};
use crate::api::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "O")]
    Other,
}

/// Athlete profile as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Athlete {
    pub id: ResourceId,
    pub name: String,
    pub surname: String,
    pub email: String,
    #[serde(deserialize_with = "decode::timestamp")]
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Centimetres
    #[serde(default, deserialize_with = "decode::optional_decimal")]
    pub height: Option<f64>,
    /// Kilograms
    #[serde(default, deserialize_with = "decode::optional_decimal")]
    pub weight: Option<f64>,
    #[serde(default)]
    pub country: Option<ResourceId>,
    #[serde(default)]
    pub affiliate: Option<ResourceId>,
    #[serde(default)]
    pub profile_photo: Option<String>,
    #[serde(default)]
    pub emergency_contact_name: Option<String>,
    #[serde(default)]
    pub emergency_contact_phone: Option<String>,
}

impl Athlete {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname).trim().to_string()
    }
}

/// Payload for creating or replacing an athlete
#[derive(Debug, Clone, Default, Serialize)]
pub struct AthleteDraft {
    pub name: String,
    pub surname: String,
    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<ResourceId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate: Option<ResourceId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact_phone: Option<String>,
}

impl AthleteDraft {
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            email: email.into(),
            ..Default::default()
        }
    }
}

impl Validate for AthleteDraft {
    fn validate(&self) -> Result<(), ApiError> {
        require("name", &self.name)?;
        require("surname", &self.surname)?;
        require("email", &self.email)
    }
}

impl From<&Athlete> for AthleteDraft {
    fn from(athlete: &Athlete) -> Self {
        Self {
            name: athlete.name.clone(),
            surname: athlete.surname.clone(),
            email: athlete.email.clone(),
            gender: athlete.gender,
            date_of_birth: athlete.date_of_birth,
            height: athlete.height,
            weight: athlete.weight,
            country: athlete.country,
            affiliate: athlete.affiliate,
            emergency_contact_name: athlete.emergency_contact_name.clone(),
            emergency_contact_phone: athlete.emergency_contact_phone.clone(),
        }
    }
}
