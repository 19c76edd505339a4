use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{decode, require, ResourceId, Validate};
use crate::api::ApiError;

/// Competition as returned by the backend.
///
/// Some backend revisions serialize competitions with the athlete schema,
/// putting the title under `surname`. Both fields are kept and
/// [`Competition::title`] picks whichever is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competition {
    pub id: ResourceId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(deserialize_with = "decode::timestamp")]
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl Competition {
    pub fn title(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.surname.as_deref())
            .unwrap_or("")
    }
}

/// Payload for creating or replacing a competition
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompetitionDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl CompetitionDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl Validate for CompetitionDraft {
    fn validate(&self) -> Result<(), ApiError> {
        require("name", &self.name)?;
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                return Err(ApiError::Validation { field: "end_date" });
            }
        }
        Ok(())
    }
}

impl From<&Competition> for CompetitionDraft {
    fn from(competition: &Competition) -> Self {
        Self {
            name: competition.title().to_string(),
            start_date: competition.start_date,
            end_date: competition.end_date,
            location: competition.location.clone(),
            description: competition.description.clone(),
            is_active: competition.is_active,
        }
    }
}
