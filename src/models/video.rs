use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::{decode, require, ResourceId, Validate};
use crate::api::ApiError;

/// Reference to a competition or workout: a primary key, or a free-text
/// name when the submitter typed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceRef {
    Id(ResourceId),
    Name(String),
}

impl ResourceRef {
    fn is_blank(&self) -> bool {
        matches!(self, ResourceRef::Name(name) if name.trim().is_empty())
    }
}

impl FromStr for ResourceRef {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.parse::<ResourceId>() {
            Ok(id) => ResourceRef::Id(id),
            Err(_) => ResourceRef::Name(s.to_string()),
        })
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceRef::Id(id) => write!(f, "#{}", id),
            ResourceRef::Name(name) => write!(f, "{}", name),
        }
    }
}

/// Submitted workout video
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: ResourceId,
    #[serde(default, alias = "athlete")]
    pub athlete_id: Option<ResourceId>,
    #[serde(default, alias = "file")]
    pub video_url: Option<String>,
    #[serde(default)]
    pub competition: Option<ResourceRef>,
    #[serde(default)]
    pub workout: Option<ResourceRef>,
    #[serde(default, deserialize_with = "decode::optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for submitting or replacing a video
#[derive(Debug, Clone, Serialize)]
pub struct VideoSubmission {
    #[serde(rename = "athlete", skip_serializing_if = "Option::is_none")]
    pub athlete_id: Option<ResourceId>,
    pub video_url: String,
    pub competition: ResourceRef,
    pub workout: ResourceRef,
}

impl Validate for VideoSubmission {
    fn validate(&self) -> Result<(), ApiError> {
        require("video_url", &self.video_url)?;
        if self.competition.is_blank() {
            return Err(ApiError::Validation { field: "competition" });
        }
        if self.workout.is_blank() {
            return Err(ApiError::Validation { field: "workout" });
        }
        Ok(())
    }
}
