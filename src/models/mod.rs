pub mod athlete;
pub mod auth;
pub mod competition;
pub mod decode;
pub mod page;
pub mod video;

pub use athlete::{Athlete, AthleteDraft, Gender};
pub use auth::{AccessToken, Credentials, RefreshRequest, TokenPair};
pub use competition::{Competition, CompetitionDraft};
pub use page::ListResponse;
pub use video::{ResourceRef, Video, VideoSubmission};

use crate::api::ApiError;

/// Backend primary keys
pub type ResourceId = i64;

/// Required-field checks run before a payload is sent
pub trait Validate {
    fn validate(&self) -> Result<(), ApiError>;
}

/// Fails with a validation error when `value` is blank
pub(crate) fn require(field: &'static str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation { field });
    }
    Ok(())
}
