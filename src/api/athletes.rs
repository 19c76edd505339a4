use super::client::HttpClient;
use super::error::ApiError;
use super::{collection_path, item_path};
use crate::models::{Athlete, AthleteDraft, ListResponse, ResourceId, Validate};

pub const ATHLETES_PATH: &str = "/api/athlete/athletes";

#[derive(Debug, Clone)]
pub struct AthleteClient {
    http: HttpClient,
}

impl AthleteClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// One collection response, with the server's paging info
    pub async fn page(&self) -> Result<ListResponse<Athlete>, ApiError> {
        self.http.get(ATHLETES_PATH).await
    }

    pub async fn list(&self) -> Result<Vec<Athlete>, ApiError> {
        Ok(self.page().await?.into_vec())
    }

    pub async fn get(&self, id: ResourceId) -> Result<Athlete, ApiError> {
        self.http.get(&item_path(ATHLETES_PATH, id)).await
    }

    pub async fn create(&self, data: &AthleteDraft) -> Result<Athlete, ApiError> {
        data.validate()?;
        self.http.post(&collection_path(ATHLETES_PATH), data).await
    }

    pub async fn update(&self, id: ResourceId, data: &AthleteDraft) -> Result<Athlete, ApiError> {
        data.validate()?;
        self.http.put(&item_path(ATHLETES_PATH, id), data).await
    }

    pub async fn delete(&self, id: ResourceId) -> Result<(), ApiError> {
        self.http.delete(&item_path(ATHLETES_PATH, id)).await
    }
}
