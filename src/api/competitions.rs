use super::client::HttpClient;
use super::error::ApiError;
use super::{collection_path, item_path};
use crate::models::{Competition, CompetitionDraft, ListResponse, ResourceId, Validate};

pub const COMPETITIONS_PATH: &str = "/api/athlete/competitions";

#[derive(Debug, Clone)]
pub struct CompetitionClient {
    http: HttpClient,
}

impl CompetitionClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// One collection response, with the server's paging info
    pub async fn page(&self) -> Result<ListResponse<Competition>, ApiError> {
        self.http.get(COMPETITIONS_PATH).await
    }

    pub async fn list(&self) -> Result<Vec<Competition>, ApiError> {
        Ok(self.page().await?.into_vec())
    }

    pub async fn get(&self, id: ResourceId) -> Result<Competition, ApiError> {
        self.http.get(&item_path(COMPETITIONS_PATH, id)).await
    }

    pub async fn create(&self, data: &CompetitionDraft) -> Result<Competition, ApiError> {
        data.validate()?;
        self.http.post(&collection_path(COMPETITIONS_PATH), data).await
    }

    pub async fn update(
        &self,
        id: ResourceId,
        data: &CompetitionDraft,
    ) -> Result<Competition, ApiError> {
        data.validate()?;
        self.http.put(&item_path(COMPETITIONS_PATH, id), data).await
    }

    pub async fn delete(&self, id: ResourceId) -> Result<(), ApiError> {
        self.http.delete(&item_path(COMPETITIONS_PATH, id)).await
    }
}
