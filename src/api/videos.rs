use super::client::HttpClient;
use super::error::ApiError;
use super::{collection_path, item_path};
use crate::config::VideoEndpoint;
use crate::models::{ListResponse, ResourceId, Validate, Video, VideoSubmission};

/// Video submissions. The path prefix comes from configuration because
/// backend revisions serve videos under different prefixes.
#[derive(Debug, Clone)]
pub struct VideoClient {
    http: HttpClient,
    prefix: &'static str,
}

impl VideoClient {
    pub fn new(http: HttpClient, endpoint: VideoEndpoint) -> Self {
        Self {
            http,
            prefix: endpoint.prefix(),
        }
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// One collection response, with the server's paging info
    pub async fn page(&self) -> Result<ListResponse<Video>, ApiError> {
        self.http.get(self.prefix).await
    }

    pub async fn list(&self) -> Result<Vec<Video>, ApiError> {
        Ok(self.page().await?.into_vec())
    }

    pub async fn get(&self, id: ResourceId) -> Result<Video, ApiError> {
        self.http.get(&item_path(self.prefix, id)).await
    }

    pub async fn create(&self, data: &VideoSubmission) -> Result<Video, ApiError> {
        data.validate()?;
        self.http.post(&collection_path(self.prefix), data).await
    }

    pub async fn update(&self, id: ResourceId, data: &VideoSubmission) -> Result<Video, ApiError> {
        data.validate()?;
        self.http.put(&item_path(self.prefix, id), data).await
    }

    pub async fn delete(&self, id: ResourceId) -> Result<(), ApiError> {
        self.http.delete(&item_path(self.prefix, id)).await
    }
}
