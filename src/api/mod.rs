mod athletes;
mod auth;
mod client;
mod competitions;
mod error;
mod videos;

pub use athletes::{AthleteClient, ATHLETES_PATH};
pub use auth::{AuthClient, TOKEN_PATH, TOKEN_REFRESH_PATH};
pub use client::HttpClient;
pub use competitions::{CompetitionClient, COMPETITIONS_PATH};
pub use error::{ApiError, GENERIC_ERROR_MESSAGE};
pub use videos::VideoClient;

use crate::auth::SessionStore;
use crate::config::Config;
use crate::models::ResourceId;

/// All resource clients over one shared HTTP client and session
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub auth: AuthClient,
    pub athletes: AthleteClient,
    pub competitions: CompetitionClient,
    pub videos: VideoClient,
    http: HttpClient,
}

impl ApiClient {
    pub fn new(config: &Config, session: SessionStore) -> Result<Self, ApiError> {
        let http = HttpClient::new(&config.api, session)?;

        Ok(Self {
            auth: AuthClient::new(http.clone()),
            athletes: AthleteClient::new(http.clone()),
            competitions: CompetitionClient::new(http.clone()),
            videos: VideoClient::new(http.clone(), config.api.video_endpoint),
            http,
        })
    }

    pub fn session(&self) -> &SessionStore {
        self.http.session()
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}

// Collection reads go to the bare prefix, writes to the slash-terminated
// collection, and single items to `<prefix>/<id>/`.
pub(crate) fn collection_path(prefix: &str) -> String {
    format!("{}/", prefix)
}

pub(crate) fn item_path(prefix: &str, id: ResourceId) -> String {
    format!("{}/{}/", prefix, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VideoEndpoint;

    #[test]
    fn test_paths() {
        assert_eq!(collection_path(ATHLETES_PATH), "/api/athlete/athletes/");
        assert_eq!(item_path(COMPETITIONS_PATH, 7), "/api/athlete/competitions/7/");
    }

    #[test]
    fn test_api_client_creation() {
        let mut config = Config::default();
        config.api.video_endpoint = VideoEndpoint::Workout;

        let client = ApiClient::new(&config, SessionStore::in_memory()).unwrap();
        assert_eq!(client.videos.prefix(), "/api/workout/videos");
        assert_eq!(client.http().base_url(), "http://localhost:8000");
        assert!(!client.session().is_authenticated());
    }
}
