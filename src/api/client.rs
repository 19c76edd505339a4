use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use super::auth::TOKEN_REFRESH_PATH;
use super::error::ApiError;
use crate::auth::SessionStore;
use crate::config::ApiConfig;
use crate::models::{AccessToken, RefreshRequest};

/// Whether a request may carry the session's bearer token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Auth {
    Session,
    Anonymous,
}

/// HTTP client for the JudgeFit backend.
///
/// Every request goes through here: JSON content type, the bearer token
/// read from the session at send time, and one error contract for
/// non-2xx responses.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    session: SessionStore,
    refresh_on_unauthorized: bool,
}

impl HttpClient {
    /// Create a client bound to `session`
    pub fn new(config: &ApiConfig, session: SessionStore) -> Result<Self, ApiError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self {
            client,
            base_url,
            session,
            refresh_on_unauthorized: config.refresh_on_unauthorized,
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Headers for a request in the current session state. A stored token
    /// that cannot be sent as a header fails the request.
    fn build_headers(&self, auth: Auth) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if auth == Auth::Session {
            if let Some(token) = self.session.access_token() {
                let value = HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|_| ApiError::InvalidToken)?;
                headers.insert(AUTHORIZATION, value);
            }
        }

        Ok(headers)
    }

    /// GET `path` and decode the JSON body
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(Method::GET, path, None, Auth::Session).await?;
        Self::read_json(response).await
    }

    /// POST `body` as JSON and decode the JSON response
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        let response = self.send(Method::POST, path, Some(body), Auth::Session).await?;
        Self::read_json(response).await
    }

    /// PUT `body` as JSON and decode the JSON response
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        let response = self.send(Method::PUT, path, Some(body), Auth::Session).await?;
        Self::read_json(response).await
    }

    /// DELETE `path`; any success body is ignored
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.send(Method::DELETE, path, None, Auth::Session).await?;
        Self::read_empty(response).await
    }

    /// POST without the bearer token (token endpoints)
    pub async fn post_anonymous<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        let response = self.dispatch(Method::POST, path, Some(body), Auth::Anonymous).await?;
        Self::read_json(response).await
    }

    /// Exchange `refresh_token` for a new access token and store it
    pub async fn refresh_with(&self, refresh_token: &str) -> Result<String, ApiError> {
        tracing::debug!("Refreshing access token");

        let request = RefreshRequest {
            refresh: refresh_token.to_string(),
        };
        let token: AccessToken = self.post_anonymous(TOKEN_REFRESH_PATH, &request).await?;
        self.session.set_access_token(&token.access)?;

        tracing::info!("Successfully refreshed access token");
        Ok(token.access)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        auth: Auth,
    ) -> Result<Response, ApiError> {
        let response = self
            .dispatch(method.clone(), path, body.clone(), auth)
            .await?;

        if response.status() != StatusCode::UNAUTHORIZED
            || auth != Auth::Session
            || !self.refresh_on_unauthorized
        {
            return Ok(response);
        }

        let Some(refresh_token) = self.session.refresh_token() else {
            return Ok(response);
        };

        tracing::debug!("Received 401, attempting token refresh");
        self.refresh_with(&refresh_token).await?;

        self.dispatch(method, path, body, auth).await
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        auth: Auth,
    ) -> Result<Response, ApiError> {
        let url = self.url(path);
        tracing::debug!("{} {} ({:?})", method, url, auth);

        let mut request = self
            .client
            .request(method, &url)
            .headers(self.build_headers(auth)?);

        if let Some(body) = body {
            request = request.body(body);
        }

        request.send().await.map_err(ApiError::Network)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::check_status(response).await?;
        let bytes = response.bytes().await.map_err(ApiError::Network)?;
        serde_json::from_slice(&bytes).map_err(ApiError::Decode)
    }

    async fn read_empty(response: Response) -> Result<(), ApiError> {
        Self::check_status(response).await?;
        Ok(())
    }

    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = ApiError::from_response_body(status, &body);
        tracing::debug!("API error ({}): {}", status, error);
        Err(error)
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>, ApiError> {
    serde_json::to_vec(body).map_err(ApiError::Encode)
}
