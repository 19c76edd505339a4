use super::client::HttpClient;
use super::error::ApiError;
use crate::models::{Credentials, TokenPair, Validate};

pub const TOKEN_PATH: &str = "/api/token/";
pub const TOKEN_REFRESH_PATH: &str = "/api/token/refresh/";

/// Token endpoints. These are the only writers of the session.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: HttpClient,
}

impl AuthClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Exchange credentials for a token pair and store both tokens
    pub async fn login(&self, credentials: &Credentials) -> Result<TokenPair, ApiError> {
        credentials.validate()?;
        tracing::debug!("Logging in as {}", credentials.username);

        let tokens: TokenPair = self.http.post_anonymous(TOKEN_PATH, credentials).await?;
        self.http.session().set_tokens(&tokens.access, &tokens.refresh)?;

        tracing::info!("Successfully logged in as {}", credentials.username);
        Ok(tokens)
    }

    /// Exchange `refresh_token` for a new access token, which is stored
    pub async fn refresh(&self, refresh_token: &str) -> Result<String, ApiError> {
        self.http.refresh_with(refresh_token).await
    }

    /// Refresh using the stored refresh token
    pub async fn refresh_session(&self) -> Result<String, ApiError> {
        let refresh_token = self
            .http
            .session()
            .refresh_token()
            .ok_or(ApiError::MissingRefreshToken)?;
        self.refresh(&refresh_token).await
    }

    /// Forget both tokens
    pub fn logout(&self) -> Result<(), ApiError> {
        self.http.session().clear()?;
        tracing::info!("Logged out");
        Ok(())
    }
}
