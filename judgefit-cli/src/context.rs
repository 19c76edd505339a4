use anyhow::{bail, Context, Result};

use judgefit::api::ApiClient;
use judgefit::auth::RouteGuard;
use judgefit::{Config, SessionStore};

/// Everything a command needs, wired once at startup.
///
/// The session is file-backed so a login in one invocation is seen by
/// the next one.
pub struct AppContext {
    pub config: Config,
    pub client: ApiClient,
    pub guard: RouteGuard,
}

impl AppContext {
    /// Load config (file, then env, then `api_url`) and build the clients
    pub fn load(api_url: Option<&str>) -> Result<Self> {
        let mut config = Config::load()?;
        if let Some(url) = api_url {
            config.api.base_url = url.to_string();
        }

        let session_file = config.session_file()?;
        tracing::debug!("Using session file {}", session_file.display());

        Self::with_session(config, SessionStore::file(session_file))
    }

    pub fn with_session(config: Config, session: SessionStore) -> Result<Self> {
        let client =
            ApiClient::new(&config, session.clone()).context("Failed to create API client")?;
        let guard = RouteGuard::new(session);

        Ok(Self {
            config,
            client,
            guard,
        })
    }

    /// Refuse to continue unless the guard is on the authenticated route
    pub fn require_login(&self) -> Result<()> {
        if !self.guard.is_authenticated() {
            bail!("Not logged in. Use 'judgefit login' to authenticate.");
        }
        Ok(())
    }
}
