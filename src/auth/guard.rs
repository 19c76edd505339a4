//! Top-level route selection: login view or application shell.
//!
//! ```text
//!                 LoginSucceeded
//!  Unauthenticated ─────────────▶ Authenticated
//!        ▲                              │
//!        └──────────── LoggedOut ───────┘
//! ```
//!
//! Only explicit login and logout move the guard. An expired token or a
//! failed request leaves it where it is.

use crate::api::{ApiError, AuthClient};
use crate::models::Credentials;

use super::session::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Show the login form
    Unauthenticated,
    /// Show the application shell
    Authenticated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardEvent {
    LoginSucceeded,
    LoggedOut,
}

/// Pure transition function of the guard
pub fn transition(_route: Route, event: GuardEvent) -> Route {
    match event {
        GuardEvent::LoginSucceeded => Route::Authenticated,
        GuardEvent::LoggedOut => Route::Unauthenticated,
    }
}

#[derive(Debug)]
pub struct RouteGuard {
    session: SessionStore,
    route: Route,
}

impl RouteGuard {
    /// Initial route comes from token presence in the session
    pub fn new(session: SessionStore) -> Self {
        let route = if session.is_authenticated() {
            Route::Authenticated
        } else {
            Route::Unauthenticated
        };

        Self { session, route }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn is_authenticated(&self) -> bool {
        self.route == Route::Authenticated
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn apply(&mut self, event: GuardEvent) -> Route {
        let next = transition(self.route, event);
        if next != self.route {
            tracing::debug!("Route {:?} -> {:?} on {:?}", self.route, next, event);
        }
        self.route = next;
        next
    }

    /// Log in through `auth` and move to the shell on success.
    /// A failed login leaves the route untouched.
    pub async fn login(
        &mut self,
        auth: &AuthClient,
        credentials: &Credentials,
    ) -> Result<Route, ApiError> {
        auth.login(credentials).await?;
        Ok(self.apply(GuardEvent::LoginSucceeded))
    }

    /// Clear the tokens and return to the login view
    pub fn logout(&mut self, auth: &AuthClient) -> Result<Route, ApiError> {
        auth.logout()?;
        Ok(self.apply(GuardEvent::LoggedOut))
    }
}
