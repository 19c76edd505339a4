//! Client library for the JudgeFit competition platform.
//!
//! ```text
//! RouteGuard ──reads──▶ SessionStore ◀──writes── AuthClient
//!                            │
//!                            ▼
//!                       HttpClient ◀── AthleteClient / CompetitionClient / VideoClient
//! ```
//!
//! The session is injected at the application root and handed to the
//! [`api::HttpClient`], which is the only place request headers and error
//! responses are handled.

pub mod api;
pub mod auth;
pub mod config;
pub mod forms;
pub mod models;

pub use api::{ApiError, HttpClient};
pub use auth::{RouteGuard, SessionStore};
pub use config::Config;
