use serde::{Deserialize, Serialize};
use std::fmt;

use super::{require, Validate};
use crate::api::ApiError;

/// Login request payload
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Validate for Credentials {
    fn validate(&self) -> Result<(), ApiError> {
        require("username", &self.username)?;
        if self.password.is_empty() {
            return Err(ApiError::Validation { field: "password" });
        }
        Ok(())
    }
}

/// Login response from the token endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Token refresh request
#[derive(Debug, Serialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Token refresh response
#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    pub access: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_serialize_as_username_password() {
        let json = serde_json::to_value(Credentials::new("a", "b")).unwrap();
        assert_eq!(json, serde_json::json!({"username": "a", "password": "b"}));
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let debug = format!("{:?}", Credentials::new("coach", "hunter2"));
        assert!(debug.contains("coach"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_credentials_require_both_fields() {
        assert!(Credentials::new("a", "b").validate().is_ok());
        assert!(matches!(
            Credentials::new("  ", "b").validate(),
            Err(ApiError::Validation { field: "username" })
        ));
        assert!(matches!(
            Credentials::new("a", "").validate(),
            Err(ApiError::Validation { field: "password" })
        ));
    }

    #[test]
    fn test_token_pair_rejects_missing_refresh() {
        let result: Result<TokenPair, _> = serde_json::from_str(r#"{"access": "T1"}"#);
        assert!(result.is_err());
    }
}
