//! Strategy configuration.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use auth_strategy_core::BoxError;

/// Default Google authorization endpoint. Held for compatibility with the
/// underlying OAuth2 client; the token-only flow never redirects to it.
pub const DEFAULT_AUTHORIZATION_URL: &str = "https://accounts.google.com/o/oauth2/auth";

/// Default Google token endpoint, equally unused by the token-only flow.
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.google.com/o/oauth2/token";

pub(crate) const USER_INFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// Async profile-skip check, given the extracted access token (if any).
#[async_trait]
pub trait SkipPredicate: Send + Sync {
    async fn should_skip(&self, access_token: Option<&str>) -> Result<bool, BoxError>;
}

/// Controls whether profile retrieval is bypassed for an attempt.
///
/// The shape is decided once at configuration time: a constant answer, a
/// synchronous predicate over the access token, or a fallible asynchronous
/// predicate.
#[derive(Clone)]
pub enum SkipUserProfile {
    Always(bool),
    Sync(Arc<dyn Fn(Option<&str>) -> bool + Send + Sync>),
    Async(Arc<dyn SkipPredicate>),
}

impl Default for SkipUserProfile {
    fn default() -> Self {
        Self::Always(false)
    }
}

impl fmt::Debug for SkipUserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always(skip) => f.debug_tuple("Always").field(skip).finish(),
            Self::Sync(_) => f.write_str("Sync(..)"),
            Self::Async(_) => f.write_str("Async(..)"),
        }
    }
}

/// Google token strategy configuration. Immutable once the strategy is
/// constructed.
#[derive(Debug, Clone)]
pub struct GoogleTokenConfig {
    pub client_id: String,
    pub client_secret: String,
    pub authorization_url: String,
    pub token_url: String,
    pub skip_user_profile: SkipUserProfile,
    pub http_timeout_seconds: u64,
}

impl GoogleTokenConfig {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            authorization_url: DEFAULT_AUTHORIZATION_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            skip_user_profile: SkipUserProfile::default(),
            http_timeout_seconds: 30,
        }
    }

    pub fn with_authorization_url(mut self, url: impl Into<String>) -> Self {
        self.authorization_url = url.into();
        self
    }

    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }

    pub fn with_skip_user_profile(mut self, skip: SkipUserProfile) -> Self {
        self.skip_user_profile = skip;
        self
    }

    pub fn with_http_timeout(mut self, seconds: u64) -> Self {
        self.http_timeout_seconds = seconds;
        self
    }
}
