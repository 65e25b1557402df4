//! Errors specific to the userinfo exchange.

use auth_strategy_core::{BoxError, StrategyError};
use thiserror::Error;

/// Fixed context carried by every provider-level failure.
pub(crate) const FETCH_USER_PROFILE: &str = "failed to fetch user profile";

/// Non-2xx response from the userinfo endpoint.
#[derive(Debug, Error)]
#[error("userinfo request returned {status}: {body}")]
pub struct UserInfoStatusError {
    pub status: reqwest::StatusCode,
    pub body: String,
}

pub(crate) fn provider_error(source: impl Into<BoxError>) -> StrategyError {
    StrategyError::Provider {
        context: FETCH_USER_PROFILE.to_string(),
        source: source.into(),
    }
}
