//! Google access-token authentication strategy.
//!
//! Verifies an OAuth2 access token supplied directly by a client (no browser
//! redirect flow) against Google's userinfo endpoint, normalizes the response
//! into the shared profile shape, and maps a caller-supplied verification
//! callback's completion onto the host framework's success, failure, and
//! error signals.

mod config;
mod error;
mod profile;
mod strategy;


pub use config::{
    DEFAULT_AUTHORIZATION_URL, DEFAULT_TOKEN_URL, GoogleTokenConfig, SkipPredicate,
    SkipUserProfile,
};
pub use error::UserInfoStatusError;
pub use strategy::GoogleTokenStrategy;

// Re-export common types for convenience
pub use auth_strategy_core::{
    AuthOutcome, AuthRequest, AuthStrategy, BoxError, Profile, ProfileName, ProfileValue,
    StrategyError, StrategyResult, Verified, Verify, VerifyWithRequest,
};
