//! Core traits and types for pluggable authentication strategies.
//!
//! A strategy registers under a fixed name with the host framework and
//! resolves each inbound attempt to exactly one terminal signal: success,
//! failure, or error. Success and failure are the two arms of
//! [`AuthOutcome`]; errors travel through [`StrategyError`].

mod profile;
mod request;

use std::future::Future;

use async_trait::async_trait;
use thiserror::Error;

pub use profile::{Profile, ProfileName, ProfileValue};
pub use request::AuthRequest;

/// Boxed error used for caller-supplied callbacks and wrapped causes.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Exceptional failures surfaced to the host framework's error signal.
///
/// Rejections that are part of normal operation (bad credentials, missing
/// body) are not errors; they are [`AuthOutcome::Failure`].
#[derive(Debug, Error)]
pub enum StrategyError {
    /// Identity provider transport or HTTP-level failure, wrapped with a
    /// fixed descriptive context.
    #[error("{context}")]
    Provider {
        context: String,
        #[source]
        source: BoxError,
    },

    /// Provider response body could not be parsed. Surfaced unwrapped.
    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    /// A profile-skip predicate failed.
    #[error(transparent)]
    SkipPredicate(BoxError),

    /// The verification callback failed internally.
    #[error(transparent)]
    Verify(BoxError),
}

pub type StrategyResult<T> = Result<T, StrategyError>;

/// Terminal signal for a single authentication attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    /// The verification callback accepted the user.
    Success {
        user: serde_json::Value,
        info: Option<serde_json::Value>,
    },
    /// The attempt was rejected without being exceptional. `info` carries
    /// the optional failure reason.
    Failure { info: Option<serde_json::Value> },
}

/// Completion of a verification callback, following the conventional
/// `(error, user, info)` contract: an internal failure is `Err`, an explicit
/// rejection is [`Verified::Rejected`], anything else is an accepted user.
#[derive(Debug, Clone, PartialEq)]
pub enum Verified {
    User {
        user: serde_json::Value,
        info: Option<serde_json::Value>,
    },
    Rejected { info: Option<serde_json::Value> },
}

/// Caller-supplied verification callback mapping tokens and an optional
/// normalized profile to an application-level user.
#[async_trait]
pub trait Verify: Send + Sync {
    async fn verify(
        &self,
        access_token: Option<String>,
        refresh_token: Option<String>,
        profile: Option<Profile>,
    ) -> Result<Verified, BoxError>;
}

#[async_trait]
impl<F, Fut> Verify for F
where
    F: Fn(Option<String>, Option<String>, Option<Profile>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Verified, BoxError>> + Send,
{
    async fn verify(
        &self,
        access_token: Option<String>,
        refresh_token: Option<String>,
        profile: Option<Profile>,
    ) -> Result<Verified, BoxError> {
        self(access_token, refresh_token, profile).await
    }
}

/// Request-passing form of [`Verify`]: the originating request is prepended
/// to the callback arguments.
#[async_trait]
pub trait VerifyWithRequest: Send + Sync {
    async fn verify(
        &self,
        request: AuthRequest,
        access_token: Option<String>,
        refresh_token: Option<String>,
        profile: Option<Profile>,
    ) -> Result<Verified, BoxError>;
}

#[async_trait]
impl<F, Fut> VerifyWithRequest for F
where
    F: Fn(AuthRequest, Option<String>, Option<String>, Option<Profile>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Verified, BoxError>> + Send,
{
    async fn verify(
        &self,
        request: AuthRequest,
        access_token: Option<String>,
        refresh_token: Option<String>,
        profile: Option<Profile>,
    ) -> Result<Verified, BoxError> {
        self(request, access_token, refresh_token, profile).await
    }
}

/// A pluggable authentication handler registered with the host framework
/// under a unique name.
///
/// Strategy instances hold no per-request state and are safe to share
/// across concurrent attempts.
#[async_trait]
pub trait AuthStrategy: Send + Sync {
    /// Name the strategy registers under.
    fn name(&self) -> &'static str;

    /// Resolve one inbound authentication attempt.
    ///
    /// Returns `Ok(AuthOutcome)` for the success and failure signals and
    /// `Err(StrategyError)` for the error signal. Exactly one of the three
    /// per invocation; no retries.
    async fn authenticate(&self, request: AuthRequest) -> StrategyResult<AuthOutcome>;
}
