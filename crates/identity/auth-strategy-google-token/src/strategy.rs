//! The token verification strategy.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use auth_strategy_core::{
    AuthOutcome, AuthRequest, AuthStrategy, Profile, StrategyError, StrategyResult, Verified,
    Verify, VerifyWithRequest,
};
use reqwest::Client;
use tracing::{debug, error, info};

use crate::config::{GoogleTokenConfig, SkipUserProfile, USER_INFO_URL};
use crate::error::{UserInfoStatusError, provider_error};
use crate::profile;

pub(crate) const STRATEGY_NAME: &str = "google-token";

const ACCESS_TOKEN: &str = "access_token";
const REFRESH_TOKEN: &str = "refresh_token";

/// Verification callback shape, fixed at construction time.
enum Verifier {
    Plain(Arc<dyn Verify>),
    WithRequest(Arc<dyn VerifyWithRequest>),
}

/// Strategy that authenticates a client-supplied Google access token.
///
/// Tokens are read from the request body, query string, or headers, in that
/// priority order. The token is exchanged for a userinfo response, the
/// response is normalized, and the verification callback decides the final
/// outcome. Instances hold only immutable configuration and are safe to
/// share across concurrent requests.
pub struct GoogleTokenStrategy {
    config: GoogleTokenConfig,
    http_client: Client,
    user_info_url: String,
    verifier: Verifier,
}

impl GoogleTokenStrategy {
    /// Strategy whose callback receives `(access_token, refresh_token, profile)`.
    pub fn new(config: GoogleTokenConfig, verify: impl Verify + 'static) -> Self {
        Self::build(config, Verifier::Plain(Arc::new(verify)))
    }

    /// Strategy whose callback additionally receives the originating request
    /// as its first argument.
    pub fn with_request(
        config: GoogleTokenConfig,
        verify: impl VerifyWithRequest + 'static,
    ) -> Self {
        Self::build(config, Verifier::WithRequest(Arc::new(verify)))
    }

    fn build(config: GoogleTokenConfig, verifier: Verifier) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
            user_info_url: USER_INFO_URL.to_string(),
            verifier,
        }
    }

    pub fn config(&self) -> &GoogleTokenConfig {
        &self.config
    }

    #[doc(hidden)]
    pub fn with_user_info_url(mut self, url: impl Into<String>) -> Self {
        self.user_info_url = url.into();
        self
    }

    /// Decide per attempt whether to fetch a profile at all.
    async fn load_user_profile(&self, access_token: Option<&str>) -> StrategyResult<Option<Profile>> {
        let skip = match &self.config.skip_user_profile {
            SkipUserProfile::Always(skip) => *skip,
            SkipUserProfile::Sync(predicate) => predicate(access_token),
            SkipUserProfile::Async(predicate) => predicate
                .should_skip(access_token)
                .await
                .map_err(StrategyError::SkipPredicate)?,
        };

        if skip {
            debug!("skipping user profile retrieval");
            return Ok(None);
        }

        self.user_profile(access_token).await.map(Some)
    }

    /// Fetch and normalize the userinfo response for an access token.
    ///
    /// An absent token is not rejected here; it is sent as an empty bearer
    /// value and fails at the provider.
    async fn user_profile(&self, access_token: Option<&str>) -> StrategyResult<Profile> {
        let response = self
            .http_client
            .get(&self.user_info_url)
            .bearer_auth(access_token.unwrap_or_default())
            .send()
            .await
            .map_err(provider_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("userinfo request failed: {} {}", status, body);
            return Err(provider_error(UserInfoStatusError { status, body }));
        }

        let body = response.text().await.map_err(provider_error)?;
        let profile = profile::normalize(body)?;

        debug!("retrieved user profile for subject: {}", profile.id);
        Ok(profile)
    }
}

#[async_trait]
impl AuthStrategy for GoogleTokenStrategy {
    fn name(&self) -> &'static str {
        STRATEGY_NAME
    }

    async fn authenticate(&self, request: AuthRequest) -> StrategyResult<AuthOutcome> {
        // An OAuth error callback rejects immediately. The specific error
        // code in the parameter is not propagated; known limitation.
        if request.query_value("error").is_some() {
            return Ok(AuthOutcome::Failure { info: None });
        }

        if !request.has_body() {
            return Ok(AuthOutcome::Failure { info: None });
        }

        let access_token = request.param(ACCESS_TOKEN).map(str::to_owned);
        let refresh_token = request.param(REFRESH_TOKEN).map(str::to_owned);

        let user_profile = self.load_user_profile(access_token.as_deref()).await?;

        let verified = match &self.verifier {
            Verifier::Plain(verify) => {
                verify
                    .verify(access_token, refresh_token, user_profile)
                    .await
            }
            Verifier::WithRequest(verify) => {
                verify
                    .verify(request, access_token, refresh_token, user_profile)
                    .await
            }
        }
        .map_err(StrategyError::Verify)?;

        match verified {
            Verified::User { user, info } => {
                info!("verified user via {} strategy", STRATEGY_NAME);
                Ok(AuthOutcome::Success { user, info })
            }
            Verified::Rejected { info } => Ok(AuthOutcome::Failure { info }),
        }
    }
}
