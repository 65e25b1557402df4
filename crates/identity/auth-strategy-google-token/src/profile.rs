//! Userinfo response normalization.

use auth_strategy_core::{Profile, ProfileName, ProfileValue, StrategyResult};
use serde::Deserialize;

pub(crate) const PROVIDER: &str = "google";

/// Fields promoted from the userinfo response into the normalized profile.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GoogleUserInfo {
    pub id: Option<String>,
    pub name: Option<String>,
    pub family_name: Option<String>,
    pub given_name: Option<String>,
    pub middle_name: Option<String>,
    pub gender: Option<String>,
    pub email: Option<String>,
    pub picture: Option<String>,
}

/// Parse a userinfo response body into the normalized profile shape.
///
/// A parse failure is surfaced unwrapped as [`StrategyError::Parse`];
/// everything else about the body is tolerated, missing fields included.
///
/// [`StrategyError::Parse`]: auth_strategy_core::StrategyError::Parse
pub(crate) fn normalize(body: String) -> StrategyResult<Profile> {
    let json: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&body)?;
    let info: GoogleUserInfo = serde_json::from_value(serde_json::Value::Object(json.clone()))?;

    Ok(Profile {
        provider: PROVIDER.to_string(),
        id: info.id.unwrap_or_default(),
        display_name: info.name.unwrap_or_default(),
        name: ProfileName {
            family_name: info.family_name,
            given_name: info.given_name,
            middle_name: info.middle_name,
        },
        gender: info.gender,
        emails: info.email.map(ProfileValue::new).into_iter().collect(),
        photos: info.picture.map(ProfileValue::new).into_iter().collect(),
        raw: body,
        json,
    })
}
