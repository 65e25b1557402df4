//! Provider-agnostic normalized user profile.

use serde::{Deserialize, Serialize};

/// Single-value wrapper used for multi-valued profile attributes such as
/// emails and photos, matching the conventional extensible profile shape
/// shared across strategies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileValue {
    pub value: String,
}

impl ProfileValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Structured decomposition of a display name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileName {
    pub family_name: Option<String>,
    pub given_name: Option<String>,
    pub middle_name: Option<String>,
}

/// Normalized user attributes produced from a provider-specific response.
///
/// Constructed fresh for each authentication attempt and never mutated
/// afterwards; ownership passes to that attempt's verification callback.
/// `raw` and `json` retain the provider response for diagnostic use and for
/// provider fields not promoted to the normalized shape; both are excluded
/// from serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub provider: String,
    pub id: String,
    pub display_name: String,
    pub name: ProfileName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    pub emails: Vec<ProfileValue>,
    pub photos: Vec<ProfileValue>,
    #[serde(skip)]
    pub raw: String,
    #[serde(skip)]
    pub json: serde_json::Map<String, serde_json::Value>,
}
