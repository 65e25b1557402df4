//! Host-framework view of an inbound authentication request.

use std::collections::HashMap;

use http::{HeaderMap, HeaderName, HeaderValue};

/// The sections of an inbound request a strategy may read credentials from.
///
/// `body` is `None` when the host framework did not parse a body at all,
/// which strategies treat differently from an empty parsed body.
#[derive(Debug, Clone, Default)]
pub struct AuthRequest {
    pub body: Option<HashMap<String, String>>,
    pub query: HashMap<String, String>,
    pub headers: HeaderMap,
}

impl AuthRequest {
    /// Request with an empty parsed body.
    pub fn new() -> Self {
        Self {
            body: Some(HashMap::new()),
            query: HashMap::new(),
            headers: HeaderMap::new(),
        }
    }

    /// Request whose body was never parsed.
    pub fn without_body() -> Self {
        Self::default()
    }

    pub fn body_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.body
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    pub fn body_value(&self, key: &str) -> Option<&str> {
        self.body.as_ref()?.get(key).map(String::as_str)
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.headers.get(key)?.to_str().ok()
    }

    /// Look a parameter up across sections with body > query > header
    /// precedence, the conventional order for token-bearing strategies.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.body_value(key)
            .or_else(|| self.query_value(key))
            .or_else(|| self.header_value(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_takes_precedence_over_query_and_header() {
        let request = AuthRequest::new()
            .body_param("access_token", "from_body")
            .query_param("access_token", "from_query")
            .header(
                HeaderName::from_static("access_token"),
                HeaderValue::from_static("from_header"),
            );

        assert_eq!(request.param("access_token"), Some("from_body"));
    }

    #[test]
    fn query_takes_precedence_over_header() {
        let request = AuthRequest::new()
            .query_param("access_token", "from_query")
            .header(
                HeaderName::from_static("access_token"),
                HeaderValue::from_static("from_header"),
            );

        assert_eq!(request.param("access_token"), Some("from_query"));
    }

    #[test]
    fn header_is_used_when_body_and_query_are_empty() {
        let request = AuthRequest::new().header(
            HeaderName::from_static("access_token"),
            HeaderValue::from_static("from_header"),
        );

        assert_eq!(request.param("access_token"), Some("from_header"));
    }

    #[test]
    fn missing_parameter_resolves_to_none() {
        let request = AuthRequest::new();
        assert_eq!(request.param("access_token"), None);
    }

    #[test]
    fn unparsed_body_is_distinct_from_empty_body() {
        assert!(!AuthRequest::without_body().has_body());
        assert!(AuthRequest::new().has_body());
    }
}
