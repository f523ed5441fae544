//! The API key decision procedure.
//!
//! Both enforcement points (the [`ApiKeyFirewall`] middleware and the
//! [`RequireApiKey`] extractor) delegate here, so a request is judged by
//! exactly the same rules whichever gate it hits.
//!
//! [`ApiKeyFirewall`]: crate::http::security::ApiKeyFirewall
//! [`RequireApiKey`]: crate::http::security::RequireApiKey

use actix_web::HttpRequest;

use super::config::{ApiKeyConfig, KeyLocation};
use super::secret::ApiKeySecret;

/// The verdict on one request.
///
/// There are deliberately only three cases: how the verdict is rendered
/// (status code, body) is the hosting adapter's business, not the
/// validator's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    /// A key was presented and it matches the configured secret.
    Accepted,
    /// No key was found in any configured location.
    RejectedMissing,
    /// A key was presented but it does not match the configured secret.
    RejectedInvalid,
}

impl AuthOutcome {
    /// Returns whether the request should be let through.
    pub fn is_accepted(&self) -> bool {
        matches!(self, AuthOutcome::Accepted)
    }
}

/// Validates presented API keys against a configured secret.
///
/// The validator is cheap to clone and is shared between the middleware
/// and the extractor, typically via `web::Data`.
///
/// # Example
///
/// ```ignore
/// use actix_keygate_core::http::security::api_key::{
///     ApiKeyConfig, ApiKeySecret, ApiKeyValidator, KeyLocation,
/// };
///
/// let validator = ApiKeyValidator::new(ApiKeySecret::new("abc123"))
///     .config(ApiKeyConfig::new().add_location(KeyLocation::query("token")));
/// ```
#[derive(Debug, Clone)]
pub struct ApiKeyValidator {
    config: ApiKeyConfig,
    secret: ApiKeySecret,
}

impl ApiKeyValidator {
    /// Creates a validator that reads the key from the default header.
    pub fn new(secret: ApiKeySecret) -> Self {
        Self {
            config: ApiKeyConfig::default(),
            secret,
        }
    }

    /// Sets the extraction configuration for this validator.
    pub fn config(mut self, config: ApiKeyConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns whether the configured secret can ever accept a request.
    pub fn is_usable(&self) -> bool {
        self.secret.is_usable()
    }

    /// Extracts the API key from the request based on configured locations.
    ///
    /// `Some("")` and `None` are distinct: an empty header value is a
    /// presented (and later rejected) credential, not a missing one.
    pub fn extract_key(&self, req: &HttpRequest) -> Option<String> {
        for location in self.config.get_locations() {
            if let Some(key) = self.extract_from_location(req, location) {
                return Some(key);
            }
        }
        None
    }

    /// Extracts the API key from a specific location.
    fn extract_from_location(&self, req: &HttpRequest, location: &KeyLocation) -> Option<String> {
        match location {
            KeyLocation::Header(name) => req
                .headers()
                .get(name.as_str())
                .and_then(|v| v.to_str().ok())
                .map(String::from),
            KeyLocation::Query(name) => req.query_string().split('&').find_map(|pair| {
                let (key, value) = pair.split_once('=')?;
                if key == name {
                    Some(urlencoding::decode(value).ok()?.into_owned())
                } else {
                    None
                }
            }),
        }
    }

    /// Judges an already-extracted candidate key.
    ///
    /// The missing check comes first: a request that presented nothing is
    /// `RejectedMissing` even when the secret itself is unconfigured. A
    /// presented key is then compared, and against an empty secret the
    /// comparison always fails, so misconfiguration rejects rather than
    /// admits.
    pub fn decide(&self, candidate: Option<&str>) -> AuthOutcome {
        let candidate = match candidate {
            Some(value) => value,
            None => return AuthOutcome::RejectedMissing,
        };

        if self.secret.matches(candidate) {
            AuthOutcome::Accepted
        } else {
            AuthOutcome::RejectedInvalid
        }
    }

    /// Extracts and judges the key in one step.
    pub fn inspect(&self, req: &HttpRequest) -> AuthOutcome {
        let candidate = self.extract_key(req);
        self.decide(candidate.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::super::config::{API_KEY_HEADER, API_KEY_QUERY_PARAM, TOKEN_QUERY_PARAM};
    use super::*;
    use actix_web::test::TestRequest;

    fn validator() -> ApiKeyValidator {
        ApiKeyValidator::new(ApiKeySecret::new("abc123"))
    }

    #[test]
    fn test_valid_key_accepted() {
        let req = TestRequest::default()
            .insert_header((API_KEY_HEADER, "abc123"))
            .to_http_request();

        assert_eq!(validator().inspect(&req), AuthOutcome::Accepted);
    }

    #[test]
    fn test_wrong_key_rejected_invalid() {
        let req = TestRequest::default()
            .insert_header((API_KEY_HEADER, "wrong"))
            .to_http_request();

        assert_eq!(validator().inspect(&req), AuthOutcome::RejectedInvalid);
    }

    #[test]
    fn test_missing_key_rejected_missing() {
        let req = TestRequest::default().to_http_request();

        assert_eq!(validator().inspect(&req), AuthOutcome::RejectedMissing);
    }

    #[test]
    fn test_empty_header_value_is_presented_not_missing() {
        let req = TestRequest::default()
            .insert_header((API_KEY_HEADER, ""))
            .to_http_request();

        assert_eq!(validator().inspect(&req), AuthOutcome::RejectedInvalid);
    }

    #[test]
    fn test_header_name_is_case_insensitive() {
        let req = TestRequest::default()
            .insert_header(("X-Api-Key", "abc123"))
            .to_http_request();

        assert_eq!(validator().inspect(&req), AuthOutcome::Accepted);
    }

    #[test]
    fn test_extract_from_query() {
        let auth = validator().config(ApiKeyConfig::query(TOKEN_QUERY_PARAM));

        let req = TestRequest::with_uri("/?token=abc123").to_http_request();

        assert_eq!(auth.inspect(&req), AuthOutcome::Accepted);
    }

    #[test]
    fn test_query_param_name_must_match() {
        let auth = validator().config(ApiKeyConfig::query(TOKEN_QUERY_PARAM));

        let req = TestRequest::with_uri("/?api_key=abc123").to_http_request();

        assert_eq!(auth.inspect(&req), AuthOutcome::RejectedMissing);
    }

    #[test]
    fn test_url_encoded_query_param() {
        let auth = ApiKeyValidator::new(ApiKeySecret::new("key+with+spaces"))
            .config(ApiKeyConfig::query(API_KEY_QUERY_PARAM));

        let req = TestRequest::with_uri("/?api_key=key%2Bwith%2Bspaces").to_http_request();

        assert_eq!(auth.inspect(&req), AuthOutcome::Accepted);
    }

    #[test]
    fn test_locations_checked_in_order() {
        let auth = validator().config(
            ApiKeyConfig::header(API_KEY_HEADER).add_location(KeyLocation::query(TOKEN_QUERY_PARAM)),
        );

        // Header wins even though the query value would match.
        let req = TestRequest::with_uri("/?token=abc123")
            .insert_header((API_KEY_HEADER, "not-the-key"))
            .to_http_request();

        assert_eq!(auth.inspect(&req), AuthOutcome::RejectedInvalid);

        // Query is the fallback when the header is absent.
        let req = TestRequest::with_uri("/?token=abc123").to_http_request();
        assert_eq!(auth.inspect(&req), AuthOutcome::Accepted);
    }

    #[test]
    fn test_empty_secret_rejects_presented_key() {
        let auth = ApiKeyValidator::new(ApiKeySecret::new(""));

        let req = TestRequest::default()
            .insert_header((API_KEY_HEADER, "anything"))
            .to_http_request();

        assert_eq!(auth.inspect(&req), AuthOutcome::RejectedInvalid);
    }

    #[test]
    fn test_empty_secret_and_empty_header_rejects_invalid() {
        let auth = ApiKeyValidator::new(ApiKeySecret::new(""));

        // Empty presented key against an empty secret must not compare equal.
        let req = TestRequest::default()
            .insert_header((API_KEY_HEADER, ""))
            .to_http_request();

        assert_eq!(auth.inspect(&req), AuthOutcome::RejectedInvalid);
    }

    #[test]
    fn test_empty_secret_and_absent_key_is_still_missing() {
        let auth = ApiKeyValidator::new(ApiKeySecret::new(""));

        let req = TestRequest::default().to_http_request();

        assert_eq!(auth.inspect(&req), AuthOutcome::RejectedMissing);
    }

    #[test]
    fn test_decide_on_raw_candidates() {
        let auth = validator();

        assert_eq!(auth.decide(None), AuthOutcome::RejectedMissing);
        assert_eq!(auth.decide(Some("abc123")), AuthOutcome::Accepted);
        assert_eq!(auth.decide(Some("abc12")), AuthOutcome::RejectedInvalid);
        assert_eq!(auth.decide(Some("")), AuthOutcome::RejectedInvalid);
    }
}
