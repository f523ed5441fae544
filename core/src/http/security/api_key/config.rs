//! API key extraction configuration.

/// Default header clients send the API key in.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Conventional query parameter name for the API key.
pub const TOKEN_QUERY_PARAM: &str = "token";

/// Alternative query parameter name, common in public APIs.
pub const API_KEY_QUERY_PARAM: &str = "api_key";

/// Where to look for the API key in requests.
#[derive(Debug, Clone)]
pub enum KeyLocation {
    /// Look for the API key in a header (e.g., "x-api-key").
    /// Header name matching is case-insensitive.
    Header(String),
    /// Look for the API key in a query parameter (e.g., "?token=...").
    Query(String),
}

impl Default for KeyLocation {
    fn default() -> Self {
        Self::Header(API_KEY_HEADER.to_string())
    }
}

impl KeyLocation {
    /// Creates a header-based location.
    pub fn header(name: impl Into<String>) -> Self {
        Self::Header(name.into())
    }

    /// Creates a query parameter-based location.
    pub fn query(name: impl Into<String>) -> Self {
        Self::Query(name.into())
    }
}

/// Configuration for API key extraction.
///
/// Locations are checked in order; the first one that yields a value wins,
/// even if that value is empty. An empty value is a presented credential and
/// is validated (and rejected), never treated as absent.
#[derive(Debug, Clone)]
pub struct ApiKeyConfig {
    /// Locations to look for the API key (checked in order).
    locations: Vec<KeyLocation>,
}

impl Default for ApiKeyConfig {
    fn default() -> Self {
        Self {
            locations: vec![KeyLocation::default()],
        }
    }
}

impl ApiKeyConfig {
    /// Creates a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that looks for the API key in a header.
    pub fn header(name: impl Into<String>) -> Self {
        Self {
            locations: vec![KeyLocation::Header(name.into())],
        }
    }

    /// Creates a configuration that looks for the API key in a query parameter.
    pub fn query(name: impl Into<String>) -> Self {
        Self {
            locations: vec![KeyLocation::Query(name.into())],
        }
    }

    /// Adds a location to look for the API key.
    pub fn add_location(mut self, location: KeyLocation) -> Self {
        self.locations.push(location);
        self
    }

    /// Sets the locations to look for the API key.
    pub fn locations(mut self, locations: Vec<KeyLocation>) -> Self {
        self.locations = locations;
        self
    }

    /// Returns the locations to check for the API key.
    pub fn get_locations(&self) -> &[KeyLocation] {
        &self.locations
    }
}
