//! Backend API location.
//!
//! The base URL is fixed at build time through `OPENNIONATED_API_BASE_URL`
//! and falls back to the hosted production API when unset or blank.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "https://opennionated-api-10770567236a.herokuapp.com";

/// Resolved backend API location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build a config for `base_url`, dropping any trailing slashes.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_owned();
        Self { base_url }
    }

    /// Build config from the compile-time `OPENNIONATED_API_BASE_URL` variable.
    pub fn from_build_env() -> Self {
        Self::new(resolve_base_url(option_env!("OPENNIONATED_API_BASE_URL")))
    }

    /// Join an endpoint path onto the base URL, inserting a leading `/` when missing.
    pub fn api_url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{endpoint}", self.base_url)
        } else {
            format!("{}/{endpoint}", self.base_url)
        }
    }

    /// Resolve an image reference returned by the API. Absolute URLs pass
    /// through; relative ones are served from the API host.
    pub fn asset_url(&self, url: &str) -> Option<String> {
        let url = url.trim();
        if url.is_empty() {
            None
        } else if url.starts_with("http://") || url.starts_with("https://") {
            Some(url.to_owned())
        } else {
            Some(self.api_url(url))
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

fn resolve_base_url(raw: Option<&str>) -> &str {
    match raw {
        Some(value) if !value.trim().is_empty() => value,
        _ => DEFAULT_API_BASE_URL,
    }
}
