//! Runtime configuration handed to the network layer

use std::time::Duration;

use crate::constants::{PROJECTS_API_URL, REQUEST_TIMEOUT_SECS};

/// Where and how projects are fetched
#[derive(Clone, Debug)]
pub struct Config {
    /// Endpoint without query string
    pub api_url: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: String::from(PROJECTS_API_URL),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Config pointing at another endpoint, e.g. a local mock server
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Config {
            api_url: api_url.into(),
            ..Config::default()
        }
    }
}
