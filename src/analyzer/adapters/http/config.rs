//! Configuration for the broker management API directory.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Connection settings for the broker management API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagementApiConfig {
    /// Base URL of the management API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Virtual host holding the analyzer exchanges.
    #[serde(default = "default_vhost")]
    pub vhost: String,

    /// Management API user.
    #[serde(default = "default_username")]
    pub username: String,

    /// Management API password, if the broker requires one.
    #[serde(default)]
    pub password: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ManagementApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            vhost: default_vhost(),
            username: default_username(),
            password: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ManagementApiConfig {
    /// Returns the request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_base_url() -> String {
    "http://localhost:15672".to_owned()
}

fn default_vhost() -> String {
    "analyzer".to_owned()
}

fn default_username() -> String {
    "guest".to_owned()
}

const fn default_timeout_secs() -> u64 {
    5
}
