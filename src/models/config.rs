//! Configuration models loaded from external sources.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

pub const DEFAULT_LISTING_ENDPOINT: &str = "/api/campsites/";
pub const DEFAULT_LOGIN_URL: &str = "/login/";
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid settings: {0}")]
    Invalid(#[from] ValidationErrors),

    #[error("malformed settings: {0}")]
    Malformed(String),

    #[cfg(feature = "http")]
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Which filtering strategy a deployment uses.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Filter changes refetch page 1 from the listing endpoint.
    #[default]
    Server,
    /// Filter changes hide and show the cards already on the page.
    Client,
}

#[derive(Clone, Debug, Deserialize)]
/// Settings of the listing client.
pub struct ClientConfig {
    pub base_url: String,
    #[serde(default = "default_listing_endpoint")]
    pub listing_endpoint: String,
    #[serde(default = "default_login_url")]
    pub login_url: String,
    #[serde(default)]
    pub filter_mode: FilterMode,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Anonymous visitors are sent to the login page instead of liking.
    #[serde(default)]
    pub auth_required: bool,
}

impl ClientConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn default_listing_endpoint() -> String {
    DEFAULT_LISTING_ENDPOINT.to_string()
}

fn default_login_url() -> String {
    DEFAULT_LOGIN_URL.to_string()
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

/// Loads `config/default.yaml`, the optional `config/{app_env}.yaml` and
/// `APP_`-prefixed environment variables, in that order of precedence.
#[cfg(feature = "http")]
pub fn load_client_config(app_env: &str) -> Result<ClientConfig, ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build()?;

    Ok(settings.try_deserialize::<ClientConfig>()?)
}

/// Snapshot of the pagination data attributes embedded in the page.
#[derive(Clone, Debug, Deserialize, Validate, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationSettings {
    #[serde(default = "default_listing_endpoint")]
    pub endpoint: String,
    #[serde(default = "first_page")]
    #[validate(range(min = 1))]
    pub current_page: usize,
    #[serde(default = "first_page")]
    #[validate(range(min = 1))]
    pub total_pages: usize,
    #[serde(default)]
    pub initial_country: String,
    #[serde(default)]
    pub initial_search: String,
}

fn first_page() -> usize {
    1
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            endpoint: default_listing_endpoint(),
            current_page: 1,
            total_pages: 1,
            initial_country: String::new(),
            initial_search: String::new(),
        }
    }
}

impl PaginationSettings {
    /// Parses the data attributes encoded as a form string, for example
    /// `endpoint=%2Fapi%2Fcampsites%2F&currentPage=2&totalPages=7`.
    pub fn from_attributes(encoded: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_html_form::from_str(encoded)
            .map_err(|e| ConfigError::Malformed(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parses an embedded JSON snapshot with the same keys.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let settings: Self =
            serde_json::from_str(raw).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }
}
