//! Page-level configuration.
//!
//! The backend may embed a JSON object in
//! `<script type="application/json" id="playlist-ui-config">`. Every field is
//! optional; missing fields fall back to the defaults the page was designed
//! around.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::UiError;

/// Id of the optional config element.
pub const CONFIG_ELEMENT_ID: &str = "playlist-ui-config";

pub const DEFAULT_ENDPOINT: &str = "/api/create_playlist";
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
/// Limit written by the "select all" action; large enough to mean "no limit".
pub const SELECT_ALL_LIMIT: u32 = 10_000;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Relative path the playlist request is POSTed to.
    pub endpoint: String,
    /// Key under which the theme override is persisted.
    pub theme_storage_key: String,
    pub select_all_limit: u32,
    /// Console log level once the page boots.
    pub log_level: log::Level,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            select_all_limit: SELECT_ALL_LIMIT,
            log_level: log::Level::Info,
        }
    }
}

impl UiConfig {
    /// Parse a config object. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] if the text is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|e| UiError::Config(e.to_string()))
    }
}
