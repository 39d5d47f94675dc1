//! Page configuration: the API root, heatmap scale, default pollutant, and the
//! mapping from logical element names to DOM identifiers.

use crate::api::fetcher::DEFAULT_API_ROOT;
use crate::error::ConfigError;
use crate::query::error::LookupError;
use crate::query::heatmap::HEATMAP_MAX;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_POLLUTANT: &str = "NO2";

/// Settings read from the page's embedded configuration JSON. Every field is
/// optional in the source document.
///
/// # Examples
///
/// ```
/// use londonair::Config;
///
/// let config = Config::from_json(r#"{
///     "heatmap_max": 8,
///     "element_ids": {"EMISSION_LIST": "list-emissions"}
/// }"#).unwrap();
///
/// assert_eq!(config.heatmap_max, 8.0);
/// assert_eq!(config.element_id("EMISSION_LIST").unwrap(), "list-emissions");
/// assert_eq!(config.api_root, "https://api.erg.kcl.ac.uk/AirQuality/");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the LondonAir API, with a trailing slash.
    pub api_root: String,
    pub heatmap_max: f64,
    /// Pollutant code or display name shown before the user picks one.
    pub default_pollutant: String,
    /// Logical element name to DOM identifier.
    pub element_ids: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_string(),
            heatmap_max: HEATMAP_MAX,
            default_pollutant: DEFAULT_POLLUTANT.to_string(),
            element_ids: HashMap::new(),
        }
    }
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let mut config: Config = serde_json::from_str(text)?;
        if !config.api_root.ends_with('/') {
            config.api_root.push('/');
        }
        Ok(config)
    }

    pub fn element_id(&self, logical_name: &str) -> Result<&str, LookupError> {
        self.element_ids
            .get(logical_name)
            .map(String::as_str)
            .ok_or_else(|| LookupError::UnknownElement(logical_name.to_string()))
    }
}
