use crate::types::geo::LatLon;
use crate::types::pollutant::Pollutant;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One site's latest pollutant levels, as embedded in the page.
///
/// Every key besides the four named fields is a species code mapping to a level,
/// or to `null` when the site does not measure that pollutant. A `None` level is
/// "not measured here", which is distinct from a measured zero. Keys holding
/// anything other than a number or `null` are not levels and are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    #[serde(rename = "SiteName")]
    pub site_name: String,
    #[serde(rename = "LocalAuthorityName")]
    pub local_authority_name: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(flatten, deserialize_with = "deserialize_levels")]
    pub levels: BTreeMap<String, Option<f64>>,
}

impl Reading {
    /// The level recorded under exactly this key.
    pub fn level(&self, key: &str) -> Option<f64> {
        self.levels.get(key).copied().flatten()
    }

    /// The level for a known pollutant under any of its code spellings.
    pub fn level_for(&self, pollutant: Pollutant) -> Option<f64> {
        pollutant.codes().iter().find_map(|code| self.level(code))
    }

    pub fn location(&self) -> LatLon {
        LatLon(self.latitude, self.longitude)
    }
}

fn deserialize_levels<'de, D>(deserializer: D) -> Result<BTreeMap<String, Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::Null => Some((key, None)),
            Value::Number(n) => Some((key, n.as_f64())),
            other => {
                debug!("Ignoring non-numeric reading field '{}': {}", key, other);
                None
            }
        })
        .collect())
}
