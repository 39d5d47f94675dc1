//! Defines monitoring sites and the local authorities that group them. Also includes
//! the implementations needed to index sites spatially with the `rstar` crate.

use crate::types::geo::LatLon;
use chrono::{NaiveDate, NaiveDateTime};
use rstar::{PointDistance, RTreeObject, AABB};
use serde::{Deserialize, Deserializer, Serialize};

/// An administrative area. Its boundary polygon lives in a separate GeoJSON
/// collection keyed by `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalAuthority {
    pub name: String,
    /// Unique code, referenced by [`Site::local_auth_id`].
    pub code: String,
}

/// A fixed physical monitoring station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub name: String,
    /// The LondonAir site code (e.g. "MY1"), used for remote API queries.
    pub code: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Code of the owning [`LocalAuthority`].
    pub local_auth_id: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub date_opened: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub date_closed: Option<NaiveDate>,
    /// e.g. "Roadside", "Kerbside", "Urban Background".
    #[serde(default)]
    pub site_type: String,
}

impl Site {
    pub fn location(&self) -> LatLon {
        LatLon(self.latitude, self.longitude)
    }
}

/// Accepts `"YYYY-MM-DD"`, `"YYYY-MM-DD HH:MM:SS"`, an empty string, or null.
fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .map(Some)
        .map_err(|e| D::Error::custom(format!("invalid site date '{raw}': {e}")))
}

// --- R-Tree Implementations ---

/// A site is a point; its envelope is the degenerate box at its location.
impl RTreeObject for Site {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.latitude, self.longitude])
    }
}

/// Squared planar distance in degrees. Only used to order R-tree candidates;
/// real distances are great-circle and computed by the locator.
impl PointDistance for Site {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.latitude - point[0];
        let dy = self.longitude - point[1];
        dx * dx + dy * dy
    }
}
