//! Geographic primitives: points, bounding boxes, and the subset of GeoJSON used
//! for local-authority boundaries.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use londonair::LatLon;
///
/// let trafalgar_square = LatLon(51.5080, -0.1281);
/// assert_eq!(trafalgar_square.0, 51.5080); // Latitude
/// assert_eq!(trafalgar_square.1, -0.1281); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon(pub f64, pub f64);

/// An axis-aligned latitude/longitude box.
///
/// Serializes to the Leaflet `fitBounds` shape `[[minLat, minLng], [maxLat, maxLng]]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub south_west: LatLon,
    pub north_east: LatLon,
}

/// The box the map falls back to when the user's position is unknown or outside London.
pub const LONDON_BOUNDS: BoundingBox = BoundingBox {
    south_west: LatLon(51.357, -0.461),
    north_east: LatLon(51.669, 0.206),
};

impl BoundingBox {
    /// Inclusive containment test.
    pub fn contains(&self, point: LatLon) -> bool {
        self.south_west.0 <= point.0
            && point.0 <= self.north_east.0
            && self.south_west.1 <= point.1
            && point.1 <= self.north_east.1
    }

    pub fn to_leaflet(&self) -> [[f64; 2]; 2] {
        [
            [self.south_west.0, self.south_west.1],
            [self.north_east.0, self.north_east.1],
        ]
    }
}

impl Serialize for BoundingBox {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_leaflet().serialize(serializer)
    }
}

/// A GeoJSON `FeatureCollection` of local-authority boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default = "feature_collection_type")]
    pub kind: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self {
            kind: feature_collection_type(),
            features: Vec::new(),
        }
    }
}

fn feature_collection_type() -> String {
    "FeatureCollection".to_string()
}

fn feature_type() -> String {
    "Feature".to_string()
}

/// One boundary polygon keyed by `properties.name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default = "feature_type")]
    pub kind: String,
    pub properties: FeatureProperties,
    pub geometry: Geometry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureProperties {
    pub name: String,
    /// Any other properties are carried through untouched for the map layer.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Boundary geometry. Positions are GeoJSON order: `[longitude, latitude]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Polygon(Vec<Vec<[f64; 2]>>),
    MultiPolygon(Vec<Vec<Vec<[f64; 2]>>>),
}

impl Geometry {
    /// Every position of every ring, flattened.
    pub fn positions(&self) -> Vec<[f64; 2]> {
        match self {
            Geometry::Polygon(rings) => rings.iter().flatten().copied().collect(),
            Geometry::MultiPolygon(polygons) => {
                polygons.iter().flatten().flatten().copied().collect()
            }
        }
    }
}

impl Feature {
    /// The bounding box of every ring in this feature's geometry.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        crate::query::local_authority::bounding_box(&self.geometry.positions())
    }
}
