//! Resolves a local authority's display name to its sites and boundary polygon.

use crate::query::error::LookupError;
use crate::snapshot::Snapshot;
use crate::types::geo::{BoundingBox, Feature, FeatureCollection, LatLon};
use crate::types::site::Site;
use log::warn;

/// Sites whose `local_auth_id` is the code of the local authority called `name`,
/// in snapshot order.
pub fn sites_in<'a>(snapshot: &'a Snapshot, name: &str) -> Result<Vec<&'a Site>, LookupError> {
    let local_authority = snapshot.local_authority(name)?;
    Ok(snapshot
        .sites()
        .iter()
        .filter(|site| site.local_auth_id == local_authority.code)
        .collect())
}

/// The first boundary feature whose `properties.name` is `name`.
pub fn boundary_for<'a>(
    boundaries: &'a FeatureCollection,
    name: &str,
) -> Result<&'a Feature, LookupError> {
    boundaries
        .features
        .iter()
        .find(|feature| feature.properties.name == name)
        .ok_or_else(|| LookupError::UnknownBoundary(name.to_string()))
}

/// Reduces GeoJSON `[longitude, latitude]` positions to a latitude/longitude box.
///
/// Positions with a NaN component are logged and skipped. Returns `None` when no
/// valid position remains.
pub fn bounding_box(positions: &[[f64; 2]]) -> Option<BoundingBox> {
    let mut bounds: Option<BoundingBox> = None;

    for &[lng, lat] in positions {
        if lng.is_nan() || lat.is_nan() {
            warn!("Skipping boundary position with NaN component: [{lng}, {lat}]");
            continue;
        }
        bounds = Some(match bounds {
            None => BoundingBox {
                south_west: LatLon(lat, lng),
                north_east: LatLon(lat, lng),
            },
            Some(b) => BoundingBox {
                south_west: LatLon(b.south_west.0.min(lat), b.south_west.1.min(lng)),
                north_east: LatLon(b.north_east.0.max(lat), b.north_east.1.max(lng)),
            },
        });
    }

    bounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::geo::{FeatureProperties, Geometry};
    use serde_json::Map;
    use std::collections::HashSet;

    fn snapshot() -> Snapshot {
        Snapshot::from_json()
            .local_authorities(
                r#"[{"name": "Camden", "code": "7"},
                    {"name": "Westminster", "code": "33"},
                    {"name": "Barnet", "code": "2"}]"#,
            )
            .sites(
                r#"[
                {"name": "Swiss Cottage", "code": "CD1", "latitude": 51.544, "longitude": -0.175, "local_auth_id": "7"},
                {"name": "Marylebone Road", "code": "MY1", "latitude": 51.522, "longitude": -0.154, "local_auth_id": "33"},
                {"name": "Euston Road", "code": "CD9", "latitude": 51.527, "longitude": -0.132, "local_auth_id": "7"},
                {"name": "Oxford Street", "code": "WM6", "latitude": 51.513, "longitude": -0.152, "local_auth_id": "33"}
            ]"#,
            )
            .call()
            .unwrap()
    }

    fn feature(name: &str) -> Feature {
        Feature {
            kind: "Feature".to_string(),
            properties: FeatureProperties {
                name: name.to_string(),
                extra: Map::new(),
            },
            geometry: Geometry::Polygon(vec![vec![[-0.2, 51.5], [-0.1, 51.6]]]),
        }
    }

    #[test]
    fn test_sites_in_matches_code() {
        let snapshot = snapshot();
        let codes: Vec<&str> = sites_in(&snapshot, "Camden")
            .unwrap()
            .iter()
            .map(|s| s.code.as_str())
            .collect();
        assert_eq!(codes, vec!["CD1", "CD9"]);
    }

    #[test]
    fn test_sites_in_disjoint_local_authorities() {
        let snapshot = snapshot();
        let camden: HashSet<&str> = sites_in(&snapshot, "Camden")
            .unwrap()
            .iter()
            .map(|s| s.code.as_str())
            .collect();
        let westminster: HashSet<&str> = sites_in(&snapshot, "Westminster")
            .unwrap()
            .iter()
            .map(|s| s.code.as_str())
            .collect();

        assert!(camden.is_disjoint(&westminster));
        let union: HashSet<&str> = camden.union(&westminster).copied().collect();
        let expected: HashSet<&str> = snapshot
            .sites()
            .iter()
            .filter(|s| s.local_auth_id == "7" || s.local_auth_id == "33")
            .map(|s| s.code.as_str())
            .collect();
        assert_eq!(union, expected);
    }

    #[test]
    fn test_sites_in_known_authority_without_sites() {
        assert!(sites_in(&snapshot(), "Barnet").unwrap().is_empty());
    }

    #[test]
    fn test_sites_in_unknown_name() {
        assert_eq!(
            sites_in(&snapshot(), "camden"),
            Err(LookupError::UnknownLocalAuthority("camden".to_string()))
        );
    }

    #[test]
    fn test_boundary_for_first_match() {
        let mut first = feature("Camden");
        first.properties.extra.insert("order".to_string(), 1.into());
        let collection = FeatureCollection {
            features: vec![feature("Barnet"), first, feature("Camden")],
            ..Default::default()
        };

        let found = boundary_for(&collection, "Camden").unwrap();
        assert_eq!(found.properties.extra["order"], 1);
        assert_eq!(
            boundary_for(&collection, "Hackney"),
            Err(LookupError::UnknownBoundary("Hackney".to_string()))
        );
    }

    #[test]
    fn test_bounding_box_skips_nan() {
        let bbox = bounding_box(&[[1.0, 2.0], [f64::NAN, 3.0], [4.0, 5.0]]).unwrap();
        // Positions are [lng, lat]; the box is [[minLat, minLng], [maxLat, maxLng]].
        assert_eq!(bbox.to_leaflet(), [[2.0, 1.0], [5.0, 4.0]]);
    }

    #[test]
    fn test_bounding_box_order_independent() {
        let positions = [[-0.5, 51.3], [0.2, 51.7], [-0.1, 51.5], [0.0, 51.4]];
        let expected = bounding_box(&positions).unwrap();

        let mut reversed = positions;
        reversed.reverse();
        let mut rotated = positions;
        rotated.rotate_left(2);

        assert_eq!(bounding_box(&reversed), Some(expected));
        assert_eq!(bounding_box(&rotated), Some(expected));
        assert_eq!(expected.to_leaflet(), [[51.3, -0.5], [51.7, 0.2]]);
    }

    #[test]
    fn test_bounding_box_no_valid_positions() {
        assert_eq!(bounding_box(&[]), None);
        assert_eq!(bounding_box(&[[f64::NAN, f64::NAN]]), None);
    }
}
