//! Filters readings down to the point list a heatmap layer consumes.

use crate::query::error::LookupError;
use crate::types::pollutant::{Pollutant, PollutantInfo};
use crate::types::reading::Reading;
use serde::Serialize;

/// Declared top of the heatmap scale. This is the top of the air quality index
/// band, not a statistic of the data.
pub const HEATMAP_MAX: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeatPoint {
    pub lat: f64,
    pub lng: f64,
    pub value: f64,
}

/// The `{max, data}` object handed to the heatmap overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapData {
    pub max: f64,
    pub data: Vec<HeatPoint>,
}

impl HeatmapData {
    pub fn with_max(self, max: f64) -> Self {
        Self { max, ..self }
    }
}

/// Points for every reading with a non-null level under `pollutant`, in reading
/// order. A known species code also matches its other spellings (`PM25` and
/// `PM2.5`). A key no reading carries gives an empty list.
pub fn emission_levels(readings: &[Reading], pollutant: &str) -> HeatmapData {
    let known = Pollutant::from_code(pollutant);
    let data = readings
        .iter()
        .filter_map(|reading| {
            let level = match known {
                Some(p) => reading.level_for(p),
                None => reading.level(pollutant),
            };
            level.map(|value| HeatPoint {
                lat: reading.latitude,
                lng: reading.longitude,
                value,
            })
        })
        .collect();

    HeatmapData {
        max: HEATMAP_MAX,
        data,
    }
}

/// Finds the info-panel entry for a pollutant by display name or code.
pub fn pollutant_info<'a>(
    infos: &'a [PollutantInfo],
    name_or_code: &str,
) -> Result<&'a PollutantInfo, LookupError> {
    infos
        .iter()
        .find(|info| info.name == name_or_code || info.code == name_or_code)
        .ok_or_else(|| LookupError::UnknownPollutant(name_or_code.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn reading(site: &str, lat: f64, levels: &[(&str, Option<f64>)]) -> Reading {
        Reading {
            site_name: site.to_string(),
            local_authority_name: "Camden".to_string(),
            latitude: lat,
            longitude: -0.1,
            levels: levels
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    fn readings() -> Vec<Reading> {
        vec![
            reading("A", 51.1, &[("NO2", Some(3.0)), ("O3", None)]),
            reading("B", 51.2, &[("NO2", None), ("O3", Some(2.0))]),
            reading("C", 51.3, &[("NO2", Some(0.0))]),
            reading("D", 51.4, &[("NO2", Some(7.0)), ("O3", Some(1.0))]),
        ]
    }

    #[test]
    fn test_only_non_null_levels_in_reading_order() {
        let heatmap = emission_levels(&readings(), "NO2");

        assert_eq!(heatmap.max, HEATMAP_MAX);
        let lats: Vec<f64> = heatmap.data.iter().map(|p| p.lat).collect();
        assert_eq!(lats, vec![51.1, 51.3, 51.4]);
        assert_eq!(heatmap.data[1].value, 0.0);
    }

    #[test]
    fn test_absent_key_gives_empty_list() {
        assert!(emission_levels(&readings(), "XYZ").data.is_empty());
        assert!(emission_levels(&[], "NO2").data.is_empty());
    }

    #[test]
    fn test_pm25_spellings_are_interchangeable() {
        let readings = vec![
            reading("A", 51.1, &[("PM2.5", Some(4.0))]),
            reading("B", 51.2, &[("PM25", Some(2.0))]),
        ];

        assert_eq!(emission_levels(&readings, "PM25").data.len(), 2);
        assert_eq!(emission_levels(&readings, "PM2.5").data.len(), 2);
        assert_eq!(emission_levels(&readings, "PM25").data[0].value, 4.0);
    }

    #[test]
    fn test_heatmap_handoff_shape() {
        let heatmap = emission_levels(&readings(), "O3").with_max(5.0);
        let json = serde_json::to_value(&heatmap).unwrap();
        assert_eq!(json["max"], 5.0);
        assert_eq!(json["data"][0]["lat"], 51.2);
        assert_eq!(json["data"][0]["lng"], -0.1);
        assert_eq!(json["data"][0]["value"], 2.0);
    }

    #[test]
    fn test_pollutant_info_by_name_or_code() {
        let infos = vec![PollutantInfo {
            name: "Nitrogen Dioxide".to_string(),
            code: "NO2".to_string(),
            description: "A gas".to_string(),
            health_effect: "Irritant".to_string(),
            link: None,
        }];

        assert_eq!(pollutant_info(&infos, "NO2").unwrap().name, "Nitrogen Dioxide");
        assert_eq!(pollutant_info(&infos, "Nitrogen Dioxide").unwrap().code, "NO2");
        assert_eq!(
            pollutant_info(&infos, "Ozone"),
            Err(LookupError::UnknownPollutant("Ozone".to_string()))
        );
    }
}
