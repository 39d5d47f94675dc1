//! Wire formats of the LondonAir site data and species information endpoints,
//! and their normalization into crate types.

use crate::api::error::TimeSeriesError;
use crate::types::pollutant::{Pollutant, PollutantInfo};
use crate::types::time_series::{Measurement, SiteTimeSeries};
use chrono::NaiveDateTime;
use log::{debug, warn};
use serde::{Deserialize, Deserializer};

const MEASUREMENT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Deserialize)]
pub struct SiteDataResponse {
    #[serde(rename = "AirQualityData")]
    pub air_quality_data: AirQualityData,
}

#[derive(Debug, Deserialize)]
pub struct AirQualityData {
    #[serde(rename = "@SiteCode", default)]
    pub site_code: Option<String>,
    /// The API sends a bare object instead of a list when there is one record.
    #[serde(rename = "Data", default, deserialize_with = "one_or_many")]
    pub data: Vec<RawMeasurement>,
}

#[derive(Debug, Deserialize)]
pub struct RawMeasurement {
    #[serde(rename = "@SpeciesCode")]
    pub species_code: String,
    #[serde(rename = "@MeasurementDateGMT")]
    pub measurement_date_gmt: String,
    /// Numeric text; empty or absent when nothing was recorded that hour.
    #[serde(rename = "@Value", default)]
    pub value: Option<String>,
}

fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        Many(Vec<T>),
        One(T),
        Null(()),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(items) => items,
        OneOrMany::One(item) => vec![item],
        OneOrMany::Null(()) => Vec::new(),
    })
}

/// Parses a site data response body.
pub fn parse_site_data(site_code: &str, body: &str) -> Result<SiteTimeSeries, TimeSeriesError> {
    let response: SiteDataResponse = serde_json::from_str(body)?;
    Ok(to_time_series(site_code, response))
}

/// Buckets measurements by known species code. Empty values count as zero;
/// unknown species and unreadable records are dropped.
pub fn to_time_series(site_code: &str, response: SiteDataResponse) -> SiteTimeSeries {
    let mut series = SiteTimeSeries::new(site_code);

    for raw in response.air_quality_data.data {
        let Some(pollutant) = Pollutant::from_code(&raw.species_code) else {
            debug!("Ignoring unknown species '{}' for site {}", raw.species_code, site_code);
            continue;
        };

        let timestamp =
            match NaiveDateTime::parse_from_str(&raw.measurement_date_gmt, MEASUREMENT_TIME_FORMAT) {
                Ok(ts) => ts,
                Err(e) => {
                    warn!(
                        "Skipping {} measurement for site {} with bad timestamp '{}': {}",
                        pollutant, site_code, raw.measurement_date_gmt, e
                    );
                    continue;
                }
            };

        let value = raw.value.as_deref().unwrap_or_default().trim();
        let value = if value.is_empty() {
            0.0
        } else {
            match value.parse::<f64>() {
                Ok(v) => v,
                Err(e) => {
                    warn!(
                        "Skipping {} measurement for site {} with bad value '{}': {}",
                        pollutant, site_code, value, e
                    );
                    continue;
                }
            }
        };

        series.push(pollutant, Measurement { timestamp, value });
    }

    series
}

#[derive(Debug, Deserialize)]
pub struct SpeciesResponse {
    #[serde(rename = "AirQualitySpecies")]
    pub air_quality_species: AirQualitySpecies,
}

#[derive(Debug, Deserialize)]
pub struct AirQualitySpecies {
    #[serde(rename = "Species", default, deserialize_with = "one_or_many")]
    pub species: Vec<RawSpecies>,
}

#[derive(Debug, Deserialize)]
pub struct RawSpecies {
    #[serde(rename = "@SpeciesName")]
    pub name: String,
    #[serde(rename = "@SpeciesCode")]
    pub code: String,
    #[serde(rename = "@Description", default)]
    pub description: String,
    #[serde(rename = "@HealthEffect", default)]
    pub health_effect: String,
    #[serde(rename = "@Link", default)]
    pub link: Option<String>,
}

impl From<RawSpecies> for PollutantInfo {
    fn from(raw: RawSpecies) -> Self {
        PollutantInfo {
            name: raw.name,
            code: raw.code,
            description: raw.description,
            health_effect: raw.health_effect,
            link: raw.link.filter(|l| !l.trim().is_empty()),
        }
    }
}

/// Parses the species information response into pollutant descriptions, in
/// response order.
pub fn parse_species(body: &str) -> Result<Vec<PollutantInfo>, TimeSeriesError> {
    let response: SpeciesResponse = serde_json::from_str(body)?;
    Ok(response
        .air_quality_species
        .species
        .into_iter()
        .map(PollutantInfo::from)
        .collect())
}
