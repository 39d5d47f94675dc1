//! Per-pollutant hourly series for one site and one day, as returned by the
//! LondonAir site data endpoint.

use crate::types::pollutant::Pollutant;
use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;
use std::collections::BTreeMap;

/// The fixed label set a day's hourly values are aligned to.
pub const HOUR_LABELS: [&str; 24] = [
    "00:00", "01:00", "02:00", "03:00", "04:00", "05:00", "06:00", "07:00", "08:00", "09:00",
    "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00", "18:00", "19:00",
    "20:00", "21:00", "22:00", "23:00",
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    /// Measurement time in GMT.
    pub timestamp: NaiveDateTime,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    pub pollutant: Pollutant,
    /// In response order.
    pub measurements: Vec<Measurement>,
}

impl TimeSeries {
    pub fn new(pollutant: Pollutant) -> Self {
        Self {
            pollutant,
            measurements: Vec::new(),
        }
    }

    pub fn values(&self) -> Vec<f64> {
        self.measurements.iter().map(|m| m.value).collect()
    }

    /// A series is worth drawing only if at least one value is non-zero.
    pub fn is_renderable(&self) -> bool {
        self.measurements.iter().any(|m| m.value != 0.0)
    }

    /// Values aligned to [`HOUR_LABELS`]. Hours without a measurement are zero;
    /// if an hour appears twice the later measurement wins.
    pub fn hourly_values(&self) -> [f64; 24] {
        let mut values = [0.0; 24];
        for m in &self.measurements {
            values[m.timestamp.hour() as usize] = m.value;
        }
        values
    }
}

/// All known-pollutant series parsed from one site data response.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SiteTimeSeries {
    pub site_code: String,
    series: BTreeMap<Pollutant, TimeSeries>,
}

impl SiteTimeSeries {
    pub fn new(site_code: impl Into<String>) -> Self {
        Self {
            site_code: site_code.into(),
            series: BTreeMap::new(),
        }
    }

    pub(crate) fn push(&mut self, pollutant: Pollutant, measurement: Measurement) {
        self.series
            .entry(pollutant)
            .or_insert_with(|| TimeSeries::new(pollutant))
            .measurements
            .push(measurement);
    }

    pub fn get(&self, pollutant: Pollutant) -> Option<&TimeSeries> {
        self.series.get(&pollutant)
    }

    /// Every parsed series, in [`Pollutant`] order.
    pub fn iter(&self) -> impl Iterator<Item = &TimeSeries> {
        self.series.values()
    }

    /// Series with at least one non-zero value. Empty and all-zero series are
    /// left out so no blank graphs get drawn.
    pub fn renderable(&self) -> impl Iterator<Item = &TimeSeries> {
        self.iter().filter(|s| s.is_renderable())
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
