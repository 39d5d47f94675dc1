//! Shapes a site's time series into a bar chart configuration.

use crate::types::pollutant::Pollutant;
use crate::types::time_series::{SiteTimeSeries, HOUR_LABELS};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
    pub data: Vec<f64>,
}

/// The `{labels, datasets}` object a chart collaborator renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}

/// One dataset per renderable series, each aligned to the 24 hour labels.
pub fn bar_chart(series: &SiteTimeSeries) -> ChartData {
    ChartData {
        labels: HOUR_LABELS.iter().map(|l| l.to_string()).collect(),
        datasets: series
            .renderable()
            .map(|s| dataset(s.pollutant, s.hourly_values().to_vec()))
            .collect(),
    }
}

fn dataset(pollutant: Pollutant, data: Vec<f64>) -> Dataset {
    let (r, g, b) = pollutant.rgb();
    Dataset {
        label: pollutant.display_name().to_string(),
        background_color: format!("rgba({r}, {g}, {b}, 0.3)"),
        border_color: format!("rgba({r}, {g}, {b}, 0.6)"),
        border_width: 1,
        data,
    }
}
