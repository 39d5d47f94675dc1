//! Builds the active/inactive site tables shown for a selected local authority.

use crate::query::error::LookupError;
use crate::query::local_authority::sites_in;
use crate::snapshot::Snapshot;
use crate::types::pollutant::Pollutant;
use crate::types::reading::Reading;
use crate::types::site::Site;
use chrono::NaiveDate;
use serde::Serialize;

/// Shown in place of a level the site does not report.
pub const MISSING_VALUE: &str = "-";

/// Air quality index band of a reported level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    /// Index 1-3.
    Low,
    /// Index 4-6.
    Moderate,
    /// Index 7-9.
    High,
    /// Index 10.
    VeryHigh,
}

impl Severity {
    pub fn from_value(value: f64) -> Self {
        if value <= 3.0 {
            Severity::Low
        } else if value <= 6.0 {
            Severity::Moderate
        } else if value <= 9.0 {
            Severity::High
        } else {
            Severity::VeryHigh
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::High => "high",
            Severity::VeryHigh => "very-high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub pollutant: Pollutant,
    /// The level as text, or [`MISSING_VALUE`].
    pub display: String,
    /// `None` exactly when `display` is [`MISSING_VALUE`].
    pub severity: Option<Severity>,
}

impl Cell {
    /// Reads the displayed level back as a number.
    pub fn value(&self) -> Option<f64> {
        self.display.parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteRow {
    pub site_name: String,
    pub site_code: String,
    /// One cell per [`Pollutant::ALL`] entry, in that order.
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InactiveSite {
    pub site_name: String,
    pub site_code: String,
    pub site_type: String,
    pub date_opened: Option<NaiveDate>,
    pub date_closed: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteTable {
    pub local_authority: String,
    pub active: Vec<SiteRow>,
    pub inactive: Vec<InactiveSite>,
}

/// Partitions the local authority's sites and builds a row for each active one.
pub fn site_table(snapshot: &Snapshot, local_authority: &str) -> Result<SiteTable, LookupError> {
    let (active, inactive): (Vec<&Site>, Vec<&Site>) = sites_in(snapshot, local_authority)?
        .into_iter()
        .partition(|site| site.active);

    Ok(SiteTable {
        local_authority: local_authority.to_string(),
        active: active
            .into_iter()
            .map(|site| site_row(site, snapshot.reading_for(site)))
            .collect(),
        inactive: inactive
            .into_iter()
            .map(|site| InactiveSite {
                site_name: site.name.clone(),
                site_code: site.code.clone(),
                site_type: site.site_type.clone(),
                date_opened: site.date_opened,
                date_closed: site.date_closed,
            })
            .collect(),
    })
}

/// One table row. Missing, null and zero levels all display as [`MISSING_VALUE`].
pub fn site_row(site: &Site, reading: Option<&Reading>) -> SiteRow {
    let cells = Pollutant::ALL
        .into_iter()
        .map(|pollutant| {
            match reading
                .and_then(|r| r.level_for(pollutant))
                .filter(|v| *v != 0.0)
            {
                Some(value) => Cell {
                    pollutant,
                    display: value.to_string(),
                    severity: Some(Severity::from_value(value)),
                },
                None => Cell {
                    pollutant,
                    display: MISSING_VALUE.to_string(),
                    severity: None,
                },
            }
        })
        .collect();

    SiteRow {
        site_name: site.name.clone(),
        site_code: site.code.clone(),
        cells,
    }
}
