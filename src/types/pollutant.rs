//! Pollutant codes known to the LondonAir network and the static metadata
//! shown in the emissions info panel.

use crate::query::error::LookupError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A measured substance, identified on the wire by its species code.
///
/// The declaration order is the column order used by site tables and charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Pollutant {
    #[serde(rename = "NO2")]
    NitrogenDioxide,
    #[serde(rename = "CO")]
    CarbonMonoxide,
    #[serde(rename = "O3")]
    Ozone,
    #[serde(rename = "PM10")]
    Pm10,
    #[serde(rename = "PM25", alias = "PM2.5")]
    Pm25,
    #[serde(rename = "SO2")]
    SulphurDioxide,
}

impl Pollutant {
    pub const ALL: [Pollutant; 6] = [
        Pollutant::NitrogenDioxide,
        Pollutant::CarbonMonoxide,
        Pollutant::Ozone,
        Pollutant::Pm10,
        Pollutant::Pm25,
        Pollutant::SulphurDioxide,
    ];

    /// The canonical species code (e.g. "NO2").
    pub fn code(&self) -> &'static str {
        self.codes()[0]
    }

    /// Every spelling of the species code seen in page data and API responses.
    /// The first entry is canonical.
    pub(crate) fn codes(&self) -> &'static [&'static str] {
        match self {
            Pollutant::NitrogenDioxide => &["NO2"],
            Pollutant::CarbonMonoxide => &["CO"],
            Pollutant::Ozone => &["O3"],
            Pollutant::Pm10 => &["PM10"],
            Pollutant::Pm25 => &["PM25", "PM2.5"],
            Pollutant::SulphurDioxide => &["SO2"],
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Pollutant::NitrogenDioxide => "Nitrogen Dioxide",
            Pollutant::CarbonMonoxide => "Carbon Monoxide",
            Pollutant::Ozone => "Ozone",
            Pollutant::Pm10 => "PM10 Particulate",
            Pollutant::Pm25 => "PM2.5 Particulate",
            Pollutant::SulphurDioxide => "Sulphur Dioxide",
        }
    }

    /// Chart colour as an RGB triple.
    pub(crate) fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Pollutant::NitrogenDioxide => (255, 0, 0),
            Pollutant::CarbonMonoxide => (33, 120, 120),
            Pollutant::Ozone => (0, 255, 0),
            Pollutant::Pm10 => (128, 0, 128),
            Pollutant::Pm25 => (255, 140, 0),
            Pollutant::SulphurDioxide => (0, 0, 255),
        }
    }

    /// Resolves a species code, returning `None` for codes outside the known set.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.codes().iter().any(|c| *c == code))
    }
}

/// Formats a `Pollutant` as its canonical species code.
///
/// # Examples
///
/// ```
/// use londonair::Pollutant;
///
/// assert_eq!(Pollutant::NitrogenDioxide.to_string(), "NO2");
/// assert_eq!(format!("{}", Pollutant::Pm25), "PM25");
/// ```
impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Parses either a species code or a display name.
impl FromStr for Pollutant {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
            .or_else(|| Self::ALL.into_iter().find(|p| p.display_name() == s))
            .ok_or_else(|| LookupError::UnknownPollutant(s.to_string()))
    }
}

/// Static description of one pollutant type, as embedded in the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutantInfo {
    /// Display name, e.g. "Nitrogen Dioxide".
    pub name: String,
    /// Species code, e.g. "NO2".
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub health_effect: String,
    /// Reference link. Page data uses an empty string for "no link".
    #[serde(default)]
    pub link: Option<String>,
}

impl PollutantInfo {
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref().filter(|l| !l.is_empty())
    }
}
