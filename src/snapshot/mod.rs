//! The read-only reference data a page embeds, parsed once and passed explicitly
//! to every filter and shaper.

pub mod error;

use crate::query::error::LookupError;
use crate::snapshot::error::SnapshotError;
use crate::types::geo::FeatureCollection;
use crate::types::pollutant::PollutantInfo;
use crate::types::reading::Reading;
use crate::types::site::{LocalAuthority, Site};
use bon::bon;
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;

/// All reference collections in one document, for pages that embed a single blob.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PageData {
    pub readings: Vec<Reading>,
    pub pollutants: Vec<PollutantInfo>,
    pub local_authorities: Vec<LocalAuthority>,
    pub sites: Vec<Site>,
    pub boundaries: FeatureCollection,
}

/// Validated, immutable reference data.
///
/// Local-authority names and codes and site codes are unique, so every
/// name or code lookup has at most one answer.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    readings: Vec<Reading>,
    pollutants: Vec<PollutantInfo>,
    local_authorities: Vec<LocalAuthority>,
    sites: Vec<Site>,
    boundaries: FeatureCollection,
}

#[bon]
impl Snapshot {
    /// Builds a snapshot from already-deserialized collections.
    ///
    /// # Errors
    ///
    /// Returns a `SnapshotError::Duplicate*` variant if a local-authority name or code,
    /// or a site code, occurs twice.
    pub fn from_page_data(data: PageData) -> Result<Self, SnapshotError> {
        ensure_unique(
            data.local_authorities.iter().map(|la| la.name.as_str()),
            SnapshotError::DuplicateLocalAuthorityName,
        )?;
        ensure_unique(
            data.local_authorities.iter().map(|la| la.code.as_str()),
            SnapshotError::DuplicateLocalAuthorityCode,
        )?;
        ensure_unique(
            data.sites.iter().map(|s| s.code.as_str()),
            SnapshotError::DuplicateSiteCode,
        )?;

        let snapshot = Self {
            readings: data.readings,
            pollutants: data.pollutants,
            local_authorities: data.local_authorities,
            sites: data.sites,
            boundaries: data.boundaries,
        };

        for reading in snapshot.unassigned_readings() {
            warn!(
                "Reading for site '{}' names unknown local authority '{}'",
                reading.site_name, reading.local_authority_name
            );
        }
        for site in snapshot.unassigned_sites() {
            warn!(
                "Site '{}' ({}) references unknown local authority code '{}'",
                site.name, site.code, site.local_auth_id
            );
        }

        info!(
            "Loaded snapshot: {} readings, {} pollutants, {} local authorities, {} sites, {} boundaries",
            snapshot.readings.len(),
            snapshot.pollutants.len(),
            snapshot.local_authorities.len(),
            snapshot.sites.len(),
            snapshot.boundaries.features.len()
        );

        Ok(snapshot)
    }

    /// Parses the JSON text of each embedded collection. Collections that are not
    /// supplied are treated as empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use londonair::Snapshot;
    ///
    /// let snapshot = Snapshot::from_json()
    ///     .local_authorities(r#"[{"name": "Camden", "code": "7"}]"#)
    ///     .sites(r#"[{"name": "Swiss Cottage", "code": "CD1", "latitude": 51.544,
    ///                 "longitude": -0.175, "local_auth_id": "7", "active": true}]"#)
    ///     .call()
    ///     .unwrap();
    ///
    /// assert_eq!(snapshot.sites().len(), 1);
    /// assert!(snapshot.readings().is_empty());
    /// ```
    #[builder]
    pub fn from_json(
        readings: Option<&str>,
        pollutants: Option<&str>,
        local_authorities: Option<&str>,
        sites: Option<&str>,
        boundaries: Option<&str>,
    ) -> Result<Self, SnapshotError> {
        Self::from_page_data(PageData {
            readings: parse_collection("readings", readings)?,
            pollutants: parse_collection("pollutants", pollutants)?,
            local_authorities: parse_collection("local authorities", local_authorities)?,
            sites: parse_collection("sites", sites)?,
            boundaries: parse_collection("boundaries", boundaries)?,
        })
    }

    /// Parses a single JSON document shaped like [`PageData`].
    pub fn from_page_json(text: &str) -> Result<Self, SnapshotError> {
        let data = serde_json::from_str(text).map_err(|source| SnapshotError::JsonParse {
            collection: "page data",
            source,
        })?;
        Self::from_page_data(data)
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn pollutants(&self) -> &[PollutantInfo] {
        &self.pollutants
    }

    pub fn local_authorities(&self) -> &[LocalAuthority] {
        &self.local_authorities
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn boundaries(&self) -> &FeatureCollection {
        &self.boundaries
    }

    pub fn local_authority(&self, name: &str) -> Result<&LocalAuthority, LookupError> {
        self.local_authorities
            .iter()
            .find(|la| la.name == name)
            .ok_or_else(|| LookupError::UnknownLocalAuthority(name.to_string()))
    }

    /// Looks a site up by its code.
    pub fn site(&self, code: &str) -> Result<&Site, LookupError> {
        self.sites
            .iter()
            .find(|s| s.code == code)
            .ok_or_else(|| LookupError::UnknownSite(code.to_string()))
    }

    /// Looks a site up by display name. Names are not guaranteed unique; the
    /// first match wins.
    pub fn site_named(&self, name: &str) -> Result<&Site, LookupError> {
        self.sites
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| LookupError::UnknownSite(name.to_string()))
    }

    /// Readings whose local-authority name matches no known local authority.
    pub fn unassigned_readings(&self) -> Vec<&Reading> {
        let known: HashSet<&str> = self
            .local_authorities
            .iter()
            .map(|la| la.name.as_str())
            .collect();
        self.readings
            .iter()
            .filter(|r| !known.contains(r.local_authority_name.as_str()))
            .collect()
    }

    /// Sites whose `local_auth_id` matches no local-authority code. These never
    /// show up in a local authority's site list.
    pub fn unassigned_sites(&self) -> Vec<&Site> {
        let codes: HashSet<&str> = self
            .local_authorities
            .iter()
            .map(|la| la.code.as_str())
            .collect();
        self.sites
            .iter()
            .filter(|s| !codes.contains(s.local_auth_id.as_str()))
            .collect()
    }

    /// The reading joined to a site by exact site name.
    pub fn reading_for(&self, site: &Site) -> Option<&Reading> {
        self.readings.iter().find(|r| r.site_name == site.name)
    }
}

fn parse_collection<T>(collection: &'static str, text: Option<&str>) -> Result<T, SnapshotError>
where
    T: DeserializeOwned + Default,
{
    match text {
        Some(text) => serde_json::from_str(text)
            .map_err(|source| SnapshotError::JsonParse { collection, source }),
        None => Ok(T::default()),
    }
}

fn ensure_unique<'a>(
    keys: impl Iterator<Item = &'a str>,
    duplicate: fn(String) -> SnapshotError,
) -> Result<(), SnapshotError> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(duplicate(key.to_string()));
        }
    }
    Ok(())
}
