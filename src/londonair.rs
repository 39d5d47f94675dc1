//! The main entry point: one client over a page's reference data, answering the
//! heatmap, local-authority, site-table and site-history queries a map page makes.

use crate::api::fetcher::TimeSeriesFetcher;
use crate::config::Config;
use crate::error::LondonAirError;
use crate::query::chart::{bar_chart, ChartData};
use crate::query::heatmap::{self, HeatmapData};
use crate::query::local_authority::{boundary_for, sites_in};
use crate::query::site_table::{site_table, SiteTable};
use crate::sites::locate_site::SiteLocator;
use crate::snapshot::Snapshot;
use crate::types::geo::{Feature, LatLon};
use crate::types::pollutant::PollutantInfo;
use crate::types::site::Site;
use crate::types::time_series::SiteTimeSeries;
use bon::bon;
use chrono::NaiveDate;

/// Client over one validated [`Snapshot`].
///
/// Reference-data queries are synchronous and pure. [`LondonAir::site_history`]
/// is the only call that touches the network; a newer call supersedes an older
/// one still in flight.
///
/// # Examples
///
/// ```
/// use londonair::{LondonAir, Snapshot};
///
/// let snapshot = Snapshot::from_json()
///     .readings(r#"[{"SiteName": "Marylebone Road", "LocalAuthorityName": "Westminster",
///                    "Latitude": 51.5225, "Longitude": -0.1546, "NO2": 7.2}]"#)
///     .call()
///     .unwrap();
/// let client = LondonAir::new(snapshot);
///
/// let heatmap = client.heatmap().call();
/// assert_eq!(heatmap.max, 10.0);
/// assert_eq!(heatmap.data.len(), 1);
/// ```
pub struct LondonAir {
    snapshot: Snapshot,
    config: Config,
    fetcher: TimeSeriesFetcher,
    site_locator: SiteLocator,
}

#[bon]
impl LondonAir {
    /// Creates a client with the default [`Config`].
    pub fn new(snapshot: Snapshot) -> Self {
        Self::with_config(snapshot, Config::default())
    }

    pub fn with_config(snapshot: Snapshot, config: Config) -> Self {
        Self {
            site_locator: SiteLocator::new(snapshot.sites()),
            fetcher: TimeSeriesFetcher::new(config.api_root.clone()),
            snapshot,
            config,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Heatmap points for one pollutant key. Without a pollutant the configured
    /// default is used; the scale maximum comes from configuration.
    #[builder]
    pub fn heatmap(&self, pollutant: Option<&str>) -> HeatmapData {
        let pollutant = pollutant.unwrap_or(self.config.default_pollutant.as_str());
        heatmap::emission_levels(self.snapshot.readings(), pollutant)
            .with_max(self.config.heatmap_max)
    }

    /// Description panel for a pollutant, by display name or code.
    #[builder]
    pub fn pollutant_info(&self, pollutant: &str) -> Result<PollutantInfo, LondonAirError> {
        Ok(heatmap::pollutant_info(self.snapshot.pollutants(), pollutant)?.clone())
    }

    #[builder]
    pub fn sites_in(&self, local_authority: &str) -> Result<Vec<Site>, LondonAirError> {
        Ok(sites_in(&self.snapshot, local_authority)?
            .into_iter()
            .cloned()
            .collect())
    }

    /// The boundary feature of a local authority, for outlining and zooming.
    #[builder]
    pub fn boundary(&self, local_authority: &str) -> Result<Feature, LondonAirError> {
        Ok(boundary_for(self.snapshot.boundaries(), local_authority)?.clone())
    }

    #[builder]
    pub fn site_table(&self, local_authority: &str) -> Result<SiteTable, LondonAirError> {
        Ok(site_table(&self.snapshot, local_authority)?)
    }

    /// Fetches one day of hourly readings for a site, by site code.
    ///
    /// `date` defaults to today in local time. Returns `Ok(None)` when the
    /// request failed or was superseded by a later call; the reason is logged.
    ///
    /// # Errors
    ///
    /// Returns [`LondonAirError::Lookup`] if the site code is not in the snapshot.
    #[builder]
    pub async fn site_history(
        &self,
        site: &str,
        date: Option<NaiveDate>,
    ) -> Result<Option<SiteTimeSeries>, LondonAirError> {
        let site = self.snapshot.site(site)?;
        let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
        Ok(self.fetcher.fetch_latest(&site.code, date).await)
    }

    /// Like [`LondonAir::site_history`], shaped as a bar chart. `None` when
    /// nothing was fetched or every series is zero.
    #[builder]
    pub async fn site_chart(
        &self,
        site: &str,
        date: Option<NaiveDate>,
    ) -> Result<Option<ChartData>, LondonAirError> {
        let series = self.site_history().site(site).maybe_date(date).call().await?;
        Ok(series
            .map(|series| bar_chart(&series))
            .filter(|chart| !chart.is_empty()))
    }

    /// Sites closest to `location`, closest first, with distances in kilometres.
    #[builder]
    pub fn nearest_sites(
        &self,
        location: LatLon,
        max_distance_km: Option<f64>,
        site_limit: Option<usize>,
        active_only: Option<bool>,
    ) -> Vec<(Site, f64)> {
        let max_distance_km = max_distance_km.unwrap_or(50.0);
        let site_limit = site_limit.unwrap_or(5);
        let active_only = active_only.unwrap_or(false);

        self.site_locator.query(
            location.0,
            location.1,
            site_limit,
            max_distance_km,
            active_only,
        )
    }
}
