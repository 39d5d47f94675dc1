use crate::api::error::TimeSeriesError;
use crate::api::response::{parse_site_data, parse_species};
use crate::types::pollutant::PollutantInfo;
use crate::types::time_series::SiteTimeSeries;
use chrono::{Days, NaiveDate};
use log::{debug, info, warn};
use reqwest::Client;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

pub const DEFAULT_API_ROOT: &str = "https://api.erg.kcl.ac.uk/AirQuality/";
const SPECIES_PATH: &str = "Information/Species/Json";

/// Formats a date the way the site data endpoint expects it, e.g. `15Mar2024`.
pub fn api_date(date: NaiveDate) -> String {
    date.format("%d%b%Y").to_string()
}

/// The one-day site data URL: `date` 00:00 up to the following day 00:00.
pub fn site_data_url(api_root: &str, site_code: &str, date: NaiveDate) -> String {
    let end = date.checked_add_days(Days::new(1)).unwrap_or(date);
    format!(
        "{}Data/Site/SiteCode={}/StartDate={}/EndDate={}/Json",
        api_root,
        site_code,
        api_date(date),
        api_date(end)
    )
}

/// The most recent `fetch_latest` call and how many have been issued.
#[derive(Default)]
struct InFlight {
    generation: u64,
    token: Option<CancellationToken>,
}

/// Fetches one site's hourly readings for one day.
///
/// [`TimeSeriesFetcher::fetch`] is a plain single-shot request. UI code should use
/// [`TimeSeriesFetcher::fetch_latest`], which supersedes any earlier request that
/// is still in flight.
pub struct TimeSeriesFetcher {
    api_root: String,
    client: Client,
    in_flight: Mutex<InFlight>,
}

impl TimeSeriesFetcher {
    /// Creates a fetcher for `api_root`. A missing trailing slash is added.
    pub fn new(api_root: impl Into<String>) -> Self {
        let mut api_root = api_root.into();
        if !api_root.ends_with('/') {
            api_root.push('/');
        }
        Self {
            api_root,
            client: Client::new(),
            in_flight: Mutex::new(InFlight::default()),
        }
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Issues one GET with no retry.
    pub async fn fetch(
        &self,
        site_code: &str,
        date: NaiveDate,
    ) -> Result<SiteTimeSeries, TimeSeriesError> {
        let url = site_data_url(&self.api_root, site_code, date);
        info!("Requesting site data from {}", url);
        let body = self.get_text(url).await?;
        parse_site_data(site_code, &body)
    }

    /// Fetches the API's pollutant descriptions, for pages that do not embed them.
    pub async fn fetch_species(&self) -> Result<Vec<PollutantInfo>, TimeSeriesError> {
        let url = format!("{}{}", self.api_root, SPECIES_PATH);
        info!("Requesting species information from {}", url);
        let body = self.get_text(url).await?;
        parse_species(&body)
    }

    async fn get_text(&self, url: String) -> Result<String, TimeSeriesError> {
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| TimeSeriesError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                return Err(if let Some(status) = e.status() {
                    TimeSeriesError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    TimeSeriesError::NetworkRequest(url, e)
                });
            }
        };

        response
            .text()
            .await
            .map_err(|e| TimeSeriesError::ResponseBody(url, e))
    }

    /// Fetches like [`TimeSeriesFetcher::fetch`], first cancelling any earlier
    /// `fetch_latest` still in flight so its result can never overwrite this one.
    ///
    /// Failures are logged and reported as `None`; a superseded request also
    /// returns `None`.
    pub async fn fetch_latest(&self, site_code: &str, date: NaiveDate) -> Option<SiteTimeSeries> {
        let token = CancellationToken::new();
        let generation = {
            let mut in_flight = self.in_flight.lock().await;
            in_flight.generation += 1;
            if let Some(previous) = in_flight.token.replace(token.clone()) {
                debug!("Cancelling in-flight site data request");
                previous.cancel();
            }
            in_flight.generation
        };

        let result = tokio::select! {
            biased;
            _ = token.cancelled() => Err(TimeSeriesError::Cancelled(site_code.to_string())),
            result = self.fetch(site_code, date) => result,
        };

        {
            let mut in_flight = self.in_flight.lock().await;
            if in_flight.generation == generation {
                in_flight.token = None;
            }
        }

        match result {
            Ok(_) if token.is_cancelled() => {
                info!("Discarding superseded site data for {}", site_code);
                None
            }
            Ok(series) => Some(series),
            Err(e @ TimeSeriesError::Cancelled(_)) => {
                info!("{}", e);
                None
            }
            Err(e) => {
                warn!("Site data request for {} failed: {}", site_code, e);
                None
            }
        }
    }
}
