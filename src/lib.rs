mod api;
mod config;
mod error;
mod londonair;
mod query;
mod sites;
mod snapshot;
mod types;

pub use config::{Config, DEFAULT_POLLUTANT};
pub use error::{ConfigError, LondonAirError};
pub use londonair::*;
pub use snapshot::{PageData, Snapshot};

pub use types::geo::*;
pub use types::pollutant::{Pollutant, PollutantInfo};
pub use types::reading::Reading;
pub use types::site::{LocalAuthority, Site};
pub use types::time_series::{Measurement, SiteTimeSeries, TimeSeries, HOUR_LABELS};

pub use query::chart::{bar_chart, ChartData, Dataset};
pub use query::heatmap::{emission_levels, pollutant_info, HeatPoint, HeatmapData, HEATMAP_MAX};
pub use query::local_authority::{boundary_for, bounding_box, sites_in};
pub use query::site_table::{
    site_row, site_table, Cell, InactiveSite, Severity, SiteRow, SiteTable, MISSING_VALUE,
};

pub use api::fetcher::{api_date, site_data_url, TimeSeriesFetcher, DEFAULT_API_ROOT};
pub use api::response::{parse_site_data, parse_species};
pub use sites::locate_site::SiteLocator;

pub use api::error::TimeSeriesError;
pub use query::error::LookupError;
pub use snapshot::error::SnapshotError;
