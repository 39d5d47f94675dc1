use crate::api::error::TimeSeriesError;
use crate::query::error::LookupError;
use crate::snapshot::error::SnapshotError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LondonAirError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error(transparent)]
    TimeSeries(#[from] TimeSeriesError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration JSON")]
    JsonParse(#[from] serde_json::Error),
}
