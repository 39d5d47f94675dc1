use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimeSeriesError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body from {0}")]
    ResponseBody(String, #[source] reqwest::Error),

    #[error("Failed to parse LondonAir API JSON")]
    JsonParse(#[from] serde_json::Error),

    #[error("Request for site '{0}' was superseded by a newer request")]
    Cancelled(String),
}
