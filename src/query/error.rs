use thiserror::Error;

/// A lookup key had no match in the reference data. Callers recover by
/// choosing a safe default (e.g. an empty table or the default pollutant).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Unknown pollutant '{0}'")]
    UnknownPollutant(String),

    #[error("Unknown local authority '{0}'")]
    UnknownLocalAuthority(String),

    #[error("No boundary found for local authority '{0}'")]
    UnknownBoundary(String),

    #[error("Unknown site '{0}'")]
    UnknownSite(String),

    #[error("No element id configured for '{0}'")]
    UnknownElement(String),
}
