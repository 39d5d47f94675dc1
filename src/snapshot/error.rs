use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to parse embedded {collection} JSON")]
    JsonParse {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Local authority name '{0}' appears more than once")]
    DuplicateLocalAuthorityName(String),

    #[error("Local authority code '{0}' appears more than once")]
    DuplicateLocalAuthorityCode(String),

    #[error("Site code '{0}' appears more than once")]
    DuplicateSiteCode(String),
}
