use thiserror::Error;

/// Failure taxonomy shared by every data producer, proxied or
/// fixture-backed. Variants are caught at the boundary and replaced with
/// a fixed localized message; the detail carried here goes to the logs
/// only and is never placed in a response body.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Network-level failure reaching the upstream service.
    #[error("upstream unreachable: {0}")]
    Unreachable(String),

    /// Upstream answered with a non-success HTTP status.
    #[error("upstream rejected request: status {0}")]
    Rejected(u16),

    /// Upstream answered 2xx but the body was not parseable JSON.
    #[error("malformed upstream payload: {0}")]
    MalformedPayload(String),

    /// Embedded sample data could not be produced.
    #[error("local data unavailable: {0}")]
    LocalData(String),
}
