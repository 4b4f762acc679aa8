use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LookupError {
    /// The service did not respond within the allotted time.
    #[error("directory service timed out after {0:?}")]
    Timeout(Duration),

    /// Any other failure reported by the service.
    #[error("directory service request failed: {0}")]
    Service(String),
}

/// A named service that resolves directory names.
///
/// Implementations wrap whatever client the service uses internally; this
/// crate only depends on the call shape. The lookup blocks for up to
/// `timeout` and must report deadline expiry as [`LookupError::Timeout`] so
/// callers can distinguish it from generic failures.
pub trait DirectoryService {
    /// Identifier used when logging failures against this service.
    fn name(&self) -> &str;

    /// Resolves the list of directory names, blocking for up to `timeout`.
    fn lookup(&self, timeout: Duration) -> Result<Vec<String>, LookupError>;
}
