use thiserror::Error;

use crate::embed::EmbedError;
use crate::lookup::LookupError;
use crate::merge::MergeError;

/// Top-level error type for the pillar-utils library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("merge error: {0}")]
    Merge(#[from] MergeError),

    #[error("embed error: {0}")]
    Embed(#[from] EmbedError),

    #[error("lookup error: {0}")]
    Lookup(#[from] LookupError),
}
