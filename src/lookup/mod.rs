//! Directory-name lookups with timeout fallback.

mod fallback;
mod service;

pub use fallback::{lookup_names, DEFAULT_TIMEOUT};
pub use service::{DirectoryService, LookupError};
