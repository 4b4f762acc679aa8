//! Helper functions for configuration data, consumed as plugin modules by a
//! configuration-management host.
//!
//! Four independent, stateless operations:
//!
//! - [`merge()`] — recursive mapping merge with optional list concatenation
//!   and null-pruning.
//! - [`merge_copy()`] — the same merge over clones, leaving the caller's
//!   values untouched.
//! - [`FileLoader`] / [`load_base64()`] — read a file and return its content
//!   base64-encoded, for embedding raw files in configuration data.
//! - [`lookup_names()`] — query a primary [`DirectoryService`], falling back
//!   to a secondary one on timeout.
//!
//! The crate emits [`tracing`] events for swallowed failures but never
//! installs a subscriber; initialize logging once in the host process.

pub mod embed;
mod error;
pub mod lookup;
pub mod merge;

pub use embed::{load_base64, EmbedError, FileLoader, DEFAULT_DATA_DIR};
pub use error::Error;
pub use lookup::{lookup_names, DirectoryService, LookupError, DEFAULT_TIMEOUT};
pub use merge::{merge, merge_copy, MergeError, MergeOptions};
