//! Deep merging of configuration mappings.

mod engine;
mod error;

pub use engine::{merge, merge_copy, MergeOptions};
pub use error::MergeError;
