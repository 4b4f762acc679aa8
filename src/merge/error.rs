use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MergeError {
    #[error("{argument} argument must be a mapping")]
    NotAMapping { argument: &'static str },
}
