//! Embedding raw file content into configuration data as base64.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

/// Directory that relative paths are resolved against by default.
pub const DEFAULT_DATA_DIR: &str = "/etc/salt/data";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EmbedError {
    #[error("failed to read file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Reads files and returns their content base64-encoded, so raw config
/// files can be embedded in configuration data.
///
/// Relative paths are resolved against the loader's base directory;
/// absolute paths are read as-is. The whole file is read into memory in
/// one pass, with no caching or retry.
///
/// ## Example
///
/// ```no_run
/// use pillar_utils::FileLoader;
///
/// let loader = FileLoader::default();
/// let encoded = loader.load_base64("tls/ca.pem")?;
/// # Ok::<(), pillar_utils::EmbedError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileLoader {
    base_dir: PathBuf,
}

impl Default for FileLoader {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

impl FileLoader {
    /// Creates a loader that resolves relative paths under `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Reads the file at `path` and returns its content base64-encoded.
    ///
    /// Fails with [`EmbedError::Read`] if the resolved path cannot be read;
    /// the error carries the resolved path and the underlying I/O error.
    pub fn load_base64(&self, path: impl AsRef<Path>) -> Result<String, EmbedError> {
        let path = path.as_ref();
        let resolved = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        };

        let bytes = std::fs::read(&resolved).map_err(|source| EmbedError::Read {
            path: resolved,
            source,
        })?;

        Ok(STANDARD.encode(bytes))
    }
}

/// Reads a file via a loader rooted at [`DEFAULT_DATA_DIR`].
pub fn load_base64(path: impl AsRef<Path>) -> Result<String, EmbedError> {
    FileLoader::default().load_base64(path)
}
