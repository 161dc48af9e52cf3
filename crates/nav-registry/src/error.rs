//! Registry error type.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading building data.
///
/// None of these abort [`GraphRegistry::initialize`]: a failing building is
/// logged and left out of the cache.  They surface directly only from
/// configuration and directory loading.
///
/// [`GraphRegistry::initialize`]: crate::GraphRegistry::initialize
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path:   PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path:   PathBuf,
        source: serde_json::Error,
    },

    #[error("malformed records for {building}: {reason}")]
    Malformed {
        building: String,
        reason:   String,
    },

    #[error("no routing records available for {0}")]
    MissingRoutingData(String),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
