//! Registry configuration.
//!
//! Typically loaded from a small JSON file by the host application:
//!
//! ```json
//! { "data_dir": "src/data", "connector_kinds": [2, 3] }
//! ```
//!
//! Every field has a default, so `{}` is a valid config.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::directory::ManifestDirectory;
use crate::source::{JsonFileSource, read_json};
use crate::RegistryResult;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Root for the building list, the manifest, and every record path.
    pub data_dir: PathBuf,

    /// Building list, relative to `data_dir`.
    pub buildings_file: PathBuf,

    /// Floorplan manifest, relative to `data_dir`.
    pub manifest_file: PathBuf,

    /// Node `type` codes that mark stair/elevator landings in this campus's
    /// data.  Nodes with a `connector_id` count as connectors regardless.
    pub connector_kinds: Vec<u32>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            data_dir:        PathBuf::from("data"),
            buildings_file:  PathBuf::from("buildings.json"),
            manifest_file:   PathBuf::from("floorplans.manifest.json"),
            connector_kinds: Vec::new(),
        }
    }
}

impl RegistryConfig {
    pub fn from_json_file(path: &Path) -> RegistryResult<Self> {
        read_json(path)
    }

    /// Config rooted at `data_dir` with every other field defaulted.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into(), ..Self::default() }
    }

    /// Load the building directory this config points at.
    pub fn directory(&self) -> RegistryResult<ManifestDirectory> {
        ManifestDirectory::from_files(
            &self.data_dir.join(&self.buildings_file),
            &self.data_dir.join(&self.manifest_file),
        )
    }

    /// A record source reading from `data_dir`.
    pub fn source(&self) -> JsonFileSource {
        JsonFileSource::new(&self.data_dir)
    }
}
