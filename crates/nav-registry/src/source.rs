//! Where a building's node/edge/entrance records come from.
//!
//! # JSON layout
//!
//! [`JsonFileSource`] reads three JSON arrays per building, at paths given by
//! the directory relative to a data root:
//!
//! ```text
//! data/
//!   ucsb-library/nodes.json       [{ "id": 1, "type": 0, "floor": 1, "x": …, "y": … }, …]
//!   ucsb-library/edges.json       [{ "id": 1, "from_id": 1, "to_id": 2, "weight": 3.5 }, …]
//!   ucsb-library/entrances.json   [{ "id": 1, "name": "Main Entrance", "lat": …, "lng": …, "node": 1 }]
//! ```
//!
//! Records are deserialised into the strongly typed `nav-core` structs here,
//! at the registry boundary; nothing loosely typed reaches the graph engine.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use nav_core::{Entrance, GraphEdge, GraphNode};

use crate::directory::{Building, RoutingDataPaths};
use crate::{RegistryError, RegistryResult};

// ── BuildingRecords ───────────────────────────────────────────────────────────

/// The full record set for one building, ready for `IndoorGraph::build`.
#[derive(Clone, Debug, Default)]
pub struct BuildingRecords {
    pub nodes:     Vec<GraphNode>,
    pub edges:     Vec<GraphEdge>,
    pub entrances: Vec<Entrance>,
}

/// Soft problems found by [`BuildingRecords::validate`].  Logged, not fatal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordWarnings {
    /// Edges naming a node id not in the node set.
    pub dangling_edges:    usize,
    /// Entrances whose `node` is not in the node set.
    pub orphan_entrances:  usize,
}

impl BuildingRecords {
    /// Check the records before they reach the graph engine.
    ///
    /// Rejects (as [`RegistryError::Malformed`]):
    /// - two nodes with the same id,
    /// - an edge weight that is negative, NaN, or infinite.
    ///
    /// Dangling edges and entrances on unknown nodes are counted and returned;
    /// the engine tolerates both.
    pub fn validate(&self, building: &str) -> RegistryResult<RecordWarnings> {
        let malformed = |reason: String| RegistryError::Malformed {
            building: building.to_owned(),
            reason,
        };

        let mut ids = HashSet::with_capacity(self.nodes.len());
        for n in &self.nodes {
            if !ids.insert(n.id) {
                return Err(malformed(format!("duplicate node id {}", n.id.get())));
            }
        }

        for e in &self.edges {
            if !e.weight.is_finite() || e.weight < 0.0 {
                return Err(malformed(format!(
                    "edge {} has invalid weight {}",
                    e.id.get(),
                    e.weight
                )));
            }
        }

        let dangling_edges = self
            .edges
            .iter()
            .filter(|e| !ids.contains(&e.from_id) || !ids.contains(&e.to_id))
            .count();
        let orphan_entrances = self
            .entrances
            .iter()
            .filter(|e| !ids.contains(&e.node))
            .count();

        Ok(RecordWarnings { dangling_edges, orphan_entrances })
    }
}

// ── RecordSource ──────────────────────────────────────────────────────────────

/// Supplies the raw records for a building the directory says has routing
/// data.
pub trait RecordSource {
    fn load(&self, building: &Building, paths: &RoutingDataPaths) -> RegistryResult<BuildingRecords>;
}

/// Reads the three JSON arrays from disk, relative to `root`.
pub struct JsonFileSource {
    root: PathBuf,
}

impl JsonFileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl RecordSource for JsonFileSource {
    fn load(&self, _building: &Building, paths: &RoutingDataPaths) -> RegistryResult<BuildingRecords> {
        Ok(BuildingRecords {
            nodes:     read_json(&self.root.join(&paths.nodes))?,
            edges:     read_json(&self.root.join(&paths.edges))?,
            entrances: read_json(&self.root.join(&paths.entrances))?,
        })
    }
}

/// Serves records already in memory, keyed by building id.
///
/// Useful for tests and for hosts that bundle building data into the binary.
#[derive(Default)]
pub struct InMemorySource {
    records: HashMap<String, BuildingRecords>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, building_id: impl Into<String>, records: BuildingRecords) {
        self.records.insert(building_id.into(), records);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, building_id: impl Into<String>, records: BuildingRecords) -> Self {
        self.insert(building_id, records);
        self
    }
}

impl RecordSource for InMemorySource {
    fn load(&self, building: &Building, _paths: &RoutingDataPaths) -> RegistryResult<BuildingRecords> {
        self.records
            .get(&building.id)
            .cloned()
            .ok_or_else(|| RegistryError::MissingRoutingData(building.id.clone()))
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Read and deserialise one JSON file, tagging errors with its path.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> RegistryResult<T> {
    let bytes = std::fs::read(path).map_err(|source| RegistryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| RegistryError::Json {
        path: path.to_path_buf(),
        source,
    })
}
