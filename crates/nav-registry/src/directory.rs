//! Building directory: which buildings exist and which have routing data.
//!
//! # Files
//!
//! `buildings.json` lists every campus building:
//!
//! ```json
//! [{ "id": "ucsb-library", "name": "Library", "abbr": ["LIB"],
//!    "location": { "lat": 34.4139, "lng": -119.8455 }, "color": "#0a4" }]
//! ```
//!
//! The floorplan manifest carries per-building floor images and, when the
//! building is routable, the paths of its three record files:
//!
//! ```json
//! { "ucsb-library": {
//!     "graphNodes": "ucsb-library/nodes.json",
//!     "graphEdges": "ucsb-library/edges.json",
//!     "entrances":  "ucsb-library/entrances.json",
//!     "floors": { "1": { "path": "/floorplans/ucsb-library/1.png", "w": 1369, "h": 1560 } } } }
//! ```
//!
//! A building has routing data only when **all three** paths are present.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use nav_core::GeoPoint;

use crate::RegistryResult;
use crate::source::read_json;

// ── Building ──────────────────────────────────────────────────────────────────

/// Outdoor latitude/longitude as written in `buildings.json`.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A campus building descriptor.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Building {
    pub id:       String,
    pub name:     String,
    #[serde(default)]
    pub abbr:     Vec<String>,
    pub location: LatLng,
}

impl Building {
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.location.lat, self.location.lng)
    }
}

/// Relative paths of a building's three record files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutingDataPaths {
    pub nodes:     PathBuf,
    pub edges:     PathBuf,
    pub entrances: PathBuf,
}

// ── BuildingDirectory ─────────────────────────────────────────────────────────

/// The registry's view of the campus building list.
pub trait BuildingDirectory {
    /// Every known building.
    fn buildings(&self) -> &[Building];

    /// Record file paths for `building_id`, or `None` if it is not routable.
    fn routing_data(&self, building_id: &str) -> Option<RoutingDataPaths>;
}

// ── ManifestDirectory ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct FloorImage {
    pub path: String,
    pub w:    u32,
    pub h:    u32,
}

/// One building's entry in the floorplan manifest.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub graph_nodes: Option<String>,
    pub graph_edges: Option<String>,
    pub entrances:   Option<String>,
    #[serde(default)]
    pub floors:      BTreeMap<String, FloorImage>,
}

/// [`BuildingDirectory`] backed by `buildings.json` plus the floorplan
/// manifest.
#[derive(Clone, Debug, Default)]
pub struct ManifestDirectory {
    buildings: Vec<Building>,
    manifest:  BTreeMap<String, ManifestEntry>,
}

impl ManifestDirectory {
    pub fn new(buildings: Vec<Building>, manifest: BTreeMap<String, ManifestEntry>) -> Self {
        Self { buildings, manifest }
    }

    /// Load both files.  Either one failing to read or parse is an error.
    pub fn from_files(buildings: &Path, manifest: &Path) -> RegistryResult<Self> {
        Ok(Self {
            buildings: read_json(buildings)?,
            manifest:  read_json(manifest)?,
        })
    }

    pub fn building(&self, id: &str) -> Option<&Building> {
        self.buildings.iter().find(|b| b.id == id)
    }

    /// Floor keys with a floorplan image, numeric keys in numeric order and
    /// any others after them alphabetically.
    pub fn available_floors(&self, building_id: &str) -> Vec<String> {
        let Some(entry) = self.manifest.get(building_id) else {
            return Vec::new();
        };
        let mut floors: Vec<String> = entry.floors.keys().cloned().collect();
        floors.sort_by(|a, b| match (a.parse::<i32>(), b.parse::<i32>()) {
            (Ok(x), Ok(y)) => x.cmp(&y),
            (Ok(_), Err(_)) => std::cmp::Ordering::Less,
            (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
            (Err(_), Err(_)) => a.cmp(b),
        });
        floors
    }
}

impl BuildingDirectory for ManifestDirectory {
    fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    fn routing_data(&self, building_id: &str) -> Option<RoutingDataPaths> {
        let entry = self.manifest.get(building_id)?;
        Some(RoutingDataPaths {
            nodes:     entry.graph_nodes.as_ref()?.into(),
            edges:     entry.graph_edges.as_ref()?.into(),
            entrances: entry.entrances.as_ref()?.into(),
        })
    }
}
