//! `nav-registry` — builds and caches one indoor graph per building.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`directory`] | `Building`, `BuildingDirectory` trait, `ManifestDirectory`|
//! | [`source`]    | `RecordSource` trait, `JsonFileSource`, `InMemorySource`  |
//! | [`config`]    | `RegistryConfig` (JSON, all fields defaulted)             |
//! | [`registry`]  | `GraphRegistry`, `GraphStats`                             |
//! | [`error`]     | `RegistryError`, `RegistryResult<T>`                      |
//!
//! # Lifecycle
//!
//! ```text
//! startup:  directory + source ──initialize()──▶ GraphRegistry { id → IndoorGraph }
//! runtime:  get_graph(id) ─▶ find_nearest_entrance / find_path_to_room
//! ```
//!
//! Initialisation is the only I/O.  A building that fails to load is logged
//! via `tracing` and skipped; the rest still initialise.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use nav_registry::{GraphRegistry, RegistryConfig};
//!
//! let config = RegistryConfig::with_data_dir("src/data");
//! let registry = GraphRegistry::from_config(&config)?;
//! let graph = registry.get_graph("ucsb-library").unwrap();
//! let route = graph.find_path_to_room(2312, None);
//! ```

pub mod config;
pub mod directory;
pub mod error;
pub mod registry;
pub mod source;


pub use config::RegistryConfig;
pub use directory::{
    Building, BuildingDirectory, FloorImage, LatLng, ManifestDirectory, ManifestEntry, RoutingDataPaths,
};
pub use error::{RegistryError, RegistryResult};
pub use registry::{GraphRegistry, GraphStats};
pub use source::{BuildingRecords, InMemorySource, JsonFileSource, RecordSource, RecordWarnings};
