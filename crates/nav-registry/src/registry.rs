//! The per-building graph cache.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, error, info, warn};

use nav_graph::IndoorGraph;

use crate::config::RegistryConfig;
use crate::directory::{Building, BuildingDirectory, RoutingDataPaths};
use crate::source::RecordSource;
use crate::RegistryResult;

/// Size summary of one cached graph.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphStats {
    pub node_count:     usize,
    /// Undirected edges (half the summed adjacency length).
    pub edge_count:     usize,
    pub entrance_count: usize,
}

/// Owns one [`IndoorGraph`] per routable building.
///
/// Built once at startup with [`initialize`](Self::initialize), then queried
/// for the life of the process.  All queries take `&self`; share it behind an
/// `Arc` if several threads need it.
#[derive(Debug, Default)]
pub struct GraphRegistry {
    graphs:          HashMap<String, IndoorGraph>,
    connector_kinds: Vec<u32>,
}

impl GraphRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty registry that will report `connector_kinds` to callers
    /// grouping routes by floor.
    pub fn with_connector_kinds(connector_kinds: Vec<u32>) -> Self {
        Self { graphs: HashMap::new(), connector_kinds }
    }

    /// Load the directory named by `config` and initialise from its files.
    ///
    /// Fails only if the building list or manifest cannot be read; individual
    /// building failures are logged and skipped as in
    /// [`initialize`](Self::initialize).
    pub fn from_config(config: &RegistryConfig) -> RegistryResult<Self> {
        let directory = config.directory()?;
        let mut registry = Self::with_connector_kinds(config.connector_kinds.clone());
        registry.initialize(&directory, &config.source());
        Ok(registry)
    }

    /// Build a graph for every building in `directory` that has routing data.
    ///
    /// A building whose records fail to load or validate is logged and left
    /// out.  Calling this again rebuilds the whole cache: a building that
    /// now fails, has lost its routing data, or has left the directory is no
    /// longer served.
    ///
    /// Returns the number of graphs built by this call.
    pub fn initialize<D, S>(&mut self, directory: &D, source: &S) -> usize
    where
        D: BuildingDirectory + ?Sized,
        S: RecordSource + ?Sized,
    {
        let mut graphs = HashMap::with_capacity(directory.buildings().len());

        for building in directory.buildings() {
            let Some(paths) = directory.routing_data(&building.id) else {
                debug!(building = %building.id, "no routing data; skipping");
                continue;
            };

            match load_graph(building, &paths, source) {
                Ok(graph) => {
                    info!(
                        building  = %building.id,
                        name      = %building.name,
                        nodes     = graph.node_count(),
                        edges     = graph.edge_count(),
                        entrances = graph.entrance_count(),
                        "initialized indoor graph"
                    );
                    graphs.insert(building.id.clone(), graph);
                }
                Err(e) => {
                    error!(building = %building.id, error = %e, "failed to initialize indoor graph; skipping");
                }
            }
        }

        let dropped = self.graphs.keys().filter(|id| !graphs.contains_key(*id)).count();
        if dropped > 0 {
            debug!(count = dropped, "dropped graphs no longer available");
        }

        self.graphs = graphs;
        info!(buildings = self.graphs.len(), "graph registry initialized");
        self.graphs.len()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn get_graph(&self, building_id: &str) -> Option<&IndoorGraph> {
        self.graphs.get(building_id)
    }

    pub fn has_graph(&self, building_id: &str) -> bool {
        self.graphs.contains_key(building_id)
    }

    /// Ids of every cached building, sorted.
    pub fn available_graphs(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.graphs.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn graph_stats(&self) -> BTreeMap<String, GraphStats> {
        self.graphs
            .iter()
            .map(|(id, g)| {
                (
                    id.clone(),
                    GraphStats {
                        node_count:     g.node_count(),
                        edge_count:     g.edge_count(),
                        entrance_count: g.entrance_count(),
                    },
                )
            })
            .collect()
    }

    /// Node `type` codes treated as stair/elevator landings.
    pub fn connector_kinds(&self) -> &[u32] {
        &self.connector_kinds
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }
}

/// Load, validate, and build one building's graph.
fn load_graph<S: RecordSource + ?Sized>(
    building: &Building,
    paths:    &RoutingDataPaths,
    source:   &S,
) -> RegistryResult<IndoorGraph> {
    let records = source.load(building, paths)?;
    let warnings = records.validate(&building.id)?;

    if warnings.dangling_edges > 0 {
        warn!(
            building = %building.id,
            count    = warnings.dangling_edges,
            "edges reference unknown nodes; dropped"
        );
    }
    if warnings.orphan_entrances > 0 {
        warn!(
            building = %building.id,
            count    = warnings.orphan_entrances,
            "entrances reference unknown nodes; routes from them will fail"
        );
    }

    Ok(IndoorGraph::build(records.nodes, &records.edges, records.entrances))
}
