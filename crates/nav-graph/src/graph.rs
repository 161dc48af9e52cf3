//! Indoor waypoint graph and its one-shot construction.
//!
//! # Data layout
//!
//! Record ids are sparse, so every node also gets a **dense index** `0..n`
//! (its position in `nodes`).  `index` maps `NodeId → dense`.
//!
//! Adjacency is stored in **Compressed Sparse Row (CSR)** format.  Given a
//! dense index `i`, its neighbours occupy:
//!
//! ```text
//! adj[ adj_start[i] .. adj_start[i+1] ]
//! adj_to[ adj_start[i] .. adj_start[i+1] ]   // same slots, dense target
//! ```
//!
//! Each undirected edge contributes two half-edges, one per endpoint, with
//! identical weight.  Within a node's slice, half-edges keep edge-record
//! order.

use rustc_hash::FxHashMap;

use nav_core::{Entrance, GraphEdge, GraphNode, NodeId};

use crate::spatial::FloorIndex;

// ── Neighbor ──────────────────────────────────────────────────────────────────

/// One adjacency entry: a node reachable in a single hop.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Neighbor {
    pub node: NodeId,
    pub weight: f64,
    /// Copied from the edge record; informational only.
    pub floor: Option<i32>,
}

// ── IndoorGraph ───────────────────────────────────────────────────────────────

/// One building's walkable space: waypoints, undirected weighted edges, and
/// the outdoor entrances that lead into it.
///
/// Immutable after [`build`](Self::build).  Every query takes `&self`, so a
/// graph can be shared across threads freely.
pub struct IndoorGraph {
    // ── Node data ─────────────────────────────────────────────────────────
    /// Node records in first-seen order.  Position = dense index.
    pub(crate) nodes: Vec<GraphNode>,
    pub(crate) index: FxHashMap<NodeId, u32>,

    // ── CSR adjacency ─────────────────────────────────────────────────────
    /// Row pointer.  Length = `node_count + 1`.
    pub(crate) adj_start: Vec<u32>,
    pub(crate) adj: Vec<Neighbor>,
    /// Dense index of each `adj[k].node`, kept alongside for the search loop.
    pub(crate) adj_to: Vec<u32>,

    // ── Entrances & indices ───────────────────────────────────────────────
    pub(crate) entrances: Vec<Entrance>,
    pub(crate) floor_idx: FloorIndex,

    dangling_edges: usize,
}

/// Half of an undirected edge, pre-CSR.
struct HalfEdge {
    from: u32,
    to: u32,
    neighbor: Neighbor,
}

impl IndoorGraph {
    /// Construct a graph from fully materialised records.
    ///
    /// - A repeated node id replaces the earlier record in place.
    /// - Every edge is inserted in both directions with the same weight.
    /// - An edge naming a node that is not in `nodes` is dropped whole and
    ///   counted in [`dangling_edges`](Self::dangling_edges).
    /// - Weights are taken as given; negative weights are not detected.
    ///
    /// Entrances are kept in the order supplied.
    ///
    /// Time complexity: O(N + E log E) for the stable edge sort plus
    /// O(N log N) for the per-floor R-tree bulk load.
    pub fn build(nodes: Vec<GraphNode>, edges: &[GraphEdge], entrances: Vec<Entrance>) -> Self {
        // ── Nodes and dense index ─────────────────────────────────────────
        let mut index: FxHashMap<NodeId, u32> =
            FxHashMap::with_capacity_and_hasher(nodes.len(), Default::default());
        let mut stored: Vec<GraphNode> = Vec::with_capacity(nodes.len());

        for node in nodes {
            match index.get(&node.id) {
                Some(&i) => stored[i as usize] = node,
                None => {
                    index.insert(node.id, stored.len() as u32);
                    stored.push(node);
                }
            }
        }
        let node_count = stored.len();

        // ── Half-edges, skipping dangling records ─────────────────────────
        let mut half: Vec<HalfEdge> = Vec::with_capacity(edges.len() * 2);
        let mut dangling_edges = 0;

        for e in edges {
            let (Some(&a), Some(&b)) = (index.get(&e.from_id), index.get(&e.to_id)) else {
                dangling_edges += 1;
                continue;
            };
            half.push(HalfEdge {
                from: a,
                to: b,
                neighbor: Neighbor { node: e.to_id, weight: e.weight, floor: e.floor },
            });
            half.push(HalfEdge {
                from: b,
                to: a,
                neighbor: Neighbor { node: e.from_id, weight: e.weight, floor: e.floor },
            });
        }

        // Stable: neighbours of one node stay in edge-record order.
        half.sort_by_key(|h| h.from);

        // ── CSR row pointer ───────────────────────────────────────────────
        let mut adj_start = vec![0u32; node_count + 1];
        for h in &half {
            adj_start[h.from as usize + 1] += 1;
        }
        for i in 1..=node_count {
            adj_start[i] += adj_start[i - 1];
        }
        debug_assert_eq!(adj_start[node_count] as usize, half.len());

        let adj_to: Vec<u32> = half.iter().map(|h| h.to).collect();
        let adj: Vec<Neighbor> = half.into_iter().map(|h| h.neighbor).collect();

        let floor_idx = FloorIndex::build(&stored);

        IndoorGraph {
            nodes: stored,
            index,
            adj_start,
            adj,
            adj_to,
            entrances,
            floor_idx,
            dangling_edges,
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges: half the summed adjacency length.
    pub fn edge_count(&self) -> usize {
        self.adj.len() / 2
    }

    pub fn entrance_count(&self) -> usize {
        self.entrances.len()
    }

    /// Edge records dropped at build time for naming an unknown node.
    pub fn dangling_edges(&self) -> usize {
        self.dangling_edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// Direct lookup by record id.
    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.dense(id).map(|i| &self.nodes[i])
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    /// Every node, in first-seen order.
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Nodes one hop from `id`.  Empty for unknown or isolated nodes.
    pub fn neighbors(&self, id: NodeId) -> &[Neighbor] {
        match self.dense(id) {
            Some(i) => &self.adj[self.adj_range(i)],
            None => &[],
        }
    }

    /// Entrances in the order supplied at build time.
    pub fn entrances(&self) -> &[Entrance] {
        &self.entrances
    }

    /// Every node whose `room_num` is `room_num`, in node order.
    pub fn find_nodes_by_room(&self, room_num: u32) -> Vec<&GraphNode> {
        self.nodes.iter().filter(|n| n.room_num == Some(room_num)).collect()
    }

    /// Every node on `floor`, in node order.
    pub fn find_nodes_by_floor(&self, floor: i32) -> Vec<&GraphNode> {
        self.nodes.iter().filter(|n| n.floor == Some(floor)).collect()
    }

    /// Distinct non-null floors, ascending.
    pub fn floors(&self) -> Vec<i32> {
        let mut floors: Vec<i32> = self.nodes.iter().filter_map(|n| n.floor).collect();
        floors.sort_unstable();
        floors.dedup();
        floors
    }

    /// Distinct room numbers, ascending.
    pub fn rooms(&self) -> Vec<u32> {
        let mut rooms: Vec<u32> = self.nodes.iter().filter_map(|n| n.room_num).collect();
        rooms.sort_unstable();
        rooms.dedup();
        rooms
    }

    // ── Internal helpers ──────────────────────────────────────────────────

    #[inline]
    pub(crate) fn dense(&self, id: NodeId) -> Option<usize> {
        self.index.get(&id).map(|&i| i as usize)
    }

    #[inline]
    pub(crate) fn adj_range(&self, dense: usize) -> std::ops::Range<usize> {
        self.adj_start[dense] as usize..self.adj_start[dense + 1] as usize
    }
}

impl std::fmt::Debug for IndoorGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndoorGraph")
            .field("nodes", &self.node_count())
            .field("edges", &self.edge_count())
            .field("entrances", &self.entrance_count())
            .finish()
    }
}
