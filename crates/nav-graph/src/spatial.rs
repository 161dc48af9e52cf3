//! Proximity queries: outdoor (GPS → entrance) and indoor (floorplan pixel →
//! waypoint).
//!
//! # Entrances
//!
//! A building has a handful of entrances, so [`find_nearest_entrance`] is a
//! plain haversine scan.  No index would pay for itself.
//!
//! # Waypoints
//!
//! Floorplan coordinates are planar, one coordinate space per floor.  An
//! R-tree (via `rstar`) per floor maps `(x, y)` to the nearest `NodeId` on
//! that floor.  Nodes with a null floor are not indexed.
//!
//! [`find_nearest_entrance`]: IndoorGraph::find_nearest_entrance

use rstar::{AABB, PointDistance, RTree, RTreeObject};
use rustc_hash::FxHashMap;

use nav_core::{Entrance, GeoPoint, GraphNode, NodeId};

use crate::IndoorGraph;

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in a floor's R-tree: a floorplan `[x, y]` point and its node.
#[derive(Clone)]
struct WaypointEntry {
    point: [f64; 2],
    id: NodeId,
}

impl RTreeObject for WaypointEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for WaypointEntry {
    /// Squared Euclidean distance in floorplan pixels.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── FloorIndex ────────────────────────────────────────────────────────────────

/// One R-tree per floor.
pub(crate) struct FloorIndex(FxHashMap<i32, RTree<WaypointEntry>>);

impl FloorIndex {
    pub(crate) fn build(nodes: &[GraphNode]) -> Self {
        let mut by_floor: FxHashMap<i32, Vec<WaypointEntry>> = FxHashMap::default();
        for n in nodes {
            if let Some(floor) = n.floor {
                by_floor
                    .entry(floor)
                    .or_default()
                    .push(WaypointEntry { point: [n.x, n.y], id: n.id });
            }
        }

        // Bulk-load each tree: O(N log N), faster than N inserts.
        FloorIndex(
            by_floor
                .into_iter()
                .map(|(floor, entries)| (floor, RTree::bulk_load(entries)))
                .collect(),
        )
    }
}

// ── Queries ───────────────────────────────────────────────────────────────────

impl IndoorGraph {
    /// The entrance closest to `(lat, lng)` by haversine distance.
    ///
    /// On an exact tie the entrance supplied first wins.  Returns `None` only
    /// when the building has no entrances.
    pub fn find_nearest_entrance(&self, lat: f64, lng: f64) -> Option<&Entrance> {
        let here = GeoPoint::new(lat, lng);
        let mut best: Option<(&Entrance, f64)> = None;

        for e in &self.entrances {
            let d = here.distance_m(e.position());
            // Strict `<`: a later entrance must be closer, not merely as close.
            if best.is_none_or(|(_, min)| d < min) {
                best = Some((e, d));
            }
        }

        best.map(|(e, _)| e)
    }

    /// The waypoint on `floor` nearest to floorplan point `(x, y)`.
    ///
    /// Returns `None` if no node lies on that floor.
    pub fn snap_to_node(&self, floor: i32, x: f64, y: f64) -> Option<NodeId> {
        self.floor_idx
            .0
            .get(&floor)?
            .nearest_neighbor(&[x, y])
            .map(|e| e.id)
    }

    /// Up to `k` waypoints on `floor`, sorted by ascending distance to `(x, y)`.
    pub fn k_nearest_nodes(&self, floor: i32, x: f64, y: f64, k: usize) -> Vec<NodeId> {
        match self.floor_idx.0.get(&floor) {
            Some(tree) => tree
                .nearest_neighbor_iter(&[x, y])
                .take(k)
                .map(|e| e.id)
                .collect(),
            None => Vec::new(),
        }
    }
}
