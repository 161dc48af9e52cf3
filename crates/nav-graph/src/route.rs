//! Room-level routing and per-floor grouping of the result.
//!
//! # Multi-door rooms
//!
//! A room may have several access nodes.  [`IndoorGraph::find_path_to_room`]
//! runs one weighted Dijkstra search per access node and keeps the candidate
//! with the **fewest nodes**, not the lowest cost.  Each candidate is itself
//! weight-optimal; only the comparison between candidates counts hops.  On
//! equal hop counts the access node listed first wins.

use nav_core::{Entrance, GraphNode, NodeId};

use crate::{IndoorGraph, Path};

// ── RoomRoute ─────────────────────────────────────────────────────────────────

/// A resolved route from an entrance to a room.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoomRoute {
    /// From the entrance's node to the chosen room node, inclusive.
    pub path: Vec<GraphNode>,
    pub entrance: Entrance,
    /// Weighted cost of `path`.
    pub cost: f64,
}

impl RoomRoute {
    /// Group `path` by floor.  See [`segment_by_floor`].
    pub fn floor_segments(&self, connector_kinds: &[u32]) -> Vec<FloorSegment> {
        segment_by_floor(&self.path, connector_kinds)
    }
}

impl IndoorGraph {
    /// Shortest route from an entrance to room `room_num`.
    ///
    /// `from_entrance` is typically the result of
    /// [`find_nearest_entrance`](Self::find_nearest_entrance); when `None` the
    /// building's first entrance is used.
    ///
    /// Returns `None` if the room has no nodes, the building has no entrance,
    /// or no access node is reachable from the entrance.
    pub fn find_path_to_room(
        &self,
        room_num: u32,
        from_entrance: Option<&Entrance>,
    ) -> Option<RoomRoute> {
        let targets = self.find_nodes_by_room(room_num);
        if targets.is_empty() {
            return None;
        }

        let entrance = from_entrance.or_else(|| self.entrances.first())?;

        let best = targets
            .iter()
            .filter_map(|t| self.shortest_path(entrance.node, t.id))
            .fold(None, |best: Option<Path>, p| match best {
                Some(b) if b.hops() <= p.hops() => Some(b),
                _ => Some(p),
            })?;

        let path = best
            .nodes
            .iter()
            .filter_map(|&id| self.node(id).cloned())
            .collect();

        Some(RoomRoute { path, entrance: entrance.clone(), cost: best.cost })
    }
}

// ── Floor segments ────────────────────────────────────────────────────────────

/// Direction of travel between two consecutive floor segments.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Transition {
    Ascend,
    Descend,
    /// One side of the boundary has a null floor.
    Unknown,
}

/// How a segment is left for the next one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FloorChange {
    pub direction: Transition,
    pub to_floor: Option<i32>,
    /// The stair/elevator node at the boundary, if either side of it is one.
    pub connector: Option<NodeId>,
}

/// A maximal run of consecutive path nodes on one floor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FloorSegment {
    pub floor: Option<i32>,
    pub nodes: Vec<GraphNode>,
    /// `None` on the last segment.
    pub exit: Option<FloorChange>,
}

/// Split `path` into same-floor runs and label each boundary.
///
/// A floor revisited later in the path starts a new segment.  The boundary
/// connector is the last node of the outgoing run if it is a connector,
/// otherwise the first node of the incoming run if that is one.
pub fn segment_by_floor(path: &[GraphNode], connector_kinds: &[u32]) -> Vec<FloorSegment> {
    let mut segments: Vec<FloorSegment> = Vec::new();

    for node in path {
        if let Some(seg) = segments.last_mut() {
            if seg.floor == node.floor {
                seg.nodes.push(node.clone());
                continue;
            }
            let connector = seg
                .nodes
                .last()
                .filter(|n| n.is_connector(connector_kinds))
                .or(Some(node).filter(|n| n.is_connector(connector_kinds)))
                .map(|n| n.id);
            let direction = match (seg.floor, node.floor) {
                (Some(a), Some(b)) if b > a => Transition::Ascend,
                (Some(_), Some(_)) => Transition::Descend,
                _ => Transition::Unknown,
            };
            seg.exit = Some(FloorChange { direction, to_floor: node.floor, connector });
        }
        segments.push(FloorSegment {
            floor: node.floor,
            nodes: vec![node.clone()],
            exit: None,
        });
    }

    segments
}
