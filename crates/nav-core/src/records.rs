//! Indoor graph records as produced by the offline data-preparation step.
//!
//! One building ships three JSON arrays (nodes, edges, entrances) whose
//! shapes are mirrored here field for field.  Optional fields may be either
//! absent or `null` in the source files.
//!
//! ```json
//! { "id": 12, "type": 1, "room_num": 2312, "floor": 2,
//!   "connector_id": null, "name": null, "x": 640.5, "y": -812.0 }
//! { "id": 40, "from_id": 12, "to_id": 13, "weight": 14.2, "floor": 2 }
//! { "id": 1, "name": "Main Entrance", "lat": 34.4139, "lng": -119.8455, "node": 3 }
//! ```

use crate::{EdgeId, EntranceId, GeoPoint, NodeId};

// ── GraphNode ─────────────────────────────────────────────────────────────────

/// A waypoint in a building's indoor walking graph.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphNode {
    pub id: NodeId,

    /// Building-defined waypoint kind (corridor point, room door, stair
    /// landing…).  Opaque to routing; only consulted by
    /// [`is_connector`](Self::is_connector).
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub kind: Option<u32>,

    /// Set on room access points.  Several nodes may share one room number
    /// (one per door).
    #[cfg_attr(feature = "serde", serde(default))]
    pub room_num: Option<u32>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub floor: Option<i32>,

    /// Paired node on the adjacent floor for stairs/elevators.  Informational:
    /// the floor change itself is an ordinary weighted edge.
    #[cfg_attr(feature = "serde", serde(default))]
    pub connector_id: Option<NodeId>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,

    /// Floorplan-local coordinates (pixels of that floor's image).
    pub x: f64,
    pub y: f64,
}

impl GraphNode {
    /// Plain corridor waypoint with no room, kind, or connector.
    pub fn waypoint(id: NodeId, floor: i32, x: f64, y: f64) -> Self {
        Self {
            id,
            kind: None,
            room_num: None,
            floor: Some(floor),
            connector_id: None,
            name: None,
            x,
            y,
        }
    }

    /// `true` if this node is a floor-transition point (stair or elevator
    /// landing).
    ///
    /// A node qualifies when it is paired with a node on another floor, or
    /// when its `kind` is one of `connector_kinds`, the set of type codes the
    /// building data uses for landings.
    pub fn is_connector(&self, connector_kinds: &[u32]) -> bool {
        self.connector_id.is_some()
            || self.kind.is_some_and(|k| connector_kinds.contains(&k))
    }
}

// ── GraphEdge ─────────────────────────────────────────────────────────────────

/// An undirected, weighted connection between two waypoints.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphEdge {
    pub id: EdgeId,
    pub from_id: NodeId,
    pub to_id: NodeId,
    /// Non-negative traversal cost, used directly by Dijkstra.
    pub weight: f64,
    /// Informational; stair segments may leave it null.
    #[cfg_attr(feature = "serde", serde(default))]
    pub floor: Option<i32>,
}

impl GraphEdge {
    pub fn new(id: EdgeId, from_id: NodeId, to_id: NodeId, weight: f64) -> Self {
        Self { id, from_id, to_id, weight, floor: None }
    }
}

// ── Entrance ──────────────────────────────────────────────────────────────────

/// A building door anchored to outdoor GPS coordinates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entrance {
    pub id: EntranceId,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// Indoor node this door opens onto; every route through it starts here.
    pub node: NodeId,
}

impl Entrance {
    #[inline]
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}
