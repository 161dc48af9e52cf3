//! `nav-graph` — one building's indoor waypoint graph and the queries over it.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`graph`]   | `IndoorGraph` (CSR adjacency), `Neighbor`, lookups          |
//! | [`spatial`] | nearest entrance (haversine), per-floor R-tree snapping     |
//! | [`router`]  | Dijkstra: `dijkstra`, `shortest_path`, `path_cost`, `Path`  |
//! | [`route`]   | `find_path_to_room`, `RoomRoute`, floor segmentation        |
//!
//! # Failure model
//!
//! Queries never panic on bad input.  Unknown ids, empty rooms, missing
//! entrances, and unreachable targets all come back as `None` or an empty
//! slice.  The one unchecked precondition is non-negative edge weights.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize` on route results.                        |
//!
//! # Example
//!
//! ```
//! use nav_core::{EdgeId, Entrance, EntranceId, GraphEdge, GraphNode, NodeId};
//! use nav_graph::IndoorGraph;
//!
//! let mut room = GraphNode::waypoint(NodeId(2), 1, 10.0, 0.0);
//! room.room_num = Some(1101);
//! let nodes = vec![GraphNode::waypoint(NodeId(1), 1, 0.0, 0.0), room];
//! let edges = [GraphEdge::new(EdgeId(1), NodeId(1), NodeId(2), 10.0)];
//! let entrances = vec![Entrance {
//!     id: EntranceId(1),
//!     name: "Main Entrance".into(),
//!     lat: 34.41,
//!     lng: -119.84,
//!     node: NodeId(1),
//! }];
//!
//! let graph = IndoorGraph::build(nodes, &edges, entrances);
//! let route = graph.find_path_to_room(1101, None).unwrap();
//! assert_eq!(route.path.len(), 2);
//! assert_eq!(route.cost, 10.0);
//! ```

pub mod graph;
pub mod route;
pub mod router;
pub mod spatial;


pub use graph::{IndoorGraph, Neighbor};
pub use route::{FloorChange, FloorSegment, RoomRoute, Transition, segment_by_floor};
pub use router::Path;
