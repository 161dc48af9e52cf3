//! Synthetic two-floor library.
//!
//! ```text
//! floor 2:            6 ── 5(stairs) ── 8 [2210 east door]
//!                     │
//!                     7 [2210 west door]
//!                               │ stairs (5)
//! floor 1:  1 ─── 2 ─── 3(stairs) ── 9
//!         north   │              south
//!                 4 [1101]
//! ```

use std::collections::BTreeMap;

use nav_core::{EdgeId, Entrance, EntranceId, GraphEdge, GraphNode, NodeId};
use nav_registry::{Building, BuildingRecords, FloorImage, LatLng, ManifestEntry};

/// Node `type` code this campus uses for stair landings.
pub const STAIRS: u32 = 2;

pub const LIBRARY_ID: &str = "ucsb-library";

fn node(id: u32, floor: i32, x: f64, y: f64) -> GraphNode {
    GraphNode::waypoint(NodeId(id), floor, x, y)
}

fn room(id: u32, floor: i32, x: f64, y: f64, room_num: u32) -> GraphNode {
    GraphNode { room_num: Some(room_num), ..node(id, floor, x, y) }
}

fn stairs(id: u32, floor: i32, x: f64, y: f64, pair: u32) -> GraphNode {
    GraphNode {
        kind: Some(STAIRS),
        connector_id: Some(NodeId(pair)),
        name: Some("Central Stairs".into()),
        ..node(id, floor, x, y)
    }
}

fn edge(id: u32, a: u32, b: u32, weight: f64, floor: Option<i32>) -> GraphEdge {
    GraphEdge { floor, ..GraphEdge::new(EdgeId(id), NodeId(a), NodeId(b), weight) }
}

/// The building list: the library plus one building with floorplans only.
pub fn buildings() -> Vec<Building> {
    vec![
        Building {
            id:       LIBRARY_ID.into(),
            name:     "Library".into(),
            abbr:     vec!["LIB".into()],
            location: LatLng { lat: 34.41390, lng: -119.84550 },
        },
        Building {
            id:       "arts".into(),
            name:     "Arts Building".into(),
            abbr:     vec!["ARTS".into()],
            location: LatLng { lat: 34.41260, lng: -119.84820 },
        },
    ]
}

/// Manifest: the library is routable, `arts` only has floor images.
pub fn manifest() -> BTreeMap<String, ManifestEntry> {
    let image = |b: &str, f: &str| {
        (
            f.to_string(),
            FloorImage { path: format!("/floorplans/{b}/{f}.png"), w: 1369, h: 1560 },
        )
    };

    let library = ManifestEntry {
        graph_nodes: Some(format!("{LIBRARY_ID}/nodes.json")),
        graph_edges: Some(format!("{LIBRARY_ID}/edges.json")),
        entrances:   Some(format!("{LIBRARY_ID}/entrances.json")),
        floors:      [image(LIBRARY_ID, "2"), image(LIBRARY_ID, "1"), image(LIBRARY_ID, "B")]
            .into_iter()
            .collect(),
    };
    let arts = ManifestEntry {
        floors: [image("arts", "1")].into_iter().collect(),
        ..ManifestEntry::default()
    };

    [(LIBRARY_ID.to_string(), library), ("arts".to_string(), arts)]
        .into_iter()
        .collect()
}

/// Node, edge, and entrance records for the library.
pub fn library_records() -> BuildingRecords {
    let nodes = vec![
        GraphNode { name: Some("North Lobby".into()), ..node(1, 1, 0.0, 0.0) },
        node(2, 1, 10.0, 0.0),
        stairs(3, 1, 20.0, 0.0, 5),
        room(4, 1, 10.0, 8.0, 1101),
        GraphNode { name: Some("South Lobby".into()), ..node(9, 1, 30.0, 0.0) },
        stairs(5, 2, 20.0, 0.0, 3),
        node(6, 2, 10.0, 0.0),
        room(7, 2, 10.0, 8.0, 2210),
        room(8, 2, 28.0, 8.0, 2210),
    ];

    let edges = vec![
        edge(1, 1, 2, 10.0, Some(1)),
        edge(2, 2, 3, 10.0, Some(1)),
        edge(3, 2, 4, 8.0, Some(1)),
        edge(4, 3, 9, 10.0, Some(1)),
        edge(5, 3, 5, 5.0, None),
        edge(6, 5, 6, 10.0, Some(2)),
        edge(7, 6, 7, 8.0, Some(2)),
        edge(8, 5, 8, 12.0, Some(2)),
    ];

    let entrances = vec![
        Entrance {
            id:   EntranceId(1),
            name: "North Entrance".into(),
            lat:  34.41420,
            lng:  -119.84560,
            node: NodeId(1),
        },
        Entrance {
            id:   EntranceId(2),
            name: "South Entrance".into(),
            lat:  34.41365,
            lng:  -119.84535,
            node: NodeId(9),
        },
    ];

    BuildingRecords { nodes, edges, entrances }
}
