//! Unit tests for nav-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EntranceId, NodeId};

    #[test]
    fn raw_roundtrip() {
        let id = NodeId::from(42);
        assert_eq!(id.get(), 42);
        assert_eq!(id, NodeId(42));
    }

    #[test]
    fn ordering() {
        assert!(NodeId(0) < NodeId(1));
        assert!(EntranceId(100) > EntranceId(99));
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
        assert_eq!(EntranceId(3).to_string(), "EntranceId(3)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(34.4139, -119.8455);
        assert!(p.distance_m(p) < 1e-9);
    }

    #[test]
    fn one_degree_latitude() {
        // 1° of latitude on a 6 371 km sphere ≈ 111 195 m
        let a = GeoPoint::new(34.0, -119.0);
        let b = GeoPoint::new(35.0, -119.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 1.0, "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(34.410, -119.840);
        let b = GeoPoint::new(34.420, -119.850);
        assert!((a.distance_m(b) - b.distance_m(a)).abs() < 1e-9);
    }

    #[test]
    fn campus_scale() {
        // Two points ~0.001° apart in each axis at UCSB: roughly 145 m.
        let a = GeoPoint::new(34.410, -119.840);
        let b = GeoPoint::new(34.411, -119.841);
        let d = a.distance_m(b);
        assert!((130.0..160.0).contains(&d), "got {d}");
    }
}

#[cfg(test)]
mod records {
    use crate::{Entrance, EntranceId, GraphNode, NodeId};

    #[test]
    fn connector_by_pairing() {
        let mut n = GraphNode::waypoint(NodeId(1), 1, 0.0, 0.0);
        assert!(!n.is_connector(&[]));
        n.connector_id = Some(NodeId(2));
        assert!(n.is_connector(&[]));
    }

    #[test]
    fn connector_by_kind() {
        let mut n = GraphNode::waypoint(NodeId(1), 1, 0.0, 0.0);
        n.kind = Some(3);
        assert!(n.is_connector(&[2, 3]));
        assert!(!n.is_connector(&[2]));
    }

    #[test]
    fn entrance_position() {
        let e = Entrance {
            id: EntranceId(1),
            name: "Main Entrance".into(),
            lat: 34.41,
            lng: -119.84,
            node: NodeId(2),
        };
        let p = e.position();
        assert_eq!(p.lat, 34.41);
        assert_eq!(p.lon, -119.84);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_shape {
    use crate::{Entrance, GraphEdge, GraphNode, NodeId};

    #[test]
    fn node_with_nulls_and_type_field() {
        let json = r#"{ "id": 12, "type": 1, "room_num": 2312, "floor": 2,
                        "connector_id": null, "name": null, "x": 640.5, "y": -812.0 }"#;
        let n: GraphNode = serde_json::from_str(json).unwrap();
        assert_eq!(n.id, NodeId(12));
        assert_eq!(n.kind, Some(1));
        assert_eq!(n.room_num, Some(2312));
        assert_eq!(n.floor, Some(2));
        assert!(n.connector_id.is_none());
        assert_eq!(n.y, -812.0);
    }

    #[test]
    fn node_with_missing_optionals() {
        let n: GraphNode = serde_json::from_str(r#"{ "id": 1, "x": 0, "y": 0 }"#).unwrap();
        assert!(n.kind.is_none());
        assert!(n.floor.is_none());
    }

    #[test]
    fn large_type_code_is_accepted() {
        let n: GraphNode =
            serde_json::from_str(r#"{ "id": 5, "type": 4096, "x": 1, "y": 2 }"#).unwrap();
        assert_eq!(n.kind, Some(4096));
        assert!(n.is_connector(&[4096]));
        assert!(!n.is_connector(&[1, 2]));
    }

    #[test]
    fn edge_and_entrance() {
        let e: GraphEdge =
            serde_json::from_str(r#"{ "id": 40, "from_id": 12, "to_id": 13, "weight": 14.2 }"#)
                .unwrap();
        assert_eq!(e.to_id, NodeId(13));
        assert!(e.floor.is_none());

        let ent: Entrance = serde_json::from_str(
            r#"{ "id": 1, "name": "Main Entrance", "lat": 34.4139, "lng": -119.8455, "node": 3 }"#,
        )
        .unwrap();
        assert_eq!(ent.node, NodeId(3));
    }
}
