//! library — walk-through of the indoor routing engine.
//!
//! Registers a synthetic two-floor library, picks the entrance nearest a
//! user standing outside, and routes them to a second-floor study room.
//! Set `RUST_LOG=debug` to see the registry skip non-routable buildings.

mod building;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use nav_core::GeoPoint;
use nav_registry::{GraphRegistry, InMemorySource, ManifestDirectory};

use building::{LIBRARY_ID, STAIRS, buildings, library_records, manifest};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Where the user is standing, just south of the library.
const USER_LAT: f64 = 34.41350;
const USER_LNG: f64 = -119.84540;

const TARGET_ROOM: u32 = 2210;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== library — indoor routing walk-through ===");
    println!();

    // 1. Registry over an in-memory directory and record source.
    let directory = ManifestDirectory::new(buildings(), manifest());
    let source = InMemorySource::new().with(LIBRARY_ID, library_records());

    let mut registry = GraphRegistry::with_connector_kinds(vec![STAIRS]);
    let built = registry.initialize(&directory, &source);
    println!("Initialized {built} graph(s): {:?}", registry.available_graphs());

    for (id, s) in registry.graph_stats() {
        println!(
            "  {id}: {} nodes, {} edges, {} entrances",
            s.node_count, s.edge_count, s.entrance_count
        );
    }
    println!("  floorplans: {:?}", directory.available_floors(LIBRARY_ID));
    println!();

    // 2. Nearest entrance to the user.
    let user = GeoPoint::new(USER_LAT, USER_LNG);
    let library = directory.building(LIBRARY_ID).context("library missing from directory")?;
    println!(
        "User at {user}, {:.0} m from {} ({})",
        user.distance_m(library.position()),
        library.name,
        library.position()
    );

    let graph = registry.get_graph(LIBRARY_ID).context("library graph not initialized")?;
    let entrance = graph
        .find_nearest_entrance(USER_LAT, USER_LNG)
        .context("library has no entrances")?;
    info!(entrance = %entrance.name, node = %entrance.node, "nearest entrance selected");
    println!(
        "Nearest entrance: {} ({:.0} m away)",
        entrance.name,
        user.distance_m(entrance.position())
    );
    println!();

    // 3. Route to the room.
    let route = graph
        .find_path_to_room(TARGET_ROOM, Some(entrance))
        .with_context(|| format!("no route to room {TARGET_ROOM}"))?;
    info!(room = TARGET_ROOM, nodes = route.path.len(), cost = route.cost, "route resolved");

    println!("Route to room {TARGET_ROOM}: {} nodes, cost {:.1}", route.path.len(), route.cost);
    for (i, seg) in route.floor_segments(registry.connector_kinds()).iter().enumerate() {
        let ids: Vec<u32> = seg.nodes.iter().map(|n| n.id.get()).collect();
        let floor = seg.floor.map_or_else(|| "?".to_string(), |f| f.to_string());
        println!("  [{i}] floor {floor}: {ids:?}");
        if let Some(exit) = seg.exit {
            println!(
                "      {:?} to floor {:?} via {:?}",
                exit.direction, exit.to_floor, exit.connector
            );
        }
    }
    println!();

    // 4. The same route as a client would receive it.
    println!("{}", serde_json::to_string_pretty(&route)?);

    Ok(())
}
