//! `nav-core` — foundational types for the `indoor_nav` routing core.
//!
//! This crate is a dependency of every other `nav-*` crate.  It intentionally
//! has no `nav-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`, `EdgeId`, `EntranceId`                      |
//! | [`geo`]         | `GeoPoint`, haversine distance                        |
//! | [`records`]     | `GraphNode`, `GraphEdge`, `Entrance`                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by `nav-registry` to read building JSON.          |

pub mod geo;
pub mod ids;
pub mod records;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::GeoPoint;
pub use ids::{EdgeId, EntranceId, NodeId};
pub use records::{Entrance, GraphEdge, GraphNode};
