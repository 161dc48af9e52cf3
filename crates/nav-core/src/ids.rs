//! Strongly typed, zero-cost identifier wrappers.
//!
//! Record ids come from the offline data-preparation step and are sparse:
//! a building's nodes might be numbered 1, 2, 7, 1_204.  They are therefore
//! *not* usable as `Vec` indices; `nav-graph` keeps its own dense index and a
//! hash map from `NodeId` to it.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The raw integer as it appears in the source records.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }
    };
}

typed_id! {
    /// Id of an indoor waypoint, unique within one building graph.
    pub struct NodeId(u32);
}

typed_id! {
    /// Id of an undirected corridor/stair segment record.
    pub struct EdgeId(u32);
}

typed_id! {
    /// Id of an outdoor entrance record.
    pub struct EntranceId(u32);
}
