//! Single-source shortest path (Dijkstra) over the indoor graph.
//!
//! # Selection order
//!
//! The open set is a binary min-heap keyed on `(cost, NodeId)`.  At each step
//! the unsettled node with the smallest tentative cost is settled; among equal
//! costs the **lowest node id** goes first.  That makes paths reproducible
//! regardless of record order.
//!
//! The search stops as soon as the target is *settled* (popped), not when it
//! is first relaxed.  With non-negative weights that is the usual early exit.
//!
//! # Cost units
//!
//! Whatever the edge records use (metres, seconds…).  Costs are summed as
//! `f64` and never rounded.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use nav_core::NodeId;

use crate::IndoorGraph;

/// Sentinel predecessor for unreached nodes and for the start node.
const NO_PREV: u32 = u32::MAX;

// ── Path ──────────────────────────────────────────────────────────────────────

/// A node sequence from start to end (both inclusive) and its summed weight.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Path {
    pub nodes: Vec<NodeId>,
    pub cost: f64,
}

impl Path {
    /// Number of nodes on the path (start and end included).
    pub fn hops(&self) -> usize {
        self.nodes.len()
    }
}

// ── Heap entry ────────────────────────────────────────────────────────────────

/// Open-set entry.  Ordered by cost, then node id, so `Reverse<HeapEntry>`
/// pops the cheapest, lowest-id node first.
#[derive(Copy, Clone, Debug)]
struct HeapEntry {
    cost: f64,
    id: NodeId,
    dense: u32,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.id.cmp(&other.id))
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

impl IndoorGraph {
    /// Ordered node ids of the cheapest path from `start` to `end`.
    ///
    /// Returns `None` if either id is unknown or `end` is unreachable.
    /// `dijkstra(a, a)` is `Some(vec![a])` for a known node.
    pub fn dijkstra(&self, start: NodeId, end: NodeId) -> Option<Vec<NodeId>> {
        self.shortest_path(start, end).map(|p| p.nodes)
    }

    /// Like [`dijkstra`](Self::dijkstra) but also reports the path cost.
    pub fn shortest_path(&self, start: NodeId, end: NodeId) -> Option<Path> {
        let s = self.dense(start)?;
        let t = self.dense(end)?;

        let n = self.node_count();
        // dist[v] = best known cost to reach v.
        let mut dist = vec![f64::INFINITY; n];
        // prev[v] = dense index that reached v.
        let mut prev = vec![NO_PREV; n];
        let mut settled = vec![false; n];

        dist[s] = 0.0;

        let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
        heap.push(Reverse(HeapEntry { cost: 0.0, id: start, dense: s as u32 }));

        while let Some(Reverse(cur)) = heap.pop() {
            let u = cur.dense as usize;
            // Stale entry: u was settled via a cheaper push.
            if settled[u] {
                continue;
            }
            settled[u] = true;

            if u == t {
                return Some(Path {
                    nodes: self.reconstruct(&prev, s, t),
                    cost: cur.cost,
                });
            }

            for k in self.adj_range(u) {
                let v = self.adj_to[k] as usize;
                if settled[v] {
                    continue;
                }
                let alt = cur.cost + self.adj[k].weight;
                if alt < dist[v] {
                    dist[v] = alt;
                    prev[v] = u as u32;
                    heap.push(Reverse(HeapEntry {
                        cost: alt,
                        id: self.nodes[v].id,
                        dense: v as u32,
                    }));
                }
            }
        }

        None
    }

    /// Summed weight along `path`, taking the cheapest parallel edge for each
    /// consecutive pair.
    ///
    /// `None` if `path` is empty, names an unknown node, or steps between two
    /// nodes that share no edge.  A single known node costs `0.0`.
    pub fn path_cost(&self, path: &[NodeId]) -> Option<f64> {
        let first = path.first()?;
        if !self.contains(*first) {
            return None;
        }

        path.windows(2).try_fold(0.0, |acc, pair| {
            self.neighbors(pair[0])
                .iter()
                .filter(|nb| nb.node == pair[1])
                .map(|nb| nb.weight)
                .min_by(f64::total_cmp)
                .map(|w| acc + w)
        })
    }

    /// Walk `prev` back from `t` to `s`, then flip to start-first order.
    fn reconstruct(&self, prev: &[u32], s: usize, t: usize) -> Vec<NodeId> {
        let mut out = vec![self.nodes[t].id];
        let mut cur = t;
        while cur != s {
            cur = prev[cur] as usize;
            out.push(self.nodes[cur].id);
        }
        out.reverse();
        out
    }
}
