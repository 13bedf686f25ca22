//! The road graph.
//!
//! # Data layout
//!
//! Intersections are stored densely in insertion order and addressed by
//! [`NodeIndex`].  A key → index map gives O(1) lookup by name.  Each
//! intersection owns a `Vec<Road>` of outgoing edges, appended in the order
//! roads were added.
//!
//! # Traversal order
//!
//! Outgoing roads are **traversed most-recent-first**.  Everything that walks
//! a road list ([`RoadGraph::roads`], [`RoadGraph::neighbors`],
//! [`RoadGraph::edge_weight`], the router's relaxation loop) iterates the
//! `Vec` in reverse, so the last road added from a node is seen first.  This
//! is observable with parallel edges: `edge_weight` returns the weight of the
//! newest matching road, not the cheapest.
//!
//! The graph only grows.  There is no removal of roads or intersections.

use std::iter::Rev;
use std::slice;

use rn_core::{IntersectionId, NodeIndex};

use crate::{GraphError, GraphResult};

#[cfg(feature = "fx-hash")]
type KeyMap = rustc_hash::FxHashMap<IntersectionId, NodeIndex>;
#[cfg(not(feature = "fx-hash"))]
type KeyMap = std::collections::HashMap<IntersectionId, NodeIndex>;

// ── Road ──────────────────────────────────────────────────────────────────────

/// A directed road leaving some intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Road {
    /// Destination intersection.
    pub to: NodeIndex,
    /// Travel time in minutes (one simulated second per unit in the movement
    /// simulator).
    pub travel_time: u32,
}

// ── RoadGraph ─────────────────────────────────────────────────────────────────

/// Directed, weighted road network built incrementally.
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    keys:       Vec<IntersectionId>,
    index:      KeyMap,
    out:        Vec<Vec<Road>>,
    edge_count: usize,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of intersections.
    pub fn with_capacity(nodes: usize) -> Self {
        let mut index = KeyMap::default();
        index.reserve(nodes);
        Self {
            keys: Vec::with_capacity(nodes),
            index,
            out: Vec::with_capacity(nodes),
            edge_count: 0,
        }
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Insert `key` with no outgoing roads, or return the existing index.
    pub fn add_intersection<K: AsRef<str>>(&mut self, key: K) -> NodeIndex {
        let key = key.as_ref();
        if let Some(&idx) = self.index.get(key) {
            return idx;
        }
        let idx = NodeIndex(self.keys.len() as u32);
        let id = IntersectionId::from(key);
        self.keys.push(id.clone());
        self.index.insert(id, idx);
        self.out.push(Vec::new());
        idx
    }

    /// Add a **directed** road `from → to`.
    ///
    /// Missing endpoints are inserted first (`from`, then `to`).  Parallel
    /// roads between the same pair are kept; none are merged.
    pub fn add_road<F, T>(&mut self, from: F, to: T, travel_time: u32)
    where
        F: AsRef<str>,
        T: AsRef<str>,
    {
        let from = self.add_intersection(from);
        let to = self.add_intersection(to);
        self.out[from.index()].push(Road { to, travel_time });
        self.edge_count += 1;
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.keys.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn index_of(&self, key: &str) -> Option<NodeIndex> {
        self.index.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Like [`index_of`](Self::index_of) but fails with `UnknownIntersection`.
    pub fn require(&self, key: &str) -> GraphResult<NodeIndex> {
        self.index_of(key)
            .ok_or_else(|| GraphError::UnknownIntersection(IntersectionId::from(key)))
    }

    /// Key of the intersection at `idx`.
    ///
    /// # Panics
    /// Panics if `idx` did not come from this graph.
    #[inline]
    pub fn key(&self, idx: NodeIndex) -> &IntersectionId {
        &self.keys[idx.index()]
    }

    /// All intersection keys in insertion order.
    pub fn intersections(&self) -> impl ExactSizeIterator<Item = &IntersectionId> + '_ {
        self.keys.iter()
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Outgoing roads of `node`, most recent first.
    #[inline]
    pub fn roads(&self, node: NodeIndex) -> Rev<slice::Iter<'_, Road>> {
        self.out[node.index()].iter().rev()
    }

    /// `(neighbor, travel_time)` pairs for the roads leaving `key`, most
    /// recent first.  Empty for an unknown key.
    pub fn neighbors(&self, key: &str) -> Neighbors<'_> {
        let roads: &[Road] = match self.index_of(key) {
            Some(idx) => &self.out[idx.index()],
            None => &[],
        };
        Neighbors { keys: &self.keys, roads: roads.iter().rev() }
    }

    /// Every intersection paired with its neighbors, in insertion order.
    pub fn adjacency(&self) -> impl Iterator<Item = (&IntersectionId, Neighbors<'_>)> + '_ {
        self.keys.iter().zip(&self.out).map(move |(key, roads)| {
            (key, Neighbors { keys: &self.keys, roads: roads.iter().rev() })
        })
    }

    /// Travel time of the first road `from → to` in traversal order, or
    /// `None` if there is no such road (or either key is unknown).
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<u32> {
        let from = self.index_of(from)?;
        let to = self.index_of(to)?;
        self.roads(from).find(|r| r.to == to).map(|r| r.travel_time)
    }

    /// [`edge_weight`](Self::edge_weight) with a `MissingEdge` error in place
    /// of `None`.  A zero-weight road returns `Ok(0)`.
    pub fn travel_time(&self, from: &str, to: &str) -> GraphResult<u32> {
        self.edge_weight(from, to).ok_or_else(|| GraphError::MissingEdge {
            from: IntersectionId::from(from),
            to:   IntersectionId::from(to),
        })
    }
}

// ── Neighbors ─────────────────────────────────────────────────────────────────

/// Lazy iterator over `(neighbor key, travel_time)` pairs.  See
/// [`RoadGraph::neighbors`].
#[derive(Clone)]
pub struct Neighbors<'g> {
    keys:  &'g [IntersectionId],
    roads: Rev<slice::Iter<'g, Road>>,
}

impl<'g> Iterator for Neighbors<'g> {
    type Item = (&'g IntersectionId, u32);

    fn next(&mut self) -> Option<Self::Item> {
        self.roads
            .next()
            .map(|r| (&self.keys[r.to.index()], r.travel_time))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.roads.size_hint()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}
