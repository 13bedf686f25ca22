//! Routing trait and the default single-source shortest-path scan.
//!
//! # Pluggability
//!
//! The simulator builder routes vehicles through the [`Router`] trait, so a
//! different algorithm can be dropped in without touching the simulation.
//! [`ScanDijkstra`] is the default.
//!
//! # Algorithm
//!
//! `ScanDijkstra` is the O(V²) form of Dijkstra's algorithm: instead of a
//! priority queue, every round scans all unvisited intersections for the
//! smallest tentative distance.  Its output is fully determined by
//! intersection insertion order and road traversal order:
//!
//! - ties between equal tentative distances go to the intersection with the
//!   lowest `NodeIndex` (first found by the scan);
//! - a predecessor is only replaced on a strict improvement, so among equal
//!   cost paths the one relaxed first is kept.
//!
//! Weights are `u32` so negative travel times cannot reach the router.

use log::debug;

use rn_core::{IntersectionId, NodeIndex};

use crate::{GraphError, GraphResult, RoadGraph};

// ── Route ─────────────────────────────────────────────────────────────────────

/// A shortest path: the intersections visited, start and end inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Intersections in travel order.  Never empty from a router; a single element when
    /// start and end coincide.
    pub path: Vec<IntersectionId>,
    /// Travel time of each road the route takes; `legs.len() == path.len() - 1`.
    pub legs: Vec<u32>,
    /// Sum of `legs`.
    pub distance: u64,
}

impl Route {
    /// Number of roads on the route, counted from `path`.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// `true` if the start and destination are the same intersection.
    pub fn is_trivial(&self) -> bool {
        self.path.len() == 1
    }

    /// First intersection of the path; `None` for an empty path.
    pub fn origin(&self) -> Option<&IntersectionId> {
        self.path.first()
    }

    pub fn destination(&self) -> Option<&IntersectionId> {
        self.path.last()
    }

    /// Consecutive `(from, to)` pairs along the path.
    pub fn segments(&self) -> impl Iterator<Item = (&IntersectionId, &IntersectionId)> + '_ {
        self.path.windows(2).map(|w| (&w[0], &w[1]))
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
pub trait Router: Send + Sync {
    /// Compute the shortest route from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - `UnknownIntersection` if either key is not in `graph`.
    /// - `Unreachable` if no sequence of roads leads from `from` to `to`.
    /// - `DegenerateCycle` if path reconstruction does not terminate.
    fn route(
        &self,
        graph: &RoadGraph,
        from:  &IntersectionId,
        to:    &IntersectionId,
    ) -> GraphResult<Route>;
}

// ── ScanDijkstra ──────────────────────────────────────────────────────────────

/// Dijkstra's algorithm with a linear minimum scan per round.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanDijkstra;

/// Predecessor link: the intersection a node was reached from and the travel
/// time of the road used.
type Link = (NodeIndex, u32);

impl ScanDijkstra {
    /// Run the full single-source scan from `source`.
    pub fn tree(&self, graph: &RoadGraph, source: &IntersectionId) -> GraphResult<ShortestPathTree> {
        let source = graph.require(source.as_str())?;
        let n = graph.node_count();

        // dist[v] = best known travel time to v; None is "infinity".
        let mut dist: Vec<Option<u64>> = vec![None; n];
        let mut visited = vec![false; n];
        let mut prev: Vec<Option<Link>> = vec![None; n];

        dist[source.index()] = Some(0);
        let mut settled = 0usize;

        for _ in 0..n {
            let mut best: Option<(usize, u64)> = None;
            for (j, d) in dist.iter().enumerate() {
                if visited[j] {
                    continue;
                }
                if let Some(d) = *d {
                    if best.is_none_or(|(_, b)| d < b) {
                        best = Some((j, d));
                    }
                }
            }

            // Everything left is unreachable.
            let Some((u, du)) = best else { break };
            visited[u] = true;
            settled += 1;

            let from = NodeIndex(u as u32);
            for road in graph.roads(from) {
                let v = road.to.index();
                if visited[v] {
                    continue;
                }
                let candidate = du.saturating_add(road.travel_time as u64);
                if dist[v].is_none_or(|d| candidate < d) {
                    dist[v] = Some(candidate);
                    prev[v] = Some((from, road.travel_time));
                }
            }
        }

        debug!(
            "shortest-path scan from {}: settled {settled} of {n} intersections",
            graph.key(source)
        );

        Ok(ShortestPathTree { source, dist, prev })
    }
}

impl Router for ScanDijkstra {
    fn route(
        &self,
        graph: &RoadGraph,
        from:  &IntersectionId,
        to:    &IntersectionId,
    ) -> GraphResult<Route> {
        // Validate the destination before paying for the scan.
        graph.require(to.as_str())?;
        self.tree(graph, from)?.route_to(graph, to)
    }
}

// ── ShortestPathTree ──────────────────────────────────────────────────────────

/// Distances and predecessor links from one source to every intersection.
///
/// Produced by [`ScanDijkstra::tree`].  Lets many vehicles that share a
/// start be routed from a single scan.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: NodeIndex,
    dist:   Vec<Option<u64>>,
    prev:   Vec<Option<Link>>,
}

impl ShortestPathTree {
    pub fn source(&self) -> NodeIndex {
        self.source
    }

    /// Shortest travel time to `to`, or `None` if it is unreachable.
    pub fn distance_to(&self, graph: &RoadGraph, to: &IntersectionId) -> GraphResult<Option<u64>> {
        let to = graph.require(to.as_str())?;
        Ok(self.dist[to.index()])
    }

    /// Reconstruct the route to `to` by walking predecessor links back to
    /// the source.
    pub fn route_to(&self, graph: &RoadGraph, to: &IntersectionId) -> GraphResult<Route> {
        let target = graph.require(to.as_str())?;
        let Some(distance) = self.dist[target.index()] else {
            return Err(GraphError::Unreachable {
                from: graph.key(self.source).clone(),
                to:   to.clone(),
            });
        };

        let (nodes, legs) = walk_predecessors(&self.prev, self.source, target).ok_or_else(|| {
            GraphError::DegenerateCycle { to: to.clone(), bound: self.prev.len() }
        })?;

        Ok(Route {
            path: nodes.into_iter().map(|n| graph.key(n).clone()).collect(),
            legs,
            distance,
        })
    }
}

/// Follow `prev` from `to` back to `source`, returning the nodes and leg
/// weights in travel order.
///
/// A simple path visits at most `prev.len()` nodes; the walk gives up with
/// `None` once it exceeds that or hits a node with no predecessor.
pub(crate) fn walk_predecessors(
    prev:   &[Option<Link>],
    source: NodeIndex,
    to:     NodeIndex,
) -> Option<(Vec<NodeIndex>, Vec<u32>)> {
    let bound = prev.len();
    let mut nodes = vec![to];
    let mut legs = Vec::new();
    let mut cur = to;

    while cur != source {
        let (p, w) = prev.get(cur.index()).copied().flatten()?;
        nodes.push(p);
        legs.push(w);
        if nodes.len() > bound {
            return None;
        }
        cur = p;
    }

    nodes.reverse();
    legs.reverse();
    Some((nodes, legs))
}
