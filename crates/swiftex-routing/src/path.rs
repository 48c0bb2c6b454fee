//! Dijkstra shortest path and alternative-path search.
//!
//! Grounded on the teacher framework's `dt-spatial::router::dijkstra`: a
//! `BinaryHeap<Reverse<(cost, node)>>` min-heap with a `prev_edge`-style
//! predecessor array for path reconstruction. The `CityId` carried alongside
//! cost in the heap key exists only to make heap iteration deterministic
//! across runs, matching the teacher's comment that it "ensures
//! deterministic tie-breaking" — `spec.md` §4.3 itself only promises
//! tie-breaking is implementation-stable, not that it follows any particular
//! rule.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use swiftex_core::CityId;

use crate::graph::{CityGraph, RoadStatus};

/// The result of a shortest/alternative-path query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathResult {
    /// Sum of effective edge weights along the path.
    pub distance: u32,
    /// Human-readable path, e.g. `"Lahore -> Multan -> Karachi"`.
    pub description: String,
    /// `false` if no path exists under the given constraints.
    pub valid: bool,
    /// `true` if any edge on the chosen path is `Blocked`. A pure
    /// `shortest_path` call never sets this — see Open Question (a).
    pub contains_blocked: bool,
    /// `true` if any edge on the chosen path is `Traffic`.
    pub contains_traffic: bool,
}

impl PathResult {
    /// An invalid / no-path result.
    pub fn invalid() -> Self {
        Self {
            distance: 0,
            description: String::new(),
            valid: false,
            contains_blocked: false,
            contains_traffic: false,
        }
    }

    /// A short human summary, e.g. `"375 km via 2 hops"`.
    pub fn travel_summary(&self) -> String {
        if !self.valid {
            return "no route".to_string();
        }
        let hops = self.description.matches("->").count();
        format!("{} km via {} hop{}", self.distance, hops, if hops == 1 { "" } else { "s" })
    }
}

/// An edge excluded from traversal in both directions, used by
/// `alternative_path` to forbid one of the best path's outgoing edges.
type Excluded = Option<(CityId, CityId)>;

fn is_excluded(excluded: Excluded, from: CityId, to: CityId) -> bool {
    matches!(excluded, Some((u, v)) if (u, v) == (from, to) || (u, v) == (to, from))
}

/// Dijkstra's algorithm from `from` to `to`.
///
/// `Blocked` edges are treated as non-existent. `Traffic` edges use their
/// inflated weight. `excluded`, if given, removes that edge (and its
/// reverse) from consideration as well.
pub fn shortest_path(graph: &CityGraph, from: CityId, to: CityId, excluded: Excluded) -> PathResult {
    if !graph.is_present(from) || !graph.is_present(to) {
        return PathResult::invalid();
    }
    if from == to {
        return PathResult {
            distance: 0,
            description: graph.city_name(from).unwrap_or_default().to_string(),
            valid: true,
            contains_blocked: false,
            contains_traffic: false,
        };
    }

    let n = swiftex_core::MAX_CITIES;
    let mut dist = vec![u32::MAX; n];
    let mut prev: Vec<Option<CityId>> = vec![None; n];

    dist[from.index()] = 0;
    let mut heap: BinaryHeap<Reverse<(u32, CityId)>> = BinaryHeap::new();
    heap.push(Reverse((0, from)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        if node == to {
            break;
        }
        if cost > dist[node.index()] {
            continue;
        }
        for edge in graph.out_edges(node) {
            if edge.status == RoadStatus::Blocked {
                continue;
            }
            if is_excluded(excluded, node, edge.to) {
                continue;
            }
            let new_cost = cost.saturating_add(edge.status.effective_weight(edge.base_distance));
            if new_cost < dist[edge.to.index()] {
                dist[edge.to.index()] = new_cost;
                prev[edge.to.index()] = Some(node);
                heap.push(Reverse((new_cost, edge.to)));
            }
        }
    }

    if dist[to.index()] == u32::MAX {
        return PathResult::invalid();
    }

    reconstruct(graph, from, to, &prev, dist[to.index()])
}

fn reconstruct(graph: &CityGraph, from: CityId, to: CityId, prev: &[Option<CityId>], distance: u32) -> PathResult {
    let mut path = vec![to];
    let mut cur = to;
    while cur != from {
        let p = prev[cur.index()].expect("reachable node must have a predecessor");
        path.push(p);
        cur = p;
    }
    path.reverse();

    let mut contains_blocked = false;
    let mut contains_traffic = false;
    for w in path.windows(2) {
        let (a, b) = (w[0], w[1]);
        if let Some(status) = graph.road_status(a, b) {
            match status {
                RoadStatus::Blocked => contains_blocked = true,
                RoadStatus::Traffic => contains_traffic = true,
                RoadStatus::Normal => {}
            }
        }
    }

    let description = path
        .iter()
        .map(|id| graph.city_name(*id).unwrap_or("?"))
        .collect::<Vec<_>>()
        .join(" -> ");

    PathResult { distance, description, valid: true, contains_blocked, contains_traffic }
}

/// Compute the best alternative to the shortest path `from -> to`.
///
/// Per `spec.md` §4.3: compute the best path `B`, then for every outgoing
/// edge of `from` compute a shortest path that forbids it; among candidates
/// that are valid, have `distance >= B.distance`, and have a description
/// distinct from `B`, return the smallest-distance one. `PathResult::invalid()`
/// if none qualifies.
pub fn alternative_path(graph: &CityGraph, from: CityId, to: CityId) -> PathResult {
    let best = shortest_path(graph, from, to, None);
    if !best.valid {
        return PathResult::invalid();
    }

    let mut winner: Option<PathResult> = None;
    for edge in graph.out_edges(from) {
        let candidate = shortest_path(graph, from, to, Some((from, edge.to)));
        if !candidate.valid {
            continue;
        }
        if candidate.distance < best.distance {
            continue;
        }
        if candidate.description == best.description {
            continue;
        }
        let better = match &winner {
            None => true,
            Some(current) => candidate.distance < current.distance,
        };
        if better {
            winner = Some(candidate);
        }
    }

    winner.unwrap_or_else(PathResult::invalid)
}
