//! Road graph: cities, roads, and road status.
//!
//! # Data layout
//!
//! Unlike the teacher framework's `RoadNetwork` (an immutable CSR-encoded
//! graph bulk-built once from OSM data, with a spatial R-tree for nearest-node
//! queries), SwiftEx's graph is small (`MAX_CITIES = 100`) and its edges
//! change status at runtime (`set_road_status`). An adjacency list per city
//! keeps mutation local and O(degree) instead of requiring a CSR rebuild, at
//! the cost of a less cache-friendly scan — an acceptable trade at this
//! scale. No spatial index is needed: cities are pure identifiers, not
//! geographic points.

use swiftex_core::{CityId, MAX_CITIES};

use crate::error::{RoutingError, RoutingResult};

/// The operating status of a road, set by `CityGraph::set_road_status`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoadStatus {
    /// Normal operation — effective weight equals the base distance.
    Normal,
    /// Congested — effective weight is `base_distance * 3`.
    Traffic,
    /// Closed — excluded entirely from pathfinding.
    Blocked,
}

impl RoadStatus {
    /// Effective travel weight for a road of the given `base_distance` km.
    #[inline]
    pub fn effective_weight(self, base_distance: u32) -> u32 {
        match self {
            RoadStatus::Normal | RoadStatus::Blocked => base_distance,
            RoadStatus::Traffic => base_distance * 3,
        }
    }
}

/// A directed adjacency entry: one direction of a road.
#[derive(Clone, Debug)]
pub struct Edge {
    pub to: CityId,
    pub base_distance: u32,
    pub status: RoadStatus,
}

/// A registered city.
#[derive(Clone, Debug)]
pub struct City {
    pub id: CityId,
    pub name: String,
}

/// The road graph: registered cities plus a mutable adjacency list.
///
/// Roads are undirected in the domain model but stored as two independent
/// directed [`Edge`] entries (one per direction) so that the effective
/// weight and status can be read with a single adjacency scan in either
/// direction — [`CityGraph::set_road_status`] is the only place that must
/// remember to touch both.
pub struct CityGraph {
    cities: Vec<Option<City>>,
    adjacency: Vec<Vec<Edge>>,
}

impl CityGraph {
    /// Construct an empty graph with `MAX_CITIES` unregistered slots.
    pub fn new() -> Self {
        Self {
            cities: (0..MAX_CITIES).map(|_| None).collect(),
            adjacency: (0..MAX_CITIES).map(|_| Vec::new()).collect(),
        }
    }

    /// Register a city at `id` with the given `name`.
    pub fn register_city(&mut self, id: CityId, name: impl Into<String>) -> RoutingResult<()> {
        let slot = self
            .cities
            .get_mut(id.index())
            .ok_or(RoutingError::CityIdOutOfRange(id))?;
        if slot.is_some() {
            return Err(RoutingError::DuplicateCity(id));
        }
        *slot = Some(City { id, name: name.into() });
        Ok(())
    }

    /// `true` if `id` refers to a registered city.
    pub fn is_present(&self, id: CityId) -> bool {
        self.cities.get(id.index()).is_some_and(Option::is_some)
    }

    /// The registered city's name, if present.
    pub fn city_name(&self, id: CityId) -> Option<&str> {
        self.cities.get(id.index())?.as_ref().map(|c| c.name.as_str())
    }

    fn require_present(&self, id: CityId) -> RoutingResult<()> {
        if self.is_present(id) {
            Ok(())
        } else {
            Err(RoutingError::CityNotFound(id))
        }
    }

    /// Add a bidirectional road between `a` and `b` with the given
    /// `base_distance` (km). Both directions start `Normal`.
    pub fn add_road(&mut self, a: CityId, b: CityId, base_distance: u32) -> RoutingResult<()> {
        self.require_present(a)?;
        self.require_present(b)?;
        if a == b {
            return Err(RoutingError::SameCity);
        }
        self.adjacency[a.index()].push(Edge { to: b, base_distance, status: RoadStatus::Normal });
        self.adjacency[b.index()].push(Edge { to: a, base_distance, status: RoadStatus::Normal });
        Ok(())
    }

    /// Outgoing edges of `city`, in adjacency-insertion order.
    pub fn out_edges(&self, city: CityId) -> &[Edge] {
        &self.adjacency[city.index()]
    }

    /// Set the status of the road between `a` and `b`, applied symmetrically
    /// to both directions (`spec.md` §3, §4.3). Fails if no direct edge
    /// exists between the two cities.
    pub fn set_road_status(&mut self, a: CityId, b: CityId, status: RoadStatus) -> RoutingResult<()> {
        self.require_present(a)?;
        self.require_present(b)?;

        let forward = self.adjacency[a.index()]
            .iter_mut()
            .find(|e| e.to == b)
            .ok_or(RoutingError::NoSuchRoad(a, b))?;
        forward.status = status;

        let backward = self.adjacency[b.index()]
            .iter_mut()
            .find(|e| e.to == a)
            .ok_or(RoutingError::NoSuchRoad(b, a))?;
        backward.status = status;

        Ok(())
    }

    /// The current status of the road between `a` and `b`, if a direct edge
    /// exists.
    pub fn road_status(&self, a: CityId, b: CityId) -> Option<RoadStatus> {
        self.adjacency[a.index()].iter().find(|e| e.to == b).map(|e| e.status)
    }
}

impl Default for CityGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_city_graph() -> (CityGraph, CityId, CityId) {
        let mut g = CityGraph::new();
        let a = CityId(0);
        let b = CityId(1);
        g.register_city(a, "Lahore").unwrap();
        g.register_city(b, "Islamabad").unwrap();
        g.add_road(a, b, 375).unwrap();
        (g, a, b)
    }

    #[test]
    fn status_updates_are_symmetric() {
        let (mut g, a, b) = two_city_graph();
        g.set_road_status(a, b, RoadStatus::Traffic).unwrap();
        assert_eq!(g.road_status(a, b), Some(RoadStatus::Traffic));
        assert_eq!(g.road_status(b, a), Some(RoadStatus::Traffic));
    }

    #[test]
    fn set_status_without_edge_fails() {
        let mut g = CityGraph::new();
        let a = CityId(0);
        let c = CityId(2);
        g.register_city(a, "Lahore").unwrap();
        g.register_city(c, "Karachi").unwrap();
        assert_eq!(
            g.set_road_status(a, c, RoadStatus::Blocked),
            Err(RoutingError::NoSuchRoad(a, c))
        );
    }

    #[test]
    fn duplicate_registration_rejected() {
        let mut g = CityGraph::new();
        let a = CityId(0);
        g.register_city(a, "Lahore").unwrap();
        assert_eq!(g.register_city(a, "Lahore Again"), Err(RoutingError::DuplicateCity(a)));
    }

    #[test]
    fn effective_weight_triples_under_traffic() {
        assert_eq!(RoadStatus::Normal.effective_weight(100), 100);
        assert_eq!(RoadStatus::Traffic.effective_weight(100), 300);
        assert_eq!(RoadStatus::Blocked.effective_weight(100), 100);
    }
}
