//! Parcel registration: field validation, route selection, and the cost
//! formula (`spec.md` §4.2).

use swiftex_core::SIM_SPEED_KM_PER_SEC;
use swiftex_routing::{CityGraph, PathResult};

use crate::error::{ParcelError, ParcelResult};
use crate::parcel::{Parcel, ParcelStatus, Priority, WeightCategory};

/// Raw registration input, validated by [`validate`].
#[derive(Clone, Debug)]
pub struct RegistrationInput {
    pub id: u32,
    pub source: swiftex_core::CityId,
    pub destination: swiftex_core::CityId,
    pub weight: u32,
    pub priority_level: u8,
}

/// The recommended and alternative routes offered to the caller before a
/// final route is selected (`spec.md` §4.2).
#[derive(Clone, Debug)]
pub struct RouteOptions {
    pub recommended: PathResult,
    pub alternative: PathResult,
}

/// Which of the two offered routes the caller selected.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RouteChoice {
    Recommended,
    Alternative,
}

impl RouteOptions {
    /// `true` when both routes are valid and unblocked, in which case the
    /// caller may auto-select the recommended one (`spec.md` §4.2).
    pub fn both_unblocked(&self) -> bool {
        self.recommended.valid
            && !self.recommended.contains_blocked
            && self.alternative.valid
            && !self.alternative.contains_blocked
    }

    pub fn select(&self, choice: RouteChoice) -> &PathResult {
        match choice {
            RouteChoice::Recommended => &self.recommended,
            RouteChoice::Alternative => &self.alternative,
        }
    }
}

/// Validate registration fields against `spec.md` §4.2, returning the
/// parsed [`Priority`] on success. Does not check id uniqueness — the
/// tracking index that owns id-space lives in `swiftex-sim`.
pub fn validate(graph: &CityGraph, input: &RegistrationInput) -> ParcelResult<Priority> {
    if !graph.is_present(input.source) {
        return Err(ParcelError::SourceNotFound(input.source));
    }
    if !graph.is_present(input.destination) {
        return Err(ParcelError::DestinationNotFound(input.destination));
    }
    if input.source == input.destination {
        return Err(ParcelError::SameCity);
    }
    if input.weight == 0 || input.weight > 1000 {
        return Err(ParcelError::WeightOutOfRange);
    }
    Priority::from_level(input.priority_level).ok_or(ParcelError::InvalidPriority)
}

/// `estimated_duration = ceil(total_distance / SIM_SPEED_KM_PER_SEC)`.
pub fn estimated_duration_secs(total_distance: u32) -> u64 {
    let speed = SIM_SPEED_KM_PER_SEC as u64;
    (total_distance as u64).div_ceil(speed)
}

/// The PKR cost formula from `spec.md` §4.2, computed once at registration.
pub fn compute_cost(weight: u32, priority: Priority, total_distance: u32) -> u32 {
    100 + weight * 15 + priority.fee() + total_distance * 5
}

/// Build a [`Parcel`] from validated input and a selected route.
///
/// `will_fail_on_path` is set from the selected route's `contains_blocked`
/// flag, per `spec.md` §4.2: "If the selected route is BLOCKED, mark
/// `willFailOnPath = true`."
pub fn build_parcel(input: RegistrationInput, priority: Priority, route: &PathResult, now: u64) -> Parcel {
    let estimated_duration_secs = estimated_duration_secs(route.distance);
    let cost = compute_cost(input.weight, priority, route.distance);

    Parcel {
        id: input.id,
        source: input.source,
        destination: input.destination,
        weight: input.weight,
        priority,
        weight_category: WeightCategory::classify(input.weight),
        status: ParcelStatus::PickupQueue,
        route: route.description.clone(),
        total_distance: route.distance,
        estimated_duration_secs,
        created_at: now,
        last_update: now,
        dispatch_time: None,
        assigned_rider: None,
        will_fail_on_path: route.contains_blocked,
        cost,
        history: vec![crate::parcel::HistoryEvent { at: now, message: "Registered".to_string() }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiftex_core::CityId;
    use swiftex_routing::CityGraph;

    fn graph_with_route() -> CityGraph {
        let mut g = CityGraph::new();
        g.register_city(CityId(0), "Lahore").unwrap();
        g.register_city(CityId(1), "Islamabad").unwrap();
        g.add_road(CityId(0), CityId(1), 375).unwrap();
        g
    }

    #[test]
    fn basic_delivery_cost_and_duration_scenario_1() {
        let g = graph_with_route();
        let route = swiftex_routing::shortest_path(&g, CityId(0), CityId(1), None);
        assert_eq!(route.distance, 375);

        let duration = estimated_duration_secs(route.distance);
        assert_eq!(duration, 38);

        let cost = compute_cost(10, Priority::Low, route.distance);
        assert_eq!(cost, 2125);
    }

    #[test]
    fn rejects_same_city() {
        let g = graph_with_route();
        let input = RegistrationInput {
            id: 1,
            source: CityId(0),
            destination: CityId(0),
            weight: 10,
            priority_level: 1,
        };
        assert_eq!(validate(&g, &input), Err(ParcelError::SameCity));
    }

    #[test]
    fn rejects_weight_out_of_range() {
        let g = graph_with_route();
        let input = RegistrationInput {
            id: 1,
            source: CityId(0),
            destination: CityId(1),
            weight: 0,
            priority_level: 1,
        };
        assert_eq!(validate(&g, &input), Err(ParcelError::WeightOutOfRange));

        let input2 = RegistrationInput { weight: 1001, ..input };
        assert_eq!(validate(&g, &input2), Err(ParcelError::WeightOutOfRange));
    }

    #[test]
    fn rejects_invalid_priority() {
        let g = graph_with_route();
        let input = RegistrationInput {
            id: 1,
            source: CityId(0),
            destination: CityId(1),
            weight: 10,
            priority_level: 9,
        };
        assert_eq!(validate(&g, &input), Err(ParcelError::InvalidPriority));
    }
}
