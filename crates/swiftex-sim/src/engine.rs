//! The `Engine` struct and its tick loop (`spec.md` §4.5).

use std::collections::{BTreeSet, VecDeque};

use swiftex_core::{Clock, CityId, FAILURE_FRACTION_OF_DURATION, MISSING_THRESHOLD_SECONDS, SystemClock};
use swiftex_dispatch::{DispatchOutcome, Fleet, HeapEntry, Rider, UndoLog, UndoRecord, Warehouse};
use swiftex_parcel::{Parcel, ParcelStatus, RegistrationInput, RouteChoice, RouteOptions};
use swiftex_routing::{CityGraph, RoadStatus};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::report::{AnalyticsReport, DispatchReport, ListFilter, UndoOutcome};
use crate::tracking::TrackingIndex;

/// The SwiftEx engine: graph, parcels, pipeline containers, fleet, and undo
/// log, all owned by one value (`spec.md` §5).
///
/// Generic over the clock source `C` so tests can drive time with
/// [`swiftex_core::FixedClock`] while production code defaults to
/// [`SystemClock`]. Construct via [`crate::EngineBuilder`] or [`Engine::new`].
pub struct Engine<C: Clock = SystemClock> {
    clock: C,
    graph: CityGraph,

    /// Master list — the authoritative registry. Parcels are never removed;
    /// slots are append-only and indexed by [`TrackingIndex`].
    parcels: Vec<Parcel>,
    tracking: TrackingIndex,

    pickup_queue: VecDeque<u32>,
    transit_list: Vec<u32>,
    archive: BTreeSet<u32>,

    fleet: Fleet,
    warehouse: Warehouse,
    undo: UndoLog,
}

impl<C: Clock> Engine<C> {
    /// Build a fresh engine from `config`, registering its seed cities,
    /// roads, and fleet.
    pub fn new(config: EngineConfig, clock: C) -> Self {
        let mut graph = CityGraph::new();
        for (id, name) in &config.cities {
            graph.register_city(*id, *name).expect("seed city ids must be unique");
        }
        for &(from, to, distance) in &config.roads {
            graph
                .add_road(CityId(from), CityId(to), distance)
                .expect("seed roads must reference registered cities");
        }

        let mut fleet = Fleet::new();
        for (index, &(name, vehicle, capacity)) in config.fleet.iter().enumerate() {
            fleet.add(Rider::new(index as u32 + 1, name, vehicle, capacity));
        }

        Engine {
            clock,
            graph,
            parcels: Vec::new(),
            tracking: TrackingIndex::new(),
            pickup_queue: VecDeque::new(),
            transit_list: Vec::new(),
            archive: BTreeSet::new(),
            fleet,
            warehouse: Warehouse::new(),
            undo: UndoLog::new(),
        }
    }

    fn now(&self) -> u64 {
        self.clock.now_secs()
    }

    // ── Simulation tick (`spec.md` §4.5) ───────────────────────────────────

    /// Advance the simulation: detect missing shipments, fail shipments on
    /// blocked routes, and complete (deliver / return) shipments whose
    /// estimated duration has elapsed. Invoked at the start of every other
    /// command so observed state is always current.
    pub fn tick(&mut self) {
        let now = self.now();
        let in_flight = self.transit_list.clone();
        let mut completed = Vec::new();
        let mut reinsert = Vec::new();

        for pid in in_flight {
            let Some(idx) = self.tracking.get(pid) else { continue };
            let source = self.parcels[idx].source;
            let parcel = &mut self.parcels[idx];

            if parcel.status == ParcelStatus::InTransit
                && now.saturating_sub(parcel.last_update) > MISSING_THRESHOLD_SECONDS
            {
                parcel.set_status(ParcelStatus::Missing, now, "MISSING: no status change within threshold");
                completed.push(pid);
                continue;
            }

            let elapsed_since_dispatch = parcel.dispatch_time.map(|t| now.saturating_sub(t));

            if parcel.will_fail_on_path
                && parcel.status == ParcelStatus::InTransit
                && elapsed_since_dispatch
                    .is_some_and(|elapsed| (elapsed as f64) > FAILURE_FRACTION_OF_DURATION * parcel.estimated_duration_secs as f64)
            {
                parcel.set_status(ParcelStatus::Warehouse(source), now, "FAILURE: Route Blocked");
                let entry = HeapEntry { parcel_id: pid, priority: parcel.priority, weight: parcel.weight };
                completed.push(pid);
                reinsert.push(entry);
                continue;
            }

            if let Some(elapsed) = elapsed_since_dispatch
                && elapsed >= parcel.estimated_duration_secs
            {
                let returning = parcel.status == ParcelStatus::Returning;
                if returning {
                    parcel.set_status(ParcelStatus::ReturnedToSender, now, "Returned to sender");
                } else {
                    parcel.set_status(ParcelStatus::Delivered, now, "Delivered");
                }
                self.archive.insert(pid);
                completed.push(pid);
            }
        }

        if !completed.is_empty() {
            self.transit_list.retain(|pid| !completed.contains(pid));
        }
        for entry in reinsert {
            let _ = self.warehouse.push(entry);
        }
    }

    // ── Registration (`spec.md` §4.2) ──────────────────────────────────────

    /// Compute the recommended and alternative routes for a prospective
    /// registration, to be shown to the caller before [`Engine::register_parcel`].
    pub fn preview_routes(&mut self, source: CityId, destination: CityId) -> EngineResult<RouteOptions> {
        self.tick();
        let recommended = swiftex_routing::shortest_path(&self.graph, source, destination, None);
        if !recommended.valid {
            return Err(EngineError::NoRoute);
        }
        let alternative = swiftex_routing::alternative_path(&self.graph, source, destination);
        Ok(RouteOptions { recommended, alternative })
    }

    /// Validate and register a parcel using a route chosen from a prior
    /// [`Engine::preview_routes`] call.
    pub fn register_parcel(&mut self, input: RegistrationInput, options: &RouteOptions, choice: RouteChoice) -> EngineResult<u32> {
        self.tick();
        if self.tracking.contains(input.id) {
            return Err(EngineError::DuplicateParcel(input.id));
        }
        let priority = swiftex_parcel::validate(&self.graph, &input)?;
        let route = options.select(choice);
        if !route.valid {
            return Err(EngineError::NoRoute);
        }

        let now = self.now();
        let id = input.id;
        let parcel = swiftex_parcel::build_parcel(input, priority, route, now);
        let slot = self.parcels.len();
        self.parcels.push(parcel);
        self.tracking.insert(id, slot);
        self.pickup_queue.push_back(id);
        Ok(id)
    }

    // ── Pipeline queues (`spec.md` §4.7) ───────────────────────────────────

    /// Drain the pickup FIFO into the warehouse heap.
    ///
    /// Checks the heap has room before touching a parcel: if the warehouse
    /// is at capacity, the early return leaves that parcel (and everything
    /// behind it) right where it was, at the front of the pickup queue,
    /// rather than half-migrated.
    pub fn process_pickup_queue(&mut self) -> EngineResult<usize> {
        self.tick();
        let now = self.now();
        let mut moved = 0usize;
        while let Some(&pid) = self.pickup_queue.front() {
            let idx = self.tracking.get(pid).ok_or(EngineError::UnknownParcel(pid))?;
            let (priority, weight, source) = {
                let parcel = &self.parcels[idx];
                (parcel.priority, parcel.weight, parcel.source)
            };
            self.warehouse.push(HeapEntry { parcel_id: pid, priority, weight })?;
            self.pickup_queue.pop_front();
            self.parcels[idx].set_status(ParcelStatus::Warehouse(source), now, "Moved to warehouse");
            moved += 1;
        }
        Ok(moved)
    }

    // ── Dispatcher (`spec.md` §4.4) ────────────────────────────────────────

    pub fn dispatch(&mut self) -> DispatchReport {
        self.tick();
        let now = self.now();
        let outcomes = swiftex_dispatch::run_dispatch(&mut self.fleet, &mut self.warehouse, &mut self.undo);
        let mut report = DispatchReport::default();

        for outcome in outcomes {
            match outcome {
                DispatchOutcome::Assigned { parcel_id, rider_id } => {
                    if let Some(idx) = self.tracking.get(parcel_id) {
                        let rider_name = self.fleet.riders().iter().find(|r| r.id == rider_id).map(|r| r.name.clone());
                        let parcel = &mut self.parcels[idx];
                        parcel.dispatch_time = Some(now);
                        parcel.assigned_rider = rider_name;
                        parcel.set_status(ParcelStatus::InTransit, now, "Dispatched");
                        self.transit_list.push(parcel_id);
                    }
                    report.assigned.push((parcel_id, rider_id));
                }
                DispatchOutcome::Deferred { parcel_id } => report.deferred.push(parcel_id),
            }
        }
        report
    }

    // ── Undo (`spec.md` §4.6) ───────────────────────────────────────────────

    pub fn undo_last(&mut self) -> EngineResult<Option<UndoOutcome>> {
        self.tick();
        let Some(UndoRecord::Dispatch { parcel_id, rider_id, weight }) = self.undo.pop() else {
            return Ok(None);
        };
        if let Some(rider) = self.fleet.get_mut(rider_id) {
            rider.unload(weight);
        }

        let Some(pos) = self.transit_list.iter().position(|&pid| pid == parcel_id) else {
            return Ok(Some(UndoOutcome::StaleRecord { parcel_id }));
        };
        self.transit_list.remove(pos);

        let idx = self.tracking.get(parcel_id).ok_or(EngineError::UnknownParcel(parcel_id))?;
        let now = self.now();
        let source = self.parcels[idx].source;
        let (priority, weight) = {
            let parcel = &mut self.parcels[idx];
            parcel.dispatch_time = None;
            parcel.assigned_rider = None;
            parcel.set_status(ParcelStatus::Warehouse(source), now, "UNDO: dispatch reverted");
            (parcel.priority, parcel.weight)
        };
        self.warehouse.push(HeapEntry { parcel_id, priority, weight })?;
        Ok(Some(UndoOutcome::Reverted { parcel_id, rider_id }))
    }

    // ── Tracking & reporting (`spec.md` §4.7) ──────────────────────────────

    pub fn track(&mut self, id: u32) -> Option<Parcel> {
        self.tick();
        self.tracking.get(id).map(|idx| self.parcels[idx].clone())
    }

    pub fn list(&mut self, filter: ListFilter) -> Vec<Parcel> {
        self.tick();
        match filter {
            ListFilter::All => self.parcels.clone(),
            ListFilter::Transit => self
                .transit_list
                .iter()
                .filter_map(|&pid| self.tracking.get(pid))
                .map(|idx| self.parcels[idx].clone())
                .collect(),
            ListFilter::Warehouse => self
                .parcels
                .iter()
                .filter(|p| p.status.is_warehouse())
                .cloned()
                .collect(),
        }
    }

    pub fn view_fleet(&mut self) -> Vec<Rider> {
        self.tick();
        self.fleet.riders().to_vec()
    }

    /// Up to `HEAP_PREVIEW_MAX` entries at the front of the warehouse heap.
    pub fn view_heap_preview(&mut self) -> Vec<HeapEntry> {
        self.tick();
        self.warehouse.preview(swiftex_core::HEAP_PREVIEW_MAX)
    }

    /// Ids of parcels `tick` has already flagged `Missing`, plus any
    /// non-terminal parcel (e.g. one sitting in a warehouse, deferred by
    /// capacity or never dispatched) whose own `last_update` has gone
    /// stale past `MISSING_THRESHOLD_SECONDS` without ever passing through
    /// the transit-list missing check. Scans the master list, not just the
    /// transit list.
    pub fn missing_report(&mut self) -> Vec<u32> {
        self.tick();
        let now = self.now();
        self.parcels
            .iter()
            .filter(|p| {
                p.status == ParcelStatus::Missing
                    || (!p.is_terminal() && now.saturating_sub(p.last_update) > MISSING_THRESHOLD_SECONDS)
            })
            .map(|p| p.id)
            .collect()
    }

    pub fn archive_in_order(&mut self) -> Vec<Parcel> {
        self.tick();
        self.archive
            .iter()
            .filter_map(|&pid| self.tracking.get(pid))
            .map(|idx| self.parcels[idx].clone())
            .collect()
    }

    pub fn analytics(&mut self) -> AnalyticsReport {
        self.tick();
        AnalyticsReport::from_parcels(self.parcels.iter())
    }

    /// Update a road's status symmetrically, then reconcile the transit
    /// list: any in-flight parcel whose route is no longer traversable is
    /// flagged `will_fail_on_path` so the next tick routes it to failure
    /// (`spec.md` §4.3, "Post-update reconciliation").
    pub fn set_road_status(&mut self, a: CityId, b: CityId, status: RoadStatus) -> EngineResult<()> {
        self.tick();
        self.graph.set_road_status(a, b, status)?;

        for &pid in &self.transit_list {
            let Some(idx) = self.tracking.get(pid) else { continue };
            let (source, destination) = (self.parcels[idx].source, self.parcels[idx].destination);
            let still_routable = swiftex_routing::shortest_path(&self.graph, source, destination, None).valid;
            if !still_routable {
                self.parcels[idx].will_fail_on_path = true;
            }
        }
        Ok(())
    }

    /// Zero every rider's load and set them Idle. Parcels are untouched
    /// (`spec.md` §4.7).
    pub fn reset_day(&mut self) {
        self.tick();
        self.fleet.reset_day();
    }

    // ── Accessors used by the demo binary and tests ────────────────────────

    pub fn graph(&self) -> &CityGraph {
        &self.graph
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiftex_core::FixedClock;
    use swiftex_parcel::RegistrationInput;

    fn test_engine(start: u64) -> Engine<FixedClock> {
        Engine::new(EngineConfig::seed_default(), FixedClock::new(start))
    }

    fn register(engine: &mut Engine<FixedClock>, id: u32, source: CityId, destination: CityId, weight: u32, priority_level: u8) -> u32 {
        let options = engine.preview_routes(source, destination).unwrap();
        engine
            .register_parcel(
                RegistrationInput { id, source, destination, weight, priority_level },
                &options,
                RouteChoice::Recommended,
            )
            .unwrap()
    }

    #[test]
    fn basic_delivery_scenario_1() {
        let mut engine = test_engine(0);
        register(&mut engine, 1, CityId(1), CityId(2), 10, 3);
        engine.process_pickup_queue().unwrap();
        let report = engine.dispatch();
        assert_eq!(report.assigned, vec![(1, 1)]);

        let parcel = engine.track(1).unwrap();
        assert_eq!(parcel.status, ParcelStatus::InTransit);
        let duration = parcel.estimated_duration_secs;

        engine.clock().advance(duration);
        let delivered = engine.track(1).unwrap();
        assert_eq!(delivered.status, ParcelStatus::Delivered);
        assert_eq!(engine.archive_in_order().len(), 1);
    }

    #[test]
    fn priority_ordering_scenario_2() {
        let mut engine = test_engine(0);
        register(&mut engine, 1, CityId(1), CityId(2), 10, 3);
        register(&mut engine, 2, CityId(1), CityId(2), 10, 1);
        engine.process_pickup_queue().unwrap();
        let preview = engine.view_heap_preview();
        assert_eq!(preview[0].parcel_id, 2, "High priority parcel must be at the top of the heap");
    }

    #[test]
    fn missing_detection_scenario_5() {
        let mut engine = test_engine(0);
        register(&mut engine, 1, CityId(1), CityId(2), 10, 1);
        engine.process_pickup_queue().unwrap();
        engine.dispatch();
        assert!(engine.track(1).unwrap().status == ParcelStatus::InTransit);

        engine.clock().advance(swiftex_core::MISSING_THRESHOLD_SECONDS + 1);
        let missing = engine.missing_report();
        assert_eq!(missing, vec![1]);
        assert_eq!(engine.track(1).unwrap().status, ParcelStatus::Missing);
    }

    #[test]
    fn pickup_queue_left_consistent_when_warehouse_is_full() {
        let mut engine = test_engine(0);
        for id in 1..=(swiftex_core::WAREHOUSE_CAPACITY as u32 + 1) {
            register(&mut engine, id, CityId(1), CityId(2), 1, 3);
        }
        let overflow_id = swiftex_core::WAREHOUSE_CAPACITY as u32 + 1;

        let err = engine.process_pickup_queue().unwrap_err();
        assert!(matches!(err, EngineError::Dispatch(swiftex_dispatch::DispatchError::HeapFull(_))));

        // The parcel that couldn't fit was never popped or mutated — it's
        // still exactly where processPickupQueue found it.
        assert_eq!(engine.track(overflow_id).unwrap().status, ParcelStatus::PickupQueue);
        assert_eq!(engine.list(ListFilter::Warehouse).len(), swiftex_core::WAREHOUSE_CAPACITY);
    }

    #[test]
    fn missing_report_covers_stale_warehouse_parcel_never_dispatched() {
        let mut engine = test_engine(0);
        register(&mut engine, 1, CityId(1), CityId(2), 10, 1);
        engine.process_pickup_queue().unwrap();
        assert!(engine.track(1).unwrap().status.is_warehouse());

        engine.clock().advance(swiftex_core::MISSING_THRESHOLD_SECONDS + 1);
        let missing = engine.missing_report();
        assert_eq!(missing, vec![1]);
        // Never went through the transit-list missing check, so the status
        // itself is untouched — the report is a master-list scan, not a
        // side effect of the tick.
        assert!(engine.track(1).unwrap().status.is_warehouse());
    }

    #[test]
    fn undo_reverses_dispatch_scenario_6() {
        let mut engine = test_engine(0);
        register(&mut engine, 1, CityId(1), CityId(2), 10, 1);
        engine.process_pickup_queue().unwrap();
        engine.dispatch();
        assert!(engine.view_fleet().iter().any(|r| r.current_load > 0));

        let outcome = engine.undo_last().unwrap();
        assert_eq!(outcome, Some(UndoOutcome::Reverted { parcel_id: 1, rider_id: 1 }));
        assert!(engine.view_fleet().iter().all(|r| r.current_load == 0));
        let parcel = engine.track(1).unwrap();
        assert!(parcel.status.is_warehouse());
    }

    #[test]
    fn block_induced_failure_scenario_4() {
        let mut engine = test_engine(0);
        // Sialkot(9) hangs off the graph by a single edge (Gujranwala-Sialkot),
        // so blocking it genuinely disconnects the parcel's destination.
        register(&mut engine, 1, CityId(1), CityId(9), 10, 1); // Lahore -> Sialkot
        engine.process_pickup_queue().unwrap();
        engine.dispatch();
        let duration = engine.track(1).unwrap().estimated_duration_secs;

        engine.set_road_status(CityId(10), CityId(9), RoadStatus::Blocked).unwrap();
        assert!(engine.track(1).unwrap().will_fail_on_path);

        engine.clock().advance((duration as f64 * 0.25).ceil() as u64);
        let parcel = engine.track(1).unwrap();
        assert!(parcel.status.is_warehouse(), "parcel should fail back to its source warehouse");
    }
}
