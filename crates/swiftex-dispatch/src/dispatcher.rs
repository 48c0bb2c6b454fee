//! The capacity-constrained two-pass dispatcher (`spec.md` §4.4).
//!
//! The dispatcher only knows about riders, the warehouse heap, and the undo
//! log — it has no view of a `Parcel`'s full field set. It reports each
//! extracted parcel's outcome (assigned to a rider, or deferred) and leaves
//! the corresponding parcel mutation (status, history, transit-list
//! placement) to the caller, which owns the master parcel list.

use crate::rider::Fleet;
use crate::undo::{UndoLog, UndoRecord};
use crate::warehouse::{HeapEntry, Warehouse};

/// The result of extracting one parcel from the warehouse heap during a
/// dispatch run.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DispatchOutcome {
    Assigned { parcel_id: u32, rider_id: u32 },
    Deferred { parcel_id: u32 },
}

/// Drain the warehouse heap, assigning each parcel to a rider where
/// capacity allows and deferring the rest, then refill the heap with the
/// deferred parcels (`spec.md` §4.4).
pub fn run(fleet: &mut Fleet, warehouse: &mut Warehouse, undo: &mut UndoLog) -> Vec<DispatchOutcome> {
    let mut outcomes = Vec::new();
    let mut deferred: Vec<HeapEntry> = Vec::new();

    while let Some(entry) = warehouse.pop() {
        if let Some(rider_id) = find_idle_capable(fleet, entry.weight) {
            assign(fleet, undo, &mut outcomes, entry, rider_id);
        } else if let Some(rider_id) = find_any_capable(fleet, entry.weight) {
            assign(fleet, undo, &mut outcomes, entry, rider_id);
        } else {
            outcomes.push(DispatchOutcome::Deferred { parcel_id: entry.parcel_id });
            deferred.push(entry);
        }
    }

    for entry in deferred {
        let _ = warehouse.push(entry);
    }

    outcomes
}

fn find_idle_capable(fleet: &Fleet, weight: u32) -> Option<u32> {
    fleet.riders().iter().find(|r| r.is_idle() && r.can_carry(weight)).map(|r| r.id)
}

fn find_any_capable(fleet: &Fleet, weight: u32) -> Option<u32> {
    fleet.riders().iter().find(|r| r.can_carry(weight)).map(|r| r.id)
}

fn assign(fleet: &mut Fleet, undo: &mut UndoLog, outcomes: &mut Vec<DispatchOutcome>, entry: HeapEntry, rider_id: u32) {
    if let Some(rider) = fleet.get_mut(rider_id) {
        rider.load(entry.weight);
    }
    undo.push(UndoRecord::Dispatch { parcel_id: entry.parcel_id, rider_id, weight: entry.weight });
    outcomes.push(DispatchOutcome::Assigned { parcel_id: entry.parcel_id, rider_id });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rider::{Rider, VehicleKind};
    use swiftex_parcel::Priority;

    fn seed_fleet() -> Fleet {
        let mut fleet = Fleet::new();
        fleet.add(Rider::new(1, "Bike-1", VehicleKind::Bike, 50));
        fleet.add(Rider::new(2, "Bike-2", VehicleKind::Bike, 50));
        fleet.add(Rider::new(3, "Van-1", VehicleKind::Van, 200));
        fleet.add(Rider::new(4, "Van-2", VehicleKind::Van, 200));
        fleet.add(Rider::new(5, "Truck-1", VehicleKind::Truck, 1000));
        fleet
    }

    fn entry(id: u32, priority: Priority, weight: u32) -> HeapEntry {
        HeapEntry { parcel_id: id, priority, weight }
    }

    #[test]
    fn prefers_idle_small_vehicle_over_large() {
        let mut fleet = seed_fleet();
        let mut warehouse = Warehouse::new();
        let mut undo = UndoLog::new();
        warehouse.push(entry(1, Priority::High, 30)).unwrap();

        let outcomes = run(&mut fleet, &mut warehouse, &mut undo);
        assert_eq!(outcomes, vec![DispatchOutcome::Assigned { parcel_id: 1, rider_id: 1 }]);
        assert_eq!(undo.len(), 1);
    }

    #[test]
    fn capacity_deferral_scenario_3() {
        let mut fleet = seed_fleet();
        let mut warehouse = Warehouse::new();
        let mut undo = UndoLog::new();
        warehouse.push(entry(1, Priority::High, 1000)).unwrap();
        warehouse.push(entry(2, Priority::High, 180)).unwrap();
        warehouse.push(entry(3, Priority::High, 500)).unwrap();

        let outcomes = run(&mut fleet, &mut warehouse, &mut undo);
        let assigned: Vec<_> = outcomes
            .iter()
            .filter_map(|o| match o {
                DispatchOutcome::Assigned { parcel_id, .. } => Some(*parcel_id),
                _ => None,
            })
            .collect();
        let deferred: Vec<_> = outcomes
            .iter()
            .filter_map(|o| match o {
                DispatchOutcome::Deferred { parcel_id } => Some(*parcel_id),
                _ => None,
            })
            .collect();

        assert_eq!(assigned.len(), 2);
        assert!(assigned.contains(&1));
        assert!(assigned.contains(&2));
        assert_eq!(deferred, vec![3]);
        assert_eq!(warehouse.len(), 1, "deferred parcel must be reinserted into the heap");
    }

    #[test]
    fn second_pass_consolidates_onto_busy_vehicle() {
        let mut fleet = seed_fleet();
        let mut warehouse = Warehouse::new();
        let mut undo = UndoLog::new();

        // Saturate every rider's idle availability first, leaving bike-1 with
        // 40kg of spare capacity and every other rider exactly full. The
        // High-priority 10kg entry pops before the Med-priority ones so it
        // claims bike-1 while it's still idle.
        warehouse.push(entry(1, Priority::High, 10)).unwrap();
        warehouse.push(entry(2, Priority::Med, 50)).unwrap();
        warehouse.push(entry(3, Priority::Med, 200)).unwrap();
        warehouse.push(entry(4, Priority::Med, 200)).unwrap();
        warehouse.push(entry(5, Priority::Med, 1000)).unwrap();
        run(&mut fleet, &mut warehouse, &mut undo);
        assert!(fleet.riders().iter().all(|r| !r.is_idle()));

        warehouse.push(entry(6, Priority::High, 30)).unwrap();
        let outcomes = run(&mut fleet, &mut warehouse, &mut undo);
        assert_eq!(outcomes, vec![DispatchOutcome::Assigned { parcel_id: 6, rider_id: 1 }]);
    }
}
