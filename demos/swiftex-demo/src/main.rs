//! swiftex-demo — smallest example for the SwiftEx logistics engine.
//!
//! Registers a handful of parcels against the seed world, runs the pickup
//! and dispatch pipeline, blocks a road mid-flight, and advances the clock
//! to completion, printing a plain-text report at each stage.

use anyhow::Result;

use swiftex_core::{CityId, FixedClock, MAX_CITIES};
use swiftex_parcel::{ParcelStatus, RegistrationInput, RouteChoice};
use swiftex_sim::{EngineBuilder, ListFilter};

fn status_label(status: ParcelStatus) -> String {
    match status {
        ParcelStatus::Warehouse(city) => format!("Warehouse({city})"),
        other => format!("{other:?}"),
    }
}

const SEEDED_PARCELS: &[(u32, u16, u16, u32, u8)] = &[
    // id, source, destination, weight, priority_level
    (1, 1, 2, 10, 3),  // Lahore -> Islamabad, Low
    (2, 1, 2, 10, 1),  // Lahore -> Islamabad, High
    (3, 1, 5, 25, 2),  // Lahore -> Faisalabad, Med
    (4, 2, 7, 400, 2), // Islamabad -> Peshawar, Med (heavy — defers to the truck)
];

fn main() -> Result<()> {
    println!("=== swiftex-demo — SwiftEx logistics engine ===");
    println!();

    let mut engine = EngineBuilder::new().clock(FixedClock::new(0)).build();
    let city_count = (0..MAX_CITIES).filter(|&i| engine.graph().is_present(CityId(i as u16))).count();
    println!("Seed world: {} cities, fleet of {}", city_count, engine.view_fleet().len());
    println!();

    for &(id, source, destination, weight, priority_level) in SEEDED_PARCELS {
        let source = CityId(source);
        let destination = CityId(destination);
        let options = engine.preview_routes(source, destination)?;
        engine.register_parcel(
            RegistrationInput { id, source, destination, weight, priority_level },
            &options,
            RouteChoice::Recommended,
        )?;
        let source_name = engine.graph().city_name(source).unwrap_or("?");
        let dest_name = engine.graph().city_name(destination).unwrap_or("?");
        println!("Registered parcel {id}: {source_name} -> {dest_name}, {weight} kg");
    }
    println!();

    let moved = engine.process_pickup_queue()?;
    println!("Moved {moved} parcels from the pickup queue into the warehouse");

    let report = engine.dispatch();
    println!("Dispatch: {} assigned, {} deferred", report.assigned.len(), report.deferred.len());
    for (parcel_id, rider_id) in &report.assigned {
        println!("  parcel {parcel_id} -> rider {rider_id}");
    }
    for parcel_id in &report.deferred {
        println!("  parcel {parcel_id} deferred (no capable rider free)");
    }
    println!();

    println!("Blocking Lahore<->Islamabad to force a mid-flight reroute failure...");
    engine.set_road_status(CityId(1), CityId(2), swiftex_routing::RoadStatus::Blocked)?;

    let longest = engine
        .list(ListFilter::Transit)
        .iter()
        .map(|p| p.estimated_duration_secs)
        .max()
        .unwrap_or(0);
    engine.clock().advance(longest + 1);
    println!();

    println!("{:<6} {:<10} {:<18} {:<10}", "ID", "Priority", "Status", "Cost");
    println!("{}", "-".repeat(48));
    for parcel in engine.list(ListFilter::All) {
        let label = status_label(parcel.status);
        println!("{:<6} {:<10} {:<24} {:<10}", parcel.id, parcel.priority, label, parcel.cost);
    }
    println!();

    let analytics = engine.analytics();
    println!("Analytics: {:?}", analytics.counts_by_status);
    println!("Delivered cost total: {}", analytics.delivered_cost_total);

    Ok(())
}
