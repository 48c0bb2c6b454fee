//! Constants that form part of the SwiftEx public contract (`spec.md` §6).

/// Simulation speed used to derive a parcel's estimated transit duration
/// from its route distance: `estimated_duration = ceil(distance / SIM_SPEED_KM_PER_SEC)`.
pub const SIM_SPEED_KM_PER_SEC: u32 = 10;

/// Seconds of inactivity after which an in-transit parcel is declared MISSING.
pub const MISSING_THRESHOLD_SECONDS: u64 = 300;

/// Upper bound (exclusive) on registered city IDs.
pub const MAX_CITIES: usize = 100;

/// Hard ceiling on the warehouse priority heap. Exceeding it is reported,
/// never silently dropped.
pub const WAREHOUSE_CAPACITY: usize = 500;

/// Maximum number of entries `view_heap_preview` will return.
pub const HEAP_PREVIEW_MAX: usize = 10;

/// Size of the default fleet.
pub const FLEET_SIZE: usize = 5;

/// Fraction of `estimated_duration` that must elapse before a parcel known
/// to fail its route (`will_fail_on_path`) is returned to the warehouse.
/// Open Question (b): this is a simulation aesthetic, kept exactly 0.2 for
/// behavior parity rather than derived from anything physical.
pub const FAILURE_FRACTION_OF_DURATION: f64 = 0.2;
