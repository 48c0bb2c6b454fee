//! `swiftex-core` — foundational types for the SwiftEx logistics engine.
//!
//! This crate is a dependency of every other `swiftex-*` crate. It
//! intentionally has no `swiftex-*` dependencies and a minimal external
//! one (`thiserror`, plus optional `serde`).
//!
//! # Crate layout
//!
//! | Module        | Contents                                           |
//! |---------------|-----------------------------------------------------|
//! | [`ids`]       | `CityId`, `RiderId`                                |
//! | [`clock`]     | `Clock` trait, `SystemClock`, `FixedClock`          |
//! | [`constants`] | Public contract constants (§6)                      |
//! | [`error`]     | `SwiftexError`, `SwiftexResult<T>`                  |

pub mod clock;
pub mod constants;
pub mod error;
pub mod ids;

pub use clock::{Clock, FixedClock, SystemClock};
pub use constants::{
    FAILURE_FRACTION_OF_DURATION, FLEET_SIZE, HEAP_PREVIEW_MAX, MAX_CITIES,
    MISSING_THRESHOLD_SECONDS, SIM_SPEED_KM_PER_SEC, WAREHOUSE_CAPACITY,
};
pub use error::{SwiftexError, SwiftexResult};
pub use ids::{CityId, RiderId};
