//! `swiftex-parcel` — the parcel entity, its lifecycle state machine, and
//! registration validation for SwiftEx.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                |
//! |----------------|----------------------------------------------------------|
//! | [`parcel`]      | `Parcel`, `ParcelStatus`, `Priority`, `WeightCategory`   |
//! | [`registration`]| Field validation, route selection, the cost formula      |
//! | [`error`]       | `ParcelError`, `ParcelResult<T>`                          |

pub mod error;
pub mod parcel;
pub mod registration;

pub use error::{ParcelError, ParcelResult};
pub use parcel::{HistoryEvent, Parcel, ParcelStatus, Priority, WeightCategory};
pub use registration::{
    build_parcel, compute_cost, estimated_duration_secs, validate, RegistrationInput, RouteChoice,
    RouteOptions,
};
