//! `swiftex-dispatch` — riders, the priority warehouse heap, the undo log,
//! and the capacity-constrained dispatcher for SwiftEx.
//!
//! # Crate layout
//!
//! | Module        | Contents                                          |
//! |---------------|------------------------------------------------------|
//! | [`rider`]      | `Rider`, `VehicleKind`, `RiderState`, `Fleet`        |
//! | [`warehouse`]  | `Warehouse`, `HeapEntry` (priority heap)             |
//! | [`undo`]       | `UndoRecord`, `UndoLog`                              |
//! | [`dispatcher`] | The two-pass assignment algorithm                    |
//! | [`error`]      | `DispatchError`, `DispatchResult<T>`                 |

pub mod dispatcher;
pub mod error;
pub mod rider;
pub mod undo;
pub mod warehouse;

pub use dispatcher::{run as run_dispatch, DispatchOutcome};
pub use error::{DispatchError, DispatchResult};
pub use rider::{Fleet, Rider, RiderState, VehicleKind};
pub use undo::{UndoLog, UndoRecord};
pub use warehouse::{HeapEntry, Warehouse};
