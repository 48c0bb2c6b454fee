//! `swiftex-sim` — engine orchestration and command surface for SwiftEx.
//!
//! # Tick loop
//!
//! ```text
//! for each parcel in the transit list, in list order:
//!   ① Missing check  — InTransit and stale beyond MISSING_THRESHOLD → Missing.
//!   ② Blocked failure — willFailOnPath and past 20% of estimatedDuration
//!                        → back to its source Warehouse.
//!   ③ Completion      — elapsed >= estimatedDuration → Delivered / ReturnedToSender,
//!                        archived.
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|----------------------------------------------------------|
//! | [`engine`]    | `Engine<C>`, the tick loop, and the command surface      |
//! | [`builder`]   | `EngineBuilder`                                          |
//! | [`config`]    | `EngineConfig`, the seed world                           |
//! | [`tracking`]  | `TrackingIndex` (hash-indexed id → parcel lookup)        |
//! | [`report`]    | Owned report/snapshot types returned by commands         |
//! | [`error`]     | `EngineError`, `EngineResult<T>`                          |

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod report;
pub mod tracking;

pub use builder::EngineBuilder;
pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{EngineError, EngineResult};
pub use report::{AnalyticsReport, DispatchReport, ListFilter, UndoOutcome};
pub use tracking::TrackingIndex;
