//! `swiftex-routing` — road graph, road status, and routing for SwiftEx.
//!
//! # Crate layout
//!
//! | Module    | Contents                                              |
//! |-----------|--------------------------------------------------------|
//! | [`graph`] | `CityGraph`, `City`, `Edge`, `RoadStatus`              |
//! | [`path`]  | `PathResult`, `shortest_path`, `alternative_path`      |
//! | [`error`] | `RoutingError`, `RoutingResult<T>`                     |

pub mod error;
pub mod graph;
pub mod path;

pub use error::{RoutingError, RoutingResult};
pub use graph::{City, CityGraph, Edge, RoadStatus};
pub use path::{alternative_path, shortest_path, PathResult};
