//! Routing-subsystem error type.

use swiftex_core::CityId;
use thiserror::Error;

/// Errors produced by `swiftex-routing`.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum RoutingError {
    #[error("city {0} is already registered")]
    DuplicateCity(CityId),

    #[error("city id {0:?} is out of range (MAX_CITIES)")]
    CityIdOutOfRange(CityId),

    #[error("city {0} is not registered")]
    CityNotFound(CityId),

    #[error("cities must be distinct")]
    SameCity,

    #[error("no direct road between {0} and {1}")]
    NoSuchRoad(CityId, CityId),
}

pub type RoutingResult<T> = Result<T, RoutingError>;
