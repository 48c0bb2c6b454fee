//! Parcel-subsystem error type.

use swiftex_core::CityId;
use thiserror::Error;

/// Errors from validating or registering a parcel (`spec.md` §4.2).
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ParcelError {
    #[error("source city {0} is not registered")]
    SourceNotFound(CityId),

    #[error("destination city {0} is not registered")]
    DestinationNotFound(CityId),

    #[error("source and destination must be distinct")]
    SameCity,

    #[error("weight must be in (0, 1000] kg")]
    WeightOutOfRange,

    #[error("priority must be 1 (High), 2 (Med), or 3 (Low)")]
    InvalidPriority,

    #[error("no route exists between source and destination")]
    NoRoute,
}

pub type ParcelResult<T> = Result<T, ParcelError>;
