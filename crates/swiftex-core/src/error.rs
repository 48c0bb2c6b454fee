//! Shared error type for crates that don't need a richer local error enum.

use thiserror::Error;

use crate::CityId;

/// A small set of errors common across SwiftEx crates.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SwiftexError {
    #[error("city {0} is not registered")]
    CityNotFound(CityId),

    #[error("no direct road between {0} and {1}")]
    NoSuchRoad(CityId, CityId),
}

pub type SwiftexResult<T> = Result<T, SwiftexError>;
