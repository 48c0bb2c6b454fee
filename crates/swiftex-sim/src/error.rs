//! Engine-level error type, composing the lower crates' errors.

use swiftex_dispatch::DispatchError;
use swiftex_parcel::ParcelError;
use swiftex_routing::RoutingError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum EngineError {
    #[error("parcel id {0} already exists")]
    DuplicateParcel(u32),

    #[error("parcel id {0} is not known to the tracking index")]
    UnknownParcel(u32),

    #[error("no route exists between source and destination")]
    NoRoute,

    #[error(transparent)]
    Validation(#[from] ParcelError),

    #[error(transparent)]
    Routing(#[from] RoutingError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

pub type EngineResult<T> = Result<T, EngineError>;
