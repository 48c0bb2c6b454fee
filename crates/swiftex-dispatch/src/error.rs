//! Dispatch-subsystem error type.

use thiserror::Error;

/// Errors from the warehouse heap and dispatcher (`spec.md` §4.4, §7).
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DispatchError {
    #[error("warehouse heap is at capacity ({0} entries)")]
    HeapFull(usize),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
