//! Hash-indexed parcel lookup (`spec.md` §2, §4.7).

use rustc_hash::FxHashMap;

/// Maps parcel id to its slot in the engine's master parcel list.
///
/// `spec.md` calls for average-constant-time lookup; `FxHashMap` is the
/// teacher framework's choice for integer-keyed per-tick indices (there,
/// an opt-in `fx-hash` feature on the per-tick contact index). Promoted
/// here to a direct dependency since the tracking index is load-bearing
/// rather than an optional speedup.
#[derive(Clone, Debug, Default)]
pub struct TrackingIndex {
    slots: FxHashMap<u32, usize>,
}

impl TrackingIndex {
    pub fn new() -> Self {
        TrackingIndex { slots: FxHashMap::default() }
    }

    pub fn insert(&mut self, id: u32, slot: usize) {
        self.slots.insert(id, slot);
    }

    pub fn get(&self, id: u32) -> Option<usize> {
        self.slots.get(&id).copied()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.slots.contains_key(&id)
    }
}
