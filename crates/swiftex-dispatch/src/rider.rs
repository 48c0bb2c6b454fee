//! Riders and the fixed fleet (`spec.md` §3, §4.4).

use std::fmt;

/// Vehicle label. Carries no behavior beyond display and the capacity a
/// [`Rider`] is constructed with — a tagged variant rather than a bare
/// string, per Design Notes §9.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleKind {
    Bike,
    Van,
    Truck,
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VehicleKind::Bike => "Bike",
            VehicleKind::Van => "Van",
            VehicleKind::Truck => "Truck",
        };
        f.pad(s)
    }
}

/// A rider's availability. Kept as a tagged variant in lockstep with
/// `currentLoad`; [`Rider::recompute_state`] is the single place the
/// invariant "Idle iff currentLoad = 0" is enforced.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiderState {
    Idle,
    Busy,
}

/// A vehicle+driver unit with a capacity budget (`spec.md` §3).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rider {
    pub id: u32,
    pub name: String,
    pub vehicle: VehicleKind,
    pub max_capacity: u32,
    pub current_load: u32,
    pub state: RiderState,
}

impl Rider {
    pub fn new(id: u32, name: impl Into<String>, vehicle: VehicleKind, max_capacity: u32) -> Self {
        Rider {
            id,
            name: name.into(),
            vehicle,
            max_capacity,
            current_load: 0,
            state: RiderState::Idle,
        }
    }

    pub fn can_carry(&self, weight: u32) -> bool {
        self.current_load + weight <= self.max_capacity
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, RiderState::Idle)
    }

    /// Add `weight` to the load and set state to Busy.
    pub fn load(&mut self, weight: u32) {
        self.current_load += weight;
        self.recompute_state();
    }

    /// Subtract `weight` from the load, clamped at 0, recomputing state.
    pub fn unload(&mut self, weight: u32) {
        self.current_load = self.current_load.saturating_sub(weight);
        self.recompute_state();
    }

    fn recompute_state(&mut self) {
        self.state = if self.current_load == 0 { RiderState::Idle } else { RiderState::Busy };
    }
}

/// The fixed, ordered fleet. Ordering is load-bearing: smaller-capacity
/// vehicles come first so the dispatcher's first pass prefers them
/// (`spec.md` §4.4).
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fleet {
    riders: Vec<Rider>,
}

impl Fleet {
    pub fn new() -> Self {
        Fleet { riders: Vec::new() }
    }

    pub fn add(&mut self, rider: Rider) {
        self.riders.push(rider);
    }

    pub fn riders(&self) -> &[Rider] {
        &self.riders
    }

    pub fn riders_mut(&mut self) -> &mut [Rider] {
        &mut self.riders
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Rider> {
        self.riders.iter_mut().find(|r| r.id == id)
    }

    /// Reset every rider to Idle with zero load. Does not touch parcels
    /// (`spec.md` §4.7, `resetDay`).
    pub fn reset_day(&mut self) {
        for r in &mut self.riders {
            r.current_load = 0;
            r.state = RiderState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_flips_idle_to_busy_and_back() {
        let mut r = Rider::new(1, "R1", VehicleKind::Bike, 50);
        assert!(r.is_idle());
        r.load(30);
        assert!(!r.is_idle());
        assert_eq!(r.current_load, 30);
        r.unload(30);
        assert!(r.is_idle());
        assert_eq!(r.current_load, 0);
    }

    #[test]
    fn unload_clamps_at_zero() {
        let mut r = Rider::new(1, "R1", VehicleKind::Bike, 50);
        r.load(10);
        r.unload(100);
        assert_eq!(r.current_load, 0);
        assert!(r.is_idle());
    }

    #[test]
    fn can_carry_respects_existing_load() {
        let mut r = Rider::new(1, "R1", VehicleKind::Van, 200);
        r.load(150);
        assert!(r.can_carry(50));
        assert!(!r.can_carry(51));
    }
}
