//! The `Parcel` entity and its lifecycle state machine.
//!
//! # Design
//!
//! Design Notes §9 asks for a "heterogeneous element hierarchy" (there:
//! rider vehicle types; the same guidance applies to a parcel's lifecycle
//! stage) to be reframed as tagged variants rather than a boolean-plus-string
//! pair. [`ParcelStatus`] is that tagged enum, in the spirit of the teacher
//! framework's `dt_core::TransportMode` and `dt_mobility::MovementState`
//! (there, `in_transit: bool` plus separate node fields; here, a proper sum
//! type since SwiftEx has more than two states).
//!
//! [`Parcel::set_status`] is the single mutation point for status changes,
//! so the testable property "every status transition stamps `last_update`
//! and strictly grows `history`" (`spec.md` §8) holds by construction.

use std::fmt;

use swiftex_core::CityId;

/// Shipment priority. Lower numeric level sorts first in the warehouse heap.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Priority {
    High = 1,
    Med = 2,
    Low = 3,
}

impl Priority {
    /// Parse the `{1, 2, 3}` levels `spec.md` §4.2 validates against.
    pub fn from_level(level: u8) -> Option<Priority> {
        match level {
            1 => Some(Priority::High),
            2 => Some(Priority::Med),
            3 => Some(Priority::Low),
            _ => None,
        }
    }

    pub fn level(self) -> u8 {
        self as u8
    }

    /// Priority fee (PKR) used by the cost formula (`spec.md` §4.2).
    pub fn fee(self) -> u32 {
        match self {
            Priority::High => 500,
            Priority::Med => 200,
            Priority::Low => 0,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::High => "High",
            Priority::Med => "Med",
            Priority::Low => "Low",
        };
        f.pad(s)
    }
}

/// Weight category derived from a parcel's weight (`spec.md` §3).
///
/// The thresholds are exactly as specified: `Light` at or below 50 kg,
/// `Heavy` at or below 150 kg, everything heavier is `Fragile`. The naming
/// is the original author's, not a typo — it is kept verbatim for behavior
/// parity.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeightCategory {
    Light,
    Heavy,
    Fragile,
}

impl WeightCategory {
    pub fn classify(weight: u32) -> Self {
        if weight <= 50 {
            WeightCategory::Light
        } else if weight <= 150 {
            WeightCategory::Heavy
        } else {
            WeightCategory::Fragile
        }
    }
}

impl fmt::Display for WeightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WeightCategory::Light => "Light",
            WeightCategory::Heavy => "Heavy",
            WeightCategory::Fragile => "Fragile",
        };
        f.pad(s)
    }
}

/// One append-only entry in a parcel's history log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryEvent {
    pub at: u64,
    pub message: String,
}

impl fmt::Display for HistoryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[t={}] {}", self.at, self.message)
    }
}

/// A parcel's current stage in the pipeline (`spec.md` §4.1).
///
/// `Warehouse(CityId)` carries the city it is waiting at so the display
/// label `"<source> Warehouse"` can be reconstructed without a second
/// lookup; it is always the parcel's own source city in this engine (a
/// parcel only ever returns to its own source warehouse).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParcelStatus {
    PickupQueue,
    Warehouse(CityId),
    InTransit,
    Returning,
    Delivered,
    ReturnedToSender,
    Missing,
    DeliveryFailed,
}

impl ParcelStatus {
    /// `true` for the four states `spec.md` §4.1 calls terminal.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            ParcelStatus::Delivered
                | ParcelStatus::ReturnedToSender
                | ParcelStatus::Missing
                | ParcelStatus::DeliveryFailed
        )
    }

    /// `true` if the parcel is sitting in a warehouse heap (any city).
    pub fn is_warehouse(self) -> bool {
        matches!(self, ParcelStatus::Warehouse(_))
    }
}

/// A shipment tracked through the SwiftEx pipeline.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parcel {
    pub id: u32,
    pub source: CityId,
    pub destination: CityId,
    pub weight: u32,
    pub priority: Priority,
    pub weight_category: WeightCategory,
    pub status: ParcelStatus,
    pub route: String,
    pub total_distance: u32,
    pub estimated_duration_secs: u64,
    pub created_at: u64,
    pub last_update: u64,
    pub dispatch_time: Option<u64>,
    pub assigned_rider: Option<String>,
    pub will_fail_on_path: bool,
    pub cost: u32,
    pub history: Vec<HistoryEvent>,
}

impl Parcel {
    /// Move to `status`, stamping `last_update` and appending a history
    /// event. The single mutation point for lifecycle transitions.
    pub fn set_status(&mut self, status: ParcelStatus, now: u64, message: impl Into<String>) {
        debug_assert!(now >= self.last_update, "clock must not move backwards");
        self.status = status;
        self.last_update = now;
        self.history.push(HistoryEvent { at: now, message: message.into() });
    }

    /// The assigned rider's name, or the literal `"None"` (`spec.md` §3).
    pub fn assigned_rider_display(&self) -> &str {
        self.assigned_rider.as_deref().unwrap_or("None")
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_category_boundaries() {
        assert_eq!(WeightCategory::classify(50), WeightCategory::Light);
        assert_eq!(WeightCategory::classify(51), WeightCategory::Heavy);
        assert_eq!(WeightCategory::classify(150), WeightCategory::Heavy);
        assert_eq!(WeightCategory::classify(151), WeightCategory::Fragile);
    }

    #[test]
    fn priority_levels_round_trip() {
        for level in 1u8..=3 {
            let p = Priority::from_level(level).unwrap();
            assert_eq!(p.level(), level);
        }
        assert!(Priority::from_level(0).is_none());
        assert!(Priority::from_level(4).is_none());
    }

    #[test]
    fn set_status_grows_history_and_bumps_last_update() {
        let mut p = Parcel {
            id: 1,
            source: CityId(0),
            destination: CityId(1),
            weight: 10,
            priority: Priority::Low,
            weight_category: WeightCategory::Light,
            status: ParcelStatus::PickupQueue,
            route: String::new(),
            total_distance: 0,
            estimated_duration_secs: 0,
            created_at: 0,
            last_update: 0,
            dispatch_time: None,
            assigned_rider: None,
            will_fail_on_path: false,
            cost: 0,
            history: vec![],
        };
        let before_len = p.history.len();
        p.set_status(ParcelStatus::Warehouse(CityId(0)), 10, "processed");
        assert_eq!(p.last_update, 10);
        assert_eq!(p.history.len(), before_len + 1);
        assert_eq!(p.assigned_rider_display(), "None");
    }
}
