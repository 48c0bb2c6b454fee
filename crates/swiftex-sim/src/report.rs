//! Owned report/snapshot types returned by the command surface.
//!
//! Every command returns data the caller owns outright — no reference into
//! engine state escapes a command call (`spec.md` §5: "hand out short-lived
//! references for read-only reporting" becomes, in the owned-snapshot style
//! the teacher's observer hooks use, "hand out owned snapshots instead").

use std::collections::BTreeMap;

use swiftex_parcel::{Parcel, ParcelStatus};

/// Filter applied by [`crate::Engine::list`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ListFilter {
    All,
    Transit,
    Warehouse,
}

/// The outcome of one `dispatch()` call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub assigned: Vec<(u32, u32)>,
    pub deferred: Vec<u32>,
}

/// The outcome of one `undo_last()` call.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum UndoOutcome {
    /// The dispatch was reverted; the parcel is back in the warehouse.
    Reverted { parcel_id: u32, rider_id: u32 },
    /// The record was consumed, but the parcel had already left the
    /// transit list (archived or reassigned) by the time undo ran.
    StaleRecord { parcel_id: u32 },
}

/// Totals by lifecycle status plus summed cost of delivered parcels
/// (`spec.md` §4.7).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalyticsReport {
    pub counts_by_status: BTreeMap<&'static str, u32>,
    pub delivered_cost_total: u64,
}

fn status_label(status: ParcelStatus) -> &'static str {
    match status {
        ParcelStatus::PickupQueue => "PickupQueue",
        ParcelStatus::Warehouse(_) => "Warehouse",
        ParcelStatus::InTransit => "InTransit",
        ParcelStatus::Returning => "Returning",
        ParcelStatus::Delivered => "Delivered",
        ParcelStatus::ReturnedToSender => "ReturnedToSender",
        ParcelStatus::Missing => "Missing",
        ParcelStatus::DeliveryFailed => "DeliveryFailed",
    }
}

impl AnalyticsReport {
    pub fn from_parcels<'a>(parcels: impl Iterator<Item = &'a Parcel>) -> Self {
        let mut counts_by_status = BTreeMap::new();
        let mut delivered_cost_total: u64 = 0;
        for parcel in parcels {
            *counts_by_status.entry(status_label(parcel.status)).or_insert(0) += 1;
            if parcel.status == ParcelStatus::Delivered {
                delivered_cost_total += parcel.cost as u64;
            }
        }
        AnalyticsReport { counts_by_status, delivered_cost_total }
    }
}
