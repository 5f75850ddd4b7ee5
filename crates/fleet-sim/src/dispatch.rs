//! The dispatch plan: trigger/action pairs evaluated every minute.
//!
//! The day's schedule is *data*, not control flow.  Each [`DispatchEntry`]
//! pairs a [`Trigger`] (when) with an [`Action`] (what); the tick loop scans
//! un-fired entries each minute and fires the ones whose trigger holds.
//! Encoding the schedule this way means a new scenario — another vehicle,
//! a different correction time, a chained re-dispatch — is a config change,
//! not an engine change.

use fleet_core::{Minute, PackageId, VehicleId};

/// When an entry fires.
///
/// Each entry fires at most once.  `ReturnedWithPending` additionally goes
/// *dead* — permanently unfireable — once its package leaves the hub by any
/// other path, which the loop's completion test relies on.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trigger {
    /// Fire at this minute of day.
    At(Minute),

    /// Fire once the trip created by dispatch entry `trip` has returned to
    /// the hub.  An entry whose dispatch found nothing to carry counts as
    /// returned, so dependents are never stranded.
    Returned { trip: usize },

    /// Like `Returned`, but only while `package` is still waiting at the
    /// hub.  Dead once the package is en route or delivered.
    ReturnedWithPending { trip: usize, package: PackageId },
}

/// What an entry does when it fires.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Top up `manifest` to capacity, freeze its route, and send it out on
    /// `vehicle`.  If the manifest is empty even after the top-up, no trip
    /// is created and the entry completes silently.
    Dispatch { manifest: usize, vehicle: VehicleId },

    /// Overwrite `package`'s delivery address, release it if held, and
    /// assign it to `manifest` for a later dispatch.
    CorrectAddress {
        package:     PackageId,
        new_address: String,
        manifest:    usize,
    },
}

/// One line of the day's schedule.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DispatchEntry {
    pub trigger: Trigger,
    pub action:  Action,
}

impl DispatchEntry {
    pub fn at(time: Minute, action: Action) -> Self {
        Self { trigger: Trigger::At(time), action }
    }

    pub fn when_returned(trip: usize, action: Action) -> Self {
        Self { trigger: Trigger::Returned { trip }, action }
    }

    pub fn when_returned_with_pending(trip: usize, package: PackageId, action: Action) -> Self {
        Self { trigger: Trigger::ReturnedWithPending { trip, package }, action }
    }
}
