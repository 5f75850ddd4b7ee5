//! Point-in-time queries over a paused or finished [`Simulation`].
//!
//! The minute loop never overshoots a cutoff, so everything here reads the
//! world exactly as it stood at [`Simulation::now`] — run to 10:30, query,
//! resume, query again.

use fleet_core::{Minute, PackageId};
use fleet_store::{Deadline, Package, PackageStatus};

use crate::{SimResult, Simulation};

/// An immutable copy of one package's state at query time.
///
/// Owned data, deliberately: a snapshot stays valid while the simulation
/// runs on, so callers can diff the same package across cutoffs.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackageSnapshot {
    pub id:           PackageId,
    pub address:      String,
    pub city:         String,
    pub state:        String,
    pub zipcode:      String,
    pub deadline:     Deadline,
    pub weight:       u32,
    pub note:         String,
    pub status:       PackageStatus,
    /// Delivery minute, or `None` until delivered.
    pub delivered_at: Option<Minute>,
}

impl PackageSnapshot {
    fn of(package: &Package) -> Self {
        Self {
            id:           package.id,
            address:      package.address.clone(),
            city:         package.city.clone(),
            state:        package.state.clone(),
            zipcode:      package.zipcode.clone(),
            deadline:     package.deadline,
            weight:       package.weight,
            note:         package.note.clone(),
            status:       package.status(),
            delivered_at: package.delivered_at(),
        }
    }
}

impl Simulation {
    /// Snapshot one package.  A miss is `None`, never an error.
    pub fn snapshot(&self, id: PackageId) -> Option<PackageSnapshot> {
        self.store.get(id).map(PackageSnapshot::of)
    }

    /// Snapshot every package, in ascending id order.
    pub fn snapshots(&self) -> Vec<PackageSnapshot> {
        self.store.iter().map(PackageSnapshot::of).collect()
    }

    /// Odometer sum over all dispatched trips: distance actually covered by
    /// minute ticks so far.
    pub fn distance_traveled(&self) -> f64 {
        self.trips.iter().flatten().map(|t| t.distance_traveled()).sum()
    }

    /// Planned length of every dispatched route, hub legs included.
    ///
    /// For a completed day this is the fleet's total mileage.
    pub fn total_distance(&mut self) -> SimResult<f64> {
        let mut total = 0.0;
        for trip in self.trips.iter_mut().flatten() {
            total += trip.total_distance(&self.grid)?;
        }
        Ok(total)
    }
}
