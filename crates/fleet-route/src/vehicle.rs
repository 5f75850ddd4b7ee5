//! `VehicleRoute` — one vehicle trip advanced minute by minute.

use fleet_core::{Minute, PackageId, VehicleId};
use fleet_grid::DistanceGrid;
use fleet_store::PackageStore;

use crate::{Route, RouteError, RouteResult};

/// Slack for the leg-countdown zero test.  Repeated subtraction of a
/// non-representable per-minute quantum (e.g. 18/60) leaves residues around
/// 1e-16 per step; without slack an exact arrival can miss its minute.
const ARRIVAL_EPS: f64 = 1e-9;

/// Per-trip simulation state: a frozen route, the countdown to the next
/// stop, and the cumulative odometer.
///
/// Lifecycle: created at dispatch (which freezes the route and marks every
/// package en-route), ticked once per simulated minute, terminal once the
/// post-last-stop hub leg completes.  A returned trip is never revived — a
/// vehicle going out again gets a new `VehicleRoute`.
#[derive(Debug)]
pub struct VehicleRoute {
    vehicle:           VehicleId,
    route:             Route,
    distance_to_next:  f64,
    distance_traveled: f64,
    returned:          bool,
}

impl VehicleRoute {
    /// Dispatch `vehicle` on `route`.
    ///
    /// Marks every routed package `EnRoute(vehicle)` and seeds the countdown
    /// with the hub→first-stop distance.  An empty route is an error: a trip
    /// with nothing to deliver should never be created.
    pub fn dispatch(
        vehicle: VehicleId,
        route:   Route,
        grid:    &DistanceGrid,
        store:   &mut PackageStore,
    ) -> RouteResult<Self> {
        let first = route.next_stop().ok_or(RouteError::EmptyRoute)?;
        let distance_to_next = grid.distance_from_hub(first.address)?;

        for stop in route.stops() {
            store
                .get_mut(stop.package)
                .ok_or(RouteError::UnknownPackage(stop.package))?
                .depart(vehicle);
        }

        Ok(Self {
            vehicle,
            route,
            distance_to_next,
            distance_traveled: 0.0,
            returned: false,
        })
    }

    #[inline]
    pub fn vehicle(&self) -> VehicleId {
        self.vehicle
    }

    /// `true` once the trip has completed its return-to-hub leg (terminal).
    #[inline]
    pub fn returned(&self) -> bool {
        self.returned
    }

    /// Distance covered so far on this trip.
    #[inline]
    pub fn distance_traveled(&self) -> f64 {
        self.distance_traveled
    }

    /// Remaining distance on the current leg.
    #[inline]
    pub fn distance_to_next(&self) -> f64 {
        self.distance_to_next
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Total planned length of the route (hub legs included), lazily cached.
    pub fn total_distance(&mut self, grid: &DistanceGrid) -> RouteResult<f64> {
        self.route.total_distance(grid)
    }

    /// Advance the trip by one simulated minute at `quantum` distance units
    /// per minute, delivering at most one package.
    ///
    /// When the leg countdown crosses zero the cursor's stop is visited, its
    /// package marked delivered at `now`, and the countdown re-seeds with
    /// the following leg — the negative remainder carries over, so arrival
    /// fractions are never lost.  After the last stop, the hub leg runs the
    /// same way and completing it makes the trip terminal.  Ticking a
    /// returned trip is a no-op.
    pub fn tick(
        &mut self,
        store: &mut PackageStore,
        grid:  &DistanceGrid,
        now:   Minute,
        quantum: f64,
    ) -> RouteResult<Option<PackageId>> {
        if self.returned {
            return Ok(None);
        }

        self.distance_to_next -= quantum;
        self.distance_traveled += quantum;

        if self.distance_to_next > ARRIVAL_EPS {
            return Ok(None);
        }

        if self.route.all_visited() {
            self.returned = true;
            return Ok(None);
        }

        // Arrived: deliver the cursor's stop and start the next leg.
        let (package, here) = {
            let stop = self.route.visit_next().ok_or(RouteError::EmptyRoute)?;
            (stop.package, stop.address)
        };
        store.mark_delivered(package, now)?;

        let next_leg = match self.route.next_stop() {
            Some(stop) => grid.distance(here, stop.address)?,
            None => grid.distance(here, grid.hub())?,
        };
        self.distance_to_next += next_leg;

        Ok(Some(package))
    }
}
