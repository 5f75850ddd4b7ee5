//! The `Simulation` struct and its minute loop.

use fleet_core::{DayClock, Minute, PackageId, VehicleId};
use fleet_grid::DistanceGrid;
use fleet_plan::{Plan, PlanConfig};
use fleet_route::{RouteBuilder, VehicleRoute};
use fleet_store::{PackageStatus, PackageStore};

use crate::{Action, DispatchEntry, SimConfig, SimObserver, SimResult, Trigger};

/// A dispatch entry plus its fired flag.  Entries fire at most once.
#[derive(Debug)]
pub(crate) struct EntryState {
    entry: DispatchEntry,
    fired: bool,
}

/// The main simulation runner.
///
/// Owns the whole world state — grid, store, plan, schedule, active trips —
/// and drives the minute loop:
///
/// 1. **Fire** every un-fired dispatch entry whose trigger holds at the
///    current minute, repeating until none fire (a correction can arm a
///    re-dispatch in the same minute).
/// 2. **Stop** if the day is complete (all entries spent or dead, all trips
///    home) or the cutoff minute has been reached.
/// 3. **Advance** the clock by one minute, then move every active trip.
///
/// Events are stamped with the *post-advance* minute: a ten-minute leg
/// dispatched at 08:00 delivers at 08:10.  The cutoff is inclusive —
/// [`Simulation::run_until`] processes everything scheduled for the cutoff
/// minute itself and never overshoots it, which is what makes point-in-time
/// queries exact.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug)]
pub struct Simulation {
    pub(crate) config:      SimConfig,
    pub(crate) clock:       DayClock,
    pub(crate) grid:        DistanceGrid,
    pub(crate) store:       PackageStore,
    pub(crate) plan_config: PlanConfig,
    pub(crate) plan:        Plan,
    pub(crate) entries:     Vec<EntryState>,
    /// One slot per dispatch entry; `Some` once that entry has sent a trip
    /// out.  Non-dispatch entries never occupy their slot.
    pub(crate) trips:       Vec<Option<VehicleRoute>>,
    pub(crate) finished:    bool,
}

impl Simulation {
    pub(crate) fn new(
        config:      SimConfig,
        grid:        DistanceGrid,
        store:       PackageStore,
        plan_config: PlanConfig,
        plan:        Plan,
        entries:     Vec<DispatchEntry>,
    ) -> Self {
        let trips = (0..entries.len()).map(|_| None).collect();
        Self {
            clock: DayClock::new(config.start),
            config,
            grid,
            store,
            plan_config,
            plan,
            entries: entries
                .into_iter()
                .map(|entry| EntryState { entry, fired: false })
                .collect(),
            trips,
            finished: false,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current minute to the end of the working day.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        self.run_until(self.config.end_of_day, observer)
    }

    /// Run from the current minute up to and including `cutoff` (clamped to
    /// the end of day).
    ///
    /// Stops early once the day is complete.  Calling again with a later
    /// cutoff resumes where the previous call left off, so a caller can
    /// step through the day querying state at each stop.
    pub fn run_until<O: SimObserver>(&mut self, cutoff: Minute, observer: &mut O) -> SimResult<()> {
        let cutoff = cutoff.min(self.config.end_of_day);

        loop {
            let now = self.clock.current;
            self.fire_entries(now, observer)?;

            if self.day_complete() {
                if !self.finished {
                    self.finished = true;
                    observer.on_sim_end(now);
                }
                break;
            }
            if now >= cutoff {
                // Reaching end of day ends the run even with work pending.
                if cutoff == self.config.end_of_day && !self.finished {
                    self.finished = true;
                    observer.on_sim_end(now);
                }
                break;
            }

            self.clock.advance();
            observer.on_tick(self.clock.current);
            self.tick_trips(observer)?;
        }

        Ok(())
    }

    /// The current simulated minute.
    #[inline]
    pub fn now(&self) -> Minute {
        self.clock.current
    }

    /// `true` once every entry has fired (or gone dead) and every trip has
    /// returned to the hub.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.finished
    }

    pub fn store(&self) -> &PackageStore {
        &self.store
    }

    pub fn grid(&self) -> &DistanceGrid {
        &self.grid
    }

    // ── Minute phases ─────────────────────────────────────────────────────

    /// Fire every entry whose trigger holds at `now`, to a fixpoint.
    ///
    /// A single pass is not enough: a correction entry can re-admit a
    /// package that arms a `ReturnedWithPending` entry later in the list
    /// (or earlier — order within a minute is not part of the contract).
    /// Each pass fires at least one entry, so the loop is bounded by the
    /// entry count.
    fn fire_entries<O: SimObserver>(&mut self, now: Minute, observer: &mut O) -> SimResult<()> {
        loop {
            let mut fired_any = false;

            for i in 0..self.entries.len() {
                if self.entries[i].fired || !self.trigger_met(&self.entries[i].entry.trigger, now) {
                    continue;
                }
                self.entries[i].fired = true;
                fired_any = true;

                match self.entries[i].entry.action.clone() {
                    Action::Dispatch { manifest, vehicle } => {
                        self.dispatch_trip(i, manifest, vehicle, now, observer)?;
                    }
                    Action::CorrectAddress { package, new_address, manifest } => {
                        self.correct_address(package, &new_address, manifest, now, observer)?;
                    }
                }
            }

            if !fired_any {
                return Ok(());
            }
        }
    }

    /// Advance every active trip by one minute at the configured speed.
    ///
    /// Trips touch disjoint packages (manifests are disjoint by
    /// construction), so the iteration order here cannot affect any
    /// package's delivery minute.
    fn tick_trips<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current;
        let quantum = self.config.quantum();

        for trip in self.trips.iter_mut().flatten() {
            if trip.returned() {
                continue;
            }
            if let Some(package) = trip.tick(&mut self.store, &self.grid, now, quantum)? {
                observer.on_delivery(package, now);
            }
            if trip.returned() {
                observer.on_return(trip.vehicle(), now);
            }
        }
        Ok(())
    }

    // ── Actions ───────────────────────────────────────────────────────────

    fn dispatch_trip<O: SimObserver>(
        &mut self,
        slot:     usize,
        manifest: usize,
        vehicle:  VehicleId,
        now:      Minute,
        observer: &mut O,
    ) -> SimResult<()> {
        let focus = self.plan_config.manifests[manifest].deadline_focus;
        RouteBuilder::new(&self.grid).top_up(&self.store, &mut self.plan, manifest, focus)?;

        let ids = self.plan.manifests[manifest].drain();
        if ids.is_empty() {
            return Ok(());
        }
        let count = ids.len();

        let route = RouteBuilder::new(&self.grid).order(&self.store, ids)?;
        let trip = VehicleRoute::dispatch(vehicle, route, &self.grid, &mut self.store)?;

        observer.on_dispatch(vehicle, now, count);
        self.trips[slot] = Some(trip);
        Ok(())
    }

    fn correct_address<O: SimObserver>(
        &mut self,
        package:     PackageId,
        new_address: &str,
        manifest:    usize,
        now:         Minute,
        observer:    &mut O,
    ) -> SimResult<()> {
        self.store.update_address(package, new_address)?;
        if let Some(p) = self.store.get_mut(package) {
            if p.status() == PackageStatus::OnHold {
                p.release();
            }
        }
        self.plan.assign(&self.store, manifest, package);

        observer.on_correction(package, now);
        Ok(())
    }

    // ── Predicates ────────────────────────────────────────────────────────

    fn trigger_met(&self, trigger: &Trigger, now: Minute) -> bool {
        match *trigger {
            Trigger::At(minute) => now >= minute,
            Trigger::Returned { trip } => self.trip_done(trip),
            Trigger::ReturnedWithPending { trip, package } => {
                self.trip_done(trip)
                    && self.store.get(package).is_some_and(|p| p.is_at_hub())
            }
        }
    }

    /// A trigger that can never fire again, whatever happens.
    ///
    /// Only `ReturnedWithPending` can die: package status is monotonic, so
    /// once the package is en route or delivered the pending condition is
    /// gone for good.  Dead entries count as spent in the completion test —
    /// without this, a conditional re-dispatch whose package shipped on an
    /// earlier trip would keep the loop alive until end of day.
    fn trigger_dead(&self, trigger: &Trigger) -> bool {
        match *trigger {
            Trigger::ReturnedWithPending { package, .. } => {
                match self.store.get(package) {
                    None => true,
                    Some(p) => matches!(
                        p.status(),
                        PackageStatus::EnRoute(_) | PackageStatus::Delivered(_)
                    ),
                }
            }
            _ => false,
        }
    }

    /// `true` once the referenced dispatch entry has fired and its trip (if
    /// it created one) has returned.  A dispatch that found nothing to
    /// carry counts as done, so dependents are never stranded.
    fn trip_done(&self, trip: usize) -> bool {
        self.entries[trip].fired
            && self.trips[trip].as_ref().is_none_or(VehicleRoute::returned)
    }

    fn day_complete(&self) -> bool {
        self.entries
            .iter()
            .all(|e| e.fired || self.trigger_dead(&e.entry.trigger))
            && self.trips.iter().flatten().all(VehicleRoute::returned)
    }
}
