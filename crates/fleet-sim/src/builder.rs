//! Fluent builder for constructing a [`Simulation`].

use fleet_core::{AddressId, PackageId};
use fleet_grid::DistanceGrid;
use fleet_plan::{Partitioner, PlanConfig};
use fleet_store::{PackageStatus, PackageStore};

use crate::{Action, DispatchEntry, SimConfig, SimError, SimResult, Simulation, Trigger};

/// Fluent builder for [`Simulation`].
///
/// # Required inputs
///
/// - [`SimConfig`] — clock bounds and fleet speed
/// - [`DistanceGrid`] — addresses plus the half-matrix of distances
/// - [`PackageStore`] — all packages, freshly loaded (everything at hub)
/// - [`PlanConfig`] — the partitioning policy
///
/// # Optional inputs
///
/// | Method        | Effect                                              |
/// |---------------|-----------------------------------------------------|
/// | `.entries(v)` | The day's dispatch schedule (default: empty)        |
/// | `.entry(e)`   | Append one schedule entry                           |
/// | `.hold(id)`   | Place a package on hold before partitioning         |
///
/// `build` front-loads every failure mode: dispatch entries are
/// cross-checked, every address the day can possibly drive to is resolved
/// against the grid, and the pairwise distances between them are probed.
/// A simulation that builds cannot fail a distance lookup mid-run.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default(), grid, store, policy)
///     .entries(schedule)
///     .hold(PackageId(9))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:      SimConfig,
    grid:        DistanceGrid,
    store:       PackageStore,
    plan_config: PlanConfig,
    entries:     Vec<DispatchEntry>,
    holds:       Vec<PackageId>,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(
        config:      SimConfig,
        grid:        DistanceGrid,
        store:       PackageStore,
        plan_config: PlanConfig,
    ) -> Self {
        Self {
            config,
            grid,
            store,
            plan_config,
            entries: Vec::new(),
            holds:   Vec::new(),
        }
    }

    /// Supply the day's dispatch schedule, replacing any entries added so
    /// far.
    pub fn entries(mut self, entries: Vec<DispatchEntry>) -> Self {
        self.entries = entries;
        self
    }

    /// Append one schedule entry.
    pub fn entry(mut self, entry: DispatchEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Place `id` on hold before the constraint rules run, making it
    /// invisible to partitioning and route fill until a correction entry
    /// releases it.
    pub fn hold(mut self, id: PackageId) -> Self {
        self.holds.push(id);
        self
    }

    /// Validate everything, partition the store, and return a ready-to-run
    /// [`Simulation`].
    pub fn build(mut self) -> SimResult<Simulation> {
        if self.config.end_of_day <= self.config.start {
            return Err(SimError::Config(format!(
                "end of day {} is not after start {}",
                self.config.end_of_day, self.config.start
            )));
        }
        if self.config.speed <= 0.0 {
            return Err(SimError::Config(format!(
                "vehicle speed {} is not positive",
                self.config.speed
            )));
        }

        let partitioner = Partitioner::new(self.plan_config.clone())?;

        self.validate_entries()?;
        self.check_coverage()?;

        // ── Apply initial holds ───────────────────────────────────────────
        for &id in &self.holds {
            let package = self
                .store
                .get_mut(id)
                .ok_or_else(|| SimError::Config(format!("hold target {id} is not in the store")))?;
            if package.status() != PackageStatus::AtHub {
                return Err(SimError::Config(format!(
                    "hold target {id} is not at the hub"
                )));
            }
            package.hold();
        }

        let plan = partitioner.partition(&self.store);

        Ok(Simulation::new(
            self.config,
            self.grid,
            self.store,
            self.plan_config,
            plan,
            self.entries,
        ))
    }

    // ── Validation ────────────────────────────────────────────────────────

    /// Cross-check the dispatch schedule against the policy, the store, and
    /// itself.
    fn validate_entries(&self) -> SimResult<()> {
        let manifests = self.plan_config.manifests.len();

        for (i, entry) in self.entries.iter().enumerate() {
            let manifest = match entry.action {
                Action::Dispatch { manifest, .. } => manifest,
                Action::CorrectAddress { manifest, package, .. } => {
                    if self.store.get(package).is_none() {
                        return Err(SimError::Config(format!(
                            "entry {i}: correction target {package} is not in the store"
                        )));
                    }
                    manifest
                }
            };
            if manifest >= manifests {
                return Err(SimError::Config(format!(
                    "entry {i}: manifest index {manifest} out of range for {manifests} manifests"
                )));
            }

            let trip = match entry.trigger {
                Trigger::At(_) => continue,
                Trigger::Returned { trip } => trip,
                Trigger::ReturnedWithPending { trip, package } => {
                    if self.store.get(package).is_none() {
                        return Err(SimError::Config(format!(
                            "entry {i}: pending package {package} is not in the store"
                        )));
                    }
                    trip
                }
            };
            // A self-reference would validate but never fire, silently
            // holding the day open until the end-of-day cutoff.
            if trip == i {
                return Err(SimError::Config(format!(
                    "entry {i}: trigger references its own trip"
                )));
            }
            match self.entries.get(trip).map(|e| &e.action) {
                Some(Action::Dispatch { .. }) => {}
                _ => {
                    return Err(SimError::Config(format!(
                        "entry {i}: trigger references entry {trip}, which is not a dispatch"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Resolve every address the day can drive to and probe all pairwise
    /// distances, so no lookup can fail once the clock is running.
    ///
    /// Covered: the hub, every package address, and every correction
    /// entry's target address.
    fn check_coverage(&self) -> SimResult<()> {
        let mut addresses: Vec<AddressId> = vec![self.grid.hub()];
        let note = |addresses: &mut Vec<AddressId>, id: AddressId| {
            if !addresses.contains(&id) {
                addresses.push(id);
            }
        };

        for package in self.store.iter() {
            note(&mut addresses, self.grid.addresses.position_of(&package.address)?);
        }
        for entry in &self.entries {
            if let Action::CorrectAddress { new_address, .. } = &entry.action {
                note(&mut addresses, self.grid.addresses.position_of(new_address)?);
            }
        }

        for (i, &a) in addresses.iter().enumerate() {
            for &b in &addresses[i + 1..] {
                self.grid.distance(a, b)?;
            }
        }
        Ok(())
    }
}
