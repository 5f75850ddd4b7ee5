//! `Partitioner` — ordered constraint rules plus the co-location closure.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use fleet_core::PackageId;
use fleet_store::PackageStore;

use crate::{Constraint, Manifest, PlanConfig, PlanResult};

/// The partitioning result: one [`Manifest`] per configured slot plus the
/// global assigned-id set.
///
/// The assigned set is what keeps manifests disjoint: a package enters it
/// the moment any manifest accepts it, and every rule, closure step, and
/// route-builder top-up consults it before considering a candidate.
#[derive(Debug)]
pub struct Plan {
    pub manifests: Vec<Manifest>,
    assigned:      FxHashSet<PackageId>,
}

impl Plan {
    /// Create an empty plan with one manifest per configured slot.
    pub fn empty(config: &PlanConfig) -> Self {
        Self {
            manifests: (0..config.manifests.len())
                .map(|_| Manifest::new(config.capacity))
                .collect(),
            assigned: FxHashSet::default(),
        }
    }

    /// `true` if `id` currently belongs to any manifest.
    #[inline]
    pub fn is_assigned(&self, id: PackageId) -> bool {
        self.assigned.contains(&id)
    }

    /// Assign `id` to `manifest`, then run the co-location closure: every
    /// at-hub, unassigned package sharing an accepted package's exact
    /// address joins the same manifest, transitively, until the worklist
    /// empties or the manifest fills.
    ///
    /// Returns `true` if the seed package itself was accepted.  All the
    /// silent-skip cases — unknown id, not at hub, already assigned, manifest
    /// full — return `false` and change nothing.
    pub fn assign(&mut self, store: &PackageStore, manifest: usize, id: PackageId) -> bool {
        debug_assert!(manifest < self.manifests.len(), "manifest index {manifest}");
        let Some(slot) = self.manifests.get_mut(manifest) else {
            return false;
        };

        let eligible = |assigned: &FxHashSet<PackageId>, id: PackageId| {
            store.get(id).is_some_and(|p| p.is_at_hub()) && !assigned.contains(&id)
        };

        if !eligible(&self.assigned, id) || slot.is_full() {
            return false;
        }

        // Worklist closure: pop an accepted id, pull in its co-located
        // siblings, repeat.  Bounded by the package count — each id is
        // accepted at most once.
        let mut worklist = VecDeque::from([id]);
        slot.insert(id);
        self.assigned.insert(id);

        while let Some(current) = worklist.pop_front() {
            // Package was just inserted, so the lookup cannot miss.
            let Some(address) = store.get(current).map(|p| p.address.as_str()) else {
                continue;
            };
            for sibling in store.iter() {
                if sibling.address == address
                    && eligible(&self.assigned, sibling.id)
                    && slot.insert(sibling.id)
                {
                    self.assigned.insert(sibling.id);
                    worklist.push_back(sibling.id);
                }
            }
        }

        true
    }
}

/// Applies the ordered constraint rules over all at-hub packages.
pub struct Partitioner {
    config: PlanConfig,
}

impl Partitioner {
    /// Validate the policy and build a partitioner.
    pub fn new(config: PlanConfig) -> PlanResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    /// Run the three rule passes and return the resulting [`Plan`].
    ///
    /// Rule order: grouped packages, fixed-vehicle packages, delayed
    /// packages.  Each pass scans the store in ascending id order and skips
    /// everything a previous pass (or its closure) already placed.  On-hold
    /// packages are invisible to every pass.
    pub fn partition(&self, store: &PackageStore) -> Plan {
        let mut plan = Plan::empty(&self.config);

        // ── Rule 1: "must ship together" ──────────────────────────────────
        for package in store.iter() {
            let grouped = self.config.group_overrides.contains(&package.id);
            match Constraint::parse(&package.note) {
                Constraint::DeliverWith(companions) => {
                    plan.assign(store, self.config.group_manifest, package.id);
                    for companion in companions {
                        plan.assign(store, self.config.group_manifest, companion);
                    }
                }
                _ if grouped => {
                    plan.assign(store, self.config.group_manifest, package.id);
                }
                _ => {}
            }
        }

        // ── Rule 2: fixed vehicle ─────────────────────────────────────────
        for package in store.iter() {
            if let Constraint::RequiresVehicle(vehicle) = Constraint::parse(&package.note) {
                if let Some(manifest) = self.config.vehicle_manifest(vehicle) {
                    plan.assign(store, manifest, package.id);
                }
            }
        }

        // ── Rule 3: delayed availability ──────────────────────────────────
        for package in store.iter() {
            if let Constraint::DelayedUntil(_) = Constraint::parse(&package.note) {
                plan.assign(store, self.config.delayed_manifest, package.id);
            }
        }

        plan
    }
}
