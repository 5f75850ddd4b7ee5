//! `RouteBuilder` — greedy nearest-neighbor manifest fill and stop ordering.
//!
//! Two passes share one selection kernel:
//!
//! - [`RouteBuilder::top_up`] extends a manifest toward capacity from the
//!   pool of at-hub, unassigned packages (the partitioner's leftovers),
//!   walking the frontier from the hub.
//! - [`RouteBuilder::order`] turns a frozen membership into an ordered
//!   [`Route`] by the same greedy walk.
//!
//! Both are deliberately O(N²): a full minimum-scan per accepted package.
//! At tens of packages the cost is irrelevant, and the exact greedy
//! acceptance order *is* the routing contract — replacing it with a
//! cleverer selection policy would change every delivery timestamp
//! downstream.  Equidistant candidates tie-break to the lowest package id
//! (the scan order of the store).

use fleet_core::{AddressId, PackageId};
use fleet_grid::DistanceGrid;
use fleet_plan::Plan;
use fleet_store::{Deadline, Package, PackageStore};

use crate::{Route, RouteError, RouteResult};

pub struct RouteBuilder<'a> {
    grid: &'a DistanceGrid,
}

impl<'a> RouteBuilder<'a> {
    pub fn new(grid: &'a DistanceGrid) -> Self {
        Self { grid }
    }

    /// Fill `manifest` toward capacity with nearest-neighbor selection over
    /// all at-hub, unassigned packages.
    ///
    /// With a `deadline_focus`, candidates sharing exactly that deadline are
    /// preferred until none remain, then selection falls back to the full
    /// pool.  Every acceptance runs the co-location closure (through
    /// [`Plan::assign`]), so one pick may pull in same-address siblings.
    pub fn top_up(
        &self,
        store:    &PackageStore,
        plan:     &mut Plan,
        manifest: usize,
        focus:    Option<Deadline>,
    ) -> RouteResult<()> {
        let mut frontier = self.grid.hub();

        while !plan.manifests[manifest].is_full() {
            let unassigned = |p: &&Package| p.is_at_hub() && !plan.is_assigned(p.id);

            // Deadline-focused pass first, falling back to the full pool.
            let mut chosen = match focus {
                Some(deadline) => self.nearest(
                    frontier,
                    store.iter().filter(unassigned).filter(|p| p.deadline == deadline),
                )?,
                None => None,
            };
            if chosen.is_none() {
                chosen = self.nearest(frontier, store.iter().filter(unassigned))?;
            }

            let Some((id, address)) = chosen else {
                break;
            };
            plan.assign(store, manifest, id);
            frontier = address;
        }

        Ok(())
    }

    /// Order `ids` into a frozen [`Route`] by the greedy walk from the hub.
    ///
    /// `ids` is a manifest's drained membership; each id must resolve in the
    /// store and its address in the grid.
    pub fn order(&self, store: &PackageStore, mut ids: Vec<PackageId>) -> RouteResult<Route> {
        // Scan in ascending id order so equidistant ties are deterministic.
        ids.sort_unstable();

        let mut remaining: Vec<(PackageId, AddressId)> = ids
            .into_iter()
            .map(|id| {
                let package = store.get(id).ok_or(RouteError::UnknownPackage(id))?;
                let address = self.grid.addresses.position_of(&package.address)?;
                Ok((id, address))
            })
            .collect::<RouteResult<_>>()?;

        let mut ordered = Vec::with_capacity(remaining.len());
        let mut frontier = self.grid.hub();

        while !remaining.is_empty() {
            let mut best = 0;
            let mut best_distance = f64::INFINITY;
            for (i, &(_, address)) in remaining.iter().enumerate() {
                let d = self.grid.distance(frontier, address)?;
                if d < best_distance {
                    best = i;
                    best_distance = d;
                }
            }
            let (id, address) = remaining.remove(best);
            frontier = address;
            ordered.push((id, address));
        }

        Ok(Route::new(ordered))
    }

    /// Nearest candidate to `from`, tie-broken by scan order.
    fn nearest<'p>(
        &self,
        from:       AddressId,
        candidates: impl Iterator<Item = &'p Package>,
    ) -> RouteResult<Option<(PackageId, AddressId)>> {
        let mut best: Option<(PackageId, AddressId)> = None;
        let mut best_distance = f64::INFINITY;

        for package in candidates {
            let address = self.grid.addresses.position_of(&package.address)?;
            let d = self.grid.distance(from, address)?;
            if d < best_distance {
                best = Some((package.id, address));
                best_distance = d;
            }
        }
        Ok(best)
    }
}
