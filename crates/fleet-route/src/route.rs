//! `Route` — a frozen, ordered sequence of delivery stops.

use fleet_core::{AddressId, PackageId};
use fleet_grid::DistanceGrid;

use crate::RouteResult;

/// One stop on a route: a package, its resolved address position, and a
/// monotonic visited flag.
///
/// Stops hold the package *identifier*, never a package reference — all
/// package mutation goes through the `PackageStore`, which is what makes
/// the one-writer-per-package invariant of the tick loop structural.
#[derive(Clone, Debug)]
pub struct RouteStop {
    pub package: PackageId,
    pub address: AddressId,
    pub visited: bool,
}

/// An ordered stop sequence with a visitation cursor.
///
/// Stops are visited strictly in order — [`Route::visit_next`] is the only
/// way to mark one visited, and it always takes the cursor's stop, so
/// out-of-order visitation is unrepresentable.  The total route length
/// (hub → stops → hub) is computed lazily on first request and cached.
#[derive(Debug)]
pub struct Route {
    stops:  Vec<RouteStop>,
    cursor: usize,
    length: Option<f64>,
}

impl Route {
    /// Freeze a route from ordered `(package, address)` pairs.
    pub fn new(stops: impl IntoIterator<Item = (PackageId, AddressId)>) -> Self {
        Self {
            stops: stops
                .into_iter()
                .map(|(package, address)| RouteStop { package, address, visited: false })
                .collect(),
            cursor: 0,
            length: None,
        }
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn stops(&self) -> &[RouteStop] {
        &self.stops
    }

    /// The next unvisited stop, or `None` once the route is exhausted.
    pub fn next_stop(&self) -> Option<&RouteStop> {
        self.stops.get(self.cursor)
    }

    /// `true` once every stop has been visited.
    #[inline]
    pub fn all_visited(&self) -> bool {
        self.cursor >= self.stops.len()
    }

    /// Mark the cursor's stop visited and advance, returning the stop.
    ///
    /// Returns `None` if the route is already exhausted.
    pub fn visit_next(&mut self) -> Option<&RouteStop> {
        let stop = self.stops.get_mut(self.cursor)?;
        debug_assert!(!stop.visited, "stop {} visited twice", stop.package);
        stop.visited = true;
        self.cursor += 1;
        Some(&self.stops[self.cursor - 1])
    }

    /// Total route length: hub → first stop → … → last stop → hub.
    ///
    /// Computed once over the distance grid and cached; an empty route has
    /// length 0.
    pub fn total_distance(&mut self, grid: &DistanceGrid) -> RouteResult<f64> {
        if let Some(length) = self.length {
            return Ok(length);
        }

        let mut length = 0.0;
        let mut position = grid.hub();
        for stop in &self.stops {
            length += grid.distance(position, stop.address)?;
            position = stop.address;
        }
        if !self.stops.is_empty() {
            length += grid.distance(position, grid.hub())?;
        }

        self.length = Some(length);
        Ok(length)
    }
}
