//! Unit tests for fleet-route.

use fleet_core::{AddressId, Minute, PackageId, VehicleId};
use fleet_grid::{AddressIndex, DistanceGrid, DistanceMatrix};
use fleet_plan::{ManifestSpec, Plan, PlanConfig};
use fleet_store::{Deadline, Package, PackageStatus, PackageStore};

use crate::{Route, RouteBuilder, RouteError, VehicleRoute};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// 18 distance units per hour — the reference vehicle speed.
const QUANTUM: f64 = 18.0 / 60.0;

/// HUB–A = 3, HUB–B = 5, A–B = 4, lower triangle only.
fn small_grid() -> DistanceGrid {
    let index = AddressIndex::from_names(["HUB", "A", "B"]).unwrap();
    let matrix = DistanceMatrix::from_rows(vec![
        vec![],
        vec![Some(3.0)],
        vec![Some(5.0), Some(4.0)],
    ])
    .unwrap();
    DistanceGrid::new(index, matrix).unwrap()
}

fn package(id: u32, address: &str, deadline: Deadline) -> Package {
    Package::new(PackageId(id), address, "SLC", "UT", "84101", deadline, 1, "")
}

fn store_of(packages: impl IntoIterator<Item = Package>) -> PackageStore {
    let mut store = PackageStore::new();
    for p in packages {
        store.insert(p).unwrap();
    }
    store
}

fn one_manifest_config(capacity: usize, focus: Option<Deadline>) -> PlanConfig {
    PlanConfig {
        capacity,
        manifests: vec![ManifestSpec { vehicle: VehicleId(1), deadline_focus: focus }],
        group_manifest: 0,
        delayed_manifest: 0,
        group_overrides: vec![],
    }
}

/// Drive `trip` for up to `minutes` ticks from minute 0, returning
/// `(package, delivery minute)` pairs in delivery order.
fn drive(
    trip:    &mut VehicleRoute,
    store:   &mut PackageStore,
    grid:    &DistanceGrid,
    minutes: u32,
) -> Vec<(PackageId, u32)> {
    let mut delivered = Vec::new();
    for m in 1..=minutes {
        if trip.returned() {
            break;
        }
        if let Some(id) = trip.tick(store, grid, Minute(m), QUANTUM).unwrap() {
            delivered.push((id, m));
        }
    }
    delivered
}

// ── Route ─────────────────────────────────────────────────────────────────────

mod route {
    use super::*;

    #[test]
    fn visits_stops_strictly_in_order() {
        let mut route = Route::new([
            (PackageId(1), AddressId(1)),
            (PackageId(2), AddressId(2)),
        ]);
        assert_eq!(route.next_stop().unwrap().package, PackageId(1));
        assert!(!route.all_visited());

        assert_eq!(route.visit_next().unwrap().package, PackageId(1));
        assert_eq!(route.next_stop().unwrap().package, PackageId(2));
        assert_eq!(route.visit_next().unwrap().package, PackageId(2));

        assert!(route.all_visited());
        assert!(route.visit_next().is_none());
        assert!(route.stops().iter().all(|s| s.visited));
    }

    #[test]
    fn total_distance_includes_both_hub_legs() {
        let grid = small_grid();
        let mut route = Route::new([
            (PackageId(1), AddressId(1)),
            (PackageId(2), AddressId(2)),
        ]);
        // hub→A (3) + A→B (4) + B→hub (5)
        assert_eq!(route.total_distance(&grid).unwrap(), 12.0);
        // Cached value on the second call.
        assert_eq!(route.total_distance(&grid).unwrap(), 12.0);
    }

    #[test]
    fn empty_route_has_zero_length() {
        let grid = small_grid();
        let mut route = Route::new([]);
        assert_eq!(route.total_distance(&grid).unwrap(), 0.0);
    }
}

// ── RouteBuilder::order ───────────────────────────────────────────────────────

mod order {
    use super::*;

    #[test]
    fn nearest_neighbor_from_hub() {
        let grid = small_grid();
        let store = store_of([
            package(1, "B", Deadline::EndOfDay),
            package(2, "A", Deadline::EndOfDay),
        ]);
        let route = RouteBuilder::new(&grid)
            .order(&store, vec![PackageId(1), PackageId(2)])
            .unwrap();

        // A (distance 3) before B (distance 5).
        let order: Vec<PackageId> = route.stops().iter().map(|s| s.package).collect();
        assert_eq!(order, vec![PackageId(2), PackageId(1)]);
    }

    #[test]
    fn equidistant_tie_breaks_to_lowest_id() {
        let grid = small_grid();
        // Both packages at the same address: distance ties exactly.
        let store = store_of([
            package(7, "A", Deadline::EndOfDay),
            package(3, "A", Deadline::EndOfDay),
        ]);
        let route = RouteBuilder::new(&grid)
            .order(&store, vec![PackageId(7), PackageId(3)])
            .unwrap();
        let order: Vec<PackageId> = route.stops().iter().map(|s| s.package).collect();
        assert_eq!(order, vec![PackageId(3), PackageId(7)]);
    }

    #[test]
    fn unknown_package_is_an_error() {
        let grid = small_grid();
        let store = store_of([]);
        assert!(matches!(
            RouteBuilder::new(&grid).order(&store, vec![PackageId(1)]),
            Err(RouteError::UnknownPackage(PackageId(1)))
        ));
    }
}

// ── RouteBuilder::top_up ──────────────────────────────────────────────────────

mod top_up {
    use super::*;

    #[test]
    fn fills_nearest_first_up_to_capacity() {
        let grid = small_grid();
        let store = store_of([
            package(1, "B", Deadline::EndOfDay),
            package(2, "A", Deadline::EndOfDay),
        ]);
        let config = one_manifest_config(1, None);
        let mut plan = Plan::empty(&config);

        RouteBuilder::new(&grid).top_up(&store, &mut plan, 0, None).unwrap();
        // Capacity 1: only the nearer package (A) fits.
        assert!(plan.manifests[0].contains(PackageId(2)));
        assert!(!plan.is_assigned(PackageId(1)));
    }

    #[test]
    fn deadline_focus_preempts_distance_then_falls_back() {
        let grid = small_grid();
        let morning = Deadline::By(Minute::hm(10, 30));
        let store = store_of([
            package(1, "A", Deadline::EndOfDay), // nearer, no deadline
            package(2, "B", morning),            // farther, deadline match
        ]);
        let config = one_manifest_config(16, Some(morning));
        let mut plan = Plan::empty(&config);

        RouteBuilder::new(&grid)
            .top_up(&store, &mut plan, 0, Some(morning))
            .unwrap();

        // The deadline package is taken first despite being farther, then
        // the fallback picks up the rest.
        let order: Vec<PackageId> = plan.manifests[0].iter().collect();
        assert_eq!(order, vec![PackageId(2), PackageId(1)]);
    }

    #[test]
    fn acceptance_pulls_in_colocated_siblings() {
        let grid = small_grid();
        let store = store_of([
            package(1, "A", Deadline::EndOfDay),
            package(2, "A", Deadline::EndOfDay),
            package(3, "B", Deadline::EndOfDay),
        ]);
        let config = one_manifest_config(2, None);
        let mut plan = Plan::empty(&config);

        RouteBuilder::new(&grid).top_up(&store, &mut plan, 0, None).unwrap();
        // Picking package 1 at A closes over package 2 at A; capacity 2 is
        // then exhausted before B is reached.
        assert!(plan.manifests[0].contains(PackageId(1)));
        assert!(plan.manifests[0].contains(PackageId(2)));
        assert!(!plan.is_assigned(PackageId(3)));
    }

    #[test]
    fn held_packages_are_never_selected() {
        let grid = small_grid();
        let mut store = store_of([package(9, "A", Deadline::EndOfDay)]);
        store.get_mut(PackageId(9)).unwrap().hold();
        let config = one_manifest_config(16, None);
        let mut plan = Plan::empty(&config);

        RouteBuilder::new(&grid).top_up(&store, &mut plan, 0, None).unwrap();
        assert!(plan.manifests[0].is_empty());
    }
}

// ── VehicleRoute ──────────────────────────────────────────────────────────────

mod vehicle_route {
    use super::*;

    #[test]
    fn dispatch_marks_packages_en_route() {
        let grid = small_grid();
        let mut store = store_of([package(1, "A", Deadline::EndOfDay)]);
        let route = Route::new([(PackageId(1), AddressId(1))]);

        let trip = VehicleRoute::dispatch(VehicleId(1), route, &grid, &mut store).unwrap();
        assert_eq!(
            store.get(PackageId(1)).unwrap().status(),
            PackageStatus::EnRoute(VehicleId(1))
        );
        assert!(!trip.returned());
        assert_eq!(trip.distance_to_next(), 3.0);
    }

    #[test]
    fn empty_route_cannot_be_dispatched() {
        let grid = small_grid();
        let mut store = store_of([]);
        assert!(matches!(
            VehicleRoute::dispatch(VehicleId(1), Route::new([]), &grid, &mut store),
            Err(RouteError::EmptyRoute)
        ));
    }

    #[test]
    fn reference_timing_scenario() {
        // HUB→A→B→HUB at 18 units/hour: A at 3/18 h = minute 10, B at
        // (3+4)/18 h = minute 23⅓ → the minute-24 tick, return after 12
        // total units = minute 40.
        let grid = small_grid();
        let mut store = store_of([
            package(1, "A", Deadline::EndOfDay),
            package(2, "B", Deadline::EndOfDay),
        ]);
        let route = RouteBuilder::new(&grid)
            .order(&store, vec![PackageId(1), PackageId(2)])
            .unwrap();
        let mut trip = VehicleRoute::dispatch(VehicleId(1), route, &grid, &mut store).unwrap();

        let delivered = drive(&mut trip, &mut store, &grid, 120);
        assert_eq!(delivered, vec![(PackageId(1), 10), (PackageId(2), 24)]);
        assert!(trip.returned());

        assert_eq!(store.get(PackageId(1)).unwrap().delivered_at(), Some(Minute(10)));
        assert_eq!(store.get(PackageId(2)).unwrap().delivered_at(), Some(Minute(24)));
        assert_eq!(trip.total_distance(&grid).unwrap(), 12.0);
    }

    #[test]
    fn returned_trip_is_inert() {
        let grid = small_grid();
        let mut store = store_of([package(1, "A", Deadline::EndOfDay)]);
        let route = Route::new([(PackageId(1), AddressId(1))]);
        let mut trip = VehicleRoute::dispatch(VehicleId(1), route, &grid, &mut store).unwrap();

        drive(&mut trip, &mut store, &grid, 120);
        assert!(trip.returned());
        let odometer = trip.distance_traveled();

        // Further ticks change nothing.
        assert!(trip.tick(&mut store, &grid, Minute(999), QUANTUM).unwrap().is_none());
        assert_eq!(trip.distance_traveled(), odometer);
    }

    #[test]
    fn route_coverage_matches_membership() {
        let grid = small_grid();
        let store = store_of([
            package(1, "A", Deadline::EndOfDay),
            package(2, "B", Deadline::EndOfDay),
        ]);
        let route = RouteBuilder::new(&grid)
            .order(&store, vec![PackageId(2), PackageId(1)])
            .unwrap();

        let mut seen: Vec<PackageId> = route.stops().iter().map(|s| s.package).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![PackageId(1), PackageId(2)]);
        assert_eq!(route.len(), 2);
    }
}
