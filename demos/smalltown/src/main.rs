//! smalltown — a one-day delivery scenario for the rust_fleet engine.
//!
//! Twelve packages, nine addresses, three vehicles running at 18 mph.
//! The day exercises every scheduling mechanism: a deadline-focused first
//! trip at 08:00, a fixed-vehicle trip once the delayed freight lands at
//! 09:05, a third trip chained to the first vehicle's return, and a
//! mid-morning address correction that sends vehicle 3 out again.

use std::io::Cursor;
use std::time::Instant;

use anyhow::Result;

use fleet_core::{Minute, PackageId, VehicleId};
use fleet_grid::load_grid_reader;
use fleet_plan::{ManifestSpec, PlanConfig};
use fleet_sim::{Action, DispatchEntry, SimBuilder, SimConfig, SimObserver};
use fleet_store::{Deadline, load_packages_reader};

// ── Constants ─────────────────────────────────────────────────────────────────

const SPEED_MPH:       f64 = 18.0;
const CAPACITY:        usize = 16;
const MORNING_DEADLINE: Minute = Minute::hm(10, 30);

// ── Scenario data ─────────────────────────────────────────────────────────────

// First row is the hub.  "300 State St" exists only to be wrong: package 9
// lists it until the 10:20 correction.
const ADDRESS_CSV: &str = "\
Western Hills Depot\n\
195 W Oakland Ave\n\
2530 S 500 E\n\
233 Canyon Rd\n\
380 W 2880 S\n\
410 S State St\n\
3060 Lester St\n\
1330 2100 S\n\
300 State St\n\
";

// Lower triangle in miles, aligned to the address list above.
const DISTANCE_CSV: &str = "\
0\n\
7.2,0\n\
3.8,7.1,0\n\
11.0,6.4,9.2,0\n\
2.2,6.0,4.1,5.6,0\n\
3.5,4.8,2.8,6.9,4.3,0\n\
10.9,1.6,8.6,8.7,4.4,6.0,0\n\
8.6,2.8,6.3,4.0,7.5,5.3,3.0,0\n\
5.2,4.9,3.2,7.8,4.6,0.6,6.2,5.5,0\n\
";

const PACKAGE_CSV: &str = "\
1,195 W Oakland Ave,Murray,UT,84107,10:30 AM,21,\n\
2,2530 S 500 E,Salt Lake City,UT,84106,EOD,44,\n\
3,233 Canyon Rd,Salt Lake City,UT,84103,EOD,2,Can only be on truck 2\n\
4,380 W 2880 S,Salt Lake City,UT,84115,EOD,4,\n\
5,410 S State St,Salt Lake City,UT,84111,10:30 AM,5,\n\
6,3060 Lester St,West Valley City,UT,84119,10:30 AM,88,Delayed on flight---will not arrive to depot until 9:05 am\n\
7,1330 2100 S,Salt Lake City,UT,84106,EOD,8,\n\
8,233 Canyon Rd,Salt Lake City,UT,84103,EOD,9,\n\
9,300 State St,Salt Lake City,UT,84103,EOD,2,Wrong address listed\n\
10,380 W 2880 S,Salt Lake City,UT,84115,EOD,1,Must be delivered with 11\n\
11,2530 S 500 E,Salt Lake City,UT,84106,EOD,1,\n\
12,1330 2100 S,Salt Lake City,UT,84106,EOD,9,Delayed on flight---will not arrive to depot until 9:05 am\n\
";

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints a timestamped line per event.
#[derive(Default)]
struct EventLog {
    deliveries: usize,
}

impl SimObserver for EventLog {
    fn on_dispatch(&mut self, vehicle: VehicleId, now: Minute, packages: usize) {
        println!("{now}  vehicle {} departs with {packages} packages", vehicle.0);
    }
    fn on_delivery(&mut self, package: PackageId, now: Minute) {
        self.deliveries += 1;
        println!("{now}  delivered package {}", package.0);
    }
    fn on_return(&mut self, vehicle: VehicleId, now: Minute) {
        println!("{now}  vehicle {} back at the hub", vehicle.0);
    }
    fn on_correction(&mut self, package: PackageId, now: Minute) {
        println!("{now}  address corrected for package {}", package.0);
    }
    fn on_sim_end(&mut self, now: Minute) {
        println!("{now}  day complete");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== smalltown — rust_fleet delivery day ===");
    println!();

    // 1. Load geography and packages from the embedded CSVs.
    let grid = load_grid_reader(Cursor::new(ADDRESS_CSV), Cursor::new(DISTANCE_CSV))?;
    let store = load_packages_reader(Cursor::new(PACKAGE_CSV))?;
    println!(
        "Loaded {} addresses, {} packages",
        grid.addresses.len(),
        store.len()
    );

    // 2. Partitioning policy: manifest 0 chases the 10:30 deadlines,
    //    manifest 1 belongs to truck 2, manifest 2 collects the delayed
    //    freight.
    let policy = PlanConfig {
        capacity: CAPACITY,
        manifests: vec![
            ManifestSpec {
                vehicle:        VehicleId(1),
                deadline_focus: Some(Deadline::By(MORNING_DEADLINE)),
            },
            ManifestSpec { vehicle: VehicleId(2), deadline_focus: None },
            ManifestSpec { vehicle: VehicleId(3), deadline_focus: None },
        ],
        group_manifest:   0,
        delayed_manifest: 2,
        group_overrides:  vec![],
    };

    // 3. The day's schedule.
    let schedule = vec![
        // 08:00 — vehicle 1 takes the grouped and deadline packages.
        DispatchEntry::at(
            Minute::hm(8, 0),
            Action::Dispatch { manifest: 0, vehicle: VehicleId(1) },
        ),
        // 09:05 — the delayed freight has landed; truck 2's manifest goes out.
        DispatchEntry::at(
            Minute::hm(9, 5),
            Action::Dispatch { manifest: 1, vehicle: VehicleId(2) },
        ),
        // Vehicle 3 waits for vehicle 1's return before taking the rest.
        DispatchEntry::when_returned(
            0,
            Action::Dispatch { manifest: 2, vehicle: VehicleId(3) },
        ),
        // 10:20 — dispatch learns package 9's real address.
        DispatchEntry::at(
            Minute::hm(10, 20),
            Action::CorrectAddress {
                package:     PackageId(9),
                new_address: "410 S State St".into(),
                manifest:    2,
            },
        ),
        // Vehicle 3 goes out again for the corrected package, unless it
        // already shipped.
        DispatchEntry::when_returned_with_pending(
            2,
            PackageId(9),
            Action::Dispatch { manifest: 2, vehicle: VehicleId(3) },
        ),
    ];

    // 4. Build: package 9 starts on hold until its correction lands.
    let config = SimConfig {
        start:      Minute::hm(8, 0),
        end_of_day: Minute::hm(17, 0),
        speed:      SPEED_MPH,
    };
    let mut sim = SimBuilder::new(config, grid, store, policy)
        .entries(schedule)
        .hold(PackageId(9))
        .build()?;

    // 5. Run the day.
    println!();
    let mut log = EventLog::default();
    let t0 = Instant::now();
    sim.run(&mut log)?;
    let elapsed = t0.elapsed();
    println!();
    println!(
        "Simulated {} minutes in {:.3} ms",
        sim.now() - config.start,
        elapsed.as_secs_f64() * 1e3
    );
    println!();

    // 6. Final report.
    println!(
        "{:<4} {:<22} {:<9} {:<28}",
        "Pkg", "Address", "Deadline", "Status"
    );
    println!("{}", "-".repeat(65));
    for snapshot in sim.snapshots() {
        println!(
            "{:<4} {:<22} {:<9} {:<28}",
            snapshot.id.0,
            snapshot.address,
            snapshot.deadline.to_string(),
            snapshot.status.to_string(),
        );
    }
    println!();
    println!(
        "Delivered {} of {} packages, total mileage {:.1}",
        log.deliveries,
        sim.snapshots().len(),
        sim.total_distance()?
    );

    Ok(())
}
