//! Simulation observer trait for progress reporting and event capture.

use fleet_core::{Minute, PackageId, VehicleId};

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at key
/// points in the minute loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — delivery printer
///
/// ```rust,ignore
/// struct DeliveryPrinter;
///
/// impl SimObserver for DeliveryPrinter {
///     fn on_delivery(&mut self, package: PackageId, now: Minute) {
///         println!("{now}  delivered {package}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after the clock advances, before any trip moves.
    fn on_tick(&mut self, _now: Minute) {}

    /// Called when a trip leaves the hub with `packages` stops on board.
    fn on_dispatch(&mut self, _vehicle: VehicleId, _now: Minute, _packages: usize) {}

    /// Called for each package the minute it is delivered.
    fn on_delivery(&mut self, _package: PackageId, _now: Minute) {}

    /// Called the minute a trip completes its return-to-hub leg.
    fn on_return(&mut self, _vehicle: VehicleId, _now: Minute) {}

    /// Called when a correction event rewrites a package's address.
    fn on_correction(&mut self, _package: PackageId, _now: Minute) {}

    /// Called once, when the day completes (all entries spent, all trips
    /// home) or the end-of-day cutoff is reached.
    fn on_sim_end(&mut self, _now: Minute) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run`
/// but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
