//! `fleet-sim` — minute-tick dispatch loop for the rust_fleet engine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`config`]   | `SimConfig` — clock bounds and fleet speed               |
//! | [`dispatch`] | `DispatchEntry`, `Trigger`, `Action` — the day as data   |
//! | [`builder`]  | `SimBuilder` — validation and assembly                   |
//! | [`sim`]      | `Simulation` — the minute loop                           |
//! | [`query`]    | `PackageSnapshot` and point-in-time queries              |
//! | [`observer`] | `SimObserver` callbacks, `NoopObserver`                  |
//! | [`error`]    | `SimError`, `SimResult<T>`                               |
//!
//! # The minute loop
//!
//! ```text
//! loop:
//!   ① Fire     — every un-fired dispatch entry whose trigger holds at the
//!                current minute (to a fixpoint: a correction can arm a
//!                re-dispatch in the same minute).
//!   ② Stop?    — break when the day is complete, or at the cutoff minute.
//!   ③ Advance  — clock moves one minute; every active trip ticks at the
//!                new minute, delivering at most one package per trip.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fleet_sim::{Action, DispatchEntry, NoopObserver, SimBuilder, SimConfig};
//!
//! let schedule = vec![
//!     DispatchEntry::at(Minute::hm(8, 0), Action::Dispatch { manifest: 0, vehicle: VehicleId(1) }),
//!     DispatchEntry::when_returned(0, Action::Dispatch { manifest: 1, vehicle: VehicleId(1) }),
//! ];
//! let mut sim = SimBuilder::new(SimConfig::default(), grid, store, policy)
//!     .entries(schedule)
//!     .build()?;
//! sim.run_until(Minute::hm(10, 30), &mut NoopObserver)?;
//! let snapshot = sim.snapshot(PackageId(1));
//! ```

pub mod builder;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod observer;
pub mod query;
pub mod sim;


pub use builder::SimBuilder;
pub use config::SimConfig;
pub use dispatch::{Action, DispatchEntry, Trigger};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use query::PackageSnapshot;
pub use sim::Simulation;
