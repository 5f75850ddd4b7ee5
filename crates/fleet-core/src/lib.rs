//! `fleet-core` — foundational types for the `rust_fleet` delivery engine.
//!
//! This crate is a dependency of every other `fleet-*` crate.  It
//! intentionally has no `fleet-*` dependencies and minimal external ones
//! (only `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                      |
//! |-----------|-----------------------------------------------|
//! | [`ids`]   | `PackageId`, `AddressId`, `VehicleId`         |
//! | [`time`]  | `Minute`, `DayClock`                          |
//! | [`error`] | `FleetError`, `FleetResult`                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{FleetError, FleetResult};
pub use ids::{AddressId, PackageId, VehicleId};
pub use time::{DayClock, Minute};
