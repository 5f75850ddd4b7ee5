//! `fleet-plan` — partitioning packages into per-vehicle manifests.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`manifest`]    | `Manifest` — capacity-bounded package-id set            |
//! | [`rules`]       | `Constraint` — parsed form of the free-text note        |
//! | [`config`]      | `PlanConfig`, `ManifestSpec` — rule targets as data     |
//! | [`partitioner`] | `Partitioner`, `Plan` — ordered rules + closure         |
//! | [`error`]       | `PlanError`, `PlanResult<T>`                            |
//!
//! # Assignment model
//!
//! Three ordered rules (grouped, fixed-vehicle, delayed) seed the manifests;
//! a co-location closure then pulls every at-hub package sharing a seeded
//! package's exact address into the same manifest.  The closure is a
//! worklist fixed point, not mutual recursion: newly added ids are queued,
//! and popping one scans the store for unassigned same-address siblings.
//! Capacity overflow anywhere is a silent no-op — the package simply stays
//! at the hub for a later fill pass.
//!
//! Order matters: a later rule never re-examines a package an earlier rule
//! (or its closure) already placed.

pub mod config;
pub mod error;
pub mod manifest;
pub mod partitioner;
pub mod rules;


pub use config::{ManifestSpec, PlanConfig};
pub use error::{PlanError, PlanResult};
pub use manifest::Manifest;
pub use partitioner::{Partitioner, Plan};
pub use rules::Constraint;
