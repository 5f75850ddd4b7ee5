//! `fleet-route` — route construction and per-trip vehicle simulation.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`route`]   | `Route`, `RouteStop` — frozen stop sequence with cursor    |
//! | [`builder`] | `RouteBuilder` — nearest-neighbor fill and ordering        |
//! | [`vehicle`] | `VehicleRoute` — minute-tick travel state machine          |
//! | [`error`]   | `RouteError`, `RouteResult<T>`                             |
//!
//! # Movement model (minute-tick leg countdown)
//!
//! A dispatched vehicle holds a frozen [`Route`] and a distance-remaining
//! counter for its current leg:
//!
//! 1. [`VehicleRoute::dispatch`] freezes the route, marks every package
//!    en-route, and seeds the counter with the hub→first-stop distance.
//! 2. Each tick subtracts one minute's travel; at zero or below the next
//!    stop is visited, its package delivered at the current minute, and the
//!    counter re-seeds with the next leg (the hub leg after the last stop).
//!    Any negative remainder carries into the new leg, so sub-minute
//!    arrivals don't accumulate error.
//! 3. When the hub leg's counter reaches zero the trip is terminal — a
//!    returned vehicle never moves again.

pub mod builder;
pub mod error;
pub mod route;
pub mod vehicle;

#[cfg(test)]
mod tests;

pub use builder::RouteBuilder;
pub use error::{RouteError, RouteResult};
pub use route::{Route, RouteStop};
pub use vehicle::VehicleRoute;
