//! `Constraint` — the parsed form of a package's free-text note.
//!
//! The reference data encodes constraints as prose; the markers below are
//! the ones the planner acts on.  Parsing happens once per package per
//! partitioning pass, so the planner's rule loops compare enum variants
//! rather than re-scanning strings.
//!
//! | Marker in note       | Parsed constraint                       |
//! |----------------------|-----------------------------------------|
//! | `"Must be"`          | `DeliverWith(ids listed in the note)`   |
//! | `"truck N"`          | `RequiresVehicle(N)`                    |
//! | `"Delayed"`          | `DelayedUntil(time found in the note)`  |
//! | anything else        | `Unconstrained`                         |

use fleet_core::{Minute, PackageId, VehicleId};

/// A single parsed delivery constraint.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Constraint {
    /// No recognized marker in the note.
    Unconstrained,

    /// Must ship in the same manifest as the listed package ids
    /// (`"Must be delivered with 15, 19"`).  The list may be empty when the
    /// note carries the marker but no parseable ids.
    DeliverWith(Vec<PackageId>),

    /// Must ship on a specific vehicle (`"Can only be on truck 2"`).
    RequiresVehicle(VehicleId),

    /// Not at the hub until later in the morning
    /// (`"Delayed on flight---will not arrive to depot until 9:05 am"`).
    /// The time is `None` when the note names no parseable time.
    DelayedUntil(Option<Minute>),
}

impl Constraint {
    /// Parse a free-text note.  Markers are checked in rule order; the first
    /// match wins (reference notes never carry more than one).
    pub fn parse(note: &str) -> Constraint {
        if note.contains("Must be") {
            return Constraint::DeliverWith(trailing_ids(note));
        }
        if let Some(vehicle) = vehicle_number(note) {
            return Constraint::RequiresVehicle(vehicle);
        }
        if note.contains("Delayed") {
            return Constraint::DelayedUntil(embedded_time(note));
        }
        Constraint::Unconstrained
    }
}

// ── Marker helpers ────────────────────────────────────────────────────────────

/// Collect every standalone integer in the note as a `PackageId`.
fn trailing_ids(note: &str) -> Vec<PackageId> {
    note.split(|c: char| !c.is_ascii_digit())
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse::<u32>().ok())
        .map(PackageId)
        .collect()
}

/// Find `"truck N"` (any case) and parse N.
fn vehicle_number(note: &str) -> Option<VehicleId> {
    let lower = note.to_ascii_lowercase();
    let rest = &lower[lower.find("truck")? + "truck".len()..];
    rest.split_whitespace()
        .next()?
        .trim_matches(|c: char| !c.is_ascii_digit())
        .parse::<u16>()
        .ok()
        .map(VehicleId)
}

/// Find the first `H:MM`-shaped token, joining a following `am`/`pm` token.
fn embedded_time(note: &str) -> Option<Minute> {
    let tokens: Vec<&str> = note.split_whitespace().collect();
    for (i, token) in tokens.iter().enumerate() {
        if !token.contains(':') {
            continue;
        }
        let with_meridiem = tokens
            .get(i + 1)
            .filter(|next| next.eq_ignore_ascii_case("am") || next.eq_ignore_ascii_case("pm"))
            .map(|next| format!("{token} {next}"));
        let candidate = with_meridiem.as_deref().unwrap_or(token);
        if let Ok(minute) = Minute::parse(candidate) {
            return Some(minute);
        }
    }
    None
}
