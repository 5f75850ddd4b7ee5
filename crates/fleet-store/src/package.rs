//! The `Package` record and its status machine.

use std::fmt;

use fleet_core::{FleetResult, Minute, PackageId, VehicleId};

// ── Deadline ──────────────────────────────────────────────────────────────────

/// A package's delivery deadline.
///
/// Variant order matters for the derived `Ord`: any concrete time sorts
/// before `EndOfDay`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Deadline {
    /// Must arrive by this minute of day.
    By(Minute),
    /// No fixed time — any point in the working day.
    EndOfDay,
}

impl Deadline {
    /// Parse a deadline string: `"EOD"` (any case) or a time of day in any
    /// form accepted by [`Minute::parse`].
    pub fn parse(s: &str) -> FleetResult<Deadline> {
        if s.trim().eq_ignore_ascii_case("eod") {
            Ok(Deadline::EndOfDay)
        } else {
            Minute::parse(s).map(Deadline::By)
        }
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deadline::By(m) => write!(f, "{m}"),
            Deadline::EndOfDay => write!(f, "EOD"),
        }
    }
}

// ── PackageStatus ─────────────────────────────────────────────────────────────

/// Where a package is in its lifecycle.
///
/// Transitions are monotonic: `AtHub → EnRoute → Delivered`, with `OnHold`
/// usable only before `EnRoute` (`AtHub ↔ OnHold`).  A delivered package
/// never regresses.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PackageStatus {
    /// Waiting at the hub, eligible for manifest assignment.
    AtHub,
    /// Administratively held (e.g. a known-wrong address awaiting
    /// correction).  Invisible to partitioning and route fill.
    OnHold,
    /// Loaded on a vehicle with a frozen route.
    EnRoute(VehicleId),
    /// Delivered at the recorded minute.
    Delivered(Minute),
}

impl fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageStatus::AtHub => write!(f, "at hub"),
            PackageStatus::OnHold => write!(f, "on hold"),
            PackageStatus::EnRoute(v) => write!(f, "en route on vehicle {}", v.0),
            PackageStatus::Delivered(m) => write!(f, "delivered at {m}"),
        }
    }
}

// ── Package ───────────────────────────────────────────────────────────────────

/// One deliverable package.
///
/// The identifier is immutable; the address is mutable exactly once (the
/// mid-day correction event) through
/// [`PackageStore::update_address`][crate::PackageStore::update_address].
/// Status only moves forward — the transition methods `debug_assert!` the
/// monotonicity invariant, since a violation is a defect in the engine, not
/// a data condition.
#[derive(Clone, Debug)]
pub struct Package {
    pub id:       PackageId,
    pub address:  String,
    pub city:     String,
    pub state:    String,
    pub zipcode:  String,
    pub deadline: Deadline,
    pub weight:   u32,
    /// Free-text constraint note, parsed by the planner.
    pub note:     String,

    status: PackageStatus,
}

impl Package {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id:       PackageId,
        address:  impl Into<String>,
        city:     impl Into<String>,
        state:    impl Into<String>,
        zipcode:  impl Into<String>,
        deadline: Deadline,
        weight:   u32,
        note:     impl Into<String>,
    ) -> Self {
        Self {
            id,
            address: address.into(),
            city: city.into(),
            state: state.into(),
            zipcode: zipcode.into(),
            deadline,
            weight,
            note: note.into(),
            status: PackageStatus::AtHub,
        }
    }

    #[inline]
    pub fn status(&self) -> PackageStatus {
        self.status
    }

    /// `true` while the package is waiting at the hub (not held).
    #[inline]
    pub fn is_at_hub(&self) -> bool {
        self.status == PackageStatus::AtHub
    }

    /// Delivery minute, or `None` until delivered.
    #[inline]
    pub fn delivered_at(&self) -> Option<Minute> {
        match self.status {
            PackageStatus::Delivered(m) => Some(m),
            _ => None,
        }
    }

    // ── Status transitions ────────────────────────────────────────────────

    /// `AtHub → OnHold`.
    pub fn hold(&mut self) {
        debug_assert_eq!(self.status, PackageStatus::AtHub, "hold of {}", self.id);
        self.status = PackageStatus::OnHold;
    }

    /// `OnHold → AtHub` (the correction event re-admits the package).
    pub fn release(&mut self) {
        debug_assert_eq!(self.status, PackageStatus::OnHold, "release of {}", self.id);
        self.status = PackageStatus::AtHub;
    }

    /// `AtHub → EnRoute` — called when the package's route freezes at
    /// dispatch.
    pub fn depart(&mut self, vehicle: VehicleId) {
        debug_assert_eq!(self.status, PackageStatus::AtHub, "depart of {}", self.id);
        self.status = PackageStatus::EnRoute(vehicle);
    }

    /// `EnRoute → Delivered` at `time`.
    pub fn deliver(&mut self, time: Minute) {
        debug_assert!(
            matches!(self.status, PackageStatus::EnRoute(_)),
            "delivery of {} while {}",
            self.id,
            self.status
        );
        self.status = PackageStatus::Delivered(time);
    }
}
