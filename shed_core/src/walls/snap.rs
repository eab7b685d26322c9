//! # Door Snapping
//!
//! Repairs door placements on one wall so that every accepted door keeps
//! its corner clearance and its spacing to neighbouring doors. Doors that
//! cannot fit at all are removed. Nothing here fails: every adjustment is
//! reported as a [`SnapEvent`] and the caller decides what to show.
//!
//! ## Procedure
//!
//! 1. Reject doors wider than `wall - 2 × clearance`.
//! 2. While `Σ widths + (n − 1) × gap + 2 × clearance > wall`, drop the widest
//!    door (ties: larger desired offset, then larger id).
//! 3. Clamp each door to `[clearance, wall − clearance − width]`.
//! 4. Order by clamped position (ties: id, then declaration order) and relax
//!    the chain forward, backward, forward, re-clamping after every step.
//!
//! The constraints form one ordered chain of fixed-width intervals, so three
//! passes reach a feasible layout whenever step 2 admitted the set.
//!
//! ## Example
//!
//! ```rust
//! use shed_core::config::{Opening, WallId};
//! use shed_core::walls::snap::snap_doors;
//!
//! let doors = vec![
//!     Opening::with_id("a", WallId::Front, 0.0, 1500.0, 2000.0),
//!     Opening::with_id("b", WallId::Front, 100.0, 1500.0, 2000.0),
//! ];
//! let outcome = snap_doors(WallId::Front, 3000, &doors);
//! assert_eq!(outcome.accepted.len(), 1);
//! assert_eq!(outcome.removed.len(), 1);
//! assert_eq!(outcome.removed[0].id, "b");
//! ```

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::config::{defaults, Opening, WallId};
use crate::units::coerce_mm;

/// Minimum distance from a door to either wall end
pub const CORNER_CLEARANCE_MM: i64 = 50;

/// Minimum distance between two doors on the same wall
pub const MIN_DOOR_GAP_MM: i64 = 50;

/// Constraint that caused a door to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SnapConstraint {
    CornerClearance,
    DoorSpacing,
}

impl SnapConstraint {
    pub fn description(&self) -> &'static str {
        match self {
            SnapConstraint::CornerClearance => "corner clearance",
            SnapConstraint::DoorSpacing => "door spacing",
        }
    }
}

/// Why a door was dropped from its wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RemovalReason {
    /// Wider than the wall minus both corner clearances
    TooWide,
    /// The surviving doors plus gaps and clearances exceed the wall length
    OverCapacity,
}

impl RemovalReason {
    pub fn description(&self) -> &'static str {
        match self {
            RemovalReason::TooWide => "wider than the wall allows",
            RemovalReason::OverCapacity => "not enough wall length for all doors",
        }
    }
}

/// Diagnostic record of one snap adjustment, removal or framing compromise
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum SnapEvent {
    Moved {
        door_id: String,
        wall: WallId,
        from_mm: i64,
        to_mm: i64,
        constraint: SnapConstraint,
    },
    Removed {
        door_id: String,
        wall: WallId,
        desired_mm: i64,
        width_mm: i64,
        reason: RemovalReason,
    },
    /// A framing stud of this door coincides with one already framing a
    /// neighbouring door, which carries both
    StudShared {
        door_id: String,
        wall: WallId,
        role: String,
        at_mm: i64,
        shared_with: String,
    },
    /// A framing stud of this door would fall outside the wall
    StudOmitted {
        door_id: String,
        wall: WallId,
        role: String,
        at_mm: i64,
    },
}

impl SnapEvent {
    pub fn door_id(&self) -> &str {
        match self {
            SnapEvent::Moved { door_id, .. }
            | SnapEvent::Removed { door_id, .. }
            | SnapEvent::StudShared { door_id, .. }
            | SnapEvent::StudOmitted { door_id, .. } => door_id,
        }
    }

    pub fn is_removal(&self) -> bool {
        matches!(self, SnapEvent::Removed { .. })
    }
}

impl std::fmt::Display for SnapEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapEvent::Moved { door_id, wall, from_mm, to_mm, constraint } => write!(
                f,
                "door {} on {} wall moved from {} mm to {} mm ({})",
                door_id,
                wall,
                from_mm,
                to_mm,
                constraint.description()
            ),
            SnapEvent::Removed { door_id, wall, desired_mm, width_mm, reason } => write!(
                f,
                "door {} ({} mm wide at {} mm) removed from {} wall: {}",
                door_id,
                width_mm,
                desired_mm,
                wall,
                reason.description()
            ),
            SnapEvent::StudShared { door_id, wall, role, at_mm, shared_with } => write!(
                f,
                "door {} on {} wall shares its {} at {} mm with door {}",
                door_id, wall, role, at_mm, shared_with
            ),
            SnapEvent::StudOmitted { door_id, wall, role, at_mm } => write!(
                f,
                "door {} on {} wall has no {} at {} mm (outside the wall)",
                door_id, wall, role, at_mm
            ),
        }
    }
}

/// A door that survived snapping, in whole millimetres along the wall
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedDoor {
    pub id: String,
    pub wall: WallId,
    /// Near edge
    pub x0_mm: i64,
    /// Far edge (`x0 + width`)
    pub x1_mm: i64,
    pub width_mm: i64,
    pub height_mm: i64,
    /// Offset the configuration asked for (after coercion)
    pub desired_mm: i64,
}

/// A door that did not survive
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemovedDoor {
    pub id: String,
    pub wall: WallId,
    pub reason: RemovalReason,
}

/// Result of snapping all doors on one wall
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SnapOutcome {
    /// Accepted doors ordered along the wall
    pub accepted: Vec<PlacedDoor>,
    pub removed: Vec<RemovedDoor>,
    pub events: Vec<SnapEvent>,
}

#[derive(Debug, Clone)]
struct Candidate {
    id: String,
    index: usize,
    desired: i64,
    width: i64,
    height: i64,
    pos: i64,
    lo: i64,
    hi: i64,
}

impl Candidate {
    fn end(&self) -> i64 {
        self.pos + self.width
    }

    /// Canonical order independent of the input array's order
    fn identity_cmp(&self, other: &Candidate) -> Ordering {
        self.id.cmp(&other.id).then(self.index.cmp(&other.index))
    }
}

fn required_length(doors: &[Candidate]) -> i64 {
    let widths: i64 = doors.iter().map(|d| d.width).sum();
    let gaps = (doors.len() as i64 - 1).max(0) * MIN_DOOR_GAP_MM;
    widths + gaps + 2 * CORNER_CLEARANCE_MM
}

/// Snap the enabled doors of one wall. Disabled doors are ignored entirely.
pub fn snap_doors(wall: WallId, wall_length_mm: i64, doors: &[Opening]) -> SnapOutcome {
    let mut outcome = SnapOutcome::default();
    let usable = wall_length_mm - 2 * CORNER_CLEARANCE_MM;

    let mut candidates: Vec<Candidate> = doors
        .iter()
        .enumerate()
        .filter(|(_, d)| d.enabled)
        .map(|(index, d)| {
            let desired = coerce_mm(d.offset_mm, CORNER_CLEARANCE_MM as f64, i64::MIN);
            Candidate {
                id: d.id.clone(),
                index,
                desired,
                width: coerce_mm(d.width_mm, defaults::DOOR_WIDTH_MM, 1),
                height: coerce_mm(d.height_mm, defaults::DOOR_HEIGHT_MM, 1),
                pos: desired,
                lo: CORNER_CLEARANCE_MM,
                hi: CORNER_CLEARANCE_MM,
            }
        })
        .collect();
    candidates.sort_by(Candidate::identity_cmp);

    // 1. Doors that cannot fit even alone
    let (fits, too_wide): (Vec<_>, Vec<_>) = candidates.into_iter().partition(|c| c.width <= usable);
    for c in too_wide {
        remove(&mut outcome, wall, c, RemovalReason::TooWide);
    }
    let mut candidates = fits;

    // 2. Drop the widest until the set fits
    while !candidates.is_empty() && required_length(&candidates) > wall_length_mm {
        let victim = candidates
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| {
                a.width
                    .cmp(&b.width)
                    .then(a.desired.cmp(&b.desired))
                    .then(a.identity_cmp(b))
            })
            .map(|(i, _)| i);
        if let Some(i) = victim {
            let c = candidates.remove(i);
            remove(&mut outcome, wall, c, RemovalReason::OverCapacity);
        }
    }

    // 3. Clamp into the allowed range
    for c in candidates.iter_mut() {
        c.lo = CORNER_CLEARANCE_MM;
        c.hi = wall_length_mm - CORNER_CLEARANCE_MM - c.width;
        let clamped = c.desired.clamp(c.lo, c.hi);
        if clamped != c.desired {
            moved(&mut outcome, wall, c, clamped, SnapConstraint::CornerClearance);
        }
        c.pos = clamped;
    }

    // 4. Order along the wall and relax the chain
    candidates.sort_by(|a, b| a.pos.cmp(&b.pos).then(a.identity_cmp(b)));
    forward_pass(&mut outcome, wall, &mut candidates);
    backward_pass(&mut outcome, wall, &mut candidates);
    forward_pass(&mut outcome, wall, &mut candidates);

    outcome.accepted = candidates
        .into_iter()
        .map(|c| PlacedDoor {
            x0_mm: c.pos,
            x1_mm: c.end(),
            id: c.id,
            wall,
            width_mm: c.width,
            height_mm: c.height,
            desired_mm: c.desired,
        })
        .collect();
    outcome
}

fn forward_pass(outcome: &mut SnapOutcome, wall: WallId, doors: &mut [Candidate]) {
    for i in 1..doors.len() {
        let min_start = doors[i - 1].end() + MIN_DOOR_GAP_MM;
        let door = &mut doors[i];
        if door.pos < min_start {
            let next = min_start.clamp(door.lo, door.hi);
            if next != door.pos {
                moved(outcome, wall, door, next, SnapConstraint::DoorSpacing);
                door.pos = next;
            }
        }
    }
}

fn backward_pass(outcome: &mut SnapOutcome, wall: WallId, doors: &mut [Candidate]) {
    for i in (0..doors.len().saturating_sub(1)).rev() {
        let max_start = doors[i + 1].pos - MIN_DOOR_GAP_MM - doors[i].width;
        let door = &mut doors[i];
        if door.pos > max_start {
            let next = max_start.clamp(door.lo, door.hi);
            if next != door.pos {
                moved(outcome, wall, door, next, SnapConstraint::DoorSpacing);
                door.pos = next;
            }
        }
    }
}

fn moved(outcome: &mut SnapOutcome, wall: WallId, door: &Candidate, to_mm: i64, constraint: SnapConstraint) {
    let event = SnapEvent::Moved {
        door_id: door.id.clone(),
        wall,
        from_mm: door.pos,
        to_mm,
        constraint,
    };
    tracing::info!(door = %door.id, %wall, from_mm = door.pos, to_mm, "{}", event);
    outcome.events.push(event);
}

fn remove(outcome: &mut SnapOutcome, wall: WallId, door: Candidate, reason: RemovalReason) {
    let event = SnapEvent::Removed {
        door_id: door.id.clone(),
        wall,
        desired_mm: door.desired,
        width_mm: door.width,
        reason,
    };
    tracing::warn!(door = %door.id, %wall, width_mm = door.width, "{}", event);
    outcome.events.push(event);
    outcome.removed.push(RemovedDoor { id: door.id, wall, reason });
}
