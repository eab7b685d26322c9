//! Wall-local framing helpers shared by both wall variants.
//!
//! Layout code works in one dimension ("along" the wall, 0 at the wall's
//! start) plus height. [`WallFrame`] maps those coordinates into world-space
//! [`Member`]s, and [`StudRow`] keeps studs from overlapping each other or
//! landing inside a door. Neighbouring doors closer than their framing share
//! the stud between them.

use serde::{Deserialize, Serialize};

use crate::config::WallId;
use crate::materials::{Material, SectionProfile};
use crate::members::{Extents, Member, MemberKind, Point3};

use super::snap::{PlacedDoor, SnapEvent};

/// World axis a wall runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunAxis {
    /// Along world x (front/back walls)
    X,
    /// Along world z (left/right walls)
    Z,
}

/// Where one wall sits and how long it is
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallPlacement {
    pub id: WallId,
    pub axis: RunAxis,
    /// Run length in whole millimetres
    pub length_mm: i64,
    /// World (x, z) of the wall's start corner, outer face
    pub origin_x_mm: f64,
    pub origin_z_mm: f64,
}

/// Geometry context for laying out one wall
#[derive(Debug, Clone, Copy)]
pub(crate) struct WallFrame {
    pub placement: WallPlacement,
    pub section: SectionProfile,
    pub wall_height_mm: f64,
}

impl WallFrame {
    pub fn length(&self) -> f64 {
        self.placement.length_mm as f64
    }

    /// Stud width along the wall, also plate thickness
    pub fn stud_width(&self) -> f64 {
        self.section.narrow_mm()
    }

    /// Net wall thickness
    pub fn thickness(&self) -> f64 {
        self.section.wide_mm()
    }

    /// Height of a full stud between the plates
    pub fn stud_height(&self) -> f64 {
        (self.wall_height_mm - 2.0 * self.stud_width()).max(0.0)
    }

    /// Vertical depth of a header
    pub fn header_depth(&self) -> f64 {
        self.section.wide_mm()
    }

    /// Height of the trimmer under a header for a door, leaving room for the header
    pub fn trimmer_height(&self, door: &PlacedDoor) -> f64 {
        (door.height_mm as f64)
            .min(self.stud_height() - self.header_depth())
            .max(0.0)
    }

    /// Build a member from wall-local coordinates.
    ///
    /// `across` is the member's extent through the wall thickness, placed
    /// flush with the wall's outer face.
    pub fn member(
        &self,
        kind: MemberKind,
        role: &str,
        along_mm: f64,
        run_mm: f64,
        y_mm: f64,
        height_mm: f64,
        across_mm: f64,
    ) -> Member {
        let (size, anchor) = match self.placement.axis {
            RunAxis::X => (
                Extents::new(run_mm, height_mm, across_mm),
                Point3::new(self.placement.origin_x_mm + along_mm, y_mm, self.placement.origin_z_mm),
            ),
            RunAxis::Z => (
                Extents::new(across_mm, height_mm, run_mm),
                Point3::new(self.placement.origin_x_mm, y_mm, self.placement.origin_z_mm + along_mm),
            ),
        };
        Member::new(kind, role, Material::timber(self.section), size, anchor).on_wall(self.placement.id)
    }

    /// Bottom and top plate over `[start, start + run]`
    pub fn plates(&self, start_mm: f64, run_mm: f64) -> [Member; 2] {
        let n = self.stud_width();
        let t = self.thickness();
        [
            self.member(MemberKind::Plate, "bottom plate", start_mm, run_mm, 0.0, n, t),
            self.member(MemberKind::Plate, "top plate", start_mm, run_mm, self.wall_height_mm - n, n, t),
        ]
    }
}

/// A stud slot reserved along the wall
#[derive(Debug, Clone)]
pub(crate) struct StudSlot {
    pub start_mm: f64,
    pub role: &'static str,
    /// Trimmers stop under the header; everything else is full height
    pub height_mm: f64,
    pub opening_id: Option<String>,
    pub note: Option<String>,
}

/// Members of one framed wall plus any framing compromises
#[derive(Debug, Default)]
pub(crate) struct FramedWall {
    pub members: Vec<Member>,
    pub events: Vec<SnapEvent>,
}

/// Studs placed along one wall, first reservation wins
#[derive(Debug)]
pub(crate) struct StudRow {
    wall: WallId,
    width: f64,
    length: f64,
    full_height: f64,
    /// Clear door spans `(x0, x1)` no ordinary stud may enter
    doors: Vec<(f64, f64)>,
    slots: Vec<StudSlot>,
    events: Vec<SnapEvent>,
}

impl StudRow {
    pub fn new(frame: &WallFrame, doors: &[PlacedDoor]) -> Self {
        StudRow {
            wall: frame.placement.id,
            width: frame.stud_width(),
            length: frame.length(),
            full_height: frame.stud_height(),
            doors: doors.iter().map(|d| (d.x0_mm as f64, d.x1_mm as f64)).collect(),
            slots: Vec::new(),
            events: Vec::new(),
        }
    }

    fn within_wall(&self, start: f64) -> bool {
        start >= 0.0 && start + self.width <= self.length + 1e-9
    }

    fn overlapping(&self, start: f64) -> Option<&StudSlot> {
        let end = start + self.width;
        self.slots
            .iter()
            .find(|s| start < s.start_mm + self.width - 1e-9 && s.start_mm < end - 1e-9)
    }

    fn fits(&self, start: f64) -> bool {
        self.within_wall(start) && self.overlapping(start).is_none()
    }

    fn inside_door(&self, start: f64) -> bool {
        let end = start + self.width;
        self.doors.iter().any(|&(x0, x1)| start < x1 && x0 < end)
    }

    /// Reserve an opening's framing stud.
    ///
    /// A slot already held by another opening's stud is shared with it. A
    /// slot past either wall end is left out. Both cases are recorded as
    /// events. Returns whether the opening ends up with a stud at `start`.
    pub fn frame_opening(&mut self, start: f64, role: &'static str, height: f64, opening_id: &str) -> bool {
        let at_mm = start.floor() as i64;
        if !self.within_wall(start) {
            let event = SnapEvent::StudOmitted {
                door_id: opening_id.to_string(),
                wall: self.wall,
                role: role.to_string(),
                at_mm,
            };
            tracing::warn!(door = opening_id, wall = %self.wall, at_mm, "{}", event);
            self.events.push(event);
            return false;
        }

        // opening studs are reserved before any ordinary stud
        let owner = self
            .overlapping(start)
            .map(|slot| slot.opening_id.clone().unwrap_or_default());
        if let Some(owner) = owner {
            if owner != opening_id {
                let event = SnapEvent::StudShared {
                    door_id: opening_id.to_string(),
                    wall: self.wall,
                    role: role.to_string(),
                    at_mm,
                    shared_with: owner,
                };
                tracing::info!(door = opening_id, wall = %self.wall, at_mm, "{}", event);
                self.events.push(event);
            }
            return true;
        }

        self.slots.push(StudSlot {
            start_mm: start,
            role,
            height_mm: height,
            opening_id: Some(opening_id.to_string()),
            note: None,
        });
        true
    }

    /// Reserve an ordinary full-height stud; omitted inside doors or on overlap.
    pub fn place(&mut self, start: f64, role: &'static str, note: Option<String>) -> bool {
        if self.inside_door(start) || !self.fits(start) {
            return false;
        }
        self.slots.push(StudSlot {
            start_mm: start,
            role,
            height_mm: self.full_height,
            opening_id: None,
            note,
        });
        true
    }

    /// Convert reservations to members ordered along the wall, appending
    /// them and any framing events to `wall`
    pub fn finish(mut self, frame: &WallFrame, wall: &mut FramedWall) {
        self.slots.sort_by(|a, b| a.start_mm.total_cmp(&b.start_mm));
        let n = frame.stud_width();
        let t = frame.thickness();
        wall.events.append(&mut self.events);
        let studs = self
            .slots
            .into_iter()
            .map(|slot| {
                let mut m = frame.member(MemberKind::Stud, slot.role, slot.start_mm, n, n, slot.height_mm, t);
                if let Some(id) = slot.opening_id {
                    m = m.for_opening(id);
                }
                if let Some(note) = slot.note {
                    m = m.with_note(note);
                }
                m
            });
        wall.members.extend(studs);
    }
}
