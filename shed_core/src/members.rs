//! # Structural Members
//!
//! A [`Member`] is one placed piece of timber or sheathing: what it is, how big
//! it is in its own frame, where its origin corner sits in the world and how
//! that frame is rotated.
//!
//! ## Coordinate System
//!
//! ```text
//!        y (up)
//!        │
//!        │    z (depth, front = 0, back = frame depth)
//!        │  ╱
//!        │╱
//!        └──────── x (width, left = 0, right = frame width)
//! ```
//!
//! A member's box spans `[0, size.x] × [0, size.y] × [0, size.z]` in its local
//! frame. The renderer rotates that box by `pitch_rad` about the local z axis
//! (positive lifts +x toward +y), then by `yaw_rad` about the vertical axis,
//! both through the local origin, and finally moves the origin to `anchor`.
//! Wall members are never rotated; roof members share their assembly's
//! rotation.

use serde::{Deserialize, Serialize};

use crate::config::WallId;
use crate::materials::Material;

/// World or local point, millimetres
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Point3 { x, y, z }
    }
}

impl std::ops::Add for Point3 {
    type Output = Point3;
    fn add(self, rhs: Point3) -> Point3 {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Box extents along the member's local axes, millimetres
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extents {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Extents {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Extents { x, y, z }
    }

    /// Extents sorted descending: (length, width, thickness)
    pub fn sorted_desc(&self) -> (f64, f64, f64) {
        let mut dims = [self.x, self.y, self.z];
        dims.sort_by(|a, b| b.total_cmp(a));
        (dims[0], dims[1], dims[2])
    }
}

/// Orientation of a member's local frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotation {
    /// Rotation about the vertical axis, radians
    pub yaw_rad: f64,
    /// Rotation about the local z axis, radians
    pub pitch_rad: f64,
}

impl Rotation {
    pub const IDENTITY: Rotation = Rotation { yaw_rad: 0.0, pitch_rad: 0.0 };

    pub fn new(yaw_rad: f64, pitch_rad: f64) -> Self {
        Rotation { yaw_rad, pitch_rad }
    }

    /// Apply pitch then yaw to a local vector.
    pub fn apply(&self, p: Point3) -> Point3 {
        let (sp, cp) = self.pitch_rad.sin_cos();
        let x1 = p.x * cp - p.y * sp;
        let y1 = p.x * sp + p.y * cp;
        let z1 = p.z;

        let (sy, cy) = self.yaw_rad.sin_cos();
        Point3::new(x1 * cy - z1 * sy, y1, x1 * sy + z1 * cy)
    }

    /// This rotation with an additional pitch about the same local axis
    pub fn with_added_pitch(&self, pitch_rad: f64) -> Rotation {
        Rotation::new(self.yaw_rad, self.pitch_rad + pitch_rad)
    }
}

/// What role a member plays in the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MemberKind {
    Plate,
    Stud,
    Header,
    Rafter,
    TrussChord,
    TrussWeb,
    Ridge,
    Purlin,
    Rim,
    Sheathing,
}

impl MemberKind {
    /// Lowercase name used in cutting-list labels
    pub fn name(&self) -> &'static str {
        match self {
            MemberKind::Plate => "plate",
            MemberKind::Stud => "stud",
            MemberKind::Header => "header",
            MemberKind::Rafter => "rafter",
            MemberKind::TrussChord => "truss chord",
            MemberKind::TrussWeb => "truss web",
            MemberKind::Ridge => "ridge",
            MemberKind::Purlin => "purlin",
            MemberKind::Rim => "rim",
            MemberKind::Sheathing => "sheathing",
        }
    }
}

/// Free-form annotations carried through to the renderer and cutting list
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MemberTags {
    /// Host wall for wall members
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wall: Option<WallId>,
    /// Opening a stud/header frames
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_id: Option<String>,
    /// Extra note (panel index, "trimmed", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// One placed structural piece
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub kind: MemberKind,
    /// Role label, e.g. "king stud", "bottom plate"
    pub role: String,
    pub material: Material,
    /// Extents in the member's local frame
    pub size: Extents,
    /// World position of the local origin corner
    pub anchor: Point3,
    pub rotation: Rotation,
    #[serde(default)]
    pub tags: MemberTags,
}

impl Member {
    /// Axis-aligned member (no rotation)
    pub fn new(kind: MemberKind, role: impl Into<String>, material: Material, size: Extents, anchor: Point3) -> Self {
        Member {
            kind,
            role: role.into(),
            material,
            size,
            anchor,
            rotation: Rotation::IDENTITY,
            tags: MemberTags::default(),
        }
    }

    pub fn on_wall(mut self, wall: WallId) -> Self {
        self.tags.wall = Some(wall);
        self
    }

    pub fn for_opening(mut self, opening_id: impl Into<String>) -> Self {
        self.tags.opening_id = Some(opening_id.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.tags.note = Some(note.into());
        self
    }

    /// Longest extent: the cut length of a timber piece
    pub fn length_mm(&self) -> f64 {
        self.size.sorted_desc().0
    }

    /// Second-longest extent: the cut width of a sheet piece
    pub fn width_mm(&self) -> f64 {
        self.size.sorted_desc().1
    }

    /// World position of a point given in the member's local frame
    pub fn world_point(&self, local: Point3) -> Point3 {
        self.anchor + self.rotation.apply(local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::SectionProfile;
    use std::f64::consts::FRAC_PI_2;

    fn close(a: Point3, b: Point3) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9 && (a.z - b.z).abs() < 1e-9
    }

    #[test]
    fn test_identity_rotation() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(Rotation::IDENTITY.apply(p), p);
    }

    #[test]
    fn test_pitch_lifts_x_toward_y() {
        let r = Rotation::new(0.0, FRAC_PI_2);
        assert!(close(r.apply(Point3::new(1.0, 0.0, 0.0)), Point3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_yaw_turns_x_toward_z() {
        let r = Rotation::new(FRAC_PI_2, 0.0);
        assert!(close(r.apply(Point3::new(1.0, 0.0, 0.0)), Point3::new(0.0, 0.0, 1.0)));
        assert!(close(r.apply(Point3::new(0.0, 0.0, 1.0)), Point3::new(-1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_length_and_width() {
        let m = Member::new(
            MemberKind::Stud,
            "stud",
            Material::timber(SectionProfile::S45x95),
            Extents::new(45.0, 2310.0, 95.0),
            Point3::default(),
        );
        assert_eq!(m.length_mm(), 2310.0);
        assert_eq!(m.width_mm(), 95.0);
    }

    #[test]
    fn test_world_point() {
        let mut m = Member::new(
            MemberKind::Rafter,
            "rafter",
            Material::timber(SectionProfile::S45x145),
            Extents::new(1000.0, 145.0, 45.0),
            Point3::new(10.0, 20.0, 30.0),
        );
        m.rotation = Rotation::new(0.0, FRAC_PI_2);
        assert!(close(m.world_point(Point3::new(1000.0, 0.0, 0.0)), Point3::new(10.0, 1020.0, 30.0)));
    }
}
