//! # Roof Framing Engine
//!
//! Builds the roof as one rigid assembly in its own frame, then places that
//! assembly in the world.
//!
//! ## Assembly frame
//!
//! ```text
//!   y (up)
//!   │   v (ridge-parallel)
//!   │ ╱
//!   └──────── u (span)
//! ```
//!
//! Single-slope assemblies are built flat, with rafter lengths measured along
//! the slope, and pitched as a whole. Gable assemblies are built with their
//! sloped members already pitched, so the assembly itself is not.
//!
//! ## Placement
//!
//! Order matters for the constructed pitch to agree with the analytic one:
//!
//! 1. Rotate: pitch about the ridge-parallel axis, then yaw the span axis
//!    onto the world axis chosen for it.
//! 2. Translate in plan so the rotated bounding rectangle's minimum corner
//!    sits at `(−left overhang, −front overhang)`.
//! 3. Lift so the bearing surface sampled at the frame's low edge (x = 0) is
//!    at the configured minimum height.
//!
//! The high-edge sample is taken afterwards and only reported.
//!
//! ## Example
//!
//! ```rust
//! use shed_core::config::{BuildingConfiguration, RoofStyle};
//! use shed_core::dimensions::resolve;
//! use shed_core::roof::frame_roof;
//!
//! let config = BuildingConfiguration::default()
//!     .with_frame(4000.0, 3000.0)
//!     .with_roof_style(RoofStyle::SingleSlope);
//! let roof = frame_roof(&config, &resolve(&config));
//!
//! assert!((roof.placement.low_edge_height_mm - 2400.0).abs() < 1e-6);
//! assert!((roof.placement.high_edge_height_mm - 3000.0).abs() < 1e-6);
//! ```

pub mod gable;
pub mod layout;
pub mod single_slope;

pub use layout::{
    gable_rise, single_slope_height_at, single_slope_span_axis, sloped_length, spaced_positions, SpanAxis,
};

use serde::{Deserialize, Serialize};

use crate::config::{defaults, BuildingConfiguration, RoofStyle};
use crate::dimensions::ResolvedDimensions;
use crate::members::{Extents, Member, Point3, Rotation};
use crate::units::{coerce_mm, Degrees, Radians};

/// Roof parameters after coercion
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RoofInputs {
    pub min_height_mm: f64,
    pub max_height_mm: f64,
    pub sheathing_mm: f64,
}

impl RoofInputs {
    fn from_config(config: &BuildingConfiguration) -> Self {
        let roof = &config.roof;
        RoofInputs {
            min_height_mm: coerce_mm(roof.min_height_mm, defaults::ROOF_MIN_HEIGHT_MM, 0) as f64,
            max_height_mm: coerce_mm(roof.max_height_mm, defaults::ROOF_MAX_HEIGHT_MM, 0) as f64,
            sheathing_mm: coerce_mm(roof.sheathing_thickness_mm, defaults::SHEATHING_MM, 1) as f64,
        }
    }
}

/// A roof assembly in its own frame, before placement
#[derive(Debug, Clone)]
pub(crate) struct RoofUnit {
    /// Members with anchors in assembly coordinates; rotations hold only the
    /// member's own pitch inside the assembly
    pub members: Vec<Member>,
    pub span_axis: SpanAxis,
    /// Pitch applied to the assembly as a whole
    pub pitch_rad: f64,
    /// Height the ridge or high edge rises above the bearing
    pub rise_mm: f64,
}

/// Where the roof assembly ended up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoofPlacement {
    pub style: RoofStyle,
    pub span_axis: SpanAxis,
    pub yaw_rad: f64,
    pub pitch_rad: f64,
    /// World position of the assembly origin
    pub translation: Point3,
    /// Rise of the high edge (single-slope) or ridge (gable) over the bearing
    pub rise_mm: f64,
    /// Bearing height sampled at the frame's low edge
    pub low_edge_height_mm: f64,
    /// Bearing height sampled at the frame's high edge (diagnostic only)
    pub high_edge_height_mm: f64,
}

/// Roof members and placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoofFraming {
    pub members: Vec<Member>,
    pub placement: RoofPlacement,
}

/// Frame the roof for a configuration.
pub fn frame_roof(config: &BuildingConfiguration, dims: &ResolvedDimensions) -> RoofFraming {
    let inputs = RoofInputs::from_config(config);
    let section = config.roof.rafter_section;
    let unit = match config.roof.style {
        RoofStyle::SingleSlope => single_slope::build(dims, section, &inputs),
        RoofStyle::Gable => gable::build(dims, section, &inputs),
    };
    place(unit, config.roof.style, dims, &inputs)
}

/// Local corners of a member's box
fn corners(size: Extents) -> [Point3; 8] {
    let (x, y, z) = (size.x, size.y, size.z);
    [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(x, 0.0, 0.0),
        Point3::new(0.0, y, 0.0),
        Point3::new(0.0, 0.0, z),
        Point3::new(x, y, 0.0),
        Point3::new(x, 0.0, z),
        Point3::new(0.0, y, z),
        Point3::new(x, y, z),
    ]
}

/// Height of the assembly's bearing plane (local y = 0) above its origin at a
/// world plan offset `(dx, dz)` from that origin.
fn bearing_rise(rotation: &Rotation, dx: f64, dz: f64) -> f64 {
    // undo the yaw to get the distance along the pitched span axis
    let (sy, cy) = rotation.yaw_rad.sin_cos();
    let along_span = dx * cy + dz * sy;
    along_span * rotation.pitch_rad.tan()
}

fn place(unit: RoofUnit, style: RoofStyle, dims: &ResolvedDimensions, inputs: &RoofInputs) -> RoofFraming {
    let rotation = Rotation::new(unit.span_axis.yaw_rad(), unit.pitch_rad);

    // 1. rotate
    let mut min_x = f64::INFINITY;
    let mut min_z = f64::INFINITY;
    for m in &unit.members {
        let own = Rotation::new(0.0, m.rotation.pitch_rad);
        for c in corners(m.size) {
            let local = m.anchor + own.apply(c);
            let p = rotation.apply(local);
            min_x = min_x.min(p.x);
            min_z = min_z.min(p.z);
        }
    }
    if !min_x.is_finite() {
        min_x = 0.0;
        min_z = 0.0;
    }

    // 2. plan translation
    let tx = -(dims.overhang.left_mm as f64) - min_x;
    let tz = -(dims.overhang.front_mm as f64) - min_z;

    // 3. lift to the low-edge bearing sample
    let mid_z = dims.frame.depth_mm as f64 / 2.0;
    let ty = inputs.min_height_mm - bearing_rise(&rotation, 0.0 - tx, mid_z - tz);
    let translation = Point3::new(tx, ty, tz);

    let low_edge_height_mm = ty + bearing_rise(&rotation, 0.0 - tx, mid_z - tz);
    let high_edge_height_mm = ty + bearing_rise(&rotation, dims.frame.width_mm as f64 - tx, mid_z - tz);

    tracing::debug!(
        style = style.display_name(),
        pitch_deg = Degrees::from(Radians(unit.pitch_rad)).0,
        low_edge_height_mm,
        high_edge_height_mm,
        "roof placed"
    );

    let members = unit
        .members
        .into_iter()
        .map(|mut m| {
            m.anchor = translation + rotation.apply(m.anchor);
            m.rotation = rotation.with_added_pitch(m.rotation.pitch_rad);
            m
        })
        .collect();

    RoofFraming {
        members,
        placement: RoofPlacement {
            style,
            span_axis: unit.span_axis,
            yaw_rad: rotation.yaw_rad,
            pitch_rad: rotation.pitch_rad,
            translation,
            rise_mm: unit.rise_mm,
            low_edge_height_mm,
            high_edge_height_mm,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimensions::resolve;
    use crate::members::MemberKind;

    fn world_corners(m: &Member) -> Vec<Point3> {
        corners(m.size).iter().map(|&c| m.world_point(c)).collect()
    }

    #[test]
    fn test_single_slope_heights_match_config() {
        let mut config = BuildingConfiguration::default().with_frame(4000.0, 3000.0);
        config.roof.min_height_mm = 2400.0;
        config.roof.max_height_mm = 3000.0;
        let roof = frame_roof(&config, &resolve(&config));
        let p = roof.placement;
        assert!((p.low_edge_height_mm - 2400.0).abs() < 1e-6);
        assert!((p.high_edge_height_mm - 3000.0).abs() < 1e-6);
        assert!((p.pitch_rad - (600.0f64 / 4000.0).atan()).abs() < 1e-12);
        assert_eq!(p.span_axis, SpanAxis::Width);
    }

    #[test]
    fn test_single_slope_plan_footprint_starts_at_overhang() {
        let config = BuildingConfiguration::default().with_frame(3000.0, 4000.0);
        let dims = resolve(&config);
        let roof = frame_roof(&config, &dims);
        let min_x = roof
            .members
            .iter()
            .flat_map(world_corners)
            .map(|p| p.x)
            .fold(f64::INFINITY, f64::min);
        let min_z = roof
            .members
            .iter()
            .flat_map(world_corners)
            .map(|p| p.z)
            .fold(f64::INFINITY, f64::min);
        assert!((min_x + 300.0).abs() < 1e-6);
        assert!((min_z + 300.0).abs() < 1e-6);
    }

    #[test]
    fn test_rafter_underside_matches_analytic_height() {
        let config = BuildingConfiguration::default().with_frame(4000.0, 3000.0);
        let dims = resolve(&config);
        let roof = frame_roof(&config, &dims);
        let rafter = roof.members.iter().find(|m| m.kind == MemberKind::Rafter).unwrap();

        // walk the rafter underside and compare against the analytic line
        for frac in [0.0, 0.25, 0.5, 1.0] {
            let p = rafter.world_point(Point3::new(rafter.size.x * frac, 0.0, 0.0));
            let expected = single_slope_height_at(4000.0, 2400.0, 3000.0, p.x);
            assert!((p.y - expected).abs() < 1e-6, "x={} y={} expected={}", p.x, p.y, expected);
        }
    }

    #[test]
    fn test_gable_rotated_when_depth_is_shorter() {
        let config = BuildingConfiguration::default()
            .with_frame(5000.0, 3000.0)
            .with_roof_style(RoofStyle::Gable);
        let dims = resolve(&config);
        let roof = frame_roof(&config, &dims);
        assert_eq!(roof.placement.span_axis, SpanAxis::Depth);
        assert_eq!(roof.placement.pitch_rad, 0.0);
        assert!((roof.placement.low_edge_height_mm - 2400.0).abs() < 1e-9);
        assert!((roof.placement.high_edge_height_mm - 2400.0).abs() < 1e-9);

        // bottom chords now run along world z across the roof depth
        let chord = roof.members.iter().find(|m| m.kind == MemberKind::TrussChord).unwrap();
        let ends: Vec<_> = world_corners(chord);
        let z_span = ends.iter().map(|p| p.z).fold(f64::NEG_INFINITY, f64::max)
            - ends.iter().map(|p| p.z).fold(f64::INFINITY, f64::min);
        assert!((z_span - dims.roof.depth_mm as f64).abs() < 1e-6);
        assert!((chord.anchor.y - 2400.0).abs() < 1e-9);
    }

    #[test]
    fn test_gable_footprint_starts_at_overhang_and_is_centered() {
        let config = BuildingConfiguration::default()
            .with_frame(3000.0, 4000.0)
            .with_roof_style(RoofStyle::Gable);
        let dims = resolve(&config);
        let roof = frame_roof(&config, &dims);

        let all_x: Vec<f64> = roof.members.iter().flat_map(world_corners).map(|p| p.x).collect();
        let min_x = all_x.iter().copied().fold(f64::INFINITY, f64::min);
        let max_x = all_x.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert!((min_x + 300.0).abs() < 1e-6);

        // sloped members hang past the chords by the same amount on both sides
        let chord_x: Vec<f64> = roof
            .members
            .iter()
            .filter(|m| m.kind == MemberKind::TrussChord)
            .flat_map(world_corners)
            .map(|p| p.x)
            .collect();
        let chord_min = chord_x.iter().copied().fold(f64::INFINITY, f64::min);
        let chord_max = chord_x.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert!((chord_max - chord_min - 3600.0).abs() < 1e-6);
        assert!(((chord_min - min_x) - (max_x - chord_max)).abs() < 1e-6);
    }

    #[test]
    fn test_roof_is_deterministic() {
        let config = BuildingConfiguration::default().with_roof_style(RoofStyle::Gable);
        let dims = resolve(&config);
        assert_eq!(frame_roof(&config, &dims), frame_roof(&config, &dims));
    }
}
