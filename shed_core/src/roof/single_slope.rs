//! Single-slope roof assembly.
//!
//! Built flat in the unit frame with lengths already measured along the
//! slope; placement applies the pitch. Two rim joists close the low and high
//! ends, rafters run between them and sheathing is tiled on top.

use crate::dimensions::ResolvedDimensions;
use crate::materials::{Material, SectionProfile};
use crate::members::{Extents, Member, MemberKind, Point3};
use crate::tiling::tile_sheets;
use crate::units::Radians;

use super::layout::{single_slope_span_axis, sloped_length, spaced_positions};
use super::{RoofInputs, RoofUnit};

pub(crate) fn build(dims: &ResolvedDimensions, section: SectionProfile, inputs: &RoofInputs) -> RoofUnit {
    let frame_w = dims.frame.width_mm as f64;
    let span_axis = single_slope_span_axis(frame_w, dims.frame.depth_mm as f64);
    let pitch = Radians::from_rise_run(inputs.max_height_mm - inputs.min_height_mm, frame_w).0;

    let t = section.narrow_mm();
    let h = section.wide_mm();
    let (plan_span, ridge_len) = span_axis.split(dims.roof.width_mm as f64, dims.roof.depth_mm as f64);
    let slope_len = sloped_length(plan_span, plan_span * pitch.tan());
    let timber = Material::timber(section);

    let mut members = Vec::new();

    for u in [0.0, (slope_len - t).max(0.0)] {
        members.push(Member::new(
            MemberKind::Rim,
            "rim joist",
            timber,
            Extents::new(t, h, ridge_len),
            Point3::new(u, 0.0, 0.0),
        ));
    }

    let rafter_len = (slope_len - 2.0 * t).max(0.0);
    for v in spaced_positions(ridge_len, t) {
        members.push(Member::new(
            MemberKind::Rafter,
            "rafter",
            timber,
            Extents::new(rafter_len, h, t),
            Point3::new(t, 0.0, v),
        ));
    }

    // A runs along whichever side is shorter
    let u_len = slope_len.floor() as i64;
    let v_len = ridge_len.floor() as i64;
    let a_is_u = u_len <= v_len;
    for piece in tile_sheets(u_len, v_len) {
        let (u0, v0, du, dv) = if a_is_u {
            (piece.a0_mm, piece.b0_mm, piece.a_len_mm, piece.b_len_mm)
        } else {
            (piece.b0_mm, piece.a0_mm, piece.b_len_mm, piece.a_len_mm)
        };
        members.push(
            Member::new(
                MemberKind::Sheathing,
                "roof sheathing",
                Material::sheet(inputs.sheathing_mm),
                Extents::new(du as f64, inputs.sheathing_mm, dv as f64),
                Point3::new(u0 as f64, h, v0 as f64),
            )
            .with_note(piece.note()),
        );
    }

    RoofUnit {
        members,
        span_axis,
        pitch_rad: pitch,
        rise_mm: inputs.max_height_mm - inputs.min_height_mm,
    }
}
