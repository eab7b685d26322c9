//! Gable roof assembly.
//!
//! Trusses span the shorter roof-plan side, the ridge runs along the longer.
//! Each truss is a bottom chord, two rafters meeting over mid-span and a king
//! post. Sloped members carry their own pitch inside the unit, so the unit is
//! placed without any further pitch.
//!
//! ```text
//!                 ridge
//!                  ▄▄
//!            ╱     ██     ╲        rise = clamp(0.2 × span, 200, 900)
//!        ╱  ▪      ██      ▪  ╲    ▪ = purlin at ¼ and ¾ span
//!    ╱             ██             ╲
//!   ▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀  bottom chord
//! ```

use crate::dimensions::ResolvedDimensions;
use crate::materials::{Material, SectionProfile};
use crate::members::{Extents, Member, MemberKind, Point3, Rotation};

use super::layout::{gable_rise, gable_span_axis, sloped_length, spaced_positions};
use super::{RoofInputs, RoofUnit};

fn pitched(mut member: Member, pitch_rad: f64) -> Member {
    member.rotation = Rotation::new(0.0, pitch_rad);
    member
}

pub(crate) fn build(dims: &ResolvedDimensions, section: SectionProfile, inputs: &RoofInputs) -> RoofUnit {
    let (roof_w, roof_d) = (dims.roof.width_mm as f64, dims.roof.depth_mm as f64);
    let span_axis = gable_span_axis(roof_w, roof_d);
    let (span, ridge_len) = span_axis.split(roof_w, roof_d);

    let half = span / 2.0;
    let rise = gable_rise(span);
    let slope = (rise / half).atan();
    let rafter_len = sloped_length(half, rise);

    let t = section.narrow_mm();
    let h = section.wide_mm();
    let timber = Material::timber(section);
    let (sin, cos) = slope.sin_cos();

    let mut members = Vec::new();

    for v in spaced_positions(ridge_len, t) {
        members.push(Member::new(
            MemberKind::TrussChord,
            "bottom chord",
            timber,
            Extents::new(span, h, t),
            Point3::new(0.0, 0.0, v),
        ));
        members.push(pitched(
            Member::new(
                MemberKind::Rafter,
                "truss rafter",
                timber,
                Extents::new(rafter_len, h, t),
                Point3::new(0.0, h, v),
            ),
            slope,
        ));
        members.push(pitched(
            Member::new(
                MemberKind::Rafter,
                "truss rafter",
                timber,
                Extents::new(rafter_len, h, t),
                Point3::new(half, h + rise, v),
            ),
            -slope,
        ));
        members.push(Member::new(
            MemberKind::TrussWeb,
            "king post",
            timber,
            Extents::new(t, rise, t),
            Point3::new(half - t / 2.0, h, v),
        ));
    }

    members.push(Member::new(
        MemberKind::Ridge,
        "ridge beam",
        timber,
        Extents::new(t, h, ridge_len),
        Point3::new(half - t / 2.0, h + rise, 0.0),
    ));

    // hung under the rafters, top touching at the purlin's downhill edge
    let purlin_y = rise / 2.0 - (t / 2.0) * slope.tan();
    for u in [span / 4.0, 3.0 * span / 4.0] {
        members.push(Member::new(
            MemberKind::Purlin,
            "purlin",
            timber,
            Extents::new(t, h, ridge_len),
            Point3::new(u - t / 2.0, purlin_y, 0.0),
        ));
    }

    let sheet = Material::sheet(inputs.sheathing_mm);
    let panel = Extents::new(rafter_len, inputs.sheathing_mm, ridge_len);
    members.push(pitched(
        Member::new(
            MemberKind::Sheathing,
            "roof sheathing panel",
            sheet,
            panel,
            Point3::new(-h * sin, h + h * cos, 0.0),
        ),
        slope,
    ));
    members.push(pitched(
        Member::new(
            MemberKind::Sheathing,
            "roof sheathing panel",
            sheet,
            panel,
            Point3::new(half + h * sin, h + rise + h * cos, 0.0),
        ),
        -slope,
    ));

    RoofUnit {
        members,
        span_axis,
        pitch_rad: 0.0,
        rise_mm: rise,
    }
}
