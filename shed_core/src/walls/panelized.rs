//! # Panelized Wall Layout
//!
//! Prefabricated panels no longer than [`MAX_PANEL_RUN_MM`]. A longer wall is
//! split at its midpoint (and each half again while still too long). Every
//! panel carries its own plates, a stud at each edge and one mid-span stud.
//! Doors get a full-height upright on each side and a header exactly as wide
//! as the door.
//!
//! ## Seams and doors
//!
//! A seam inside a door swing would leave the door hanging between two
//! panels. When a door overlaps a seam's stud zone (`seam ± stud/2`), that
//! seam is replaced by a dedicated door panel bracketed at the door's
//! uprights, flanked by whatever remains on either side:
//!
//! ```text
//!  naive:   [        panel 1        |        panel 2        ]
//!                          [  door  ]
//!  actual:  [    panel 1     |U  door  U|     panel 3       ]
//! ```

use crate::members::MemberKind;

use super::framing::{FramedWall, StudRow, WallFrame};
use super::snap::PlacedDoor;

/// Longest run a single panel may have
pub const MAX_PANEL_RUN_MM: f64 = 2400.0;

/// Seam positions from repeated midpoint splitting, ascending.
pub fn seam_positions(length_mm: f64) -> Vec<f64> {
    let mut seams = Vec::new();
    // explicit stack keeps the split bounded and in order
    let mut stack = vec![(0.0, length_mm)];
    while let Some((start, end)) = stack.pop() {
        if end - start > MAX_PANEL_RUN_MM {
            let mid = (start + end) / 2.0;
            seams.push(mid);
            stack.push((start, mid));
            stack.push((mid, end));
        }
    }
    seams.sort_by(f64::total_cmp);
    seams
}

/// Panel intervals `(start, end)` covering `[0, length]` without gaps.
pub fn panel_bounds(length_mm: f64, stud_width_mm: f64, doors: &[PlacedDoor]) -> Vec<(f64, f64)> {
    let n = stud_width_mm;
    let seams = seam_positions(length_mm);

    let brackets: Vec<(f64, f64)> = doors
        .iter()
        .map(|d| (d.x0_mm as f64, d.x1_mm as f64))
        .filter(|&(x0, x1)| seams.iter().any(|&s| x0 < s + n / 2.0 && s - n / 2.0 < x1))
        .map(|(x0, x1)| (x0 - n, x1 + n))
        .collect();

    let mut cuts: Vec<f64> = seams
        .into_iter()
        .filter(|&s| !brackets.iter().any(|&(b0, b1)| s >= b0 && s <= b1))
        .collect();
    for &(b0, b1) in &brackets {
        cuts.push(b0);
        cuts.push(b1);
    }
    cuts.sort_by(f64::total_cmp);

    let mut edges = vec![0.0];
    for cut in cuts {
        let last = edges.last().copied().unwrap_or(0.0);
        if cut >= n && cut <= length_mm - n && cut - last >= n {
            edges.push(cut);
        }
    }
    edges.push(length_mm);

    edges.windows(2).map(|w| (w[0], w[1])).collect()
}

pub(crate) fn layout(frame: &WallFrame, doors: &[PlacedDoor]) -> FramedWall {
    let n = frame.stud_width();
    let length = frame.length();
    if length < n {
        return FramedWall::default();
    }

    let panels = panel_bounds(length, n, doors);
    let count = panels.len();
    let mut wall = FramedWall::default();
    for (i, &(start, end)) in panels.iter().enumerate() {
        let note = format!("panel {}/{}", i + 1, count);
        for plate in frame.plates(start, end - start) {
            wall.members.push(plate.with_note(note.clone()));
        }
    }

    let mut row = StudRow::new(frame, doors);
    for door in doors {
        row.frame_opening(door.x0_mm as f64 - n, "upright", frame.stud_height(), &door.id);
        row.frame_opening(door.x1_mm as f64, "upright", frame.stud_height(), &door.id);
    }
    for (i, &(start, end)) in panels.iter().enumerate() {
        let note = format!("panel {}/{}", i + 1, count);
        row.place(start, "panel edge stud", Some(note.clone()));
        row.place(end - n, "panel edge stud", Some(note.clone()));
        row.place((start + end) / 2.0 - n / 2.0, "mid-span stud", Some(note));
    }
    row.finish(frame, &mut wall);

    for door in doors {
        wall.members.push(
            frame
                .member(
                    MemberKind::Header,
                    "header",
                    door.x0_mm as f64,
                    door.width_mm as f64,
                    n + frame.trimmer_height(door),
                    frame.header_depth(),
                    n,
                )
                .for_opening(door.id.clone()),
        );
    }

    wall
}
