//! # Continuous Wall Layout
//!
//! Stick framing along the full wall: full-length plates, a stud at each
//! corner and intermediate studs on 400 mm centres. Each door is framed with
//! king studs (full height), trimmer studs (door height) and a header that
//! spans the door plus both trimmers. Doors closer than two studs apart share
//! the studs between them.
//!
//! ```text
//!  ┌──────────────────────────────────────────────┐ top plate
//!  │ │   │   │K│T══════header══════T│K│   │   │ │
//!  │ │   │   │ │T                  T│ │   │   │ │
//!  │ │   │   │ │T       door       T│ │   │   │ │
//!  └──────────────────────────────────────────────┘ bottom plate
//! ```

use crate::members::MemberKind;

use super::framing::{FramedWall, StudRow, WallFrame};
use super::snap::PlacedDoor;

/// Centre-to-centre spacing of intermediate studs
pub const STUD_SPACING_MM: f64 = 400.0;

pub(crate) fn layout(frame: &WallFrame, doors: &[PlacedDoor]) -> FramedWall {
    let n = frame.stud_width();
    let length = frame.length();
    if length < n {
        return FramedWall::default();
    }

    let mut wall = FramedWall {
        members: frame.plates(0.0, length).into(),
        events: Vec::new(),
    };
    let mut row = StudRow::new(frame, doors);

    // Door framing claims its slots first, left to right, each door inner
    // studs before outer
    for door in doors {
        let x0 = door.x0_mm as f64;
        let x1 = door.x1_mm as f64;
        let trimmer_h = frame.trimmer_height(door);
        row.frame_opening(x0 - n, "trimmer stud", trimmer_h, &door.id);
        row.frame_opening(x0 - 2.0 * n, "king stud", frame.stud_height(), &door.id);
        row.frame_opening(x1, "trimmer stud", trimmer_h, &door.id);
        row.frame_opening(x1 + n, "king stud", frame.stud_height(), &door.id);
    }

    row.place(0.0, "corner stud", None);
    row.place(length - n, "corner stud", None);

    let mut k = 1.0;
    loop {
        let start = k * STUD_SPACING_MM - n / 2.0;
        if start + n > length - n {
            break;
        }
        row.place(start, "stud", None);
        k += 1.0;
    }

    row.finish(frame, &mut wall);

    for door in doors {
        let header_run = door.width_mm as f64 + 2.0 * n;
        let y = n + frame.trimmer_height(door);
        wall.members.push(
            frame
                .member(
                    MemberKind::Header,
                    "header",
                    door.x0_mm as f64 - n,
                    header_run,
                    y,
                    frame.header_depth(),
                    n,
                )
                .for_opening(door.id.clone()),
        );
    }

    wall
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WallId;
    use crate::materials::SectionProfile;
    use crate::members::Member;
    use crate::walls::framing::{RunAxis, WallPlacement};
    use crate::walls::SnapEvent;

    fn frame(length: i64) -> WallFrame {
        WallFrame {
            placement: WallPlacement {
                id: WallId::Front,
                axis: RunAxis::X,
                length_mm: length,
                origin_x_mm: 0.0,
                origin_z_mm: 0.0,
            },
            section: SectionProfile::S45x95,
            wall_height_mm: 2400.0,
        }
    }

    fn door(x0: i64, width: i64) -> PlacedDoor {
        named_door("d1", x0, width)
    }

    fn named_door(id: &str, x0: i64, width: i64) -> PlacedDoor {
        PlacedDoor {
            id: id.into(),
            wall: WallId::Front,
            x0_mm: x0,
            x1_mm: x0 + width,
            width_mm: width,
            height_mm: 2000,
            desired_mm: x0,
        }
    }

    fn studs(members: &[Member]) -> Vec<&Member> {
        members.iter().filter(|m| m.kind == MemberKind::Stud).collect()
    }

    #[test]
    fn test_plain_wall() {
        let members = layout(&frame(3000), &[]).members;
        let plates: Vec<_> = members.iter().filter(|m| m.kind == MemberKind::Plate).collect();
        assert_eq!(plates.len(), 2);
        assert!(plates.iter().all(|p| p.size.x == 3000.0));

        let studs = studs(&members);
        // two corners plus seven intermediates on 400 mm centres
        assert_eq!(studs.first().map(|s| s.anchor.x), Some(0.0));
        assert_eq!(studs.last().map(|s| s.anchor.x), Some(2955.0));
        assert_eq!(studs.len(), 2 + 7);
        assert!(studs.iter().all(|s| s.size.y == 2310.0));
    }

    #[test]
    fn test_door_framing() {
        let members = layout(&frame(3000), &[door(100, 900)]).members;
        let kings: Vec<_> = members.iter().filter(|m| m.role == "king stud").collect();
        let trimmers: Vec<_> = members.iter().filter(|m| m.role == "trimmer stud").collect();
        let headers: Vec<_> = members.iter().filter(|m| m.kind == MemberKind::Header).collect();

        assert_eq!(kings.len(), 2);
        // the left king at 10 mm displaces the corner stud
        assert!(!members.iter().any(|m| m.role == "corner stud" && m.anchor.x == 0.0));
        assert_eq!(trimmers.len(), 2);
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[0].size.x, 900.0 + 90.0);
        assert_eq!(headers[0].anchor.x, 55.0);
        assert_eq!(headers[0].anchor.y, 45.0 + 2000.0);
        assert!(trimmers.iter().all(|t| t.size.y == 2000.0));
        assert_eq!(headers[0].tags.opening_id.as_deref(), Some("d1"));
    }

    #[test]
    fn test_no_stud_inside_door() {
        let d = door(1000, 900);
        let members = layout(&frame(4000), &[d.clone()]).members;
        for s in studs(&members) {
            let x = s.anchor.x;
            assert!(x + 45.0 <= d.x0_mm as f64 || x >= d.x1_mm as f64, "stud at {}", x);
        }
    }

    #[test]
    fn test_no_overlapping_studs() {
        let members = layout(&frame(5000), &[door(50, 900), door(1500, 1200)]).members;
        let mut xs: Vec<f64> = studs(&members).iter().map(|s| s.anchor.x).collect();
        xs.sort_by(f64::total_cmp);
        for pair in xs.windows(2) {
            assert!(pair[1] - pair[0] >= 45.0 - 1e-9, "{:?}", pair);
        }
    }

    #[test]
    fn test_degenerate_wall() {
        let wall = layout(&frame(10), &[]);
        assert!(wall.members.is_empty());
        assert!(wall.events.is_empty());
    }

    #[test]
    fn test_doors_at_minimum_gap_share_studs() {
        let doors = [named_door("a", 500, 900), named_door("b", 1450, 900)];
        let wall = layout(&frame(4000), &doors);
        let studs = studs(&wall.members);

        // every door edge has a stud hard against it on the outside
        for d in &doors {
            let (x0, x1) = (d.x0_mm as f64, d.x1_mm as f64);
            assert!(studs.iter().any(|s| s.anchor.x < x0 && s.anchor.x + 45.0 > x0 - 45.0), "{} left", d.id);
            assert!(studs.iter().any(|s| s.anchor.x < x1 + 45.0 && s.anchor.x + 45.0 > x1), "{} right", d.id);
        }

        let mut xs: Vec<f64> = studs.iter().map(|s| s.anchor.x).collect();
        xs.sort_by(f64::total_cmp);
        for pair in xs.windows(2) {
            assert!(pair[1] - pair[0] >= 45.0 - 1e-9, "{:?}", pair);
        }

        assert_eq!(wall.events.len(), 2);
        for event in &wall.events {
            match event {
                SnapEvent::StudShared { door_id, shared_with, .. } => {
                    assert_eq!((door_id.as_str(), shared_with.as_str()), ("b", "a"));
                }
                other => panic!("unexpected event {:?}", other),
            }
        }
        assert_eq!(wall.members.iter().filter(|m| m.kind == MemberKind::Header).count(), 2);
    }

    #[test]
    fn test_king_past_wall_start_reported() {
        let wall = layout(&frame(3000), &[door(50, 900)]);
        assert_eq!(
            wall.events,
            vec![SnapEvent::StudOmitted {
                door_id: "d1".into(),
                wall: WallId::Front,
                role: "king stud".into(),
                at_mm: -40,
            }]
        );
        let trimmers = wall.members.iter().filter(|m| m.role == "trimmer stud").count();
        assert_eq!(trimmers, 2);
    }
}
