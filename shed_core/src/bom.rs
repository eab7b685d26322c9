//! # Cutting List
//!
//! Collapses the member list into rows a builder can shop and cut from.
//!
//! | Source                      | Item          | Length          | Width          | Note                    |
//! |-----------------------------|---------------|-----------------|----------------|-------------------------|
//! | Timber member               | role label    | ⌊longest side⌋  | section narrow | section, e.g. `45x95`   |
//! | Tiled sheet piece           | role label    | ⌊longer side⌋   | ⌊shorter side⌋ | `full sheet`/`trimmed`  |
//! | Untiled sheathing panel     | role label    | per tiled piece | per tiled piece| `full sheet`/`trimmed`  |
//! | Accepted door               | `door`        | height          | width          | host wall               |
//!
//! Identical rows are merged into one with a quantity. Rows come out sorted by
//! item, length, width, then note, so the same model always yields the same
//! list.
//!
//! ## Example
//!
//! ```rust
//! use shed_core::bom::{aggregate, total_pieces};
//! use shed_core::config::BuildingConfiguration;
//! use shed_core::model::generate;
//!
//! let model = generate(&BuildingConfiguration::default());
//! let rows = aggregate(&model.members, &model.overlays);
//! assert_eq!(rows, model.bom);
//! assert!(total_pieces(&rows) >= model.members.len());
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::materials::Material;
use crate::members::Member;
use crate::tiling::tile_sheets;
use crate::walls::{OpeningOverlay, OverlayStatus};

/// One line of the cutting list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomRow {
    pub item: String,
    pub quantity: usize,
    pub length_mm: i64,
    pub width_mm: i64,
    pub note: String,
}

impl std::fmt::Display for BomRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>3} x {} {} x {} mm ({})",
            self.quantity, self.item, self.length_mm, self.width_mm, self.note
        )
    }
}

type RowKey = (String, i64, i64, String);

#[derive(Default)]
struct Tally {
    rows: BTreeMap<RowKey, usize>,
}

impl Tally {
    fn add(&mut self, item: &str, length_mm: i64, width_mm: i64, note: &str) {
        *self
            .rows
            .entry((item.to_string(), length_mm, width_mm, note.to_string()))
            .or_insert(0) += 1;
    }

    fn into_rows(self) -> Vec<BomRow> {
        self.rows
            .into_iter()
            .map(|((item, length_mm, width_mm, note), quantity)| BomRow {
                item,
                quantity,
                length_mm,
                width_mm,
                note,
            })
            .collect()
    }
}

/// Build the cutting list for a set of members and door overlays.
pub fn aggregate(members: &[Member], overlays: &[OpeningOverlay]) -> Vec<BomRow> {
    let mut tally = Tally::default();

    for member in members {
        match member.material {
            Material::Timber { section } => tally.add(
                &member.role,
                member.length_mm().floor() as i64,
                section.narrow_mm().floor() as i64,
                section.display_name(),
            ),
            Material::Sheet { .. } => {
                // sheets always lie with their thickness along local y
                let a = member.size.x.floor() as i64;
                let b = member.size.z.floor() as i64;
                match member.tags.note.as_deref() {
                    Some(note) => tally.add(&member.role, a.max(b), a.min(b), note),
                    None => {
                        for piece in tile_sheets(a, b) {
                            let (l, w) = (piece.a_len_mm, piece.b_len_mm);
                            tally.add(&member.role, l.max(w), l.min(w), piece.note());
                        }
                    }
                }
            }
        }
    }

    for overlay in overlays {
        if let OverlayStatus::Accepted { .. } = overlay.status {
            tally.add("door", overlay.height_mm, overlay.width_mm, overlay.wall.name());
        }
    }

    tally.into_rows()
}

/// Total number of pieces across all rows
pub fn total_pieces(rows: &[BomRow]) -> usize {
    rows.iter().map(|r| r.quantity).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WallId;
    use crate::materials::SectionProfile;
    use crate::members::{Extents, MemberKind, Point3};
    use crate::walls::RemovalReason;

    fn stud(height: f64) -> Member {
        Member::new(
            MemberKind::Stud,
            "stud",
            Material::timber(SectionProfile::S45x95),
            Extents::new(45.0, height, 95.0),
            Point3::default(),
        )
    }

    fn sheet(a: f64, b: f64, note: Option<&str>) -> Member {
        let m = Member::new(
            MemberKind::Sheathing,
            "roof sheathing",
            Material::sheet(18.0),
            Extents::new(a, 18.0, b),
            Point3::default(),
        );
        match note {
            Some(n) => m.with_note(n),
            None => m,
        }
    }

    fn door(id: &str, status: OverlayStatus) -> OpeningOverlay {
        OpeningOverlay {
            id: id.into(),
            wall: WallId::Front,
            width_mm: 900,
            height_mm: 2000,
            status,
        }
    }

    #[test]
    fn test_identical_timber_merged() {
        let rows = aggregate(&[stud(2310.0), stud(2310.9), stud(1000.0)], &[]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].length_mm, 1000);
        assert_eq!(rows[1].quantity, 2);
        assert_eq!(rows[1].width_mm, 45);
        assert_eq!(rows[1].note, "45x95");
    }

    #[test]
    fn test_tiled_pieces_grouped_by_note() {
        let rows = aggregate(
            &[
                sheet(1220.0, 2440.0, Some("full sheet")),
                sheet(2440.0, 1220.0, Some("full sheet")),
                sheet(500.0, 2440.0, Some("trimmed")),
            ],
            &[],
        );
        assert_eq!(rows.len(), 2);
        let full = rows.iter().find(|r| r.note == "full sheet").unwrap();
        assert_eq!((full.quantity, full.length_mm, full.width_mm), (2, 2440, 1220));
    }

    #[test]
    fn test_untiled_panel_is_tiled() {
        let rows = aggregate(&[sheet(1938.7, 4600.0, None)], &[]);
        assert_eq!(total_pieces(&rows), 4);
        let area: i64 = rows
            .iter()
            .map(|r| r.length_mm * r.width_mm * r.quantity as i64)
            .sum();
        assert_eq!(area, 1938 * 4600);
    }

    #[test]
    fn test_only_accepted_doors_listed() {
        let rows = aggregate(
            &[],
            &[
                door("a", OverlayStatus::Accepted { x0_mm: 50, x1_mm: 950 }),
                door("b", OverlayStatus::Removed { reason: RemovalReason::TooWide }),
                door("c", OverlayStatus::Disabled),
            ],
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].item, "door");
        assert_eq!((rows[0].length_mm, rows[0].width_mm), (2000, 900));
        assert_eq!(rows[0].note, "front");
    }

    #[test]
    fn test_rows_sorted_and_order_independent() {
        let members = vec![stud(2310.0), sheet(1220.0, 2440.0, Some("full sheet")), stud(500.0)];
        let mut reversed = members.clone();
        reversed.reverse();
        let rows = aggregate(&members, &[]);
        assert_eq!(rows, aggregate(&reversed, &[]));
        let keys: Vec<_> = rows.iter().map(|r| (&r.item, r.length_mm)).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_display() {
        let rows = aggregate(&[stud(2310.0)], &[]);
        assert_eq!(rows[0].to_string(), "  1 x stud 2310 x 45 mm (45x95)");
    }
}
