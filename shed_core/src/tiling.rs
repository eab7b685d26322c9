//! # Sheet Tiling
//!
//! Covers an `A × B` rectangle with standard sheets, A being the shorter
//! side and B the longer. Sheets are laid on a plain grid without stagger:
//!
//! ```text
//!   B ▲
//!     │┌──────┬──────┬───┐
//!     ││ B-rem│ B-rem│ c │   c = corner remainder
//!     │├──────┼──────┼───┤
//!     ││ full │ full │A- │
//!     ││      │      │rem│
//!     │├──────┼──────┼───┤
//!     ││ full │ full │A- │
//!     ││      │      │rem│
//!     │└──────┴──────┴───┘
//!     └──────────────────────▶ A
//! ```
//!
//! The pieces never overlap and leave no gap: their areas sum to exactly
//! `A × B`.
//!
//! ## Example
//!
//! ```rust
//! use shed_core::tiling::{tile_sheets, total_area};
//!
//! let pieces = tile_sheets(3000, 5000);
//! assert_eq!(total_area(&pieces), 3000 * 5000);
//! assert_eq!(pieces.iter().filter(|p| !p.trimmed).count(), 4);
//! ```

use serde::{Deserialize, Serialize};

use crate::materials::{SHEET_A_MM, SHEET_B_MM};

/// One sheet or offcut in (A, B) plan space, whole millimetres
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SheetPiece {
    pub a0_mm: i64,
    pub b0_mm: i64,
    pub a_len_mm: i64,
    pub b_len_mm: i64,
    /// Cut down from a full sheet
    pub trimmed: bool,
}

impl SheetPiece {
    pub fn area_mm2(&self) -> i64 {
        self.a_len_mm * self.b_len_mm
    }

    /// Cutting-list note for this piece
    pub fn note(&self) -> &'static str {
        if self.trimmed {
            "trimmed"
        } else {
            "full sheet"
        }
    }
}

/// Tile an `a × b` rectangle with 1220 × 2440 sheets.
///
/// Arguments may come in either order; the shorter one becomes A. Extents
/// below 1 mm are treated as 1 mm.
pub fn tile_sheets(a_mm: i64, b_mm: i64) -> Vec<SheetPiece> {
    let a_mm = a_mm.max(1);
    let b_mm = b_mm.max(1);
    let (a, b) = if a_mm <= b_mm { (a_mm, b_mm) } else { (b_mm, a_mm) };

    let a_full = a / SHEET_A_MM;
    let a_rem = a % SHEET_A_MM;
    let b_full = b / SHEET_B_MM;
    let b_rem = b % SHEET_B_MM;

    let mut pieces = Vec::with_capacity(((a_full + 1) * (b_full + 1)) as usize);

    for j in 0..b_full {
        for i in 0..a_full {
            pieces.push(SheetPiece {
                a0_mm: i * SHEET_A_MM,
                b0_mm: j * SHEET_B_MM,
                a_len_mm: SHEET_A_MM,
                b_len_mm: SHEET_B_MM,
                trimmed: false,
            });
        }
    }

    // A-remainder strip across the full B rows
    if a_rem > 0 {
        for j in 0..b_full {
            pieces.push(SheetPiece {
                a0_mm: a_full * SHEET_A_MM,
                b0_mm: j * SHEET_B_MM,
                a_len_mm: a_rem,
                b_len_mm: SHEET_B_MM,
                trimmed: true,
            });
        }
    }

    // B-remainder strip across the full A columns
    if b_rem > 0 {
        for i in 0..a_full {
            pieces.push(SheetPiece {
                a0_mm: i * SHEET_A_MM,
                b0_mm: b_full * SHEET_B_MM,
                a_len_mm: SHEET_A_MM,
                b_len_mm: b_rem,
                trimmed: true,
            });
        }
    }

    if a_rem > 0 && b_rem > 0 {
        pieces.push(SheetPiece {
            a0_mm: a_full * SHEET_A_MM,
            b0_mm: b_full * SHEET_B_MM,
            a_len_mm: a_rem,
            b_len_mm: b_rem,
            trimmed: true,
        });
    }

    pieces
}

/// Sum of piece areas, mm²
pub fn total_area(pieces: &[SheetPiece]) -> i64 {
    pieces.iter().map(SheetPiece::area_mm2).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_exact_fit_has_no_offcuts() {
        let pieces = tile_sheets(2440, 4880);
        assert_eq!(pieces.len(), 4);
        assert!(pieces.iter().all(|p| !p.trimmed));
    }

    #[test]
    fn test_remainder_strips_and_corner() {
        let pieces = tile_sheets(3000, 5000);
        // 2 x 2 full, 2 A-strips of 560, 2 B-strips of 120, 1 corner
        assert_eq!(pieces.len(), 4 + 2 + 2 + 1);
        let corner = pieces.last().unwrap();
        assert_eq!((corner.a_len_mm, corner.b_len_mm), (560, 120));
        assert_eq!((corner.a0_mm, corner.b0_mm), (2440, 4880));
    }

    #[test]
    fn test_smaller_than_one_sheet() {
        let pieces = tile_sheets(500, 700);
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].area_mm2(), 350_000);
        assert!(pieces[0].trimmed);
    }

    #[test]
    fn test_argument_order_does_not_matter() {
        assert_eq!(tile_sheets(5000, 3000), tile_sheets(3000, 5000));
    }

    #[test]
    fn test_notes() {
        let pieces = tile_sheets(1220, 2441);
        assert_eq!(pieces[0].note(), "full sheet");
        assert_eq!(pieces[1].note(), "trimmed");
    }

    proptest! {
        #[test]
        fn tiling_covers_area_exactly(a in 1i64..20_000, b in 1i64..20_000) {
            let pieces = tile_sheets(a, b);
            prop_assert_eq!(total_area(&pieces), a * b);
        }

        #[test]
        fn pieces_stay_inside_rectangle(a in 1i64..10_000, b in 1i64..10_000) {
            let (short, long) = if a <= b { (a, b) } else { (b, a) };
            for p in tile_sheets(a, b) {
                prop_assert!(p.a0_mm + p.a_len_mm <= short);
                prop_assert!(p.b0_mm + p.b_len_mm <= long);
                prop_assert!(p.a_len_mm > 0 && p.b_len_mm > 0);
            }
        }
    }
}
