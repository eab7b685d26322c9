//! Standard Timber Sections
//!
//! Metric sawn sections used for wall framing and rafters, with the narrow
//! and wide dimensions the layout engines orient members by.
//!
//! ## Orientation
//!
//! - Plates lie flat: vertical thickness = narrow, wall thickness = wide
//! - Studs stand on edge: width along the wall = narrow, depth = wide
//! - Rafters and chords stand on edge: thickness = narrow, depth = wide

use serde::{Deserialize, Serialize};

/// Standard section designation (narrow x wide, millimetres)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum SectionProfile {
    /// 45 x 95
    #[default]
    S45x95,
    /// 45 x 120
    S45x120,
    /// 45 x 145
    S45x145,
    /// 45 x 170
    S45x170,
    /// 45 x 195
    S45x195,
    /// 50 x 100
    S50x100,
    /// 50 x 150
    S50x150,
    /// 50 x 200
    S50x200,
}

impl SectionProfile {
    /// All sections for UI selection (wall sections first)
    pub const ALL: [SectionProfile; 8] = [
        SectionProfile::S45x95,
        SectionProfile::S45x120,
        SectionProfile::S45x145,
        SectionProfile::S45x170,
        SectionProfile::S45x195,
        SectionProfile::S50x100,
        SectionProfile::S50x150,
        SectionProfile::S50x200,
    ];

    /// (narrow, wide) in millimetres
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            SectionProfile::S45x95 => (45.0, 95.0),
            SectionProfile::S45x120 => (45.0, 120.0),
            SectionProfile::S45x145 => (45.0, 145.0),
            SectionProfile::S45x170 => (45.0, 170.0),
            SectionProfile::S45x195 => (45.0, 195.0),
            SectionProfile::S50x100 => (50.0, 100.0),
            SectionProfile::S50x150 => (50.0, 150.0),
            SectionProfile::S50x200 => (50.0, 200.0),
        }
    }

    /// Narrow dimension in mm
    pub fn narrow_mm(&self) -> f64 {
        self.dimensions().0
    }

    /// Wide dimension in mm
    pub fn wide_mm(&self) -> f64 {
        self.dimensions().1
    }

    /// Get display name (e.g., "45x95")
    pub fn display_name(&self) -> &'static str {
        match self {
            SectionProfile::S45x95 => "45x95",
            SectionProfile::S45x120 => "45x120",
            SectionProfile::S45x145 => "45x145",
            SectionProfile::S45x170 => "45x170",
            SectionProfile::S45x195 => "45x195",
            SectionProfile::S50x100 => "50x100",
            SectionProfile::S50x150 => "50x150",
            SectionProfile::S50x200 => "50x200",
        }
    }
}

impl std::fmt::Display for SectionProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_dimensions() {
        let s = SectionProfile::S45x95;
        assert_eq!(s.dimensions(), (45.0, 95.0));
        assert_eq!(s.narrow_mm(), 45.0);
        assert_eq!(s.wide_mm(), 95.0);
        assert_eq!(s.display_name(), "45x95");
    }

    #[test]
    fn test_narrow_never_exceeds_wide() {
        for s in SectionProfile::ALL {
            assert!(s.narrow_mm() <= s.wide_mm(), "{}", s);
        }
    }

    #[test]
    fn test_serialization() {
        let s = SectionProfile::S45x195;
        let json = serde_json::to_string(&s).unwrap();
        let parsed: SectionProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(s, parsed);
    }
}
