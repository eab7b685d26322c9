//! # Materials
//!
//! What a placed member is cut from: a sawn timber section or a sheet good.
//!
//! ## JSON Serialization
//!
//! Materials serialize with a "type" discriminator:
//!
//! ```json
//! { "type": "Timber", "section": "S45x95" }
//! { "type": "Sheet", "thickness_mm": 18.0 }
//! ```

pub mod sections;

pub use sections::SectionProfile;

use serde::{Deserialize, Serialize};

/// Standard sheet size along the short (A) axis, mm
pub const SHEET_A_MM: i64 = 1220;

/// Standard sheet size along the long (B) axis, mm
pub const SHEET_B_MM: i64 = 2440;

/// Material a member is cut from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Material {
    /// Sawn timber of a standard section
    Timber { section: SectionProfile },
    /// Sheathing board (OSB / plywood) of a given thickness
    Sheet { thickness_mm: f64 },
}

impl Material {
    /// Timber material for a section
    pub fn timber(section: SectionProfile) -> Self {
        Material::Timber { section }
    }

    /// Sheet material of a thickness
    pub fn sheet(thickness_mm: f64) -> Self {
        Material::Sheet { thickness_mm }
    }

    /// Short description used in cutting-list notes ("45x95", "18mm sheet")
    pub fn display_name(&self) -> String {
        match self {
            Material::Timber { section } => section.display_name().to_string(),
            Material::Sheet { thickness_mm } => format!("{}mm sheet", thickness_mm.floor() as i64),
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(Material::timber(SectionProfile::S45x145).display_name(), "45x145");
        assert_eq!(Material::sheet(18.0).display_name(), "18mm sheet");
        assert_eq!(Material::sheet(12.0).to_string(), "12mm sheet");
    }

    #[test]
    fn test_material_json_tag() {
        let json = serde_json::to_string(&Material::timber(SectionProfile::S45x95)).unwrap();
        assert!(json.contains("\"type\":\"Timber\""));
        let parsed: Material = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Material::timber(SectionProfile::S45x95));
    }
}
