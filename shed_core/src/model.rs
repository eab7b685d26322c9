//! # Building Model
//!
//! One call from configuration to everything the renderer and the cutting
//! list need. Each step is a pure function of the configuration snapshot, so
//! generating twice yields identical models.
//!
//! ## Pipeline
//!
//! ```text
//! BuildingConfiguration
//!     │
//!     ├─▶ dimensions::resolve ──▶ ResolvedDimensions
//!     │                               │
//!     ├─▶ walls::layout_walls ◀───────┤ ──▶ wall members, overlays, events
//!     ├─▶ roof::frame_roof    ◀───────┘ ──▶ roof members, placement
//!     │
//!     └─▶ bom::aggregate(all members, overlays) ──▶ cutting list
//! ```
//!
//! ## Example
//!
//! ```rust
//! use shed_core::config::{BuildingConfiguration, Opening, WallId};
//! use shed_core::model::generate;
//!
//! let config = BuildingConfiguration::default()
//!     .with_opening(Opening::standard_door(WallId::Front, 1000.0));
//! let model = generate(&config);
//!
//! assert_eq!(model.dimensions.frame.width_mm, 3000);
//! assert_eq!(model.accepted_doors().count(), 1);
//! assert!(model.bom.iter().any(|row| row.item == "door"));
//! ```

use serde::{Deserialize, Serialize};

use crate::bom::{self, BomRow};
use crate::config::BuildingConfiguration;
use crate::dimensions::{self, ResolvedDimensions};
use crate::members::Member;
use crate::roof::{self, RoofPlacement};
use crate::walls::{self, OpeningOverlay, SnapEvent};

/// Everything generated from one configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingModel {
    pub dimensions: ResolvedDimensions,
    /// Wall members (front, back, left, right) followed by roof members
    pub members: Vec<Member>,
    pub overlays: Vec<OpeningOverlay>,
    pub events: Vec<SnapEvent>,
    pub roof: RoofPlacement,
    pub bom: Vec<BomRow>,
}

impl BuildingModel {
    /// Overlays of doors that made it into the walls
    pub fn accepted_doors(&self) -> impl Iterator<Item = &OpeningOverlay> + '_ {
        self.overlays.iter().filter(|o| o.is_accepted())
    }
}

/// Generate the full model for a configuration.
pub fn generate(config: &BuildingConfiguration) -> BuildingModel {
    let dims = dimensions::resolve(config);
    let walls = walls::layout_walls(config, &dims);
    let roof = roof::frame_roof(config, &dims);

    let mut members = walls.members;
    members.extend(roof.members);
    let bom = bom::aggregate(&members, &walls.overlays);

    tracing::info!(
        mode = ?config.mode,
        frame_width_mm = dims.frame.width_mm,
        frame_depth_mm = dims.frame.depth_mm,
        members = members.len(),
        bom_rows = bom.len(),
        "model generated"
    );

    BuildingModel {
        dimensions: dims,
        members,
        overlays: walls.overlays,
        events: walls.events,
        roof: roof.placement,
        bom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RoofStyle, WallVariant};
    use crate::members::MemberKind;

    #[test]
    fn test_generate_is_deterministic() {
        let config = BuildingConfiguration::default()
            .with_wall_variant(WallVariant::Panelized)
            .with_roof_style(RoofStyle::Gable);
        assert_eq!(generate(&config), generate(&config));
    }

    #[test]
    fn test_members_contain_walls_and_roof() {
        let model = generate(&BuildingConfiguration::default());
        assert!(model.members.iter().any(|m| m.kind == MemberKind::Stud));
        assert!(model.members.iter().any(|m| m.kind == MemberKind::Rafter));
        assert!(model.members.iter().any(|m| m.kind == MemberKind::Sheathing));
        // wall members come first
        let first_roof = model.members.iter().position(|m| m.tags.wall.is_none()).unwrap();
        assert!(model.members[first_roof..].iter().all(|m| m.tags.wall.is_none()));
    }

    #[test]
    fn test_bom_matches_members() {
        let model = generate(&BuildingConfiguration::default());
        assert_eq!(model.bom, bom::aggregate(&model.members, &model.overlays));
    }
}
