//! # Wall Layout Engine
//!
//! Places plates, studs and headers for the four walls of the frame and
//! decides where each door actually goes.
//!
//! ## Wall arrangement
//!
//! ```text
//!            back (full width)
//!   ┌───────────────────────────────┐
//!   │▓│                           │▓│
//!   │▓│ left                right │▓│   left/right: depth − 2t,
//!   │▓│                           │▓│   offset inward by t
//!   └───────────────────────────────┘
//!            front (full width)
//! ```
//!
//! The four walls meet at the corners without overlap or gap. Each call is
//! stateless: the same wall and doors always give the same members.
//!
//! ## Example
//!
//! ```rust
//! use shed_core::config::{BuildingConfiguration, Opening, WallId};
//! use shed_core::dimensions::resolve;
//! use shed_core::walls::{layout_walls, OverlayStatus};
//!
//! let config = BuildingConfiguration::default()
//!     .with_opening(Opening::with_id("door", WallId::Front, 100.0, 900.0, 2000.0));
//! let walls = layout_walls(&config, &resolve(&config));
//!
//! assert_eq!(walls.overlays[0].status, OverlayStatus::Accepted { x0_mm: 100, x1_mm: 1000 });
//! assert!(walls.events.is_empty());
//! ```

pub mod continuous;
pub(crate) mod framing;
pub mod panelized;
pub mod snap;

pub use framing::{RunAxis, WallPlacement};
pub use snap::{snap_doors, PlacedDoor, RemovalReason, SnapConstraint, SnapEvent, SnapOutcome};

use serde::{Deserialize, Serialize};

use crate::config::{defaults, BuildingConfiguration, Opening, WallId, WallVariant};
use crate::dimensions::ResolvedDimensions;
use crate::materials::SectionProfile;
use crate::members::Member;
use crate::units::coerce_mm;

use framing::WallFrame;

/// What became of one configured opening
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum OverlayStatus {
    /// Placed at `[x0, x1]` along its wall
    Accepted { x0_mm: i64, x1_mm: i64 },
    /// Dropped by the snapping procedure
    Removed { reason: RemovalReason },
    /// Switched off in the configuration
    Disabled,
}

/// Engine verdict for one opening; the configuration itself is never edited
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningOverlay {
    pub id: String,
    pub wall: WallId,
    pub width_mm: i64,
    pub height_mm: i64,
    #[serde(flatten)]
    pub status: OverlayStatus,
}

impl OpeningOverlay {
    pub fn is_accepted(&self) -> bool {
        matches!(self.status, OverlayStatus::Accepted { .. })
    }
}

/// Members, overlays and events for one or more walls
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WallLayout {
    pub members: Vec<Member>,
    pub overlays: Vec<OpeningOverlay>,
    pub events: Vec<SnapEvent>,
}

impl WallLayout {
    fn extend(&mut self, other: WallLayout) {
        self.members.extend(other.members);
        self.overlays.extend(other.overlays);
        self.events.extend(other.events);
    }
}

/// Position and length of the four walls for a frame and section.
pub fn wall_placements(dims: &ResolvedDimensions, section: SectionProfile) -> [WallPlacement; 4] {
    let width = dims.frame.width_mm;
    let depth = dims.frame.depth_mm;
    let t = section.wide_mm();
    let side_length = (depth as f64 - 2.0 * t).floor().max(0.0) as i64;

    [
        WallPlacement {
            id: WallId::Front,
            axis: RunAxis::X,
            length_mm: width,
            origin_x_mm: 0.0,
            origin_z_mm: 0.0,
        },
        WallPlacement {
            id: WallId::Back,
            axis: RunAxis::X,
            length_mm: width,
            origin_x_mm: 0.0,
            origin_z_mm: depth as f64 - t,
        },
        WallPlacement {
            id: WallId::Left,
            axis: RunAxis::Z,
            length_mm: side_length,
            origin_x_mm: 0.0,
            origin_z_mm: t,
        },
        WallPlacement {
            id: WallId::Right,
            axis: RunAxis::Z,
            length_mm: side_length,
            origin_x_mm: width as f64 - t,
            origin_z_mm: t,
        },
    ]
}

/// Lay out one wall. `openings` are the openings hosted by this wall.
pub fn layout_wall(
    placement: WallPlacement,
    variant: WallVariant,
    section: SectionProfile,
    wall_height_mm: f64,
    openings: &[Opening],
) -> WallLayout {
    let outcome = snap_doors(placement.id, placement.length_mm, openings);
    let frame = WallFrame {
        placement,
        section,
        wall_height_mm,
    };

    let framed = match variant {
        WallVariant::Continuous => continuous::layout(&frame, &outcome.accepted),
        WallVariant::Panelized => panelized::layout(&frame, &outcome.accepted),
    };

    let overlays = openings
        .iter()
        .map(|o| overlay_for(o, &outcome))
        .collect();

    tracing::debug!(
        wall = %placement.id,
        length_mm = placement.length_mm,
        members = framed.members.len(),
        "wall laid out"
    );

    let mut events = outcome.events;
    events.extend(framed.events);
    WallLayout {
        members: framed.members,
        overlays,
        events,
    }
}

fn overlay_for(opening: &Opening, outcome: &SnapOutcome) -> OpeningOverlay {
    let mut width_mm = coerce_mm(opening.width_mm, defaults::DOOR_WIDTH_MM, 1);
    let mut height_mm = coerce_mm(opening.height_mm, defaults::DOOR_HEIGHT_MM, 1);

    let status = if !opening.enabled {
        OverlayStatus::Disabled
    } else if let Some(d) = outcome.accepted.iter().find(|d| d.id == opening.id) {
        width_mm = d.width_mm;
        height_mm = d.height_mm;
        OverlayStatus::Accepted {
            x0_mm: d.x0_mm,
            x1_mm: d.x1_mm,
        }
    } else {
        let reason = outcome
            .removed
            .iter()
            .find(|r| r.id == opening.id)
            .map(|r| r.reason)
            .unwrap_or(RemovalReason::OverCapacity);
        OverlayStatus::Removed { reason }
    };

    OpeningOverlay {
        id: opening.id.clone(),
        wall: opening.wall,
        width_mm,
        height_mm,
        status,
    }
}

/// Lay out all four walls for a configuration, front, back, left, right.
pub fn layout_walls(config: &BuildingConfiguration, dims: &ResolvedDimensions) -> WallLayout {
    let section = config.wall_section();
    let wall_height_mm = coerce_mm(config.wall_height_mm, defaults::WALL_HEIGHT_MM, 1) as f64;
    let mut layout = WallLayout::default();
    for placement in wall_placements(dims, section) {
        let openings: Vec<Opening> = config.openings_on(placement.id).cloned().collect();
        layout.extend(layout_wall(
            placement,
            config.wall_variant,
            section,
            wall_height_mm,
            &openings,
        ));
    }
    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimensions::resolve;
    use crate::members::MemberKind;

    fn plates_on(layout: &WallLayout, wall: WallId) -> Vec<&Member> {
        layout
            .members
            .iter()
            .filter(|m| m.kind == MemberKind::Plate && m.role == "bottom plate" && m.tags.wall == Some(wall))
            .collect()
    }

    #[test]
    fn test_wall_placements_meet_at_corners() {
        let config = BuildingConfiguration::default().with_frame(3000.0, 4000.0);
        let dims = resolve(&config);
        let [front, back, left, right] = wall_placements(&dims, SectionProfile::S45x95);
        assert_eq!(front.length_mm, 3000);
        assert_eq!(back.origin_z_mm, 3905.0);
        assert_eq!(left.length_mm, 4000 - 190);
        assert_eq!(left.origin_z_mm, 95.0);
        assert_eq!(right.origin_x_mm, 2905.0);
        // side walls end exactly where the back wall starts
        assert_eq!(left.origin_z_mm + left.length_mm as f64, back.origin_z_mm);
    }

    #[test]
    fn test_layout_walls_plates_cover_perimeter() {
        let config = BuildingConfiguration::default().with_frame(3000.0, 4000.0);
        let layout = layout_walls(&config, &resolve(&config));
        for wall in WallId::ALL {
            assert_eq!(plates_on(&layout, wall).len(), 1, "{}", wall);
        }
        let left = plates_on(&layout, WallId::Left)[0];
        assert_eq!(left.size.z, 3810.0);
        assert_eq!(left.size.x, 95.0);
        assert_eq!(left.size.y, 45.0);
    }

    #[test]
    fn test_overlays_report_each_opening() {
        let mut disabled = Opening::with_id("off", WallId::Left, 500.0, 900.0, 2000.0);
        disabled.enabled = false;
        let config = BuildingConfiguration::default()
            .with_frame(3000.0, 4000.0)
            .with_opening(Opening::with_id("a", WallId::Front, 0.0, 1500.0, 2000.0))
            .with_opening(Opening::with_id("b", WallId::Front, 100.0, 1500.0, 2000.0))
            .with_opening(disabled);
        let layout = layout_walls(&config, &resolve(&config));

        let by_id = |id: &str| layout.overlays.iter().find(|o| o.id == id).unwrap().status.clone();
        assert_eq!(by_id("a"), OverlayStatus::Accepted { x0_mm: 50, x1_mm: 1550 });
        assert_eq!(by_id("b"), OverlayStatus::Removed { reason: RemovalReason::OverCapacity });
        assert_eq!(by_id("off"), OverlayStatus::Disabled);
        assert_eq!(layout.events.iter().filter(|e| e.is_removal()).count(), 1);
    }

    #[test]
    fn test_side_wall_members_stay_inside_frame() {
        let config = BuildingConfiguration::default()
            .with_frame(3000.0, 4000.0)
            .with_wall_variant(WallVariant::Panelized);
        let layout = layout_walls(&config, &resolve(&config));
        for m in &layout.members {
            assert!(m.anchor.x >= 0.0 && m.anchor.x + m.size.x <= 3000.0 + 1e-9, "{:?}", m);
            assert!(m.anchor.z >= 0.0 && m.anchor.z + m.size.z <= 4000.0 + 1e-9, "{:?}", m);
        }
    }

    #[test]
    fn test_layout_is_deterministic() {
        let config = BuildingConfiguration::default()
            .with_opening(Opening::with_id("a", WallId::Right, 700.0, 900.0, 2000.0));
        let dims = resolve(&config);
        assert_eq!(layout_walls(&config, &dims), layout_walls(&config, &dims));
    }
}
