//! # Building Configuration
//!
//! The `BuildingConfiguration` struct is the read-only snapshot every engine
//! consumes. It is owned by the surrounding application; the core only borrows
//! it for the duration of a call and never mutates it.
//!
//! ## Structure
//!
//! ```text
//! BuildingConfiguration
//! ├── mode / gap_mm                     (which lens the user edits in)
//! ├── frame_width_mm / frame_depth_mm   (canonical, authoritative when both set)
//! ├── legacy: LegacyDimensions          (per-mode width/depth fallbacks)
//! ├── overhang: OverhangInput           (uniform + nullable per-side overrides)
//! ├── wall_variant / wall_sections / wall_height_mm
//! ├── roof: RoofConfig                  (style, heights, rafter section, sheathing)
//! └── openings: Vec<Opening>            (doors, by host wall)
//! ```
//!
//! Every field has a documented default (see [`defaults`]) applied through
//! serde, so a partial JSON document is always a complete configuration. The
//! canonical frame fields are the exception: a document without them
//! deserializes to `None` and resolution falls back to the legacy inputs of
//! the active mode.
//!
//! ## Example
//!
//! ```rust
//! use shed_core::config::{BuildingConfiguration, Opening, WallId};
//!
//! let config = BuildingConfiguration::default()
//!     .with_frame(3050.0, 4050.0)
//!     .with_opening(Opening::new(WallId::Front, 100.0, 900.0, 2000.0));
//!
//! let json = serde_json::to_string_pretty(&config).unwrap();
//! let parsed: BuildingConfiguration = serde_json::from_str(&json).unwrap();
//! assert_eq!(parsed, config);
//!
//! // Missing fields fall back to the defaults table
//! let sparse: BuildingConfiguration = serde_json::from_str(r#"{ "gap_mm": 60 }"#).unwrap();
//! assert_eq!(sparse.wall_height_mm, 2400.0);
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::materials::SectionProfile;

/// Default values applied wherever a configuration field is absent.
///
/// | Field                      | Default |
/// |----------------------------|---------|
/// | `mode`                     | Frame   |
/// | `gap_mm`                   | 50      |
/// | frame width / depth        | 3000 / 4000 |
/// | `overhang.uniform_mm`      | 300     |
/// | `wall_variant`             | Continuous |
/// | wall sections              | 45x95 continuous, 50x100 panelized |
/// | `wall_height_mm`           | 2400    |
/// | roof style                 | SingleSlope |
/// | roof min / max height      | 2400 / 3000 |
/// | rafter section             | 45x145  |
/// | sheathing thickness        | 18      |
/// | door width / height        | 900 / 2000 |
pub mod defaults {
    /// Fixed slab-to-frame gap per axis
    pub const GAP_MM: f64 = 50.0;
    /// Frame width used when nothing else resolves
    pub const FRAME_WIDTH_MM: f64 = 3000.0;
    /// Frame depth used when nothing else resolves
    pub const FRAME_DEPTH_MM: f64 = 4000.0;
    /// Uniform roof overhang on every side
    pub const OVERHANG_MM: f64 = 300.0;
    /// Wall height, bottom of bottom plate to top of top plate
    pub const WALL_HEIGHT_MM: f64 = 2400.0;
    /// Roof bearing height at the frame's low edge
    pub const ROOF_MIN_HEIGHT_MM: f64 = 2400.0;
    /// Single-slope roof bearing height at the frame's high edge
    pub const ROOF_MAX_HEIGHT_MM: f64 = 3000.0;
    /// Sheathing board thickness
    pub const SHEATHING_MM: f64 = 18.0;
    /// Width of a newly added door
    pub const DOOR_WIDTH_MM: f64 = 900.0;
    /// Height of a newly added door
    pub const DOOR_HEIGHT_MM: f64 = 2000.0;
}

// ============================================================================
// Enumerations
// ============================================================================

/// Which rectangle the user is editing dimensions in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DimensionMode {
    /// Concrete slab footprint (frame minus gap)
    Slab,
    /// Timber frame footprint (canonical)
    #[default]
    Frame,
    /// Roof plan (frame plus overhangs)
    Roof,
}

/// Wall construction method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WallVariant {
    /// Stick framing with studs at fixed spacing along the full wall
    #[default]
    Continuous,
    /// Prefabricated panels no longer than the maximum panel run
    Panelized,
}

impl WallVariant {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            WallVariant::Continuous => "Continuous",
            WallVariant::Panelized => "Panelized",
        }
    }
}

/// Roof geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoofStyle {
    /// One continuous pitch across the building width
    #[default]
    SingleSlope,
    /// Two symmetric slopes meeting at a ridge
    Gable,
}

impl RoofStyle {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            RoofStyle::SingleSlope => "Single-slope",
            RoofStyle::Gable => "Gable",
        }
    }
}

/// One of the four walls of the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WallId {
    /// Runs along the width at depth 0
    Front,
    /// Runs along the width at the far depth edge
    Back,
    /// Runs along the depth at width 0
    Left,
    /// Runs along the depth at the far width edge
    Right,
}

impl WallId {
    /// All walls in layout order
    pub const ALL: [WallId; 4] = [WallId::Front, WallId::Back, WallId::Left, WallId::Right];

    /// Lowercase name used in notes and events
    pub fn name(&self) -> &'static str {
        match self {
            WallId::Front => "front",
            WallId::Back => "back",
            WallId::Left => "left",
            WallId::Right => "right",
        }
    }
}

impl std::fmt::Display for WallId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Nested input groups
// ============================================================================

/// Width/depth pair as typed by the user; either side may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanInput {
    pub width_mm: Option<f64>,
    pub depth_mm: Option<f64>,
}

impl PlanInput {
    /// Both sides present
    pub fn new(width_mm: f64, depth_mm: f64) -> Self {
        PlanInput {
            width_mm: Some(width_mm),
            depth_mm: Some(depth_mm),
        }
    }
}

/// Per-mode inputs kept from configurations saved before canonical frame
/// dimensions existed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyDimensions {
    pub slab: PlanInput,
    pub frame: PlanInput,
    pub roof: PlanInput,
}

impl LegacyDimensions {
    /// The inputs belonging to a mode
    pub fn for_mode(&self, mode: DimensionMode) -> PlanInput {
        match mode {
            DimensionMode::Slab => self.slab,
            DimensionMode::Frame => self.frame,
            DimensionMode::Roof => self.roof,
        }
    }
}

/// Roof overhang: a uniform value with optional per-side overrides.
///
/// `None` falls back to `uniform_mm`; an explicit `Some(0.0)` is kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverhangInput {
    pub uniform_mm: f64,
    pub left_mm: Option<f64>,
    pub right_mm: Option<f64>,
    pub front_mm: Option<f64>,
    pub back_mm: Option<f64>,
}

impl Default for OverhangInput {
    fn default() -> Self {
        OverhangInput {
            uniform_mm: defaults::OVERHANG_MM,
            left_mm: None,
            right_mm: None,
            front_mm: None,
            back_mm: None,
        }
    }
}

/// Section profile chosen for each wall variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallSections {
    pub continuous: SectionProfile,
    pub panelized: SectionProfile,
}

impl Default for WallSections {
    fn default() -> Self {
        WallSections {
            continuous: SectionProfile::S45x95,
            panelized: SectionProfile::S50x100,
        }
    }
}

impl WallSections {
    /// Section used by a variant
    pub fn for_variant(&self, variant: WallVariant) -> SectionProfile {
        match variant {
            WallVariant::Continuous => self.continuous,
            WallVariant::Panelized => self.panelized,
        }
    }
}

/// Roof parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoofConfig {
    pub style: RoofStyle,
    /// Bearing height at the frame's low edge (eave height for gables)
    pub min_height_mm: f64,
    /// Bearing height at the frame's high edge (single-slope only)
    pub max_height_mm: f64,
    /// Section for rafters, chords, rims, ridge and purlins
    pub rafter_section: SectionProfile,
    pub sheathing_thickness_mm: f64,
}

impl Default for RoofConfig {
    fn default() -> Self {
        RoofConfig {
            style: RoofStyle::SingleSlope,
            min_height_mm: defaults::ROOF_MIN_HEIGHT_MM,
            max_height_mm: defaults::ROOF_MAX_HEIGHT_MM,
            rafter_section: SectionProfile::S45x145,
            sheathing_thickness_mm: defaults::SHEATHING_MM,
        }
    }
}

// ============================================================================
// Openings
// ============================================================================

/// A door in one of the walls.
///
/// The wall layout engine never edits openings; it reports where each one
/// actually went through an [`OpeningOverlay`](crate::walls::OpeningOverlay).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    /// Stable identifier (survives reordering)
    pub id: String,
    /// Host wall
    pub wall: WallId,
    /// Desired distance from the wall's start to the door's near edge
    pub offset_mm: f64,
    pub width_mm: f64,
    pub height_mm: f64,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Opening {
    /// Create an enabled door with a fresh UUID.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shed_core::config::{Opening, WallId};
    ///
    /// let door = Opening::new(WallId::Front, 100.0, 900.0, 2000.0);
    /// assert!(door.enabled);
    /// assert_eq!(door.id.len(), 36);
    /// ```
    pub fn new(wall: WallId, offset_mm: f64, width_mm: f64, height_mm: f64) -> Self {
        Opening {
            id: Uuid::new_v4().to_string(),
            wall,
            offset_mm,
            width_mm,
            height_mm,
            enabled: true,
        }
    }

    /// Same as [`Opening::new`] with a caller-chosen id
    pub fn with_id(id: impl Into<String>, wall: WallId, offset_mm: f64, width_mm: f64, height_mm: f64) -> Self {
        Opening {
            id: id.into(),
            wall,
            offset_mm,
            width_mm,
            height_mm,
            enabled: true,
        }
    }

    /// Door of the default size at an offset
    pub fn standard_door(wall: WallId, offset_mm: f64) -> Self {
        Opening::new(wall, offset_mm, defaults::DOOR_WIDTH_MM, defaults::DOOR_HEIGHT_MM)
    }
}

// ============================================================================
// Root configuration
// ============================================================================

/// Complete parameter set for one outbuilding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingConfiguration {
    /// Active dimension mode
    pub mode: DimensionMode,
    /// Slab-to-frame gap per axis
    pub gap_mm: f64,
    /// Canonical frame width (authoritative together with depth).
    /// Absent from a document means absent, not the builder default.
    #[serde(default)]
    pub frame_width_mm: Option<f64>,
    /// Canonical frame depth (authoritative together with width)
    #[serde(default)]
    pub frame_depth_mm: Option<f64>,
    /// Per-mode fallbacks
    pub legacy: LegacyDimensions,
    pub overhang: OverhangInput,
    pub wall_variant: WallVariant,
    pub wall_sections: WallSections,
    pub wall_height_mm: f64,
    pub roof: RoofConfig,
    pub openings: Vec<Opening>,
}

impl Default for BuildingConfiguration {
    fn default() -> Self {
        BuildingConfiguration {
            mode: DimensionMode::Frame,
            gap_mm: defaults::GAP_MM,
            frame_width_mm: Some(defaults::FRAME_WIDTH_MM),
            frame_depth_mm: Some(defaults::FRAME_DEPTH_MM),
            legacy: LegacyDimensions::default(),
            overhang: OverhangInput::default(),
            wall_variant: WallVariant::Continuous,
            wall_sections: WallSections::default(),
            wall_height_mm: defaults::WALL_HEIGHT_MM,
            roof: RoofConfig::default(),
            openings: Vec::new(),
        }
    }
}

impl BuildingConfiguration {
    /// Set canonical frame dimensions
    pub fn with_frame(mut self, width_mm: f64, depth_mm: f64) -> Self {
        self.frame_width_mm = Some(width_mm);
        self.frame_depth_mm = Some(depth_mm);
        self
    }

    /// Set every overhang to one value, clearing per-side overrides
    pub fn with_uniform_overhang(mut self, overhang_mm: f64) -> Self {
        self.overhang = OverhangInput {
            uniform_mm: overhang_mm,
            ..OverhangInput::default()
        };
        self
    }

    pub fn with_wall_variant(mut self, variant: WallVariant) -> Self {
        self.wall_variant = variant;
        self
    }

    pub fn with_roof_style(mut self, style: RoofStyle) -> Self {
        self.roof.style = style;
        self
    }

    /// Append an opening
    pub fn with_opening(mut self, opening: Opening) -> Self {
        self.openings.push(opening);
        self
    }

    /// Section profile of the active wall variant
    pub fn wall_section(&self) -> SectionProfile {
        self.wall_sections.for_variant(self.wall_variant)
    }

    /// Openings hosted by a wall, in declaration order
    pub fn openings_on(&self, wall: WallId) -> impl Iterator<Item = &Opening> + '_ {
        self.openings.iter().filter(move |o| o.wall == wall)
    }
}
