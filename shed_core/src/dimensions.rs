//! # Dimension Resolver
//!
//! Reconciles the three lenses on one building (slab, frame, roof) into a
//! single canonical set of rectangles.
//!
//! ## Relationships
//!
//! ```text
//! frame = base + gap                        (per axis)
//! roof  = frame + (left + right, front + back)
//! ```
//!
//! The frame is authoritative. When the configuration carries canonical frame
//! values they are used as-is; otherwise the active mode's legacy inputs are
//! translated into frame space.
//!
//! ## Example
//!
//! ```rust
//! use shed_core::config::BuildingConfiguration;
//! use shed_core::dimensions::resolve;
//!
//! let config = BuildingConfiguration::default().with_frame(3050.0, 4050.0);
//! let dims = resolve(&config);
//! assert_eq!((dims.base.width_mm, dims.base.depth_mm), (3000, 4000));
//! assert_eq!(dims.roof.width_mm, 3050 + 600);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{defaults, BuildingConfiguration, DimensionMode};
use crate::units::{coerce_mm, coerce_opt_mm};

/// Smallest extent any rectangle may have
pub const MIN_EXTENT_MM: i64 = 1;

/// An axis-aligned plan rectangle in whole millimetres
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanRect {
    pub width_mm: i64,
    pub depth_mm: i64,
}

impl PlanRect {
    pub fn new(width_mm: i64, depth_mm: i64) -> Self {
        PlanRect {
            width_mm: width_mm.max(MIN_EXTENT_MM),
            depth_mm: depth_mm.max(MIN_EXTENT_MM),
        }
    }
}

/// Resolved overhang per side, whole millimetres, never negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Overhangs {
    pub left_mm: i64,
    pub right_mm: i64,
    pub front_mm: i64,
    pub back_mm: i64,
}

impl Overhangs {
    /// Extra width the roof adds over the frame
    pub fn width_sum(&self) -> i64 {
        self.left_mm + self.right_mm
    }

    /// Extra depth the roof adds over the frame
    pub fn depth_sum(&self) -> i64 {
        self.front_mm + self.back_mm
    }
}

/// Canonical rectangles for one configuration snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedDimensions {
    pub base: PlanRect,
    pub frame: PlanRect,
    pub roof: PlanRect,
    pub overhang: Overhangs,
    /// Coerced slab-to-frame gap
    pub gap_mm: i64,
}

impl ResolvedDimensions {
    /// Rectangle seen through a mode's lens
    pub fn for_mode(&self, mode: DimensionMode) -> PlanRect {
        match mode {
            DimensionMode::Slab => self.base,
            DimensionMode::Frame => self.frame,
            DimensionMode::Roof => self.roof,
        }
    }
}

/// Resolve per-side overhangs. `None` takes the uniform value; zero is kept.
pub fn resolve_overhangs(config: &BuildingConfiguration) -> Overhangs {
    let input = &config.overhang;
    let uniform = coerce_mm(input.uniform_mm, defaults::OVERHANG_MM, 0);
    let side = |value: Option<f64>| match value {
        Some(v) => coerce_mm(v, uniform as f64, 0),
        None => uniform,
    };
    Overhangs {
        left_mm: side(input.left_mm),
        right_mm: side(input.right_mm),
        front_mm: side(input.front_mm),
        back_mm: side(input.back_mm),
    }
}

/// Frame (width, depth) by priority: canonical pair, else active-mode legacy inputs.
fn resolve_frame(config: &BuildingConfiguration, overhang: &Overhangs, gap: i64) -> (i64, i64) {
    if let (Some(w), Some(d)) = (config.frame_width_mm, config.frame_depth_mm) {
        return (
            coerce_mm(w, defaults::FRAME_WIDTH_MM, MIN_EXTENT_MM),
            coerce_mm(d, defaults::FRAME_DEPTH_MM, MIN_EXTENT_MM),
        );
    }

    let legacy = config.legacy.for_mode(config.mode);
    // A missing legacy value is read as the frame default seen through that mode
    let (default_w, default_d) = match config.mode {
        DimensionMode::Frame => (defaults::FRAME_WIDTH_MM, defaults::FRAME_DEPTH_MM),
        DimensionMode::Roof => (
            defaults::FRAME_WIDTH_MM + overhang.width_sum() as f64,
            defaults::FRAME_DEPTH_MM + overhang.depth_sum() as f64,
        ),
        DimensionMode::Slab => (
            defaults::FRAME_WIDTH_MM - gap as f64,
            defaults::FRAME_DEPTH_MM - gap as f64,
        ),
    };
    let w = coerce_opt_mm(legacy.width_mm, default_w, MIN_EXTENT_MM);
    let d = coerce_opt_mm(legacy.depth_mm, default_d, MIN_EXTENT_MM);

    let (w, d) = match config.mode {
        DimensionMode::Frame => (w, d),
        DimensionMode::Roof => (w - overhang.width_sum(), d - overhang.depth_sum()),
        DimensionMode::Slab => (w + gap, d + gap),
    };
    (w.max(MIN_EXTENT_MM), d.max(MIN_EXTENT_MM))
}

/// Resolve a configuration into canonical rectangles.
///
/// Pure and idempotent: the same snapshot always yields the same result, and
/// feeding the result back through [`to_canonical`] is a fixed point.
pub fn resolve(config: &BuildingConfiguration) -> ResolvedDimensions {
    let overhang = resolve_overhangs(config);
    let gap = coerce_mm(config.gap_mm, defaults::GAP_MM, 0);
    let (frame_w, frame_d) = resolve_frame(config, &overhang, gap);

    ResolvedDimensions {
        base: PlanRect::new(frame_w - gap, frame_d - gap),
        frame: PlanRect::new(frame_w, frame_d),
        roof: PlanRect::new(frame_w + overhang.width_sum(), frame_d + overhang.depth_sum()),
        overhang,
        gap_mm: gap,
    }
}

/// Copy of `config` with canonical frame fields filled from its resolution.
pub fn to_canonical(config: &BuildingConfiguration) -> BuildingConfiguration {
    let dims = resolve(config);
    let mut canonical = config.clone();
    canonical.frame_width_mm = Some(dims.frame.width_mm as f64);
    canonical.frame_depth_mm = Some(dims.frame.depth_mm as f64);
    canonical
}
