//! # shed_core - Parametric Timber Outbuilding Engine
//!
//! `shed_core` turns a handful of building parameters into a complete timber
//! frame: resolved footprints, wall studs and plates with snapped doors, a
//! pitched or gabled roof assembly, and a cutting list. All inputs and outputs
//! are JSON-serializable so the same model can drive a 3D view, a report or a
//! shopping list.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions from a configuration snapshot to a model
//! - **Never fails**: Bad numbers are coerced, infeasible doors are dropped with an event
//! - **Deterministic**: The same configuration always yields the same members in the same order
//! - **JSON-First**: All types implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use shed_core::config::{BuildingConfiguration, Opening, RoofStyle, WallId};
//! use shed_core::model::generate;
//!
//! let config = BuildingConfiguration::default()
//!     .with_frame(3000.0, 4000.0)
//!     .with_roof_style(RoofStyle::Gable)
//!     .with_opening(Opening::standard_door(WallId::Front, 1050.0));
//!
//! let model = generate(&config);
//! for row in &model.bom {
//!     println!("{}", row);
//! }
//!
//! // Serialize to JSON for a renderer
//! let json = serde_json::to_string_pretty(&model).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Building parameters and their defaults
//! - [`dimensions`] - Base / frame / roof footprint resolution
//! - [`walls`] - Wall layout and door snapping
//! - [`roof`] - Single-slope and gable roof framing
//! - [`bom`] - Cutting-list aggregation
//! - [`model`] - End-to-end generation
//! - [`members`] - Placed members and their orientation
//! - [`materials`] - Timber sections and sheet goods
//! - [`units`] - Type-safe unit wrappers and coercion
//! - [`errors`] - Structured error types
//! - [`file_io`] - Configuration loading and atomic report saves

pub mod bom;
pub mod config;
pub mod dimensions;
pub mod errors;
pub mod file_io;
pub mod materials;
pub mod members;
pub mod model;
pub mod roof;
pub mod tiling;
pub mod units;
pub mod walls;

// Re-export commonly used types at crate root for convenience
pub use config::BuildingConfiguration;
pub use errors::{ShedError, ShedResult};
pub use file_io::{load_configuration, save_report};
pub use model::{generate, BuildingModel};
