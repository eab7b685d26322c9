//! # File I/O Module
//!
//! Reads building configurations and writes generation reports:
//! - **Lenient loading**: configuration fields left out of the JSON take their defaults
//! - **Atomic saves**: write to .tmp, sync, rename to prevent half-written reports
//! - **Version validation**: reports carry a schema version checked on load
//!
//! ## File Format
//!
//! Both files are plain JSON. A configuration is a serialized
//! [`BuildingConfiguration`]; a report wraps a [`BuildingModel`] with the schema
//! version and the time it was generated.
//!
//! ## Example
//!
//! ```rust,no_run
//! use shed_core::file_io::{load_configuration, save_report};
//! use shed_core::model::generate;
//! use std::path::Path;
//!
//! let config = load_configuration(Path::new("shed.json"))?;
//! let model = generate(&config);
//! save_report(&model, Path::new("shed-report.json"))?;
//! # Ok::<(), shed_core::errors::ShedError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::BuildingConfiguration;
use crate::errors::{ShedError, ShedResult};
use crate::model::BuildingModel;

/// Report schema version written to and expected from report files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// A generated model as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub version: String,
    pub generated_at: DateTime<Utc>,
    pub model: BuildingModel,
}

impl GenerationReport {
    /// Wrap a model, stamped with the current time
    pub fn new(model: BuildingModel) -> Self {
        GenerationReport {
            version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            model,
        }
    }
}

fn read_to_string(path: &Path) -> ShedResult<String> {
    let mut file =
        File::open(path).map_err(|e| ShedError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| ShedError::file_error("read", path.display().to_string(), e.to_string()))?;
    Ok(contents)
}

/// Load a building configuration from a JSON file.
///
/// # Returns
///
/// * `Ok(BuildingConfiguration)` - Parsed configuration, missing fields defaulted
/// * `Err(ShedError::SerializationError)` - Invalid JSON
/// * `Err(ShedError::FileError)` - I/O error
pub fn load_configuration(path: &Path) -> ShedResult<BuildingConfiguration> {
    let contents = read_to_string(path)?;
    let config: BuildingConfiguration = serde_json::from_str(&contents)
        .map_err(|e| ShedError::serialization(format!("Invalid JSON in {}: {}", path.display(), e)))?;

    tracing::debug!(path = %path.display(), openings = config.openings.len(), "configuration loaded");
    Ok(config)
}

/// Save a generation report with atomic write semantics.
///
/// The save process:
/// 1. Serialize the report to JSON
/// 2. Write to a temporary file (.tmp)
/// 3. Sync to disk (fsync)
/// 4. Rename .tmp over the target (atomic on most filesystems)
pub fn save_report(model: &BuildingModel, path: &Path) -> ShedResult<()> {
    let report = GenerationReport::new(model.clone());
    let json = serde_json::to_string_pretty(&report)?;

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path)
        .map_err(|e| ShedError::file_error("create temp file", tmp_path.display().to_string(), e.to_string()))?;

    tmp_file
        .write_all(json.as_bytes())
        .map_err(|e| ShedError::file_error("write temp file", tmp_path.display().to_string(), e.to_string()))?;

    tmp_file
        .sync_all()
        .map_err(|e| ShedError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string()))?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        ShedError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    tracing::info!(path = %path.display(), "report saved");
    Ok(())
}

/// Load a previously saved report.
///
/// # Returns
///
/// * `Ok(GenerationReport)` - Successfully loaded report
/// * `Err(ShedError::VersionMismatch)` - Report written by an incompatible version
/// * `Err(ShedError::SerializationError)` - Invalid JSON
/// * `Err(ShedError::FileError)` - I/O error
pub fn load_report(path: &Path) -> ShedResult<GenerationReport> {
    let contents = read_to_string(path)?;

    // check the version before the model so an old layout reports as a mismatch
    let header: serde_json::Value = serde_json::from_str(&contents)
        .map_err(|e| ShedError::serialization(format!("Invalid JSON in {}: {}", path.display(), e)))?;
    let version = header.get("version").and_then(|v| v.as_str()).unwrap_or_default();
    validate_version(version)?;

    let report: GenerationReport = serde_json::from_value(header)?;
    Ok(report)
}

/// Validate that a report version is compatible with the current schema.
fn validate_version(file_version: &str) -> ShedResult<()> {
    let parse = |v: &str| -> Vec<u32> { v.split('.').filter_map(|p| p.parse().ok()).collect() };
    let file_parts = parse(file_version);
    let current_parts = parse(SCHEMA_VERSION);

    let mismatch = || ShedError::version_mismatch(file_version, SCHEMA_VERSION);

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x versions, a newer minor may carry breaking changes
    if current_parts[0] == 0 && file_parts.len() > 1 && current_parts.len() > 1 && file_parts[1] > current_parts[1] {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DimensionMode, WallVariant};
    use crate::model::generate;
    use tempfile::tempdir;

    #[test]
    fn test_load_partial_configuration() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shed.json");
        fs::write(&path, r#"{ "mode": "Roof", "wall_variant": "Panelized" }"#).unwrap();

        let config = load_configuration(&path).unwrap();
        assert_eq!(config.mode, DimensionMode::Roof);
        assert_eq!(config.wall_variant, WallVariant::Panelized);
        assert_eq!(config.gap_mm, 50.0);
        assert!(config.openings.is_empty());
    }

    #[test]
    fn test_load_legacy_slab_configuration() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("legacy.json");
        fs::write(
            &path,
            r#"{ "mode": "Slab", "legacy": { "slab": { "width_mm": 5000, "depth_mm": 6000 } } }"#,
        )
        .unwrap();

        let config = load_configuration(&path).unwrap();
        assert_eq!(config.frame_width_mm, None);
        let model = generate(&config);
        assert_eq!(model.dimensions.frame, crate::dimensions::PlanRect::new(5050, 6050));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_configuration(&dir.path().join("nope.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_configuration(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_save_and_load_report() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");
        let model = generate(&BuildingConfiguration::default());

        save_report(&model, &path).unwrap();
        assert!(!path.with_extension("json.tmp").exists());

        let report = load_report(&path).unwrap();
        assert_eq!(report.version, SCHEMA_VERSION);
        assert_eq!(report.model.bom, model.bom);
        assert_eq!(report.model.members.len(), model.members.len());
    }

    #[test]
    fn test_report_from_newer_schema_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("future.json");
        fs::write(&path, r#"{ "version": "0.9.0" }"#).unwrap();
        let err = load_report(&path).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.7").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("").is_err());
    }
}
