//! Compilation Pipeline - Single Entry Point
//!
//! CRITICAL: compile MUST validate first. Blocking findings never reach render.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::composition::Composition;
use crate::hashing::{compute_job_hash, compute_manifest_hash, sha256_hex};
use crate::request::{FlagRequest, RequestError};
use crate::validation::{ValidationReport, ValidationViolation};
use crate::ENGINE_VERSION;

const SVG_MEDIA_TYPE: &str = "image/svg+xml";

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] RequestError),

    #[error("Validation failed: {}", join_messages(.0))]
    ValidationFailed(Vec<ValidationViolation>),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

fn join_messages(violations: &[ValidationViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledFlag {
    pub id: String,
    pub name: String,
    pub file_name: String,
    pub engine_version: String,
    pub created_at: DateTime<Utc>,
    pub width: u32,
    pub height: u32,
    pub summary: String,
    pub warnings: Vec<ValidationViolation>,
    pub svg: String,
    pub data_uri: String,
    pub svg_hash: String,
    pub job_hash: String,
    pub manifest_hash: String,
}

impl CompiledFlag {
    /// Writes `{file_name}` into `dir`, creating it if needed.
    pub fn write_to_dir(&self, dir: &Path) -> io::Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.svg)?;
        info!(path = %path.display(), "flag written");
        Ok(path)
    }
}

/// The compilation pipeline - single entry point for flag generation
#[derive(Debug, Default)]
pub struct FlagPipeline;

impl FlagPipeline {
    pub fn new() -> Self {
        Self
    }

    /// Validate a request without rendering it
    #[tracing::instrument(skip(self, request), fields(name = %request.name))]
    pub fn validate(&self, request: &FlagRequest) -> Result<ValidationReport, PipelineError> {
        let flag = request.build()?;
        Ok(self.check(&flag))
    }

    /// Compile a request into an SVG document plus manifest
    ///
    /// CRITICAL: validation always runs here. No bypass possible.
    #[tracing::instrument(skip(self, request), fields(name = %request.name))]
    pub fn compile(&self, request: &FlagRequest) -> Result<CompiledFlag, PipelineError> {
        let mut flag = request.build()?;

        let report = self.check(&flag);
        if report.is_blocking() {
            return Err(PipelineError::ValidationFailed(report.errors));
        }
        for warning in &report.warnings {
            warn!(%warning, "compiling despite advisory");
        }

        let svg = flag.render();
        let job_hash = compute_job_hash(&request.name, request, ENGINE_VERSION)?;

        let mut compiled = CompiledFlag {
            id: Uuid::new_v4().to_string(),
            name: request.name.clone(),
            file_name: format!("{}.svg", request.file_stem()),
            engine_version: ENGINE_VERSION.to_string(),
            created_at: Utc::now(),
            width: request.width,
            height: request.height,
            summary: flag.summary(),
            warnings: report.warnings,
            data_uri: data_uri(&svg),
            svg_hash: sha256_hex(svg.as_bytes()),
            svg,
            job_hash,
            manifest_hash: String::new(), // Computed after
        };

        // Manifest hash covers everything else
        compiled.manifest_hash = compute_manifest_hash(&compiled)?;
        debug!(manifest_hash = %compiled.manifest_hash, "flag compiled");

        Ok(compiled)
    }

    fn check(&self, flag: &Composition) -> ValidationReport {
        let report = flag.validate();
        debug!(
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "validation complete"
        );
        report
    }
}

fn data_uri(svg: &str) -> String {
    let encoded =
        base64::Engine::encode(&base64::engine::general_purpose::STANDARD, svg.as_bytes());
    format!("data:{};base64,{}", SVG_MEDIA_TYPE, encoded)
}
