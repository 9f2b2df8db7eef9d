//! Tour files: step lists stored as JSON or YAML.
//!
//! Responsibilities:
//! - Load a tour by file extension (`.json`, `.yaml`, `.yml`).
//! - Accept either `{ "steps": [...] }` or a bare top-level array of steps.
//! - Apply the same validation `FlowManager::start` applies.
//!
//! Does NOT handle:
//! - Resolving selectors against a page (that happens when the flow runs).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::step::{Step, StepError, validate_steps};

/// A named, ordered list of steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub steps: Vec<Step>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TourDocument {
    Tour(Tour),
    Steps(Vec<Step>),
}

impl From<TourDocument> for Tour {
    fn from(doc: TourDocument) -> Self {
        match doc {
            TourDocument::Tour(tour) => tour,
            TourDocument::Steps(steps) => Tour { name: None, steps },
        }
    }
}

/// Errors from loading a tour file.
#[derive(Debug, Error)]
pub enum TourError {
    #[error("Failed to read tour file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse tour file {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Unsupported tour format for {} (expected .json, .yaml or .yml)", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Invalid tour: {0}")]
    Invalid(#[from] StepError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

fn format_of(path: &Path) -> Option<Format> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "json" => Some(Format::Json),
        "yaml" | "yml" => Some(Format::Yaml),
        _ => None,
    }
}

impl Tour {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { name: None, steps }
    }

    /// Load and validate a tour file.
    pub fn load(path: &Path) -> Result<Self, TourError> {
        let format = format_of(path).ok_or_else(|| TourError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;
        let contents = std::fs::read_to_string(path).map_err(|source| TourError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let doc: TourDocument = match format {
            Format::Json => serde_json::from_str(&contents).map_err(|e| TourError::Parse {
                path: path.to_path_buf(),
                message: format!("line {} column {}: {}", e.line(), e.column(), classify_json(&e)),
            })?,
            Format::Yaml => serde_yaml::from_str(&contents).map_err(|e| TourError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?,
        };

        let tour = Tour::from(doc);
        tour.validate()?;
        tracing::debug!(path = %path.display(), steps = tour.steps.len(), "Tour loaded");
        Ok(tour)
    }

    pub fn validate(&self) -> Result<(), StepError> {
        validate_steps(&self.steps)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

fn classify_json(err: &serde_json::Error) -> &'static str {
    match err.classify() {
        serde_json::error::Category::Syntax => "syntax error",
        serde_json::error::Category::Data => "unexpected structure",
        serde_json::error::Category::Eof => "unexpected end of file",
        serde_json::error::Category::Io => "I/O error",
    }
}
