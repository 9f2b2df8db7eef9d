//! Tour step definition and step-list validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One unit of a tour: a target selector, a note, and an optional page URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Selector of the element the pointer glides to.
    pub element: String,
    /// Text shown beside the pointer. Blank notes hide the bubble.
    #[serde(default)]
    pub note: String,
    /// Page the step lives on. When its path differs from the current page,
    /// the flow navigates there first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Step {
    pub fn new(element: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            note: note.into(),
            url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Note text, or `None` when blank.
    pub fn note_text(&self) -> Option<&str> {
        Some(self.note.as_str()).filter(|n| !n.trim().is_empty())
    }

    /// Target URL, or `None` when absent or blank.
    pub fn target_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.trim().is_empty())
    }
}

/// Why a step list cannot start a flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("step list is empty")]
    Empty,

    #[error("step {index} has a blank element selector")]
    BlankSelector { index: usize },
}

/// Check that `steps` can drive a flow.
///
/// Selectors that parse but match nothing are not errors here; the flow skips
/// those steps at run time.
pub fn validate_steps(steps: &[Step]) -> Result<(), StepError> {
    if steps.is_empty() {
        return Err(StepError::Empty);
    }
    if let Some(index) = steps.iter().position(|s| s.element.trim().is_empty()) {
        return Err(StepError::BlankSelector { index });
    }
    Ok(())
}
