//! Host-supplied tool configuration.
//!
//! Every field has a default, so an empty or partially filled config object
//! is valid. Field names follow the host's camelCase convention.

use serde::{Deserialize, Serialize};

use crate::limit::{CutLimit, FixedCutLimit, ScriptCutLimit};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FoldConfig {
    /// Fixed threshold, or the non-Latin threshold when `latin_cut_limit` is set.
    pub cut_limit: Option<usize>,
    /// Separate threshold for pure-Latin bodies.
    pub latin_cut_limit: Option<usize>,
    /// Initial state of the manual fold block.
    pub initially_folded: bool,
    pub expand_label: String,
    pub collapse_label: String,
    pub title_placeholder: Option<String>,
    pub content_placeholder: Option<String>,
    /// Sample body shown when a length-driven block starts out empty.
    pub placeholder_content: Option<String>,
}

impl Default for FoldConfig {
    fn default() -> Self {
        Self {
            cut_limit: None,
            latin_cut_limit: None,
            initially_folded: true,
            expand_label: "展开".to_string(),
            collapse_label: "收起".to_string(),
            title_placeholder: None,
            content_placeholder: None,
            placeholder_content: None,
        }
    }
}

impl FoldConfig {
    /// Build the cut-limit policy this config describes.
    pub fn cut_limit_policy(&self) -> Box<dyn CutLimit> {
        match (self.latin_cut_limit, self.cut_limit) {
            (Some(latin), other) => {
                let other = other.unwrap_or(FixedCutLimit::default().get());
                Box::new(ScriptCutLimit::new(latin, other))
            }
            (None, Some(limit)) => Box::new(FixedCutLimit::new(limit)),
            (None, None) => Box::new(FixedCutLimit::default()),
        }
    }

    /// Pick the body to start from, substituting the configured sample
    /// content for an empty one.
    pub fn initial_content(&self, content: &str) -> String {
        match &self.placeholder_content {
            Some(sample) if content.is_empty() => sample.clone(),
            _ => content.to_string(),
        }
    }
}
