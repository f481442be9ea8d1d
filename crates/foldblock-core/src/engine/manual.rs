use crate::config::FoldConfig;
use crate::data::BlockData;
use crate::error::FoldError;

use super::{EditOutcome, FoldEngine, ToggleAffordance, ToggleLabels};

/// Fold engine for the manual fold block.
///
/// Folding only hides the body; the body itself is never cut and stays
/// editable in both states. The toggle is always available.
#[derive(Debug, Clone)]
pub struct ManualFold {
    title: String,
    content: String,
    folded: bool,
    labels: ToggleLabels,
}

impl ManualFold {
    pub fn new(data: BlockData, config: &FoldConfig) -> Self {
        Self {
            title: data.title,
            content: data.content,
            folded: config.initially_folded,
            labels: ToggleLabels::new(&config.expand_label, &config.collapse_label),
        }
    }
}

impl FoldEngine for ManualFold {
    fn title(&self) -> &str {
        &self.title
    }

    fn full_content(&self) -> &str {
        &self.content
    }

    fn displayed_content(&self) -> &str {
        &self.content
    }

    fn folded(&self) -> bool {
        self.folded
    }

    fn editable(&self) -> bool {
        true
    }

    fn affordance(&self) -> Option<ToggleAffordance> {
        Some(self.labels.affordance(self.folded))
    }

    fn toggle(&mut self) -> bool {
        self.folded = !self.folded;
        tracing::debug!(target: "foldblock::engine", folded = self.folded, "manual fold toggled");
        true
    }

    fn edit(&mut self, content: &str) -> Result<EditOutcome, FoldError> {
        self.content.clear();
        self.content.push_str(content);
        Ok(EditOutcome::default())
    }

    fn edit_title(&mut self, title: &str) {
        self.title = title.to_string();
    }
}
