use crate::config::FoldConfig;
use crate::data::BlockData;
use crate::error::FoldError;
use crate::limit::CutLimit;
use crate::truncate::truncate;
use crate::width::visual_length;

use super::{EditOutcome, FoldEngine, ToggleAffordance, ToggleLabels};

/// Fold engine for the length-driven column block.
///
/// A body whose visual length exceeds the cut limit starts folded behind a
/// truncated preview and cannot be edited until it is expanded. A body at
/// or under the limit is never folded and shows no toggle.
pub struct ColumnFold<L = Box<dyn CutLimit>> {
    title: String,
    full: String,
    displayed: String,
    folded: bool,
    /// Body exceeds the cut limit.
    long: bool,
    limit: L,
    labels: ToggleLabels,
}

impl ColumnFold {
    /// Create an engine with the cut-limit policy described by `config`.
    pub fn new(data: BlockData, config: &FoldConfig) -> Self {
        Self::with_limit(data, config, config.cut_limit_policy())
    }
}

impl<L: CutLimit> ColumnFold<L> {
    /// Create an engine with an explicit cut-limit policy.
    pub fn with_limit(data: BlockData, config: &FoldConfig, limit: L) -> Self {
        let full = config.initial_content(&data.content);
        let long = exceeds(&limit, &full);

        let mut engine = Self {
            title: data.title,
            full,
            displayed: String::new(),
            folded: long,
            long,
            limit,
            labels: ToggleLabels::new(&config.expand_label, &config.collapse_label),
        };
        engine.project();

        tracing::debug!(
            target: "foldblock::engine",
            folded = engine.folded,
            width = visual_length(&engine.full),
            "column fold created"
        );
        engine
    }

    /// Whether the body is over the cut limit.
    pub fn is_long(&self) -> bool {
        self.long
    }

    /// The threshold for the current body.
    pub fn current_limit(&self) -> usize {
        self.limit.cut_limit(&self.full)
    }

    /// Recompute the displayed projection from the body and fold state.
    fn project(&mut self) {
        self.displayed = if self.folded {
            truncate(&self.full, self.current_limit()).into_owned()
        } else {
            self.full.clone()
        };
    }
}

fn exceeds<L: CutLimit>(limit: &L, text: &str) -> bool {
    visual_length(text) > limit.cut_limit(text)
}

impl<L: CutLimit> FoldEngine for ColumnFold<L> {
    fn title(&self) -> &str {
        &self.title
    }

    fn full_content(&self) -> &str {
        &self.full
    }

    fn displayed_content(&self) -> &str {
        &self.displayed
    }

    fn folded(&self) -> bool {
        self.folded
    }

    fn editable(&self) -> bool {
        !self.folded
    }

    fn affordance(&self) -> Option<ToggleAffordance> {
        self.long.then(|| self.labels.affordance(self.folded))
    }

    fn toggle(&mut self) -> bool {
        if !self.long {
            tracing::debug!(target: "foldblock::engine", "toggle ignored, body under cut limit");
            return false;
        }
        self.folded = !self.folded;
        self.project();
        tracing::debug!(target: "foldblock::engine", folded = self.folded, "column fold toggled");
        true
    }

    fn edit(&mut self, content: &str) -> Result<EditOutcome, FoldError> {
        if self.folded {
            return Err(FoldError::NotEditable);
        }

        self.full.clear();
        self.full.push_str(content);
        self.project();

        let was_long = self.long;
        self.long = exceeds(&self.limit, &self.full);
        let affordance_changed = was_long != self.long;

        if affordance_changed {
            tracing::debug!(
                target: "foldblock::engine",
                long = self.long,
                "body crossed cut limit"
            );
        } else {
            tracing::trace!(target: "foldblock::engine", len = self.full.len(), "body edited");
        }

        Ok(EditOutcome { affordance_changed })
    }

    fn edit_title(&mut self, title: &str) {
        self.title = title.to_string();
    }
}

impl<L> std::fmt::Debug for ColumnFold<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnFold")
            .field("title", &self.title)
            .field("full", &self.full)
            .field("displayed", &self.displayed)
            .field("folded", &self.folded)
            .field("long", &self.long)
            .finish_non_exhaustive()
    }
}
