//! Collapse/expand state machines.
//!
//! Both block variants share the same shape: a title, an authoritative
//! body (`full_content`), and a projection of that body for display
//! (`displayed_content`). The projection is recomputed from the body and
//! the fold state on every transition and is never edited directly, so
//! folding can never lose unsaved edits.
//!
//! - `ManualFold`: folding is purely user-toggled; the body is never cut.
//! - `ColumnFold`: long bodies are cut to a preview and locked until expanded.

mod column;
mod manual;


pub use column::ColumnFold;
pub use manual::ManualFold;

use smol_str::SmolStr;

use crate::data::BlockData;
use crate::error::FoldError;

/// What clicking the toggle will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleAction {
    /// Block is folded; clicking reveals the full body.
    Expand,
    /// Block is unfolded; clicking folds it again.
    Collapse,
}

/// The clickable toggle label: an icon (named by its action) plus text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleAffordance {
    pub action: ToggleAction,
    pub label: SmolStr,
}

/// Labels for the two toggle states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ToggleLabels {
    pub expand: SmolStr,
    pub collapse: SmolStr,
}

impl ToggleLabels {
    pub fn new(expand: &str, collapse: &str) -> Self {
        Self {
            expand: expand.into(),
            collapse: collapse.into(),
        }
    }

    /// The affordance offered in the given fold state.
    pub fn affordance(&self, folded: bool) -> ToggleAffordance {
        if folded {
            ToggleAffordance {
                action: ToggleAction::Expand,
                label: self.expand.clone(),
            }
        } else {
            ToggleAffordance {
                action: ToggleAction::Collapse,
                label: self.collapse.clone(),
            }
        }
    }
}

/// Result of a body edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditOutcome {
    /// The toggle appeared or disappeared because the body crossed the
    /// cut limit. The view should re-sync its affordance.
    pub affordance_changed: bool,
}

/// Core trait for fold/expand engines.
///
/// Implementations own the block's state for exactly as long as the view
/// that draws it. All calls are synchronous and come from the UI thread.
pub trait FoldEngine {
    /// Current title.
    fn title(&self) -> &str;

    /// The authoritative, untruncated body.
    fn full_content(&self) -> &str;

    /// What the body surface should currently show.
    fn displayed_content(&self) -> &str;

    /// Whether the block is folded.
    fn folded(&self) -> bool;

    /// Whether the body surface accepts direct edits.
    fn editable(&self) -> bool;

    /// The toggle to show, or None if no toggle should be visible.
    fn affordance(&self) -> Option<ToggleAffordance>;

    /// Flip the fold state. Returns false if the block cannot fold.
    fn toggle(&mut self) -> bool;

    /// Replace the body with the current contents of the edit surface.
    ///
    /// The surface always holds the whole body, so receiving every
    /// keystroke or one batched update ends in the same state.
    fn edit(&mut self, content: &str) -> Result<EditOutcome, FoldError>;

    /// Replace the title. Valid in any fold state.
    fn edit_title(&mut self, title: &str);

    /// Move to the given fold state. Returns true if anything changed.
    fn set_folded(&mut self, folded: bool) -> bool {
        if self.folded() == folded {
            return false;
        }
        self.toggle()
    }

    /// Snapshot the block for persistence.
    ///
    /// Always reads the full body, never the folded preview.
    fn save(&self) -> BlockData {
        BlockData::new(self.title(), self.full_content())
    }
}
