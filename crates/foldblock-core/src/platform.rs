//! Platform abstraction for drawing a fold engine.
//!
//! The engine never touches a UI. A `FoldView` implementation (browser
//! DOM, native widget, test recorder) receives the engine's state through
//! `sync_view` / `sync_affordance` and is free to render it however it likes.

use crate::engine::{FoldEngine, ToggleAffordance};

/// Error type for platform operations.
#[derive(Debug, Clone)]
pub struct PlatformError(pub String);

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for PlatformError {}

impl From<&str> for PlatformError {
    fn from(s: &str) -> Self {
        PlatformError(s.to_string())
    }
}

impl From<String> for PlatformError {
    fn from(s: String) -> Self {
        PlatformError(s)
    }
}

/// Platform-specific presentation of a fold block.
///
/// Methods take `&self` because UI handles (DOM nodes, widget refs) are
/// shared and mutate through the platform, not through Rust ownership.
pub trait FoldView {
    /// Replace what the body surface shows.
    fn set_body(&self, html: &str) -> Result<(), PlatformError>;

    /// Enable or disable direct editing of the body surface.
    fn set_editable(&self, editable: bool) -> Result<(), PlatformError>;

    /// Reflect the fold state (e.g. a "checked" class on the wrapper).
    fn set_folded(&self, folded: bool) -> Result<(), PlatformError>;

    /// Show the toggle with the given icon and label.
    fn show_affordance(&self, affordance: &ToggleAffordance) -> Result<(), PlatformError>;

    /// Hide the toggle entirely.
    fn hide_affordance(&self) -> Result<(), PlatformError>;
}

/// Push the engine's full presentation state to a view.
///
/// Used after a toggle or on first draw. Rewrites the body surface, so
/// do not call it while the user is typing into that surface.
pub fn sync_view<E, V>(engine: &E, view: &V) -> Result<(), PlatformError>
where
    E: FoldEngine + ?Sized,
    V: FoldView + ?Sized,
{
    view.set_body(engine.displayed_content())?;
    view.set_editable(engine.editable())?;
    view.set_folded(engine.folded())?;
    sync_affordance(engine, view)
}

/// Push only the toggle state to a view.
///
/// Used after a live edit, where the body surface already holds the
/// user's text and must not be rewritten.
pub fn sync_affordance<E, V>(engine: &E, view: &V) -> Result<(), PlatformError>
where
    E: FoldEngine + ?Sized,
    V: FoldView + ?Sized,
{
    match engine.affordance() {
        Some(affordance) => view.show_affordance(&affordance),
        None => view.hide_affordance(),
    }
}
