//! DOM-backed `FoldView`.
//!
//! Applies engine state to the block's nodes: body HTML, contenteditable,
//! "checked" classes for the manual variant, and the toggle label's
//! icon + text.

use web_sys::HtmlElement;

use foldblock_core::{FoldView, PlatformError, ToggleAffordance};

use crate::classes::BlockClasses;
use crate::dom::{set_class, set_style};
use crate::icons::label_html;

/// The nodes a fold engine drives.
pub struct DomFoldView {
    pub content_wrapper: HtmlElement,
    pub body: HtmlElement,
    pub toggle: HtmlElement,
    classes: BlockClasses,
}

impl DomFoldView {
    pub fn new(
        content_wrapper: HtmlElement,
        body: HtmlElement,
        toggle: HtmlElement,
        classes: BlockClasses,
    ) -> Self {
        Self {
            content_wrapper,
            body,
            toggle,
            classes,
        }
    }

    /// Read the body surface's current HTML.
    pub fn body_html(&self) -> String {
        self.body.inner_html()
    }
}

impl FoldView for DomFoldView {
    fn set_body(&self, html: &str) -> Result<(), PlatformError> {
        if self.body.inner_html() != html {
            self.body.set_inner_html(html);
        }
        Ok(())
    }

    fn set_editable(&self, editable: bool) -> Result<(), PlatformError> {
        self.body
            .set_content_editable(if editable { "true" } else { "false" });
        set_style(&self.body, "cursor", if editable { "text" } else { "pointer" })
    }

    fn set_folded(&self, folded: bool) -> Result<(), PlatformError> {
        if let Some(class) = self.classes.content_checked {
            set_class(&self.content_wrapper, class, !folded)?;
        }
        if let Some(class) = self.classes.toggle_checked {
            set_class(&self.toggle, class, !folded)?;
        }
        Ok(())
    }

    fn show_affordance(&self, affordance: &ToggleAffordance) -> Result<(), PlatformError> {
        self.toggle
            .set_inner_html(&label_html(affordance.action, &affordance.label));
        set_style(&self.toggle, "display", "inline")?;
        tracing::trace!(target: "foldblock::view", action = ?affordance.action, "toggle shown");
        Ok(())
    }

    fn hide_affordance(&self) -> Result<(), PlatformError> {
        set_style(&self.toggle, "display", "none")?;
        tracing::trace!(target: "foldblock::view", "toggle hidden");
        Ok(())
    }
}
