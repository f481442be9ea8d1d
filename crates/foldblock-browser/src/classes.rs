//! CSS class contract.
//!
//! Stylesheets key off these names, so they are part of the public
//! surface and must not change between releases.

/// Class names for one block variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockClasses {
    pub wrapper: &'static str,
    pub collapse_wrapper: &'static str,
    /// Header row holding the toggle and title (manual variant only).
    pub header: Option<&'static str>,
    pub title: &'static str,
    pub toggle: &'static str,
    pub content: &'static str,
    pub content_inner: &'static str,
    /// Added to the content wrapper while unfolded (manual variant only).
    pub content_checked: Option<&'static str>,
    /// Added to the toggle while unfolded (manual variant only).
    pub toggle_checked: Option<&'static str>,
}

impl BlockClasses {
    pub const MANUAL: BlockClasses = BlockClasses {
        wrapper: "cdx-collapse",
        collapse_wrapper: "cdx-collapse-wrapper",
        header: Some("cdx-collapse-header"),
        title: "cdx-collapse-title",
        toggle: "cdx-collapse-toggle",
        content: "cdx-collapse-content",
        content_inner: "content-inner",
        content_checked: Some("cdx-collapse-content-checked"),
        toggle_checked: Some("cdx-collapse-toggle-checked"),
    };

    pub const COLUMN: BlockClasses = BlockClasses {
        wrapper: "cdx-column-collapse",
        collapse_wrapper: "cdx-column-collapse-wrapper",
        header: None,
        title: "cdx-column-collapse-title",
        toggle: "cdx-column-collapse-toggle",
        content: "cdx-column-collapse-content",
        content_inner: "content-inner",
        content_checked: None,
        toggle_checked: None,
    };
}
