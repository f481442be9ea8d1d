//! Toggle icons.

use foldblock_core::ToggleAction;

/// Chevron pointing down: "click to expand".
pub const ARROW_DOWN: &str = r#"<svg width="12" height="12" viewBox="0 0 1024 1024" xmlns="http://www.w3.org/2000/svg"><path d="M512 714.7L149.3 352l60.4-60.3L512 594l302.3-302.3 60.4 60.3z"></path></svg>"#;

/// Chevron pointing up: "click to collapse".
pub const ARROW_UP: &str = r#"<svg width="12" height="12" viewBox="0 0 1024 1024" xmlns="http://www.w3.org/2000/svg"><path d="M512 309.3L874.7 672l-60.4 60.3L512 430 209.7 732.3 149.3 672z"></path></svg>"#;

/// Icon for a toggle action.
pub fn icon_for(action: ToggleAction) -> &'static str {
    match action {
        ToggleAction::Expand => ARROW_DOWN,
        ToggleAction::Collapse => ARROW_UP,
    }
}

/// Inner HTML of the toggle label: icon followed by text.
///
/// Labels come from host config, so the text is escaped.
pub fn label_html(action: ToggleAction, label: &str) -> String {
    let mut html = String::with_capacity(icon_for(action).len() + label.len() + 1);
    html.push_str(icon_for(action));
    html.push(' ');
    for c in label.chars() {
        match c {
            '<' => html.push_str("&lt;"),
            '>' => html.push_str("&gt;"),
            '&' => html.push_str("&amp;"),
            '"' => html.push_str("&quot;"),
            c => html.push(c),
        }
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_html() {
        let html = label_html(ToggleAction::Expand, "展开");
        assert!(html.starts_with(ARROW_DOWN));
        assert!(html.ends_with(" 展开"));

        let html = label_html(ToggleAction::Collapse, "收起");
        assert!(html.starts_with(ARROW_UP));
    }

    #[test]
    fn test_label_escaped() {
        let html = label_html(ToggleAction::Expand, "<b>more</b> & \"less\"");
        assert!(html.ends_with(" &lt;b&gt;more&lt;/b&gt; &amp; &quot;less&quot;"));
    }
}
