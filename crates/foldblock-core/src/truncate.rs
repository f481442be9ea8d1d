//! Markup-aware preview truncation.
//!
//! `truncate` cuts an HTML fragment down to a visual-length budget. Tags,
//! entities and grapheme clusters are never split, every element left open
//! at the cut point is closed, and the closing tags are paid for out of the
//! same budget, so the result always satisfies
//! `visual_length(truncate(s, n)) <= n`.
//!
//! Bare `<`, `>` and `&` in text are written escaped. Dropping a stray
//! closer would otherwise let the text around it join into a tag or entity
//! the input never had.

use std::borrow::Cow;

use smol_str::SmolStr;

use crate::markup::{Token, closing_tag, tokenize};
use crate::width::visual_length;

/// An element opened in the output and not yet closed.
struct OpenElement {
    name: SmolStr,
    /// Byte range of the opening tag in the output buffer.
    start: usize,
    end: usize,
    /// Width of the opening tag.
    width: usize,
    /// Width of the closing tag reserved for it.
    closer: usize,
}

/// Cut `text` to at most `limit` visual length without breaking markup.
///
/// Returns the input unchanged (borrowed) when it already fits. Otherwise
/// returns the longest token prefix that fits together with the closers it
/// needs. Stray closing tags with no matching open element are dropped.
/// Text is escaped and measured in its escaped form. Never fails; if
/// nothing fits the result is empty.
pub fn truncate(text: &str, limit: usize) -> Cow<'_, str> {
    if visual_length(text) <= limit {
        return Cow::Borrowed(text);
    }

    let mut out = String::new();
    let mut used = 0usize;
    let mut reserved = 0usize;
    let mut open: Vec<OpenElement> = Vec::new();
    let mut cut = false;

    for token in tokenize(text) {
        let width = token.width();
        match token {
            Token::Open { raw, name } => {
                let closer = visual_length(&closing_tag(&name));
                if used + width + reserved + closer > limit {
                    cut = true;
                    break;
                }
                let start = out.len();
                out.push_str(raw);
                open.push(OpenElement {
                    name,
                    start,
                    end: out.len(),
                    width,
                    closer,
                });
                used += width;
                reserved += closer;
            }
            Token::Close { name, .. } => {
                // Closers are already paid for, so emitting them never
                // exceeds the budget.
                let Some(idx) = open.iter().rposition(|el| el.name == name) else {
                    continue;
                };
                for el in open.drain(idx..).rev() {
                    out.push_str(&closing_tag(&el.name));
                    used += el.closer;
                    reserved -= el.closer;
                }
            }
            Token::Text(raw) => {
                let text = escape_text(raw);
                let width = visual_length(&text);
                if used + width + reserved > limit {
                    cut = true;
                    break;
                }
                out.push_str(&text);
                used += width;
            }
            other => {
                if used + width + reserved > limit {
                    cut = true;
                    break;
                }
                out.push_str(other.raw());
                used += width;
            }
        }
    }

    if cut {
        // Drop elements that were opened right before the cut and hold nothing.
        while let Some(el) = open.last() {
            if el.end != out.len() {
                break;
            }
            out.truncate(el.start);
            used -= el.width;
            reserved -= el.closer;
            open.pop();
        }
    }

    for el in open.iter().rev() {
        out.push_str(&closing_tag(&el.name));
    }

    tracing::trace!(
        target: "foldblock::engine",
        limit,
        width = used + reserved,
        "truncated preview"
    );

    Cow::Owned(out)
}

/// Escape the characters that could start or end markup.
fn escape_text(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['<', '>', '&']) {
        return Cow::Borrowed(raw);
    }
    let mut out = String::with_capacity(raw.len() + 4);
    for c in raw.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}
