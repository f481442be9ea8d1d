//! Tolerant tokenizer for the HTML fragments stored in block bodies.
//!
//! Bodies are host-sanitized and normally only carry `<br>` and `<div>`,
//! but the tokenizer accepts anything: a `<` that does not start a
//! well-formed tag is plain text, and unknown tags are tracked by name.
//! Text is split into grapheme clusters so a cut never lands inside one.

use smol_str::SmolStr;
use unicode_segmentation::UnicodeSegmentation;

use crate::width::visual_length;

/// Elements that never take a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Longest named or numeric entity body we recognise (`&...;`).
const MAX_ENTITY_LEN: usize = 32;

/// A single indivisible piece of an HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// One grapheme cluster of text.
    Text(&'a str),
    /// An opening tag that needs a matching close.
    Open { raw: &'a str, name: SmolStr },
    /// A closing tag.
    Close { raw: &'a str, name: SmolStr },
    /// Void element, self-closing tag, comment or doctype.
    Void(&'a str),
    /// Character reference such as `&amp;` or `&#20320;`.
    Entity(&'a str),
}

impl<'a> Token<'a> {
    /// The source text of this token.
    pub fn raw(&self) -> &'a str {
        match self {
            Token::Text(raw) | Token::Void(raw) | Token::Entity(raw) => *raw,
            Token::Open { raw, .. } | Token::Close { raw, .. } => *raw,
        }
    }

    /// Visual length of the token's source text.
    pub fn width(&self) -> usize {
        visual_length(self.raw())
    }
}

/// Build the closing tag for an element name.
pub fn closing_tag(name: &str) -> String {
    format!("</{}>", name)
}

/// Iterator over the tokens of a fragment.
pub struct Tokenizer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn take(&mut self, len: usize) -> &'a str {
        let raw = &self.src[self.pos..self.pos + len];
        self.pos += len;
        raw
    }

    fn take_grapheme(&mut self) -> Token<'a> {
        let rest = &self.src[self.pos..];
        let len = rest.graphemes(true).next().map_or(rest.len(), str::len);
        Token::Text(self.take(len))
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = &self.src[self.pos..];
        if rest.is_empty() {
            return None;
        }

        if rest.starts_with('<') {
            if let Some(token) = self.scan_tag() {
                return Some(token);
            }
        } else if rest.starts_with('&') {
            if let Some(len) = entity_len(rest) {
                return Some(Token::Entity(self.take(len)));
            }
        }

        Some(self.take_grapheme())
    }
}

impl<'a> Tokenizer<'a> {
    /// Try to read a tag at the current position. Returns None (and leaves
    /// the position alone) if the `<` is just text.
    fn scan_tag(&mut self) -> Option<Token<'a>> {
        let rest = &self.src[self.pos..];

        if rest.starts_with("<!--") {
            let end = rest[4..].find("-->")? + 4 + 3;
            return Some(Token::Void(self.take(end)));
        }

        let after = rest[1..].chars().next()?;
        let closing = after == '/';
        let name_start = if closing { 2 } else { 1 };

        match rest[name_start..].chars().next() {
            Some(c) if c.is_ascii_alphabetic() => {}
            // Doctype and processing instructions carry no structure.
            Some(_) if !closing && (after == '!' || after == '?') => {
                let end = tag_end(rest)?;
                return Some(Token::Void(self.take(end)));
            }
            _ => return None,
        }

        let end = tag_end(rest)?;
        let name: SmolStr = rest[name_start..end]
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let raw = self.take(end);
        let token = if closing {
            Token::Close { raw, name }
        } else if raw.ends_with("/>") || VOID_ELEMENTS.contains(&name.as_str()) {
            Token::Void(raw)
        } else {
            Token::Open { raw, name }
        };
        Some(token)
    }
}

/// Find the byte length of a tag starting at `<`, honouring quoted
/// attribute values. A bare `<` before the closing `>` means this was
/// not a tag after all.
fn tag_end(rest: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (idx, c) in rest.char_indices().skip(1) {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '>') => return Some(idx + 1),
            (None, '<') => return None,
            (None, _) => {}
        }
    }
    None
}

/// Byte length of a character reference at the start of `rest`, if any.
fn entity_len(rest: &str) -> Option<usize> {
    let body = rest[1..].strip_prefix('#').unwrap_or(&rest[1..]);
    let prefix = rest.len() - body.len();
    let run = body
        .bytes()
        .take(MAX_ENTITY_LEN)
        .take_while(u8::is_ascii_alphanumeric)
        .count();
    if run == 0 || body.as_bytes().get(run) != Some(&b';') {
        return None;
    }
    Some(prefix + run + 1)
}

/// Tokenize a fragment.
pub fn tokenize(src: &str) -> Tokenizer<'_> {
    Tokenizer::new(src)
}
