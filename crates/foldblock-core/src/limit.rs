//! Cut-limit policies.
//!
//! A cut limit is the visual length a body may reach before it counts as
//! "long" and gets folded behind a preview. The engine only ever asks a
//! `CutLimit` for the threshold, so alternate policies can be swapped in
//! without touching the state machine.

use crate::width::is_latin;

/// Default threshold used when the host supplies no configuration.
pub const DEFAULT_CUT_LIMIT: usize = 300;

/// Policy deciding the maximum visual length of an unfolded body.
///
/// Implementations must return a value greater than zero.
pub trait CutLimit {
    /// Get the threshold for the given body.
    fn cut_limit(&self, text: &str) -> usize;
}

/// A constant threshold, regardless of content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedCutLimit(usize);

impl FixedCutLimit {
    /// Create a fixed limit. Zero is clamped to one.
    pub fn new(limit: usize) -> Self {
        Self(limit.max(1))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for FixedCutLimit {
    fn default() -> Self {
        Self(DEFAULT_CUT_LIMIT)
    }
}

impl CutLimit for FixedCutLimit {
    fn cut_limit(&self, _text: &str) -> usize {
        self.0
    }
}

/// Separate thresholds for pure-Latin bodies and everything else.
///
/// Latin prose is visually sparser per column than CJK text, so hosts
/// often want a longer preview before folding it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScriptCutLimit {
    latin: usize,
    other: usize,
}

impl ScriptCutLimit {
    /// Create a script-aware limit. Zero values are clamped to one.
    pub fn new(latin: usize, other: usize) -> Self {
        Self {
            latin: latin.max(1),
            other: other.max(1),
        }
    }
}

impl CutLimit for ScriptCutLimit {
    fn cut_limit(&self, text: &str) -> usize {
        if is_latin(text) {
            self.latin
        } else {
            self.other
        }
    }
}

impl<T: CutLimit + ?Sized> CutLimit for &T {
    fn cut_limit(&self, text: &str) -> usize {
        (**self).cut_limit(text)
    }
}

impl<T: CutLimit + ?Sized> CutLimit for Box<T> {
    fn cut_limit(&self, text: &str) -> usize {
        (**self).cut_limit(text)
    }
}

/// Wraps a closure as an ad-hoc policy. The result is clamped to at least one.
#[derive(Clone, Copy)]
pub struct CutLimitFn<F>(pub F);

impl<F> CutLimit for CutLimitFn<F>
where
    F: Fn(&str) -> usize,
{
    fn cut_limit(&self, text: &str) -> usize {
        (self.0)(text).max(1)
    }
}

/// Threshold under the default policy.
pub fn cut_limit(text: &str) -> usize {
    FixedCutLimit::default().cut_limit(text)
}
