//! foldblock-core: Pure Rust fold/expand logic without DOM dependencies.
//!
//! This crate provides:
//! - `visual_length` - width-weighted character count (Latin 1, everything else 2)
//! - `CutLimit` trait - swappable "is this body long" threshold policy
//! - `truncate` - markup-aware preview truncation that never leaves tags unclosed
//! - `FoldEngine` trait with `ManualFold` and `ColumnFold` state machines
//! - `FoldView` trait - the seam between the engine and a presentation layer

pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod limit;
pub mod markup;
pub mod platform;
pub mod truncate;
pub mod width;

pub use config::FoldConfig;
pub use data::{BlockData, ENABLE_LINE_BREAKS, SanitizeRules, ToolboxMeta};
pub use engine::{
    ColumnFold, EditOutcome, FoldEngine, ManualFold, ToggleAction, ToggleAffordance,
};
pub use error::FoldError;
pub use limit::{
    CutLimit, CutLimitFn, DEFAULT_CUT_LIMIT, FixedCutLimit, ScriptCutLimit, cut_limit,
};
pub use markup::{Token, tokenize};
pub use platform::{FoldView, PlatformError, sync_affordance, sync_view};
pub use smol_str::SmolStr;
pub use truncate::truncate;
pub use width::{is_latin, is_latin_char, visual_length};
