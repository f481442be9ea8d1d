//! Browser DOM layer for foldblock.
//!
//! This crate draws any `FoldEngine` into the DOM and relays user input
//! back into it. It assumes a `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `dom`: element construction helpers
//! - `classes`: CSS class contract for both block variants
//! - `icons`: toggle icons
//! - `view`: `DomFoldView`, the `FoldView` implementation over DOM nodes
//! - `block`: `BlockView`, which builds the block's DOM and wires listeners
//!
//! # Re-exports
//!
//! This crate re-exports `foldblock-core` for convenience, so consumers
//! only need to depend on `foldblock-browser`.

// Re-export core crate
pub use foldblock_core;
pub use foldblock_core::*;

pub mod block;
pub mod classes;
pub mod dom;
pub mod icons;
pub mod view;

pub use block::{BlockView, DrawOptions, Variant};
pub use classes::BlockClasses;
pub use view::DomFoldView;
