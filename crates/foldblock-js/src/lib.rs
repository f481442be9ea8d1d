//! WASM bindings for the foldblock tools.
//!
//! Exposes two block tools to a block-style editor host:
//!
//! - `CollapseTool`: title plus a body folded and unfolded by hand
//! - `ColumnCollapseTool`: title plus a body truncated to a preview once it
//!   grows past the cut limit
//!
//! Both follow the host's tool contract: constructed from
//! `{data, config, api}`, drawn by `render()`, read back by `save()`.

mod api;
mod tools;
mod types;

pub use api::*;
pub use tools::*;
pub use types::*;

use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}
