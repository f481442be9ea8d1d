//! Types exposed to JavaScript via wasm-bindgen.

use serde::Serialize;
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

use foldblock_core::{BlockData, ToolboxMeta};

/// Saved block payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Tsify)]
#[tsify(into_wasm_abi)]
pub struct JsBlockData {
    pub title: String,
    pub content: String,
}

impl From<BlockData> for JsBlockData {
    fn from(data: BlockData) -> Self {
        Self {
            title: data.title,
            content: data.content,
        }
    }
}

/// Toolbox entry shown in the host's block picker.
#[derive(Debug, Clone, Serialize, Tsify)]
#[tsify(into_wasm_abi)]
pub struct JsToolbox {
    pub icon: String,
    pub title: String,
}

impl From<ToolboxMeta> for JsToolbox {
    fn from(meta: ToolboxMeta) -> Self {
        Self {
            icon: meta.icon.to_string(),
            title: meta.title.to_string(),
        }
    }
}
