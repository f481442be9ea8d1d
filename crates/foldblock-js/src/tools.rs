//! The two block tools exposed to the host.
//!
//! Each tool owns its engine behind `Rc<RefCell<_>>` so the DOM listeners
//! installed by `BlockView` and the host-facing methods share one state.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use foldblock_browser::{
    BlockData, BlockView, ColumnFold, DrawOptions, ENABLE_LINE_BREAKS, FoldConfig, FoldEngine,
    FoldError, ManualFold, PlatformError, SanitizeRules, ToolboxMeta, Variant, sync_view,
};

use crate::api::EditorApi;
use crate::types::{JsBlockData, JsToolbox};

/// Read one member of the options object.
fn option_field(options: &JsValue, name: &str) -> JsValue {
    js_sys::Reflect::get(options, &JsValue::from_str(name)).unwrap_or(JsValue::UNDEFINED)
}

/// Decode a plain object, treating a missing one as the default.
fn decode<T: DeserializeOwned + Default>(value: JsValue, what: &str) -> Result<T, FoldError> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| FoldError::InvalidConfig(format!("{}: {}", what, e)))
}

/// Decode, falling back to the default and logging on failure.
fn decode_or_default<T: DeserializeOwned + Default>(value: JsValue, what: &str) -> T {
    decode(value, what).unwrap_or_else(|e| {
        tracing::warn!(target: "foldblock::engine", "{}, using defaults", e);
        T::default()
    })
}

fn platform_err(context: &str, err: PlatformError) -> JsError {
    JsError::new(&format!("{}: {}", context, err))
}

/// Serialize to a plain JS object rather than a `Map`.
fn to_plain<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("Serialization failed: {}", e)))
}

/// State shared by both tools.
struct ToolState<E> {
    engine: Rc<RefCell<E>>,
    variant: Variant,
    draw_options: DrawOptions,
    api: Option<EditorApi>,
    view: Option<BlockView>,
}

impl<E: FoldEngine + 'static> ToolState<E> {
    fn new(
        options: &JsValue,
        variant: Variant,
        build: impl FnOnce(BlockData, &FoldConfig) -> E,
    ) -> Self {
        let data: BlockData = decode_or_default(option_field(options, "data"), "block data");
        let config: FoldConfig = decode_or_default(option_field(options, "config"), "tool config");

        let api = option_field(options, "api");
        let api = (!api.is_undefined() && !api.is_null()).then(|| api.unchecked_into::<EditorApi>());
        let block_class = api.as_ref().map(EditorApi::block_class).unwrap_or_default();

        Self {
            engine: Rc::new(RefCell::new(build(data, &config))),
            variant,
            draw_options: DrawOptions::new(variant, &config, block_class),
            api,
            view: None,
        }
    }

    fn draw(&self) -> Result<BlockView, JsError> {
        BlockView::draw(self.engine.clone(), self.variant, &self.draw_options)
            .map_err(|e| platform_err("Failed to draw block", e))
    }

    fn render(&mut self) -> Result<HtmlElement, JsError> {
        let view = self.draw()?;
        let root = view.root().clone();
        self.view = Some(view);
        Ok(root)
    }

    fn re_render(&mut self) -> Result<(), JsError> {
        let next = self.draw()?;
        match self.view.as_mut() {
            Some(view) => view
                .replace_with(next)
                .map_err(|e| platform_err("Failed to redraw block", e))?,
            None => self.view = Some(next),
        }
        if let Some(api) = &self.api {
            api.dismiss_overlays();
        }
        Ok(())
    }

    fn save(&self) -> JsBlockData {
        self.engine.borrow().save().into()
    }

    fn is_folded(&self) -> bool {
        self.engine.borrow().folded()
    }

    fn toggle(&self) -> Result<bool, JsError> {
        let toggled = self.engine.borrow_mut().toggle();
        if !toggled {
            return Ok(false);
        }
        if let Some(view) = &self.view {
            sync_view(&*self.engine.borrow(), view.view())
                .map_err(|e| platform_err("Failed to update block", e))?;
        }
        Ok(true)
    }
}

/// Collapsible section folded and unfolded by hand.
#[wasm_bindgen]
pub struct CollapseTool {
    state: ToolState<ManualFold>,
}

#[wasm_bindgen]
impl CollapseTool {
    /// Create a tool from the host's `{data, config, api}` options.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Self {
        Self {
            state: ToolState::new(&options, Variant::Manual, ManualFold::new),
        }
    }

    /// Draw the block and return its root element.
    pub fn render(&mut self) -> Result<HtmlElement, JsError> {
        self.state.render()
    }

    /// Replace the mounted element with a freshly drawn one.
    #[wasm_bindgen(js_name = reRender)]
    pub fn re_render(&mut self) -> Result<(), JsError> {
        self.state.re_render()
    }

    pub fn save(&self) -> JsBlockData {
        self.state.save()
    }

    #[wasm_bindgen(getter, js_name = isFolded)]
    pub fn is_folded(&self) -> bool {
        self.state.is_folded()
    }

    pub fn toggle(&self) -> Result<bool, JsError> {
        self.state.toggle()
    }

    #[wasm_bindgen(getter)]
    pub fn toolbox() -> JsToolbox {
        ToolboxMeta::FOLD_BLOCK.into()
    }

    #[wasm_bindgen(getter)]
    pub fn sanitize() -> Result<JsValue, JsError> {
        to_plain(&SanitizeRules::FOLD_BLOCK)
    }

    #[wasm_bindgen(getter, js_name = enableLineBreaks)]
    pub fn enable_line_breaks() -> bool {
        ENABLE_LINE_BREAKS
    }
}

/// Collapsible section that truncates long bodies to a preview.
#[wasm_bindgen]
pub struct ColumnCollapseTool {
    state: ToolState<ColumnFold>,
}

#[wasm_bindgen]
impl ColumnCollapseTool {
    /// Create a tool from the host's `{data, config, api}` options.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Self {
        Self {
            state: ToolState::new(&options, Variant::Column, ColumnFold::new),
        }
    }

    /// Draw the block and return its root element.
    pub fn render(&mut self) -> Result<HtmlElement, JsError> {
        self.state.render()
    }

    /// Replace the mounted element with a freshly drawn one.
    #[wasm_bindgen(js_name = reRender)]
    pub fn re_render(&mut self) -> Result<(), JsError> {
        self.state.re_render()
    }

    /// Read back the block. Always the full body, even while folded.
    pub fn save(&self) -> JsBlockData {
        self.state.save()
    }

    #[wasm_bindgen(getter, js_name = isFolded)]
    pub fn is_folded(&self) -> bool {
        self.state.is_folded()
    }

    /// Flip the fold state. Returns false when the body is too short to fold.
    pub fn toggle(&self) -> Result<bool, JsError> {
        self.state.toggle()
    }

    #[wasm_bindgen(getter)]
    pub fn toolbox() -> JsToolbox {
        ToolboxMeta::FOLD_BLOCK.into()
    }

    #[wasm_bindgen(getter)]
    pub fn sanitize() -> Result<JsValue, JsError> {
        to_plain(&SanitizeRules::FOLD_BLOCK)
    }

    #[wasm_bindgen(getter, js_name = enableLineBreaks)]
    pub fn enable_line_breaks() -> bool {
        ENABLE_LINE_BREAKS
    }
}
