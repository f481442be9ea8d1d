//! Bindings to the host editor's API object.
//!
//! Only the members the tools touch are bound. Every binding catches, so a
//! host that passes a partial API object gets defaults instead of a thrown
//! TypeError.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// The API object the host hands each tool instance.
    #[derive(Debug, Clone)]
    pub type EditorApi;

    #[wasm_bindgen(method, getter, structural, catch)]
    pub fn styles(this: &EditorApi) -> Result<EditorStyles, JsValue>;

    #[wasm_bindgen(method, getter, structural, catch)]
    pub fn tooltip(this: &EditorApi) -> Result<TooltipApi, JsValue>;

    #[wasm_bindgen(method, getter, structural, catch)]
    pub fn toolbar(this: &EditorApi) -> Result<ToolbarApi, JsValue>;

    /// Host-wide class names.
    pub type EditorStyles;

    #[wasm_bindgen(method, getter, structural, catch)]
    pub fn block(this: &EditorStyles) -> Result<JsValue, JsValue>;

    pub type TooltipApi;

    #[wasm_bindgen(method, structural, catch)]
    pub fn hide(this: &TooltipApi) -> Result<(), JsValue>;

    pub type ToolbarApi;

    #[wasm_bindgen(method, structural, catch)]
    pub fn close(this: &ToolbarApi) -> Result<(), JsValue>;
}

impl EditorApi {
    /// The host's generic block class, or empty when it provides none.
    pub fn block_class(&self) -> String {
        self.styles()
            .and_then(|styles| styles.block())
            .ok()
            .and_then(|class| class.as_string())
            .unwrap_or_default()
    }

    /// Dismiss host chrome that may be anchored to the old element.
    pub fn dismiss_overlays(&self) {
        if let Err(e) = self.tooltip().and_then(|tooltip| tooltip.hide()) {
            tracing::debug!(target: "foldblock::view", "tooltip.hide unavailable: {:?}", e);
        }
        if let Err(e) = self.toolbar().and_then(|toolbar| toolbar.close()) {
            tracing::debug!(target: "foldblock::view", "toolbar.close unavailable: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use js_sys::{Function, Object, Reflect};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn object(entries: &[(&str, JsValue)]) -> Object {
        let obj = Object::new();
        for (key, value) in entries {
            Reflect::set(&obj, &JsValue::from_str(key), value).unwrap();
        }
        obj
    }

    fn api(obj: Object) -> EditorApi {
        obj.unchecked_into::<EditorApi>()
    }

    #[wasm_bindgen_test]
    fn test_block_class_from_host() {
        let styles = object(&[("block", JsValue::from_str("ce-block"))]);
        let api = api(object(&[("styles", styles.into())]));
        assert_eq!(api.block_class(), "ce-block");
    }

    #[wasm_bindgen_test]
    fn test_partial_api_falls_back() {
        let empty = api(Object::new());
        assert_eq!(empty.block_class(), "");
        empty.dismiss_overlays();

        let wrong = api(object(&[
            ("styles", JsValue::from_f64(1.0)),
            ("tooltip", Object::new().into()),
            ("toolbar", JsValue::NULL),
        ]));
        assert_eq!(wrong.block_class(), "");
        wrong.dismiss_overlays();
    }

    #[wasm_bindgen_test]
    fn test_dismiss_overlays_calls_host() {
        let calls = Object::new();
        let record = |name: &str| {
            Function::new_with_args("calls", &format!("calls.{} = true;", name))
                .bind1(&JsValue::NULL, &calls)
        };
        let api = api(object(&[
            ("tooltip", object(&[("hide", record("hide").into())]).into()),
            ("toolbar", object(&[("close", record("close").into())]).into()),
        ]));

        api.dismiss_overlays();

        assert_eq!(Reflect::get(&calls, &"hide".into()).unwrap(), JsValue::TRUE);
        assert_eq!(Reflect::get(&calls, &"close".into()).unwrap(), JsValue::TRUE);
    }
}
