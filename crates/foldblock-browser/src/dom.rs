//! Element construction helpers.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use foldblock_core::PlatformError;

/// Get the current document.
pub fn document() -> Result<Document, PlatformError> {
    web_sys::window()
        .ok_or("No window")?
        .document()
        .ok_or_else(|| "No document".into())
}

/// Convert a JS exception into a platform error.
pub fn js_err(context: &str, err: wasm_bindgen::JsValue) -> PlatformError {
    PlatformError(format!("{}: {:?}", context, err))
}

/// Create an element with classes and attributes.
///
/// Classes that are empty strings are skipped, so host-provided class
/// names that may be missing can be passed straight through.
pub fn make(
    document: &Document,
    tag: &str,
    classes: &[&str],
    attrs: &[(&str, &str)],
) -> Result<HtmlElement, PlatformError> {
    let element = document
        .create_element(tag)
        .map_err(|e| js_err("Failed to create element", e))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| PlatformError::from("Created element is not an HtmlElement"))?;

    for class in classes.iter().filter(|c| !c.is_empty()) {
        element
            .class_list()
            .add_1(class)
            .map_err(|e| js_err("Failed to add class", e))?;
    }

    for (name, value) in attrs {
        element
            .set_attribute(name, value)
            .map_err(|e| js_err("Failed to set attribute", e))?;
    }

    Ok(element)
}

/// Add or remove a class depending on `on`.
pub fn set_class(element: &HtmlElement, class: &str, on: bool) -> Result<(), PlatformError> {
    let list = element.class_list();
    let result = if on { list.add_1(class) } else { list.remove_1(class) };
    result.map_err(|e| js_err("Failed to toggle class", e))
}

/// Set a single inline style property.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), PlatformError> {
    element
        .style()
        .set_property(property, value)
        .map_err(|e| js_err("Failed to set style", e))
}
