//! WASM browser tests for foldblock-browser.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

use foldblock_browser::{
    BlockClasses, BlockData, BlockView, ColumnFold, DrawOptions, FoldConfig, FoldEngine,
    ManualFold, Variant, visual_length,
};

fn config() -> FoldConfig {
    FoldConfig {
        cut_limit: Some(20),
        ..FoldConfig::default()
    }
}

fn long_body() -> String {
    "abcdefghij".repeat(5)
}

fn draw<E: FoldEngine + 'static>(
    engine: E,
    variant: Variant,
) -> (Rc<RefCell<E>>, BlockView) {
    let engine = Rc::new(RefCell::new(engine));
    let options = DrawOptions::new(variant, &config(), "ce-block");
    let view = BlockView::draw(engine.clone(), variant, &options).expect("draw");
    (engine, view)
}

fn find(root: &HtmlElement, class: &str) -> HtmlElement {
    root.query_selector(&format!(".{}", class))
        .expect("query")
        .expect("element present")
        .dyn_into::<HtmlElement>()
        .expect("html element")
}

fn fire_input(target: &HtmlElement) {
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("input", &init).expect("event");
    target.dispatch_event(&event).expect("dispatch");
}

fn toggle_display(view: &BlockView) -> String {
    view.view()
        .toggle
        .style()
        .get_property_value("display")
        .expect("display")
}

// === Column variant ===

#[wasm_bindgen_test]
fn test_column_draws_truncated_preview() {
    let data = BlockData::new("Title", long_body());
    let (_engine, view) = draw(ColumnFold::new(data, &config()), Variant::Column);

    let root = view.root();
    assert!(root.class_list().contains("ce-block"));
    assert!(root.class_list().contains(BlockClasses::COLUMN.wrapper));

    let body = find(root, BlockClasses::COLUMN.content_inner);
    assert!(visual_length(&body.inner_html()) <= 20);
    assert_eq!(body.get_attribute("contenteditable").as_deref(), Some("false"));
    assert_eq!(toggle_display(&view), "inline");
    assert_eq!(view.title_text(), "Title");
}

#[wasm_bindgen_test]
fn test_column_toggle_click_expands_and_collapses() {
    let data = BlockData::new("", long_body());
    let (engine, view) = draw(ColumnFold::new(data, &config()), Variant::Column);

    view.view().toggle.click();
    assert!(!engine.borrow().folded());
    assert_eq!(view.view().body_html(), long_body());
    assert_eq!(
        view.view().body.get_attribute("contenteditable").as_deref(),
        Some("true")
    );

    view.view().toggle.click();
    assert!(engine.borrow().folded());
    assert!(visual_length(&view.view().body_html()) <= 20);
}

#[wasm_bindgen_test]
fn test_column_short_body_hides_toggle() {
    let data = BlockData::new("", "short");
    let (engine, view) = draw(ColumnFold::new(data, &config()), Variant::Column);

    assert_eq!(toggle_display(&view), "none");
    assert_eq!(view.view().body_html(), "short");

    view.view().toggle.click();
    assert!(!engine.borrow().folded());
    assert_eq!(toggle_display(&view), "none");
}

#[wasm_bindgen_test]
fn test_column_typing_past_limit_shows_toggle() {
    let data = BlockData::new("", "short");
    let (engine, view) = draw(ColumnFold::new(data, &config()), Variant::Column);

    view.view().body.set_inner_html(&long_body());
    fire_input(&view.view().body);

    assert_eq!(engine.borrow().full_content(), long_body());
    assert_eq!(toggle_display(&view), "inline");
    // the user's text is not replaced by a preview while typing
    assert_eq!(view.view().body_html(), long_body());
}

#[wasm_bindgen_test]
fn test_column_title_input_updates_save() {
    let data = BlockData::new("old", "body");
    let (engine, view) = draw(ColumnFold::new(data, &config()), Variant::Column);

    let title = find(view.root(), BlockClasses::COLUMN.title);
    title.set_inner_html("new");
    fire_input(&title);

    assert_eq!(engine.borrow().save(), BlockData::new("new", "body"));
}

// === Manual variant ===

#[wasm_bindgen_test]
fn test_manual_toggle_sets_checked_classes() {
    let data = BlockData::new("T", "content");
    let (engine, view) = draw(ManualFold::new(data, &config()), Variant::Manual);

    let wrapper = &view.view().content_wrapper;
    let checked = BlockClasses::MANUAL.content_checked.expect("manual class");
    assert!(!wrapper.class_list().contains(checked));

    view.view().toggle.click();
    assert!(!engine.borrow().folded());
    assert!(wrapper.class_list().contains(checked));

    view.view().toggle.click();
    assert!(!wrapper.class_list().contains(checked));
}

#[wasm_bindgen_test]
fn test_manual_body_editable_while_folded() {
    let data = BlockData::new("", "a");
    let (engine, view) = draw(ManualFold::new(data, &config()), Variant::Manual);

    view.view().body.set_inner_html("ab");
    fire_input(&view.view().body);

    assert!(engine.borrow().folded());
    assert_eq!(engine.borrow().full_content(), "ab");
}

#[wasm_bindgen_test]
fn test_redraw_replaces_root() {
    let data = BlockData::new("", long_body());
    let (engine, mut view) = draw(ColumnFold::new(data, &config()), Variant::Column);

    let document = web_sys::window().unwrap().document().unwrap();
    let host = document.body().unwrap();
    host.append_child(view.root()).unwrap();

    let options = DrawOptions::new(Variant::Column, &config(), "ce-block");
    let next = BlockView::draw(engine.clone(), Variant::Column, &options).unwrap();
    view.replace_with(next).unwrap();

    assert!(view.root().is_connected());
    assert_eq!(
        host.query_selector_all(&format!(".{}", BlockClasses::COLUMN.wrapper))
            .unwrap()
            .length(),
        1
    );
    host.remove_child(view.root()).unwrap();
}

#[wasm_bindgen_test]
fn test_redraw_keeps_live_edits() {
    let data = BlockData::new("", long_body());
    let (engine, mut view) = draw(ColumnFold::new(data, &config()), Variant::Column);

    view.view().toggle.click();
    assert!(!engine.borrow().folded());

    let edited = "<div>edited body that stays over the limit</div>";
    view.view().body.set_inner_html(edited);
    fire_input(&view.view().body);

    let options = DrawOptions::new(Variant::Column, &config(), "ce-block");
    let next = BlockView::draw(engine.clone(), Variant::Column, &options).unwrap();
    view.replace_with(next).unwrap();

    assert_eq!(view.view().body_html(), edited);
    assert_eq!(engine.borrow().save().content, edited);
    assert!(!engine.borrow().folded());
}
