//! Block DOM construction and input wiring.
//!
//! `BlockView::draw` builds the node tree for one block variant, pushes the
//! engine's state into it, and attaches listeners that relay title input,
//! body input and toggle clicks back into the engine. Dropping the view
//! removes the listeners; the engine lives on in its `Rc`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use foldblock_core::{FoldConfig, FoldEngine, PlatformError, sync_affordance, sync_view};

use crate::classes::BlockClasses;
use crate::dom::{self, js_err, make};
use crate::view::DomFoldView;

/// Which block layout to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Title input in a header row next to the toggle; body shown or
    /// hidden by class.
    Manual,
    /// Editable title above a body that is truncated while folded, with
    /// the toggle trailing the body.
    Column,
}

impl Variant {
    pub fn classes(self) -> BlockClasses {
        match self {
            Variant::Manual => BlockClasses::MANUAL,
            Variant::Column => BlockClasses::COLUMN,
        }
    }

    fn default_placeholders(self) -> (&'static str, &'static str) {
        match self {
            Variant::Manual => ("Collapse", "Collapse"),
            Variant::Column => ("折叠块标题", "折叠块内容"),
        }
    }
}

/// Presentation options that come from the host rather than the engine.
#[derive(Debug, Clone)]
pub struct DrawOptions {
    /// The host editor's generic block class.
    pub block_class: String,
    pub title_placeholder: String,
    pub content_placeholder: String,
}

impl DrawOptions {
    pub fn new(variant: Variant, config: &FoldConfig, block_class: impl Into<String>) -> Self {
        let (title, content) = variant.default_placeholders();
        Self {
            block_class: block_class.into(),
            title_placeholder: config
                .title_placeholder
                .clone()
                .unwrap_or_else(|| title.to_string()),
            content_placeholder: config
                .content_placeholder
                .clone()
                .unwrap_or_else(|| content.to_string()),
        }
    }
}

/// The title node differs per variant.
#[derive(Clone)]
enum TitleNode {
    Input(HtmlInputElement),
    Editable(HtmlElement),
}

impl TitleNode {
    fn text(&self) -> String {
        match self {
            TitleNode::Input(input) => input.value(),
            TitleNode::Editable(el) => el.inner_html(),
        }
    }

    fn set_text(&self, text: &str) {
        match self {
            TitleNode::Input(input) => input.set_value(text),
            TitleNode::Editable(el) => el.set_inner_html(text),
        }
    }

    fn element(&self) -> &HtmlElement {
        match self {
            TitleNode::Input(input) => input,
            TitleNode::Editable(el) => el,
        }
    }
}

/// A drawn block: its root element, the nodes the engine drives, and the
/// listeners keeping them in sync.
pub struct BlockView {
    root: HtmlElement,
    title: TitleNode,
    view: Rc<DomFoldView>,
    _listeners: Vec<EventListener>,
}

impl BlockView {
    /// Build the block's DOM from the engine's current state.
    pub fn draw<E>(
        engine: Rc<RefCell<E>>,
        variant: Variant,
        options: &DrawOptions,
    ) -> Result<Self, PlatformError>
    where
        E: FoldEngine + 'static,
    {
        let document = dom::document()?;
        let classes = variant.classes();
        let skip_plus = ("data-skip-plus-button", "true");

        let root = make(
            &document,
            "div",
            &[options.block_class.as_str(), classes.wrapper],
            &[],
        )?;
        let collapse_wrapper = make(&document, "div", &[classes.collapse_wrapper], &[])?;
        let content_wrapper = make(&document, "div", &[classes.content], &[])?;
        let toggle = make(
            &document,
            "label",
            &[classes.toggle],
            &[skip_plus, ("contenteditable", "false")],
        )?;

        let (title, body) = match variant {
            Variant::Manual => {
                let title = make_title_input(&document, classes, options)?;
                let body = make(
                    &document,
                    "div",
                    &[classes.content_inner],
                    &[skip_plus, ("placeholder", options.content_placeholder.as_str())],
                )?;
                let header = make(&document, "div", &[classes.header.unwrap_or_default()], &[])?;
                append(&header, &toggle)?;
                append(&header, title.element())?;
                append(&collapse_wrapper, &header)?;
                (title, body)
            }
            Variant::Column => {
                let title = make(
                    &document,
                    "div",
                    &[classes.title],
                    &[
                        skip_plus,
                        ("contenteditable", "true"),
                        ("placeholder", options.title_placeholder.as_str()),
                    ],
                )?;
                append(&collapse_wrapper, &title)?;
                let body = make(
                    &document,
                    "span",
                    &[classes.content_inner],
                    &[skip_plus, ("placeholder", options.content_placeholder.as_str())],
                )?;
                (TitleNode::Editable(title), body)
            }
        };

        append(&content_wrapper, &body)?;
        append(&content_wrapper, &toggle)?;
        append(&collapse_wrapper, &content_wrapper)?;
        append(&root, &collapse_wrapper)?;

        let view = Rc::new(DomFoldView::new(content_wrapper, body, toggle, classes));
        {
            let engine = engine.borrow();
            title.set_text(engine.title());
            sync_view(&*engine, &*view)?;
        }

        let listeners = attach_listeners(&engine, &title, &view);

        tracing::debug!(target: "foldblock::view", ?variant, "block drawn");

        Ok(Self {
            root,
            title,
            view,
            _listeners: listeners,
        })
    }

    /// The block's root element, for mounting into the host.
    pub fn root(&self) -> &HtmlElement {
        &self.root
    }

    /// The nodes driven by the engine.
    pub fn view(&self) -> &DomFoldView {
        &self.view
    }

    /// The title text currently in the DOM.
    pub fn title_text(&self) -> String {
        self.title.text()
    }

    /// Swap this view's root for `next`'s in the DOM and adopt `next`.
    ///
    /// The old listeners are dropped with the old view.
    pub fn replace_with(&mut self, next: BlockView) -> Result<(), PlatformError> {
        self.root
            .replace_with_with_node_1(next.root())
            .map_err(|e| js_err("Failed to replace block element", e))?;
        *self = next;
        Ok(())
    }
}

fn make_title_input(
    document: &Document,
    classes: BlockClasses,
    options: &DrawOptions,
) -> Result<TitleNode, PlatformError> {
    let input = make(
        document,
        "input",
        &[classes.title],
        &[
            ("data-skip-plus-button", "true"),
            ("placeholder", options.title_placeholder.as_str()),
        ],
    )?
    .dyn_into::<HtmlInputElement>()
    .map_err(|_| PlatformError::from("Title element is not an input"))?;
    Ok(TitleNode::Input(input))
}

fn append(parent: &HtmlElement, child: &HtmlElement) -> Result<(), PlatformError> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| js_err("Failed to append child", e))
}

fn attach_listeners<E>(
    engine: &Rc<RefCell<E>>,
    title: &TitleNode,
    view: &Rc<DomFoldView>,
) -> Vec<EventListener>
where
    E: FoldEngine + 'static,
{
    let on_title = {
        let engine = engine.clone();
        let node = title.clone();
        EventListener::new(title.element(), "input", move |_| {
            engine.borrow_mut().edit_title(&node.text());
        })
    };

    let on_body = {
        let engine = engine.clone();
        let view = view.clone();
        EventListener::new(&view.body.clone(), "input", move |_| {
            let html = view.body_html();
            let result = engine.borrow_mut().edit(&html);
            match result {
                Ok(outcome) if outcome.affordance_changed => {
                    if let Err(e) = sync_affordance(&*engine.borrow(), &*view) {
                        tracing::warn!(target: "foldblock::view", "toggle sync failed: {}", e);
                    }
                }
                Ok(_) => {}
                Err(e) => tracing::warn!(target: "foldblock::view", "body edit ignored: {}", e),
            }
        })
    };

    let on_toggle = {
        let engine = engine.clone();
        let view = view.clone();
        EventListener::new(&view.toggle.clone(), "click", move |_| {
            let toggled = engine.borrow_mut().toggle();
            if !toggled {
                return;
            }
            if let Err(e) = sync_view(&*engine.borrow(), &*view) {
                tracing::warn!(target: "foldblock::view", "view sync failed: {}", e);
            }
        })
    };

    vec![on_title, on_body, on_toggle]
}
