//! Small DOM helpers shared by the feature modules.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlImageElement};

use crate::assets;

/// Asset base path, read from `<body data-base-url="...">`.
pub fn base_url(document: &Document) -> String {
    document
        .body()
        .and_then(|body| body.get_attribute("data-base-url"))
        .unwrap_or_else(|| "/".to_owned())
}

pub fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// All elements matching `selector`, as `HtmlElement`s, in document order.
pub fn query_all(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let mut out = Vec::new();
    if let Ok(list) = root.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.get(i).and_then(|node| node.dyn_into::<HtmlElement>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

pub fn query_all_in_document(document: &Document, selector: &str) -> Vec<HtmlElement> {
    match document.document_element() {
        Some(root) => query_all(&root, selector),
        None => Vec::new(),
    }
}

/// Attach a leaked event listener; the page never unwires anything.
pub fn on_event<F>(target: &EventTarget, kind: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Resolve every `img[data-src]` under `page` and kick off its load. The
/// `loaded` class lands once the browser reports the fetch, driving the CSS
/// fade-in. Missing or empty `data-src` values are skipped.
pub fn lazy_load_page(page: &HtmlElement, base: &str) {
    for img in query_all(page, "img[data-src]") {
        let Ok(img) = img.dyn_into::<HtmlImageElement>() else {
            continue;
        };
        let Some(data_src) = img.get_attribute("data-src") else {
            continue;
        };
        let Some(src) = assets::resolve(base, &data_src) else {
            log::debug!("skipping image with empty data-src");
            continue;
        };

        let loaded = img.clone();
        let on_load = Closure::wrap(Box::new(move || {
            let _ = loaded.class_list().add_1("loaded");
        }) as Box<dyn FnMut()>);
        img.set_onload(Some(on_load.as_ref().unchecked_ref()));
        on_load.forget();

        img.set_src(&src);
        let _ = img.remove_attribute("data-src");
    }
}

/// Handle for a self-rescheduling animation-frame closure.
///
/// `Rc<RefCell<Option<…>>>` lets the closure be created first and then obtain
/// a reference to itself for the next `request_animation_frame` call.
pub type FrameLoop = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub fn new_frame_loop() -> FrameLoop {
    Rc::new(RefCell::new(None))
}

/// Schedule the next iteration of a frame loop.
pub fn request_frame(frame: &FrameLoop) {
    if let (Some(window), Some(cb)) = (web_sys::window(), frame.borrow().as_ref()) {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
