#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use flipbook_wasm::playback::Playback;
use flipbook_wasm::wasm::{dom, flip};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn lazy_load_resolves_data_src() {
    let doc = document();
    let page: web_sys::HtmlElement = doc.create_element("div").unwrap().unchecked_into();
    let img: web_sys::HtmlImageElement = doc.create_element("img").unwrap().unchecked_into();
    img.set_attribute("data-src", "/images/p1.webp").unwrap();
    page.append_child(&img).unwrap();
    doc.body().unwrap().append_child(&page).unwrap();

    dom::lazy_load_page(&page, "/book/");

    assert!(img.src().ends_with("/book/images/p1.webp"), "src = {}", img.src());
    assert!(img.get_attribute("data-src").is_none());

    page.remove();
}

#[wasm_bindgen_test]
fn clicking_a_page_flips_it() {
    let doc = document();
    let body = doc.body().unwrap();

    let wrapper: web_sys::HtmlElement = doc.create_element("div").unwrap().unchecked_into();
    wrapper.set_id("bookWrapper");
    wrapper.set_class_name("book-wrapper");
    for _ in 0..3 {
        let page = doc.create_element("div").unwrap();
        page.set_class_name("page");
        wrapper.append_child(&page).unwrap();
    }
    body.append_child(&wrapper).unwrap();

    let playback = Rc::new(RefCell::new(Playback::default()));
    flip::start(&doc, &playback).unwrap();

    let pages = dom::query_all_in_document(&doc, ".page");
    assert_eq!(pages.len(), 3);

    // Initial stack: reading order, cover alignment.
    assert_eq!(pages[0].style().get_property_value("z-index").unwrap(), "3");
    assert_eq!(wrapper.class_name(), "book-wrapper align-single-right");

    let click = web_sys::Event::new("click").unwrap();
    pages[0].dispatch_event(&click).unwrap();

    assert!(pages[0].class_list().contains("flipped"));
    assert_eq!(pages[0].style().get_property_value("z-index").unwrap(), "1");
    assert_eq!(pages[1].style().get_property_value("z-index").unwrap(), "3");
    assert_eq!(wrapper.class_name(), "book-wrapper");

    wrapper.remove();
}
