//! Wires the page stack to the flipbook state machine.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement};

use super::{audio, dom};
use crate::book::{Alignment, AudioCue, FlipBook};
use crate::playback::Playback;

const PAGE_SELECTOR: &str = ".page";
const WRAPPER_ID: &str = "bookWrapper";
const FLIPPED_CLASS: &str = "flipped";

pub fn start(document: &Document, playback: &Rc<RefCell<Playback>>) -> Result<(), JsValue> {
    let pages = dom::query_all_in_document(document, PAGE_SELECTOR);
    if pages.is_empty() {
        log::warn!("no {PAGE_SELECTOR} elements; flipbook disabled");
        return Ok(());
    }

    let base = dom::base_url(document);

    // Load the opening spread up front so the first flip has no pop-in.
    for page in pages.iter().take(2) {
        dom::lazy_load_page(page, &base);
    }

    let book = Rc::new(RefCell::new(FlipBook::new(pages.len())));
    let wrapper = dom::html_by_id(document, WRAPPER_ID);
    {
        let book = book.borrow();
        apply_z_indexes(&pages, &book.z_indexes());
        apply_alignment(wrapper.as_ref(), book.alignment());
    }

    let audio_el = audio::audio_element(document);
    let pages = Rc::new(pages);

    for index in 0..pages.len() {
        let book = book.clone();
        let pages = pages.clone();
        let playback = playback.clone();
        let audio_el = audio_el.clone();
        let wrapper = wrapper.clone();
        let base = base.clone();
        let document = document.clone();
        let clicked = pages[index].clone();
        let target = clicked.clone();

        dom::on_event(&target, "click", move |_event| {
            // First interaction starts the music and the visualizer.
            if let Some(audio) = audio_el.as_ref() {
                audio::ensure_started(&document, &playback, audio);
            }

            let Some(outcome) = book.borrow_mut().on_page_click(index) else {
                return;
            };

            for &i in &outcome.preload {
                if let Some(page) = pages.get(i) {
                    dom::lazy_load_page(page, &base);
                }
            }

            let class_list = clicked.class_list();
            let _ = if outcome.flipped {
                class_list.add_1(FLIPPED_CLASS)
            } else {
                class_list.remove_1(FLIPPED_CLASS)
            };

            apply_z_indexes(&pages, &outcome.z_indexes);
            apply_alignment(wrapper.as_ref(), outcome.alignment);

            if let (Some(audio), Some(cue)) = (audio_el.as_ref(), outcome.audio) {
                match cue {
                    AudioCue::Pause => {
                        let _ = audio.pause();
                    }
                    AudioCue::Resume => audio::try_play(audio, &playback),
                }
            }
        })?;
    }

    Ok(())
}

fn apply_z_indexes(pages: &[HtmlElement], z_indexes: &[u32]) {
    for (page, z) in pages.iter().zip(z_indexes) {
        let _ = page.style().set_property("z-index", &z.to_string());
    }
}

fn apply_alignment(wrapper: Option<&HtmlElement>, alignment: Alignment) {
    if let Some(wrapper) = wrapper {
        wrapper.set_class_name(alignment.css_class());
    }
}
