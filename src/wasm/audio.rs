//! Volume controls, lazy playback start and the frequency-bar loop.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{AudioContext, Document, HtmlAudioElement, HtmlElement, HtmlInputElement};

use super::dom;
use crate::playback::Playback;
use crate::visualizer::{bar_heights, BarStyle, FFT_SIZE};

const AUDIO_ID: &str = "background-music";
const SLIDER_ID: &str = "volume-slider";
const ICON_ID: &str = "volume-icon";
const BAR_SELECTOR: &str = ".sound-visualizer .bar";

pub fn audio_element(document: &Document) -> Option<HtmlAudioElement> {
    document
        .get_element_by_id(AUDIO_ID)
        .and_then(|el| el.dyn_into::<HtmlAudioElement>().ok())
}

/// Wire the slider and mute icon to the playback controller and push the
/// initial volume onto the audio element. Missing controls degrade to a
/// logged no-op.
pub fn wire_controls(
    document: &Document,
    playback: &Rc<RefCell<Playback>>,
) -> Result<(), JsValue> {
    let Some(audio) = audio_element(document) else {
        log::warn!("#{AUDIO_ID} missing; music disabled");
        return Ok(());
    };

    let slider = document
        .get_element_by_id(SLIDER_ID)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    let icon = dom::html_by_id(document, ICON_ID);

    sync_controls(&audio, slider.as_ref(), icon.as_ref(), &playback.borrow());

    if let Some(slider_el) = slider.clone() {
        let audio = audio.clone();
        let icon = icon.clone();
        let playback = playback.clone();
        let slider_for_cb = slider_el.clone();
        dom::on_event(&slider_el, "input", move |_event| {
            let volume = (slider_for_cb.value_as_number() / 100.0) as f32;
            playback.borrow_mut().set_volume(volume);
            sync_controls(&audio, None, icon.as_ref(), &playback.borrow());
        })?;
    }

    if let Some(icon_el) = icon.clone() {
        let audio = audio.clone();
        let playback = playback.clone();
        let slider = slider.clone();
        let icon = icon_el.clone();
        dom::on_event(&icon_el, "click", move |_event| {
            playback.borrow_mut().toggle_mute();
            sync_controls(&audio, slider.as_ref(), Some(&icon), &playback.borrow());
        })?;
    }

    Ok(())
}

/// Push controller state onto element volume, slider position and icon glyph.
fn sync_controls(
    audio: &HtmlAudioElement,
    slider: Option<&HtmlInputElement>,
    icon: Option<&HtmlElement>,
    playback: &Playback,
) {
    audio.set_volume(f64::from(playback.volume()));
    if let Some(slider) = slider {
        slider.set_value(&format!("{:.0}", playback.volume() * 100.0));
    }
    if let Some(icon) = icon {
        icon.set_text_content(Some(playback.icon().glyph()));
    }
}

/// First-interaction hook, called from every page click. Idempotent: playback
/// is only retried after a failure and the visualizer is built exactly once.
pub fn ensure_started(
    document: &Document,
    playback: &Rc<RefCell<Playback>>,
    audio: &HtmlAudioElement,
) {
    let actions = playback.borrow_mut().ensure_started();
    if actions.start_playback {
        try_play(audio, playback);
    }
    if actions.init_visualizer {
        if let Err(err) = init_visualizer(document, audio) {
            log::warn!("visualizer init failed: {err:?}");
        }
    }
}

/// Best-effort `play()`. A rejected promise (autoplay policy) is logged and
/// clears the playing flag so the next interaction retries.
pub fn try_play(audio: &HtmlAudioElement, playback: &Rc<RefCell<Playback>>) {
    match audio.play() {
        Ok(promise) => {
            let playback = playback.clone();
            let on_reject = Closure::wrap(Box::new(move |err: JsValue| {
                log::warn!("audio play rejected: {err:?}");
                playback.borrow_mut().start_failed();
            }) as Box<dyn FnMut(JsValue)>);
            let _ = promise.catch(&on_reject);
            on_reject.forget();
        }
        Err(err) => {
            log::warn!("audio play failed: {err:?}");
            playback.borrow_mut().start_failed();
        }
    }
}

/// One-time analyser setup plus the perpetual bar-height loop.
///
/// audio element → media source → analyser (fft 64) → destination. The loop
/// reads the byte frequency bins every frame and maps them onto however many
/// bars the page carries (modulo wraparound). There is no teardown path; the
/// loop runs for the page's lifetime.
fn init_visualizer(document: &Document, audio: &HtmlAudioElement) -> Result<(), JsValue> {
    let bars = dom::query_all_in_document(document, BAR_SELECTOR);
    if bars.is_empty() {
        log::debug!("no visualizer bars; skipping analyser setup");
        return Ok(());
    }

    let ctx = AudioContext::new()?;
    let source = ctx.create_media_element_source(audio)?;
    let analyser = ctx.create_analyser()?;
    analyser.set_fft_size(FFT_SIZE);
    source.connect_with_audio_node(&analyser)?;
    analyser.connect_with_audio_node(&ctx.destination())?;

    let mut bins = vec![0_u8; analyser.frequency_bin_count() as usize];
    let mut heights = vec![0.0_f32; bars.len()];
    let style = BarStyle::default();

    let frame = dom::new_frame_loop();
    let handle = frame.clone();
    *handle.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        analyser.get_byte_frequency_data(&mut bins);
        bar_heights(&bins, &style, &mut heights);
        for (bar, height) in bars.iter().zip(&heights) {
            let _ = bar.style().set_property("height", &format!("{height:.1}px"));
        }
        dom::request_frame(&frame);
    }) as Box<dyn FnMut()>));
    dom::request_frame(&handle);

    Ok(())
}
