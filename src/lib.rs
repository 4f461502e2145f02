//! Interactive flipbook page.
//!
//! The pure state machines (flip stacking, playback, particle and leaf
//! decorations, visualizer bar mapping) live at the crate root and compile on
//! any target, so `cargo test` on the host exercises them directly. Everything
//! that touches the browser lives in the `wasm` module and only compiles for
//! `wasm32`.

#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

pub mod assets;
pub mod book;
pub mod leaves;
pub mod particles;
pub mod playback;
pub mod rng;
pub mod visualizer;

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use crate::playback::Playback;

    pub mod audio;
    pub mod cursor;
    pub mod dom;
    pub mod flip;
    pub mod foliage;

    /// Page entry point. Each decoration wires itself independently; a missing
    /// element turns that feature into a logged no-op instead of killing the
    /// rest of the page.
    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let playback = Rc::new(RefCell::new(Playback::default()));

        audio::wire_controls(&document, &playback)?;
        flip::start(&document, &playback)?;
        cursor::start(&window, &document)?;
        foliage::spawn(&document)?;

        log::info!("flipbook ready");
        Ok(())
    }
}

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
