//! Falling-leaf decoration: one-off DOM spawn, animated purely by CSS.

use wasm_bindgen::JsValue;
use web_sys::Document;

use super::dom;
use crate::leaves::{scatter, LEAF_COUNT};
use crate::rng::Lcg;

const CONTAINER_ID: &str = "falling-leaves-container";

pub fn spawn(document: &Document) -> Result<(), JsValue> {
    let Some(container) = dom::html_by_id(document, CONTAINER_ID) else {
        log::debug!("#{CONTAINER_ID} missing; leaves disabled");
        return Ok(());
    };

    let mut rng = Lcg::new(js_sys::Date::now() as u64);
    for leaf in scatter(LEAF_COUNT, &mut rng) {
        let el = document.create_element("div")?;
        el.set_class_name("leaf");
        el.set_attribute(
            "style",
            &format!(
                "left: {:.1}vw; animation-duration: {:.1}s; animation-delay: -{:.1}s; \
                 opacity: {:.2}; width: {:.0}px; height: {:.0}px; background-color: {};",
                leaf.left_vw,
                leaf.duration_s,
                leaf.delay_s,
                leaf.opacity,
                leaf.size_px,
                leaf.size_px,
                leaf.css_background(),
            ),
        )?;
        container.append_child(&el)?;
    }

    Ok(())
}
