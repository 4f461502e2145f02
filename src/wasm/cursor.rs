//! Heart cursor trail on the sparkle canvas.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, MouseEvent, Window};

use super::dom;
use crate::particles::{
    Particle, ParticleField, HEART_CENTER, HEART_CURVES, HEART_DRAW_DIVISOR, HEART_START,
};

const CANVAS_ID: &str = "sparkle-canvas";

pub fn start(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(canvas) = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
    else {
        log::warn!("#{CANVAS_ID} missing; cursor trail disabled");
        return Ok(());
    };

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("2d context unavailable")?
        .dyn_into()?;

    sync_size(&canvas);

    // Keep the backing store matched to the viewport.
    let resize_canvas = canvas.clone();
    dom::on_event(window, "resize", move |_event| {
        sync_size(&resize_canvas);
    })?;

    let field = Rc::new(RefCell::new(ParticleField::new(js_sys::Date::now() as u64)));

    // Every pointer move drops a small burst at the cursor.
    let spawn_field = field.clone();
    dom::on_event(window, "mousemove", move |event| {
        let event: MouseEvent = event.unchecked_into();
        spawn_field
            .borrow_mut()
            .spawn_burst(event.client_x() as f32, event.client_y() as f32);
    })?;

    // Render loop: clear, advance, draw. Runs for the page's lifetime even
    // while the field is empty.
    let frame = dom::new_frame_loop();
    let handle = frame.clone();
    *handle.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
        let mut field = field.borrow_mut();
        field.tick();
        for particle in field.iter() {
            draw_heart(&ctx, particle);
        }
        drop(field);
        dom::request_frame(&frame);
    }) as Box<dyn FnMut()>));
    dom::request_frame(&handle);

    Ok(())
}

fn sync_size(canvas: &HtmlCanvasElement) {
    if let Some(window) = web_sys::window() {
        let w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        canvas.set_width(w as u32);
        canvas.set_height(h as u32);
    }
}

/// Replay the fixed heart outline scaled, rotated and translated to the
/// particle. The path is authored around `HEART_CENTER`, so drawing shifts by
/// its negation before filling.
fn draw_heart(ctx: &CanvasRenderingContext2d, particle: &Particle) {
    ctx.save();
    let _ = ctx.translate(f64::from(particle.x), f64::from(particle.y));
    let _ = ctx.rotate(f64::from(particle.rotation));
    let scale = f64::from(particle.size) / HEART_DRAW_DIVISOR;
    let _ = ctx.scale(scale, scale);
    let _ = ctx.translate(-HEART_CENTER.0, -HEART_CENTER.1);

    ctx.set_fill_style_str(&particle.css_color());
    ctx.begin_path();
    ctx.move_to(HEART_START.0, HEART_START.1);
    for &(c1x, c1y, c2x, c2y, x, y) in &HEART_CURVES {
        ctx.bezier_curve_to(c1x, c1y, c2x, c2y, x, y);
    }
    ctx.fill();
    ctx.restore();
}
