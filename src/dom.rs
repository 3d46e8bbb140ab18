use crate::constants::*;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// CSS-pixel size of the layout viewport.
pub fn viewport_size(window: &web::Window) -> Vec2 {
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
    Vec2::new(w as f32, h as f32)
}

/// Reuse `#planetary-canvas` if the page ships one, otherwise append a
/// fixed full-viewport canvas to the body. The canvas starts hidden.
pub fn ensure_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    if let Some(el) = document.get_element_by_id(CANVAS_ID) {
        return el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("#{CANVAS_ID} is not a canvas: {:?}", e));
    }
    let el = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    el.set_id(CANVAS_ID);
    el.set_attribute("style", CANVAS_STYLE)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let canvas: web::HtmlCanvasElement = el
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    _ = canvas.style().set_property("z-index", CANVAS_Z_INDEX);
    _ = canvas.class_list().add_1(HIDDEN_CLASS);
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    body.append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

/// Match the canvas backing store to its CSS size times devicePixelRatio.
/// Returns the ratio so drawing can scale back to CSS pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> f64 {
    let Some(w) = web::window() else {
        return 1.0;
    };
    let dpr = w.device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    dpr
}

/// Attribute reader for the mount element, if the page has one.
pub fn mount_attributes(document: &web::Document) -> impl Fn(&str) -> Option<String> {
    let mount = document.get_element_by_id(MOUNT_ID);
    move |name: &str| mount.as_ref().and_then(|el| el.get_attribute(name))
}
