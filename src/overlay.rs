use crate::constants::HIDDEN_CLASS;
use web_sys as web;

// The canvas stays hidden until the first pointer sample is accepted.

#[inline]
pub fn show(canvas: &web::HtmlCanvasElement) {
    _ = canvas.class_list().remove_1(HIDDEN_CLASS);
    _ = canvas.style().set_property("display", "block");
}

#[inline]
pub fn hide(canvas: &web::HtmlCanvasElement) {
    _ = canvas.class_list().add_1(HIDDEN_CLASS);
    _ = canvas.style().set_property("display", "none");
}

#[inline]
pub fn is_hidden(canvas: &web::HtmlCanvasElement) -> bool {
    if canvas.class_list().contains(HIDDEN_CLASS) {
        return true;
    }
    canvas
        .style()
        .get_property_value("display")
        .map(|s| s == "none")
        .unwrap_or(false)
}

/// Match the canvas visibility to the overlay's.
#[inline]
pub fn sync(canvas: &web::HtmlCanvasElement, visible: bool) {
    match (visible, is_hidden(canvas)) {
        (true, true) => show(canvas),
        (false, false) => hide(canvas),
        _ => {}
    }
}
