use crate::dom;
use crate::frame::Driver;
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window resize listener keeping the canvas backing store and the
/// overlay's viewport in sync. Removed on drop.
pub struct ResizeWatch {
    window: web::Window,
    closure: Closure<dyn FnMut()>,
}

impl ResizeWatch {
    pub fn wire(window: &web::Window, driver: Weak<RefCell<Driver>>) -> anyhow::Result<Self> {
        let window_for_cb = window.clone();
        let closure = Closure::wrap(Box::new(move || {
            let Some(d) = driver.upgrade() else {
                return;
            };
            if let Ok(mut d) = d.try_borrow_mut() {
                d.resize(dom::viewport_size(&window_for_cb));
            }
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            window: window.clone(),
            closure,
        })
    }
}

impl Drop for ResizeWatch {
    fn drop(&mut self) {
        _ = self
            .window
            .remove_event_listener_with_callback("resize", self.closure.as_ref().unchecked_ref());
    }
}
