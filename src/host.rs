//! Browser implementation of the overlay's [`Host`] seam.
//!
//! Each registration owns its JS closure. One-shot closures cannot be dropped
//! while they run, so fired and cancelled closures are parked in `retired`
//! and released at the start of the next dispatch. A wake that arrives while
//! the driver is busy is queued in `missed` and replayed by the next dispatch.

use crate::frame::Driver;
use planetary_core::{Handle, Host, Wake};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Held only to keep the JS function alive while registered.
#[allow(dead_code)]
enum Callback {
    Tick(Closure<dyn FnMut()>),
    Pointer(Closure<dyn FnMut(web::PointerEvent)>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Timer {
    Timeout,
    Interval,
    Frame,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Timeout,
    Interval,
    Frame,
    Pointer,
}

struct Entry {
    kind: Kind,
    wake: Option<Wake>,
    js_id: Option<i32>,
    callback: Callback,
}

pub struct WebHost {
    window: web::Window,
    driver: Weak<RefCell<Driver>>,
    next: u32,
    entries: HashMap<Handle, Entry>,
    retired: Vec<Callback>,
    missed: Rc<RefCell<Vec<Handle>>>,
}

impl WebHost {
    pub fn new(window: web::Window, driver: Weak<RefCell<Driver>>) -> Self {
        Self {
            window,
            driver,
            next: 0,
            entries: HashMap::new(),
            retired: Vec::new(),
            missed: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn live(&self) -> usize {
        self.entries.len()
    }

    fn next_handle(&mut self) -> Handle {
        self.next = self.next.wrapping_add(1);
        Handle(self.next)
    }

    fn tick_closure(&self, handle: Handle) -> Closure<dyn FnMut()> {
        let driver = self.driver.clone();
        let missed = self.missed.clone();
        Closure::wrap(Box::new(move || {
            let Some(d) = driver.upgrade() else {
                return;
            };
            let Ok(mut d) = d.try_borrow_mut() else {
                log::warn!("[host] driver busy, deferring wake {:?}", handle);
                missed.borrow_mut().push(handle);
                return;
            };
            d.dispatch(handle);
        }) as Box<dyn FnMut()>)
    }

    /// Wakes that fired while the driver was borrowed, oldest first.
    pub fn take_missed(&mut self) -> Vec<Handle> {
        std::mem::take(&mut *self.missed.borrow_mut())
    }

    fn schedule(&mut self, timer: Timer, wake: Wake, delay: Duration) -> Option<Handle> {
        let handle = self.next_handle();
        let closure = self.tick_closure(handle);
        let f = closure.as_ref().unchecked_ref::<js_sys::Function>();
        let ms = delay.as_millis().min(i32::MAX as u128) as i32;
        let (kind, id) = match timer {
            Timer::Timeout => (
                Kind::Timeout,
                self.window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(f, ms),
            ),
            Timer::Interval => (
                Kind::Interval,
                self.window
                    .set_interval_with_callback_and_timeout_and_arguments_0(f, ms),
            ),
            Timer::Frame => (Kind::Frame, self.window.request_animation_frame(f)),
        };
        let js_id = match id {
            Ok(id) => id,
            Err(e) => {
                log::error!("[host] failed to schedule {:?}: {:?}", wake, e);
                return None;
            }
        };
        self.entries.insert(
            handle,
            Entry {
                kind,
                wake: Some(wake),
                js_id: Some(js_id),
                callback: Callback::Tick(closure),
            },
        );
        Some(handle)
    }

    /// Resolve a firing registration. One-shots are retired; intervals stay.
    pub fn fired(&mut self, handle: Handle) -> Option<Wake> {
        let entry = self.entries.get(&handle)?;
        let wake = entry.wake;
        if entry.kind != Kind::Interval {
            if let Some(e) = self.entries.remove(&handle) {
                self.retired.push(e.callback);
            }
        }
        wake
    }

    /// Release closures parked by earlier dispatches.
    pub fn release_retired(&mut self) {
        self.retired.clear();
    }
}

impl Host for WebHost {
    fn set_timeout(&mut self, wake: Wake, delay: Duration) -> Option<Handle> {
        self.schedule(Timer::Timeout, wake, delay)
    }

    fn set_interval(&mut self, wake: Wake, period: Duration) -> Option<Handle> {
        self.schedule(Timer::Interval, wake, period)
    }

    fn request_frame(&mut self, wake: Wake) -> Option<Handle> {
        self.schedule(Timer::Frame, wake, Duration::ZERO)
    }

    fn subscribe_pointer(&mut self) -> Option<Handle> {
        let handle = self.next_handle();
        let driver = self.driver.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let Some(d) = driver.upgrade() else {
                return;
            };
            if let Ok(mut d) = d.try_borrow_mut() {
                d.pointer_move(ev.client_x() as f32, ev.client_y() as f32);
            }
        }) as Box<dyn FnMut(_)>);
        if let Err(e) = self
            .window
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())
        {
            log::error!("[host] failed to add pointermove listener: {:?}", e);
            return None;
        }
        self.entries.insert(
            handle,
            Entry {
                kind: Kind::Pointer,
                wake: None,
                js_id: None,
                callback: Callback::Pointer(closure),
            },
        );
        Some(handle)
    }

    fn cancel(&mut self, handle: Handle) {
        let Some(entry) = self.entries.remove(&handle) else {
            return;
        };
        match (entry.kind, entry.js_id) {
            (Kind::Timeout, Some(id)) => self.window.clear_timeout_with_handle(id),
            (Kind::Interval, Some(id)) => self.window.clear_interval_with_handle(id),
            (Kind::Frame, Some(id)) => {
                _ = self.window.cancel_animation_frame(id);
            }
            (Kind::Pointer, _) => {
                if let Callback::Pointer(c) = &entry.callback {
                    _ = self.window.remove_event_listener_with_callback(
                        "pointermove",
                        c.as_ref().unchecked_ref(),
                    );
                }
            }
            _ => {}
        }
        self.retired.push(entry.callback);
    }
}
