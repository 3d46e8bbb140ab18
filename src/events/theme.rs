//! Theme detection for the embedding page.
//!
//! The page signals its theme either with a `dark`/`light` class or a
//! `data-theme` attribute on `<html>`; anything else follows the OS
//! preference. Changes are picked up with a MutationObserver and a
//! `prefers-color-scheme` listener.

use crate::constants::*;
use crate::frame::Driver;
use planetary_core::Theme;
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn prefers_dark(window: &web::Window) -> bool {
    window
        .match_media(PREFERS_DARK_QUERY)
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

pub fn current_theme(window: &web::Window, document: &web::Document) -> Theme {
    let prefers_dark = prefers_dark(window);
    let Some(root) = document.document_element() else {
        return Theme::System { prefers_dark };
    };
    if let Some(attr) = root.get_attribute(THEME_ATTR) {
        return Theme::parse(&attr, prefers_dark);
    }
    let classes = root.class_list();
    if classes.contains(DARK_CLASS) {
        Theme::Dark
    } else if classes.contains(LIGHT_CLASS) {
        Theme::Light
    } else {
        Theme::System { prefers_dark }
    }
}

pub struct ThemeWatch {
    observer: web::MutationObserver,
    _on_mutation: Closure<dyn FnMut(js_sys::Array, web::MutationObserver)>,
    media: Option<web::MediaQueryList>,
    on_media: Closure<dyn FnMut()>,
}

impl ThemeWatch {
    pub fn wire(
        window: &web::Window,
        document: &web::Document,
        driver: Weak<RefCell<Driver>>,
    ) -> anyhow::Result<Self> {
        let refresh = {
            let window = window.clone();
            let document = document.clone();
            move || {
                let Some(d) = driver.upgrade() else {
                    return;
                };
                let theme = current_theme(&window, &document);
                if let Ok(mut d) = d.try_borrow_mut() {
                    d.set_theme(theme);
                }
            }
        };

        let refresh_on_mutation = refresh.clone();
        let on_mutation = Closure::wrap(Box::new(
            move |_records: js_sys::Array, _observer: web::MutationObserver| {
                refresh_on_mutation();
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::MutationObserver)>);
        let observer = web::MutationObserver::new(on_mutation.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        if let Some(root) = document.document_element() {
            let init = web::MutationObserverInit::new();
            init.set_attributes(true);
            let filter = js_sys::Array::of2(&"class".into(), &THEME_ATTR.into());
            init.set_attribute_filter(&filter);
            observer
                .observe_with_options(&root, &init)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        }

        let on_media = Closure::wrap(Box::new(refresh) as Box<dyn FnMut()>);
        let media = window.match_media(PREFERS_DARK_QUERY).ok().flatten();
        if let Some(m) = &media {
            _ = m.add_event_listener_with_callback("change", on_media.as_ref().unchecked_ref());
        }

        Ok(Self {
            observer,
            _on_mutation: on_mutation,
            media,
            on_media,
        })
    }
}

impl Drop for ThemeWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
        if let Some(m) = &self.media {
            _ = m.remove_event_listener_with_callback(
                "change",
                self.on_media.as_ref().unchecked_ref(),
            );
        }
    }
}
