#![cfg(target_arch = "wasm32")]
use planetary_core::Theme;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod host;
mod overlay;
mod render;
mod settings;

/// Everything a mounted overlay keeps alive. Dropping it removes the page
/// listeners; the driver's own registrations are cancelled by `unmount`.
struct App {
    driver: Rc<RefCell<frame::Driver>>,
    _theme: events::ThemeWatch,
    _resize: events::ResizeWatch,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("planetary-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    if APP.with(|app| app.borrow().is_some()) {
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::ensure_canvas(&document)?;
    overlay::hide(&canvas);

    let config = settings::config_from_attributes(dom::mount_attributes(&document));
    let theme = events::current_theme(&window, &document);
    log::info!(
        "[init] planet size {} trail {} theme {:?}",
        config.planet_size,
        config.trail_effect,
        theme
    );

    let driver = frame::Driver::new_shared(window.clone(), canvas, config, theme, rand::random());
    driver.borrow_mut().mount();

    let theme_watch = events::ThemeWatch::wire(&window, &document, Rc::downgrade(&driver))?;
    let resize_watch = events::ResizeWatch::wire(&window, Rc::downgrade(&driver))?;

    APP.with(|app| {
        *app.borrow_mut() = Some(App {
            driver,
            _theme: theme_watch,
            _resize: resize_watch,
        });
    });
    Ok(())
}

/// Mount the overlay again after `unmount`.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    init().map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Tear the overlay down: cancels the activation delay, pointer listener,
/// pending frames and the particle interval, and detaches page listeners.
#[wasm_bindgen]
pub fn unmount() {
    let Some(app) = APP.with(|app| app.borrow_mut().take()) else {
        return;
    };
    if let Ok(mut d) = app.driver.try_borrow_mut() {
        d.unmount();
    }
}

/// Override the theme for pages that do not use a class or `data-theme`.
#[wasm_bindgen(js_name = setTheme)]
pub fn set_theme(name: &str) -> Result<(), JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let theme = Theme::parse(name, events::prefers_dark(&window));
    APP.with(|app| match app.borrow().as_ref() {
        Some(app) => match app.driver.try_borrow_mut() {
            Ok(mut d) => {
                d.set_theme(theme);
                Ok(())
            }
            Err(_) => Err(JsValue::from_str("overlay busy")),
        },
        None => Err(JsValue::from_str("overlay not mounted")),
    })
}
