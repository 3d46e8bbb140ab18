use crate::dom;
use crate::host::WebHost;
use crate::overlay;
use crate::render::Renderer;
use glam::Vec2;
use instant::Instant;
use planetary_core::{Handle, Overlay, OverlayConfig, Theme, Wake};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

/// Owns the overlay, its browser host and the renderer. Every JS callback
/// funnels through here with the current time since mount.
pub struct Driver {
    pub overlay: Overlay,
    pub host: WebHost,
    canvas: web::HtmlCanvasElement,
    renderer: Option<Renderer>,
    dpr: f64,
    started: Instant,
}

impl Driver {
    pub fn new_shared(
        window: web::Window,
        canvas: web::HtmlCanvasElement,
        config: OverlayConfig,
        theme: Theme,
        seed: u64,
    ) -> Rc<RefCell<Self>> {
        let viewport = dom::viewport_size(&window);
        let dpr = dom::sync_canvas_backing_size(&canvas);
        let renderer = match Renderer::new(&canvas) {
            Ok(r) => Some(r),
            Err(e) => {
                log::error!("canvas 2d init error: {:?}", e);
                None
            }
        };
        Rc::new_cyclic(|weak| {
            RefCell::new(Self {
                overlay: Overlay::new(config, theme, viewport, seed),
                host: WebHost::new(window, weak.clone()),
                canvas,
                renderer,
                dpr,
                started: Instant::now(),
            })
        })
    }

    #[inline]
    fn now(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn mount(&mut self) {
        self.overlay.mount(&mut self.host);
    }

    pub fn unmount(&mut self) {
        self.overlay.unmount(&mut self.host);
        overlay::hide(&self.canvas);
        if let Some(r) = &self.renderer {
            r.clear(&self.canvas);
        }
        log::debug!("[driver] host registrations left: {}", self.host.live());
    }

    pub fn dispatch(&mut self, handle: Handle) {
        self.host.release_retired();
        self.replay_missed();
        self.run(handle);
    }

    fn replay_missed(&mut self) {
        for handle in self.host.take_missed() {
            self.run(handle);
        }
    }

    fn run(&mut self, handle: Handle) {
        let Some(wake) = self.host.fired(handle) else {
            return;
        };
        let now = self.now();
        self.overlay.on_wake(&mut self.host, wake, now);
        if wake == Wake::RenderFrame {
            self.draw(now);
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.replay_missed();
        let now = self.now();
        self.overlay
            .on_pointer_move(&mut self.host, Vec2::new(x, y), now);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if theme == self.overlay.state.theme() {
            return;
        }
        let now = self.now();
        self.overlay.set_theme(&mut self.host, theme, now);
    }

    pub fn resize(&mut self, viewport: Vec2) {
        self.dpr = dom::sync_canvas_backing_size(&self.canvas);
        self.overlay.set_viewport(viewport);
    }

    fn draw(&mut self, now: Duration) {
        let visible = self.overlay.state.is_visible();
        overlay::sync(&self.canvas, visible);
        let Some(r) = &self.renderer else {
            return;
        };
        let scene = self.overlay.state.scene(now);
        if let Err(e) = r.draw(&self.canvas, self.dpr, &scene) {
            log::error!("render error: {:?}", e);
        }
    }
}
