//! Canvas2D drawing of a [`Scene`].

use crate::constants::*;
use glam::Vec2;
use planetary_core::orbits::SURFACE_SPOTS;
use planetary_core::{Element, Scene};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct Renderer {
    ctx: web::CanvasRenderingContext2d,
}

impl Renderer {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }

    pub fn clear(&self, canvas: &web::HtmlCanvasElement) {
        _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx
            .clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    }

    pub fn draw(
        &self,
        canvas: &web::HtmlCanvasElement,
        dpr: f64,
        scene: &Scene<'_>,
    ) -> Result<(), JsValue> {
        self.clear(canvas);
        self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
        for el in &scene.elements {
            self.ctx.save();
            let res = self.element(el);
            self.ctx.restore();
            res?;
        }
        Ok(())
    }

    fn element(&self, el: &Element<'_>) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match *el {
            Element::TrailDot {
                center,
                diameter,
                opacity,
                color,
            } => self.disc(center, diameter / 2.0, opacity, color),
            Element::Star {
                position,
                size,
                opacity,
            } => self.disc(position, size / 2.0, opacity, STAR_COLOR),
            Element::Particle {
                center,
                size,
                opacity,
                color,
            } => self.disc(center, size / 2.0, opacity, color),
            Element::Moon {
                center,
                radius,
                opacity,
                color,
            } => self.disc(center, radius, opacity, color),
            Element::Glow {
                center,
                radius,
                opacity,
                color,
            } => {
                if radius <= 0.0 {
                    return Ok(());
                }
                let (x, y, r) = (center.x as f64, center.y as f64, radius as f64);
                let g = ctx.create_radial_gradient(x, y, 0.0, x, y, r)?;
                g.add_color_stop(0.0, color)?;
                g.add_color_stop(1.0, TRANSPARENT)?;
                ctx.set_global_alpha(opacity.clamp(0.0, 1.0) as f64 * 0.25);
                ctx.set_fill_style_canvas_gradient(&g);
                ctx.begin_path();
                ctx.arc(x, y, r, 0.0, TAU)?;
                ctx.fill();
                Ok(())
            }
            Element::Ring {
                center,
                radii,
                rotation,
                opacity,
                color,
            } => {
                if radii.x <= 0.0 || radii.y <= 0.0 {
                    return Ok(());
                }
                ctx.set_global_alpha(opacity.clamp(0.0, 1.0) as f64);
                ctx.set_stroke_style_str(color);
                ctx.set_line_width(RING_LINE_WIDTH);
                ctx.begin_path();
                ctx.ellipse(
                    center.x as f64,
                    center.y as f64,
                    radii.x as f64,
                    radii.y as f64,
                    rotation as f64,
                    0.0,
                    TAU,
                )?;
                ctx.stroke();
                Ok(())
            }
            Element::Planet {
                center,
                radius,
                rotation,
                color,
            } => {
                self.disc(center, radius, 1.0, color)?;
                if radius <= 0.0 {
                    return Ok(());
                }
                ctx.translate(center.x as f64, center.y as f64)?;
                ctx.rotate(rotation as f64)?;
                let size = radius * 2.0;
                for (dx, dy, r, alpha) in SURFACE_SPOTS {
                    self.disc(Vec2::new(dx, dy) * size, r * size / 2.0, alpha, SPOT_COLOR)?;
                }
                Ok(())
            }
            Element::BlackHole {
                center,
                radius,
                rim_color,
            } => {
                if radius <= 0.0 {
                    return Ok(());
                }
                ctx.set_shadow_blur(RIM_SHADOW_BLUR);
                ctx.set_shadow_color(rim_color);
                self.disc(center, radius, 1.0, BLACK_HOLE_CORE)?;
                ctx.set_stroke_style_str(rim_color);
                ctx.set_line_width(RIM_LINE_WIDTH);
                ctx.stroke();
                Ok(())
            }
        }
    }

    /// Filled circle; leaves the path open so callers can stroke it too.
    fn disc(&self, center: Vec2, radius: f32, opacity: f32, color: &str) -> Result<(), JsValue> {
        if radius <= 0.0 || opacity <= 0.0 {
            return Ok(());
        }
        let ctx = &self.ctx;
        ctx.set_global_alpha(opacity.min(1.0) as f64);
        ctx.set_fill_style_str(color);
        ctx.begin_path();
        ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)?;
        ctx.fill();
        Ok(())
    }
}
