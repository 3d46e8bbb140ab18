//! Renderer-independent description of one overlay frame.

use crate::theme::VisualMode;
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum Element<'a> {
    TrailDot {
        center: Vec2,
        diameter: f32,
        opacity: f32,
        color: &'a str,
    },
    Star {
        position: Vec2,
        size: f32,
        opacity: f32,
    },
    Glow {
        center: Vec2,
        radius: f32,
        opacity: f32,
        color: &'a str,
    },
    Ring {
        center: Vec2,
        radii: Vec2,
        rotation: f32,
        opacity: f32,
        color: &'a str,
    },
    Moon {
        center: Vec2,
        radius: f32,
        opacity: f32,
        color: &'a str,
    },
    Planet {
        center: Vec2,
        radius: f32,
        rotation: f32,
        color: &'a str,
    },
    BlackHole {
        center: Vec2,
        radius: f32,
        rim_color: &'a str,
    },
    Particle {
        center: Vec2,
        size: f32,
        opacity: f32,
        color: &'a str,
    },
}

impl Element<'_> {
    /// Variant this element belongs to; `None` for shared decorations.
    pub fn variant(&self) -> Option<VisualMode> {
        match self {
            Element::Ring { .. } | Element::Moon { .. } | Element::Planet { .. } => {
                Some(VisualMode::OrbitingMoons)
            }
            Element::Star { .. } | Element::Particle { .. } | Element::BlackHole { .. } => {
                Some(VisualMode::Gravitational)
            }
            Element::TrailDot { .. } | Element::Glow { .. } => None,
        }
    }
}

/// Elements in back-to-front draw order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene<'a> {
    pub elements: Vec<Element<'a>>,
    /// Variant shown this frame, `None` while the overlay is hidden.
    pub mode: Option<VisualMode>,
    /// Scale applied to the whole variant by an in-flight mode switch.
    pub variant_scale: f32,
}

impl Scene<'_> {
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn count_variant(&self, mode: VisualMode) -> usize {
        self.elements
            .iter()
            .filter(|e| e.variant() == Some(mode))
            .count()
    }

    pub fn particle_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, Element::Particle { .. }))
            .count()
    }
}
