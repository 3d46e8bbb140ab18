// Overlay configuration read from `data-*` attributes on the mount element.
//
// Pure string handling so it can be exercised on the host; the DOM lookup
// is passed in as a closure.

use crate::constants::*;
use planetary_core::OverlayConfig;

pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Build the overlay config from attribute lookups. Unparsable values keep
/// their defaults; an invalid result falls back to the default config.
pub fn config_from_attributes(attr: impl Fn(&str) -> Option<String>) -> OverlayConfig {
    let mut cfg = match attr(ATTR_PRESET).as_deref().map(str::trim) {
        Some(PRESET_SINGLE_PLANET) => OverlayConfig::single_planet(),
        _ => OverlayConfig::default(),
    };

    if let Some(raw) = attr(ATTR_PLANET_SIZE) {
        match raw.trim().parse::<f32>() {
            Ok(size) => cfg = cfg.with_planet_size(size),
            Err(_) => log::warn!("[config] ignoring {}={:?}", ATTR_PLANET_SIZE, raw),
        }
    }
    if let Some(raw) = attr(ATTR_PLANET_COLOR) {
        let color = raw.trim();
        if !color.is_empty() {
            cfg = cfg.with_planet_color(color);
        }
    }
    for (name, apply) in [
        (ATTR_RINGS, OverlayConfig::with_rings as fn(OverlayConfig, bool) -> OverlayConfig),
        (ATTR_TRAIL, OverlayConfig::with_trail),
    ] {
        if let Some(raw) = attr(name) {
            match parse_flag(&raw) {
                Some(on) => cfg = apply(cfg, on),
                None => log::warn!("[config] ignoring {}={:?}", name, raw),
            }
        }
    }

    match cfg.validate() {
        Ok(()) => cfg,
        Err(e) => {
            log::warn!("[config] {e}; using defaults");
            OverlayConfig::default()
        }
    }
}
