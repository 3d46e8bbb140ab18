// Host-side tests for reading the overlay config from mount attributes.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod settings {
    include!("../src/settings.rs");
}

use constants::*;
use planetary_core::{OverlayConfig, DEFAULT_PLANET_SIZE, SINGLE_PLANET_SIZE};
use settings::*;
use std::collections::HashMap;

fn attrs<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    let map: HashMap<&str, &str> = pairs.iter().copied().collect();
    move |name: &str| map.get(name).map(|v| v.to_string())
}

#[test]
fn flags_accept_common_spellings() {
    for on in ["", "true", "TRUE", "1", "yes", " on "] {
        assert_eq!(parse_flag(on), Some(true), "{on:?}");
    }
    for off in ["false", "0", "No", "off"] {
        assert_eq!(parse_flag(off), Some(false), "{off:?}");
    }
    assert_eq!(parse_flag("maybe"), None);
}

#[test]
fn no_attributes_gives_the_default_config() {
    assert_eq!(config_from_attributes(attrs(&[])), OverlayConfig::default());
}

#[test]
fn single_planet_preset() {
    let cfg = config_from_attributes(attrs(&[(ATTR_PRESET, PRESET_SINGLE_PLANET)]));
    assert_eq!(cfg, OverlayConfig::single_planet());
    assert_eq!(cfg.planet_size, SINGLE_PLANET_SIZE);
    assert!(cfg.moons.is_empty());
}

#[test]
fn unknown_preset_falls_back_to_default() {
    let cfg = config_from_attributes(attrs(&[(ATTR_PRESET, "galaxy")]));
    assert_eq!(cfg, OverlayConfig::default());
}

#[test]
fn attributes_override_the_preset() {
    let cfg = config_from_attributes(attrs(&[
        (ATTR_PRESET, PRESET_SINGLE_PLANET),
        (ATTR_PLANET_SIZE, " 64 "),
        (ATTR_PLANET_COLOR, " #ff0000 "),
        (ATTR_RINGS, "false"),
        (ATTR_TRAIL, ""),
    ]));
    assert_eq!(cfg.planet_size, 64.0);
    assert_eq!(cfg.planet_color, "#ff0000");
    assert!(!cfg.show_rings);
    assert!(cfg.trail_effect);
    assert!(cfg.moons.is_empty());
}

#[test]
fn unparsable_values_keep_defaults() {
    let cfg = config_from_attributes(attrs(&[
        (ATTR_PLANET_SIZE, "huge"),
        (ATTR_PLANET_COLOR, "   "),
        (ATTR_RINGS, "maybe"),
    ]));
    assert_eq!(cfg, OverlayConfig::default());
}

#[test]
fn invalid_config_falls_back_to_default() {
    let cfg = config_from_attributes(attrs(&[
        (ATTR_PLANET_SIZE, "-5"),
        (ATTR_TRAIL, "true"),
    ]));
    assert_eq!(cfg.planet_size, DEFAULT_PLANET_SIZE);
    assert!(!cfg.trail_effect);
}
