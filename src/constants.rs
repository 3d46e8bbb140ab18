// DOM wiring and drawing constants for the web front-end.
// Kept free of `web_sys` so host-side tests can `include!` this file.

// Mount point and canvas
pub const MOUNT_ID: &str = "planetary-overlay";
pub const CANVAS_ID: &str = "planetary-canvas";
pub const CANVAS_Z_INDEX: &str = "50";
pub const CANVAS_STYLE: &str =
    "position:fixed;inset:0;width:100vw;height:100vh;pointer-events:none;overflow:hidden;";
pub const HIDDEN_CLASS: &str = "hidden";

// Configuration attributes on the mount element
pub const ATTR_PRESET: &str = "data-preset";
pub const ATTR_PLANET_SIZE: &str = "data-planet-size";
pub const ATTR_PLANET_COLOR: &str = "data-planet-color";
pub const ATTR_RINGS: &str = "data-rings";
pub const ATTR_TRAIL: &str = "data-trail";
pub const PRESET_SINGLE_PLANET: &str = "single-planet";

// Theme detection
pub const DARK_CLASS: &str = "dark";
pub const LIGHT_CLASS: &str = "light";
pub const THEME_ATTR: &str = "data-theme";
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

// Drawing
pub const RING_LINE_WIDTH: f64 = 2.0;
pub const RIM_LINE_WIDTH: f64 = 2.0;
pub const RIM_SHADOW_BLUR: f64 = 18.0;
pub const BLACK_HOLE_CORE: &str = "#020617";
pub const STAR_COLOR: &str = "#f8fafc";
pub const SPOT_COLOR: &str = "#ffffff";
pub const TRANSPARENT: &str = "rgba(0,0,0,0)";
