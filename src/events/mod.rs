pub mod resize;
pub mod theme;

pub use resize::ResizeWatch;
pub use theme::{current_theme, prefers_dark, ThemeWatch};
