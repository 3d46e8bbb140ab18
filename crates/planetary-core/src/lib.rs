pub mod config;
pub mod constants;
pub mod easing;
pub mod host;
pub mod orbits;
pub mod overlay;
pub mod particles;
pub mod sampler;
pub mod scene;
pub mod spring;
pub mod starfield;
pub mod theme;
pub mod trail;
pub mod transition;

pub use config::*;
pub use constants::*;
pub use host::*;
pub use overlay::*;
pub use particles::*;
pub use sampler::*;
pub use scene::*;
pub use spring::*;
pub use starfield::*;
pub use theme::*;
pub use trail::*;
pub use transition::*;
