// Decorative particle backdrop for a web page: a fixed number of softly
// colored dots drifting across a full-viewport canvas and bouncing off its
// edges. Built with wasm-pack and driven from the page through
// `ParticleBackground` / `mount`.

mod animation;
mod color;
mod config;
mod error;
mod field;
mod particle;
mod surface;
mod timer;
mod utils;
mod web;

#[cfg(test)]
mod testing;

use wasm_bindgen::prelude::*;

pub use animation::{Host, ParticleLoop};
pub use color::Color;
pub use config::FieldConfig;
pub use error::SurfaceError;
pub use field::{ParticleField, Viewport};
pub use particle::Particle;
pub use surface::Surface;
pub use web::{mount, mount_with_config, CanvasHost, ParticleBackground};

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}
