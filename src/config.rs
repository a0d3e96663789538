// Tunables for the particle background. Every setter normalises its input,
// so any combination of values yields a usable field.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    particle_count: u32,
    min_radius: f64,
    max_radius: f64,
    max_speed: f64,
    saturation: f64,
    lightness: f64,
    alpha: f64,
    seed: Option<u64>,
    profile: bool,
}

impl FieldConfig {
    pub const DEFAULT_PARTICLE_COUNT: u32 = 100;
    pub const MAX_PARTICLE_COUNT: u32 = 10_000;

    pub fn particle_count(&self) -> usize {
        self.particle_count as usize
    }

    pub fn radius_range(&self) -> (f64, f64) {
        (self.min_radius, self.max_radius)
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    // (saturation, lightness, alpha) shared by every particle, only the hue varies
    pub fn palette(&self) -> (f64, f64, f64) {
        (self.saturation, self.lightness, self.alpha)
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn profile(&self) -> bool {
        self.profile
    }

    pub fn with_seed_u64(mut self, seed: u64) -> FieldConfig {
        self.seed = Some(seed);
        self
    }
}

#[wasm_bindgen]
impl FieldConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> FieldConfig {
        FieldConfig::default()
    }

    // Capped at MAX_PARTICLE_COUNT
    pub fn with_particle_count(mut self, count: u32) -> FieldConfig {
        self.particle_count = count.min(FieldConfig::MAX_PARTICLE_COUNT);
        self
    }

    pub fn with_radius_range(mut self, min: f64, max: f64) -> FieldConfig {
        let (min, max) = ordered(min, max);
        self.min_radius = min;
        self.max_radius = max;
        self
    }

    pub fn with_max_speed(mut self, speed: f64) -> FieldConfig {
        self.max_speed = non_negative(speed);
        self
    }

    pub fn with_palette(mut self, saturation: f64, lightness: f64, alpha: f64) -> FieldConfig {
        self.saturation = unit(saturation);
        self.lightness = unit(lightness);
        self.alpha = unit(alpha);
        self
    }

    // JS numbers can't carry a full u64, a u32 seed is plenty for a backdrop
    pub fn with_seed(self, seed: u32) -> FieldConfig {
        self.with_seed_u64(seed as u64)
    }

    pub fn with_profiling(mut self, enabled: bool) -> FieldConfig {
        self.profile = enabled;
        self
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: FieldConfig::DEFAULT_PARTICLE_COUNT,
            min_radius: 1.0,
            max_radius: 3.0,
            max_speed: 0.25,
            saturation: 0.7,
            lightness: 0.6,
            alpha: 0.3,
            seed: None,
            profile: false,
        }
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

fn unit(value: f64) -> f64 {
    non_negative(value).min(1.0)
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    let (a, b) = (non_negative(a), non_negative(b));
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
