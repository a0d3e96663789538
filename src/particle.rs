// Simple particle struct to keep track of individual position, velocity, radius and color

use crate::color::Color;
use crate::config::FieldConfig;
use crate::field::Viewport;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64, color: Color) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
            color,
        }
    }

    // Uniformly placed inside the viewport, drifting in a random direction
    pub fn random<R: Rng>(rng: &mut R, viewport: Viewport, config: &FieldConfig) -> Particle {
        let (min_radius, max_radius) = config.radius_range();
        let max_speed = config.max_speed();
        let (saturation, lightness, alpha) = config.palette();

        let pos_x = rng.gen::<f64>() * viewport.width;
        let pos_y = rng.gen::<f64>() * viewport.height;
        let radius = rng.gen::<f64>() * (max_radius - min_radius) + min_radius;
        let vel_x = (rng.gen::<f64>() - 0.5) * 2.0 * max_speed;
        let vel_y = (rng.gen::<f64>() - 0.5) * 2.0 * max_speed;
        let color = Color::from_hsla(rng.gen::<f64>() * 360.0, saturation, lightness, alpha);

        Particle::new(pos_x, pos_y, vel_x, vel_y, radius, color)
    }

    /// Advances one frame: `pos += vel`, then flips the velocity component of
    /// any axis whose position now lies outside `0..=width` / `0..=height`.
    /// The position itself is never clamped, the flipped velocity carries the
    /// particle back in on the following frames.
    pub fn step(&mut self, viewport: Viewport) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
        if self.pos[0] < 0.0 || self.pos[0] > viewport.width {
            self.vel[0] = -self.vel[0];
        }
        if self.pos[1] < 0.0 || self.pos[1] > viewport.height {
            self.vel[1] = -self.vel[1];
        }
    }
}
