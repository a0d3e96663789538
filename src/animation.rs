// Drives a ParticleField from whatever environment hosts it: the host owns the
// drawing surface, the frame scheduler and the resize notification, the loop
// decides when to use them.

use crate::config::FieldConfig;
use crate::error::SurfaceError;
use crate::field::{ParticleField, Viewport};
use crate::surface::Surface;

/// Everything the particle loop needs from its environment. In the browser
/// this is the window + canvas, in tests a mock that records calls.
pub trait Host {
    type Surface: Surface;

    /// The drawing surface, or `None` if it is (or became) unavailable.
    fn surface(&mut self) -> Option<&mut Self::Surface>;

    fn viewport(&self) -> Viewport;

    fn resize_surface(&mut self, viewport: Viewport);

    /// Arranges for the loop's `on_frame` to run on the next display refresh.
    fn request_frame(&mut self) -> Result<(), SurfaceError>;

    fn cancel_frame(&mut self);

    /// Arranges for the loop's `on_resize` to run whenever the viewport changes.
    fn listen_resize(&mut self) -> Result<(), SurfaceError>;

    fn unlisten_resize(&mut self);
}

pub struct ParticleLoop<H: Host> {
    host: H,
    field: ParticleField,
    started: bool,
    detached: bool,
}

impl<H: Host> ParticleLoop<H> {
    /// Binds to `host` without starting anything. Returns `None` when the
    /// host has no drawing surface; in that case nothing is scheduled.
    pub fn new(mut host: H, config: FieldConfig) -> Option<ParticleLoop<H>> {
        host.surface()?;
        Some(ParticleLoop {
            host,
            field: ParticleField::new(config),
            started: false,
            detached: false,
        })
    }

    /// `new` followed by `start`. Any failure leaves nothing behind.
    pub fn attach(host: H, config: FieldConfig) -> Option<ParticleLoop<H>> {
        let mut field_loop = ParticleLoop::new(host, config)?;
        match field_loop.start() {
            Ok(()) => Some(field_loop),
            Err(_) => {
                field_loop.detach();
                None
            }
        }
    }

    /// Sizes the surface, scatters the particles, subscribes to resizes and
    /// draws the first frame, which schedules the rest. Only the first call
    /// does anything, a loop never runs two frame chains.
    pub fn start(&mut self) -> Result<(), SurfaceError> {
        if self.started || self.detached {
            return Ok(());
        }
        self.started = true;
        self.on_resize();
        self.host.listen_resize()?;
        self.on_frame()
    }

    pub fn on_resize(&mut self) {
        if self.detached {
            return;
        }
        let viewport = self.host.viewport();
        self.host.resize_surface(viewport);
        self.field.regenerate(viewport);
    }

    /// Draws and steps one frame, then schedules the next. If the surface is
    /// gone or a draw call fails the loop detaches itself and hands back the
    /// error; it is never retried.
    pub fn on_frame(&mut self) -> Result<(), SurfaceError> {
        if self.detached {
            return Ok(());
        }
        let drawn = match self.host.surface() {
            Some(surface) => self.field.render_frame(surface),
            None => Err(SurfaceError::NoContext),
        };
        if let Err(err) = drawn.and_then(|_| self.host.request_frame()) {
            self.detach();
            return Err(err);
        }
        Ok(())
    }

    // Safe to call any number of times
    pub fn detach(&mut self) {
        if self.detached {
            return;
        }
        self.detached = true;
        self.host.cancel_frame();
        self.host.unlisten_resize();
    }

    pub fn is_running(&self) -> bool {
        !self.detached
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
