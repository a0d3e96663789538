// In-memory stand-ins for the browser, used by the unit tests

use crate::animation::Host;
use crate::color::Color;
use crate::error::SurfaceError;
use crate::field::Viewport;
use crate::surface::Surface;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear(Viewport),
    Circle([f64; 2], f64, Color),
}

#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
    fail_after: Option<usize>,
}

impl RecordingSurface {
    // Accepts `calls` draw calls, then reports the context as lost
    pub fn failing_after(calls: usize) -> RecordingSurface {
        RecordingSurface {
            calls: Vec::new(),
            fail_after: Some(calls),
        }
    }

    fn record(&mut self, call: DrawCall) -> Result<(), SurfaceError> {
        match self.fail_after {
            Some(limit) if self.calls.len() >= limit => Err(SurfaceError::NoContext),
            _ => {
                self.calls.push(call);
                Ok(())
            }
        }
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, viewport: Viewport) -> Result<(), SurfaceError> {
        self.record(DrawCall::Clear(viewport))
    }

    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: Color) -> Result<(), SurfaceError> {
        self.record(DrawCall::Circle(center, radius, color))
    }
}

// Counts every interaction so tests can check what the loop asked the host to do.
// `fire_frame` / `fire_resize` play the part of the browser's event dispatch: a
// callback only runs if it is still scheduled / registered.
pub struct MockHost {
    pub surface: Option<RecordingSurface>,
    pub viewport: Viewport,
    pub surface_size: Viewport,
    pub frame_pending: bool,
    pub frames_requested: usize,
    pub frames_cancelled: usize,
    pub resize_listening: bool,
    pub listen_calls: usize,
    pub unlisten_calls: usize,
    pub fail_listen: bool,
    // Shared copies of the request/listen counts that outlive the host, for
    // when the host is consumed and never handed back
    requests: Rc<Cell<usize>>,
    listens: Rc<Cell<usize>>,
}

impl MockHost {
    pub fn new(width: f64, height: f64) -> MockHost {
        MockHost {
            surface: Some(RecordingSurface::default()),
            viewport: Viewport::new(width, height),
            surface_size: Viewport::default(),
            frame_pending: false,
            frames_requested: 0,
            frames_cancelled: 0,
            resize_listening: false,
            listen_calls: 0,
            unlisten_calls: 0,
            fail_listen: false,
            requests: Rc::new(Cell::new(0)),
            listens: Rc::new(Cell::new(0)),
        }
    }

    pub fn request_counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.requests)
    }

    pub fn listen_counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.listens)
    }

    pub fn without_surface(width: f64, height: f64) -> MockHost {
        MockHost {
            surface: None,
            ..MockHost::new(width, height)
        }
    }
}

impl Host for MockHost {
    type Surface = RecordingSurface;

    fn surface(&mut self) -> Option<&mut RecordingSurface> {
        self.surface.as_mut()
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize_surface(&mut self, viewport: Viewport) {
        self.surface_size = viewport;
    }

    fn request_frame(&mut self) -> Result<(), SurfaceError> {
        self.frames_requested += 1;
        self.requests.set(self.requests.get() + 1);
        self.frame_pending = true;
        Ok(())
    }

    fn cancel_frame(&mut self) {
        if self.frame_pending {
            self.frames_cancelled += 1;
        }
        self.frame_pending = false;
    }

    fn listen_resize(&mut self) -> Result<(), SurfaceError> {
        if self.fail_listen {
            return Err(SurfaceError::Js("addEventListener failed".to_owned()));
        }
        self.listen_calls += 1;
        self.listens.set(self.listens.get() + 1);
        self.resize_listening = true;
        Ok(())
    }

    fn unlisten_resize(&mut self) {
        self.unlisten_calls += 1;
        self.resize_listening = false;
    }
}
