// Browser side of the particle background: a Host backed by the window and a
// <canvas>, and the handle the page holds on to while the background is mounted

use crate::animation::{Host, ParticleLoop};
use crate::config::FieldConfig;
use crate::error::SurfaceError;
use crate::field::Viewport;
use crate::timer::Timer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, Element, HtmlCanvasElement, Window};

type SharedLoop = Rc<RefCell<ParticleLoop<CanvasHost>>>;

// Full-viewport overlay that never takes pointer events from the page
const BACKGROUND_STYLE: [(&str, &str); 6] = [
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("pointer-events", "none"),
];

pub struct CanvasHost {
    window: Window,
    canvas: HtmlCanvasElement,
    context: Option<CanvasRenderingContext2d>,
    frame_callback: Option<Closure<dyn FnMut()>>,
    resize_callback: Option<Closure<dyn FnMut()>>,
    frame_id: Option<i32>,
    listening: bool,
}

impl CanvasHost {
    pub fn new(canvas: HtmlCanvasElement) -> Result<CanvasHost, SurfaceError> {
        let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
        // Err, Ok(None) and a non-2d object all mean the same thing here
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());

        Ok(CanvasHost {
            window,
            canvas,
            context,
            frame_callback: None,
            resize_callback: None,
            frame_id: None,
            listening: false,
        })
    }

    fn set_callbacks(&mut self, on_frame: Closure<dyn FnMut()>, on_resize: Closure<dyn FnMut()>) {
        self.frame_callback = Some(on_frame);
        self.resize_callback = Some(on_resize);
    }
}

impl Host for CanvasHost {
    type Surface = CanvasRenderingContext2d;

    fn surface(&mut self) -> Option<&mut CanvasRenderingContext2d> {
        self.context.as_mut()
    }

    fn viewport(&self) -> Viewport {
        let width = self.window.inner_width().ok().and_then(|w| w.as_f64());
        let height = self.window.inner_height().ok().and_then(|h| h.as_f64());
        match (width, height) {
            (Some(width), Some(height)) => Viewport::new(width, height),
            _ => Viewport::new(self.canvas.width() as f64, self.canvas.height() as f64),
        }
    }

    fn resize_surface(&mut self, viewport: Viewport) {
        self.canvas.set_width(viewport.width as u32);
        self.canvas.set_height(viewport.height as u32);
    }

    // Only hosts built by `start_loop` have callbacks; a bare one refuses to
    // pretend it scheduled anything
    fn request_frame(&mut self) -> Result<(), SurfaceError> {
        let callback = self.frame_callback.as_ref().ok_or(SurfaceError::NoCallback)?;
        let id = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref::<js_sys::Function>())?;
        self.frame_id = Some(id);
        Ok(())
    }

    fn cancel_frame(&mut self) {
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }

    fn listen_resize(&mut self) -> Result<(), SurfaceError> {
        if self.listening {
            return Ok(());
        }
        let callback = self.resize_callback.as_ref().ok_or(SurfaceError::NoCallback)?;
        self.window
            .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())?;
        self.listening = true;
        Ok(())
    }

    fn unlisten_resize(&mut self) {
        if !self.listening {
            return;
        }
        if let Some(callback) = &self.resize_callback {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
        }
        self.listening = false;
    }
}

/// Handle to a running particle background. Call `detach()` (or `free()`)
/// when the owning view unmounts. A handle whose canvas had no 2d context is
/// inert: it draws nothing and every method is a no-op.
#[wasm_bindgen]
pub struct ParticleBackground {
    state: Option<SharedLoop>,
}

#[wasm_bindgen]
impl ParticleBackground {
    pub fn attach(canvas: HtmlCanvasElement) -> ParticleBackground {
        ParticleBackground::attach_with_config(canvas, FieldConfig::default())
    }

    pub fn attach_with_config(canvas: HtmlCanvasElement, config: FieldConfig) -> ParticleBackground {
        match start_loop(canvas, config) {
            Ok(state) => ParticleBackground { state: Some(state) },
            Err(err) => {
                log_disabled(&err);
                ParticleBackground { state: None }
            }
        }
    }

    pub fn detach(&mut self) {
        if let Some(state) = self.state.take() {
            state.borrow_mut().detach();
        }
    }

    pub fn is_running(&self) -> bool {
        self.state
            .as_ref()
            .map(|state| state.borrow().is_running())
            .unwrap_or(false)
    }

    pub fn particle_count(&self) -> u32 {
        self.state
            .as_ref()
            .map(|state| state.borrow().field().len() as u32)
            .unwrap_or(0)
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Creates a full-viewport canvas inside `container` and starts the
/// background on it with the default settings.
#[wasm_bindgen]
pub fn mount(container: &Element) -> Result<ParticleBackground, JsValue> {
    mount_with_config(container, FieldConfig::default())
}

#[wasm_bindgen]
pub fn mount_with_config(container: &Element, config: FieldConfig) -> Result<ParticleBackground, JsValue> {
    let document = container.owner_document().ok_or(SurfaceError::NoDocument)?;
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()?;

    let style = canvas.style();
    for (name, value) in BACKGROUND_STYLE.iter() {
        style.set_property(name, value)?;
    }
    container.append_child(&canvas)?;

    Ok(ParticleBackground::attach_with_config(canvas, config))
}

fn start_loop(canvas: HtmlCanvasElement, config: FieldConfig) -> Result<SharedLoop, SurfaceError> {
    let host = CanvasHost::new(canvas)?;
    let field_loop = ParticleLoop::new(host, config).ok_or(SurfaceError::NoContext)?;
    let state = Rc::new(RefCell::new(field_loop));
    install_callbacks(&state);

    let started = state.borrow_mut().start();
    if let Err(err) = started {
        state.borrow_mut().detach();
        return Err(err);
    }
    Ok(state)
}

// The closures live inside the host they are registered through, so they only
// hold a weak reference back to the loop
fn install_callbacks(state: &SharedLoop) {
    let profile = state.borrow().field().config().profile();

    let weak = Rc::downgrade(state);
    let on_frame = Closure::wrap(Box::new(move || {
        if let Some(state) = weak.upgrade() {
            let _timer = if profile {
                Some(Timer::new("ParticleField::render_frame"))
            } else {
                None
            };
            let result = state.borrow_mut().on_frame();
            if let Err(err) = result {
                log_disabled(&err);
            }
        }
    }) as Box<dyn FnMut()>);

    let weak = Rc::downgrade(state);
    let on_resize = Closure::wrap(Box::new(move || {
        if let Some(state) = weak.upgrade() {
            state.borrow_mut().on_resize();
        }
    }) as Box<dyn FnMut()>);

    state.borrow_mut().host_mut().set_callbacks(on_frame, on_resize);
}

fn log_disabled(err: &SurfaceError) {
    console::debug_1(&format!("particle background disabled: {}", err).into());
}
