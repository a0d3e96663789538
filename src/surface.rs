// The two drawing primitives the particle field needs, and their mapping
// onto the browser's 2d canvas API

use crate::color::Color;
use crate::error::SurfaceError;
use crate::field::Viewport;
use std::f64::consts::PI;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub trait Surface {
    /// Clears the rectangle from the origin to `viewport`.
    fn clear(&mut self, viewport: Viewport) -> Result<(), SurfaceError>;

    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: Color) -> Result<(), SurfaceError>;
}

impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, viewport: Viewport) -> Result<(), SurfaceError> {
        self.clear_rect(0.0, 0.0, viewport.width, viewport.height);
        Ok(())
    }

    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: Color) -> Result<(), SurfaceError> {
        self.begin_path();
        self.arc(center[0], center[1], radius, 0.0, PI * 2.0)?;
        #[allow(deprecated)]
        self.set_fill_style(&JsValue::from_str(&color.to_css()));
        self.fill();
        Ok(())
    }
}
