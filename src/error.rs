// Error type for everything that can go wrong between the particle field and
// the browser. None of these are surfaced to the page: the background just
// stops drawing.

use std::fmt;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceError {
    /// No global `window`, e.g. running inside a worker.
    NoWindow,
    /// The window has no `document`.
    NoDocument,
    /// The canvas could not hand out a 2d context (or it went away).
    NoContext,
    /// The host has nothing to hand the browser's frame or resize scheduler.
    NoCallback,
    /// A DOM call threw.
    Js(String),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::NoWindow => write!(f, "no global window"),
            SurfaceError::NoDocument => write!(f, "window has no document"),
            SurfaceError::NoContext => write!(f, "2d drawing context unavailable"),
            SurfaceError::NoCallback => write!(f, "no callback installed on the host"),
            SurfaceError::Js(msg) => write!(f, "javascript error: {}", msg),
        }
    }
}

impl std::error::Error for SurfaceError {}

impl From<JsValue> for SurfaceError {
    fn from(value: JsValue) -> Self {
        SurfaceError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<SurfaceError> for JsValue {
    fn from(err: SurfaceError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
