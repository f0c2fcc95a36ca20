//! Browser bindings for the core traits.
//!
//! Everything here talks to `web_sys`/`gloo` and only works inside a page.
//! The rules these bindings follow live in `portfolio_core` and are tested
//! there.

mod history;
mod keyboard;
mod share;

pub use history::BrowserHistory;
pub use keyboard::use_escape_dismiss;
pub use share::{BrowserDownloader, BrowserShareSheet};

use wasm_bindgen::{JsCast, JsValue};

/// Readable message for a thrown JavaScript value.
fn js_message(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return format!("{}: {}", String::from(error.name()), String::from(error.message()));
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
