//! # playlist-ui
//!
//! WASM behavior layer for the "create playlist" form page. The markup is
//! served by the backend; this crate attaches to the existing elements by id
//! and provides theme switching, source-dependent field state, and playlist
//! submission.
//!
//! All page logic is written against small traits (`FormView`,
//! `ThemeDocument`, `KeyValueStore`, `HttpTransport`) so it runs and is tested
//! natively. The `hydrate` feature adds the `web-sys` implementations and the
//! `start` entry point.

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod page;

#[cfg(test)]
mod test_support;

/// WASM entry point: installs logging and wires the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    page::boot();
}
