//! Console logging and the page-wide error catch-all.
//!
//! Uncaught errors and unhandled promise rejections are only reported; the
//! page keeps running and nothing is retried.

use crate::shared::dom;
use wasm_bindgen::prelude::*;
use web_sys::{ErrorEvent, PromiseRejectionEvent};

pub fn init_logging() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}

pub fn install_error_reporting() -> Result<(), JsValue> {
    let window = dom::window()?;

    dom::listen(&window, "error", |ev: ErrorEvent| {
        log::error!(
            "Uncaught error: {} ({}:{}:{})",
            ev.message(),
            ev.filename(),
            ev.lineno(),
            ev.colno()
        );
    })?;

    dom::listen(&window, "unhandledrejection", |ev: PromiseRejectionEvent| {
        log::error!("Unhandled promise rejection: {:?}", ev.reason());
    })?;

    Ok(())
}
