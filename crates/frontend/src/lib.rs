pub mod app;
pub mod domain;
pub mod layout;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::*;

/// Run `f` once the document is parsed.
fn on_document_ready(f: impl FnOnce() + 'static) -> Result<(), JsValue> {
    let document = shared::dom::document()?;
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let mut f = Some(f);
    shared::dom::listen(&document, "DOMContentLoaded", move |_: web_sys::Event| {
        if let Some(f) = f.take() {
            f();
        }
    })
}

#[wasm_bindgen(start)]
pub fn start() {
    system::diagnostics::init_logging();

    if let Err(e) = on_document_ready(app::boot) {
        log::error!("Page script not started: {:?}", e);
    }
}

/// Detach the image path observer, e.g. before tearing the page down in tests.
#[wasm_bindgen]
pub fn stop_image_path_observer() {
    app::stop_image_normalizer();
}
