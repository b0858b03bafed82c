//! Supplier modal: clicking a product link in any submenu lists the
//! suppliers of that product.
//!
//! The lookup key is the link's visible text. Markup is expected to contain
//! `#product-modal`, `#modal-info-panel`, `#modal-product-details-panel` and a
//! `.close-button`; without all four the controller stays disabled.

mod model;
mod view;

pub use model::{ModalView, SupplierBlock, SupplierDetails, SupplierModal, NOT_FOUND_MESSAGE};
pub use view::ModalElements;

use crate::shared::dom;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, KeyboardEvent, MouseEvent};

pub const PRODUCT_LINK_SELECTOR: &str = ".submenu a";

struct ModalController {
    document: Document,
    modal: SupplierModal,
    elements: ModalElements,
}

impl ModalController {
    fn open(&self, product: &str) {
        let view = self.modal.view_for(product);
        if let Err(e) = self.elements.render(&self.document, &view) {
            log::error!("Failed to render suppliers for '{}': {:?}", product, e);
            return;
        }
        log::debug!("Modal opened for '{}' ({} supplier(s))", product, view.block_count());
        self.elements.show();
    }

    fn close(&self) {
        self.elements.hide();
    }
}

/// Wire the modal to the page. Returns `false` if required markup is missing.
pub fn init(modal: SupplierModal) -> Result<bool, JsValue> {
    let document = dom::document()?;
    let Some(elements) = ModalElements::find(&document)? else {
        log::warn!("Supplier modal disabled: required elements missing");
        return Ok(false);
    };
    elements.hide();

    let controller = Rc::new(ModalController {
        document: document.clone(),
        modal,
        elements,
    });

    {
        let controller = Rc::clone(&controller);
        let close_button = controller.elements.close_button.clone();
        dom::listen(&close_button, "click", move |_: MouseEvent| {
            controller.close();
        })?;
    }

    {
        let controller = Rc::clone(&controller);
        let overlay = controller.elements.modal.clone();
        dom::listen(&overlay, "click", move |ev: MouseEvent| {
            // Only the backdrop itself, not clicks bubbling from the content.
            let on_backdrop = ev.target().is_some_and(|target| {
                let target: JsValue = target.into();
                js_sys::Object::is(&target, &controller.elements.modal)
            });
            if on_backdrop {
                controller.close();
            }
        })?;
    }

    {
        let controller = Rc::clone(&controller);
        dom::listen(&document, "keydown", move |ev: KeyboardEvent| {
            if ev.key() == "Escape" && controller.elements.is_visible() {
                controller.close();
            }
        })?;
    }

    let links = dom::query_all(&document, PRODUCT_LINK_SELECTOR)?;
    for link in &links {
        let controller = Rc::clone(&controller);
        let link_element: HtmlElement = match link.clone().dyn_into() {
            Ok(el) => el,
            Err(_) => continue,
        };
        let text_source = link_element.clone();
        dom::listen(&link_element, "click", move |ev: Event| {
            ev.prevent_default();
            controller.open(&text_source.inner_text());
        })?;
    }

    log::info!("Supplier modal ready, {} product link(s)", links.len());
    Ok(true)
}
