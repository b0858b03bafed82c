use super::model::{ModalView, SupplierBlock, SupplierDetails, NOT_FOUND_MESSAGE};
use crate::shared::dom;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

pub const MODAL_ID: &str = "product-modal";
pub const INFO_PANEL_ID: &str = "modal-info-panel";
pub const DETAILS_PANEL_ID: &str = "modal-product-details-panel";
pub const CLOSE_BUTTON_SELECTOR: &str = ".close-button";

/// The four elements the modal needs from the page markup.
pub struct ModalElements {
    pub modal: HtmlElement,
    pub info_panel: HtmlElement,
    pub details_panel: HtmlElement,
    pub close_button: HtmlElement,
}

impl ModalElements {
    /// `None` (with a warning per missing element) unless all four exist.
    pub fn find(document: &Document) -> Result<Option<Self>, JsValue> {
        let modal = dom::html_element_by_id(document, MODAL_ID);
        let info_panel = dom::html_element_by_id(document, INFO_PANEL_ID);
        let details_panel = dom::html_element_by_id(document, DETAILS_PANEL_ID);
        let close_button = document
            .query_selector(CLOSE_BUTTON_SELECTOR)?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        for (name, present) in [
            (MODAL_ID, modal.is_some()),
            (INFO_PANEL_ID, info_panel.is_some()),
            (DETAILS_PANEL_ID, details_panel.is_some()),
            (CLOSE_BUTTON_SELECTOR, close_button.is_some()),
        ] {
            if !present {
                log::warn!("Supplier modal: '{}' not found", name);
            }
        }

        Ok(match (modal, info_panel, details_panel, close_button) {
            (Some(modal), Some(info_panel), Some(details_panel), Some(close_button)) => {
                Some(Self {
                    modal,
                    info_panel,
                    details_panel,
                    close_button,
                })
            }
            _ => None,
        })
    }

    pub fn show(&self) {
        dom::set_visible(&self.modal, true);
        let _ = self.modal.class_list().add_1("show");
    }

    pub fn hide(&self) {
        dom::set_visible(&self.modal, false);
        let _ = self.modal.class_list().remove_1("show");
    }

    pub fn is_visible(&self) -> bool {
        self.modal.class_list().contains("show")
    }

    pub fn render(&self, document: &Document, view: &ModalView<'_>) -> Result<(), JsValue> {
        self.info_panel.set_inner_html("");
        self.details_panel.set_inner_html("");

        match view {
            ModalView::Suppliers {
                product,
                blocks,
                details,
            } => {
                let title = dom::create_with_text(document, "h2", "modal-product-title", Some(*product))?;
                self.info_panel.append_child(&title)?;
                for block in blocks {
                    self.info_panel.append_child(&render_block(document, block)?.into())?;
                }
                self.details_panel
                    .append_child(&render_details(document, details)?.into())?;
            }
            ModalView::NotFound { .. } => {
                let message =
                    dom::create_with_text(document, "p", "modal-empty-message", Some(NOT_FOUND_MESSAGE))?;
                self.info_panel.append_child(&message)?;
            }
        }
        Ok(())
    }
}

fn labelled_line(document: &Document, label: &str, value: &str) -> Result<Element, JsValue> {
    let line = document.create_element("p")?;
    let strong = dom::create_with_text(document, "strong", "", Some(label))?;
    line.append_child(&strong)?;
    line.append_child(&document.create_text_node(&format!(" {}", value)))?;
    Ok(line)
}

fn link(document: &Document, href: &str, text: &str) -> Result<Element, JsValue> {
    let anchor = dom::create_with_text(document, "a", "", Some(text))?;
    anchor.set_attribute("href", href)?;
    anchor.set_attribute("target", "_blank")?;
    anchor.set_attribute("rel", "noopener noreferrer")?;
    Ok(anchor)
}

fn render_block(document: &Document, block: &SupplierBlock<'_>) -> Result<Element, JsValue> {
    let container = dom::create_with_text(document, "div", "supplier-block", None)?;
    container.append_child(&dom::create_with_text(document, "h3", "", Some(block.name))?.into())?;
    container.append_child(&labelled_line(document, "Preço:", block.price)?.into())?;
    container.append_child(&labelled_line(document, "Região:", block.region)?.into())?;

    let links = dom::create_with_text(document, "div", "supplier-links", None)?;
    links.append_child(&link(document, block.map_href, "Ver no mapa")?.into())?;
    links.append_child(&link(document, block.website_href, "Visitar site")?.into())?;
    container.append_child(&links)?;
    Ok(container)
}

fn render_details(document: &Document, details: &SupplierDetails<'_>) -> Result<Element, JsValue> {
    let container = dom::create_with_text(document, "div", "supplier-details", None)?;

    let image: HtmlImageElement = document.create_element("img")?.dyn_into()?;
    image.set_src(&details.image_src);
    image.set_alt(details.name);
    // A broken image is hidden rather than shown as a broken icon.
    let on_error = Closure::once_into_js({
        let image = image.clone();
        move || {
            log::warn!("Supplier image failed to load: {}", image.src());
            let _ = image.style().set_property("display", "none");
        }
    });
    image.set_onerror(Some(on_error.unchecked_ref()));
    container.append_child(&image)?;

    container.append_child(&dom::create_with_text(document, "p", "", Some(details.description))?.into())?;
    Ok(container)
}
