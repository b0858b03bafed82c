use crate::shared::dom;
use wasm_bindgen::prelude::*;

const SITE_NAME_SELECTOR: &str = ".site-name";
const ICON_CLASS: &str = "site-name-icon";
const ICON_GLYPH: &str = "\u{1F4BB}";

/// Prefix the `.site-name` heading with a decorative icon. Optional markup.
pub fn decorate_site_name() -> Result<(), JsValue> {
    let document = dom::document()?;
    let Some(site_name) = document.query_selector(SITE_NAME_SELECTOR)? else {
        log::debug!("'{}' not found, skipping icon", SITE_NAME_SELECTOR);
        return Ok(());
    };
    if site_name.query_selector(&format!(".{}", ICON_CLASS))?.is_some() {
        return Ok(());
    }

    let icon = dom::create_with_text(&document, "span", ICON_CLASS, Some(ICON_GLYPH))?;
    icon.set_attribute("aria-hidden", "true")?;
    site_name.insert_before(&icon, site_name.first_child().as_ref())?;
    Ok(())
}
