//! The page's component stylesheet, injected once into `<head>`.

use crate::shared::dom;
use wasm_bindgen::prelude::*;

pub const STYLE_ELEMENT_ID: &str = "techsuppliers-styles";

const MENU_CSS: &str = r#"
.menu-category > .submenu { display: none; }
.menu-category.open > .submenu { display: block; }
.menu-category > [aria-expanded] { cursor: pointer; user-select: none; }
.menu-category > [aria-expanded]::after { content: "\25B8"; margin-left: 6px; display: inline-block; transition: transform 0.2s ease; }
.menu-category.open > [aria-expanded]::after { transform: rotate(90deg); }
.submenu a { display: block; padding: 6px 12px 6px 24px; color: inherit; text-decoration: none; border-radius: 4px; }
.submenu a:hover { background: rgba(37, 99, 235, 0.1); color: #2563eb; }
"#;

const MODAL_CSS: &str = r#"
#product-modal { display: none; position: fixed; inset: 0; z-index: 1000; background: rgba(15, 23, 42, 0.55); overflow-y: auto; }
#product-modal .modal-content { position: relative; max-width: 880px; margin: 6vh auto; padding: 24px; background: #ffffff; border-radius: 12px; box-shadow: 0 20px 45px rgba(0, 0, 0, 0.25); display: grid; grid-template-columns: 1fr 1fr; gap: 24px; }
#product-modal .close-button { position: absolute; top: 12px; right: 16px; font-size: 26px; line-height: 1; cursor: pointer; background: none; border: none; color: #64748b; }
#product-modal .close-button:hover { color: #0f172a; }
.modal-product-title { grid-column: 1 / -1; margin: 0; font-size: 1.4rem; }
.supplier-block { padding: 12px 14px; margin-bottom: 12px; border: 1px solid #e2e8f0; border-radius: 8px; }
.supplier-block h3 { margin: 0 0 6px; font-size: 1.05rem; }
.supplier-block p { margin: 2px 0; font-size: 0.92rem; }
.supplier-block .supplier-links { display: flex; gap: 12px; margin-top: 8px; }
.supplier-block .supplier-links a { color: #2563eb; text-decoration: none; font-weight: 500; }
.supplier-block .supplier-links a:hover { text-decoration: underline; }
.supplier-details img { width: 100%; max-height: 260px; object-fit: contain; border-radius: 8px; background: #f8fafc; }
.supplier-details p { line-height: 1.5; }
.modal-empty-message { color: #64748b; font-style: italic; }
"#;

const FLOATING_ACTIONS_CSS: &str = r#"
.floating-action { position: fixed; right: 0; z-index: 900; }
.floating-action__link { display: flex; align-items: center; gap: 10px; width: 8px; height: 44px; padding: 0 0 0 10px; overflow: hidden; white-space: nowrap; color: #ffffff; background: #2563eb; border-radius: 8px 0 0 8px; text-decoration: none; box-shadow: -2px 2px 8px rgba(0, 0, 0, 0.2); transition: width 0.25s ease, background 0.25s ease; }
.floating-action__link:hover, .floating-action__link:focus-visible { width: 210px; background: #1d4ed8; }
.floating-action__icon { flex: 0 0 auto; display: inline-flex; opacity: 0; transition: opacity 0.2s ease; }
.floating-action__link:hover .floating-action__icon, .floating-action__link:focus-visible .floating-action__icon { opacity: 1; }
.floating-action__label { font-size: 0.9rem; font-weight: 500; }
.floating-action__link[target="_blank"] { background: #0f766e; }
.floating-action__link[target="_blank"]:hover { background: #115e59; }
"#;

const TOGGLES_CSS: &str = r#"
.dark-mode-toggle { position: fixed; bottom: 20px; right: 20px; z-index: 950; width: 44px; height: 44px; border-radius: 50%; border: none; cursor: pointer; display: inline-flex; align-items: center; justify-content: center; color: #0f172a; background: #f1f5f9; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.2); transition: background 0.2s ease, transform 0.2s ease; }
.dark-mode-toggle:hover { transform: scale(1.08); }
.sidebar-toggle { position: fixed; top: 16px; z-index: 950; width: 28px; height: 28px; border: 1px solid #cbd5e1; border-radius: 50%; cursor: pointer; display: inline-flex; align-items: center; justify-content: center; background: #ffffff; color: #334155; transition: left 0.25s ease; }
.sidebar { transition: width 0.25s ease, padding 0.25s ease; }
body.sidebar-collapsed .sidebar { width: 0; padding-left: 0; padding-right: 0; overflow: hidden; }
body.sidebar-collapsed .main-content { margin-left: 0; }
.site-name-icon { margin-right: 8px; }
"#;

const DARK_MODE_CSS: &str = r#"
body.dark-mode { background: #0f172a; color: #e2e8f0; }
body.dark-mode .sidebar { background: #111827; color: #e2e8f0; }
body.dark-mode .submenu a:hover { background: rgba(96, 165, 250, 0.15); color: #93c5fd; }
body.dark-mode #product-modal .modal-content { background: #1e293b; color: #e2e8f0; }
body.dark-mode #product-modal .close-button { color: #94a3b8; }
body.dark-mode .supplier-block { border-color: #334155; }
body.dark-mode .supplier-block .supplier-links a { color: #93c5fd; }
body.dark-mode .supplier-details img { background: #0f172a; }
body.dark-mode .floating-action__link { background: #3b82f6; }
body.dark-mode .dark-mode-toggle { background: #1e293b; color: #fde68a; }
body.dark-mode .sidebar-toggle { background: #1e293b; border-color: #475569; color: #e2e8f0; }
"#;

const RESPONSIVE_CSS: &str = r#"
@media (max-width: 768px) {
  #product-modal .modal-content { grid-template-columns: 1fr; margin: 0; min-height: 100vh; border-radius: 0; }
  .floating-action__link { height: 38px; }
  .floating-action__link:hover, .floating-action__link:focus-visible { width: 180px; }
  .sidebar-toggle { top: 10px; }
}
@media (max-width: 480px) {
  .floating-action { display: none; }
  .dark-mode-toggle { bottom: 12px; right: 12px; width: 38px; height: 38px; }
}
"#;

/// Full stylesheet text for every component on the page.
pub fn build_stylesheet() -> String {
    [
        MENU_CSS,
        MODAL_CSS,
        FLOATING_ACTIONS_CSS,
        TOGGLES_CSS,
        DARK_MODE_CSS,
        RESPONSIVE_CSS,
    ]
    .iter()
    .map(|section| section.trim())
    .collect::<Vec<_>>()
    .join("\n")
}

/// Insert the stylesheet into `<head>`. Returns `false` if it was already there.
pub fn inject_styles() -> Result<bool, JsValue> {
    let document = dom::document()?;
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(false);
    }
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("No <head> element found"))?;

    let style = document.create_element("style")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(&build_stylesheet()));
    head.append_child(&style)?;
    log::debug!("Injected component stylesheet");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn braces_are_balanced() {
        let css = build_stylesheet();
        let open = css.matches('{').count();
        let close = css.matches('}').count();
        assert_eq!(open, close);
    }

    #[test]
    fn covers_every_component() {
        let css = build_stylesheet();
        for selector in [
            ".submenu",
            "#product-modal",
            ".close-button",
            ".floating-action__link:hover",
            ".dark-mode-toggle",
            ".sidebar-toggle",
            "body.sidebar-collapsed",
        ] {
            assert!(css.contains(selector), "missing {}", selector);
        }
    }

    #[test]
    fn has_dark_mode_overrides_and_breakpoints() {
        let css = build_stylesheet();
        assert!(css.contains("body.dark-mode #product-modal"));
        assert!(css.contains("@media (max-width: 768px)"));
        assert!(css.contains("@media (max-width: 480px)"));
    }
}
