//! Image path normalization.
//!
//! Pages are authored with relative image paths (`img/x.png`, `./img/x.png`,
//! `x.png`) that only resolve in development. In production every image is
//! served from the asset base path, so `src` attributes are rewritten to
//! `{asset_base_path}/{relative}`. Images inserted later are caught by a
//! `MutationObserver` on `<body>`.

use crate::shared::dom;
use crate::shared::environment::EnvironmentConfig;
use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MutationObserver, MutationObserverInit, MutationRecord, Node};

/// Directory name the authored relative paths point into.
const ASSET_DIR_PREFIX: &str = "img/";

/// Canonical `src` for an authored one, or `None` when it must stay as is.
///
/// An empty `asset_base_path` (development hosts) leaves every path
/// untouched: relative paths already resolve against the local server.
/// Absolute URLs, data URIs and paths already under the asset base path are
/// left untouched, which makes the rewrite idempotent.
pub fn normalize_src(src: &str, asset_base_path: &str) -> Option<String> {
    let src = src.trim();
    let base = asset_base_path.trim_end_matches('/');

    if base.is_empty() || src.is_empty() {
        return None;
    }
    if src.starts_with("http") || src.starts_with("data:") || src.starts_with("//") {
        return None;
    }
    if src
        .strip_prefix(base)
        .is_some_and(|rest| rest.starts_with('/'))
    {
        return None;
    }

    let relative = src.strip_prefix("./").unwrap_or(src);
    let relative = relative.trim_start_matches('/');
    let relative = relative.strip_prefix(ASSET_DIR_PREFIX).unwrap_or(relative);
    if relative.is_empty() {
        return None;
    }

    Some(format!("{}/{}", base, relative))
}

/// Rewrite every `<img>` in `document`. Returns how many changed.
pub fn normalize_document_images(document: &Document, asset_base_path: &str) -> Result<usize, JsValue> {
    let mut changed = 0;
    for image in dom::query_all(document, "img")? {
        let Some(src) = image.get_attribute("src") else {
            continue;
        };
        if let Some(normalized) = normalize_src(&src, asset_base_path) {
            image.set_attribute("src", &normalized)?;
            log::debug!("Image path '{}' -> '{}'", src, normalized);
            changed += 1;
        }
    }
    if changed > 0 {
        log::info!("Normalized {} image path(s)", changed);
    }
    Ok(changed)
}

fn is_or_contains_image(node: &Node) -> bool {
    let Some(element) = node.dyn_ref::<Element>() else {
        return false;
    };
    element.tag_name().eq_ignore_ascii_case("img")
        || matches!(element.query_selector("img"), Ok(Some(_)))
}

fn batch_inserted_image(records: &Array) -> bool {
    records.iter().any(|record| {
        let Ok(record) = record.dyn_into::<MutationRecord>() else {
            return false;
        };
        let added = record.added_nodes();
        (0..added.length()).any(|i| added.get(i).is_some_and(|n| is_or_contains_image(&n)))
    })
}

struct ActiveObserver {
    observer: MutationObserver,
    _callback: Closure<dyn FnMut(Array, MutationObserver)>,
}

/// Owns the `<body>` subscription that renormalizes after image insertion.
pub struct ImagePathNormalizer {
    config: EnvironmentConfig,
    active: Option<ActiveObserver>,
}

impl ImagePathNormalizer {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self {
            config,
            active: None,
        }
    }

    pub fn normalize_all(&self) -> Result<usize, JsValue> {
        normalize_document_images(&dom::document()?, self.config.asset_base_path)
    }

    /// Normalize the current document, then watch `<body>` for inserted images.
    ///
    /// One pass runs per observer batch, however many images the batch added.
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.active.is_some() {
            return Ok(());
        }
        self.normalize_all()?;

        let base = self.config.asset_base_path;
        let callback = Closure::<dyn FnMut(Array, MutationObserver)>::new(
            move |records: Array, _observer: MutationObserver| {
                if !batch_inserted_image(&records) {
                    return;
                }
                let result = dom::document().and_then(|doc| normalize_document_images(&doc, base));
                if let Err(e) = result {
                    log::warn!("Image path renormalization failed: {:?}", e);
                }
            },
        );
        let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;

        let options = MutationObserverInit::new();
        options.set_child_list(true);
        options.set_subtree(true);
        observer.observe_with_options(&dom::body()?.into(), &options)?;

        log::debug!("Image path observer started");
        self.active = Some(ActiveObserver {
            observer,
            _callback: callback,
        });
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(active) = self.active.take() {
            active.observer.disconnect();
            log::debug!("Image path observer stopped");
        }
    }
}

impl Drop for ImagePathNormalizer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "/img";

    #[test]
    fn rewrites_img_relative_paths() {
        assert_eq!(
            normalize_src("img/fornecedores/infomax.png", BASE).as_deref(),
            Some("/img/fornecedores/infomax.png")
        );
    }

    #[test]
    fn rewrites_dot_relative_paths() {
        assert_eq!(normalize_src("./logo.png", BASE).as_deref(), Some("/img/logo.png"));
        assert_eq!(
            normalize_src("./img/banner.jpg", BASE).as_deref(),
            Some("/img/banner.jpg")
        );
    }

    #[test]
    fn rewrites_bare_and_rooted_paths() {
        assert_eq!(normalize_src("logo.png", BASE).as_deref(), Some("/img/logo.png"));
        assert_eq!(
            normalize_src("/icons/cart.svg", BASE).as_deref(),
            Some("/img/icons/cart.svg")
        );
    }

    #[test]
    fn leaves_absolute_and_data_sources_alone() {
        assert_eq!(normalize_src("https://cdn.example.com/a.png", BASE), None);
        assert_eq!(normalize_src("http://cdn.example.com/a.png", BASE), None);
        assert_eq!(normalize_src("//cdn.example.com/a.png", BASE), None);
        assert_eq!(normalize_src("data:image/png;base64,AAAA", BASE), None);
        assert_eq!(normalize_src("", BASE), None);
    }

    #[test]
    fn skips_already_canonical_paths() {
        assert_eq!(normalize_src("/img/logo.png", BASE), None);
    }

    #[test]
    fn base_prefix_must_end_at_separator() {
        assert_eq!(
            normalize_src("/imgs/logo.png", BASE).as_deref(),
            Some("/img/imgs/logo.png")
        );
    }

    #[test]
    fn development_base_changes_nothing() {
        assert_eq!(normalize_src("img/logo.png", ""), None);
        assert_eq!(normalize_src("./logo.png", ""), None);
    }

    #[test]
    fn development_hosts_keep_every_authored_shape() {
        for host in ["localhost", "127.0.0.1"] {
            let base = EnvironmentConfig::resolve(host).asset_base_path;
            for src in ["img/a.png", "./img/a.png", "./a.png", "a.png", "/img/a.png"] {
                assert_eq!(normalize_src(src, base), None, "{} on {}", src, host);
            }
        }
    }

    #[test]
    fn normalization_is_idempotent() {
        let sources = [
            "img/a.png",
            "./b.png",
            "c.png",
            "/d/e.png",
            "https://x/y.png",
            "data:image/gif;base64,R0lGOD",
            "/img/f.png",
        ];
        let once: Vec<String> = sources
            .iter()
            .map(|s| normalize_src(s, BASE).unwrap_or_else(|| s.to_string()))
            .collect();
        let twice: Vec<String> = once
            .iter()
            .map(|s| normalize_src(s, BASE).unwrap_or_else(|| s.clone()))
            .collect();
        assert_eq!(once, twice);
        assert!(once.iter().all(|s| normalize_src(s, BASE).is_none()));
    }

    #[test]
    fn exactly_one_separator_with_trailing_slash_base() {
        assert_eq!(normalize_src("img/a.png", "/img/").as_deref(), Some("/img/a.png"));
    }
}
