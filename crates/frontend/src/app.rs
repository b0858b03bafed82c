use crate::domain::supplier_modal::{self, SupplierModal};
use crate::layout::{branding, menu, FloatingActionButtons, SidebarToggle};
use crate::shared::environment::EnvironmentConfig;
use crate::shared::images::ImagePathNormalizer;
use crate::shared::styles;
use crate::shared::theme::DarkModeToggle;
use crate::system::diagnostics;
use contracts::catalog::ProductCatalog;
use contracts::navigation::{MENU_REGISTRY, QUICK_LINKS};
use leptos::prelude::*;
use std::cell::RefCell;
use std::fmt::Debug;

thread_local! {
    static IMAGE_NORMALIZER: RefCell<Option<ImagePathNormalizer>> = const { RefCell::new(None) };
}

/// Widgets the script adds on top of the static page.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <FloatingActionButtons links=QUICK_LINKS />
        <DarkModeToggle />
        <SidebarToggle />
    }
}

/// Components degrade independently: a failure is logged, boot continues.
fn report<T, E: Debug>(component: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("{} failed to initialize: {:?}", component, e);
            None
        }
    }
}

/// Initialize every page component, in order.
pub fn boot() {
    report("Error reporting", diagnostics::install_error_reporting());

    let config = EnvironmentConfig::current();

    report("Styles", styles::inject_styles());
    report("Menus", menu::init_menus(MENU_REGISTRY));

    if let Some(catalog) = report("Catalog", ProductCatalog::bundled()) {
        log::debug!("Catalog loaded: {} product(s)", catalog.len());
        report("Supplier modal", supplier_modal::init(SupplierModal::new(catalog, config)));
    }

    leptos::mount::mount_to_body(App);
    report("Site name", branding::decorate_site_name());

    let mut normalizer = ImagePathNormalizer::new(config);
    if report("Image paths", normalizer.start()).is_some() {
        IMAGE_NORMALIZER.with(|slot| *slot.borrow_mut() = Some(normalizer));
    }
}

/// Stop watching for inserted images. Safe to call more than once.
pub fn stop_image_normalizer() {
    IMAGE_NORMALIZER.with(|slot| {
        if let Some(mut normalizer) = slot.borrow_mut().take() {
            normalizer.stop();
        }
    });
}
