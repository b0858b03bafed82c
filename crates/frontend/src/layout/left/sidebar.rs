//! Sidebar collapse toggle.
//!
//! Collapsing sets `sidebar-collapsed` on `<body>`, persists the flag and
//! fires a `sidebarToggle` event on `window` so unrelated scripts can react.
//! The toggle button follows the sidebar's right edge, tracked with a
//! `ResizeObserver` and window resizes.

use crate::shared::dom;
use crate::shared::icons::icon;
use crate::shared::storage::{KeyValueStore, LocalStorage, PersistedFlag};
use contracts::preferences::PreferenceKey;
use js_sys::Array;
use leptos::prelude::*;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, CustomEventInit, ResizeObserver};

pub const SIDEBAR_SELECTOR: &str = ".sidebar";
pub const SIDEBAR_TOGGLE_EVENT: &str = "sidebarToggle";

/// Space between the sidebar edge and the toggle button.
const TOGGLE_GAP_PX: f64 = 8.0;

/// `detail` of the page-wide toggle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SidebarToggled {
    pub collapsed: bool,
}

pub trait CollapseNotifier {
    fn notify(&self, event: SidebarToggled);
}

/// Dispatches [`SIDEBAR_TOGGLE_EVENT`] on `window`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowNotifier;

impl WindowNotifier {
    fn dispatch(event: SidebarToggled) -> Result<(), JsValue> {
        let detail = serde_wasm_bindgen::to_value(&event)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize event detail: {}", e)))?;
        let init = CustomEventInit::new();
        init.set_detail(&detail);
        let custom = CustomEvent::new_with_event_init_dict(SIDEBAR_TOGGLE_EVENT, &init)?;
        dom::window()?.dispatch_event(&custom)?;
        Ok(())
    }
}

impl CollapseNotifier for WindowNotifier {
    fn notify(&self, event: SidebarToggled) {
        if let Err(e) = Self::dispatch(event) {
            log::warn!("Failed to dispatch {}: {:?}", SIDEBAR_TOGGLE_EVENT, e);
        }
    }
}

#[derive(Debug)]
pub struct SidebarState<S, N> {
    flag: PersistedFlag<S>,
    notifier: N,
}

impl<S: KeyValueStore, N: CollapseNotifier> SidebarState<S, N> {
    pub fn new(store: S, notifier: N) -> Self {
        Self {
            flag: PersistedFlag::new(PreferenceKey::SidebarCollapsed, store),
            notifier,
        }
    }

    pub fn restore(&self) -> bool {
        self.flag.restore()
    }

    /// Flip, persist and announce the new state. Exactly one notification per call.
    pub fn toggle(&self) -> bool {
        let collapsed = self.flag.toggle();
        self.notifier.notify(SidebarToggled { collapsed });
        collapsed
    }
}

/// Horizontal position of the toggle for a sidebar of `sidebar_width` pixels.
pub fn toggle_left_offset(sidebar_width: f64) -> f64 {
    let width = if sidebar_width.is_finite() {
        sidebar_width.max(0.0)
    } else {
        0.0
    };
    width + TOGGLE_GAP_PX
}

pub fn toggle_icon_name(collapsed: bool) -> &'static str {
    if collapsed {
        "chevron-right"
    } else {
        "chevron-left"
    }
}

fn apply_collapsed(collapsed: bool) {
    dom::set_body_class(PreferenceKey::SidebarCollapsed.body_class(), collapsed);
}

/// Keep `left` in sync with the sidebar's rendered width.
fn track_sidebar_width(left: RwSignal<f64>) -> Result<(), JsValue> {
    let document = dom::document()?;
    let Some(sidebar) = document.query_selector(SIDEBAR_SELECTOR)? else {
        log::warn!("'{}' not found, sidebar toggle stays at the page edge", SIDEBAR_SELECTOR);
        return Ok(());
    };

    let measured = sidebar.clone();
    let reposition = move || {
        let width = measured.get_bounding_client_rect().width();
        left.set(toggle_left_offset(width));
    };

    // The observer fires once right after `observe`, when layout is ready,
    // and again on every size change of the sidebar itself.
    let on_resize_observed = Closure::<dyn FnMut(Array, ResizeObserver)>::new({
        let reposition = reposition.clone();
        move |_entries: Array, _observer: ResizeObserver| reposition()
    });
    let observer = ResizeObserver::new(on_resize_observed.as_ref().unchecked_ref())?;
    observer.observe(&sidebar);
    // The browser keeps an observer with live targets alive.
    on_resize_observed.forget();

    dom::listen(&dom::window()?.into(), "resize", move |_: web_sys::Event| reposition())?;
    Ok(())
}

#[component]
pub fn SidebarToggle() -> impl IntoView {
    let sidebar = SidebarState::new(LocalStorage, WindowNotifier);

    let initial = sidebar.restore();
    apply_collapsed(initial);
    let collapsed = RwSignal::new(initial);
    let left = RwSignal::new(toggle_left_offset(0.0));

    if let Err(e) = track_sidebar_width(left) {
        log::warn!("Sidebar toggle repositioning disabled: {:?}", e);
    }

    let on_toggle = move |_| {
        let next = sidebar.toggle();
        apply_collapsed(next);
        collapsed.set(next);
        log::debug!("Sidebar collapsed: {}", next);
    };

    view! {
        <button
            id="sidebar-toggle"
            class="sidebar-toggle"
            type="button"
            style:left=move || format!("{}px", left.get())
            aria-expanded=move || if collapsed.get() { "false" } else { "true" }
            title=move || if collapsed.get() { "Mostrar menu" } else { "Ocultar menu" }
            on:click=on_toggle
        >
            {move || icon(toggle_icon_name(collapsed.get()))}
        </button>
    }
}
