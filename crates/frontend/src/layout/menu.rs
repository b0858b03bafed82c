//! Collapsible category menus.
//!
//! Each registered trigger shows/hides its submenu panel. Opening one panel
//! closes all the others, so at most one submenu is open at any time.

use crate::shared::dom;
use contracts::navigation::MenuEntry;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, MouseEvent};

/// Which submenu, if any, is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    len: usize,
    open: Option<usize>,
}

/// Panels to update after a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuTransition {
    Opened { index: usize, closed: Vec<usize> },
    Closed { index: usize },
}

impl MenuState {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    #[cfg(test)]
    fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Click on trigger `index`: close it if open, otherwise close every
    /// other panel and open it.
    pub fn click(&mut self, index: usize) -> MenuTransition {
        debug_assert!(index < self.len);
        if self.is_open(index) {
            self.open = None;
            MenuTransition::Closed { index }
        } else {
            self.open = Some(index);
            let closed = (0..self.len).filter(|&i| i != index).collect();
            MenuTransition::Opened { index, closed }
        }
    }
}

struct BoundMenu {
    entry: MenuEntry,
    trigger: HtmlElement,
    submenu: HtmlElement,
}

impl BoundMenu {
    fn set_open(&self, open: bool) {
        if let Some(parent) = self.submenu.parent_element() {
            let _ = parent.class_list().toggle_with_force("open", open);
        }
        let _ = self
            .trigger
            .set_attribute("aria-expanded", if open { "true" } else { "false" });
        dom::set_visible(&self.submenu, open);
    }
}

struct MenuController {
    menus: Vec<BoundMenu>,
    state: RefCell<MenuState>,
}

impl MenuController {
    fn click(&self, index: usize) {
        let transition = self.state.borrow_mut().click(index);
        match transition {
            MenuTransition::Opened { index, closed } => {
                for other in closed {
                    self.menus[other].set_open(false);
                }
                self.menus[index].set_open(true);
                log::debug!("Submenu '{}' opened", self.menus[index].entry.submenu_id);
            }
            MenuTransition::Closed { index } => {
                self.menus[index].set_open(false);
                log::debug!("Submenu '{}' closed", self.menus[index].entry.submenu_id);
            }
        }
    }
}

/// Bind every registered menu present in the page. Returns how many were bound.
///
/// Pairs with a missing trigger or submenu are skipped with a warning.
pub fn init_menus(registry: &[MenuEntry]) -> Result<usize, JsValue> {
    let document = dom::document()?;

    let mut menus = Vec::with_capacity(registry.len());
    for entry in registry {
        let trigger = dom::html_element_by_id(&document, entry.trigger_id);
        let submenu = dom::html_element_by_id(&document, entry.submenu_id);
        match (trigger, submenu) {
            (Some(trigger), Some(submenu)) => menus.push(BoundMenu {
                entry: *entry,
                trigger,
                submenu,
            }),
            (trigger, submenu) => log::warn!(
                "Menu '{}' skipped: trigger {}, submenu '{}' {}",
                entry.trigger_id,
                if trigger.is_some() { "found" } else { "missing" },
                entry.submenu_id,
                if submenu.is_some() { "found" } else { "missing" },
            ),
        }
    }

    for menu in &menus {
        menu.set_open(false);
    }

    let controller = Rc::new(MenuController {
        state: RefCell::new(MenuState::new(menus.len())),
        menus,
    });

    for (index, menu) in controller.menus.iter().enumerate() {
        let controller = Rc::clone(&controller);
        dom::listen(&menu.trigger, "click", move |ev: MouseEvent| {
            ev.prevent_default();
            controller.click(index);
        })?;
    }

    let bound = controller.menus.len();
    log::info!("Menus bound: {}/{}", bound, registry.len());
    Ok(bound)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_count(state: &MenuState, len: usize) -> usize {
        (0..len).filter(|&i| state.is_open(i)).count()
    }

    #[test]
    fn starts_closed() {
        let state = MenuState::new(3);
        assert_eq!(state.open_index(), None);
    }

    #[test]
    fn click_opens_then_closes() {
        let mut state = MenuState::new(3);
        assert_eq!(
            state.click(1),
            MenuTransition::Opened {
                index: 1,
                closed: vec![0, 2]
            }
        );
        assert!(state.is_open(1));
        assert_eq!(state.click(1), MenuTransition::Closed { index: 1 });
        assert_eq!(state.open_index(), None);
    }

    #[test]
    fn opening_one_closes_the_rest() {
        let mut state = MenuState::new(4);
        state.click(0);
        state.click(2);
        assert!(state.is_open(2));
        assert!(!state.is_open(0));
    }

    #[test]
    fn at_most_one_open_for_any_click_sequence() {
        let len = 5;
        let mut state = MenuState::new(len);
        let clicks = [0, 3, 3, 1, 4, 4, 4, 2, 0, 1, 1, 3];
        for &index in &clicks {
            let transition = state.click(index);
            if let MenuTransition::Opened { closed, .. } = transition {
                assert_eq!(closed.len(), len - 1);
                assert!(!closed.contains(&index));
            }
            assert!(open_count(&state, len) <= 1);
        }
    }
}
