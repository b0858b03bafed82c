//! Static navigation configuration: category menus and floating quick links.

/// One collapsible category menu: the element that is clicked and the panel it controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub trigger_id: &'static str,
    pub submenu_id: &'static str,
}

impl MenuEntry {
    pub const fn new(trigger_id: &'static str, submenu_id: &'static str) -> Self {
        Self {
            trigger_id,
            submenu_id,
        }
    }
}

/// Category menus of the supplier directory, in page order.
pub const MENU_REGISTRY: &[MenuEntry] = &[
    MenuEntry::new("menu-computadores", "submenu-computadores"),
    MenuEntry::new("menu-perifericos", "submenu-perifericos"),
    MenuEntry::new("menu-redes", "submenu-redes"),
    MenuEntry::new("menu-armazenamento", "submenu-armazenamento"),
    MenuEntry::new("menu-componentes", "submenu-componentes"),
];

/// Fixed-position shortcut link rendered along the right edge of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickLink {
    pub href: &'static str,
    pub label: &'static str,
    pub tooltip: &'static str,
    /// Icon name understood by the frontend icon set.
    pub icon: &'static str,
    pub new_tab: bool,
    /// Distance from the top of the viewport, in pixels.
    pub top_offset_px: u32,
}

impl QuickLink {
    /// `target` attribute for the anchor, if any.
    pub fn target(&self) -> Option<&'static str> {
        self.new_tab.then_some("_blank")
    }

    /// `rel` attribute; only new-tab links need one.
    pub fn rel(&self) -> Option<&'static str> {
        self.new_tab.then_some("noopener noreferrer")
    }
}

pub const QUICK_LINKS: &[QuickLink] = &[
    QuickLink {
        href: "/fornecedores",
        label: "Cadastrar Fornecedor",
        tooltip: "Cadastre sua empresa como fornecedora",
        icon: "truck",
        new_tab: false,
        top_offset_px: 140,
    },
    QuickLink {
        href: "/clientes",
        label: "Cadastrar Cliente",
        tooltip: "Crie sua conta de cliente",
        icon: "user-plus",
        new_tab: false,
        top_offset_px: 200,
    },
    QuickLink {
        href: "/listar_fornecedores",
        label: "Lista de Fornecedores",
        tooltip: "Veja todos os fornecedores cadastrados",
        icon: "list",
        new_tab: false,
        top_offset_px: 260,
    },
    QuickLink {
        href: "https://techsuppliers-assistente.onrender.com",
        label: "Assistente de Compras",
        tooltip: "Tire dúvidas sobre produtos com o assistente",
        icon: "message-square",
        new_tab: true,
        top_offset_px: 320,
    },
    QuickLink {
        href: "https://techsuppliers-orcamento.onrender.com",
        label: "Simulador de Orçamento",
        tooltip: "Monte um orçamento estimado",
        icon: "calculator",
        new_tab: true,
        top_offset_px: 380,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn menu_ids_are_unique() {
        let triggers: HashSet<_> = MENU_REGISTRY.iter().map(|m| m.trigger_id).collect();
        let submenus: HashSet<_> = MENU_REGISTRY.iter().map(|m| m.submenu_id).collect();
        assert_eq!(triggers.len(), MENU_REGISTRY.len());
        assert_eq!(submenus.len(), MENU_REGISTRY.len());
    }

    #[test]
    fn quick_links_do_not_overlap() {
        let offsets: HashSet<_> = QUICK_LINKS.iter().map(|l| l.top_offset_px).collect();
        assert_eq!(offsets.len(), QUICK_LINKS.len());
    }

    #[test]
    fn only_external_links_open_new_tab() {
        for link in QUICK_LINKS {
            let external = link.href.starts_with("http");
            assert_eq!(link.new_tab, external, "{}", link.href);
            assert_eq!(link.target().is_some(), external);
            assert_eq!(link.rel().is_some(), external);
        }
    }
}
