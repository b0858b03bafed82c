use crate::shared::environment::EnvironmentConfig;
use crate::shared::images::normalize_src;
use contracts::catalog::{LookupMode, ProductCatalog, Supplier};

pub const NOT_FOUND_MESSAGE: &str = "Nenhum fornecedor encontrado para este produto.";

/// One entry of the supplier list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplierBlock<'a> {
    pub name: &'a str,
    pub price: &'a str,
    pub region: &'a str,
    pub map_href: &'a str,
    pub website_href: &'a str,
}

/// Extended view of the first supplier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplierDetails<'a> {
    pub name: &'a str,
    pub image_src: String,
    pub description: &'a str,
}

/// What the modal shows for one product link click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalView<'a> {
    Suppliers {
        product: &'a str,
        blocks: Vec<SupplierBlock<'a>>,
        details: SupplierDetails<'a>,
    },
    /// Unknown product or one without suppliers. The modal still opens.
    NotFound { product: &'a str },
}

impl ModalView<'_> {
    pub fn block_count(&self) -> usize {
        match self {
            ModalView::Suppliers { blocks, .. } => blocks.len(),
            ModalView::NotFound { .. } => 0,
        }
    }
}

/// Product -> suppliers lookup with the catalog injected at construction.
#[derive(Debug, Clone)]
pub struct SupplierModal {
    catalog: ProductCatalog,
    lookup_mode: LookupMode,
    asset_base_path: &'static str,
}

impl SupplierModal {
    pub fn new(catalog: ProductCatalog, config: EnvironmentConfig) -> Self {
        Self {
            catalog,
            lookup_mode: LookupMode::default(),
            asset_base_path: config.asset_base_path,
        }
    }

    pub fn with_lookup_mode(mut self, lookup_mode: LookupMode) -> Self {
        self.lookup_mode = lookup_mode;
        self
    }

    pub fn view_for<'a>(&'a self, product: &'a str) -> ModalView<'a> {
        let suppliers = self
            .catalog
            .lookup(product, self.lookup_mode)
            .unwrap_or_default();

        let Some(first) = suppliers.first() else {
            return ModalView::NotFound { product };
        };

        ModalView::Suppliers {
            product,
            blocks: suppliers.iter().map(block).collect(),
            details: self.details(first),
        }
    }

    fn details<'a>(&self, supplier: &'a Supplier) -> SupplierDetails<'a> {
        let image_src = normalize_src(&supplier.image_path, self.asset_base_path)
            .unwrap_or_else(|| supplier.image_path.clone());
        SupplierDetails {
            name: &supplier.name,
            image_src,
            description: &supplier.description,
        }
    }
}

fn block(supplier: &Supplier) -> SupplierBlock<'_> {
    SupplierBlock {
        name: &supplier.name,
        price: &supplier.price,
        region: &supplier.region,
        map_href: &supplier.address_link,
        website_href: &supplier.website,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modal(hostname: &str) -> SupplierModal {
        SupplierModal::new(
            ProductCatalog::bundled().unwrap(),
            EnvironmentConfig::resolve(hostname),
        )
    }

    #[test]
    fn known_product_renders_one_block_per_supplier() {
        let modal = modal("techsuppliers.onrender.com");
        let view = modal.view_for("Notebooks");
        assert_eq!(view.block_count(), 3);

        let ModalView::Suppliers { blocks, details, .. } = view else {
            panic!("expected suppliers");
        };
        assert_eq!(blocks[0].name, "InfoMax Distribuidora");
        assert_eq!(blocks[2].name, "Sul Hardware");
        assert_eq!(details.name, "InfoMax Distribuidora");
        assert_eq!(details.image_src, "/img/fornecedores/infomax.png");
        assert!(details.description.starts_with("Distribuidora de notebooks"));
    }

    #[test]
    fn details_use_development_path_verbatim() {
        let modal = modal("localhost");
        let ModalView::Suppliers { details, .. } = modal.view_for("Notebooks") else {
            panic!("expected suppliers");
        };
        assert_eq!(details.image_src, "img/fornecedores/infomax.png");
    }

    #[test]
    fn unknown_product_is_not_found() {
        let modal = modal("localhost");
        assert_eq!(
            modal.view_for("Tablets"),
            ModalView::NotFound { product: "Tablets" }
        );
    }

    #[test]
    fn product_without_suppliers_is_not_found() {
        let modal = modal("localhost");
        assert_eq!(modal.view_for("Switches").block_count(), 0);
        assert!(matches!(
            modal.view_for("Switches"),
            ModalView::NotFound { .. }
        ));
    }

    #[test]
    fn exact_lookup_by_default() {
        let modal = modal("localhost");
        assert!(matches!(
            modal.view_for(" notebooks"),
            ModalView::NotFound { .. }
        ));
    }

    #[test]
    fn normalized_lookup_is_opt_in() {
        let modal = modal("localhost").with_lookup_mode(LookupMode::Normalized);
        assert_eq!(modal.view_for(" notebooks ").block_count(), 3);
    }
}
