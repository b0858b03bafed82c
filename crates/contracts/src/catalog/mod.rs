//! Product catalog: product name -> ordered list of suppliers.
//!
//! The catalog is plain data. The page bundles one copy (`data/catalog.json`)
//! but any source that yields the same JSON shape can be injected instead.

mod supplier;

pub use supplier::Supplier;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const BUNDLED_CATALOG_JSON: &str = include_str!("../../data/catalog.json");

/// How a product name is matched against catalog keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupMode {
    /// Byte-for-byte match with the visible link text.
    #[default]
    Exact,
    /// Trimmed and case-folded on both sides.
    Normalized,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCatalog {
    products: BTreeMap<String, Vec<Supplier>>,
}

impl ProductCatalog {
    pub fn new(products: BTreeMap<String, Vec<Supplier>>) -> Self {
        Self { products }
    }

    /// Parse a catalog from its JSON representation.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse product catalog JSON")
    }

    /// Catalog shipped with the page.
    pub fn bundled() -> anyhow::Result<Self> {
        Self::from_json(BUNDLED_CATALOG_JSON).context("Bundled catalog is invalid")
    }

    /// Suppliers for `product`, `None` when the product is unknown.
    pub fn lookup(&self, product: &str, mode: LookupMode) -> Option<&[Supplier]> {
        match mode {
            LookupMode::Exact => self.products.get(product).map(Vec::as_slice),
            LookupMode::Normalized => {
                let wanted = normalize_key(product);
                self.products
                    .iter()
                    .find(|(key, _)| normalize_key(key) == wanted)
                    .map(|(_, suppliers)| suppliers.as_slice())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn normalize_key(value: &str) -> String {
    value.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supplier(name: &str) -> Supplier {
        Supplier {
            name: name.to_string(),
            price: "R$ 10,00".to_string(),
            region: "SP".to_string(),
            address_link: "https://maps.example/q".to_string(),
            website: "https://example.com".to_string(),
            image_path: "img/x.png".to_string(),
            description: "desc".to_string(),
        }
    }

    #[test]
    fn bundled_catalog_parses() {
        let catalog = ProductCatalog::bundled().unwrap();
        assert!(!catalog.is_empty());
        let notebooks = catalog.lookup("Notebooks", LookupMode::Exact).unwrap();
        assert_eq!(notebooks.len(), 3);
        assert_eq!(notebooks[0].name, "InfoMax Distribuidora");
    }

    #[test]
    fn bundled_catalog_has_products_without_suppliers() {
        let catalog = ProductCatalog::bundled().unwrap();
        let switches = catalog.lookup("Switches", LookupMode::Exact).unwrap();
        assert!(switches.is_empty());
    }

    #[test]
    fn exact_lookup_is_case_and_whitespace_sensitive() {
        let mut products = BTreeMap::new();
        products.insert("Monitores".to_string(), vec![supplier("A")]);
        let catalog = ProductCatalog::new(products);

        assert!(catalog.lookup("Monitores", LookupMode::Exact).is_some());
        assert!(catalog.lookup("monitores", LookupMode::Exact).is_none());
        assert!(catalog.lookup(" Monitores ", LookupMode::Exact).is_none());
    }

    #[test]
    fn normalized_lookup_trims_and_folds_case() {
        let mut products = BTreeMap::new();
        products.insert("Memória RAM".to_string(), vec![supplier("A"), supplier("B")]);
        let catalog = ProductCatalog::new(products);

        let found = catalog
            .lookup("  memória ram\n", LookupMode::Normalized)
            .unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn supplier_uses_camel_case_field_names() {
        let json = r#"{"Mouses":[{"name":"P","price":"R$ 1,00","region":"MG",
            "addressLink":"https://maps/x","website":"https://p","imagePath":"img/p.png",
            "description":"d"}]}"#;
        let catalog = ProductCatalog::from_json(json).unwrap();
        let mouses = catalog.lookup("Mouses", LookupMode::Exact).unwrap();
        assert_eq!(mouses[0].address_link, "https://maps/x");
        assert_eq!(mouses[0].image_path, "img/p.png");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ProductCatalog::from_json("[1, 2").is_err());
    }
}
