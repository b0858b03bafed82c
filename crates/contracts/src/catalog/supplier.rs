use serde::{Deserialize, Serialize};

/// A supplier as shown in the modal's details panel.
///
/// The record is static configuration data; the page never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub name: String,

    /// Already formatted for display, e.g. `"R$ 3.499,00"`.
    pub price: String,

    pub region: String,

    #[serde(rename = "addressLink")]
    pub address_link: String,

    pub website: String,

    #[serde(rename = "imagePath")]
    pub image_path: String,

    pub description: String,
}
