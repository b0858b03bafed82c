pub mod catalog;
pub mod navigation;
pub mod preferences;
