pub mod dom;
pub mod environment;
pub mod icons;
pub mod images;
pub mod storage;
pub mod styles;
pub mod theme;
