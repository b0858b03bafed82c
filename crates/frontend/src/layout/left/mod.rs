pub mod sidebar;

pub use sidebar::SidebarToggle;
