pub mod branding;
pub mod floating_actions;
pub mod left;
pub mod menu;

pub use floating_actions::FloatingActionButtons;
pub use left::SidebarToggle;
