pub mod mobile_sidebar;
pub mod shell;
pub mod sidebar;
pub mod topbar;

pub use mobile_sidebar::MobileSidebar;
pub use shell::Shell;
pub use sidebar::SidebarContent;
pub use topbar::Topbar;
