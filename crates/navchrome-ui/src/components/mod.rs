//! UI components for `Navchrome`.

pub mod icons;
pub mod menu;
pub mod menu_wrapper;
pub mod notification;
pub mod profile_dropdown;
pub mod submenu_portal;
pub mod topbar;

pub use icons::{Icon, menu_icon_path, paths as icon_paths};
pub use menu::{Menu, MenuHandle, SubmenuLinks};
pub use menu_wrapper::{MenuWrapper, PageLayout, PageMain};
pub use notification::NotificationDropdown;
pub use profile_dropdown::ProfileDropdown;
pub use submenu_portal::SubmenuPortal;
pub use topbar::TopBar;
