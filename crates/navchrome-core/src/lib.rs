//! `Navchrome` Core Library
//!
//! This crate provides the DOM-free parts of the site navigation chrome:
//! - Menu, profile and notification configuration loading
//! - Submenu open/close state for horizontal, expanded and collapsed menus
//! - Placement of the floating submenu beside a collapsed sidebar
//! - Dropdown and top bar state shared by the header widgets
//!
//! # Error Handling
//!
//! Configuration loading returns [`Result`] with the crate's [`Error`] type.
//!
//! ```rust,ignore
//! use navchrome_core::{MenuConfig, Result};
//!
//! fn load() -> Result<MenuConfig> {
//!     MenuConfig::from_json(include_str!("menu.json"))
//! }
//! ```

pub mod config;
pub mod dropdown;
pub mod error;
pub mod menu;
pub mod notification;
pub mod placement;
pub mod topbar;

pub use config::{
    IconName, LOGOUT_LABEL, MenuConfig, MenuItem, Orientation, ProfileAction, ProfileConfig,
    ProfileItem, SubmenuItem,
};
pub use dropdown::DropdownState;
pub use error::{Error, Result};
pub use menu::{
    COLLAPSED_WIDTH_PX, EXPANDED_WIDTH_PX, MenuMode, MenuState, TRANSITION_RESUME_DELAY_MS,
};
pub use notification::{NotificationItem, NotificationList};
pub use placement::{
    AnchorSource, PositionTracker, Rect, SUBMENU_WIDTH_PX, SUBMENU_Z_INDEX, SubmenuPlacement,
};
pub use topbar::{TopBarLayout, ToggleLabels};
