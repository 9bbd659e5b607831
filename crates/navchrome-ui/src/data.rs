//! Navigation data embedded at compile time.

use navchrome_core::{MenuConfig, NotificationList, ProfileConfig};

/// Raw `menu.json`.
pub const MENU_JSON: &str = include_str!("../data/menu.json");
/// Raw `profile.json`.
pub const PROFILE_JSON: &str = include_str!("../data/profile.json");
/// Raw `notifications.json`.
pub const NOTIFICATIONS_JSON: &str = include_str!("../data/notifications.json");

/// Everything the chrome needs to render.
#[derive(Debug, Clone, Default)]
pub struct NavData {
    /// Menu definition.
    pub menu: MenuConfig,
    /// Profile card and dropdown entries.
    pub profile: ProfileConfig,
    /// Initial notifications.
    pub notifications: NotificationList,
}

impl NavData {
    /// Parse the embedded data files.
    ///
    /// A broken file is logged and replaced by its empty default so the rest of
    /// the page still renders.
    pub fn load() -> Self {
        let menu = MenuConfig::from_json(MENU_JSON).unwrap_or_else(|e| {
            leptos::logging::error!("Failed to load menu.json: {}", e);
            MenuConfig::default()
        });
        let profile = ProfileConfig::from_json(PROFILE_JSON).unwrap_or_else(|e| {
            leptos::logging::error!("Failed to load profile.json: {}", e);
            ProfileConfig::default()
        });
        let notifications = NotificationList::from_json(NOTIFICATIONS_JSON).unwrap_or_else(|e| {
            leptos::logging::error!("Failed to load notifications.json: {}", e);
            NotificationList::default()
        });

        leptos::logging::log!(
            "Navigation loaded: {} menu items ({}), {} notifications",
            menu.items.len(),
            menu.orientation,
            notifications.len()
        );

        Self {
            menu,
            profile,
            notifications,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_files_parse() {
        assert!(MenuConfig::from_json(MENU_JSON).is_ok());
        assert!(ProfileConfig::from_json(PROFILE_JSON).is_ok());
        assert!(NotificationList::from_json(NOTIFICATIONS_JSON).is_ok());
    }

    #[test]
    fn test_load_uses_embedded_data() {
        let data = NavData::load();
        assert!(!data.menu.items.is_empty());
        assert_eq!(data.profile.display_name(), "John Doe");
        assert_eq!(data.notifications.len(), 3);
    }
}
