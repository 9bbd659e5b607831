//! Static navigation configuration.
//!
//! The menu, the profile dropdown and the seed notifications are all described
//! by small JSON documents that ship with the site. This module parses and
//! validates them.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Layout direction of the menu.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Sidebar on the left of the page (default).
    #[default]
    Vertical,
    /// Bar across the top of the page. Unrecognised values land here too.
    #[serde(other)]
    Horizontal,
}

impl Orientation {
    /// Whether the menu can collapse to an icon rail.
    #[must_use]
    pub const fn is_collapsible(self) -> bool {
        matches!(self, Self::Vertical)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertical => write!(f, "vertical"),
            Self::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// Icons a menu item may reference by name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum IconName {
    /// House.
    #[default]
    Home,
    /// Circled "i".
    Info,
    /// Envelope.
    Mail,
    /// Briefcase.
    Briefcase,
    /// Open book.
    BookOpen,
    /// Circled question mark.
    HelpCircle,
    /// Gear.
    Settings,
    /// Dashboard tiles.
    Layout,
    /// Speech bubble.
    MessageCircle,
    /// Checked box.
    CheckSquare,
}

impl IconName {
    /// Every known icon, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Home,
        Self::Info,
        Self::Mail,
        Self::Briefcase,
        Self::BookOpen,
        Self::HelpCircle,
        Self::Settings,
        Self::Layout,
        Self::MessageCircle,
        Self::CheckSquare,
    ];

    /// Resolve an icon by its configured name, falling back to [`IconName::Home`].
    #[must_use]
    pub fn from_name(name: Option<&str>) -> Self {
        let Some(name) = name else {
            return Self::Home;
        };
        Self::ALL
            .into_iter()
            .find(|icon| icon.as_str() == name)
            .unwrap_or(Self::Home)
    }

    /// The configuration name of this icon.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Info => "Info",
            Self::Mail => "Mail",
            Self::Briefcase => "Briefcase",
            Self::BookOpen => "BookOpen",
            Self::HelpCircle => "HelpCircle",
            Self::Settings => "Settings",
            Self::Layout => "Layout",
            Self::MessageCircle => "MessageCircle",
            Self::CheckSquare => "CheckSquare",
        }
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A link inside a submenu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmenuItem {
    /// Link target.
    pub url: String,
    /// Link text.
    pub label: String,
}

/// A top-level menu entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItem {
    /// Link target; also identifies the entry in the open-submenu state.
    pub url: String,
    /// Display label.
    pub label: String,
    /// Icon name, see [`IconName`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Nested links.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submenu: Vec<SubmenuItem>,
}

impl MenuItem {
    /// Whether this entry opens a submenu. An empty submenu list counts as none.
    #[must_use]
    pub fn has_submenu(&self) -> bool {
        !self.submenu.is_empty()
    }

    /// The resolved icon for this entry.
    #[must_use]
    pub fn icon(&self) -> IconName {
        IconName::from_name(self.icon.as_deref())
    }
}

/// The whole menu definition (`menu.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuConfig {
    /// Layout direction.
    #[serde(default)]
    pub orientation: Orientation,
    /// Top-level entries in display order.
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl MenuConfig {
    /// Parse and validate a menu definition.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!(
            orientation = %config.orientation,
            items = config.items.len(),
            "Loaded menu configuration"
        );
        Ok(config)
    }

    /// Check that top-level URLs are unique and that every label is non-empty.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if item.url.trim().is_empty() {
                return Err(Error::InvalidConfig(format!(
                    "menu item '{}' has an empty URL",
                    item.label
                )));
            }
            if item.label.trim().is_empty() {
                return Err(Error::EmptyLabel(item.url.clone()));
            }
            if !seen.insert(item.url.as_str()) {
                return Err(Error::DuplicateMenuUrl(item.url.clone()));
            }
            for sub in &item.submenu {
                if sub.label.trim().is_empty() {
                    return Err(Error::EmptyLabel(sub.url.clone()));
                }
            }
            if let Some(name) = item.icon.as_deref()
                && !IconName::ALL.iter().any(|icon| icon.as_str() == name)
            {
                warn!(icon = name, url = %item.url, "Menu item references an unknown icon");
            }
        }
        Ok(())
    }

    /// Look up a top-level entry by URL.
    #[must_use]
    pub fn item(&self, url: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.url == url)
    }
}

/// Label that turns a profile entry into a logout action.
pub const LOGOUT_LABEL: &str = "Logout";

/// What a profile dropdown entry does when chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileAction<'a> {
    /// Follow a link.
    Navigate(&'a str),
    /// Log the user out.
    Logout,
}

/// An entry in the profile dropdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileItem {
    /// Display label.
    pub label: String,
    /// Link target (ignored for the logout entry).
    #[serde(default)]
    pub url: String,
}

impl ProfileItem {
    /// The action this entry performs.
    #[must_use]
    pub fn action(&self) -> ProfileAction<'_> {
        if self.label == LOGOUT_LABEL {
            ProfileAction::Logout
        } else {
            ProfileAction::Navigate(&self.url)
        }
    }
}

/// The signed-in user's card (`profile.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileConfig {
    /// User's display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Job title shown under the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    /// Dropdown entries.
    #[serde(default)]
    pub items: Vec<ProfileItem>,
}

impl ProfileConfig {
    /// Parse and validate a profile definition.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        if let Some(item) = config.items.iter().find(|it| it.label.trim().is_empty()) {
            return Err(Error::EmptyLabel(item.url.clone()));
        }
        debug!(items = config.items.len(), "Loaded profile configuration");
        Ok(config)
    }

    /// Name to display, `"User"` when none is configured.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "User",
        }
    }

    /// Designation to display, empty when none is configured.
    #[must_use]
    pub fn display_designation(&self) -> &str {
        self.designation.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_MENU: &str = r#"{
        "orientation": "vertical",
        "items": [
            { "url": "/", "label": "Home", "icon": "Home" },
            { "url": "/services", "label": "Services", "icon": "Briefcase",
              "submenu": [
                { "url": "/services/web", "label": "Web" },
                { "url": "/services/mobile", "label": "Mobile" }
              ] },
            { "url": "/blog", "label": "Blog", "icon": "Rocket", "submenu": [] }
        ]
    }"#;

    #[test]
    fn test_parse_sample_menu() {
        let menu = MenuConfig::from_json(SAMPLE_MENU).unwrap();
        assert_eq!(menu.orientation, Orientation::Vertical);
        assert_eq!(menu.items.len(), 3);
        assert!(menu.items[1].has_submenu());
        assert_eq!(menu.items[1].submenu[1].label, "Mobile");
    }

    #[test]
    fn test_empty_submenu_is_not_a_submenu() {
        let menu = MenuConfig::from_json(SAMPLE_MENU).unwrap();
        assert!(!menu.item("/blog").unwrap().has_submenu());
    }

    #[test]
    fn test_missing_fields_default() {
        let menu = MenuConfig::from_json("{}").unwrap();
        assert_eq!(menu.orientation, Orientation::Vertical);
        assert!(menu.items.is_empty());
    }

    #[test]
    fn test_horizontal_orientation() {
        let menu = MenuConfig::from_json(r#"{ "orientation": "horizontal" }"#).unwrap();
        assert_eq!(menu.orientation, Orientation::Horizontal);
    }

    #[test]
    fn test_unknown_orientation_is_horizontal() {
        let json = r#"{ "orientation": "top", "items": [
            { "url": "/", "label": "Home" },
            { "url": "/about", "label": "About" }
        ] }"#;
        let menu = MenuConfig::from_json(json).unwrap();
        assert_eq!(menu.orientation, Orientation::Horizontal);
        assert_eq!(menu.items.len(), 2);
        assert_eq!(menu.items[1].label, "About");
    }

    #[test]
    fn test_only_vertical_collapses() {
        assert!(Orientation::Vertical.is_collapsible());
        assert!(!Orientation::Horizontal.is_collapsible());
    }

    #[test]
    fn test_unknown_icon_falls_back_to_home() {
        let menu = MenuConfig::from_json(SAMPLE_MENU).unwrap();
        assert_eq!(menu.item("/blog").unwrap().icon(), IconName::Home);
        assert_eq!(menu.item("/services").unwrap().icon(), IconName::Briefcase);
        assert_eq!(IconName::from_name(None), IconName::Home);
    }

    #[test]
    fn test_icon_names_round_trip_through_from_name() {
        for icon in IconName::ALL {
            assert_eq!(IconName::from_name(Some(icon.as_str())), icon);
        }
    }

    #[test]
    fn test_duplicate_url_rejected() {
        let json = r#"{ "items": [
            { "url": "/a", "label": "A" },
            { "url": "/a", "label": "Again" }
        ] }"#;
        let err = MenuConfig::from_json(json).unwrap_err();
        assert!(matches!(err, Error::DuplicateMenuUrl(url) if url == "/a"));
    }

    #[test]
    fn test_empty_label_rejected() {
        let json = r#"{ "items": [ { "url": "/a", "label": "  " } ] }"#;
        assert!(matches!(
            MenuConfig::from_json(json),
            Err(Error::EmptyLabel(_))
        ));

        let json = r#"{ "items": [ { "url": "/a", "label": "A",
            "submenu": [ { "url": "/a/b", "label": "" } ] } ] }"#;
        assert!(matches!(
            MenuConfig::from_json(json),
            Err(Error::EmptyLabel(url)) if url == "/a/b"
        ));
    }

    #[test]
    fn test_empty_url_rejected() {
        let json = r#"{ "items": [ { "url": "", "label": "Nowhere" } ] }"#;
        assert!(matches!(
            MenuConfig::from_json(json),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            MenuConfig::from_json("{ items: "),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn test_profile_defaults() {
        let profile = ProfileConfig::from_json(r#"{ "items": [] }"#).unwrap();
        assert_eq!(profile.display_name(), "User");
        assert_eq!(profile.display_designation(), "");
    }

    #[test]
    fn test_profile_actions() {
        let json = r#"{
            "name": "Jane Doe",
            "designation": "Editor",
            "items": [
                { "label": "My Account", "url": "/account" },
                { "label": "Logout", "url": "/logout" }
            ]
        }"#;
        let profile = ProfileConfig::from_json(json).unwrap();
        assert_eq!(profile.display_name(), "Jane Doe");
        assert_eq!(profile.display_designation(), "Editor");
        assert_eq!(profile.items[0].action(), ProfileAction::Navigate("/account"));
        assert_eq!(profile.items[1].action(), ProfileAction::Logout);
    }

    #[test]
    fn test_profile_empty_item_label_rejected() {
        let json = r#"{ "items": [
            { "label": "My Account", "url": "/account" },
            { "label": " ", "url": "/settings" }
        ] }"#;
        assert!(matches!(
            ProfileConfig::from_json(json),
            Err(Error::EmptyLabel(url)) if url == "/settings"
        ));
    }

    #[test]
    fn test_profile_empty_name_uses_fallback() {
        let profile = ProfileConfig::from_json(r#"{ "name": "" }"#).unwrap();
        assert_eq!(profile.display_name(), "User");
    }
}
