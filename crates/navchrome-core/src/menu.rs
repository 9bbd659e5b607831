//! Submenu open/close state and the layout decisions that follow from it.
//!
//! The menu renders in one of three modes. Only one submenu may be open at a
//! time, keyed by the top-level item URL.

use tracing::debug;

use crate::config::Orientation;

/// Width of the collapsed sidebar in pixels.
pub const COLLAPSED_WIDTH_PX: u32 = 80;
/// Width of the expanded sidebar in pixels.
pub const EXPANDED_WIDTH_PX: u32 = 250;
/// Delay before transitions come back after an immediate close.
pub const TRANSITION_RESUME_DELAY_MS: u32 = 50;

/// How the menu is currently laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMode {
    /// Top bar; submenus drop down below their item.
    Horizontal,
    /// Full-width sidebar; submenus expand inline.
    VerticalExpanded,
    /// Icon-only sidebar; submenus float beside their item.
    VerticalCollapsed,
}

impl MenuMode {
    /// Derive the mode from configuration and the collapsed flag.
    ///
    /// A horizontal menu never collapses.
    #[must_use]
    pub const fn resolve(orientation: Orientation, collapsed: bool) -> Self {
        match (orientation, collapsed) {
            (Orientation::Horizontal, _) => Self::Horizontal,
            (Orientation::Vertical, false) => Self::VerticalExpanded,
            (Orientation::Vertical, true) => Self::VerticalCollapsed,
        }
    }

    /// Whether this is one of the sidebar modes.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        !matches!(self, Self::Horizontal)
    }

    /// Sidebar width, `None` when the menu spans the full width.
    #[must_use]
    pub const fn width_px(self) -> Option<u32> {
        match self {
            Self::Horizontal => None,
            Self::VerticalExpanded => Some(EXPANDED_WIDTH_PX),
            Self::VerticalCollapsed => Some(COLLAPSED_WIDTH_PX),
        }
    }

    /// Inline style for the `<aside>` container.
    ///
    /// Expanded sidebars scroll within the viewport; collapsed ones must not clip
    /// their floating submenus.
    #[must_use]
    pub fn container_style(self) -> String {
        match self {
            Self::Horizontal => "width: 100%".to_string(),
            Self::VerticalExpanded => {
                format!("width: {EXPANDED_WIDTH_PX}px; height: 100vh; overflow-y: auto")
            }
            Self::VerticalCollapsed => {
                format!("width: {COLLAPSED_WIDTH_PX}px; height: auto; overflow: visible")
            }
        }
    }

    /// CSS modifier class for the mode.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Horizontal => "menu--horizontal",
            Self::VerticalExpanded => "menu--expanded",
            Self::VerticalCollapsed => "menu--collapsed",
        }
    }

    /// Whether the logo header is shown.
    #[must_use]
    pub const fn shows_logo(self) -> bool {
        self.is_vertical()
    }
}

/// Which submenu is open and whether its transitions are suppressed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    open_submenu: Option<String>,
    transitions_suppressed: bool,
}

impl MenuState {
    /// Create a state with everything closed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            open_submenu: None,
            transitions_suppressed: false,
        }
    }

    /// URL of the open submenu, if any.
    #[must_use]
    pub fn open_submenu(&self) -> Option<&str> {
        self.open_submenu.as_deref()
    }

    /// Whether the submenu keyed by `url` is open.
    #[must_use]
    pub fn is_open(&self, url: &str) -> bool {
        self.open_submenu.as_deref() == Some(url)
    }

    /// Whether CSS transitions are currently disabled.
    #[must_use]
    pub const fn transitions_suppressed(&self) -> bool {
        self.transitions_suppressed
    }

    /// Open `url`, or close it when it is already open.
    pub fn toggle(&mut self, url: &str) {
        if self.is_open(url) {
            self.open_submenu = None;
        } else {
            self.open_submenu = Some(url.to_string());
        }
        debug!(open = ?self.open_submenu, "Toggled submenu");
    }

    /// Pointer entered an item. Only opens in collapsed mode.
    pub fn hover_enter(&mut self, url: &str, mode: MenuMode) {
        if mode == MenuMode::VerticalCollapsed {
            self.open_submenu = Some(url.to_string());
        }
    }

    /// Pointer left an item. Only closes in collapsed mode.
    pub fn hover_leave(&mut self, mode: MenuMode) {
        if mode == MenuMode::VerticalCollapsed {
            self.open_submenu = None;
        }
    }

    /// React to the sidebar collapsing or expanding.
    pub fn set_collapsed(&mut self, collapsed: bool) {
        if collapsed && self.open_submenu.take().is_some() {
            debug!("Sidebar collapsed, closed open submenu");
        }
    }

    /// Close any open submenu without animating.
    ///
    /// Returns `true` when something was closed; the caller must then call
    /// [`MenuState::resume_transitions`] after [`TRANSITION_RESUME_DELAY_MS`].
    pub fn close_immediate(&mut self) -> bool {
        if self.open_submenu.is_none() {
            return false;
        }
        self.transitions_suppressed = true;
        self.open_submenu = None;
        true
    }

    /// Re-enable transitions after an immediate close.
    pub fn resume_transitions(&mut self) {
        self.transitions_suppressed = false;
    }

    /// Transition class for submenu containers.
    #[must_use]
    pub const fn transition_class(&self) -> &'static str {
        if self.transitions_suppressed {
            "transition-none"
        } else {
            "transition-normal"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_resolution() {
        assert_eq!(
            MenuMode::resolve(Orientation::Horizontal, true),
            MenuMode::Horizontal
        );
        assert_eq!(
            MenuMode::resolve(Orientation::Vertical, false),
            MenuMode::VerticalExpanded
        );
        assert_eq!(
            MenuMode::resolve(Orientation::Vertical, true),
            MenuMode::VerticalCollapsed
        );
    }

    #[test]
    fn test_widths() {
        assert_eq!(MenuMode::Horizontal.width_px(), None);
        assert_eq!(MenuMode::VerticalExpanded.width_px(), Some(250));
        assert_eq!(MenuMode::VerticalCollapsed.width_px(), Some(80));
        assert!(MenuMode::VerticalCollapsed.container_style().contains("overflow: visible"));
        assert!(MenuMode::VerticalExpanded.container_style().contains("overflow-y: auto"));
    }

    #[test]
    fn test_logo_only_in_sidebar() {
        assert!(!MenuMode::Horizontal.shows_logo());
        assert!(MenuMode::VerticalCollapsed.shows_logo());
    }

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut state = MenuState::new();
        state.toggle("/services");
        assert!(state.is_open("/services"));
        state.toggle("/services");
        assert_eq!(state.open_submenu(), None);
    }

    #[test]
    fn test_only_one_submenu_open() {
        let mut state = MenuState::new();
        state.toggle("/services");
        state.toggle("/docs");
        assert!(state.is_open("/docs"));
        assert!(!state.is_open("/services"));
    }

    #[test]
    fn test_hover_only_in_collapsed_mode() {
        let mut state = MenuState::new();
        state.hover_enter("/services", MenuMode::VerticalExpanded);
        assert_eq!(state.open_submenu(), None);
        state.hover_enter("/services", MenuMode::Horizontal);
        assert_eq!(state.open_submenu(), None);

        state.hover_enter("/services", MenuMode::VerticalCollapsed);
        assert!(state.is_open("/services"));

        state.hover_leave(MenuMode::VerticalExpanded);
        assert!(state.is_open("/services"));
        state.hover_leave(MenuMode::VerticalCollapsed);
        assert_eq!(state.open_submenu(), None);
    }

    #[test]
    fn test_collapsing_closes_submenu() {
        let mut state = MenuState::new();
        state.toggle("/services");
        state.set_collapsed(false);
        assert!(state.is_open("/services"));
        state.set_collapsed(true);
        assert_eq!(state.open_submenu(), None);
    }

    #[test]
    fn test_close_immediate_noop_when_closed() {
        let mut state = MenuState::new();
        assert!(!state.close_immediate());
        assert!(!state.transitions_suppressed());
    }

    #[test]
    fn test_close_immediate_suppresses_transitions() {
        let mut state = MenuState::new();
        state.toggle("/services");
        assert!(state.close_immediate());
        assert_eq!(state.open_submenu(), None);
        assert!(state.transitions_suppressed());
        assert_eq!(state.transition_class(), "transition-none");

        state.resume_transitions();
        assert!(!state.transitions_suppressed());
        assert_eq!(state.transition_class(), "transition-normal");
    }
}
