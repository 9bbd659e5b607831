//! Theme configuration for `Navchrome`.
//!
//! Slate sidebar, charcoal top bar, light text. Values are exposed as CSS
//! custom properties consumed by `styles/main.css`.

use navchrome_core::{COLLAPSED_WIDTH_PX, EXPANDED_WIDTH_PX, SUBMENU_WIDTH_PX, SUBMENU_Z_INDEX};

/// Color palette.
pub mod colors {
    /// Surface colors.
    pub mod background {
        /// Sidebar and dropdown panels.
        pub const PRIMARY: &str = "#313a46";
        /// Top bar.
        pub const TOPBAR: &str = "#202327";
        /// Page content.
        pub const PAGE: &str = "#fafafa";
        /// Hovered or active menu row.
        pub const MUTED: &str = "#3d4754";
        /// Hovered notification row.
        pub const HOVER: &str = "#374151";
    }

    /// Text colors.
    pub mod text {
        /// Default menu text.
        pub const PRIMARY: &str = "#c3c9d2";
        /// Hovered/active menu text.
        pub const HIGHLIGHT: &str = "#ededed";
        /// Secondary text (times, designations).
        pub const MUTED: &str = "#9ca3af";
        /// Logout hover.
        pub const DANGER: &str = "#f87171";
    }

    /// Border colors.
    pub mod border {
        /// Dropdown and row separators.
        pub const DEFAULT: &str = "#374151";
    }

    /// Badge colors.
    pub mod badge {
        /// Notification count background.
        pub const BACKGROUND: &str = "#f87171";
        /// Notification count text.
        pub const TEXT: &str = "#ffffff";
    }

    /// Shadows.
    pub mod shadow {
        /// Floating panels.
        pub const PANEL: &str = "0 10px 15px -3px rgba(0, 0, 0, 0.3)";
    }
}

/// Typography configuration.
pub mod typography {
    /// Body font stack.
    pub const FONT_FAMILY: &str =
        "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', sans-serif";

    /// Font sizes.
    pub mod sizes {
        /// Badge and metadata text.
        pub const XS: &str = "0.75rem";
        /// Dropdown text.
        pub const SM: &str = "0.875rem";
        /// Menu text.
        pub const MD: &str = "1rem";
        /// Logo.
        pub const LG: &str = "1.125rem";
    }
}

/// Animation/transition configuration.
pub mod animation {
    /// Chevron rotation, dropdown fade.
    pub const FAST: &str = "0.2s ease";
    /// Submenu expansion and row highlight.
    pub const NORMAL: &str = "0.3s ease";
    /// Sidebar width change.
    pub const SLOW: &str = "0.5s ease";
}

/// Generate CSS custom properties for the theme.
pub fn generate_css_variables() -> String {
    format!(
        r":root {{
  /* Surfaces */
  --bg-primary: {bg_primary};
  --bg-topbar: {bg_topbar};
  --bg-page: {bg_page};
  --bg-muted: {bg_muted};
  --bg-hover: {bg_hover};

  /* Text */
  --text-primary: {text_primary};
  --text-highlight: {text_highlight};
  --text-muted: {text_muted};
  --text-danger: {text_danger};

  /* Borders, badges, shadows */
  --border-default: {border_default};
  --badge-bg: {badge_bg};
  --badge-text: {badge_text};
  --shadow-panel: {shadow_panel};

  /* Typography */
  --font-family: {font_family};
  --font-size-xs: {font_xs};
  --font-size-sm: {font_sm};
  --font-size-md: {font_md};
  --font-size-lg: {font_lg};

  /* Geometry */
  --sidebar-collapsed: {collapsed}px;
  --sidebar-expanded: {expanded}px;
  --submenu-width: {submenu_width}px;
  --submenu-z: {submenu_z};

  /* Transitions */
  --transition-fast: {transition_fast};
  --transition-normal: {transition_normal};
  --transition-slow: {transition_slow};
}}",
        bg_primary = colors::background::PRIMARY,
        bg_topbar = colors::background::TOPBAR,
        bg_page = colors::background::PAGE,
        bg_muted = colors::background::MUTED,
        bg_hover = colors::background::HOVER,
        text_primary = colors::text::PRIMARY,
        text_highlight = colors::text::HIGHLIGHT,
        text_muted = colors::text::MUTED,
        text_danger = colors::text::DANGER,
        border_default = colors::border::DEFAULT,
        badge_bg = colors::badge::BACKGROUND,
        badge_text = colors::badge::TEXT,
        shadow_panel = colors::shadow::PANEL,
        font_family = typography::FONT_FAMILY,
        font_xs = typography::sizes::XS,
        font_sm = typography::sizes::SM,
        font_md = typography::sizes::MD,
        font_lg = typography::sizes::LG,
        collapsed = COLLAPSED_WIDTH_PX,
        expanded = EXPANDED_WIDTH_PX,
        submenu_width = SUBMENU_WIDTH_PX,
        submenu_z = SUBMENU_Z_INDEX,
        transition_fast = animation::FAST,
        transition_normal = animation::NORMAL,
        transition_slow = animation::SLOW,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_css_variables() {
        let css = generate_css_variables();
        assert!(css.contains(":root"));
        assert!(css.contains("--bg-primary: #313a46"));
        assert!(css.contains("--sidebar-collapsed: 80px"));
        assert!(css.contains("--sidebar-expanded: 250px"));
        assert!(css.contains("--submenu-width: 224px"));
    }

    #[test]
    fn test_color_values() {
        assert!(colors::background::PRIMARY.starts_with('#'));
        assert!(colors::text::HIGHLIGHT.starts_with('#'));
    }
}
