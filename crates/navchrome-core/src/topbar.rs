//! Geometry and labels for the top bar that sits beside the sidebar.

/// Sidebar offset used by a fixed top bar while the sidebar is collapsed.
pub const FIXED_COLLAPSED_OFFSET_PX: u32 = 150;
/// Sidebar offset used by a fixed top bar while the sidebar is expanded.
pub const FIXED_EXPANDED_OFFSET_PX: u32 = 250;

/// Resolved position of the top bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopBarLayout {
    /// Fixed to the viewport, shifted right past the sidebar.
    Fixed {
        /// Left offset in pixels.
        offset_px: u32,
    },
    /// In flow, full width, sticky at the top.
    Sticky,
}

impl TopBarLayout {
    /// Pick the layout for a bar that is (or is not) fixed.
    #[must_use]
    pub const fn resolve(fixed: bool, collapsed: bool) -> Self {
        if !fixed {
            return Self::Sticky;
        }
        let offset_px = if collapsed {
            FIXED_COLLAPSED_OFFSET_PX
        } else {
            FIXED_EXPANDED_OFFSET_PX
        };
        Self::Fixed { offset_px }
    }

    /// Inline style for the bar.
    #[must_use]
    pub fn style(self) -> String {
        match self {
            Self::Fixed { offset_px } => format!(
                "position: fixed; top: 0; left: {offset_px}px; width: calc(100vw - {offset_px}px)"
            ),
            Self::Sticky => "position: sticky; top: 0; width: 100%".to_string(),
        }
    }
}

/// Labels for the sidebar toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleLabels {
    /// `aria-pressed` value.
    pub aria_pressed: &'static str,
    /// `aria-label` text.
    pub aria_label: &'static str,
    /// Screen-reader-only text.
    pub screen_reader: &'static str,
    /// Visible glyph.
    pub glyph: &'static str,
}

impl ToggleLabels {
    /// Labels for the current collapsed state.
    #[must_use]
    pub const fn for_state(collapsed: bool) -> Self {
        if collapsed {
            Self {
                aria_pressed: "true",
                aria_label: "Expand menu",
                screen_reader: "Expand side menu",
                glyph: "x",
            }
        } else {
            Self {
                aria_pressed: "false",
                aria_label: "Collapse menu",
                screen_reader: "Collapse side menu",
                glyph: "|||",
            }
        }
    }
}
