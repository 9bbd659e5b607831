//! SVG icons used by the navigation chrome.

use leptos::prelude::*;
use navchrome_core::IconName;

/// Inline SVG icon drawn from a single path.
#[component]
pub fn Icon(
    /// SVG path data, see [`paths`].
    path: &'static str,
    /// Edge length in pixels.
    #[prop(default = 20)]
    size: u32,
    /// Extra classes (e.g. rotation).
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <svg
            class=move || format!("icon {}", class.get().unwrap_or_default())
            viewBox="0 0 24 24"
            width=size
            height=size
            fill="currentColor"
            aria-hidden="true"
        >
            <path d=path />
        </svg>
    }
}

/// Path data for a configured menu icon.
pub const fn menu_icon_path(icon: IconName) -> &'static str {
    match icon {
        IconName::Home => paths::HOME,
        IconName::Info => paths::INFO,
        IconName::Mail => paths::MAIL,
        IconName::Briefcase => paths::BRIEFCASE,
        IconName::BookOpen => paths::BOOK_OPEN,
        IconName::HelpCircle => paths::HELP_CIRCLE,
        IconName::Settings => paths::SETTINGS,
        IconName::Layout => paths::LAYOUT,
        IconName::MessageCircle => paths::MESSAGE_CIRCLE,
        IconName::CheckSquare => paths::CHECK_SQUARE,
    }
}

/// Icon path data (24x24 viewbox).
pub mod paths {
    /// Home icon.
    pub const HOME: &str = "M10 20v-6h4v6h5v-8h3L12 3 2 12h3v8z";
    /// Info icon.
    pub const INFO: &str = "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm1 15h-2v-6h2v6zm0-8h-2V7h2v2z";
    /// Mail icon.
    pub const MAIL: &str = "M20 4H4c-1.1 0-1.99.9-1.99 2L2 18c0 1.1.9 2 2 2h16c1.1 0 2-.9 2-2V6c0-1.1-.9-2-2-2zm0 4l-8 5-8-5V6l8 5 8-5v2z";
    /// Briefcase icon.
    pub const BRIEFCASE: &str = "M20 6h-4V4c0-1.11-.89-2-2-2h-4c-1.11 0-2 .89-2 2v2H4c-1.11 0-1.99.89-1.99 2L2 19c0 1.11.89 2 2 2h16c1.11 0 2-.89 2-2V8c0-1.11-.89-2-2-2zm-6 0h-4V4h4v2z";
    /// Open book icon.
    pub const BOOK_OPEN: &str = "M18 2H6c-1.1 0-2 .9-2 2v16c0 1.1.9 2 2 2h12c1.1 0 2-.9 2-2V4c0-1.1-.9-2-2-2zM6 4h5v8l-2.5-1.5L6 12V4z";
    /// Help icon.
    pub const HELP_CIRCLE: &str = "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm1 17h-2v-2h2v2zm2.07-7.75l-.9.92C13.45 12.9 13 13.5 13 15h-2v-.5c0-1.1.45-2.1 1.17-2.83l1.24-1.26c.37-.36.59-.86.59-1.41 0-1.1-.9-2-2-2s-2 .9-2 2H8c0-2.21 1.79-4 4-4s4 1.79 4 4c0 .88-.36 1.68-.93 2.25z";
    /// Settings icon.
    pub const SETTINGS: &str = "M19.14 12.94c.04-.31.06-.63.06-.94 0-.31-.02-.63-.06-.94l2.03-1.58c.18-.14.23-.41.12-.61l-1.92-3.32c-.12-.22-.37-.29-.59-.22l-2.39.96c-.5-.38-1.03-.7-1.62-.94l-.36-2.54c-.04-.24-.24-.41-.48-.41h-3.84c-.24 0-.43.17-.47.41l-.36 2.54c-.59.24-1.13.57-1.62.94l-2.39-.96c-.22-.08-.47 0-.59.22L2.74 8.87c-.12.21-.08.47.12.61l2.03 1.58c-.04.31-.06.63-.06.94s.02.63.06.94l-2.03 1.58c-.18.14-.23.41-.12.61l1.92 3.32c.12.22.37.29.59.22l2.39-.96c.5.38 1.03.7 1.62.94l.36 2.54c.05.24.24.41.48.41h3.84c.24 0 .44-.17.47-.41l.36-2.54c.59-.24 1.13-.56 1.62-.94l2.39.96c.22.08.47 0 .59-.22l1.92-3.32c.12-.22.07-.47-.12-.61l-2.01-1.58zM12 15.6c-1.98 0-3.6-1.62-3.6-3.6s1.62-3.6 3.6-3.6 3.6 1.62 3.6 3.6-1.62 3.6-3.6 3.6z";
    /// Dashboard layout icon.
    pub const LAYOUT: &str = "M3 13h8V3H3v10zm0 8h8v-6H3v6zm10 0h8V11h-8v10zm0-18v6h8V3h-8z";
    /// Chat bubble icon.
    pub const MESSAGE_CIRCLE: &str = "M20 2H4c-1.1 0-1.99.9-1.99 2L2 22l4-4h14c1.1 0 2-.9 2-2V4c0-1.1-.9-2-2-2z";
    /// Checked box icon.
    pub const CHECK_SQUARE: &str = "M19 3H5c-1.11 0-2 .9-2 2v14c0 1.1.89 2 2 2h14c1.11 0 2-.9 2-2V5c0-1.1-.89-2-2-2zm-9 14l-5-5 1.41-1.41L10 14.17l7.59-7.59L19 8l-9 9z";
    /// Chevron pointing down.
    pub const CHEVRON_DOWN: &str = "M16.59 8.59L12 13.17 7.41 8.59 6 10l6 6 6-6z";
    /// Chevron pointing right.
    pub const CHEVRON_RIGHT: &str = "M10 6L8.59 7.41 13.17 12l-4.58 4.59L10 18l6-6z";
    /// Bell icon.
    pub const BELL: &str = "M12 22c1.1 0 2-.9 2-2h-4c0 1.1.89 2 2 2zm6-6v-5c0-3.07-1.64-5.64-4.5-6.32V4c0-.83-.67-1.5-1.5-1.5s-1.5.67-1.5 1.5v.68C7.63 5.36 6 7.92 6 11v5l-2 2v1h16v-1l-2-2z";
    /// Close (X) icon.
    pub const CLOSE: &str = "M19 6.41L17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z";
    /// User icon.
    pub const USER: &str = "M12 12c2.21 0 4-1.79 4-4s-1.79-4-4-4-4 1.79-4 4 1.79 4 4 4zm0 2c-2.67 0-8 1.34-8 4v2h16v-2c0-2.66-5.33-4-8-4z";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_icon_has_a_path() {
        for icon in IconName::ALL {
            assert!(menu_icon_path(icon).starts_with('M'), "{icon} has no path");
        }
    }

    #[test]
    fn test_unknown_icon_renders_home() {
        assert_eq!(menu_icon_path(IconName::from_name(Some("Rocket"))), paths::HOME);
    }
}
