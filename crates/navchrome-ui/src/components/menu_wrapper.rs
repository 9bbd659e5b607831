//! Page frame around the menu.
//!
//! Provides the outer layout for either orientation: a full-height column
//! beside the content for a sidebar, or a full-width row above it for a top
//! menu.

use leptos::prelude::*;
use navchrome_core::Orientation;

/// Frame class for an orientation.
pub const fn frame_class(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Vertical => "menu-frame menu-frame--vertical",
        Orientation::Horizontal => "menu-frame menu-frame--horizontal",
    }
}

/// Wraps the menu in the frame for its orientation.
#[component]
pub fn MenuWrapper(
    /// Configured menu orientation.
    orientation: Orientation,
    /// The menu.
    children: Children,
) -> impl IntoView {
    view! {
        <div class=frame_class(orientation)>
            {children()}
        </div>
    }
}

/// Page layout: menu frame, then the top bar and content.
///
/// Vertical menus sit beside the main column; horizontal menus stack above it.
#[component]
pub fn PageLayout(
    /// Configured menu orientation.
    orientation: Orientation,
    /// Content to render: a `MenuWrapper` followed by `PageMain`.
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="page-layout"
            class:page-layout--row=orientation == Orientation::Vertical
        >
            {children()}
        </div>
    }
}

/// Main column holding the top bar and page content.
#[component]
pub fn PageMain(
    /// Top bar and content.
    children: Children,
) -> impl IntoView {
    view! {
        <main class="page-main">
            {children()}
        </main>
    }
}
