//! Top bar beside the sidebar, holding the collapse toggle and header widgets.

use leptos::prelude::*;
use navchrome_core::{ToggleLabels, TopBarLayout};

/// The top bar.
///
/// When `fixed`, the bar is pinned to the viewport and shifted right past the
/// sidebar; otherwise it is sticky and full width. The collapse toggle is only
/// rendered when `on_toggle` is given.
#[component]
pub fn TopBar(
    /// Whether the sidebar is collapsed.
    #[prop(into)]
    collapsed: Signal<bool>,
    /// Pin the bar to the viewport.
    #[prop(optional)]
    fixed: bool,
    /// Collapse/expand handler.
    #[prop(optional_no_strip)]
    on_toggle: Option<Callback<()>>,
    /// Widgets shown on the right (dropdowns).
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let layout = move || TopBarLayout::resolve(fixed, collapsed.get());
    let labels = move || ToggleLabels::for_state(collapsed.get());

    view! {
        <div class="topbar" style=move || layout().style()>
            {on_toggle.map(|cb| view! {
                <button
                    class="topbar-toggle"
                    aria-pressed=move || labels().aria_pressed
                    aria-label=move || labels().aria_label
                    on:click=move |_| cb.run(())
                >
                    <span class="sr-only">{move || labels().screen_reader}</span>
                    <span class="topbar-toggle-glyph" aria-hidden="true">
                        {move || labels().glyph}
                    </span>
                </button>
            })}
            <div class="topbar-actions">
                {children.map(|children| children())}
            </div>
        </div>
    }
}

