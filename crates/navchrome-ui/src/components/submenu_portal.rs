//! Floating submenu for the collapsed sidebar.
//!
//! The overlay is mounted into `<body>` so the narrow sidebar does not clip it,
//! and follows its anchor button across scrolls and resizes.

use leptos::ev::{self, MouseEvent};
use leptos::html::{Button, Div};
use leptos::portal::Portal;
use leptos::prelude::*;
use leptos_use::{
    UseEventListenerOptions, use_event_listener, use_event_listener_with_options, use_window,
};
use navchrome_core::{MenuMode, MenuState, PositionTracker, SubmenuItem};

use super::menu::SubmenuLinks;
use crate::dom::{ButtonAnchor, contains_target};

/// Submenu rendered beside `anchor`, outside the sidebar's DOM subtree.
#[component]
pub fn SubmenuPortal(
    /// Icon button the overlay is aligned with.
    anchor: NodeRef<Button>,
    /// Ref filled with the overlay element.
    overlay_ref: NodeRef<Div>,
    /// Element whose hover keeps the overlay open.
    hover_root: NodeRef<Div>,
    /// Submenu entries.
    items: Vec<SubmenuItem>,
    /// Shared menu state.
    state: RwSignal<MenuState>,
) -> impl IntoView {
    let tracker = StoredValue::new(PositionTracker::new(ButtonAnchor::new(anchor)));
    let placement = RwSignal::new(tracker.with_value(PositionTracker::placement));

    let refresh = move || {
        let mut next = None;
        tracker.update_value(|t| next = t.refresh());
        placement.set(next);
    };

    // Capture phase so scrolling any nested container re-aligns the overlay.
    let _ = use_event_listener_with_options(
        use_window(),
        ev::scroll,
        move |_| refresh(),
        UseEventListenerOptions::default().capture(true),
    );
    let _ = use_event_listener(use_window(), ev::resize, move |_| refresh());

    let on_leave = move |ev: MouseEvent| {
        if contains_target(hover_root.get_untracked(), ev.related_target()) {
            return;
        }
        state.update(|s| s.hover_leave(MenuMode::VerticalCollapsed));
    };

    let items = StoredValue::new(items);

    view! {
        <Portal>
            <Show when=move || placement.get().is_some()>
                <div
                    node_ref=overlay_ref
                    class=move || format!(
                        "submenu-floating {}",
                        state.with(MenuState::transition_class)
                    )
                    style=move || placement.get().map(|p| p.to_style()).unwrap_or_default()
                    on:mouseleave=on_leave
                >
                    <SubmenuLinks items=items.get_value() link_class="submenu-link" />
                </div>
            </Show>
        </Portal>
    }
}
