//! Site menu with nested submenus.
//!
//! Renders the configured items as a horizontal bar, an expanded sidebar or an
//! icon-only collapsed sidebar. Submenu state lives in a single
//! [`MenuState`] so at most one submenu is open at a time.

use leptos::ev::MouseEvent;
use leptos::html::{Button, Div};
use leptos::prelude::*;
use leptos::task::spawn_local;
use navchrome_core::{
    MenuConfig, MenuItem, MenuMode, MenuState, SubmenuItem, TRANSITION_RESUME_DELAY_MS,
};

use super::icons::{Icon, menu_icon_path, paths};
use super::submenu_portal::SubmenuPortal;
use crate::dom::contains_target;

/// Imperative handle for controlling a [`Menu`] from its parent.
#[derive(Clone, Copy)]
pub struct MenuHandle {
    state: RwSignal<MenuState>,
}

impl MenuHandle {
    /// Create a handle with all submenus closed.
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(MenuState::new()),
        }
    }

    /// Close any open submenu without playing its closing transition.
    ///
    /// Transitions come back after a short delay.
    pub fn close_submenus_immediate(&self) {
        let mut closed = false;
        self.state.update(|s| closed = s.close_immediate());
        if !closed {
            return;
        }

        leptos::logging::log!("Closed submenus without transition");
        let state = self.state;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TRANSITION_RESUME_DELAY_MS).await;
            // The menu may have unmounted in the meantime.
            let _ = state.try_update(MenuState::resume_transitions);
        });
    }
}

impl Default for MenuHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Rotation class for an item's chevron.
pub const fn chevron_class(mode: MenuMode, open: bool) -> &'static str {
    match (mode, open) {
        (MenuMode::Horizontal, true) => "chevron rotate-180",
        (MenuMode::VerticalExpanded, true) => "chevron rotate-90",
        _ => "chevron",
    }
}

/// Visibility class for an inline (expanded sidebar) submenu.
pub const fn inline_submenu_class(open: bool) -> &'static str {
    if open {
        "submenu-inline--open"
    } else {
        "submenu-inline--closed"
    }
}

fn open_memo(url: String, state: RwSignal<MenuState>) -> Memo<bool> {
    Memo::new(move |_| state.with(|s| s.is_open(&url)))
}

/// The site menu.
#[component]
pub fn Menu(
    /// Menu definition.
    config: MenuConfig,
    /// Whether the sidebar is collapsed to icons. Ignored for horizontal menus.
    #[prop(into, default = Signal::stored(false))]
    collapsed: Signal<bool>,
    /// Handle for closing submenus from outside.
    #[prop(optional)]
    handle: Option<MenuHandle>,
    /// Extra classes for the container.
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let state = handle.unwrap_or_default().state;
    let orientation = config.orientation;
    let mode = Memo::new(move |_| MenuMode::resolve(orientation, collapsed.get()));

    Effect::new(move |_| {
        let collapsed = collapsed.get();
        if collapsed {
            state.update(|s| s.set_collapsed(true));
        }
    });

    let extra_class = class.unwrap_or_default();
    let entries = config
        .items
        .into_iter()
        .map(|item| view! { <MenuEntry item=item mode=mode state=state /> })
        .collect_view();

    view! {
        <aside
            class=move || format!("menu {} {}", mode.get().class(), extra_class)
            style=move || mode.get().container_style()
        >
            <Show when=move || mode.get().shows_logo()>
                <div class="menu-logo">
                    <strong class:menu-logo-large=move || mode.get() == MenuMode::VerticalExpanded>
                        "LOGO"
                    </strong>
                </div>
            </Show>
            <nav class="menu-nav">{entries}</nav>
        </aside>
    }
}

/// One top-level item, re-rendered when the mode changes.
#[component]
fn MenuEntry(item: MenuItem, mode: Memo<MenuMode>, state: RwSignal<MenuState>) -> impl IntoView {
    let item = StoredValue::new(item);

    move || match mode.get() {
        MenuMode::Horizontal => {
            view! { <HorizontalEntry item=item.get_value() state=state /> }.into_any()
        }
        MenuMode::VerticalExpanded => {
            view! { <ExpandedEntry item=item.get_value() state=state /> }.into_any()
        }
        MenuMode::VerticalCollapsed => {
            view! { <CollapsedEntry item=item.get_value() state=state /> }.into_any()
        }
    }
}

#[component]
fn HorizontalEntry(item: MenuItem, state: RwSignal<MenuState>) -> impl IntoView {
    let icon = menu_icon_path(item.icon());
    let has_submenu = item.has_submenu();
    let MenuItem {
        url,
        label,
        submenu,
        ..
    } = item;
    let is_open = open_memo(url.clone(), state);
    let submenu = StoredValue::new(submenu);

    let toggle = move |_| {
        if has_submenu {
            state.update(|s| s.toggle(&url));
        }
    };

    view! {
        <div class="menu-entry menu-entry--horizontal">
            <div class="menu-row" class:active=move || is_open.get() on:click=toggle>
                <Icon path=icon size=18 />
                <span class="menu-label">{label}</span>
                {has_submenu.then(|| view! {
                    <Icon
                        path=paths::CHEVRON_DOWN
                        size=14
                        class=Signal::derive(move || {
                            chevron_class(MenuMode::Horizontal, is_open.get()).to_string()
                        })
                    />
                })}
            </div>
            <Show when=move || has_submenu && is_open.get()>
                <div class=move || format!(
                    "submenu-dropdown {}",
                    state.with(MenuState::transition_class)
                )>
                    <SubmenuLinks items=submenu.get_value() link_class="submenu-link" />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ExpandedEntry(item: MenuItem, state: RwSignal<MenuState>) -> impl IntoView {
    let icon = menu_icon_path(item.icon());
    let has_submenu = item.has_submenu();
    let MenuItem {
        url,
        label,
        submenu,
        ..
    } = item;
    let is_open = open_memo(url.clone(), state);

    let toggle = move |_| {
        if has_submenu {
            state.update(|s| s.toggle(&url));
        }
    };

    view! {
        <div class="menu-entry menu-entry--expanded">
            <div class="menu-row" class:active=move || is_open.get() on:click=toggle>
                <div class="menu-row-label">
                    <Icon path=icon size=18 />
                    <span class="menu-label">{label}</span>
                </div>
                {has_submenu.then(|| view! {
                    <Icon
                        path=paths::CHEVRON_RIGHT
                        size=16
                        class=Signal::derive(move || {
                            chevron_class(MenuMode::VerticalExpanded, is_open.get()).to_string()
                        })
                    />
                })}
            </div>
            {has_submenu.then(move || view! {
                <div class=move || format!(
                    "submenu-inline {} {}",
                    state.with(MenuState::transition_class),
                    inline_submenu_class(is_open.get())
                )>
                    <SubmenuLinks items=submenu link_class="submenu-link submenu-link--inline" />
                </div>
            })}
        </div>
    }
}

#[component]
fn CollapsedEntry(item: MenuItem, state: RwSignal<MenuState>) -> impl IntoView {
    let icon = menu_icon_path(item.icon());
    let has_submenu = item.has_submenu();
    let MenuItem {
        url,
        label,
        submenu,
        ..
    } = item;
    let is_open = open_memo(url.clone(), state);
    let url = StoredValue::new(url);
    let submenu = StoredValue::new(submenu);

    let button_ref = NodeRef::<Button>::new();
    let wrapper_ref = NodeRef::<Div>::new();
    let overlay_ref = NodeRef::<Div>::new();

    let on_enter = move |_| {
        url.with_value(|u| state.update(|s| s.hover_enter(u, MenuMode::VerticalCollapsed)));
    };
    let on_leave = move |ev: MouseEvent| {
        // Moving onto the floating submenu keeps it open.
        if contains_target(overlay_ref.get_untracked(), ev.related_target()) {
            return;
        }
        state.update(|s| s.hover_leave(MenuMode::VerticalCollapsed));
    };
    let on_click = move |_| {
        if has_submenu {
            url.with_value(|u| state.update(|s| s.toggle(u)));
        }
    };

    view! {
        <div
            class="menu-entry menu-entry--collapsed"
            node_ref=wrapper_ref
            on:mouseenter=on_enter
            on:mouseleave=on_leave
        >
            <button
                node_ref=button_ref
                class="menu-icon-button"
                class:active=move || is_open.get()
                title=label
                on:click=on_click
            >
                <Icon path=icon size=20 />
            </button>
            <Show when=move || has_submenu && is_open.get()>
                <SubmenuPortal
                    anchor=button_ref
                    overlay_ref=overlay_ref
                    hover_root=wrapper_ref
                    items=submenu.get_value()
                    state=state
                />
            </Show>
        </div>
    }
}

/// Links of one submenu.
#[component]
pub fn SubmenuLinks(
    /// Submenu entries.
    items: Vec<SubmenuItem>,
    /// Class applied to every link.
    #[prop(into)]
    link_class: String,
) -> impl IntoView {
    items
        .into_iter()
        .map(|sub| {
            view! {
                <a href=sub.url class=link_class.clone()>
                    {sub.label}
                </a>
            }
        })
        .collect_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chevron_rotation_per_mode() {
        assert_eq!(chevron_class(MenuMode::Horizontal, true), "chevron rotate-180");
        assert_eq!(chevron_class(MenuMode::VerticalExpanded, true), "chevron rotate-90");
        assert_eq!(chevron_class(MenuMode::VerticalExpanded, false), "chevron");
        assert_eq!(chevron_class(MenuMode::VerticalCollapsed, true), "chevron");
    }

    #[test]
    fn test_inline_submenu_class() {
        assert_eq!(inline_submenu_class(true), "submenu-inline--open");
        assert_eq!(inline_submenu_class(false), "submenu-inline--closed");
    }
}
