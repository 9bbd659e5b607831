//! Main application component.

use leptos::prelude::*;

use crate::components::{
    Menu, MenuHandle, MenuWrapper, NotificationDropdown, PageLayout, PageMain, ProfileDropdown,
    TopBar,
};
use crate::data::NavData;
use crate::theme::generate_css_variables;

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    // CSS variables
    let css_vars = generate_css_variables();

    view! {
        <style>{css_vars}</style>
        <style>{include_str!("../styles/main.css")}</style>
        <AppContent />
    }
}

/// Menu, top bar and placeholder content wired together.
#[component]
fn AppContent() -> impl IntoView {
    let NavData {
        menu,
        profile,
        notifications,
    } = NavData::load();
    let orientation = menu.orientation;

    let (collapsed, set_collapsed) = signal(false);
    let menu_handle = MenuHandle::new();

    let on_toggle = orientation.is_collapsible().then(|| {
        Callback::new(move |()| {
            menu_handle.close_submenus_immediate();
            set_collapsed.update(|c| *c = !*c);
        })
    });

    view! {
        <PageLayout orientation=orientation>
            <MenuWrapper orientation=orientation>
                <Menu config=menu collapsed=collapsed handle=menu_handle />
            </MenuWrapper>
            <PageMain>
                <TopBar collapsed=collapsed on_toggle=on_toggle>
                    <NotificationDropdown initial=notifications />
                    <ProfileDropdown profile=profile />
                </TopBar>
                <section class="page-content">
                    <h1>"Welcome"</h1>
                    <p>"Pick a section from the menu."</p>
                </section>
            </PageMain>
        </PageLayout>
    }
}
