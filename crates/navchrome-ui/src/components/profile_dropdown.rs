//! Signed-in user card with account links.

use leptos::html::Div;
use leptos::prelude::*;
use navchrome_core::{DropdownState, ProfileAction, ProfileConfig, ProfileItem};

use super::icons::{Icon, paths};
use crate::dom::close_on_outside_press;

/// Profile button in the top bar.
#[component]
pub fn ProfileDropdown(
    /// Profile card and menu entries.
    profile: ProfileConfig,
) -> impl IntoView {
    let dropdown = RwSignal::new(DropdownState::new());
    let root = NodeRef::<Div>::new();
    close_on_outside_press(root, dropdown);

    let name = profile.display_name().to_string();
    let designation = profile.display_designation().to_string();
    let items = StoredValue::new(profile.items);
    let close = Callback::new(move |()| dropdown.update(DropdownState::close));

    view! {
        <div class="dropdown" node_ref=root data-testid="profile">
            <button
                class="dropdown-trigger profile-trigger"
                aria-expanded=move || dropdown.get().aria_expanded()
                on:click=move |_| dropdown.update(DropdownState::toggle)
            >
                <Icon path=paths::USER size=22 />
                <div class="profile-card">
                    <span class="profile-name">{name}</span>
                    <span class="profile-designation">{designation}</span>
                </div>
                <Icon
                    path=paths::CHEVRON_DOWN
                    size=14
                    class=Signal::derive(move || {
                        let open = dropdown.get().is_open();
                        String::from(if open { "chevron rotate-180" } else { "chevron" })
                    })
                />
            </button>

            <Show when=move || dropdown.get().is_open()>
                <div class="dropdown-panel profile-panel">
                    <ul class="profile-list">
                        {items
                            .get_value()
                            .into_iter()
                            .map(|item| view! { <ProfileEntry item=item on_close=close /> })
                            .collect_view()}
                    </ul>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ProfileEntry(item: ProfileItem, on_close: Callback<()>) -> impl IntoView {
    let label = item.label.clone();
    let entry = match item.action() {
        ProfileAction::Logout => view! {
            <button class="profile-link profile-logout" on:click=move |_| {
                leptos::logging::log!("Logout selected");
                on_close.run(());
            }>
                {label}
            </button>
        }
        .into_any(),
        ProfileAction::Navigate(url) => view! {
            <a class="profile-link" href=url.to_string() on:click=move |_| on_close.run(())>
                {label}
            </a>
        }
        .into_any(),
    };

    view! { <li>{entry}</li> }
}
