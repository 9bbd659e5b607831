//! Notification bell with a dismissible dropdown list.

use leptos::html::Div;
use leptos::prelude::*;
use navchrome_core::{DropdownState, NotificationItem, NotificationList};

use super::icons::{Icon, paths};
use crate::dom::close_on_outside_press;

/// Bell button in the top bar.
///
/// Shows a count badge while notifications are pending. The panel closes on a
/// press anywhere outside the component.
#[component]
pub fn NotificationDropdown(
    /// Notifications shown on first render.
    initial: NotificationList,
) -> impl IntoView {
    let dropdown = RwSignal::new(DropdownState::new());
    let list = RwSignal::new(initial);
    let root = NodeRef::<Div>::new();
    close_on_outside_press(root, dropdown);

    let toggle = move |_| dropdown.update(DropdownState::toggle);
    let clear_all = move |_| {
        list.update(NotificationList::clear);
        leptos::logging::log!("Cleared all notifications");
    };
    let dismiss = Callback::new(move |id: u64| {
        list.update(|l| {
            l.remove(id);
        });
    });

    view! {
        <div class="dropdown" node_ref=root data-testid="notifications">
            <button
                class="dropdown-trigger notification-trigger"
                aria-expanded=move || dropdown.get().aria_expanded()
                on:click=toggle
            >
                <span class="notification-bell">
                    <Icon path=paths::BELL size=22 />
                    {move || list.with(NotificationList::badge).map(|count| view! {
                        <span class="notification-badge">{count}</span>
                    })}
                </span>
            </button>

            <Show when=move || dropdown.get().is_open()>
                <div class="dropdown-panel notification-panel">
                    <div class="notification-header">
                        <strong>"Notifications"</strong>
                        <Show when=move || !list.with(NotificationList::is_empty)>
                            <button class="notification-clear" on:click=clear_all>
                                "Clear All"
                            </button>
                        </Show>
                    </div>

                    <Show
                        when=move || !list.with(NotificationList::is_empty)
                        fallback=|| view! {
                            <div class="notification-empty">"No notifications"</div>
                        }
                    >
                        <ul class="notification-list">
                            <For
                                each=move || list.with(|l| l.items().to_vec())
                                key=|notification| notification.id
                                children=move |notification| view! {
                                    <NotificationRow notification=notification on_dismiss=dismiss />
                                }
                            />
                        </ul>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

/// A single notification row.
#[component]
fn NotificationRow(
    /// The notification to display.
    notification: NotificationItem,
    /// Called with the notification ID when dismissed.
    on_dismiss: Callback<u64>,
) -> impl IntoView {
    let id = notification.id;

    view! {
        <li class="notification-row">
            <div class="notification-body">
                <p class="notification-message">{notification.message}</p>
                <span class="notification-time">{notification.time}</span>
            </div>
            <button
                class="notification-dismiss"
                aria-label="Dismiss notification"
                on:click=move |_| on_dismiss.run(id)
            >
                <Icon path=paths::CLOSE size=16 />
            </button>
        </li>
    }
}
