//! Small DOM helpers shared by the components.

use leptos::ev;
use leptos::html::{Button, Div};
use leptos::prelude::*;
use leptos_use::{use_document, use_event_listener};
use navchrome_core::{AnchorSource, DropdownState, Rect};
use wasm_bindgen::JsCast;

/// Whether an event target lies inside `root`.
pub fn contains_target<E>(root: Option<E>, target: Option<web_sys::EventTarget>) -> bool
where
    E: AsRef<web_sys::Node>,
{
    let (Some(root), Some(target)) = (root, target) else {
        return false;
    };
    target
        .dyn_ref::<web_sys::Node>()
        .is_some_and(|node| root.as_ref().contains(Some(node)))
}

/// Close `state` whenever a mouse press lands outside `root`.
pub fn close_on_outside_press(root: NodeRef<Div>, state: RwSignal<DropdownState>) {
    let _ = use_event_listener(use_document(), ev::mousedown, move |evt| {
        if !state.get_untracked().is_open() {
            return;
        }
        let inside = contains_target(root.get_untracked(), evt.target());
        state.update(|s| s.handle_outside_press(inside));
    });
}

/// Measures a button through its node ref.
#[derive(Clone, Copy)]
pub struct ButtonAnchor {
    node_ref: NodeRef<Button>,
}

impl ButtonAnchor {
    /// Wrap a button node ref.
    pub const fn new(node_ref: NodeRef<Button>) -> Self {
        Self { node_ref }
    }
}

impl AnchorSource for ButtonAnchor {
    fn measure(&self) -> Option<Rect> {
        let button = self.node_ref.get_untracked()?;
        if !button.is_connected() {
            return None;
        }
        let rect = button.get_bounding_client_rect();
        Some(Rect {
            left: rect.left(),
            top: rect.top(),
            right: rect.right(),
            bottom: rect.bottom(),
        })
    }
}
