//! `Navchrome` UI - Leptos-based navigation chrome.
//!
//! This crate renders the site menu, the top bar and its dropdowns on top of
//! the state kept in `navchrome-core`.

// Component files tend to be large by nature - they contain view logic
#![allow(clippy::too_many_lines)]
// Pass by value suggestions for small types like bool - not always clearer
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod app;
pub mod components;
pub mod data;
pub mod dom;
pub mod logging;
pub mod theme;

pub use app::App;
pub use data::NavData;
