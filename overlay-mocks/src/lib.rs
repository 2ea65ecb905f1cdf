//! overlay mocks - Storybook-like workbench for the overlay components
//!
//! Renders each component with interactive controls whose state lives in
//! the URL, so any configuration can be linked to directly.

pub mod mocks;
pub mod pages;
pub mod ui;

use dioxus::prelude::*;
use overlay_ui::ScrollLockProvider;
use pages::{MockIndex, MockModal};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    MockIndex {},
    #[route("/modal?:state")]
    MockModal { state: Option<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        ScrollLockProvider {
            div { class: "min-h-screen", Router::<Route> {} }
        }
    }
}
