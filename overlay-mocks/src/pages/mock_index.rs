//! Mock pages with URL state persistence

use crate::mocks::ModalMock;
use crate::ui::LinkCard;
use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn MockIndex() -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white p-8",
            h1 { class: "text-2xl font-bold mb-6", "overlay mocks" }

            h2 { class: "text-lg font-semibold text-gray-400 mb-3", "Components" }
            div { class: "space-y-2",
                LinkCard {
                    to: Route::MockModal { state: None },
                    title: "Modal",
                    description: "Dialog overlay with sizes, optional header, backdrop dismissal and scroll lock",
                }
            }
        }
    }
}

#[component]
pub fn MockModal(state: Option<String>) -> Element {
    rsx! {
        ModalMock { initial_state: state }
    }
}
