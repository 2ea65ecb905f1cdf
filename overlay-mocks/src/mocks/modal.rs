//! Modal mock component

use super::framework::{ControlRegistryBuilder, MockPanel, Preset};
use crate::Route;
use dioxus::prelude::*;
use overlay_ui::{Button, ButtonVariant, Modal, ModalSize};

#[component]
pub fn ModalMock(initial_state: Option<String>) -> Element {
    let registry = ControlRegistryBuilder::new()
        .enum_control(
            "size",
            "Size",
            "md",
            vec![
                ("sm", "Small"),
                ("md", "Medium"),
                ("lg", "Large"),
                ("xl", "Extra large"),
            ],
        )
        .string_control("title", "Title", "Confirm")
        .bool_control("show_title", "Title", true)
        .bool_control("show_close_button", "Close button", true)
        .bool_control("stacked", "Stacked", false)
        .doc("Adds a button inside the modal that opens a second one on top")
        .with_presets(vec![
            Preset::new("Default"),
            Preset::new("Confirm (small)").set_string("size", "sm"),
            Preset::new("No header")
                .set_bool("show_title", false)
                .set_bool("show_close_button", false),
            Preset::new("Extra large").set_string("size", "xl"),
            Preset::new("Stacked").set_bool("stacked", true),
        ])
        .build(initial_state);

    registry.use_url_sync(|state| Route::MockModal { state });

    let size = ModalSize::from_keyword(&registry.get_string("size"));
    let title = registry
        .get_bool("show_title")
        .then(|| registry.get_string("title"));
    let show_close_button = registry.get_bool("show_close_button");
    let stacked = registry.get_bool("stacked");

    let mut is_open = use_signal(|| false);
    let mut nested_open = use_signal(|| false);

    rsx! {
        MockPanel { title: "Modal", registry,
            div { class: "space-y-6",
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| is_open.set(true),
                    "Open modal"
                }

                // Enough content to scroll, so the lock is visible
                for i in 0..40 {
                    p { key: "{i}", class: "text-gray-500",
                        "Background paragraph {i}. Scrolling stops while a modal is open."
                    }
                }
            }

            Modal {
                is_open,
                on_close: move |_| is_open.set(false),
                title,
                size,
                show_close_button,
                p { class: "text-gray-300 mb-6",
                    "Clicks in here never close the modal. Click the backdrop or the close button instead."
                }
                div { class: "flex gap-3 justify-end",
                    if stacked {
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| nested_open.set(true),
                            "Open another"
                        }
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| is_open.set(false),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| is_open.set(false),
                        "Confirm"
                    }
                }
            }

            Modal {
                is_open: nested_open,
                on_close: move |_| nested_open.set(false),
                title: Some("Nested".to_string()),
                size: ModalSize::Small,
                p { class: "text-gray-300",
                    "Closing this one keeps scrolling locked until the first modal closes too."
                }
            }
        }
    }
}
