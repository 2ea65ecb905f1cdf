//! Auto-generated control panel UI

use super::registry::{ControlKind, ControlRegistry};
use crate::Route;
use dioxus::prelude::*;

/// Main mock panel component that renders controls, presets, and the mock
#[component]
pub fn MockPanel(title: String, registry: ControlRegistry, children: Element) -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white",
            div { class: "sticky top-0 z-50 bg-gray-800 border-b border-gray-700 p-4",
                div { class: "max-w-4xl mx-auto",
                    div { class: "flex items-center gap-3 mb-3",
                        Link {
                            to: Route::MockIndex {},
                            class: "text-sm text-gray-400 hover:text-white",
                            "← Mocks"
                        }
                        h1 { class: "text-lg font-semibold", "{title}" }
                    }

                    if !registry.presets.is_empty() {
                        PresetBar { registry: registry.clone() }
                    }

                    ControlsRow { registry: registry.clone() }
                }
            }

            div { class: "max-w-4xl mx-auto p-6", {children} }
        }
    }
}

#[component]
fn PresetBar(registry: ControlRegistry) -> Element {
    rsx! {
        div { class: "flex flex-wrap gap-2 mb-3",
            span { class: "text-xs text-gray-500 self-center mr-2", "Presets:" }
            for preset in &registry.presets {
                button {
                    class: if preset.matches(&registry) { "px-2 py-1 text-xs rounded bg-blue-600 text-white" } else { "px-2 py-1 text-xs rounded bg-gray-700 text-gray-300 hover:bg-gray-600" },
                    onclick: {
                        let preset = preset.clone();
                        let registry = registry.clone();
                        move |_| registry.apply_preset(&preset)
                    },
                    "{preset.name}"
                }
            }
        }
    }
}

/// Enum controls as button groups, then text inputs, then checkboxes
#[component]
fn ControlsRow(registry: ControlRegistry) -> Element {
    let enum_controls: Vec<_> = registry
        .controls
        .iter()
        .filter_map(|c| match &c.kind {
            ControlKind::Enum(options) => Some((c.key, options.clone())),
            _ => None,
        })
        .collect();
    let text_controls: Vec<_> = registry
        .controls
        .iter()
        .filter(|c| c.kind == ControlKind::Text)
        .collect();
    let bool_controls: Vec<_> = registry
        .controls
        .iter()
        .filter(|c| c.kind == ControlKind::Bool)
        .collect();

    rsx! {
        for (key , options) in enum_controls {
            div { class: "flex flex-wrap gap-2 mb-3",
                for (value , label) in options {
                    EnumButton {
                        registry: registry.clone(),
                        control_key: key,
                        value,
                        label,
                    }
                }
            }
        }

        for control in text_controls {
            TextControl {
                registry: registry.clone(),
                control_key: control.key,
                label: control.label,
            }
        }

        if !bool_controls.is_empty() {
            div { class: "flex flex-wrap gap-4 text-sm",
                for control in bool_controls {
                    BoolCheckbox {
                        registry: registry.clone(),
                        control_key: control.key,
                        label: control.label,
                        doc: control.doc,
                    }
                }
            }
        }
    }
}

/// Individual enum button - reads signal reactively
#[component]
fn EnumButton(
    registry: ControlRegistry,
    control_key: &'static str,
    value: &'static str,
    label: &'static str,
) -> Element {
    let is_selected = registry.get_string(control_key) == value;

    rsx! {
        button {
            class: if is_selected { "px-3 py-1.5 text-sm rounded bg-blue-600 text-white" } else { "px-3 py-1.5 text-sm rounded bg-gray-700 text-gray-300 hover:bg-gray-600" },
            onclick: move |_| registry.set_string(control_key, value.to_string()),
            "{label}"
        }
    }
}

#[component]
fn TextControl(registry: ControlRegistry, control_key: &'static str, label: &'static str) -> Element {
    let current = registry.get_string(control_key);

    rsx! {
        label { class: "flex items-center gap-2 mb-3 text-sm text-gray-400",
            "{label}"
            input {
                class: "flex-1 px-2 py-1 rounded bg-gray-900 border border-gray-700 text-white",
                r#type: "text",
                value: "{current}",
                oninput: move |e| registry.set_string(control_key, e.value()),
            }
        }
    }
}

/// Individual bool checkbox - reads signal reactively
#[component]
fn BoolCheckbox(
    registry: ControlRegistry,
    control_key: &'static str,
    label: &'static str,
    doc: Option<&'static str>,
) -> Element {
    let current = registry.get_bool(control_key);

    rsx! {
        label {
            class: "flex items-center gap-2 text-gray-400",
            title: doc.unwrap_or(""),
            input {
                r#type: "checkbox",
                checked: current,
                onchange: move |e| registry.set_bool(control_key, e.checked()),
            }
            "{label}"
        }
    }
}
