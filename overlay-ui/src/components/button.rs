//! Buttons used by overlays and their hosts

use dioxus::prelude::*;

/// Unstyled `<button type="button">` with accessibility attributes wired up.
/// The modal's close control is built on this.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            r#type: "button",
            disabled,
            aria_label: aria_label.as_deref(),
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Indigo background, for the action that opens or confirms an overlay
    Primary,
    /// Gray background, for cancel
    Secondary,
    /// Text only
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-indigo-600 hover:bg-indigo-500 text-white disabled:opacity-50 disabled:cursor-not-allowed"
            }
            ButtonVariant::Secondary => {
                "bg-gray-700 hover:bg-gray-600 text-gray-300 disabled:opacity-50 disabled:cursor-not-allowed"
            }
            ButtonVariant::Ghost => "text-gray-400 hover:text-white hover:bg-gray-700/50",
        }
    }
}

fn button_class(variant: ButtonVariant, extra: Option<&str>) -> String {
    let base = "inline-flex items-center gap-2 px-4 py-2 rounded-lg transition-colors";
    match extra {
        Some(extra) => format!("{base} {} {extra}", variant.class()),
        None => format!("{base} {}", variant.class()),
    }
}

/// Styled button
#[component]
pub fn Button(
    variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        ChromelessButton {
            disabled,
            class: Some(button_class(variant, class.as_deref())),
            onclick,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_class_includes_variant() {
        let class = button_class(ButtonVariant::Primary, None);
        assert!(class.contains("bg-indigo-600"));
        let class = button_class(ButtonVariant::Ghost, Some("ml-auto"));
        assert!(class.ends_with("ml-auto"));
        assert!(!class.contains("bg-indigo-600"));
    }
}
