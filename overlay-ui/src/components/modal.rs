//! Modal dialog overlay
//!
//! Renders a centered panel over a dimmed backdrop while the caller's
//! `is_open` flag is true. The caller owns the flag; the modal only reports
//! dismissal gestures through `on_close`.
//!
//! Three concerns are handled here:
//! - **Presentation**: an explicit [`Presentation`] machine keeps the content
//!   mounted through the exit animation. Phase changes are driven by the
//!   panel's `animationend`, with a timer fallback so a missing stylesheet
//!   can never leave the overlay stuck on screen.
//! - **Scroll lock**: a [`ScrollLockSlot`] holds a guard for exactly as long
//!   as `is_open` is true, and is emptied on unmount.
//! - **Backdrop dismissal**: only clicks that start on the backdrop itself
//!   dismiss. Panel clicks are recorded through [`ClickOrigin`] rather than
//!   stopped, so nested content still sees them bubble.
//!
//! Animations come from `assets/main.css` (`overlay-*` keyframes).

use crate::components::icons::XIcon;
use crate::components::ChromelessButton;
use crate::scroll_lock::use_scroll_lock;
use dioxus::prelude::*;
use dioxus_core::Task;
use overlay_common::{ClickOrigin, Layer, ModalSize, Presentation, ScrollLockSlot};

/// Upper bound for the enter/exit animations (in milliseconds)
pub const ANIMATION_MS: u64 = 200;

/// Keyframe names the panel's `animationend` handler reacts to.
/// Animations bubbling up from children carry other names and are ignored.
const PANEL_ENTER_ANIMATION: &str = "overlay-panel-in";
const PANEL_EXIT_ANIMATION: &str = "overlay-panel-out";

/// Modal dialog overlay
#[component]
pub fn Modal(
    /// Controls whether the modal is open
    is_open: ReadSignal<bool>,
    /// Called when the user asks to dismiss (backdrop click or close button)
    #[props(default)]
    on_close: Option<EventHandler<()>>,
    /// Modal content
    children: Element,
    /// Optional header text
    #[props(default)]
    title: Option<String>,
    /// Maximum panel width
    #[props(default)]
    size: ModalSize,
    /// Whether to render the close button in the header
    #[props(default = true)]
    show_close_button: bool,
    /// Extra CSS classes for the panel
    #[props(default)]
    class: Option<String>,
) -> Element {
    let scroll_lock = use_scroll_lock();
    let lock_slot = use_hook(ScrollLockSlot::new);
    let mut presentation = use_signal(Presentation::new);
    let mut fallback_task = use_signal(|| None::<Task>);
    let click_origin = use_hook(ClickOrigin::new);

    // Follow the caller's flag: move the presentation machine and take or
    // drop the scroll lock. Runs after render, so DOM writes stay out of the
    // diff cycle.
    let slot_for_effect = lock_slot.clone();
    use_effect(move || {
        let open = is_open();
        slot_for_effect.sync(&scroll_lock, open);

        if presentation.write().sync(open) {
            schedule_animation_fallback(presentation, fallback_task);
        }
    });

    // Released synchronously: tasks spawned from a scope that is being torn
    // down never run, which would leave the document locked.
    use_drop(move || {
        if let Some(task) = fallback_task.write().take() {
            task.cancel();
        }
        lock_slot.release();
    });

    let state = presentation();
    if !state.is_mounted() {
        return rsx! {};
    }

    let shown = state.is_shown();
    let origin_for_panel = click_origin.clone();
    let render_header = has_header(title.as_deref(), show_close_button);
    // Inline fallback so the width holds even without the Tailwind sheet
    let max_width = format!("max-width: {}rem", size.max_width_rem());

    rsx! {
        div {
            class: backdrop_class(shown),
            role: "presentation",
            onclick: move |_| {
                if click_origin.take_is_origin(Layer::Backdrop) {
                    request_close(on_close);
                }
            },
            div {
                class: panel_class(size, shown, class.as_deref()),
                style: max_width,
                role: "dialog",
                aria_modal: "true",
                aria_label: title.clone(),
                onclick: move |_| origin_for_panel.record(Layer::Panel),
                onanimationend: move |evt: AnimationEvent| {
                    let current = *presentation.peek();
                    if !current.is_animating()
                        || !ends_current_animation(&evt.animation_name(), current.is_shown())
                    {
                        return;
                    }
                    if let Some(task) = fallback_task.write().take() {
                        task.cancel();
                    }
                    presentation.write().animation_finished();
                },
                if render_header {
                    div { class: "flex items-center justify-between gap-4 px-6 pt-5 pb-3 border-b border-white/5",
                        if let Some(title) = title.as_ref() {
                            h2 { class: "text-lg font-semibold text-white truncate", "{title}" }
                        } else {
                            div {}
                        }
                        if show_close_button {
                            ChromelessButton {
                                class: Some("p-1 rounded text-gray-400 hover:text-white hover:bg-gray-700/50 transition-colors".to_string()),
                                aria_label: Some("Close".to_string()),
                                onclick: move |_| request_close(on_close),
                                XIcon { class: "w-5 h-5" }
                            }
                        }
                    }
                }
                div { class: "px-6 py-5", {children} }
            }
        }
    }
}

/// Forward a dismissal gesture to the caller, if it gave us a handler
fn request_close(on_close: Option<EventHandler<()>>) {
    match on_close {
        Some(handler) => handler.call(()),
        None => tracing::debug!("Modal dismissed without an on_close handler"),
    }
}

/// Whether an `animationend` with this keyframe name ends the animation the
/// panel is currently running. A late enter event must not cut an exit short.
fn ends_current_animation(name: &str, shown: bool) -> bool {
    if shown {
        name == PANEL_ENTER_ANIMATION
    } else {
        name == PANEL_EXIT_ANIMATION
    }
}

/// Finish the current animation after [`ANIMATION_MS`] unless `animationend`
/// gets there first. Any earlier fallback is cancelled so a stale timer can't
/// finish a newer animation.
fn schedule_animation_fallback(
    mut presentation: Signal<Presentation>,
    mut fallback_task: Signal<Option<Task>>,
) {
    if let Some(task) = fallback_task.write().take() {
        task.cancel();
    }
    let task = spawn(async move {
        sleep_ms(ANIMATION_MS).await;
        fallback_task.set(None);
        presentation.write().animation_finished();
    });
    fallback_task.set(Some(task));
}

/// The header row exists only if there is something to put in it
fn has_header(title: Option<&str>, show_close_button: bool) -> bool {
    title.is_some() || show_close_button
}

fn backdrop_class(shown: bool) -> &'static str {
    if shown {
        "fixed inset-0 z-[3000] flex items-center justify-center p-4 bg-black/60 overlay-backdrop-in"
    } else {
        "fixed inset-0 z-[3000] flex items-center justify-center p-4 bg-black/60 overlay-backdrop-out"
    }
}

fn panel_class(size: ModalSize, shown: bool, extra: Option<&str>) -> String {
    let animation = if shown {
        "overlay-panel-in"
    } else {
        "overlay-panel-out"
    };
    let base = format!(
        "relative w-full {} bg-gray-800 rounded-lg shadow-xl border border-white/5 {animation}",
        size.max_width_class()
    );
    match extra {
        Some(extra) => format!("{base} {extra}"),
        None => base,
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
