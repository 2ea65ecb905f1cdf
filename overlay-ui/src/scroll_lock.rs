//! Document-level scroll lock
//!
//! The app shell owns one [`ScrollLockManager`] (via [`ScrollLockProvider`])
//! and every open overlay holds a guard from it. The manager only touches the
//! body's `overflow` on the first acquire and the last release.

use dioxus::prelude::*;
use overlay_common::{ScrollLockManager, ScrollSurface};

/// Locks scrolling by setting `overflow: hidden` on `document.body`,
/// restoring whatever inline value was there before.
#[derive(Debug, Default)]
pub struct BodyScrollSurface {
    previous: Option<String>,
}

impl ScrollSurface for BodyScrollSurface {
    fn set_locked(&mut self, locked: bool) {
        let Some(body) = web_sys_x::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            tracing::warn!("No document body, skipping scroll lock update ({locked})");
            return;
        };
        let style = body.style();

        if locked {
            self.previous = style.get_property_value("overflow").ok();
            if style.set_property("overflow", "hidden").is_err() {
                tracing::warn!("Failed to lock body scrolling");
            }
            return;
        }

        let restored = match self.previous.take() {
            Some(previous) if !previous.is_empty() => style.set_property("overflow", &previous),
            _ => style.remove_property("overflow").map(|_| ()),
        };
        if restored.is_err() {
            tracing::warn!("Failed to unlock body scrolling");
        }
    }
}

thread_local! {
    static DOCUMENT_SCROLL_LOCK: ScrollLockManager =
        ScrollLockManager::new(BodyScrollSurface::default());
}

/// Fallback manager shared by overlays rendered outside a provider
pub fn document_scroll_lock() -> ScrollLockManager {
    DOCUMENT_SCROLL_LOCK.with(Clone::clone)
}

/// Provides a scroll lock manager to every overlay below it
#[component]
pub fn ScrollLockProvider(children: Element) -> Element {
    use_context_provider(|| ScrollLockManager::new(BodyScrollSurface::default()));
    rsx! {
        {children}
    }
}

/// Manager from the nearest [`ScrollLockProvider`], or the document-wide fallback
pub fn use_scroll_lock() -> ScrollLockManager {
    use_hook(|| try_consume_context::<ScrollLockManager>().unwrap_or_else(document_scroll_lock))
}
