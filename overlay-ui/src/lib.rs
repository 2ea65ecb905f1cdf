//! overlay-ui - Dioxus overlay components
//!
//! Contains the modal dialog and the document scroll lock it holds while
//! open. Pure state lives in `overlay-common`; this crate wires it to the DOM.

pub mod components;
pub mod scroll_lock;

pub use components::*;
pub use overlay_common::ModalSize;
pub use scroll_lock::{document_scroll_lock, use_scroll_lock, BodyScrollSurface, ScrollLockProvider};
