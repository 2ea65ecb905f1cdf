//! overlay-common - DOM-free logic behind the overlay dialog
//!
//! Everything here is plain data and can be tested without a renderer.

mod click_origin;
mod presentation;
mod scroll_lock;
mod size;

pub use click_origin::{ClickOrigin, Layer};
pub use presentation::{Phase, Presentation};
pub use scroll_lock::{ScrollLockGuard, ScrollLockManager, ScrollLockSlot, ScrollSurface};
pub use size::ModalSize;
