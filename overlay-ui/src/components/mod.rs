//! Overlay components

pub mod button;
pub mod icons;
pub mod modal;

pub use button::{Button, ButtonVariant, ChromelessButton};
pub use icons::XIcon;
pub use modal::{Modal, ANIMATION_MS};
