//! Component mocks with interactive controls

pub mod framework;
mod modal;
pub mod url_state;

pub use modal::ModalMock;
