//! Backdrop click detection
//!
//! A click on the backdrop dismisses an overlay only when the backdrop is the
//! element the click started on. Clicks inside the panel bubble up to the
//! backdrop too, and must keep bubbling so nested interactive content still
//! sees them, so propagation is never stopped. Instead each layer records
//! itself as the origin on the way up (innermost first), and the backdrop
//! compares that origin against itself.

use std::cell::Cell;
use std::rc::Rc;

/// Layers of an overlay that can receive a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Backdrop,
    Panel,
}

/// Per-overlay record of where the click being dispatched started.
/// Clones share state.
#[derive(Clone, Default)]
pub struct ClickOrigin {
    origin: Rc<Cell<Option<Layer>>>,
}

impl ClickOrigin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `layer` as the origin unless a deeper layer already did.
    pub fn record(&self, layer: Layer) {
        if self.origin.get().is_none() {
            self.origin.set(Some(layer));
        }
    }

    /// Called by the handler attached to `attached`. True when the click
    /// started on that exact layer. Clears the record for the next click.
    pub fn take_is_origin(&self, attached: Layer) -> bool {
        let origin = self.origin.take().unwrap_or(attached);
        origin == attached
    }
}

impl PartialEq for ClickOrigin {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.origin, &other.origin)
    }
}

impl std::fmt::Debug for ClickOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClickOrigin")
            .field("origin", &self.origin.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Simulates DOM bubbling: the panel handler (if the click started
    /// inside it) runs before the backdrop handler.
    fn dispatch(origin: &ClickOrigin, started_in_panel: bool, dismissals: &mut usize) {
        if started_in_panel {
            origin.record(Layer::Panel);
        }
        if origin.take_is_origin(Layer::Backdrop) {
            *dismissals += 1;
        }
    }

    #[test]
    fn test_backdrop_click_dismisses_once() {
        let origin = ClickOrigin::new();
        let mut dismissals = 0;
        dispatch(&origin, false, &mut dismissals);
        assert_eq!(dismissals, 1);
    }

    #[test]
    fn test_panel_click_does_not_dismiss() {
        let origin = ClickOrigin::new();
        let mut dismissals = 0;
        dispatch(&origin, true, &mut dismissals);
        assert_eq!(dismissals, 0);
    }

    #[test]
    fn test_record_does_not_leak_into_next_click() {
        let origin = ClickOrigin::new();
        let mut dismissals = 0;
        dispatch(&origin, true, &mut dismissals);
        dispatch(&origin, false, &mut dismissals);
        dispatch(&origin, true, &mut dismissals);
        assert_eq!(dismissals, 1);
    }

    #[test]
    fn test_innermost_layer_wins() {
        let origin = ClickOrigin::new();
        origin.record(Layer::Panel);
        origin.record(Layer::Backdrop);
        assert!(!origin.take_is_origin(Layer::Backdrop));
    }

    #[test]
    fn test_clones_share_record() {
        let origin = ClickOrigin::new();
        let panel_side = origin.clone();
        panel_side.record(Layer::Panel);
        assert!(!origin.take_is_origin(Layer::Backdrop));
        assert_eq!(origin, panel_side);
    }
}
