/// Presentation phase of an animated overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not in the render tree
    Closed,
    /// Mounted, enter animation running
    Entering,
    /// Mounted and settled
    Open,
    /// Still mounted, exit animation running
    Exiting,
}

#[allow(clippy::derivable_impls)]
impl Default for Phase {
    fn default() -> Self {
        Phase::Closed
    }
}

/// Tracks which phase an overlay is in given the caller's visibility flag.
///
/// The flag drives `Closed -> Entering` and `Open/Entering -> Exiting`;
/// the end of an animation drives `Entering -> Open` and `Exiting -> Closed`.
/// A flag flip mid-animation reverses direction without waiting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Presentation {
    phase: Phase,
}

impl Presentation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Apply the caller's visibility flag. Returns true if the phase changed.
    pub fn sync(&mut self, is_open: bool) -> bool {
        let next = match (self.phase, is_open) {
            (Phase::Closed, true) | (Phase::Exiting, true) => Phase::Entering,
            (Phase::Entering, false) | (Phase::Open, false) => Phase::Exiting,
            (phase, _) => phase,
        };
        self.transition(next)
    }

    /// Mark the running animation as done. Returns true if the phase changed.
    ///
    /// Events arriving in a settled phase are ignored.
    pub fn animation_finished(&mut self) -> bool {
        let next = match self.phase {
            Phase::Entering => Phase::Open,
            Phase::Exiting => Phase::Closed,
            phase => phase,
        };
        self.transition(next)
    }

    /// Whether the overlay belongs in the render tree
    pub fn is_mounted(&self) -> bool {
        self.phase != Phase::Closed
    }

    /// Whether the overlay is heading towards (or at) fully visible
    pub fn is_shown(&self) -> bool {
        matches!(self.phase, Phase::Entering | Phase::Open)
    }

    /// Whether an animation is in flight
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Entering | Phase::Exiting)
    }

    fn transition(&mut self, next: Phase) -> bool {
        if next == self.phase {
            return false;
        }
        tracing::debug!("Overlay phase {:?} -> {:?}", self.phase, next);
        self.phase = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed_and_unmounted() {
        let p = Presentation::new();
        assert_eq!(p.phase(), Phase::Closed);
        assert!(!p.is_mounted());
        assert!(!p.is_shown());
    }

    #[test]
    fn test_full_open_close_cycle() {
        let mut p = Presentation::new();

        assert!(p.sync(true));
        assert_eq!(p.phase(), Phase::Entering);
        assert!(p.is_mounted());
        assert!(p.is_animating());

        assert!(p.animation_finished());
        assert_eq!(p.phase(), Phase::Open);
        assert!(!p.is_animating());

        assert!(p.sync(false));
        assert_eq!(p.phase(), Phase::Exiting);
        assert!(p.is_mounted());
        assert!(!p.is_shown());

        assert!(p.animation_finished());
        assert_eq!(p.phase(), Phase::Closed);
        assert!(!p.is_mounted());
    }

    #[test]
    fn test_close_during_enter_animation() {
        let mut p = Presentation::new();
        p.sync(true);
        assert!(p.sync(false));
        assert_eq!(p.phase(), Phase::Exiting);
        p.animation_finished();
        assert_eq!(p.phase(), Phase::Closed);
    }

    #[test]
    fn test_reopen_during_exit_animation() {
        let mut p = Presentation::new();
        p.sync(true);
        p.animation_finished();
        p.sync(false);
        assert!(p.sync(true));
        assert_eq!(p.phase(), Phase::Entering);
    }

    #[test]
    fn test_repeated_flag_is_noop() {
        let mut p = Presentation::new();
        assert!(!p.sync(false));
        p.sync(true);
        assert!(!p.sync(true));
        p.animation_finished();
        assert!(!p.sync(true));
        assert_eq!(p.phase(), Phase::Open);
    }

    #[test]
    fn test_stale_animation_event_ignored() {
        let mut p = Presentation::new();
        assert!(!p.animation_finished());
        assert_eq!(p.phase(), Phase::Closed);

        p.sync(true);
        p.animation_finished();
        assert!(!p.animation_finished());
        assert_eq!(p.phase(), Phase::Open);
    }

    #[test]
    fn test_can_reopen_indefinitely() {
        let mut p = Presentation::new();
        for _ in 0..5 {
            p.sync(true);
            p.animation_finished();
            assert_eq!(p.phase(), Phase::Open);
            p.sync(false);
            p.animation_finished();
            assert_eq!(p.phase(), Phase::Closed);
        }
    }
}
