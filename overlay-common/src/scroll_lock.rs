//! Reference-counted scroll lock
//!
//! Every open overlay holds a [`ScrollLockGuard`]. The underlying surface is
//! locked when the first guard is taken and unlocked only when the last one
//! is released, so closing one overlay never re-enables scrolling under
//! another that is still open.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// The thing whose scrolling gets suppressed (usually the document body)
pub trait ScrollSurface {
    fn set_locked(&mut self, locked: bool);
}

struct Inner {
    holders: usize,
    surface: Box<dyn ScrollSurface>,
}

/// Shared handle to a scroll lock. Cloning shares the same count.
#[derive(Clone)]
pub struct ScrollLockManager {
    inner: Rc<RefCell<Inner>>,
}

impl ScrollLockManager {
    pub fn new(surface: impl ScrollSurface + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                holders: 0,
                surface: Box::new(surface),
            })),
        }
    }

    /// Take a lock. The surface locks on the first holder.
    pub fn acquire(&self) -> ScrollLockGuard {
        let mut inner = self.inner.borrow_mut();
        inner.holders += 1;
        tracing::debug!("Scroll lock acquired ({} holders)", inner.holders);
        if inner.holders == 1 {
            inner.surface.set_locked(true);
        }
        ScrollLockGuard {
            inner: Some(self.inner.clone()),
        }
    }

    /// Number of guards currently alive
    pub fn holders(&self) -> usize {
        self.inner.borrow().holders
    }

    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }
}

impl PartialEq for ScrollLockManager {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ScrollLockManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLockManager")
            .field("holders", &self.holders())
            .finish()
    }
}

/// A held scroll lock. Released on drop.
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct ScrollLockGuard {
    inner: Option<Rc<RefCell<Inner>>>,
}

impl ScrollLockGuard {
    /// Release now instead of waiting for drop. Safe to call more than once.
    pub fn release(&mut self) {
        let Some(inner) = self.inner.take() else {
            return;
        };
        let mut inner = inner.borrow_mut();
        inner.holders = inner.holders.saturating_sub(1);
        tracing::debug!("Scroll lock released ({} holders)", inner.holders);
        if inner.holders == 0 {
            inner.surface.set_locked(false);
        }
    }

    pub fn is_held(&self) -> bool {
        self.inner.is_some()
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for ScrollLockGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLockGuard")
            .field("held", &self.is_held())
            .finish()
    }
}

/// Holds at most one guard on behalf of a single overlay.
///
/// Clones share the slot, so a render effect can fill it and an unmount
/// hook can empty it without going through reactive state.
#[derive(Clone, Default)]
pub struct ScrollLockSlot {
    guard: Rc<RefCell<Option<ScrollLockGuard>>>,
}

impl ScrollLockSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold a guard from `manager` while `locked` is true, release it otherwise
    pub fn sync(&self, manager: &ScrollLockManager, locked: bool) {
        let mut guard = self.guard.borrow_mut();
        if locked {
            if guard.is_none() {
                *guard = Some(manager.acquire());
            }
        } else if let Some(mut held) = guard.take() {
            held.release();
        }
    }

    /// Release whatever is held. Safe to call more than once.
    pub fn release(&self) {
        if let Some(mut held) = self.guard.borrow_mut().take() {
            held.release();
        }
    }

    pub fn is_held(&self) -> bool {
        self.guard.borrow().is_some()
    }
}

impl PartialEq for ScrollLockSlot {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.guard, &other.guard)
    }
}

impl fmt::Debug for ScrollLockSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLockSlot")
            .field("held", &self.is_held())
            .finish()
    }
}
