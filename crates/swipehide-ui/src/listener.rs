//! Observer slot for visibility changes.

use std::fmt;
use std::rc::{Rc, Weak};

use crate::hideable::SwipeHideable;

/// Receives committed visibility transitions of a swipe element.
///
/// Called on the UI thread after a show or hide run completes, never during
/// drags or intermediate frames.
pub trait SwipeChangeListener {
    /// `visible` is the state the element just settled into.
    fn on_swipe_change(&self, visible: bool, source: &dyn SwipeHideable);
}

impl<F> SwipeChangeListener for F
where
    F: Fn(bool, &dyn SwipeHideable),
{
    fn on_swipe_change(&self, visible: bool, source: &dyn SwipeHideable) {
        self(visible, source)
    }
}

/// Holds at most one listener without keeping it alive.
#[derive(Default)]
pub struct ListenerSlot {
    listener: Option<Weak<dyn SwipeChangeListener>>,
}

impl ListenerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the listener; `None` clears the slot.
    pub fn set(&mut self, listener: Option<Weak<dyn SwipeChangeListener>>) {
        self.listener = listener;
    }

    pub fn clear(&mut self) {
        self.listener = None;
    }

    /// Whether a listener is registered and still alive.
    pub fn is_set(&self) -> bool {
        self.listener
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    /// The live listener, if any. A dropped listener is cleared.
    pub fn current(&mut self) -> Option<Rc<dyn SwipeChangeListener>> {
        let weak = self.listener.as_ref()?;
        match weak.upgrade() {
            Some(listener) => Some(listener),
            None => {
                tracing::debug!("swipe listener was dropped, clearing slot");
                self.listener = None;
                None
            }
        }
    }
}

impl fmt::Debug for ListenerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSlot")
            .field("is_set", &self.is_set())
            .finish()
    }
}
