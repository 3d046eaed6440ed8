use std::rc::Rc;

use parking_lot::Mutex;
use swipehide_ui::{ElementId, SwipeChangeListener, SwipeHideable};

/// One recorded `on_swipe_change` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeChange {
    pub visible: bool,
    pub source: ElementId,
    /// `is_visible()` of the source at callback time.
    pub source_visible: bool,
}

/// Listener that records every callback it receives.
#[derive(Debug, Default)]
pub struct RecordingListener {
    changes: Mutex<Vec<SwipeChange>>,
}

impl RecordingListener {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Create a listener and register it on `element`.
    ///
    /// The element only holds a weak reference; keep the returned `Rc` alive
    /// for as long as callbacks should be recorded.
    pub fn attach<E: SwipeHideable + ?Sized>(element: &mut E) -> Rc<Self> {
        let listener = Self::new();
        let as_dyn: Rc<dyn SwipeChangeListener> = listener.clone();
        element.set_on_swipe_change_listener(Some(Rc::downgrade(&as_dyn)));
        listener
    }

    pub fn changes(&self) -> Vec<SwipeChange> {
        self.changes.lock().clone()
    }

    /// Just the `visible` flags, in order.
    pub fn visibilities(&self) -> Vec<bool> {
        self.changes.lock().iter().map(|c| c.visible).collect()
    }

    pub fn count(&self) -> usize {
        self.changes.lock().len()
    }

    pub fn clear(&self) {
        self.changes.lock().clear();
    }
}

impl SwipeChangeListener for RecordingListener {
    fn on_swipe_change(&self, visible: bool, source: &dyn SwipeHideable) {
        self.changes.lock().push(SwipeChange {
            visible,
            source: source.id(),
            source_visible: source.is_visible(),
        });
    }
}
