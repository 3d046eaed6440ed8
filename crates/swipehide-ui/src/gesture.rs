//! Pointer gesture tracking for swipe elements.
//!
//! The tracker turns one pointer's samples into margin values and keeps a
//! running guess of whether the user is pushing the element away. It never
//! touches layout; the element applies what the tracker returns.

use crate::direction::DirectionPolicy;

/// State of the single pointer being tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    /// Coordinate along the slide axis where the gesture started.
    pub start: i32,
    /// Most recent coordinate along the slide axis.
    pub last: i32,
    /// Pointer-to-margin offset fixed at gesture start.
    pub delta: i32,
}

/// Converts pointer samples into drag offsets and a hide intent.
#[derive(Debug, Default)]
pub struct GestureTracker {
    drag_state: Option<DragState>,
    /// Survives between gestures; a release with no movement reuses it.
    hide_intent: bool,
}

impl GestureTracker {
    /// Create an idle tracker with a "show" intent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking at `coord` while the element sits at `margin`.
    pub fn press(&mut self, policy: &DirectionPolicy, coord: i32, margin: i32) {
        self.drag_state = Some(DragState {
            start: coord,
            last: coord,
            delta: coord.saturating_add(policy.hide_sign.saturating_mul(margin)),
        });
    }

    /// Feed a move sample and return the margin the element should take.
    ///
    /// A move with no preceding press starts the gesture at `coord`. The
    /// returned margin never goes past fully shown (0) but is not bounded on
    /// the hidden side.
    pub fn drag(&mut self, policy: &DirectionPolicy, coord: i32, margin: i32) -> i32 {
        if self.drag_state.is_none() {
            self.press(policy, coord, margin);
        }
        let Some(state) = self.drag_state.as_mut() else {
            return margin;
        };

        if let Some(hide) = policy.step_intent(coord.saturating_sub(state.last)) {
            self.hide_intent = hide;
        }
        state.last = coord;

        // Pointer coordinates saturate at the i32 range, so the offset does too.
        coord
            .saturating_sub(state.delta)
            .saturating_mul(-policy.hide_sign)
            .min(0)
    }

    /// Stop tracking and return whether the gesture should commit to hidden.
    pub fn release(&mut self) -> bool {
        self.drag_state = None;
        self.hide_intent
    }

    /// Check if a pointer is currently being tracked.
    pub fn is_tracking(&self) -> bool {
        self.drag_state.is_some()
    }

    pub fn hide_intent(&self) -> bool {
        self.hide_intent
    }

    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag_state.as_ref()
    }

    /// Net movement along the slide axis since the gesture started.
    pub fn drag_distance(&self) -> Option<i32> {
        self.drag_state.map(|s| s.last.saturating_sub(s.start))
    }
}
