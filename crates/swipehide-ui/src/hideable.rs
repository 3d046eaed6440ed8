use std::rc::Weak;

use crate::direction::Direction;
use crate::element_id::ElementId;
use crate::error::SwipeResult;
use crate::listener::SwipeChangeListener;

/// Public contract of an element that can be swiped or animated off-screen.
///
/// Listeners receive the source as `&dyn SwipeHideable`, so they can query
/// it but not drive it from inside the callback.
pub trait SwipeHideable {
    fn id(&self) -> ElementId;

    /// Set the edge the element slides out through.
    fn set_direction(&mut self, direction: Direction);

    /// Configured direction, [`Direction::Unset`] by default.
    fn direction(&self) -> Direction;

    /// Slide in at the default speed.
    fn show(&mut self) -> SwipeResult<()>;

    /// Slide in over `speed_ms` milliseconds.
    fn show_with_speed(&mut self, speed_ms: u32) -> SwipeResult<()>;

    /// Slide out at the default speed.
    fn hide(&mut self) -> SwipeResult<()>;

    /// Slide out over `speed_ms` milliseconds.
    fn hide_with_speed(&mut self, speed_ms: u32) -> SwipeResult<()>;

    fn is_visible(&self) -> bool;

    /// Allow or forbid pointer gestures. Programmatic show/hide are unaffected.
    fn enable(&mut self, enable: bool);

    fn is_slide_enabled(&self) -> bool;

    /// Register the change listener; `None` removes it.
    fn set_on_swipe_change_listener(&mut self, listener: Option<Weak<dyn SwipeChangeListener>>);
}
