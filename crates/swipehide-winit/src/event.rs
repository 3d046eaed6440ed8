use swipehide_core::geometry::{LogicalPosition, Size};
use swipehide_core::math::Vec2;
pub use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent as WinitEvent};

use std::collections::VecDeque;

/// Pointer id used for the left mouse button acting as a pointer.
pub const MOUSE_POINTER_ID: u64 = u64::MAX;

/// Phase of a single pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// The primary pointer touched down.
    Down,
    /// The primary pointer moved.
    Move,
    /// The primary pointer lifted.
    Up,
    /// The gesture was taken away by the system.
    Cancel,
    /// Another pointer touched down while the primary is active.
    SecondaryDown,
    /// A non-primary pointer lifted.
    SecondaryUp,
}

impl PointerPhase {
    /// Whether this phase ends (or interrupts) the tracked gesture.
    pub const fn is_release(self) -> bool {
        matches!(self, PointerPhase::Up | PointerPhase::Cancel | PointerPhase::SecondaryUp)
    }
}

/// A raw pointer sample in logical screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pointer_id: u64,
    pub phase: PointerPhase,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn new(pointer_id: u64, phase: PointerPhase, position: Vec2) -> Self {
        Self {
            pointer_id,
            phase,
            position,
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(0, PointerPhase::Down, Vec2::new(x, y))
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(0, PointerPhase::Move, Vec2::new(x, y))
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(0, PointerPhase::Up, Vec2::new(x, y))
    }

    pub fn cancel(x: f32, y: f32) -> Self {
        Self::new(0, PointerPhase::Cancel, Vec2::new(x, y))
    }

    pub fn secondary_down(x: f32, y: f32) -> Self {
        Self::new(1, PointerPhase::SecondaryDown, Vec2::new(x, y))
    }

    pub fn secondary_up(x: f32, y: f32) -> Self {
        Self::new(1, PointerPhase::SecondaryUp, Vec2::new(x, y))
    }
}

/// Event queue with batching and deduplication
pub struct EventQueue {
    /// Pending events for this frame
    pending: VecDeque<Event>,

    /// High-priority events (processed first)
    priority: VecDeque<Event>,

    /// Hover position, only the last value per frame is kept
    latest_mouse_pos: Option<LogicalPosition<f64>>,
    latest_scale_factor: Option<f64>,

    pointers: PointerTracker,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::with_capacity(64),
            priority: VecDeque::with_capacity(8),
            latest_mouse_pos: None,
            latest_scale_factor: None,
            pointers: PointerTracker::new(),
        }
    }

    /// Push event to queue
    pub fn push(&mut self, event: Event) {
        match event {
            Event::CloseRequested | Event::WindowResized(_) | Event::Focused(_) => {
                self.priority.push_back(event);
            }
            Event::MouseMoved(pos) => {
                self.latest_mouse_pos = Some(pos);
            }
            Event::ScaleFactorChanged(scale) => {
                self.latest_scale_factor = Some(scale);
            }
            // Pointer samples keep their order; the gesture tracker compares
            // consecutive samples.
            Event::Pointer(_) => {
                self.pending.push_back(event);
            }
        }
    }

    /// Translate a winit window event and push the result, if any.
    pub fn push_winit(&mut self, event: WinitEvent, scale_factor: f64) {
        if let Some(event) = self.pointers.translate(event, scale_factor) {
            self.push(event);
        }
    }

    /// Process all events and return batch
    pub fn drain(&mut self) -> EventBatch {
        let mut events = Vec::with_capacity(self.priority.len() + self.pending.len() + 2);

        events.extend(self.priority.drain(..));

        if let Some(pos) = self.latest_mouse_pos.take() {
            events.push(Event::MouseMoved(pos));
        }
        if let Some(scale) = self.latest_scale_factor.take() {
            events.push(Event::ScaleFactorChanged(scale));
        }

        events.extend(self.pending.drain(..));

        EventBatch { events }
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

pub struct EventBatch {
    events: Vec<Event>,
}

impl EventBatch {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Offer every event to `handler`, dropping the ones it consumes.
    pub fn dispatch<H>(&mut self, mut handler: H)
    where
        H: FnMut(&Event) -> HandleStatus,
    {
        self.events.retain(|event| {
            let status = handler(event);
            !status.is_consumed()
        });
    }
}

impl FromIterator<Event> for EventBatch {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone)]
pub enum Event {
    /// Window resized to a new logical size.
    WindowResized(Size<u32>),
    /// Scale factor changed.
    ScaleFactorChanged(f64),
    /// Window focus changed.
    Focused(bool),
    /// Window close requested.
    CloseRequested,
    /// Cursor hovered to a new position with no button held.
    MouseMoved(LogicalPosition<f64>),
    /// A pointer sample belonging to a touch or left-button drag.
    Pointer(PointerEvent),
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HandleStatus: u8 {
        const HANDLED = 0b00000001;
        const CONSUMED = 0b00000010;
    }
}

impl HandleStatus {
    pub const fn is_consumed(&self) -> bool {
        self.contains(Self::CONSUMED)
    }

    pub const fn is_handled(&self) -> bool {
        self.contains(Self::HANDLED)
    }

    pub const fn consumed() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits() | Self::CONSUMED.bits())
    }

    pub const fn handled() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits())
    }

    pub const fn ignored() -> Self {
        Self::empty()
    }
}

/// Folds winit touch and mouse input into a single-pointer sample stream.
///
/// The first touch to go down becomes the primary pointer. Touches that go
/// down while it is held are reported as secondary; their moves are dropped.
/// The left mouse button behaves like a touch while pressed.
#[derive(Debug, Default)]
pub struct PointerTracker {
    primary: Option<u64>,
    cursor: Option<LogicalPosition<f64>>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the pointer currently treated as primary.
    pub fn primary(&self) -> Option<u64> {
        self.primary
    }

    pub fn translate(&mut self, event: WinitEvent, scale_factor: f64) -> Option<Event> {
        match event {
            WinitEvent::Resized(size) => Some(Event::WindowResized(Size::new(
                (size.width as f64 / scale_factor) as u32,
                (size.height as f64 / scale_factor) as u32,
            ))),
            WinitEvent::ScaleFactorChanged { scale_factor, .. } => {
                Some(Event::ScaleFactorChanged(scale_factor))
            }
            WinitEvent::Focused(focus) => Some(Event::Focused(focus)),
            WinitEvent::CloseRequested => Some(Event::CloseRequested),
            WinitEvent::Touch(touch) => {
                let pos = LogicalPosition::from_physical(
                    touch.location.x,
                    touch.location.y,
                    scale_factor,
                );
                self.touch(touch.id, touch.phase, pos).map(Event::Pointer)
            }
            WinitEvent::CursorMoved { position, .. } => {
                let pos = LogicalPosition::from_physical(position.x, position.y, scale_factor);
                self.cursor = Some(pos);
                if self.primary == Some(MOUSE_POINTER_ID) {
                    Some(Event::Pointer(pointer(MOUSE_POINTER_ID, PointerPhase::Move, pos)))
                } else {
                    Some(Event::MouseMoved(pos))
                }
            }
            WinitEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => self.mouse_button(state).map(Event::Pointer),
            unknown => {
                tracing::trace!("ignored window event: {:?}", unknown);
                None
            }
        }
    }

    fn touch(
        &mut self,
        id: u64,
        phase: TouchPhase,
        pos: LogicalPosition<f64>,
    ) -> Option<PointerEvent> {
        let is_primary = self.primary == Some(id);
        let phase = match (phase, self.primary) {
            (TouchPhase::Started, None) => {
                self.primary = Some(id);
                PointerPhase::Down
            }
            (TouchPhase::Started, Some(_)) => PointerPhase::SecondaryDown,
            (TouchPhase::Moved, _) if is_primary => PointerPhase::Move,
            (TouchPhase::Moved, _) => return None,
            (TouchPhase::Ended, _) if is_primary => {
                self.primary = None;
                PointerPhase::Up
            }
            (TouchPhase::Cancelled, _) if is_primary => {
                self.primary = None;
                PointerPhase::Cancel
            }
            (TouchPhase::Ended | TouchPhase::Cancelled, Some(_)) => PointerPhase::SecondaryUp,
            (TouchPhase::Ended | TouchPhase::Cancelled, None) => return None,
        };
        Some(pointer(id, phase, pos))
    }

    fn mouse_button(&mut self, state: ElementState) -> Option<PointerEvent> {
        let pos = self.cursor?;
        match state {
            ElementState::Pressed if self.primary.is_none() => {
                self.primary = Some(MOUSE_POINTER_ID);
                Some(pointer(MOUSE_POINTER_ID, PointerPhase::Down, pos))
            }
            ElementState::Released if self.primary == Some(MOUSE_POINTER_ID) => {
                self.primary = None;
                Some(pointer(MOUSE_POINTER_ID, PointerPhase::Up, pos))
            }
            _ => None,
        }
    }
}

fn pointer(id: u64, phase: PointerPhase, pos: LogicalPosition<f64>) -> PointerEvent {
    PointerEvent::new(id, phase, Vec2::new(pos.x as f32, pos.y as f32))
}
