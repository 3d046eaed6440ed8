pub mod event;
pub mod time;

pub use event::{
    Event, EventBatch, EventQueue, HandleStatus, MOUSE_POINTER_ID, PointerEvent, PointerPhase,
    PointerTracker,
};
pub use time::FrameTime;
