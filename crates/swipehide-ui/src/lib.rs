//! swipehide UI - an element that slides off-screen through one edge
//!
//! [`SwipeToHideElement`] can be dragged away with a pointer or shown and
//! hidden programmatically with an eased slide, and reports settled
//! visibility changes to an optional listener:
//! - one fixed [`Direction`] per element, selected through a policy table
//! - live drag offsets with a per-sample "hide intent"
//! - a single authoritative animation run; pointer input or a newer run
//!   supersedes it
//! - host-agnostic: layout is reached only through [`SwipeHost`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use swipehide_ui::prelude::*;
//!
//! let mut sheet = SwipeToHideElement::new(
//!     "bottom_sheet",
//!     host,
//!     SwipeConfig::new().direction(Direction::Bottom),
//! );
//!
//! // In the event loop:
//! // sheet.handle_events(&mut event_batch);
//! // let needs_frame = sheet.update(frame_time.delta_seconds());
//! ```

pub mod animation;
pub mod config;
pub mod direction;
pub mod element;
pub mod element_id;
pub mod error;
pub mod gesture;
pub mod hideable;
pub mod layout;
pub mod listener;

pub use animation::{DEFAULT_SPEED_MS, EasingFunction, OffsetAnimation};
pub use config::SwipeConfig;
pub use direction::{Axis, Direction, DirectionPolicy, Edge, ParseDirectionError};
pub use element::SwipeToHideElement;
pub use element_id::ElementId;
pub use error::{SwipeError, SwipeResult};
pub use gesture::GestureTracker;
pub use hideable::SwipeHideable;
pub use layout::{Margins, SwipeHost, Visibility};
pub use listener::{ListenerSlot, SwipeChangeListener};

// Re-export the event types the element consumes
pub use swipehide_winit::event::{EventBatch, HandleStatus, PointerEvent, PointerPhase};

pub mod prelude {
    pub use crate::{
        Direction, ElementId, Margins, SwipeChangeListener, SwipeConfig, SwipeError,
        SwipeHideable, SwipeHost, SwipeResult, SwipeToHideElement, Visibility,
    };
    pub use swipehide_winit::event::{PointerEvent, PointerPhase};
}
