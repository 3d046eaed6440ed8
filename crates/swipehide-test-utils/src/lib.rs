//! Test utilities for swipehide.
//!
//! - [`MockHost`] - a [`SwipeHost`](swipehide_ui::SwipeHost) that records
//!   every layout call
//! - [`RecordingListener`] - collects `on_swipe_change` callbacks
//! - [`GestureScript`] - builds pointer sequences and plays them into an element
//! - [`run_to_completion`] - ticks an element until its run settles
//!
//! # Example
//!
//! ```rust
//! use swipehide_test_utils::{MockHost, RecordingListener, run_to_completion};
//! use swipehide_ui::prelude::*;
//!
//! let mut el = SwipeToHideElement::new(
//!     "panel",
//!     MockHost::new(200, 400),
//!     SwipeConfig::new().direction(Direction::Left),
//! );
//! let listener = RecordingListener::attach(&mut el);
//!
//! el.hide().unwrap();
//! run_to_completion(&mut el);
//!
//! assert_eq!(listener.visibilities(), vec![false]);
//! assert_eq!(el.host().margins().left, -200);
//! ```

pub mod gesture_script;
pub mod mock_host;
pub mod recording_listener;

pub use gesture_script::GestureScript;
pub use mock_host::MockHost;
pub use recording_listener::{RecordingListener, SwipeChange};

use swipehide_ui::{SwipeHost, SwipeToHideElement};

/// Frame step used by [`run_to_completion`], in seconds.
pub const FRAME_DT: f32 = 1.0 / 60.0;

/// Upper bound on frames before [`run_to_completion`] gives up.
pub const MAX_FRAMES: usize = 10_000;

/// Tick `element` at 60 fps until no run is active. Returns the frame count.
pub fn run_to_completion<H: SwipeHost>(element: &mut SwipeToHideElement<H>) -> usize {
    run_frames(element, MAX_FRAMES)
}

/// Tick `element` at most `frames` times, stopping early once it settles.
pub fn run_frames<H: SwipeHost>(element: &mut SwipeToHideElement<H>, frames: usize) -> usize {
    let mut ticks = 0;
    while ticks < frames {
        ticks += 1;
        if !element.update(FRAME_DT) {
            break;
        }
    }
    ticks
}
