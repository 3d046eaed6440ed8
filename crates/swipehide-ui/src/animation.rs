//! Offset animation for swipe elements.
//!
//! An [`OffsetAnimation`] interpolates an integer margin between two values
//! over a duration, advanced by the host's frame delta. An [`AnimationRun`]
//! wraps one animation together with what it means for the element (show or
//! hide) and a [`RunToken`] that decides whether its ticks still count.
//!
//! # Example
//!
//! ```
//! use swipehide_ui::animation::{EasingFunction, OffsetAnimation};
//!
//! let mut anim = OffsetAnimation::new(-200, 0)
//!     .duration_ms(1000)
//!     .easing(EasingFunction::Linear);
//!
//! anim.update(0.5);
//! assert_eq!(anim.value(), -100);
//!
//! assert!(!anim.update(0.5));
//! assert_eq!(anim.value(), 0);
//! ```

use crate::direction::Edge;

/// Duration used when no explicit speed is given, in milliseconds.
pub const DEFAULT_SPEED_MS: u32 = 300;

/// Easing functions for offset animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    /// Linear interpolation
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    EaseInOut,
    /// Cubic ease out
    CubicOut,
    /// Fast start, slow finish: `1 - (1 - t)^(2 * factor)`.
    Decelerate(f32),
}

impl Default for EasingFunction {
    fn default() -> Self {
        EasingFunction::Decelerate(1.0)
    }
}

impl EasingFunction {
    /// Apply the easing function to a normalized time value (0.0 to 1.0).
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseIn => t * t,
            EasingFunction::EaseOut => t * (2.0 - t),
            EasingFunction::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            EasingFunction::CubicOut => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
            EasingFunction::Decelerate(factor) => {
                let inv = 1.0 - t;
                if *factor == 1.0 {
                    1.0 - inv * inv
                } else {
                    1.0 - inv.powf(2.0 * factor)
                }
            }
        }
    }
}

/// Animation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    /// Animation is running
    Running,
    /// Animation reached its end value
    Completed,
}

/// Timed interpolation of an integer offset.
#[derive(Debug, Clone)]
pub struct OffsetAnimation {
    from: i32,
    to: i32,
    /// Duration in seconds
    duration: f32,
    /// Elapsed time in seconds
    elapsed: f32,
    easing: EasingFunction,
    state: AnimationState,
}

impl OffsetAnimation {
    /// Create an animation from `from` to `to` with the default speed and
    /// decelerating easing.
    pub fn new(from: i32, to: i32) -> Self {
        Self {
            from,
            to,
            duration: DEFAULT_SPEED_MS as f32 / 1000.0,
            elapsed: 0.0,
            easing: EasingFunction::default(),
            state: AnimationState::Running,
        }
    }

    /// Set the duration in seconds.
    pub fn duration(mut self, duration: f32) -> Self {
        self.duration = duration.max(0.0);
        self
    }

    /// Set the duration in milliseconds.
    pub fn duration_ms(self, speed_ms: u32) -> Self {
        self.duration(speed_ms as f32 / 1000.0)
    }

    /// Set the easing function.
    pub fn easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    pub fn from_value(&self) -> i32 {
        self.from
    }

    pub fn to_value(&self) -> i32 {
        self.to
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Normalized progress in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        if self.state == AnimationState::Completed {
            1.0
        } else if self.duration <= 0.0 {
            0.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Current offset. Intermediate values truncate toward zero; the last
    /// value is exactly `to`.
    pub fn value(&self) -> i32 {
        let t = self.progress();
        if t >= 1.0 {
            return self.to;
        }
        let eased = self.easing.apply(t) as f64;
        let span = self.to as i64 - self.from as i64;
        // Stays between `from` and `to`, so the narrowing cast is lossless.
        (self.from as i64 + (span as f64 * eased) as i64) as i32
    }

    /// Advance by `delta_time` seconds.
    ///
    /// Returns true if the animation is still running.
    pub fn update(&mut self, delta_time: f32) -> bool {
        if self.state == AnimationState::Completed {
            return false;
        }

        self.elapsed += delta_time.max(0.0);
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.state = AnimationState::Completed;
            return false;
        }

        true
    }
}

/// Validity token of one animation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunToken(u64);

impl RunToken {
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Hands out strictly increasing run tokens.
#[derive(Debug, Default)]
pub struct RunTokens {
    next: u64,
}

impl RunTokens {
    pub fn next_token(&mut self) -> RunToken {
        self.next += 1;
        RunToken(self.next)
    }
}

/// Who may currently write the element's edge offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Authority {
    /// Nobody is moving the element.
    #[default]
    Idle,
    /// A pointer gesture is dragging the element.
    Gesture,
    /// The animation run holding this token.
    Run(RunToken),
}

/// Which state a run commits on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    ToShown,
    ToHidden,
}

/// One show or hide transition in flight.
#[derive(Debug, Clone)]
pub struct AnimationRun {
    pub token: RunToken,
    pub kind: RunKind,
    /// Margin field the run writes, fixed at start.
    pub edge: Edge,
    /// Visibility when the run started; decides whether completion notifies.
    pub was_visible: bool,
    pub animation: OffsetAnimation,
}

impl AnimationRun {
    /// Whether finishing this run is a real visibility transition.
    pub fn commits_transition(&self) -> bool {
        match self.kind {
            RunKind::ToShown => !self.was_visible,
            RunKind::ToHidden => self.was_visible,
        }
    }
}
