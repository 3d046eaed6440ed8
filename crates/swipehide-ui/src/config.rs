use crate::animation::{DEFAULT_SPEED_MS, EasingFunction};
use crate::direction::Direction;

/// Construction-time settings for a swipe element.
///
/// # Example
/// ```
/// use swipehide_ui::{Direction, SwipeConfig};
///
/// let config = SwipeConfig::new()
///     .direction(Direction::Bottom)
///     .enabled(false);
/// assert_eq!(config.direction, Direction::Bottom);
/// assert_eq!(config.default_speed_ms, 300);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    /// Initial slide direction.
    pub direction: Direction,
    /// Whether pointer gestures are accepted initially.
    pub enabled: bool,
    /// Duration of `show()`/`hide()` and of gesture-release runs.
    pub default_speed_ms: u32,
    /// Easing applied to every run.
    pub easing: EasingFunction,
}

impl SwipeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn default_speed_ms(mut self, speed_ms: u32) -> Self {
        self.default_speed_ms = speed_ms;
        self
    }

    pub fn easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Unset,
            enabled: true,
            default_speed_ms: DEFAULT_SPEED_MS,
            easing: EasingFunction::default(),
        }
    }
}
