use std::time::{Duration, Instant};

/// Frame timing handed to the animation tick.
///
/// The host loop calls [`FrameTime::tick`] once per frame and forwards
/// [`FrameTime::delta_seconds`] to every element it drives.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use swipehide_winit::FrameTime;
///
/// let mut time = FrameTime::new();
/// time.advance(Duration::from_millis(16));
/// assert_eq!(time.frame_count, 1);
/// assert!((time.delta_seconds() - 0.016).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct FrameTime {
    /// Time elapsed since the last frame
    pub delta: Duration,
    /// Total time elapsed since the first frame
    pub elapsed: Duration,
    /// Total number of frames
    pub frame_count: u64,
    last_instant: Option<Instant>,
}

impl FrameTime {
    pub fn new() -> Self {
        Self {
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
            last_instant: None,
        }
    }

    /// Advance using the wall clock. The first call yields a zero delta.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = self
            .last_instant
            .map(|last| now.duration_since(last))
            .unwrap_or(Duration::ZERO);
        self.last_instant = Some(now);
        self.advance(delta);
    }

    /// Advance by a fixed step; used by headless hosts and tests.
    pub fn advance(&mut self, delta: Duration) {
        self.delta = delta;
        self.elapsed += delta;
        self.frame_count += 1;
    }

    /// Returns delta time in seconds (f32)
    #[inline]
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Returns elapsed time in seconds (f32)
    #[inline]
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }
}

impl Default for FrameTime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_has_zero_delta() {
        let mut time = FrameTime::new();
        time.tick();
        assert_eq!(time.delta, Duration::ZERO);
        assert_eq!(time.frame_count, 1);
    }

    #[test]
    fn test_advance_accumulates() {
        let mut time = FrameTime::new();
        time.advance(Duration::from_millis(100));
        time.advance(Duration::from_millis(150));
        assert_eq!(time.elapsed, Duration::from_millis(250));
        assert!((time.elapsed_seconds() - 0.25).abs() < 1e-6);
    }
}
