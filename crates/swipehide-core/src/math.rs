/// Math types re-exported from [`glam`].
///
/// Pointer positions travel through the event layer as [`Vec2`] in logical
/// pixels; the component truncates them to integer layout units itself.
///
/// ```
/// use swipehide_core::math::Vec2;
///
/// let start = Vec2::new(120.0, 40.0);
/// let now = Vec2::new(95.5, 41.0);
/// assert_eq!((now - start).x, -24.5);
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

pub use fast::Vec2;
