//! The narrow layout contract between a swipe element and its host.
//!
//! The element never lays anything out itself. It reads the rendered size,
//! rewrites one margin field and asks for a re-layout; the host's layout
//! framework does the rest.

use swipehide_core::geometry::Size;

use crate::direction::Edge;

/// Edge margins of the element's layout params, in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Margins {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Margins {
    pub const ZERO: Self = Self::uniform(0);

    pub const fn uniform(value: i32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    /// Read the margin on `edge`.
    pub const fn edge(&self, edge: Edge) -> i32 {
        match edge {
            Edge::Left => self.left,
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
        }
    }

    /// Overwrite the margin on `edge`, leaving the others untouched.
    pub fn set_edge(&mut self, edge: Edge, value: i32) {
        match edge {
            Edge::Left => self.left = value,
            Edge::Top => self.top = value,
            Edge::Right => self.right = value,
            Edge::Bottom => self.bottom = value,
        }
    }

    /// Copy with `edge` replaced.
    pub fn with_edge(mut self, edge: Edge, value: i32) -> Self {
        self.set_edge(edge, value);
        self
    }
}

/// Layout-level visibility of the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// Rendered and participating in layout.
    #[default]
    Visible,
    /// Not rendered and takes no space.
    Gone,
}

impl Visibility {
    pub const fn is_visible(self) -> bool {
        matches!(self, Visibility::Visible)
    }
}

/// Services a host UI framework provides to a swipe element.
///
/// All calls happen on the host's UI thread, interleaved with pointer
/// delivery and frame ticks.
pub trait SwipeHost {
    /// Current rendered size of the element.
    fn rendered_size(&self) -> Size<i32>;

    /// Current layout margins.
    fn margins(&self) -> Margins;

    /// Replace the layout margins. Takes effect on the next layout pass.
    fn set_margins(&mut self, margins: Margins);

    /// Schedule a layout pass.
    fn request_layout(&mut self);

    fn visibility(&self) -> Visibility;

    fn set_visibility(&mut self, visibility: Visibility);

    /// Host-level enabled state, independent of the slide flag.
    fn is_enabled(&self) -> bool {
        true
    }
}

impl<H: SwipeHost + ?Sized> SwipeHost for Box<H> {
    fn rendered_size(&self) -> Size<i32> {
        (**self).rendered_size()
    }

    fn margins(&self) -> Margins {
        (**self).margins()
    }

    fn set_margins(&mut self, margins: Margins) {
        (**self).set_margins(margins)
    }

    fn request_layout(&mut self) {
        (**self).request_layout()
    }

    fn visibility(&self) -> Visibility {
        (**self).visibility()
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        (**self).set_visibility(visibility)
    }

    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}
