use swipehide_core::geometry::Size;
use swipehide_ui::{Margins, SwipeHost, Visibility};

/// In-memory host that records what the element asked of it.
#[derive(Debug, Clone)]
pub struct MockHost {
    size: Size<i32>,
    margins: Margins,
    visibility: Visibility,
    enabled: bool,
    layout_requests: usize,
    margin_writes: Vec<Margins>,
    visibility_writes: Vec<Visibility>,
}

impl MockHost {
    /// A visible host of the given size with zero margins.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            size: Size::new(width, height),
            margins: Margins::ZERO,
            visibility: Visibility::Visible,
            enabled: true,
            layout_requests: 0,
            margin_writes: Vec::new(),
            visibility_writes: Vec::new(),
        }
    }

    /// Start with the given margins (e.g. already slid out).
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Simulate the framework resizing the element.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.size = Size::new(width, height);
    }

    /// Simulate the host disabling the element as a whole.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn layout_requests(&self) -> usize {
        self.layout_requests
    }

    /// Every margins value written, in order.
    pub fn margin_writes(&self) -> &[Margins] {
        &self.margin_writes
    }

    /// Every visibility value written, in order.
    pub fn visibility_writes(&self) -> &[Visibility] {
        &self.visibility_writes
    }

    /// Forget recorded calls, keeping the current state.
    pub fn reset_calls(&mut self) {
        self.layout_requests = 0;
        self.margin_writes.clear();
        self.visibility_writes.clear();
    }
}

impl SwipeHost for MockHost {
    fn rendered_size(&self) -> Size<i32> {
        self.size
    }

    fn margins(&self) -> Margins {
        self.margins
    }

    fn set_margins(&mut self, margins: Margins) {
        self.margins = margins;
        self.margin_writes.push(margins);
    }

    fn request_layout(&mut self) {
        self.layout_requests += 1;
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
        self.visibility_writes.push(visibility);
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_writes() {
        let mut host = MockHost::new(100, 50);
        host.set_margins(Margins::uniform(-3));
        host.request_layout();
        host.set_visibility(Visibility::Gone);

        assert_eq!(host.margin_writes(), &[Margins::uniform(-3)]);
        assert_eq!(host.layout_requests(), 1);
        assert_eq!(host.visibility_writes(), &[Visibility::Gone]);

        host.reset_calls();
        assert_eq!(host.layout_requests(), 0);
        assert_eq!(host.margins(), Margins::uniform(-3));
    }
}
