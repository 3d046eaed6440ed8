use swipehide_ui::{HandleStatus, PointerEvent, SwipeHost, SwipeToHideElement};

/// A scripted pointer sequence.
///
/// ```rust
/// use swipehide_test_utils::GestureScript;
/// use swipehide_ui::PointerPhase;
///
/// let script = GestureScript::at(100.0, 300.0).move_by(-20.0, 0.0).move_by(-20.0, 0.0).up();
/// let phases: Vec<_> = script.events().iter().map(|e| e.phase).collect();
/// assert_eq!(
///     phases,
///     vec![PointerPhase::Down, PointerPhase::Move, PointerPhase::Move, PointerPhase::Up]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct GestureScript {
    events: Vec<PointerEvent>,
    x: f32,
    y: f32,
}

impl GestureScript {
    /// Start with a pointer-down at `(x, y)`.
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            events: vec![PointerEvent::down(x, y)],
            x,
            y,
        }
    }

    /// Start without a pointer-down; the first move opens the gesture.
    pub fn headless(x: f32, y: f32) -> Self {
        Self {
            events: Vec::new(),
            x,
            y,
        }
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self.events.push(PointerEvent::moved(x, y));
        self
    }

    pub fn move_by(self, dx: f32, dy: f32) -> Self {
        let (x, y) = (self.x + dx, self.y + dy);
        self.move_to(x, y)
    }

    /// Move in `steps` equal increments totalling `(dx, dy)`.
    pub fn drag_by(mut self, dx: f32, dy: f32, steps: usize) -> Self {
        let steps = steps.max(1);
        for _ in 0..steps {
            self = self.move_by(dx / steps as f32, dy / steps as f32);
        }
        self
    }

    pub fn secondary_down(mut self) -> Self {
        self.events.push(PointerEvent::secondary_down(self.x, self.y));
        self
    }

    pub fn secondary_up(mut self) -> Self {
        self.events.push(PointerEvent::secondary_up(self.x, self.y));
        self
    }

    pub fn up(mut self) -> Self {
        self.events.push(PointerEvent::up(self.x, self.y));
        self
    }

    pub fn cancel(mut self) -> Self {
        self.events.push(PointerEvent::cancel(self.x, self.y));
        self
    }

    pub fn events(&self) -> &[PointerEvent] {
        &self.events
    }

    /// Deliver every event to `element`, returning the statuses.
    pub fn play<H: SwipeHost>(&self, element: &mut SwipeToHideElement<H>) -> Vec<HandleStatus> {
        self.events
            .iter()
            .map(|event| element.on_pointer_event(event))
            .collect()
    }
}
