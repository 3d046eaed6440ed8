//! The swipe-to-hide element.
//!
//! Pointer samples and frame ticks arrive interleaved on the UI thread. At
//! any instant exactly one party may write the edge margin: the gesture
//! tracker or the animation run named by [`Authority`]. A pointer event
//! takes authority away from a running animation, and the run notices on its
//! next tick and drops itself without touching layout.

use std::rc::Weak;

use swipehide_core::profiling::profile_function;
use swipehide_winit::event::{Event, EventBatch, HandleStatus, PointerEvent, PointerPhase};

use crate::animation::{
    AnimationRun, Authority, EasingFunction, OffsetAnimation, RunKind, RunTokens,
};
use crate::config::SwipeConfig;
use crate::direction::{Direction, DirectionPolicy, Edge};
use crate::element_id::ElementId;
use crate::error::{SwipeError, SwipeResult};
use crate::gesture::GestureTracker;
use crate::hideable::SwipeHideable;
use crate::layout::{SwipeHost, Visibility};
use crate::listener::{ListenerSlot, SwipeChangeListener};

/// An element that can be dragged or animated off-screen through one edge.
///
/// # Example
/// ```
/// # use swipehide_core::geometry::Size;
/// # use swipehide_ui::{Margins, SwipeHost, Visibility};
/// # #[derive(Default)]
/// # struct Panel { margins: Margins, visibility: Visibility }
/// # impl SwipeHost for Panel {
/// #     fn rendered_size(&self) -> Size<i32> { Size::new(200, 600) }
/// #     fn margins(&self) -> Margins { self.margins }
/// #     fn set_margins(&mut self, margins: Margins) { self.margins = margins; }
/// #     fn request_layout(&mut self) {}
/// #     fn visibility(&self) -> Visibility { self.visibility }
/// #     fn set_visibility(&mut self, visibility: Visibility) { self.visibility = visibility; }
/// # }
/// use swipehide_ui::{Direction, SwipeConfig, SwipeHideable, SwipeToHideElement};
///
/// let config = SwipeConfig::new().direction(Direction::Left);
/// let mut drawer = SwipeToHideElement::new("drawer", Panel::default(), config);
///
/// drawer.hide().unwrap();
/// while drawer.update(0.016) {}
///
/// assert!(!drawer.is_visible());
/// assert_eq!(drawer.offset(), Some(-200));
/// ```
#[derive(Debug)]
pub struct SwipeToHideElement<H: SwipeHost> {
    id: ElementId,
    host: H,
    direction: Direction,
    slide_enabled: bool,
    default_speed_ms: u32,
    easing: EasingFunction,
    gesture: GestureTracker,
    run: Option<AnimationRun>,
    authority: Authority,
    tokens: RunTokens,
    listener: ListenerSlot,
}

impl<H: SwipeHost> SwipeToHideElement<H> {
    pub fn new(id: impl Into<ElementId>, host: H, config: SwipeConfig) -> Self {
        Self {
            id: id.into(),
            host,
            direction: config.direction,
            slide_enabled: config.enabled,
            default_speed_ms: config.default_speed_ms,
            easing: config.easing,
            gesture: GestureTracker::new(),
            run: None,
            authority: Authority::Idle,
            tokens: RunTokens::default(),
            listener: ListenerSlot::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn default_speed_ms(&self) -> u32 {
        self.default_speed_ms
    }

    /// Current margin on the configured edge, `None` while unset.
    pub fn offset(&self) -> Option<i32> {
        let policy = self.direction.policy()?;
        Some(self.host.margins().edge(policy.edge))
    }

    /// Whether an animation run currently holds authority.
    pub fn is_animating(&self) -> bool {
        matches!(self.authority, Authority::Run(_))
    }

    /// Whether a pointer is being tracked.
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_tracking()
    }

    pub fn authority(&self) -> Authority {
        self.authority
    }

    /// The run that will advance on the next tick, if it still has authority.
    pub fn active_run(&self) -> Option<&AnimationRun> {
        self.run
            .as_ref()
            .filter(|run| self.authority == Authority::Run(run.token))
    }

    /// What a release right now would commit to.
    pub fn hide_intent(&self) -> bool {
        self.gesture.hide_intent()
    }

    /// Feed every pointer sample in `events` to this element.
    ///
    /// The host is expected to have routed the batch to this element already;
    /// pointer events are consumed, everything else is left in the batch.
    pub fn handle_events(&mut self, events: &mut EventBatch) {
        events.dispatch(|event| match event {
            Event::Pointer(pointer) => self.on_pointer_event(pointer),
            _ => HandleStatus::ignored(),
        });
    }

    /// Handle one pointer sample.
    ///
    /// Always consumes the event, even when sliding is disabled, so the
    /// gesture does not leak to whatever lies underneath.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> HandleStatus {
        profile_function!();

        if !self.slide_enabled || !self.host.is_enabled() {
            return HandleStatus::consumed();
        }

        if let Authority::Run(token) = self.authority {
            tracing::debug!(
                element = %self.id,
                run = token.as_u64(),
                "pointer took over from animation run"
            );
            self.authority = Authority::Gesture;
        }

        let Some(policy) = self.direction.policy() else {
            if event.phase.is_release() {
                self.gesture.release();
                self.authority = Authority::Idle;
                tracing::warn!(element = %self.id, "gesture released with no swipe direction set");
            }
            return HandleStatus::consumed();
        };

        let coord = policy.axis.coordinate(event.position);
        let margin = self.host.margins().edge(policy.edge);

        match event.phase {
            PointerPhase::Down => {
                self.gesture.press(&policy, coord, margin);
                self.authority = Authority::Gesture;
            }
            PointerPhase::Move => {
                self.authority = Authority::Gesture;
                let offset = self.gesture.drag(&policy, coord, margin);
                tracing::trace!(
                    element = %self.id,
                    offset,
                    hide = self.gesture.hide_intent(),
                    "drag"
                );
                self.apply_offset(policy.edge, offset);
            }
            PointerPhase::SecondaryDown => {}
            PointerPhase::Up | PointerPhase::Cancel | PointerPhase::SecondaryUp => {
                self.release(&policy);
            }
        }

        HandleStatus::consumed()
    }

    /// Advance the active run by `delta_time` seconds.
    ///
    /// Returns true while a run still needs frames.
    pub fn update(&mut self, delta_time: f32) -> bool {
        profile_function!();

        let Some(mut run) = self.run.take() else {
            return false;
        };

        if self.authority != Authority::Run(run.token) {
            tracing::debug!(
                element = %self.id,
                run = run.token.as_u64(),
                "animation run lost authority, cancelled"
            );
            return false;
        }

        let running = run.animation.update(delta_time);
        let value = run.animation.value();
        tracing::trace!(element = %self.id, run = run.token.as_u64(), value, "tick");
        self.apply_offset(run.edge, value);

        if running {
            self.run = Some(run);
            return true;
        }

        self.finish_run(run);
        false
    }

    fn release(&mut self, policy: &DirectionPolicy) {
        let hide = self.gesture.release();
        self.authority = Authority::Idle;
        tracing::debug!(element = %self.id, hide, edge = ?policy.edge, "gesture released");

        let speed = self.default_speed_ms;
        let result = if hide {
            self.start_hide(speed)
        } else {
            self.start_show(speed)
        };
        if let Err(err) = result {
            tracing::warn!(element = %self.id, "gesture release ignored: {}", err);
        }
    }

    fn start_show(&mut self, speed_ms: u32) -> SwipeResult<()> {
        let policy = self
            .direction
            .policy()
            .ok_or(SwipeError::NoDirectionConfigured)?;

        let from = self.host.margins().edge(policy.edge);
        let was_visible = self.is_visible();
        // Visible right away so it takes part in layout while sliding in.
        self.host.set_visibility(Visibility::Visible);

        self.start_run(RunKind::ToShown, policy.edge, was_visible, from, 0, speed_ms);
        Ok(())
    }

    fn start_hide(&mut self, speed_ms: u32) -> SwipeResult<()> {
        let policy = self
            .direction
            .policy()
            .ok_or(SwipeError::NoDirectionConfigured)?;

        let from = self.host.margins().edge(policy.edge);
        let extent = policy.axis.extent(self.host.rendered_size());
        let was_visible = self.is_visible();

        self.start_run(RunKind::ToHidden, policy.edge, was_visible, from, -extent, speed_ms);
        Ok(())
    }

    fn start_run(
        &mut self,
        kind: RunKind,
        edge: Edge,
        was_visible: bool,
        from: i32,
        to: i32,
        speed_ms: u32,
    ) {
        if let Some(previous) = self.run.take() {
            tracing::debug!(
                element = %self.id,
                run = previous.token.as_u64(),
                "animation run superseded"
            );
        }

        let token = self.tokens.next_token();
        let animation = OffsetAnimation::new(from, to)
            .duration_ms(speed_ms)
            .easing(self.easing);

        tracing::debug!(
            element = %self.id,
            run = token.as_u64(),
            ?kind,
            from,
            to,
            speed_ms,
            "animation run started"
        );

        self.authority = Authority::Run(token);
        self.apply_offset(edge, animation.value());
        self.run = Some(AnimationRun {
            token,
            kind,
            edge,
            was_visible,
            animation,
        });
    }

    fn finish_run(&mut self, run: AnimationRun) {
        self.authority = Authority::Idle;
        tracing::debug!(
            element = %self.id,
            run = run.token.as_u64(),
            kind = ?run.kind,
            "animation run finished"
        );

        match run.kind {
            RunKind::ToShown => {
                if run.commits_transition() {
                    self.notify(true);
                }
            }
            RunKind::ToHidden => {
                if run.commits_transition() {
                    self.notify(false);
                }
                self.host.set_visibility(Visibility::Gone);
            }
        }
    }

    fn apply_offset(&mut self, edge: Edge, value: i32) {
        let margins = self.host.margins().with_edge(edge, value);
        self.host.set_margins(margins);
        self.host.request_layout();
    }

    fn notify(&mut self, visible: bool) {
        let Some(listener) = self.listener.current() else {
            return;
        };
        tracing::debug!(element = %self.id, visible, "swipe change");
        listener.on_swipe_change(visible, &*self);
    }
}

impl<H: SwipeHost> SwipeHideable for SwipeToHideElement<H> {
    fn id(&self) -> ElementId {
        self.id
    }

    fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn show(&mut self) -> SwipeResult<()> {
        self.start_show(self.default_speed_ms)
    }

    fn show_with_speed(&mut self, speed_ms: u32) -> SwipeResult<()> {
        self.start_show(speed_ms)
    }

    fn hide(&mut self) -> SwipeResult<()> {
        self.start_hide(self.default_speed_ms)
    }

    fn hide_with_speed(&mut self, speed_ms: u32) -> SwipeResult<()> {
        self.start_hide(speed_ms)
    }

    fn is_visible(&self) -> bool {
        self.host.visibility().is_visible()
    }

    fn enable(&mut self, enable: bool) {
        self.slide_enabled = enable;
    }

    fn is_slide_enabled(&self) -> bool {
        self.slide_enabled
    }

    fn set_on_swipe_change_listener(&mut self, listener: Option<Weak<dyn SwipeChangeListener>>) {
        self.listener.set(listener);
    }
}
