//! Programmatic show/hide tests (no pointer input).
//!
//! These drive the element through a mock host and check the committed
//! offsets, visibility and listener traffic once runs settle.

use std::cell::Cell;
use std::rc::Rc;

use swipehide_test_utils::{
    MockHost, RecordingListener, SwipeChange, run_frames, run_to_completion,
};
use swipehide_ui::EasingFunction;
use swipehide_ui::animation::RunKind;
use swipehide_ui::prelude::*;

const WIDTH: i32 = 200;
const HEIGHT: i32 = 100;

fn extent(direction: Direction) -> i32 {
    match direction {
        Direction::Left | Direction::Right => WIDTH,
        Direction::Top | Direction::Bottom => HEIGHT,
        Direction::Unset => 0,
    }
}

fn edge_margin(margins: Margins, direction: Direction) -> i32 {
    let policy = direction.policy().unwrap();
    margins.edge(policy.edge)
}

fn shown(direction: Direction) -> SwipeToHideElement<MockHost> {
    SwipeToHideElement::new(
        "panel",
        MockHost::new(WIDTH, HEIGHT),
        SwipeConfig::new().direction(direction),
    )
}

fn hidden(direction: Direction) -> SwipeToHideElement<MockHost> {
    let edge = direction.policy().unwrap().edge;
    let host = MockHost::new(WIDTH, HEIGHT)
        .with_margins(Margins::ZERO.with_edge(edge, -extent(direction)))
        .with_visibility(Visibility::Gone);
    SwipeToHideElement::new("panel", host, SwipeConfig::new().direction(direction))
}

#[test]
fn test_direction_defaults_to_unset() {
    let el = SwipeToHideElement::new("panel", MockHost::new(WIDTH, HEIGHT), SwipeConfig::default());
    assert_eq!(el.direction(), Direction::Unset);
    assert!(el.is_slide_enabled());
    assert_eq!(el.offset(), None);
}

#[test]
fn test_unset_direction_rejects_show_and_hide() {
    let mut el = SwipeToHideElement::new(
        "panel",
        MockHost::new(WIDTH, HEIGHT).with_visibility(Visibility::Gone),
        SwipeConfig::default(),
    );

    assert_eq!(el.show(), Err(SwipeError::NoDirectionConfigured));
    assert_eq!(el.hide_with_speed(50), Err(SwipeError::NoDirectionConfigured));

    // Nothing was touched.
    assert!(!el.is_visible());
    assert!(!el.is_animating());
    assert!(el.host().margin_writes().is_empty());
    assert!(el.host().visibility_writes().is_empty());
    assert_eq!(el.host().layout_requests(), 0);
}

#[test]
fn test_direction_can_be_set_after_construction() {
    let mut el =
        SwipeToHideElement::new("panel", MockHost::new(WIDTH, HEIGHT), SwipeConfig::default());
    el.set_direction(Direction::Top);
    assert_eq!(el.direction(), Direction::Top);
    assert!(el.hide().is_ok());
}

#[test]
fn test_hide_settles_off_screen_in_every_direction() {
    for direction in Direction::ALL {
        for speed in [0, 120, 300, 1000] {
            let mut el = shown(direction);
            let listener = RecordingListener::attach(&mut el);

            el.hide_with_speed(speed).unwrap();
            run_to_completion(&mut el);

            assert_eq!(
                edge_margin(el.host().margins(), direction),
                -extent(direction),
                "{direction} at {speed}ms"
            );
            assert!(!el.is_visible());
            assert!(!el.is_animating());
            assert_eq!(listener.visibilities(), vec![false], "{direction} at {speed}ms");
        }
    }
}

#[test]
fn test_show_settles_on_screen_in_every_direction() {
    for direction in Direction::ALL {
        for speed in [0, 120, 300, 1000] {
            let mut el = hidden(direction);
            let listener = RecordingListener::attach(&mut el);

            el.show_with_speed(speed).unwrap();
            assert!(el.is_visible());
            run_to_completion(&mut el);

            assert_eq!(edge_margin(el.host().margins(), direction), 0);
            assert!(el.is_visible());
            assert_eq!(listener.visibilities(), vec![true], "{direction} at {speed}ms");
        }
    }
}

#[test]
fn test_hide_when_already_hidden_is_silent() {
    let mut el = hidden(Direction::Right);
    let listener = RecordingListener::attach(&mut el);

    el.hide().unwrap();
    run_to_completion(&mut el);

    assert_eq!(listener.count(), 0);
    assert!(!el.is_visible());
    assert_eq!(el.offset(), Some(-WIDTH));
}

#[test]
fn test_show_when_already_visible_is_silent() {
    let mut el = shown(Direction::Bottom);
    let listener = RecordingListener::attach(&mut el);

    el.show().unwrap();
    run_to_completion(&mut el);

    assert_eq!(listener.count(), 0);
    assert!(el.is_visible());
    assert_eq!(el.offset(), Some(0));
}

#[test]
fn test_show_twice_fires_at_most_once() {
    let mut el = hidden(Direction::Left);
    let listener = RecordingListener::attach(&mut el);

    el.show().unwrap();
    run_frames(&mut el, 3);
    el.show().unwrap();
    run_to_completion(&mut el);

    assert!(listener.count() <= 1);
    assert!(el.is_visible());
    assert_eq!(el.offset(), Some(0));
}

#[test]
fn test_settled_show_then_show_again_fires_once() {
    let mut el = hidden(Direction::Top);
    let listener = RecordingListener::attach(&mut el);

    el.show().unwrap();
    run_to_completion(&mut el);
    el.show().unwrap();
    run_to_completion(&mut el);

    assert_eq!(listener.visibilities(), vec![true]);
}

#[test]
fn test_hide_midway_through_show_fires_one_event() {
    let mut el = hidden(Direction::Left);
    let listener = RecordingListener::attach(&mut el);

    el.show().unwrap();
    run_frames(&mut el, 5);
    let midway = el.offset().unwrap();
    assert!(midway > -WIDTH && midway < 0, "offset {midway}");

    el.hide().unwrap();
    run_to_completion(&mut el);

    assert_eq!(listener.visibilities(), vec![false]);
    assert!(!el.is_visible());
    assert_eq!(el.offset(), Some(-WIDTH));
}

#[test]
fn test_show_from_hidden_left_drawer() {
    let host = MockHost::new(200, 600)
        .with_margins(Margins {
            left: -200,
            ..Margins::ZERO
        })
        .with_visibility(Visibility::Gone);
    let mut el =
        SwipeToHideElement::new("drawer", host, SwipeConfig::new().direction(Direction::Left));
    let listener = RecordingListener::attach(&mut el);

    el.show_with_speed(300).unwrap();

    // Visible at t=0, still fully off-screen.
    assert!(el.is_visible());
    assert_eq!(el.offset(), Some(-200));
    assert_eq!(listener.count(), 0);
    let run = el.active_run().unwrap();
    assert_eq!(run.kind, RunKind::ToShown);
    assert_eq!(run.animation.from_value(), -200);

    let frames = run_to_completion(&mut el);
    assert!(frames >= 18, "300ms should take ~18 frames, took {frames}");

    assert_eq!(el.offset(), Some(0));
    assert_eq!(
        listener.changes(),
        vec![SwipeChange {
            visible: true,
            source: ElementId::new("drawer"),
            source_visible: true,
        }]
    );
}

#[test]
fn test_hide_notifies_before_going_gone() {
    let mut el = shown(Direction::Top);
    let listener = RecordingListener::attach(&mut el);

    el.hide().unwrap();
    run_to_completion(&mut el);

    let changes = listener.changes();
    assert_eq!(changes.len(), 1);
    assert!(changes[0].source_visible);
    assert!(!el.is_visible());
    assert_eq!(el.host().visibility_writes(), &[Visibility::Gone]);
}

#[test]
fn test_hide_offsets_move_monotonically() {
    let mut el = shown(Direction::Left);
    el.hide().unwrap();
    run_to_completion(&mut el);

    let lefts: Vec<i32> = el.host().margin_writes().iter().map(|m| m.left).collect();
    assert_eq!(lefts.first(), Some(&0));
    assert_eq!(lefts.last(), Some(&-WIDTH));
    assert!(lefts.windows(2).all(|w| w[1] <= w[0]), "{lefts:?}");
    assert!(lefts.iter().all(|v| (-WIDTH..=0).contains(v)));
    // one layout request per write
    assert_eq!(el.host().layout_requests(), lefts.len());
}

#[test]
fn test_decelerating_run_covers_most_ground_early() {
    let mut el = shown(Direction::Right);
    el.hide_with_speed(600).unwrap();
    // about half the duration
    run_frames(&mut el, 18);
    let offset = el.offset().unwrap();
    assert!(offset < -WIDTH / 2, "offset {offset}");
}

#[test]
fn test_extent_is_measured_at_run_start() {
    let mut el = shown(Direction::Left);
    el.hide().unwrap();
    run_to_completion(&mut el);
    assert_eq!(el.offset(), Some(-WIDTH));

    el.show().unwrap();
    run_to_completion(&mut el);
    el.host_mut().resize(320, HEIGHT);

    el.hide().unwrap();
    run_to_completion(&mut el);
    assert_eq!(el.offset(), Some(-320));
}

#[test]
fn test_direction_change_does_not_redirect_running_run() {
    let mut el = shown(Direction::Left);
    el.hide().unwrap();
    el.set_direction(Direction::Top);
    run_to_completion(&mut el);

    assert_eq!(el.host().margins().left, -WIDTH);
    assert_eq!(el.host().margins().top, 0);
}

#[test]
fn test_configured_default_speed() {
    let mut el = SwipeToHideElement::new(
        "panel",
        MockHost::new(WIDTH, HEIGHT),
        SwipeConfig::new()
            .direction(Direction::Bottom)
            .default_speed_ms(0),
    );
    el.hide().unwrap();
    assert_eq!(run_to_completion(&mut el), 1);
    assert_eq!(el.offset(), Some(-HEIGHT));
}

#[test]
fn test_configured_easing_shapes_run() {
    let offset_at_half_time = |easing: EasingFunction| {
        let mut el = SwipeToHideElement::new(
            "panel",
            MockHost::new(WIDTH, HEIGHT),
            SwipeConfig::new()
                .direction(Direction::Left)
                .default_speed_ms(600)
                .easing(easing),
        );
        el.hide().unwrap();
        run_frames(&mut el, 18);
        el.offset().unwrap()
    };

    let ease_in = offset_at_half_time(EasingFunction::EaseIn);
    let linear = offset_at_half_time(EasingFunction::Linear);
    let cubic_out = offset_at_half_time(EasingFunction::CubicOut);

    // Slow starts lag behind linear, fast starts lead it.
    assert!(ease_in > linear, "{ease_in} vs {linear}");
    assert!(cubic_out < linear, "{cubic_out} vs {linear}");
    assert!(ease_in < 0);
}

#[test]
fn test_dropped_listener_is_skipped() {
    let mut el = shown(Direction::Right);
    let listener = RecordingListener::attach(&mut el);
    drop(listener);

    el.hide().unwrap();
    run_to_completion(&mut el);
    assert!(!el.is_visible());
}

#[test]
fn test_listener_can_be_cleared() {
    let mut el = shown(Direction::Right);
    let listener = RecordingListener::attach(&mut el);
    el.set_on_swipe_change_listener(None);

    el.hide().unwrap();
    run_to_completion(&mut el);
    assert_eq!(listener.count(), 0);
}

#[test]
fn test_closure_listener() {
    let hides = Rc::new(Cell::new(0));
    let counter: Rc<dyn SwipeChangeListener> = {
        let hides = hides.clone();
        Rc::new(move |visible: bool, _source: &dyn SwipeHideable| {
            if !visible {
                hides.set(hides.get() + 1);
            }
        })
    };

    let mut el = shown(Direction::Bottom);
    el.set_on_swipe_change_listener(Some(Rc::downgrade(&counter)));

    el.hide().unwrap();
    run_to_completion(&mut el);
    el.show().unwrap();
    run_to_completion(&mut el);
    el.hide().unwrap();
    run_to_completion(&mut el);

    assert_eq!(hides.get(), 2);
}

#[test]
fn test_shared_listener_sees_each_source() {
    let listener = RecordingListener::new();
    let as_dyn: Rc<dyn SwipeChangeListener> = listener.clone();

    let mut left = SwipeToHideElement::new(
        "left",
        MockHost::new(WIDTH, HEIGHT),
        SwipeConfig::new().direction(Direction::Left),
    );
    let mut bottom = SwipeToHideElement::new(
        "bottom",
        MockHost::new(WIDTH, HEIGHT),
        SwipeConfig::new().direction(Direction::Bottom),
    );
    left.set_on_swipe_change_listener(Some(Rc::downgrade(&as_dyn)));
    bottom.set_on_swipe_change_listener(Some(Rc::downgrade(&as_dyn)));

    left.hide().unwrap();
    bottom.hide().unwrap();
    while left.update(0.016) | bottom.update(0.016) {}

    let sources: Vec<ElementId> = listener.changes().iter().map(|c| c.source).collect();
    assert_eq!(sources.len(), 2);
    assert!(sources.contains(&ElementId::new("left")));
    assert!(sources.contains(&ElementId::new("bottom")));
}
