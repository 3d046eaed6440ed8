//! Swipe demo - four panels, one per edge, driven headlessly.
//!
//! Each panel has a toggle "button" whose label follows the panel's
//! committed visibility. The demo clicks every button, flings the bottom
//! sheet away with a scripted drag, and interrupts a running hide with a
//! pointer press, printing labels and offsets as it goes.
//!
//! Run with `RUST_LOG=swipehide_ui=trace` to see every tick. Frames are
//! also published to `puffin_viewer` on the default puffin address.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use swipehide_core::logging;
use swipehide_core::profiling::{self, ProfilingBackend, init_profiling};
use swipehide_test_utils::{GestureScript, MockHost};
use swipehide_ui::prelude::*;
use swipehide_winit::FrameTime;

const FRAME: Duration = Duration::from_micros(16_667);

struct Panel {
    name: &'static str,
    element: SwipeToHideElement<MockHost>,
    label: Rc<RefCell<String>>,
    // Elements hold listeners weakly.
    _listener: Rc<dyn SwipeChangeListener>,
}

impl Panel {
    fn new(name: &'static str, direction: Direction, width: i32, height: i32) -> Self {
        let mut element = SwipeToHideElement::new(
            name,
            MockHost::new(width, height),
            SwipeConfig::new().direction(direction),
        );

        let label = Rc::new(RefCell::new(format!("Hide {name}")));
        let listener: Rc<dyn SwipeChangeListener> = {
            let label = label.clone();
            Rc::new(move |visible: bool, source: &dyn SwipeHideable| {
                let verb = if visible { "Hide" } else { "Show" };
                *label.borrow_mut() = format!("{verb} {}", source.direction().name());
            })
        };
        element.set_on_swipe_change_listener(Some(Rc::downgrade(&listener)));

        Self {
            name,
            element,
            label,
            _listener: listener,
        }
    }

    /// What the toggle button does on click.
    fn click(&mut self) -> SwipeResult<()> {
        if self.element.is_visible() {
            self.element.hide()
        } else {
            self.element.show()
        }
    }

    fn report(&self) {
        println!(
            "  {:<7} visible={:<5} offset={:>5}  button=\"{}\"",
            self.name,
            self.element.is_visible(),
            self.element.offset().unwrap_or_default(),
            self.label.borrow()
        );
    }
}

fn run_until_settled(panels: &mut [Panel], time: &mut FrameTime) {
    loop {
        profiling::new_frame();
        time.advance(FRAME);
        let dt = time.delta_seconds();
        let mut busy = false;
        for panel in panels.iter_mut() {
            busy |= panel.element.update(dt);
        }
        if !busy {
            break;
        }
    }
}

fn report(title: &str, panels: &[Panel], time: &FrameTime) {
    println!(
        "{title} (frame {}, {:.3}s)",
        time.frame_count,
        time.elapsed_seconds()
    );
    for panel in panels {
        panel.report();
    }
}

fn main() -> SwipeResult<()> {
    logging::init();
    init_profiling(ProfilingBackend::PuffinHttp);

    let mut time = FrameTime::new();
    let mut panels = vec![
        Panel::new("left", Direction::Left, 240, 800),
        Panel::new("top", Direction::Top, 480, 120),
        Panel::new("right", Direction::Right, 240, 800),
        Panel::new("bottom", Direction::Bottom, 480, 300),
    ];
    report("Start", &panels, &time);

    for panel in &mut panels {
        panel.click()?;
    }
    run_until_settled(&mut panels, &mut time);
    report("After clicking every button", &panels, &time);

    for panel in &mut panels {
        panel.click()?;
    }
    run_until_settled(&mut panels, &mut time);
    report("After clicking again", &panels, &time);

    // Fling the bottom sheet down with the pointer.
    let bottom = &mut panels[3];
    GestureScript::at(240.0, 520.0)
        .drag_by(0.0, 90.0, 6)
        .up()
        .play(&mut bottom.element);
    run_until_settled(&mut panels, &mut time);
    report("After dragging the bottom sheet away", &panels, &time);

    // Start hiding the left drawer, then grab it halfway and pull it back.
    let left = &mut panels[0];
    left.element.hide()?;
    for _ in 0..6 {
        profiling::new_frame();
        time.advance(FRAME);
        left.element.update(time.delta_seconds());
    }
    let grabbed_at = left.element.offset().unwrap_or_default();
    println!("Grabbed the left drawer at offset {grabbed_at}");
    GestureScript::at(200.0, 400.0)
        .drag_by(40.0, 0.0, 4)
        .up()
        .play(&mut left.element);
    run_until_settled(&mut panels, &mut time);
    report("After pulling the left drawer back", &panels, &time);

    Ok(())
}
