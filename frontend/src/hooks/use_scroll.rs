use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Event;
use yew::prelude::*;
use yew_hooks::{use_event_with_window, use_unmount};

use super::dom::{prefers_reduced_motion, viewport_sample, AnimationFrame};
use crate::motion::frame::FrameGate;
use crate::motion::scroll::{parallax_offset, scroll_progress, FadeScale, ViewportSample};

#[derive(Default)]
struct Sampler {
    gate: FrameGate,
    frame: Option<AnimationFrame>,
}

fn schedule_sample(sampler: &Rc<RefCell<Sampler>>, setter: UseStateSetter<ViewportSample>) {
    if !sampler.borrow_mut().gate.request() {
        return;
    }
    let in_frame = sampler.clone();
    let frame = AnimationFrame::request(move |_timestamp| {
        in_frame.borrow_mut().gate.begin_frame();
        if let Some(sample) = viewport_sample() {
            setter.set(sample);
        }
    });

    let mut sampler = sampler.borrow_mut();
    if frame.is_none() {
        // no window to sample from; let the next event try again
        sampler.gate.cancel();
    }
    sampler.frame = frame;
}

/// Latest viewport sample, refreshed at most once per frame on scroll and
/// resize. An inactive sampler keeps its initial value.
#[hook]
fn use_viewport_sample(active: bool) -> ViewportSample {
    let sample = use_state_eq(|| viewport_sample().unwrap_or_default());
    let sampler = use_mut_ref(Sampler::default);

    let schedule = {
        let sampler = sampler.clone();
        let setter = sample.setter();
        move || {
            if active {
                schedule_sample(&sampler, setter.clone());
            }
        }
    };

    {
        let schedule = schedule.clone();
        use_event_with_window("scroll", move |_: Event| schedule());
    }
    {
        let schedule = schedule.clone();
        use_event_with_window("resize", move |_: Event| schedule());
    }
    // one sample after the first layout
    use_effect_with_deps(
        move |_| {
            schedule();
            || ()
        },
        (),
    );
    use_unmount(move || {
        let mut sampler = sampler.borrow_mut();
        sampler.gate.cancel();
        sampler.frame.take();
    });

    *sample
}

/// Percentage of the document scrolled, 0 to 100.
#[hook]
pub fn use_scroll_progress() -> f64 {
    scroll_progress(use_viewport_sample(true))
}

/// Vertical offset in pixels for a layer moving at `speed` times the scroll.
#[hook]
pub fn use_parallax(speed: f64) -> f64 {
    parallax_offset(use_viewport_sample(true).scroll_y, speed)
}

#[hook]
pub fn use_scroll_fade() -> FadeScale {
    let reduced_motion = *use_state(prefers_reduced_motion);
    let sample = use_viewport_sample(!reduced_motion);
    FadeScale::for_sample(sample, reduced_motion)
}
