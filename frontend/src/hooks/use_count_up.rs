use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;
use yew_hooks::use_unmount;

use super::dom::{prefers_reduced_motion, AnimationFrame, ViewportObserver};
use crate::motion::count_up::{CountUp, CountUpOptions, CountUpState, FrameOutcome, StartOutcome};
use crate::motion::visibility::OneShotTrigger;

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

#[derive(Clone)]
pub struct UseCountUpHandle {
    state: CountUpState,
    controller: Rc<RefCell<CountUp>>,
    frame: FrameSlot,
    display: UseStateSetter<CountUpState>,
}

impl UseCountUpHandle {
    pub fn count(&self) -> f64 {
        self.state.count
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating
    }

    pub fn start(&self) {
        let outcome = self.controller.borrow_mut().start(prefers_reduced_motion());
        match outcome {
            StartOutcome::AlreadyRunning => {}
            StartOutcome::Jumped => self.display.set(self.controller.borrow().state()),
            StartOutcome::Scheduled(generation) => {
                self.display.set(self.controller.borrow().state());
                request_tick(Rc::new(Ticker {
                    controller: self.controller.clone(),
                    frame: self.frame.clone(),
                    display: self.display.clone(),
                    generation,
                }));
            }
        }
    }

    pub fn reset(&self) {
        self.controller.borrow_mut().reset();
        self.frame.borrow_mut().take();
        self.display.set(self.controller.borrow().state());
    }
}

struct Ticker {
    controller: Rc<RefCell<CountUp>>,
    frame: FrameSlot,
    display: UseStateSetter<CountUpState>,
    generation: u64,
}

fn request_tick(ticker: Rc<Ticker>) {
    let slot = ticker.frame.clone();
    let frame = AnimationFrame::request(move |timestamp| tick(ticker, timestamp));
    *slot.borrow_mut() = frame;
}

fn tick(ticker: Rc<Ticker>, timestamp: f64) {
    let outcome = ticker
        .controller
        .borrow_mut()
        .frame(ticker.generation, timestamp);
    match outcome {
        FrameOutcome::Stale => {}
        FrameOutcome::Running(_) => {
            ticker.display.set(ticker.controller.borrow().state());
            request_tick(ticker);
        }
        FrameOutcome::Finished(_) => {
            ticker.display.set(ticker.controller.borrow().state());
        }
    }
}

/// Animates a number from `options.start` to `options.end` once `start` is
/// called.
#[hook]
pub fn use_count_up(options: CountUpOptions) -> UseCountUpHandle {
    let controller = use_mut_ref(|| CountUp::new(options));
    let frame: FrameSlot = use_mut_ref(|| None);
    let display = use_state(|| controller.borrow().state());

    {
        let controller = controller.clone();
        let display = display.setter();
        use_effect_with_deps(
            move |options| {
                controller.borrow_mut().set_options(*options);
                display.set(controller.borrow().state());
                || ()
            },
            options,
        );
    }

    {
        let frame = frame.clone();
        use_unmount(move || {
            frame.borrow_mut().take();
        });
    }

    UseCountUpHandle {
        state: *display,
        controller,
        frame,
        display: display.setter(),
    }
}

/// Count-up that starts the first time the returned node is at least
/// `threshold` visible. Scrolling away and back does not restart it.
#[hook]
pub fn use_count_up_on_view(options: CountUpOptions, threshold: f64) -> (NodeRef, UseCountUpHandle) {
    let node = use_node_ref();
    let handle = use_count_up(options);
    let trigger = use_mut_ref(|| OneShotTrigger::new(threshold));

    {
        let handle = handle.clone();
        let trigger = trigger.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node
                    .cast::<Element>()
                    .filter(|_| !trigger.borrow().has_fired())
                    .and_then(|element| {
                        let threshold = trigger.borrow().threshold();
                        ViewportObserver::observe(&element, threshold, move |is_intersecting, ratio| {
                            let fired = trigger.borrow_mut().observe(is_intersecting, ratio);
                            if fired {
                                handle.start();
                            }
                            fired
                        })
                    });
                move || drop(observer)
            },
            node.clone(),
        );
    }

    (node, handle)
}
