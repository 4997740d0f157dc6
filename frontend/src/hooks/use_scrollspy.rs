use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{window, Event};
use yew::prelude::*;
use yew_hooks::{use_event_with_window, use_unmount};

use super::dom::{section_top, AnimationFrame};
use crate::motion::frame::FrameGate;
use crate::motion::scrollspy::ScrollSpy;

struct SpyState {
    spy: ScrollSpy,
    gate: FrameGate,
    frame: Option<AnimationFrame>,
}

fn scan_now(state: &Rc<RefCell<SpyState>>, active: &UseStateSetter<Option<String>>) {
    let scroll_y = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
    let mut state = state.borrow_mut();
    if state.spy.scan(scroll_y, section_top) {
        active.set(state.spy.active().map(str::to_owned));
    }
}

/// Selector of the section the reader is in, e.g. `Some("#pricing")`.
///
/// `section_ids` are CSS selectors in document order; a section is active
/// once its top edge is within `offset` pixels of the top of the viewport.
#[hook]
pub fn use_scrollspy(section_ids: Vec<String>, offset: f64) -> Option<String> {
    let active = use_state_eq(|| None::<String>);
    let state = {
        let section_ids = section_ids.clone();
        use_mut_ref(move || SpyState {
            spy: ScrollSpy::new(section_ids, offset),
            gate: FrameGate::new(),
            frame: None,
        })
    };

    {
        let state = state.clone();
        let setter = active.setter();
        use_event_with_window("scroll", move |_: Event| {
            if !state.borrow_mut().gate.request() {
                return;
            }
            let in_frame = state.clone();
            let setter = setter.clone();
            let frame = AnimationFrame::request(move |_timestamp| {
                in_frame.borrow_mut().gate.begin_frame();
                scan_now(&in_frame, &setter);
            });
            let mut state = state.borrow_mut();
            if frame.is_none() {
                state.gate.cancel();
            }
            state.frame = frame;
        });
    }

    // Runs on mount and whenever the watched sections change.
    {
        let state = state.clone();
        let setter = active.setter();
        use_effect_with_deps(
            move |(section_ids, offset): &(Vec<String>, f64)| {
                state
                    .borrow_mut()
                    .spy
                    .reconfigure(section_ids.clone(), *offset);
                scan_now(&state, &setter);
                || ()
            },
            (section_ids, offset),
        );
    }

    use_unmount(move || {
        let mut state = state.borrow_mut();
        state.gate.cancel();
        state.frame.take();
    });

    (*active).clone()
}
