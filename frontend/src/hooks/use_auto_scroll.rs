use gloo_timers::callback::Interval;
use yew::prelude::*;

use super::dom::prefers_reduced_motion;
use crate::motion::carousel::{CarouselAction, CarouselState};

#[derive(Clone, PartialEq)]
pub struct UseAutoScrollHandle {
    state: UseReducerHandle<CarouselState>,
    item_count: usize,
}

impl UseAutoScrollHandle {
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn is_paused(&self) -> bool {
        self.state.is_paused
    }

    pub fn go_to_next(&self) {
        self.state.dispatch(CarouselAction::Next {
            item_count: self.item_count,
        });
    }

    pub fn go_to_previous(&self) {
        self.state.dispatch(CarouselAction::Previous {
            item_count: self.item_count,
        });
    }

    pub fn go_to_slide(&self, index: usize) {
        self.state.dispatch(CarouselAction::GoTo(index));
    }

    pub fn pause(&self) {
        self.state.dispatch(CarouselAction::Pause);
    }

    pub fn resume(&self) {
        self.state.dispatch(CarouselAction::Resume);
    }

    pub fn toggle(&self) {
        self.state.dispatch(CarouselAction::Toggle);
    }
}

/// Advances a carousel index every `interval_ms` while it is playing, not
/// hovered, and has more than one item.
#[hook]
pub fn use_auto_scroll(item_count: usize, interval_ms: u32) -> UseAutoScrollHandle {
    let state = use_reducer(CarouselState::default);

    {
        let dispatcher = state.dispatcher();
        let deps = (state.is_playing, state.is_paused, item_count, interval_ms);
        // Rebuilt on every dependency change; the old interval is dropped first.
        use_effect_with_deps(
            move |&(is_playing, is_paused, item_count, interval_ms)| {
                let policy = CarouselState {
                    current_index: 0,
                    is_playing,
                    is_paused,
                };
                let interval = policy
                    .should_advance(item_count, prefers_reduced_motion())
                    .then(|| {
                        Interval::new(interval_ms, move || {
                            dispatcher.dispatch(CarouselAction::Next { item_count });
                        })
                    });
                move || drop(interval)
            },
            deps,
        );
    }

    UseAutoScrollHandle { state, item_count }
}
