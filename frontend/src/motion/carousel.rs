use std::rc::Rc;
use yew::Reducible;

pub const DEFAULT_INTERVAL_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    pub current_index: usize,
    /// Play intent, flipped by the play/pause control.
    pub is_playing: bool,
    /// Hover pause, independent of the play intent.
    pub is_paused: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    Next { item_count: usize },
    Previous { item_count: usize },
    GoTo(usize),
    Pause,
    Resume,
    Toggle,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self {
            current_index: 0,
            is_playing: true,
            is_paused: false,
        }
    }
}

impl CarouselState {
    pub fn next(self, item_count: usize) -> Self {
        if item_count == 0 {
            return self;
        }
        // go_to may have left the index out of range
        let current = self.current_index % item_count;
        Self {
            current_index: (current + 1) % item_count,
            ..self
        }
    }

    pub fn previous(self, item_count: usize) -> Self {
        if item_count == 0 {
            return self;
        }
        // go_to may have left the index out of range
        let current = self.current_index % item_count;
        Self {
            current_index: (current + item_count - 1) % item_count,
            ..self
        }
    }

    pub fn go_to(self, index: usize) -> Self {
        Self {
            current_index: index,
            ..self
        }
    }

    pub fn apply(self, action: CarouselAction) -> Self {
        match action {
            CarouselAction::Next { item_count } => self.next(item_count),
            CarouselAction::Previous { item_count } => self.previous(item_count),
            CarouselAction::GoTo(index) => self.go_to(index),
            CarouselAction::Pause => Self { is_paused: true, ..self },
            CarouselAction::Resume => Self { is_paused: false, ..self },
            CarouselAction::Toggle => Self {
                is_playing: !self.is_playing,
                ..self
            },
        }
    }

    /// Whether a recurring advance timer may run for this state.
    pub fn should_advance(&self, item_count: usize, reduced_motion: bool) -> bool {
        self.is_playing && !self.is_paused && item_count > 1 && !reduced_motion
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_cycles_through_every_index() {
        for item_count in 2..8 {
            let mut state = CarouselState::default();
            let mut seen = Vec::new();
            for _ in 0..item_count {
                seen.push(state.current_index);
                let before = state.current_index;
                state = state.next(item_count);
                assert_eq!(state.current_index, (before + 1) % item_count);
            }
            seen.sort_unstable();
            assert_eq!(seen, (0..item_count).collect::<Vec<_>>());
            assert_eq!(state.current_index, 0);
        }
    }

    #[test]
    fn previous_wraps_to_last() {
        let state = CarouselState::default().previous(4);
        assert_eq!(state.current_index, 3);
        assert_eq!(state.previous(4).current_index, 2);
    }

    #[test]
    fn single_or_empty_carousel_never_advances() {
        for item_count in 0..=1 {
            let state = CarouselState::default();
            assert!(!state.should_advance(item_count, false));
            assert_eq!(state.next(item_count).current_index, 0);
            assert_eq!(state.previous(item_count).current_index, 0);
        }
    }

    #[test]
    fn go_to_does_not_clamp() {
        let state = CarouselState::default().go_to(42);
        assert_eq!(state.current_index, 42);
        assert_eq!(state.next(5).current_index, 3);
    }

    #[test]
    fn next_from_largest_index_wraps_without_overflow() {
        let state = CarouselState::default().go_to(usize::MAX);
        assert_eq!(state.next(3).current_index, (usize::MAX % 3 + 1) % 3);
        assert_eq!(state.previous(3).current_index, (usize::MAX % 3 + 2) % 3);
    }

    #[test]
    fn pause_and_toggle_are_separate_flags() {
        let state = CarouselState::default().apply(CarouselAction::Pause);
        assert!(state.is_playing);
        assert!(!state.should_advance(3, false));

        let state = state.apply(CarouselAction::Resume);
        assert!(state.should_advance(3, false));

        let state = state.apply(CarouselAction::Toggle);
        assert!(!state.is_playing);
        assert!(!state.is_paused);
        assert!(!state.should_advance(3, false));
        assert!(state.apply(CarouselAction::Toggle).should_advance(3, false));
    }

    #[test]
    fn reduced_motion_blocks_the_timer() {
        assert!(!CarouselState::default().should_advance(5, true));
    }

    #[test]
    fn reducer_keeps_rc_when_nothing_changes() {
        let state = Rc::new(CarouselState::default());
        let reduced = state.clone().reduce(CarouselAction::Resume);
        assert!(Rc::ptr_eq(&state, &reduced));
    }
}
