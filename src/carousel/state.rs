use std::num::NonZeroUsize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

/// Index of the first displayed item plus the transition lock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarouselState {
    pub current_index: usize,
    pub is_animating: bool,
}

impl CarouselState {
    /// Indices of the two displayed items. Wraps cyclically.
    pub fn window(&self, len: NonZeroUsize) -> [usize; 2] {
        let len = len.get();
        let first = self.current_index % len;
        [first, (first + 1) % len]
    }

    pub fn controls_enabled(&self) -> bool {
        !self.is_animating
    }

    pub fn locked(self) -> Self {
        Self {
            is_animating: true,
            ..self
        }
    }

    /// Moves the index one step and releases the lock in the same update.
    pub fn committed(self, step: Step, len: NonZeroUsize) -> Self {
        let len = len.get();
        let current_index = match step {
            Step::Forward => (self.current_index + 1) % len,
            Step::Backward => (self.current_index + len - 1) % len,
        };
        Self {
            current_index,
            is_animating: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn len(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn window_wraps_at_the_end() {
        let state = CarouselState {
            current_index: 2,
            is_animating: false,
        };
        assert_eq!(state.window(len(3)), [2, 0]);
    }

    #[test]
    fn single_item_window_repeats() {
        assert_eq!(CarouselState::default().window(len(1)), [0, 0]);
    }

    #[test]
    fn commit_wraps_both_ways() {
        let start = CarouselState::default().locked();
        assert_eq!(start.committed(Step::Backward, len(3)).current_index, 2);
        let last = CarouselState {
            current_index: 2,
            is_animating: true,
        };
        let next = last.committed(Step::Forward, len(3));
        assert_eq!(next.current_index, 0);
        assert!(!next.is_animating);
    }

    #[test]
    fn lock_disables_controls() {
        let state = CarouselState::default();
        assert!(state.controls_enabled());
        assert!(!state.locked().controls_enabled());
        assert_eq!(state.locked().current_index, 0);
    }
}
