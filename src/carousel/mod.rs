//! Two-item project carousel with a timed transition lock.
//!
//! A request locks the carousel immediately and schedules the index change
//! for after the settling delay. Requests arriving while locked are dropped.
//! The scheduled commit holds only a weak reference plus the generation it was
//! scheduled under, so a commit that fires after teardown does nothing.

use std::cell::{Cell, RefCell};
use std::num::NonZeroUsize;
use std::rc::{Rc, Weak};

pub mod hook;
pub mod scheduler;
pub mod state;

pub use hook::use_carousel;
pub use scheduler::{Scheduler, TimeoutScheduler};
pub use state::{CarouselState, Step};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Request {
    Scheduled,
    Ignored,
}

type Listener = Box<dyn Fn(CarouselState)>;

struct Shared {
    len: NonZeroUsize,
    state: Cell<CarouselState>,
    generation: Cell<u64>,
    live: Cell<bool>,
    listener: RefCell<Option<Listener>>,
}

impl Shared {
    fn publish(&self, state: CarouselState) {
        self.state.set(state);
        if let Some(listener) = self.listener.borrow().as_ref() {
            listener(state);
        }
    }

    fn commit(&self, step: Step, generation: u64) {
        if !self.live.get() || self.generation.get() != generation {
            log::debug!("dropping stale carousel commit from generation {}", generation);
            return;
        }
        self.publish(self.state.get().committed(step, self.len));
    }
}

pub struct Carousel<S: Scheduler> {
    shared: Rc<Shared>,
    scheduler: S,
    settle_delay_ms: u32,
}

impl<S: Scheduler> Carousel<S> {
    pub fn new(len: NonZeroUsize, scheduler: S, settle_delay_ms: u32) -> Self {
        if len.get() == 1 {
            log::warn!("carousel has a single item; both slots will show it");
        } else {
            log::debug!("carousel mounted over {} items, settling in {}ms", len, settle_delay_ms);
        }
        Self {
            shared: Rc::new(Shared {
                len,
                state: Cell::new(CarouselState::default()),
                generation: Cell::new(0),
                live: Cell::new(true),
                listener: RefCell::new(None),
            }),
            scheduler,
            settle_delay_ms,
        }
    }

    /// Replaces the change listener. Called after every lock and commit.
    pub fn subscribe(&self, listener: impl Fn(CarouselState) + 'static) {
        *self.shared.listener.borrow_mut() = Some(Box::new(listener));
    }

    pub fn state(&self) -> CarouselState {
        self.shared.state.get()
    }

    pub fn window(&self) -> [usize; 2] {
        self.state().window(self.shared.len)
    }

    pub fn advance(&self) -> Request {
        self.request(Step::Forward)
    }

    pub fn retreat(&self) -> Request {
        self.request(Step::Backward)
    }

    /// Invalidates any pending commit and silences the listener. Further
    /// requests are ignored.
    pub fn teardown(&self) {
        self.shared.live.set(false);
        self.shared.generation.set(self.shared.generation.get() + 1);
        self.shared.listener.borrow_mut().take();
    }

    fn request(&self, step: Step) -> Request {
        let state = self.state();
        if state.is_animating || !self.shared.live.get() {
            log::debug!("carousel busy, ignoring {:?}", step);
            return Request::Ignored;
        }

        self.shared.publish(state.locked());

        let shared: Weak<Shared> = Rc::downgrade(&self.shared);
        let generation = self.shared.generation.get();
        self.scheduler.schedule(
            self.settle_delay_ms,
            Box::new(move || {
                if let Some(shared) = shared.upgrade() {
                    shared.commit(step, generation);
                }
            }),
        );
        Request::Scheduled
    }
}
