use std::num::NonZeroUsize;

use yew::prelude::*;
use yew_hooks::prelude::use_unmount;

use super::{Carousel, CarouselState, TimeoutScheduler};

pub struct UseCarouselHandle {
    pub state: CarouselState,
    pub window: [usize; 2],
    pub advance: Callback<()>,
    pub retreat: Callback<()>,
}

/// Carousel over `len` items, mounted for the lifetime of the calling
/// component. `len` and `settle_delay_ms` are read on first render only.
#[hook]
pub fn use_carousel(len: NonZeroUsize, settle_delay_ms: u32) -> UseCarouselHandle {
    let state = use_state_eq(CarouselState::default);

    let carousel = {
        let setter = state.setter();
        use_memo(
            move |_| {
                let carousel = Carousel::new(len, TimeoutScheduler, settle_delay_ms);
                carousel.subscribe(move |next| setter.set(next));
                carousel
            },
            (),
        )
    };

    {
        let carousel = carousel.clone();
        use_unmount(move || carousel.teardown());
    }

    let advance = {
        let carousel = carousel.clone();
        Callback::from(move |_| {
            carousel.advance();
        })
    };
    let retreat = {
        let carousel = carousel.clone();
        Callback::from(move |_| {
            carousel.retreat();
        })
    };

    UseCarouselHandle {
        state: *state,
        window: state.window(len),
        advance,
        retreat,
    }
}
