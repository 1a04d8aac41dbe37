//! Scroll-triggered reveal: a one-shot latch flipped by viewport intersection.
//!
//! The host environment pushes [`Crossing`] events through an
//! [`IntersectionHost`] subscription. A [`RevealTrigger`] owns that
//! subscription for as long as its region is mounted and releases it on drop,
//! whether or not the region was ever revealed.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config;
use crate::error::RevealError;

pub mod geometry;
pub mod hook;
pub mod host;
pub mod stagger;
pub mod style;

pub use geometry::{Rect, RootMargin};
pub use hook::use_reveal;
pub use stagger::stagger_tokens;
pub use style::{Direction, RevealStyle};

/// Browsers report crossing ratios with some float noise around the threshold.
const RATIO_EPSILON: f64 = 1e-6;

#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    threshold: f64,
    root_margin: RootMargin,
}

impl RevealConfig {
    pub fn new(threshold: f64, root_margin: &str) -> Result<Self, RevealError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(RevealError::InvalidThreshold(threshold));
        }
        Ok(Self {
            threshold,
            root_margin: RootMargin::parse(root_margin)?,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn root_margin(&self) -> &RootMargin {
        &self.root_margin
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: config::REVEAL_THRESHOLD,
            root_margin: RootMargin::parse(config::REVEAL_ROOT_MARGIN).unwrap_or_default(),
        }
    }
}

/// One intersection notification for an observed region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crossing {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl Crossing {
    /// Measures `target` against an already margin-adjusted `root`.
    pub fn measure(target: &Rect, root: &Rect) -> Self {
        Self {
            is_intersecting: target.intersect(root).is_some(),
            ratio: target.intersection_ratio(root),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RevealLatch {
    threshold: f64,
    visible: bool,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, visible: false }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns true only for the crossing that reveals the region.
    pub fn observe(&mut self, crossing: Crossing) -> bool {
        if self.visible {
            return false;
        }
        if crossing.is_intersecting && crossing.ratio + RATIO_EPSILON >= self.threshold {
            self.visible = true;
            return true;
        }
        false
    }
}

/// Viewport-intersection primitive supplied by the host.
///
/// Dropping the returned subscription must stop further notifications.
pub trait IntersectionHost {
    type Region;
    type Subscription;

    fn subscribe(
        &self,
        region: &Self::Region,
        config: &RevealConfig,
        notify: Box<dyn FnMut(Crossing)>,
    ) -> Result<Self::Subscription, RevealError>;
}

pub struct RevealTrigger<H: IntersectionHost> {
    latch: Rc<RefCell<RevealLatch>>,
    _subscription: H::Subscription,
}

impl<H: IntersectionHost> RevealTrigger<H> {
    /// Starts observing `region`. `on_reveal` runs at most once.
    pub fn mount(
        host: &H,
        region: &H::Region,
        config: &RevealConfig,
        on_reveal: impl Fn() + 'static,
    ) -> Result<Self, RevealError> {
        log::debug!(
            "observing region at threshold {} margin {}",
            config.threshold(),
            config.root_margin()
        );
        let latch = Rc::new(RefCell::new(RevealLatch::new(config.threshold())));
        let notify = {
            let latch = latch.clone();
            Box::new(move |crossing: Crossing| {
                let revealed = latch.borrow_mut().observe(crossing);
                if revealed {
                    log::debug!("region revealed at ratio {:.3}", crossing.ratio);
                    on_reveal();
                }
            })
        };
        let subscription = host.subscribe(region, config, notify)?;
        Ok(Self {
            latch,
            _subscription: subscription,
        })
    }

    /// Re-observes after a config change. A region that already revealed
    /// stays settled and gets no new subscription.
    pub fn remount(
        host: &H,
        region: &H::Region,
        config: &RevealConfig,
        already_visible: bool,
        on_reveal: impl Fn() + 'static,
    ) -> Option<Result<Self, RevealError>> {
        if already_visible {
            return None;
        }
        Some(Self::mount(host, region, config, on_reveal))
    }

    pub fn is_visible(&self) -> bool {
        self.latch.borrow().is_visible()
    }
}
