use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Function, Reflect};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use super::{Crossing, IntersectionHost, Rect, RevealConfig};
use crate::error::RevealError;

const VIEWPORT_EVENTS: [&str; 2] = ["scroll", "resize"];

/// Browser host: `IntersectionObserver` when the window has one, otherwise
/// scroll/resize listeners measuring the element's bounding box.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebHost;

pub enum WebSubscription {
    Observer {
        observer: IntersectionObserver,
        _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    },
    Viewport {
        window: Window,
        listener: Closure<dyn FnMut()>,
    },
}

impl Drop for WebSubscription {
    fn drop(&mut self) {
        match self {
            WebSubscription::Observer { observer, .. } => observer.disconnect(),
            WebSubscription::Viewport { window, listener } => {
                for event in VIEWPORT_EVENTS {
                    let _ = window.remove_event_listener_with_callback(
                        event,
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        }
    }
}

impl IntersectionHost for WebHost {
    type Region = Element;
    type Subscription = WebSubscription;

    fn subscribe(
        &self,
        region: &Element,
        config: &RevealConfig,
        notify: Box<dyn FnMut(Crossing)>,
    ) -> Result<WebSubscription, RevealError> {
        let window = web_sys::window().ok_or_else(|| RevealError::Host("no window".to_string()))?;
        if has_intersection_observer(&window) {
            observe(region, config, notify)
        } else {
            log::info!("IntersectionObserver missing, measuring on scroll instead");
            watch_viewport(window, region.clone(), config, notify)
        }
    }
}

fn has_intersection_observer(window: &Window) -> bool {
    Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

fn observe(
    region: &Element,
    config: &RevealConfig,
    mut notify: Box<dyn FnMut(Crossing)>,
) -> Result<WebSubscription, RevealError> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                notify(Crossing {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                });
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold()));
    options.set_root_margin(&config.root_margin().to_string());

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|err| RevealError::Host(format!("{:?}", err)))?;
    observer.observe(region);

    Ok(WebSubscription::Observer {
        observer,
        _callback: callback,
    })
}

fn watch_viewport(
    window: Window,
    region: Element,
    config: &RevealConfig,
    mut notify: Box<dyn FnMut(Crossing)>,
) -> Result<WebSubscription, RevealError> {
    let margin = *config.root_margin();
    let listener = {
        let window = window.clone();
        Closure::<dyn FnMut()>::new(move || {
            let width = window.inner_width().ok().and_then(|w| w.as_f64());
            let height = window.inner_height().ok().and_then(|h| h.as_f64());
            let (Some(width), Some(height)) = (width, height) else {
                return;
            };
            let root = margin.apply(Rect::new(0.0, 0.0, width, height));
            let bounds = region.get_bounding_client_rect();
            let target = Rect::new(bounds.x(), bounds.y(), bounds.width(), bounds.height());
            notify(Crossing::measure(&target, &root));
        })
    };

    // Built before registering so a failed registration still unregisters on drop.
    let subscription = WebSubscription::Viewport { window, listener };
    if let WebSubscription::Viewport { window, listener } = &subscription {
        for event in VIEWPORT_EVENTS {
            window
                .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
                .map_err(|err| RevealError::Host(format!("{:?}", err)))?;
        }

        // Initial check
        let _ = listener
            .as_ref()
            .unchecked_ref::<Function>()
            .call0(&JsValue::NULL);
    }
    Ok(subscription)
}
