use web_sys::Element;
use yew::prelude::*;

use super::host::WebHost;
use super::{RevealConfig, RevealTrigger};

pub struct UseRevealHandle {
    pub node_ref: NodeRef,
    pub is_visible: bool,
}

/// Attach `node_ref` to the element to observe. `is_visible` latches true the
/// first time the element crosses the configured threshold.
#[hook]
pub fn use_reveal(config: RevealConfig) -> UseRevealHandle {
    let node_ref = use_node_ref();
    let is_visible = use_state_eq(|| false);

    {
        let node_ref = node_ref.clone();
        let is_visible = is_visible.clone();
        use_effect_with_deps(
            move |config| {
                // Settled regions ignore later config changes.
                let trigger = node_ref.cast::<Element>().and_then(|element| {
                    let setter = is_visible.setter();
                    let mounted = RevealTrigger::remount(
                        &WebHost,
                        &element,
                        config,
                        *is_visible,
                        move || setter.set(true),
                    )?;
                    match mounted {
                        Ok(trigger) => Some(trigger),
                        Err(err) => {
                            log::warn!("reveal disabled for element: {}", err);
                            None
                        }
                    }
                });
                move || drop(trigger)
            },
            config,
        );
    }

    UseRevealHandle {
        node_ref,
        is_visible: *is_visible,
    }
}
