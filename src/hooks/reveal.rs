use std::fmt::Debug;

use js_sys::Array;
use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;

/// One-way switch: flips to revealed the first time enough of the element
/// is visible and stays there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    revealed: bool,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, revealed: false }
    }

    /// Feed one intersection sample. Returns true only on the flip.
    pub fn observe(&mut self, ratio: f64, intersecting: bool) -> bool {
        if self.revealed || !intersecting || ratio < self.threshold {
            return false;
        }
        self.revealed = true;
        true
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Whether the element behind `node` has been on screen (at least
/// [`REVEAL_THRESHOLD`] of it) at any point since mount.
#[hook]
pub fn use_reveal(node: NodeRef, name: &'static str) -> bool {
    let revealed = use_state(|| false);

    {
        let setter = revealed.setter();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut latch = RevealLatch::new(REVEAL_THRESHOLD);
                let on_reveal = setter.clone();
                let callback: ObserverCallback = Closure::wrap(Box::new(
                    move |entries: Array, observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                                continue;
                            };
                            if latch.observe(entry.intersection_ratio(), entry.is_intersecting()) {
                                info!("Section {} revealed", name);
                                on_reveal.set(true);
                                observer.disconnect();
                                break;
                            }
                        }
                    },
                ) as Box<dyn FnMut(Array, IntersectionObserver)>);

                let (observer, reveal_now) = settle(name, observe(node, &callback));
                if reveal_now {
                    setter.set(true);
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            node,
        );
    }

    *revealed
}

fn observe(node: &NodeRef, callback: &ObserverCallback) -> Result<IntersectionObserver, JsValue> {
    let element = node
        .cast::<web_sys::Element>()
        .ok_or_else(|| JsValue::from_str("node is not mounted"))?;

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(&element);
    Ok(observer)
}

/// Observer to keep alive, and whether the section has to be shown right
/// away because nothing will ever report it visible.
fn settle<T, E: Debug>(name: &str, observed: Result<T, E>) -> (Option<T>, bool) {
    match observed {
        Ok(observer) => (Some(observer), false),
        Err(err) => {
            warn!("Revealing {} without an observer: {:?}", name, err);
            (None, true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_hidden_below_threshold() {
        let mut latch = RevealLatch::new(0.3);
        assert!(!latch.observe(0.0, false));
        assert!(!latch.observe(0.29, true));
        assert!(!latch.revealed);
    }

    #[test]
    fn flips_once_at_threshold() {
        let mut latch = RevealLatch::new(0.3);
        assert!(latch.observe(0.3, true));
        assert!(latch.revealed);
        assert!(!latch.observe(0.9, true));
    }

    #[test]
    fn never_reverts_after_leaving_viewport() {
        let mut latch = RevealLatch::new(0.3);
        latch.observe(0.5, true);
        latch.observe(0.0, false);
        latch.observe(0.1, true);
        assert!(latch.revealed);
    }

    #[test]
    fn ratio_without_intersection_is_ignored() {
        // Browsers can report a stale ratio on the exit entry
        let mut latch = RevealLatch::new(0.3);
        assert!(!latch.observe(0.4, false));
        assert!(!latch.revealed);
    }

    #[test]
    fn working_observer_defers_reveal() {
        let (observer, reveal_now) = settle::<u8, &str>("services", Ok(7));
        assert_eq!(observer, Some(7));
        assert!(!reveal_now);
    }

    #[test]
    fn missing_observer_reveals_immediately() {
        let (observer, reveal_now) = settle::<u8, &str>("team", Err("node is not mounted"));
        assert_eq!(observer, None);
        assert!(reveal_now);
    }
}
