use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

use crate::config::{LOADER_EXIT_MS, LOADING_DELAY_MS};

/// Lifecycle of the splash overlay. Only ever moves forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoaderPhase {
    Loading,
    Exiting,
    Hidden,
}

impl LoaderPhase {
    /// The phase that follows this one and how long to wait before it.
    pub fn next(self) -> Option<(LoaderPhase, u32)> {
        match self {
            LoaderPhase::Loading => Some((LoaderPhase::Exiting, LOADING_DELAY_MS)),
            LoaderPhase::Exiting => Some((LoaderPhase::Hidden, LOADER_EXIT_MS)),
            LoaderPhase::Hidden => None,
        }
    }

    pub fn is_loading(self) -> bool {
        self == LoaderPhase::Loading
    }

    pub fn is_mounted(self) -> bool {
        self != LoaderPhase::Hidden
    }
}

/// Drives the overlay through its phases. Each step is a single
/// `Timeout`; dropping it in the effect cleanup cancels the pending step,
/// so nothing fires after the page is torn down.
#[hook]
pub fn use_loader() -> LoaderPhase {
    let phase = use_state(|| LoaderPhase::Loading);

    {
        let setter = phase.setter();
        use_effect_with_deps(
            move |current: &LoaderPhase| {
                let pending = current.next().map(|(next, delay)| {
                    Timeout::new(delay, move || {
                        if next == LoaderPhase::Exiting {
                            info!("Loading finished after {}ms", delay);
                        }
                        setter.set(next);
                    })
                });
                move || drop(pending)
            },
            *phase,
        );
    }

    *phase
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk() -> Vec<LoaderPhase> {
        let mut phases = vec![LoaderPhase::Loading];
        while let Some((next, _)) = phases.last().and_then(|p| p.next()) {
            phases.push(next);
        }
        phases
    }

    #[test]
    fn loading_ends_after_fixed_delay() {
        assert_eq!(
            LoaderPhase::Loading.next(),
            Some((LoaderPhase::Exiting, 2_000))
        );
    }

    #[test]
    fn loading_flag_drops_exactly_once() {
        let phases = walk();
        assert_eq!(
            phases,
            vec![LoaderPhase::Loading, LoaderPhase::Exiting, LoaderPhase::Hidden]
        );
        let flips = phases
            .windows(2)
            .filter(|w| w[0].is_loading() != w[1].is_loading())
            .count();
        assert_eq!(flips, 1);
        assert!(phases.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn hidden_is_terminal() {
        assert_eq!(LoaderPhase::Hidden.next(), None);
        assert!(!LoaderPhase::Hidden.is_mounted());
        assert!(LoaderPhase::Exiting.is_mounted());
        assert!(!LoaderPhase::Exiting.is_loading());
    }
}
