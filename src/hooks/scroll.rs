use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

fn current_scroll_y(window: &web_sys::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Live vertical scroll offset of the window, in CSS pixels.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state(|| 0.0_f64);

    {
        let setter = scroll_y.setter();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.as_ref().and_then(|window| {
                    // Page may be restored mid-scroll
                    setter.set(current_scroll_y(window));

                    let win = window.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        setter.set(current_scroll_y(&win));
                    }) as Box<dyn FnMut()>);

                    match window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    ) {
                        Ok(()) => Some(callback),
                        Err(err) => {
                            warn!("Could not listen to scroll events: {:?}", err);
                            None
                        }
                    }
                });

                move || {
                    if let (Some(window), Some(callback)) = (window, listener) {
                        if let Err(err) = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            warn!("Could not remove scroll listener: {:?}", err);
                        }
                    }
                }
            },
            (),
        );
    }

    *scroll_y
}
