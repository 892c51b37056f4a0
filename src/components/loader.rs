use yew::prelude::*;

use crate::config::LOADER_EXIT_MS;
use crate::hooks::loader::LoaderPhase;

#[derive(Properties, PartialEq)]
pub struct LoaderOverlayProps {
    pub phase: LoaderPhase,
}

/// Full-screen splash with a spinning square. Fades out once loading is
/// over and renders nothing after that.
#[function_component(LoaderOverlay)]
pub fn loader_overlay(props: &LoaderOverlayProps) -> Html {
    if !props.phase.is_mounted() {
        return html! {};
    }

    let class = classes!("kodara-loader", (!props.phase.is_loading()).then(|| "exiting"));

    html! {
        <div {class} style={format!("transition: opacity {}ms ease-out;", LOADER_EXIT_MS)}>
            <div class="kodara-spinner"></div>
            <style>
                {r#"
                .kodara-loader {
                    position: fixed;
                    inset: 0;
                    background: #000;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    opacity: 1;
                }
                .kodara-loader.exiting {
                    opacity: 0;
                    pointer-events: none;
                }
                .kodara-spinner {
                    width: 5rem;
                    height: 5rem;
                    border: 4px solid #dc2626;
                    border-top-color: transparent;
                    animation: kodara-spin 1s linear infinite;
                }
                @keyframes kodara-spin {
                    from { transform: rotate(0deg); }
                    to { transform: rotate(360deg); }
                }
                "#}
            </style>
        </div>
    }
}
